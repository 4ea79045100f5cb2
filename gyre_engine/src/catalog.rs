// Copyright 2026 the Gyre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyed media sets for data-driven carousels.
//!
//! Some hosts pair the carousel with external trigger controls (an accordion
//! of services, a tab strip): activating a trigger supplies a new ordered
//! media list, and the carousel rebuilds wholesale. [`MediaCatalog`] holds
//! those per-trigger lists, tracks the single expanded trigger for
//! `aria-expanded`-style reporting, and bumps a revision counter only on
//! observable change so hosts can cheaply detect staleness.
//!
//! The catalog never drives the carousel itself; the host reads the
//! activated media and feeds it to
//! [`Carousel::swap_media`](crate::Carousel::swap_media).
//!
//! ## Minimal example
//!
//! ```
//! use gyre_engine::MediaCatalog;
//!
//! let mut catalog = MediaCatalog::new();
//! catalog.insert("events", vec!["tournament.jpg", "stage.jpg"]);
//! catalog.insert("product", vec!["modding.jpg"]);
//!
//! let media = catalog.activate(&"events").unwrap().to_vec();
//! assert_eq!(media, ["tournament.jpg", "stage.jpg"]);
//! assert!(catalog.is_expanded(&"events"));
//! assert!(!catalog.is_expanded(&"product"));
//! assert_eq!(catalog.revision(), 1);
//! ```

use alloc::vec::Vec;
use core::hash::Hash;

use hashbrown::HashMap;

/// Per-trigger media lists with a single expanded key.
#[derive(Clone, Debug)]
pub struct MediaCatalog<K, R> {
    entries: HashMap<K, Vec<R>>,
    expanded: Option<K>,
    revision: u64,
}

impl<K: Eq + Hash + Clone, R> MediaCatalog<K, R> {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            expanded: None,
            revision: 0,
        }
    }

    /// Inserts or replaces the media list for a trigger key.
    ///
    /// Returns the previous list, if any. Replacing the expanded entry's
    /// media counts as an observable change.
    pub fn insert(&mut self, key: K, media: Vec<R>) -> Option<Vec<R>> {
        let was_expanded = self.expanded.as_ref() == Some(&key);
        let previous = self.entries.insert(key, media);
        if was_expanded {
            self.revision += 1;
        }
        previous
    }

    /// Removes a trigger and its media list.
    ///
    /// Removing the expanded trigger collapses it.
    pub fn remove(&mut self, key: &K) -> Option<Vec<R>> {
        let removed = self.entries.remove(key);
        if removed.is_some() && self.expanded.as_ref() == Some(key) {
            self.expanded = None;
            self.revision += 1;
        }
        removed
    }

    /// The media list registered for a trigger.
    #[must_use]
    pub fn media(&self, key: &K) -> Option<&[R]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    /// Expands a trigger, collapsing any other, and returns its media.
    ///
    /// Unknown keys change nothing and return `None`. Re-activating the
    /// already-expanded trigger is a no-op (the revision does not move).
    pub fn activate(&mut self, key: &K) -> Option<&[R]> {
        if !self.entries.contains_key(key) {
            return None;
        }
        if self.expanded.as_ref() != Some(key) {
            self.expanded = Some(key.clone());
            self.revision += 1;
        }
        self.media(key)
    }

    /// Collapses the expanded trigger, if any.
    pub fn collapse(&mut self) {
        if self.expanded.take().is_some() {
            self.revision += 1;
        }
    }

    /// The currently expanded trigger key.
    #[must_use]
    pub fn expanded(&self) -> Option<&K> {
        self.expanded.as_ref()
    }

    /// The `aria-expanded`-style flag for one trigger.
    #[must_use]
    pub fn is_expanded(&self, key: &K) -> bool {
        self.expanded.as_ref() == Some(key)
    }

    /// Monotonic counter, bumped only on observable change.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Number of registered triggers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when no triggers are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Eq + Hash + Clone, R> Default for MediaCatalog<K, R> {
    fn default() -> Self {
        Self::new()
    }
}
