// Copyright 2026 the Gyre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Clone-padded slide sequences.
//!
//! [`SlideSequence::build`] turns an ordered list of media references into
//! the padded sequence a looping strip renders:
//!
//! ```text
//! [clone(last), real 0, real 1, ..., real N-1, clone(first)]
//! ```
//!
//! Padded indices 0 and N+1 are the clone slots; the rest range `1..=N`
//! holds the real slides. External callers only ever see *real* indices
//! (`real = padded - 1`); the clone slots are an internal seam the driving
//! state machine teleports across.

use alloc::vec::Vec;

/// One tile in the padded sequence.
///
/// Slides are created once at build time and never mutated; a changed media
/// list rebuilds the whole sequence.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Slide<R> {
    source: R,
    ordinal: usize,
    is_clone: bool,
}

impl<R> Slide<R> {
    /// The opaque media reference this slide renders.
    #[must_use]
    pub fn source(&self) -> &R {
        &self.source
    }

    /// Position of this slide in the padded sequence.
    #[must_use]
    pub fn ordinal(&self) -> usize {
        self.ordinal
    }

    /// Returns `true` for the boundary duplicates.
    ///
    /// Clones are never reported as the logically current slide.
    #[must_use]
    pub fn is_clone(&self) -> bool {
        self.is_clone
    }
}

/// An ordered, clone-padded sequence of [`Slide`]s.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SlideSequence<R> {
    slides: Vec<Slide<R>>,
    real_len: usize,
}

impl<R: Clone> SlideSequence<R> {
    /// Builds the padded sequence for an ordered media list.
    ///
    /// For `N >= 1` sources the result has `N + 2` entries: a leading clone
    /// of the last source, the sources in order, and a trailing clone of the
    /// first source. An empty input builds an empty sequence with no clones;
    /// callers are expected to degrade to a no-op in that case.
    ///
    /// Pure and deterministic given the same input ordering.
    #[must_use]
    pub fn build(sources: &[R]) -> Self {
        let (Some(first), Some(last)) = (sources.first(), sources.last()) else {
            return Self::empty();
        };

        let mut slides = Vec::with_capacity(sources.len() + 2);
        slides.push(Slide {
            source: last.clone(),
            ordinal: 0,
            is_clone: true,
        });
        for source in sources {
            let ordinal = slides.len();
            slides.push(Slide {
                source: source.clone(),
                ordinal,
                is_clone: false,
            });
        }
        slides.push(Slide {
            source: first.clone(),
            ordinal: slides.len(),
            is_clone: true,
        });

        Self {
            slides,
            real_len: sources.len(),
        }
    }
}

impl<R> SlideSequence<R> {
    /// An empty sequence (no real slides, no clones).
    #[must_use]
    pub fn empty() -> Self {
        Self {
            slides: Vec::new(),
            real_len: 0,
        }
    }

    /// Returns `true` when there are no real slides.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.real_len == 0
    }

    /// Number of real slides (`N`).
    #[must_use]
    pub fn real_len(&self) -> usize {
        self.real_len
    }

    /// Number of entries in the padded sequence (`N + 2`, or 0 when empty).
    #[must_use]
    pub fn padded_len(&self) -> usize {
        self.slides.len()
    }

    /// All slides in padded order.
    #[must_use]
    pub fn slides(&self) -> &[Slide<R>] {
        &self.slides
    }

    /// The slide at a padded index.
    #[must_use]
    pub fn get(&self, ordinal: usize) -> Option<&Slide<R>> {
        self.slides.get(ordinal)
    }

    /// Padded index of the first real slide (1), if any.
    #[must_use]
    pub fn first_real(&self) -> Option<usize> {
        (!self.is_empty()).then_some(1)
    }

    /// Padded index of the last real slide (`N`), if any.
    #[must_use]
    pub fn last_real(&self) -> Option<usize> {
        (!self.is_empty()).then_some(self.real_len)
    }

    /// Returns `true` when `padded` is in the rest range `1..=N`.
    #[must_use]
    pub fn is_rest(&self, padded: usize) -> bool {
        (1..=self.real_len).contains(&padded)
    }

    /// Maps a padded index in the rest range to its real-list index.
    ///
    /// Clone slots and out-of-range indices map to `None`.
    #[must_use]
    pub fn real_index_of(&self, padded: usize) -> Option<usize> {
        self.is_rest(padded).then(|| padded - 1)
    }

    /// The rest-range index a clone slot teleports to.
    ///
    /// Slot 0 wraps to `N`, slot `N + 1` wraps to 1; rest-range indices
    /// return `None` (no teleport needed).
    #[must_use]
    pub fn wrap_target(&self, padded: usize) -> Option<usize> {
        if self.is_empty() {
            return None;
        }
        if padded == 0 {
            Some(self.real_len)
        } else if padded == self.real_len + 1 {
            Some(1)
        } else {
            None
        }
    }
}

impl<R> Default for SlideSequence<R> {
    fn default() -> Self {
        Self::empty()
    }
}
