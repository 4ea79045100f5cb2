// Copyright 2026 the Gyre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Active/prev/next slide designation.

/// The styling role of a slide relative to the current padded index.
///
/// Hosts typically map these to state classes (or their equivalent) for
/// emphasis styling and neighbor prefetch.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum SlideMarker {
    /// The slide at the current padded index.
    Active,
    /// The slide immediately before the current one.
    Prev,
    /// The slide immediately after the current one.
    Next,
}

/// Computes the marker for the slide at `ordinal` given the current padded
/// index, or `None` for slides outside the active neighborhood.
#[must_use]
pub fn marker_at(ordinal: usize, current: usize) -> Option<SlideMarker> {
    if ordinal == current {
        Some(SlideMarker::Active)
    } else if ordinal + 1 == current {
        Some(SlideMarker::Prev)
    } else if ordinal == current + 1 {
        Some(SlideMarker::Next)
    } else {
        None
    }
}
