// Copyright 2026 the Gyre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Carousel configuration.

/// Tunable constants for a [`Carousel`](crate::Carousel).
///
/// All durations are in the host's timestamp units (conventionally
/// milliseconds); distances are in the host's layout units (conventionally
/// logical pixels). The commit ratios are fractions of one slide's width.
///
/// Touch and mouse drags use different commit thresholds on purpose: mouse
/// drags tend to be more deliberate and shorter, so they commit earlier.
/// Both are plain fields rather than hard-coded constants.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CarouselConfig {
    /// Whether the autoplay driver runs at all.
    pub autoplay: bool,
    /// One autoplay period: the dwell time on each slide.
    pub autoplay_period: u64,
    /// Cadence of the progress-indicator tick.
    pub progress_tick: u64,
    /// Duration of one animated transition.
    pub transition_duration: u64,
    /// Quiet window collapsing a resize burst into one remeasure.
    pub resize_debounce: u64,
    /// Upper bound on the wait for initial media before starting anyway.
    pub ready_timeout: u64,
    /// How many media settlements (load *or* failure) unblock startup.
    ///
    /// Capped at the number of mounted tiles.
    pub ready_media_count: usize,
    /// Horizontal distance below which a gesture is still jitter, not a drag.
    pub drag_slop: f64,
    /// Fraction of one slide width a touch drag must cover to commit.
    pub touch_commit_ratio: f64,
    /// Fraction of one slide width a mouse drag must cover to commit.
    pub mouse_commit_ratio: f64,
}

impl CarouselConfig {
    /// Returns a copy with out-of-range values clamped to usable ones.
    ///
    /// Zero durations become one unit, ratios are clamped into `[0, 1]`
    /// (non-finite ratios fall back to the defaults), and the slop is
    /// clamped non-negative.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        let defaults = Self::default();
        self.autoplay_period = self.autoplay_period.max(1);
        self.progress_tick = self.progress_tick.max(1);
        self.transition_duration = self.transition_duration.max(1);
        self.touch_commit_ratio = normalize_ratio(self.touch_commit_ratio, defaults.touch_commit_ratio);
        self.mouse_commit_ratio = normalize_ratio(self.mouse_commit_ratio, defaults.mouse_commit_ratio);
        if !self.drag_slop.is_finite() || self.drag_slop < 0.0 {
            self.drag_slop = defaults.drag_slop;
        }
        self
    }
}

fn normalize_ratio(ratio: f64, fallback: f64) -> f64 {
    if ratio.is_finite() {
        ratio.clamp(0.0, 1.0)
    } else {
        fallback
    }
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            autoplay: true,
            autoplay_period: 2_000,
            progress_tick: 50,
            transition_duration: 500,
            resize_debounce: 150,
            ready_timeout: 1_000,
            ready_media_count: 3,
            drag_slop: 10.0,
            touch_commit_ratio: 0.20,
            mouse_commit_ratio: 0.15,
        }
    }
}
