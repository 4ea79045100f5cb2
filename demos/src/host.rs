// Copyright 2026 the Gyre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A synthetic host surface for a [`Carousel`].
//!
//! [`SimHost`] stands in for the page: it "mounts" the padded strip, owns
//! the layout readings, and mirrors the engine's outputs (translation,
//! markers, progress) into plain fields a demo can print.

use gyre_engine::{Carousel, Damage};
use gyre_strip::SlideMarker;

/// Mirrors the host-visible carousel surface as printable state.
#[derive(Debug)]
pub struct SimHost {
    slide_width: f64,
    /// Last translation applied to the strip, if any.
    pub offset: Option<f64>,
    /// Whether the last applied translation was animated.
    pub animated: bool,
    /// Marker designations per padded ordinal.
    pub markers: Vec<(usize, SlideMarker)>,
    /// Progress-indicator fill fraction.
    pub progress: f64,
}

impl SimHost {
    /// Creates a host whose slides measure `slide_width`.
    #[must_use]
    pub fn new(slide_width: f64) -> Self {
        Self {
            slide_width,
            offset: None,
            animated: false,
            markers: Vec::new(),
            progress: 0.0,
        }
    }

    /// Simulates a viewport change to slides of `slide_width`.
    pub fn set_slide_width(&mut self, slide_width: f64) {
        self.slide_width = slide_width;
    }

    /// Drains the engine's damage and mirrors the named outputs.
    pub fn sync<R>(&mut self, carousel: &mut Carousel<R>, now: u64) {
        let damage = carousel.take_damage();
        if damage.contains(Damage::REMEASURE) {
            carousel.measured(Some(self.slide_width), None, now);
            // Feeding readings back may emit a fresh offset; fold it in.
            self.sync(carousel, now);
        }
        if damage.contains(Damage::OFFSET) {
            if let Some(command) = carousel.offset_command() {
                self.offset = Some(command.offset);
                self.animated = command.animated;
            }
        }
        if damage.contains(Damage::MARKERS) {
            self.markers = carousel.markers().into_vec();
        }
        if damage.contains(Damage::PROGRESS) {
            self.progress = carousel.progress();
        }
    }

    /// One-line rendering of the mirrored surface.
    #[must_use]
    pub fn frame<R>(&self, carousel: &Carousel<R>) -> String {
        let offset = self
            .offset
            .map_or("unset".to_string(), |o| format!("{o:.0}px"));
        let motion = if self.animated { "animated" } else { "teleport" };
        let active = self
            .markers
            .iter()
            .find(|(_, m)| *m == SlideMarker::Active)
            .map_or("-".to_string(), |(ordinal, _)| ordinal.to_string());
        format!(
            "mode={:?} real={:?} active_ordinal={} offset={} ({}) progress={:.0}%",
            carousel.mode(),
            carousel.real_index(),
            active,
            offset,
            motion,
            self.progress * 100.0,
        )
    }
}
