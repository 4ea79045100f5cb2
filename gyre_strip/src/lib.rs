// Copyright 2026 the Gyre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=gyre_strip --heading-base-level=0

//! Gyre Strip: renderer-agnostic primitives for a looping horizontal strip.
//!
//! This crate provides the pure data side of an infinitely-looping carousel:
//! a dense row of tiles, padded with one boundary clone at each end so the
//! strip can be translated past its last (or first) real tile and then
//! teleported back without a visible jump.
//!
//! The core concepts are:
//!
//! - [`Slide`] / [`SlideSequence`]: an immutable, clone-padded sequence built
//!   from an ordered list of opaque media references, with padded↔real index
//!   mapping and wrap targets for the clone slots.
//! - [`marker_at`]: the active/prev/next designation hosts use for styling
//!   and prefetch.
//! - [`resolve_slide_unit`]: the measurement fallback policy turning raw
//!   layout readings into a usable slide width.
//! - [`offset_for`] / [`OffsetCommand`]: the translation math mapping a
//!   logical index (plus an in-flight drag delta) to a horizontal offset,
//!   tagged animated or teleport.
//!
//! This crate deliberately does **not** know about widgets, pointers, timers,
//! or any particular UI framework. Host frameworks (typically through a
//! driving state machine such as `gyre_engine`) are responsible for mounting
//! the tiles, measuring layout, and applying the offsets computed here.
//!
//! ## Minimal example
//!
//! ```rust
//! use gyre_strip::{SlideSequence, offset_for};
//!
//! let sequence = SlideSequence::build(&["a.jpg", "b.jpg", "c.jpg"]);
//!
//! // Three real slides plus a clone at each end.
//! assert_eq!(sequence.padded_len(), 5);
//! assert!(sequence.slides()[0].is_clone());
//!
//! // The first real slide sits at padded index 1.
//! let first = sequence.first_real().unwrap();
//! assert_eq!(first, 1);
//! assert_eq!(sequence.real_index_of(first), Some(0));
//!
//! // At rest on the first real slide with 640 px tiles, the strip sits at -640.
//! assert_eq!(offset_for(first, 640.0, 0.0), -640.0);
//! ```
//!
//! All offsets live in a caller-chosen 1D coordinate space (typically logical
//! pixels). This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod markers;
mod metrics;
mod position;
mod sequence;

pub use markers::{SlideMarker, marker_at};
pub use metrics::resolve_slide_unit;
pub use position::{OffsetCommand, offset_for};
pub use sequence::{Slide, SlideSequence};
