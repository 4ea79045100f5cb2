// Copyright 2026 the Gyre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=gyre_engine --heading-base-level=0

//! Gyre Engine: the looping carousel state machine.
//!
//! This crate drives an infinitely-looping, draggable, autoplaying strip of
//! tiles without owning the rendering backend. The host mounts the tiles,
//! measures layout, and applies translations; the engine owns the ordering
//! and invariant concerns: index wraparound across the clone seam,
//! drag-versus-autoplay races, and transition locking.
//!
//! The pieces:
//!
//! - [`Carousel`]: the mutual-exclusion core. Commands from the autoplay
//!   driver, pointer/touch gestures, and next/prev requests are arbitrated
//!   through a tagged-union mode (`Idle` / `Transitioning` / `Dragging`);
//!   events arriving while the relevant guard is unmet are dropped, never
//!   queued. In this domain state is cosmetic, so late or duplicate
//!   advances are harmless to drop.
//! - [`CarouselConfig`]: the tunable constants: autoplay period, transition
//!   duration, debounce window, ready gate, and the intentionally asymmetric
//!   touch/mouse commit thresholds.
//! - [`Damage`]: the coarse change summary hosts drain after each call to
//!   learn which outputs to re-read.
//! - [`MediaCatalog`]: keyed per-trigger media lists for hosts that rebuild
//!   the carousel from external trigger controls.
//!
//! Everything runs on the host's single event-processing thread; waits are
//! deadline entries the host pumps via [`Carousel::next_deadline`] and
//! [`Carousel::tick`], never blocking calls. There are no fatal errors
//! anywhere in the component: an empty media list, unready geometry, or a
//! failed image load all degrade to no-ops or deferred retries.
//!
//! The strip data model (clone padding, index mapping, translation math)
//! lives in [`gyre_strip`]; the timer primitives live in [`gyre_timing`].
//!
//! This crate is `no_std` compatible (with `alloc`); the `std` feature
//! (default) is forwarded to `kurbo`.

#![no_std]

extern crate alloc;

mod carousel;
mod catalog;
mod config;
mod damage;

pub use carousel::{Carousel, CarouselDebugInfo, DragMotion, ModeKind, PointerKind};
pub use catalog::MediaCatalog;
pub use config::CarouselConfig;
pub use damage::Damage;
