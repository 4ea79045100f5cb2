// Copyright 2026 the Gyre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=gyre_timing --heading-base-level=0

//! Gyre Timing: host-agnostic timer primitives for UI runtimes.
//!
//! This crate provides small building blocks for the deferred work that UI
//! components need, without assuming threads, an executor, or a wall clock.
//! All time enters as host-supplied `u64` millisecond timestamps, and every
//! wait is expressed as state the host polls:
//!
//! - [`TimerQueue`]: a cancellable deadline queue. Scheduling returns a
//!   generation-tagged [`TimerHandle`], so a completion that was cancelled or
//!   superseded can never fire against newer state.
//! - [`Debouncer`]: a trailing-edge debouncer that collapses a burst of
//!   signals within a window into a single firing.
//! - [`Metronome`]: a pausable periodic driver that accrues elapsed time only
//!   while running and exposes the elapsed fraction of its current period.
//!
//! ## Integration model
//!
//! Hosts own the event loop. The expected shape is:
//!
//! 1. Ask each primitive for its next deadline ([`TimerQueue::next_deadline`],
//!    [`Debouncer::pending`]) and sleep or schedule a wakeup accordingly.
//! 2. On wakeup (or any other event), drain due work with the current
//!    timestamp ([`TimerQueue::pop_due`], [`Debouncer::fire`],
//!    [`Metronome::poll`]).
//!
//! Timestamps only ever need to be monotonic and in consistent units;
//! milliseconds are conventional.
//!
//! ## Minimal example
//!
//! ```
//! use gyre_timing::TimerQueue;
//!
//! let mut queue = TimerQueue::new();
//! let handle = queue.schedule(1_500, "transition-end");
//! assert_eq!(queue.next_deadline(), Some(1_500));
//!
//! // Nothing is due yet at t=1000.
//! assert_eq!(queue.pop_due(1_000), None);
//!
//! // Cancelling invalidates the pending completion.
//! assert!(queue.cancel(handle));
//! assert_eq!(queue.pop_due(2_000), None);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod debounce;
mod metronome;
mod queue;

pub use debounce::Debouncer;
pub use metronome::Metronome;
pub use queue::{TimerHandle, TimerQueue};
