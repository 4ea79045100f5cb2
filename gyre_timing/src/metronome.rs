// Copyright 2026 the Gyre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pausable periodic driver with fractional progress.
//!
//! A [`Metronome`] measures out fixed periods of host time, accruing elapsed
//! time only while running. Pausing freezes the elapsed fraction exactly
//! where it was; resuming continues from that fraction regardless of how
//! much real time passed in between. This is the behavior interactive
//! "autoplay" surfaces want: hovering pauses the countdown, leaving resumes
//! it, and only an explicit reset restarts it from zero.
//!
//! ## Minimal example
//!
//! ```
//! use gyre_timing::Metronome;
//!
//! let mut metronome = Metronome::new(2_000);
//! metronome.resume(0);
//!
//! // 800 ms in: no period has completed, progress is 0.4.
//! assert_eq!(metronome.poll(800), 0);
//! assert!((metronome.progress() - 0.4).abs() < 1e-9);
//!
//! // Pause, wait an arbitrary gap, resume: still 0.4.
//! metronome.pause(800);
//! metronome.resume(10_000);
//! assert_eq!(metronome.poll(10_000), 0);
//! assert!((metronome.progress() - 0.4).abs() < 1e-9);
//!
//! // 1200 ms more completes the period and the fraction wraps.
//! assert_eq!(metronome.poll(11_200), 1);
//! assert!(metronome.progress() < 1e-9);
//! ```

/// A pausable fixed-period driver over host timestamps.
///
/// The metronome holds no clock; the host reports time through
/// [`Metronome::poll`], [`Metronome::pause`], and [`Metronome::resume`].
/// While paused, time does not accrue and [`Metronome::progress`] is frozen.
#[derive(Clone, Copy, Debug)]
pub struct Metronome {
    period: u64,
    accrued: u64,
    last: Option<u64>,
}

impl Metronome {
    /// Creates a stopped metronome with the given period.
    ///
    /// A zero period is normalized to one unit so the elapsed fraction is
    /// always well defined.
    #[must_use]
    pub fn new(period: u64) -> Self {
        Self {
            period: period.max(1),
            accrued: 0,
            last: None,
        }
    }

    /// Returns the configured period.
    #[must_use]
    pub fn period(&self) -> u64 {
        self.period
    }

    /// Returns `true` while time is accruing.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.last.is_some()
    }

    /// Starts or resumes accrual from `now`, keeping the frozen fraction.
    ///
    /// Idempotent while already running.
    pub fn resume(&mut self, now: u64) {
        if self.last.is_none() {
            self.last = Some(now);
        }
    }

    /// Stops accrual, freezing the elapsed fraction at its value as of `now`.
    ///
    /// Idempotent while already paused.
    pub fn pause(&mut self, now: u64) {
        if self.last.is_some() {
            self.accrue(now);
            self.last = None;
        }
    }

    /// Restarts the current period from zero.
    ///
    /// The running/paused status is unchanged; a running metronome re-anchors
    /// its accrual at `now`.
    pub fn reset(&mut self, now: u64) {
        self.accrued = 0;
        if self.last.is_some() {
            self.last = Some(now);
        }
    }

    /// Accrues time up to `now` and returns how many periods completed.
    ///
    /// Returns 0 while paused. The elapsed fraction wraps on completion, so
    /// a late poll that spans several periods reports them all at once.
    pub fn poll(&mut self, now: u64) -> u32 {
        if self.last.is_none() {
            return 0;
        }
        self.accrue(now);
        let fired = self.accrued / self.period;
        self.accrued %= self.period;
        u32::try_from(fired).unwrap_or(u32::MAX)
    }

    /// Elapsed fraction of the current period, in `[0, 1)`.
    ///
    /// The fraction reflects time accrued up to the most recent
    /// [`Metronome::poll`]/[`Metronome::pause`]; it is frozen while paused.
    #[must_use]
    pub fn progress(&self) -> f64 {
        self.accrued as f64 / self.period as f64
    }

    fn accrue(&mut self, now: u64) {
        if let Some(last) = self.last {
            self.accrued += now.saturating_sub(last);
            self.last = Some(last.max(now));
        }
    }
}
