// Copyright 2026 the Gyre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trailing-edge debouncer for bursty signals.
//!
//! A [`Debouncer`] collapses a burst of signals (for example, the resize
//! events a host emits while a window is being dragged) into a single firing
//! once the burst has been quiet for a configured window.
//!
//! ## Usage
//!
//! 1. On each raw signal, call [`Debouncer::signal`] with the current time;
//!    it returns the (re-armed) deadline.
//! 2. Fold [`Debouncer::pending`] into the host's next-wakeup computation.
//! 3. On wakeup, call [`Debouncer::fire`]; it returns `true` exactly once
//!    per settled burst.
//!
//! ## Minimal example
//!
//! ```
//! use gyre_timing::Debouncer;
//!
//! let mut debounce = Debouncer::new(150);
//!
//! // A burst of three signals, each re-arming the window.
//! debounce.signal(0);
//! debounce.signal(40);
//! let deadline = debounce.signal(90);
//! assert_eq!(deadline, 240);
//!
//! // Nothing fires before the window has been quiet.
//! assert!(!debounce.fire(239));
//! // The whole burst collapses to one firing.
//! assert!(debounce.fire(240));
//! assert!(!debounce.fire(500));
//! ```

/// Collapses signal bursts into a single trailing-edge firing.
#[derive(Clone, Copy, Debug)]
pub struct Debouncer {
    window: u64,
    deadline: Option<u64>,
}

impl Debouncer {
    /// Creates a debouncer with the given quiet window (same units as the
    /// host's timestamps, conventionally milliseconds).
    #[must_use]
    pub fn new(window: u64) -> Self {
        Self {
            window,
            deadline: None,
        }
    }

    /// Returns the configured quiet window.
    #[must_use]
    pub fn window(&self) -> u64 {
        self.window
    }

    /// Records a signal at `now`, re-arming the window.
    ///
    /// Returns the new deadline at which [`Debouncer::fire`] will report the
    /// settled burst.
    pub fn signal(&mut self, now: u64) -> u64 {
        let deadline = now.saturating_add(self.window);
        self.deadline = Some(deadline);
        deadline
    }

    /// Returns the pending deadline, if a burst is waiting to settle.
    #[must_use]
    pub fn pending(&self) -> Option<u64> {
        self.deadline
    }

    /// Reports whether the armed burst has settled as of `now`.
    ///
    /// Returns `true` at most once per burst; the debouncer disarms itself
    /// on firing.
    pub fn fire(&mut self, now: u64) -> bool {
        match self.deadline {
            Some(deadline) if deadline <= now => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Disarms any pending burst without firing.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }
}

#[cfg(test)]
mod tests {
    use super::Debouncer;

    #[test]
    fn quiet_debouncer_never_fires() {
        let mut debounce = Debouncer::new(150);
        assert_eq!(debounce.pending(), None);
        assert!(!debounce.fire(u64::MAX));
    }

    #[test]
    fn burst_collapses_to_single_firing() {
        let mut debounce = Debouncer::new(150);
        debounce.signal(0);
        debounce.signal(100);
        debounce.signal(200);

        // Earlier deadlines were superseded by the re-armed window.
        assert!(!debounce.fire(150));
        assert!(!debounce.fire(250));
        assert!(debounce.fire(350));
        assert!(!debounce.fire(351));
    }

    #[test]
    fn separate_bursts_fire_separately() {
        let mut debounce = Debouncer::new(50);
        debounce.signal(0);
        assert!(debounce.fire(50));

        debounce.signal(1_000);
        assert_eq!(debounce.pending(), Some(1_050));
        assert!(debounce.fire(1_050));
    }

    #[test]
    fn cancel_disarms_pending_burst() {
        let mut debounce = Debouncer::new(50);
        debounce.signal(0);
        debounce.cancel();
        assert_eq!(debounce.pending(), None);
        assert!(!debounce.fire(100));
    }
}
