// Copyright 2026 the Gyre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Coarse change summary drained by the host.

use bitflags::bitflags;

bitflags! {
    /// What changed on the host-visible surface since the last drain.
    ///
    /// `Damage` is intentionally coarse: it names *which* outputs to re-read
    /// through the carousel's accessors, not the new values themselves.
    /// Hosts drain it with [`Carousel::take_damage`](crate::Carousel::take_damage)
    /// after each call into the engine.
    #[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
    pub struct Damage: u8 {
        /// The strip translation changed; re-read
        /// [`offset_command`](crate::Carousel::offset_command).
        const OFFSET = 1 << 0;
        /// The active/prev/next designation changed; re-read
        /// [`markers`](crate::Carousel::markers).
        const MARKERS = 1 << 1;
        /// The autoplay progress fraction changed; re-read
        /// [`progress`](crate::Carousel::progress).
        const PROGRESS = 1 << 2;
        /// The engine wants fresh layout readings; measure and call
        /// [`measured`](crate::Carousel::measured).
        const REMEASURE = 1 << 3;
    }
}

#[cfg(test)]
mod tests {
    use super::Damage;

    #[test]
    fn flags_accumulate_and_drain() {
        let mut damage = Damage::default();
        assert!(damage.is_empty());

        damage |= Damage::OFFSET | Damage::MARKERS;
        assert!(damage.contains(Damage::OFFSET));
        assert!(!damage.contains(Damage::PROGRESS));

        let drained = core::mem::take(&mut damage);
        assert_eq!(drained, Damage::OFFSET | Damage::MARKERS);
        assert!(damage.is_empty());
    }
}
