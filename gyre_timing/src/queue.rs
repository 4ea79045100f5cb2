// Copyright 2026 the Gyre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cancellable deadline queue with generation-tagged handles.

use alloc::vec::Vec;

/// Identifies a scheduled entry in a [`TimerQueue`].
///
/// Handles are generation-tagged: once the entry fires or is cancelled, the
/// handle goes stale and all further operations through it are no-ops. This
/// makes it safe to keep a handle around across state changes without
/// risking a completion firing against state it was not scheduled for.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct TimerHandle {
    slot: u32,
    generation: u32,
}

#[derive(Debug)]
struct Slot<T> {
    generation: u32,
    entry: Option<Entry<T>>,
}

#[derive(Debug)]
struct Entry<T> {
    deadline: u64,
    payload: T,
}

/// A small deadline queue for deferred UI work.
///
/// Deadlines are host-supplied `u64` timestamps (conventionally
/// milliseconds). The queue never inspects a clock; the host drains due
/// entries by calling [`TimerQueue::pop_due`] with the current time.
///
/// Entries with equal deadlines pop deterministically (lowest slot first).
///
/// Expected sizes are tiny (a handful of pending entries per component), so
/// storage is a flat slot vector with a free list rather than a heap.
#[derive(Debug)]
pub struct TimerQueue<T> {
    slots: Vec<Slot<T>>,
    free: Vec<u32>,
    armed: usize,
}

impl<T> TimerQueue<T> {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            armed: 0,
        }
    }

    /// Schedules `payload` to become due at `deadline`.
    ///
    /// Returns a handle that can be used to cancel the entry before it
    /// fires. Scheduling never fails.
    pub fn schedule(&mut self, deadline: u64, payload: T) -> TimerHandle {
        self.armed += 1;
        let entry = Entry { deadline, payload };
        if let Some(slot) = self.free.pop() {
            let s = &mut self.slots[slot as usize];
            s.entry = Some(entry);
            TimerHandle {
                slot,
                generation: s.generation,
            }
        } else {
            let slot = u32::try_from(self.slots.len()).unwrap_or(u32::MAX);
            self.slots.push(Slot {
                generation: 0,
                entry: Some(entry),
            });
            TimerHandle {
                slot,
                generation: 0,
            }
        }
    }

    /// Cancels a pending entry.
    ///
    /// Returns `true` if the entry was still pending, `false` if the handle
    /// was stale (already fired, cancelled, or cleared).
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        match self.slots.get_mut(handle.slot as usize) {
            Some(s) if s.generation == handle.generation && s.entry.is_some() => {
                s.entry = None;
                s.generation = s.generation.wrapping_add(1);
                self.free.push(handle.slot);
                self.armed -= 1;
                true
            }
            _ => false,
        }
    }

    /// Returns `true` if the handle still refers to a pending entry.
    #[must_use]
    pub fn is_scheduled(&self, handle: TimerHandle) -> bool {
        matches!(
            self.slots.get(handle.slot as usize),
            Some(s) if s.generation == handle.generation && s.entry.is_some()
        )
    }

    /// Returns the deadline of a pending entry, or `None` for stale handles.
    #[must_use]
    pub fn deadline_of(&self, handle: TimerHandle) -> Option<u64> {
        match self.slots.get(handle.slot as usize) {
            Some(s) if s.generation == handle.generation => {
                s.entry.as_ref().map(|e| e.deadline)
            }
            _ => None,
        }
    }

    /// Returns the earliest pending deadline, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.slots
            .iter()
            .filter_map(|s| s.entry.as_ref().map(|e| e.deadline))
            .min()
    }

    /// Removes and returns the earliest entry whose deadline is `<= now`.
    ///
    /// Call in a loop to drain everything due at the current time. Returns
    /// `None` once nothing further is due.
    pub fn pop_due(&mut self, now: u64) -> Option<T> {
        let mut best: Option<(usize, u64)> = None;
        for (i, s) in self.slots.iter().enumerate() {
            if let Some(e) = &s.entry {
                if e.deadline <= now && best.is_none_or(|(_, d)| e.deadline < d) {
                    best = Some((i, e.deadline));
                }
            }
        }
        let (slot, _) = best?;
        let s = &mut self.slots[slot];
        let entry = s.entry.take();
        s.generation = s.generation.wrapping_add(1);
        #[expect(
            clippy::cast_possible_truncation,
            reason = "slot indexes are bounded far below u32::MAX"
        )]
        self.free.push(slot as u32);
        self.armed -= 1;
        entry.map(|e| e.payload)
    }

    /// Cancels every pending entry, invalidating all outstanding handles.
    pub fn clear(&mut self) {
        for (i, s) in self.slots.iter_mut().enumerate() {
            if s.entry.take().is_some() {
                s.generation = s.generation.wrapping_add(1);
                #[expect(
                    clippy::cast_possible_truncation,
                    reason = "slot indexes are bounded far below u32::MAX"
                )]
                self.free.push(i as u32);
            }
        }
        self.armed = 0;
    }

    /// Number of pending entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.armed
    }

    /// Returns `true` when no entries are pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.armed == 0
    }
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
