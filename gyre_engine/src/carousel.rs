// Copyright 2026 the Gyre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The looping carousel state machine.
//!
//! [`Carousel`] arbitrates the autoplay driver, pointer/touch gestures, and
//! discrete next/prev requests over one shared
//! strip position. The mutual-exclusion discipline is first-writer-wins: the
//! machine is `Idle`, `Transitioning`, or `Dragging`, only `Idle` freely
//! accepts new commands, and an event arriving while the relevant guard is
//! unmet is dropped, never queued.
//!
//! ## Host protocol
//!
//! The engine holds no clock and reads no layout. The host:
//!
//! 1. Constructs the carousel at interactive time and reports media
//!    settlements ([`Carousel::media_settled`]; a load failure counts the
//!    same as a success) until the ready gate opens or times out.
//! 2. Forwards pointer, hover, and resize signals with `u64` millisecond
//!    timestamps, and pumps [`Carousel::tick`] no later than
//!    [`Carousel::next_deadline`].
//! 3. Drains [`Carousel::take_damage`] after each call and re-reads the
//!    named outputs: the [`OffsetCommand`] to apply to the strip, the slide
//!    [`markers`](Carousel::markers), the autoplay
//!    [`progress`](Carousel::progress) fraction, or, for
//!    [`Damage::REMEASURE`], fresh layout readings fed back through
//!    [`Carousel::measured`].
//!
//! ## Minimal example
//!
//! ```
//! use gyre_engine::{Carousel, CarouselConfig, Damage};
//!
//! let mut carousel = Carousel::new(CarouselConfig::default(), &["a", "b", "c"], 0);
//!
//! // Three settled media open the ready gate.
//! carousel.media_settled(10);
//! carousel.media_settled(20);
//! carousel.media_settled(30);
//! assert!(carousel.is_initialized());
//! assert!(carousel.take_damage().contains(Damage::REMEASURE));
//!
//! // The host measures one slide and feeds the reading back.
//! carousel.measured(Some(640.0), None, 40);
//! let offset = carousel.offset_command().unwrap();
//! assert_eq!(offset.offset, -640.0);
//! assert!(!offset.animated);
//! assert_eq!(carousel.real_index(), Some(0));
//! ```

use gyre_strip::{
    OffsetCommand, SlideMarker, SlideSequence, marker_at, offset_for, resolve_slide_unit,
};
use gyre_timing::{Debouncer, Metronome, TimerHandle, TimerQueue};
use kurbo::Point;
use smallvec::SmallVec;

use crate::{CarouselConfig, Damage};

/// Which input modality a drag gesture came from.
///
/// The two modalities commit at different thresholds; see
/// [`CarouselConfig::touch_commit_ratio`] and
/// [`CarouselConfig::mouse_commit_ratio`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum PointerKind {
    /// Touch input (touchstart/touchmove/touchend).
    Touch,
    /// Mouse or generic pointer input.
    Mouse,
}

/// The mutual-exclusion state of the carousel.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ModeKind {
    /// At rest; the only state that freely accepts new commands.
    Idle,
    /// An animated transition is in flight.
    Transitioning,
    /// A pointer gesture owns the strip.
    Dragging,
}

/// Outcome of feeding a pointer-move into the engine.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum DragMotion {
    /// No drag is active; the event was dropped.
    Ignored,
    /// The drag is tracking the pointer.
    Tracking {
        /// `true` once the gesture has exceeded the jitter slop and is
        /// horizontal: the host should suppress its default scrolling for
        /// this gesture. While `false`, near-vertical gestures keep their
        /// natural scrolling.
        intercept_scroll: bool,
    },
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum Direction {
    Forward,
    Backward,
}

impl Direction {
    fn step(self) -> isize {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }

    /// Dragging the strip left (negative delta) reveals the next slide.
    fn from_drag_delta(delta: f64) -> Self {
        if delta < 0.0 {
            Self::Forward
        } else {
            Self::Backward
        }
    }
}

/// Deferred completions owned by the engine's timer queue.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum Tick {
    ReadyTimeout,
    TransitionEnd,
    Progress,
}

/// The machine's mode, with the data each state carries.
#[derive(Copy, Clone, Debug)]
enum Mode {
    Idle,
    Transitioning {
        timer: TimerHandle,
    },
    Dragging {
        start_x: f64,
        pointer: PointerKind,
        horizontal: bool,
    },
}

/// A looping carousel over media references of type `R`.
///
/// See the [module docs](self) for the host protocol. All mutation goes
/// through the state machine's handlers; accessors never change state except
/// [`Carousel::take_damage`], which drains the change summary.
#[derive(Debug)]
pub struct Carousel<R> {
    config: CarouselConfig,
    sequence: SlideSequence<R>,
    current: usize,
    slide_unit: Option<f64>,
    offset: Option<OffsetCommand>,
    mode: Mode,
    hover_paused: bool,
    autoplay: Metronome,
    resize: Debouncer,
    timers: TimerQueue<Tick>,
    ready_timer: Option<TimerHandle>,
    progress_timer: Option<TimerHandle>,
    settled: usize,
    initialized: bool,
    damage: Damage,
}

impl<R: Clone> Carousel<R> {
    /// Creates a carousel over an ordered media list.
    ///
    /// The slide sequence is built immediately (clone-padded for `N >= 1`
    /// sources); interaction and autoplay start once the ready gate opens —
    /// after `min(ready_media_count, tiles)` media settlements or the ready
    /// timeout, whichever comes first. An empty media list degrades to a
    /// permanent no-op: no clones, no autoplay, every command dropped.
    #[must_use]
    pub fn new(config: CarouselConfig, sources: &[R], now: u64) -> Self {
        let config = config.normalized();
        let sequence = SlideSequence::build(sources);
        let current = sequence.first_real().unwrap_or(0);
        let mut timers = TimerQueue::new();
        let ready_timer = (!sequence.is_empty())
            .then(|| timers.schedule(now.saturating_add(config.ready_timeout), Tick::ReadyTimeout));
        Self {
            autoplay: Metronome::new(config.autoplay_period),
            resize: Debouncer::new(config.resize_debounce),
            config,
            sequence,
            current,
            slide_unit: None,
            offset: None,
            mode: Mode::Idle,
            hover_paused: false,
            timers,
            ready_timer,
            progress_timer: None,
            settled: 0,
            initialized: false,
            damage: Damage::empty(),
        }
    }

    /// Replaces the media set wholesale.
    ///
    /// All pending timers are invalidated, the sequence is rebuilt, the
    /// index resets to the first real slide, and, on an initialized
    /// carousel, the autoplay pair (period driver and progress tick) is
    /// recreated from zero. A not-yet-initialized carousel re-arms its
    /// ready gate for the new media instead.
    pub fn swap_media(&mut self, sources: &[R], now: u64) {
        self.timers.clear();
        self.ready_timer = None;
        self.progress_timer = None;
        self.resize.cancel();

        self.sequence = SlideSequence::build(sources);
        self.current = self.sequence.first_real().unwrap_or(0);
        self.mode = Mode::Idle;
        self.offset = None;
        self.damage |= Damage::MARKERS;

        if self.sequence.is_empty() {
            self.initialized = false;
            self.settled = 0;
            self.autoplay.pause(now);
            self.autoplay.reset(now);
            return;
        }

        if self.initialized {
            self.teleport_to_rest();
            self.restart_autoplay(now);
            self.damage |= Damage::REMEASURE | Damage::PROGRESS;
        } else {
            self.settled = 0;
            self.ready_timer = Some(
                self.timers
                    .schedule(now.saturating_add(self.config.ready_timeout), Tick::ReadyTimeout),
            );
        }
    }
}

impl<R> Carousel<R> {
    // ---- inbound signals -------------------------------------------------

    /// Reports that one media resource settled (loaded *or* failed).
    ///
    /// Failures unblock startup exactly like successes; only the count
    /// matters. Once enough tiles have settled the ready gate opens.
    /// Idempotent after initialization.
    pub fn media_settled(&mut self, now: u64) {
        if self.initialized || self.sequence.is_empty() {
            return;
        }
        self.settled += 1;
        let needed = self
            .config
            .ready_media_count
            .min(self.sequence.padded_len());
        if self.settled >= needed {
            self.activate(now);
        }
    }

    /// Records a host resize signal.
    ///
    /// A burst of signals within the debounce window collapses to a single
    /// [`Damage::REMEASURE`] once the burst settles; the host then feeds
    /// fresh readings back through [`Carousel::measured`].
    pub fn resized(&mut self, now: u64) {
        if self.sequence.is_empty() {
            return;
        }
        self.resize.signal(now);
    }

    /// Feeds layout readings back into the engine.
    ///
    /// The slide width is preferred; the container's intrinsic width is the
    /// fallback for the not-yet-laid-out case. Invalid readings (missing,
    /// zero, non-finite) leave the previous measurement in place and the
    /// position math deferred until the next signal.
    ///
    /// On an initialized carousel a valid reading re-applies the rest offset
    /// as a teleport. Any in-flight transition or gesture is invalidated
    /// first so its completion cannot land on stale geometry.
    pub fn measured(&mut self, slide_width: Option<f64>, container_width: Option<f64>, now: u64) {
        let Some(unit) = resolve_slide_unit(slide_width, container_width) else {
            return;
        };
        self.slide_unit = Some(unit);
        if !self.initialized {
            return;
        }
        self.abort_motion(now);
        self.teleport_to_rest();
        self.damage |= Damage::MARKERS;
    }

    /// Advances one slide forward, as a user command.
    ///
    /// Dropped (returning `false`) unless the machine is idle with resolved
    /// geometry. A successful advance restarts the autoplay countdown.
    pub fn next(&mut self, now: u64) -> bool {
        self.user_advance(Direction::Forward, now)
    }

    /// Advances one slide backward, as a user command.
    ///
    /// Same guards as [`Carousel::next`].
    pub fn prev(&mut self, now: u64) -> bool {
        self.user_advance(Direction::Backward, now)
    }

    /// Begins a drag gesture at `pos`.
    ///
    /// Accepted only while idle: a gesture starting mid-transition is
    /// ignored entirely (first-writer-wins; nothing is recorded). Starting
    /// a drag implicitly pauses autoplay, freezing the progress fraction.
    pub fn pointer_down(&mut self, pointer: PointerKind, pos: Point, now: u64) {
        if !self.initialized || self.slide_unit.is_none() {
            return;
        }
        if !matches!(self.mode, Mode::Idle) {
            return;
        }
        self.mode = Mode::Dragging {
            start_x: pos.x,
            pointer,
            horizontal: false,
        };
        self.reconcile_autoplay(now);
    }

    /// Tracks an active drag gesture.
    ///
    /// The strip follows the pointer with non-animated offsets. Once the
    /// total delta exceeds the jitter slop the gesture is horizontal for its
    /// remainder and the returned motion asks the host to suppress its
    /// default scrolling; below the slop, no suppression occurs.
    pub fn pointer_move(&mut self, pos: Point) -> DragMotion {
        let Mode::Dragging {
            start_x,
            horizontal,
            ..
        } = &mut self.mode
        else {
            return DragMotion::Ignored;
        };
        let delta = pos.x - *start_x;
        if delta.abs() > self.config.drag_slop {
            *horizontal = true;
        }
        let intercept_scroll = *horizontal;
        if let Some(unit) = self.slide_unit {
            self.offset = Some(OffsetCommand::teleport(offset_for(
                self.current,
                unit,
                delta,
            )));
            self.damage |= Damage::OFFSET;
        }
        DragMotion::Tracking { intercept_scroll }
    }

    /// Ends a drag gesture at `pos`.
    ///
    /// Commits to the next/previous slide when the delta exceeds the commit
    /// threshold for the gesture's modality; otherwise animates back to the
    /// rest offset (snap-back). Either way the autoplay countdown restarts
    /// from zero.
    pub fn pointer_up(&mut self, pos: Point, now: u64) {
        let Mode::Dragging {
            start_x, pointer, ..
        } = self.mode
        else {
            return;
        };
        self.mode = Mode::Idle;

        let delta = pos.x - start_x;
        if let Some(unit) = self.slide_unit {
            let ratio = match pointer {
                PointerKind::Touch => self.config.touch_commit_ratio,
                PointerKind::Mouse => self.config.mouse_commit_ratio,
            };
            if delta.abs() > unit * ratio {
                self.advance(Direction::from_drag_delta(delta), now);
            } else {
                self.offset = Some(OffsetCommand::animated(offset_for(self.current, unit, 0.0)));
                self.damage |= Damage::OFFSET;
            }
        }

        self.autoplay.reset(now);
        self.damage |= Damage::PROGRESS;
        self.reconcile_autoplay(now);
    }

    /// Pauses autoplay while the pointer hovers the carousel. Idempotent.
    pub fn hover_start(&mut self, now: u64) {
        self.hover_paused = true;
        self.reconcile_autoplay(now);
    }

    /// Resumes autoplay when the pointer leaves. Idempotent.
    ///
    /// Ticking resumes from the frozen progress fraction, not from zero
    /// (unless a commit reset it in the meantime).
    pub fn hover_end(&mut self, now: u64) {
        self.hover_paused = false;
        self.reconcile_autoplay(now);
    }

    /// Drains due timers and settles debounced work as of `now`.
    ///
    /// Call no later than [`Carousel::next_deadline`]; calling more often is
    /// harmless.
    pub fn tick(&mut self, now: u64) {
        while let Some(tick) = self.timers.pop_due(now) {
            self.handle_tick(tick, now);
        }
        if self.resize.fire(now) {
            self.damage |= Damage::REMEASURE;
        }
    }

    // ---- outbound surface ------------------------------------------------

    /// The earliest instant at which [`Carousel::tick`] has work to do.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        match (self.timers.next_deadline(), self.resize.pending()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Drains and returns the accumulated change summary.
    pub fn take_damage(&mut self) -> Damage {
        core::mem::take(&mut self.damage)
    }

    /// The last strip translation the host should have applied.
    ///
    /// `None` until geometry resolves (position math is deferred, not
    /// emitted with a nonsensical unit).
    #[must_use]
    pub fn offset_command(&self) -> Option<OffsetCommand> {
        self.offset
    }

    /// The active/prev/next designation around the current slide.
    ///
    /// At most three entries, in ordinal order. Hosts clear designations on
    /// slides not listed.
    #[must_use]
    pub fn markers(&self) -> SmallVec<[(usize, SlideMarker); 3]> {
        let mut out = SmallVec::new();
        if self.sequence.is_empty() {
            return out;
        }
        let from = self.current.saturating_sub(1);
        for ordinal in from..=self.current + 1 {
            if ordinal >= self.sequence.padded_len() {
                break;
            }
            if let Some(marker) = marker_at(ordinal, self.current) {
                out.push((ordinal, marker));
            }
        }
        out
    }

    /// Index of the current slide in the *real* media list.
    ///
    /// Clones are never reported: mid-transition occupancy of a clone slot
    /// maps to the real boundary it wraps to, so callers always observe an
    /// index in `0..N`. `None` only for an empty carousel.
    #[must_use]
    pub fn real_index(&self) -> Option<usize> {
        self.sequence.real_index_of(self.current).or_else(|| {
            let target = self.sequence.wrap_target(self.current)?;
            self.sequence.real_index_of(target)
        })
    }

    /// Elapsed fraction of the current autoplay period, in `[0, 1)`.
    #[must_use]
    pub fn progress(&self) -> f64 {
        self.autoplay.progress()
    }

    /// The current mutual-exclusion state.
    #[must_use]
    pub fn mode(&self) -> ModeKind {
        match self.mode {
            Mode::Idle => ModeKind::Idle,
            Mode::Transitioning { .. } => ModeKind::Transitioning,
            Mode::Dragging { .. } => ModeKind::Dragging,
        }
    }

    /// Returns `true` once the ready gate has opened.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Returns `true` while the autoplay countdown is accruing.
    #[must_use]
    pub fn is_autoplay_running(&self) -> bool {
        self.autoplay.is_running()
    }

    /// Returns `true` while hover holds autoplay paused.
    #[must_use]
    pub fn is_hover_paused(&self) -> bool {
        self.hover_paused
    }

    /// The built slide sequence.
    #[must_use]
    pub fn sequence(&self) -> &SlideSequence<R> {
        &self.sequence
    }

    /// The resolved slide width, if geometry is ready.
    #[must_use]
    pub fn slide_unit(&self) -> Option<f64> {
        self.slide_unit
    }

    /// The active configuration (normalized at construction).
    #[must_use]
    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// Snapshot of the engine state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> CarouselDebugInfo {
        CarouselDebugInfo {
            mode: self.mode(),
            current: self.current,
            real_index: self.real_index(),
            real_len: self.sequence.real_len(),
            slide_unit: self.slide_unit,
            offset: self.offset,
            progress: self.progress(),
            autoplay_running: self.is_autoplay_running(),
            hover_paused: self.hover_paused,
            initialized: self.initialized,
        }
    }

    // ---- transitions -----------------------------------------------------

    fn handle_tick(&mut self, tick: Tick, now: u64) {
        match tick {
            Tick::ReadyTimeout => {
                self.ready_timer = None;
                self.activate(now);
            }
            Tick::TransitionEnd => {
                if !matches!(self.mode, Mode::Transitioning { .. }) {
                    return;
                }
                self.mode = Mode::Idle;
                if let Some(target) = self.sequence.wrap_target(self.current) {
                    // The seam that makes the loop look infinite: relocate
                    // from the clone slot without animating back through
                    // the whole strip.
                    self.current = target;
                    self.teleport_to_rest();
                    self.damage |= Damage::MARKERS;
                }
            }
            Tick::Progress => {
                let before = self.autoplay.progress();
                let fired = self.autoplay.poll(now);
                if fired > 0 {
                    // The periodic advance; dropped by the guard if a
                    // transition or drag still owns the strip.
                    self.advance(Direction::Forward, now);
                }
                if fired > 0 || self.autoplay.progress() != before {
                    self.damage |= Damage::PROGRESS;
                }
                self.progress_timer = Some(
                    self.timers
                        .schedule(now.saturating_add(self.config.progress_tick), Tick::Progress),
                );
            }
        }
    }

    fn activate(&mut self, now: u64) {
        if self.initialized || self.sequence.is_empty() {
            return;
        }
        self.initialized = true;
        if let Some(timer) = self.ready_timer.take() {
            self.timers.cancel(timer);
        }
        self.damage |= Damage::REMEASURE | Damage::MARKERS;
        self.teleport_to_rest();
        self.restart_autoplay(now);
    }

    fn restart_autoplay(&mut self, now: u64) {
        if !self.config.autoplay {
            return;
        }
        if let Some(timer) = self.progress_timer.take() {
            self.timers.cancel(timer);
        }
        self.autoplay.reset(now);
        self.reconcile_autoplay(now);
        self.progress_timer = Some(
            self.timers
                .schedule(now.saturating_add(self.config.progress_tick), Tick::Progress),
        );
    }

    fn user_advance(&mut self, direction: Direction, now: u64) -> bool {
        let advanced = self.advance(direction, now);
        if advanced {
            // User-initiated navigation restarts the visual countdown.
            self.autoplay.reset(now);
            self.damage |= Damage::PROGRESS;
        }
        advanced
    }

    fn advance(&mut self, direction: Direction, now: u64) -> bool {
        if !self.initialized || self.sequence.is_empty() {
            return false;
        }
        if !matches!(self.mode, Mode::Idle) {
            return false;
        }
        let Some(unit) = self.slide_unit else {
            return false;
        };
        self.current = self.current.saturating_add_signed(direction.step());
        let timer = self.timers.schedule(
            now.saturating_add(self.config.transition_duration),
            Tick::TransitionEnd,
        );
        self.mode = Mode::Transitioning { timer };
        self.offset = Some(OffsetCommand::animated(offset_for(self.current, unit, 0.0)));
        self.damage |= Damage::OFFSET | Damage::MARKERS;
        true
    }

    /// Forces the machine back to `Idle`, invalidating any pending
    /// transition completion so it cannot fire against newer state.
    fn abort_motion(&mut self, now: u64) {
        match self.mode {
            Mode::Transitioning { timer } => {
                self.timers.cancel(timer);
                if let Some(target) = self.sequence.wrap_target(self.current) {
                    self.current = target;
                }
                self.mode = Mode::Idle;
            }
            Mode::Dragging { .. } => {
                self.mode = Mode::Idle;
            }
            Mode::Idle => {}
        }
        self.reconcile_autoplay(now);
    }

    fn teleport_to_rest(&mut self) {
        if let Some(unit) = self.slide_unit {
            self.offset = Some(OffsetCommand::teleport(offset_for(self.current, unit, 0.0)));
            self.damage |= Damage::OFFSET;
        }
    }

    fn reconcile_autoplay(&mut self, now: u64) {
        if !self.config.autoplay {
            return;
        }
        let should_run = self.initialized
            && !self.sequence.is_empty()
            && !self.hover_paused
            && !matches!(self.mode, Mode::Dragging { .. });
        if should_run {
            self.autoplay.resume(now);
        } else {
            self.autoplay.pause(now);
        }
    }
}

/// Snapshot of a [`Carousel`]'s state.
#[derive(Clone, Copy, Debug)]
pub struct CarouselDebugInfo {
    /// Current mutual-exclusion state.
    pub mode: ModeKind,
    /// Current padded index.
    pub current: usize,
    /// Current real-list index, as external callers see it.
    pub real_index: Option<usize>,
    /// Number of real slides.
    pub real_len: usize,
    /// Resolved slide width, if any.
    pub slide_unit: Option<f64>,
    /// Last emitted translation, if any.
    pub offset: Option<OffsetCommand>,
    /// Elapsed fraction of the autoplay period.
    pub progress: f64,
    /// Whether the autoplay countdown is accruing.
    pub autoplay_running: bool,
    /// Whether hover holds autoplay paused.
    pub hover_paused: bool,
    /// Whether the ready gate has opened.
    pub initialized: bool,
}

#[cfg(test)]
mod tests {
    use kurbo::Point;

    use super::{Carousel, DragMotion, ModeKind, PointerKind};
    use crate::{CarouselConfig, Damage};

    fn ready_carousel() -> Carousel<&'static str> {
        let mut carousel = Carousel::new(CarouselConfig::default(), &["a", "b", "c"], 0);
        for t in [1, 2, 3] {
            carousel.media_settled(t);
        }
        carousel.measured(Some(100.0), None, 4);
        carousel.take_damage();
        carousel
    }

    #[test]
    fn empty_media_list_is_inert() {
        let mut carousel = Carousel::new(CarouselConfig::default(), &[] as &[&str], 0);
        assert!(carousel.sequence().is_empty());
        assert_eq!(carousel.next_deadline(), None);

        carousel.media_settled(10);
        carousel.tick(10_000);
        assert!(!carousel.is_initialized());
        assert!(!carousel.next(10_001));
        carousel.pointer_down(PointerKind::Touch, Point::new(0.0, 0.0), 10_002);
        assert_eq!(carousel.mode(), ModeKind::Idle);
        assert_eq!(carousel.offset_command(), None);
    }

    #[test]
    fn ready_gate_opens_on_timeout_without_media() {
        let mut carousel = Carousel::new(CarouselConfig::default(), &["a"], 0);
        assert!(!carousel.is_initialized());
        assert_eq!(carousel.next_deadline(), Some(1_000));

        carousel.tick(1_000);
        assert!(carousel.is_initialized());
        assert!(carousel.take_damage().contains(Damage::REMEASURE));
    }

    #[test]
    fn drag_below_slop_does_not_intercept_scroll() {
        let mut carousel = ready_carousel();
        carousel.pointer_down(PointerKind::Touch, Point::new(200.0, 0.0), 100);

        let motion = carousel.pointer_move(Point::new(208.0, 40.0));
        assert_eq!(
            motion,
            DragMotion::Tracking {
                intercept_scroll: false
            }
        );

        // Crossing the slop makes the gesture horizontal for its remainder.
        let motion = carousel.pointer_move(Point::new(215.0, 40.0));
        assert_eq!(
            motion,
            DragMotion::Tracking {
                intercept_scroll: true
            }
        );
        let motion = carousel.pointer_move(Point::new(205.0, 40.0));
        assert_eq!(
            motion,
            DragMotion::Tracking {
                intercept_scroll: true
            }
        );
    }

    #[test]
    fn pointer_move_outside_drag_is_ignored() {
        let mut carousel = ready_carousel();
        assert_eq!(
            carousel.pointer_move(Point::new(50.0, 0.0)),
            DragMotion::Ignored
        );
    }

    #[test]
    fn debug_info_reflects_rest_state() {
        let carousel = ready_carousel();
        let info = carousel.debug_info();
        assert_eq!(info.mode, ModeKind::Idle);
        assert_eq!(info.current, 1);
        assert_eq!(info.real_index, Some(0));
        assert_eq!(info.real_len, 3);
        assert_eq!(info.slide_unit, Some(100.0));
        assert!(info.initialized);
    }
}
