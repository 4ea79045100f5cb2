// Copyright 2026 the Gyre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `gyre_engine` crate.
//!
//! These drive a `Carousel` the way a host would (timestamps in, damage and
//! accessors out), with a focus on the looping seam, the drag/autoplay
//! mutual exclusion, and the timer lifecycle.

use gyre_engine::{Carousel, CarouselConfig, Damage, DragMotion, ModeKind, PointerKind};
use gyre_strip::SlideMarker;
use kurbo::Point;

const UNIT: f64 = 100.0;

fn quiet_config() -> CarouselConfig {
    CarouselConfig {
        autoplay: false,
        ..CarouselConfig::default()
    }
}

/// A carousel past its ready gate with measured geometry and drained damage.
fn ready_carousel(config: CarouselConfig, sources: &[&'static str]) -> Carousel<&'static str> {
    let mut carousel = Carousel::new(config, sources, 0);
    for _ in 0..3 {
        carousel.media_settled(0);
    }
    carousel.measured(Some(UNIT), None, 0);
    carousel.take_damage();
    carousel
}

/// Runs one animated transition to completion.
fn finish_transition(carousel: &mut Carousel<&'static str>, now: u64) {
    assert_eq!(carousel.mode(), ModeKind::Transitioning);
    carousel.tick(now);
    assert_eq!(carousel.mode(), ModeKind::Idle);
}

#[test]
fn initial_position_is_the_first_real_slide() {
    let carousel = ready_carousel(quiet_config(), &["a", "b", "c"]);

    assert_eq!(carousel.real_index(), Some(0));
    let offset = carousel.offset_command().unwrap();
    assert_eq!(offset.offset, -UNIT);
    assert!(!offset.animated);
}

#[test]
fn ready_gate_needs_three_settlements() {
    let mut carousel = Carousel::new(quiet_config(), &["a", "b", "c"], 0);
    carousel.media_settled(10);
    carousel.media_settled(20);
    assert!(!carousel.is_initialized());

    // A load failure counts exactly like a success.
    carousel.media_settled(30);
    assert!(carousel.is_initialized());
}

#[test]
fn advancing_three_times_walks_the_loop() {
    let mut carousel = ready_carousel(quiet_config(), &["a", "b", "c"]);

    // B.
    assert!(carousel.next(1_000));
    assert_eq!(carousel.real_index(), Some(1));
    finish_transition(&mut carousel, 1_500);

    // C.
    assert!(carousel.next(2_000));
    assert_eq!(carousel.real_index(), Some(2));
    finish_transition(&mut carousel, 2_500);

    // Into the trailing clone slot; externally this already reads as A.
    assert!(carousel.next(3_000));
    assert_eq!(carousel.real_index(), Some(0));
    let animated = carousel.offset_command().unwrap();
    assert!(animated.animated);
    assert_eq!(animated.offset, -4.0 * UNIT);

    // Completion teleports across the seam with no animated rewind.
    finish_transition(&mut carousel, 3_500);
    assert_eq!(carousel.real_index(), Some(0));
    let teleport = carousel.offset_command().unwrap();
    assert!(!teleport.animated);
    assert_eq!(teleport.offset, -UNIT);
}

#[test]
fn backward_wrap_is_symmetric() {
    let mut carousel = ready_carousel(quiet_config(), &["a", "b", "c"]);

    assert!(carousel.prev(1_000));
    finish_transition(&mut carousel, 1_500);
    assert_eq!(carousel.real_index(), Some(2));
    assert_eq!(carousel.offset_command().unwrap().offset, -3.0 * UNIT);
}

#[test]
fn advance_is_dropped_while_transitioning() {
    let mut carousel = ready_carousel(quiet_config(), &["a", "b", "c"]);

    assert!(carousel.next(1_000));
    // A rapid second click collapses to "ignore until completion".
    assert!(!carousel.next(1_100));
    assert_eq!(carousel.real_index(), Some(1));

    finish_transition(&mut carousel, 1_500);
    assert!(carousel.next(1_600));
}

#[test]
fn drag_start_is_ignored_while_transitioning() {
    let mut carousel = ready_carousel(quiet_config(), &["a", "b", "c"]);
    assert!(carousel.next(1_000));

    carousel.pointer_down(PointerKind::Touch, Point::new(300.0, 10.0), 1_100);
    assert_eq!(carousel.mode(), ModeKind::Transitioning);
    // No start position was recorded, so moves are ignored too.
    assert_eq!(
        carousel.pointer_move(Point::new(250.0, 10.0)),
        DragMotion::Ignored
    );
}

#[test]
fn touch_drag_commits_past_twenty_percent() {
    let mut carousel = ready_carousel(quiet_config(), &["a", "b", "c"]);

    carousel.pointer_down(PointerKind::Touch, Point::new(500.0, 0.0), 1_000);
    carousel.pointer_move(Point::new(500.0 - 0.21 * UNIT, 0.0));
    carousel.pointer_up(Point::new(500.0 - 0.21 * UNIT, 0.0), 1_200);

    // Committed forward: drag end composes with an advance.
    assert_eq!(carousel.mode(), ModeKind::Transitioning);
    assert_eq!(carousel.real_index(), Some(1));
    finish_transition(&mut carousel, 1_700);
}

#[test]
fn touch_drag_below_threshold_snaps_back() {
    let mut carousel = ready_carousel(quiet_config(), &["a", "b", "c"]);

    carousel.pointer_down(PointerKind::Touch, Point::new(500.0, 0.0), 1_000);
    carousel.pointer_move(Point::new(500.0 - 0.19 * UNIT, 0.0));
    carousel.take_damage();
    carousel.pointer_up(Point::new(500.0 - 0.19 * UNIT, 0.0), 1_200);

    // Snap-back: an animated return to the rest offset, idle immediately.
    assert_eq!(carousel.mode(), ModeKind::Idle);
    assert_eq!(carousel.real_index(), Some(0));
    let offset = carousel.offset_command().unwrap();
    assert!(offset.animated);
    assert_eq!(offset.offset, -UNIT);
}

#[test]
fn mouse_drag_commits_earlier_than_touch() {
    let mut carousel = ready_carousel(quiet_config(), &["a", "b", "c"]);

    // 16% of a slide: below the touch threshold, above the mouse one.
    carousel.pointer_down(PointerKind::Mouse, Point::new(500.0, 0.0), 1_000);
    carousel.pointer_move(Point::new(500.0 - 0.16 * UNIT, 0.0));
    carousel.pointer_up(Point::new(500.0 - 0.16 * UNIT, 0.0), 1_200);
    assert_eq!(carousel.mode(), ModeKind::Transitioning);
    finish_transition(&mut carousel, 1_700);

    // 14% snaps back even for a mouse.
    carousel.pointer_down(PointerKind::Mouse, Point::new(500.0, 0.0), 2_000);
    carousel.pointer_move(Point::new(500.0 - 0.14 * UNIT, 0.0));
    carousel.pointer_up(Point::new(500.0 - 0.14 * UNIT, 0.0), 2_200);
    assert_eq!(carousel.mode(), ModeKind::Idle);
    assert_eq!(carousel.real_index(), Some(1));
}

#[test]
fn dragging_backward_commits_to_the_previous_slide() {
    let mut carousel = ready_carousel(quiet_config(), &["a", "b", "c"]);

    carousel.pointer_down(PointerKind::Touch, Point::new(500.0, 0.0), 1_000);
    carousel.pointer_move(Point::new(500.0 + 0.25 * UNIT, 0.0));
    carousel.pointer_up(Point::new(500.0 + 0.25 * UNIT, 0.0), 1_200);

    finish_transition(&mut carousel, 1_700);
    // From A a backward commit wraps to C.
    assert_eq!(carousel.real_index(), Some(2));
}

#[test]
fn drag_tracking_emits_non_animated_offsets() {
    let mut carousel = ready_carousel(quiet_config(), &["a", "b", "c"]);

    carousel.pointer_down(PointerKind::Touch, Point::new(500.0, 0.0), 1_000);
    carousel.take_damage();

    carousel.pointer_move(Point::new(465.0, 0.0));
    assert!(carousel.take_damage().contains(Damage::OFFSET));
    let offset = carousel.offset_command().unwrap();
    assert!(!offset.animated);
    assert_eq!(offset.offset, -UNIT - 35.0);
}

#[test]
fn autoplay_advances_once_per_period() {
    let mut carousel = ready_carousel(CarouselConfig::default(), &["a", "b", "c"]);

    // Pump the progress tick up to just before the period boundary.
    let mut t = 50;
    while t < 2_000 {
        carousel.tick(t);
        t += 50;
    }
    assert_eq!(carousel.real_index(), Some(0));

    carousel.tick(2_000);
    assert_eq!(carousel.real_index(), Some(1));
    assert_eq!(carousel.mode(), ModeKind::Transitioning);
    // The period completion wrapped the countdown.
    assert!(carousel.progress() < 0.05);
}

#[test]
fn hover_pause_freezes_progress_and_resume_continues_it() {
    let mut carousel = ready_carousel(CarouselConfig::default(), &["a", "b", "c"]);

    let mut t = 50;
    while t <= 800 {
        carousel.tick(t);
        t += 50;
    }
    assert!((carousel.progress() - 0.4).abs() < 1e-9);

    carousel.hover_start(800);
    assert!(!carousel.is_autoplay_running());

    // An arbitrary real-time gap passes while paused.
    carousel.tick(60_000);
    assert!((carousel.progress() - 0.4).abs() < 1e-9);
    assert_eq!(carousel.real_index(), Some(0));

    // Resuming continues from 0.4, not from zero.
    carousel.hover_end(60_000);
    carousel.tick(60_050);
    assert!((carousel.progress() - 0.4).abs() < 0.05);

    // The remaining 60% of the period completes and advances.
    carousel.tick(61_200);
    assert_eq!(carousel.real_index(), Some(1));
}

#[test]
fn user_navigation_restarts_the_countdown() {
    let mut carousel = ready_carousel(CarouselConfig::default(), &["a", "b", "c"]);

    let mut t = 50;
    while t <= 1_000 {
        carousel.tick(t);
        t += 50;
    }
    assert!((carousel.progress() - 0.5).abs() < 1e-9);

    assert!(carousel.next(1_000));
    assert!(carousel.take_damage().contains(Damage::PROGRESS));
    assert_eq!(carousel.progress(), 0.0);
}

#[test]
fn dragging_holds_the_autoplay_driver() {
    let mut carousel = ready_carousel(CarouselConfig::default(), &["a", "b", "c"]);

    carousel.pointer_down(PointerKind::Touch, Point::new(500.0, 0.0), 100);
    assert!(!carousel.is_autoplay_running());

    // Periods' worth of ticks pass under the finger; nothing advances.
    let mut t = 150;
    while t <= 4_500 {
        carousel.tick(t);
        t += 50;
    }
    assert_eq!(carousel.real_index(), Some(0));
    assert_eq!(carousel.mode(), ModeKind::Dragging);

    // Release below threshold: countdown restarts from zero and re-runs.
    carousel.pointer_up(Point::new(505.0, 0.0), 4_500);
    assert_eq!(carousel.progress(), 0.0);
    assert!(carousel.is_autoplay_running());
}

#[test]
fn resize_burst_collapses_to_one_remeasure() {
    let mut carousel = ready_carousel(quiet_config(), &["a", "b", "c"]);

    carousel.resized(1_000);
    carousel.resized(1_060);
    carousel.resized(1_120);
    assert_eq!(carousel.next_deadline(), Some(1_270));

    carousel.tick(1_200);
    assert!(!carousel.take_damage().contains(Damage::REMEASURE));

    carousel.tick(1_270);
    assert!(carousel.take_damage().contains(Damage::REMEASURE));

    // Settled: nothing further fires.
    carousel.tick(2_000);
    assert!(!carousel.take_damage().contains(Damage::REMEASURE));
}

#[test]
fn remeasure_reapplies_the_rest_offset_without_animation() {
    let mut carousel = ready_carousel(quiet_config(), &["a", "b", "c"]);

    carousel.measured(Some(250.0), None, 2_000);
    let offset = carousel.offset_command().unwrap();
    assert!(!offset.animated);
    assert_eq!(offset.offset, -250.0);
    assert_eq!(carousel.slide_unit(), Some(250.0));
}

#[test]
fn remeasure_mid_transition_invalidates_the_completion() {
    let mut carousel = ready_carousel(quiet_config(), &["a", "b", "c"]);

    assert!(carousel.next(1_000));
    carousel.measured(Some(120.0), None, 1_200);

    // The pending completion was cancelled, not left to fire on stale state.
    assert_eq!(carousel.mode(), ModeKind::Idle);
    let offset = carousel.offset_command().unwrap();
    assert!(!offset.animated);
    assert_eq!(offset.offset, -2.0 * 120.0);

    // The dead timer's deadline passes without effect.
    carousel.tick(1_500);
    assert_eq!(carousel.mode(), ModeKind::Idle);
    assert_eq!(carousel.real_index(), Some(1));
}

#[test]
fn invalid_measurements_defer_position_math() {
    let mut carousel = Carousel::new(quiet_config(), &["a", "b", "c"], 0);
    for t in 0..3 {
        carousel.media_settled(t);
    }

    carousel.measured(Some(0.0), None, 10);
    assert_eq!(carousel.slide_unit(), None);
    assert_eq!(carousel.offset_command(), None);
    assert!(!carousel.next(20));

    // The retried measurement unblocks everything.
    carousel.measured(None, Some(UNIT), 30);
    assert_eq!(carousel.offset_command().unwrap().offset, -UNIT);
    assert!(carousel.next(40));
}

#[test]
fn markers_track_the_active_neighborhood() {
    let mut carousel = ready_carousel(quiet_config(), &["a", "b", "c"]);

    let markers = carousel.markers();
    assert_eq!(
        markers.as_slice(),
        &[
            (0, SlideMarker::Prev),
            (1, SlideMarker::Active),
            (2, SlideMarker::Next),
        ]
    );

    assert!(carousel.next(1_000));
    let markers = carousel.markers();
    assert_eq!(
        markers.as_slice(),
        &[
            (1, SlideMarker::Prev),
            (2, SlideMarker::Active),
            (3, SlideMarker::Next),
        ]
    );
}

#[test]
fn swapping_media_rebuilds_and_restarts() {
    let mut carousel = ready_carousel(CarouselConfig::default(), &["a", "b", "c"]);
    assert!(carousel.next(1_000));
    carousel.take_damage();

    carousel.swap_media(&["x", "y"], 1_200);

    assert_eq!(carousel.sequence().padded_len(), 4);
    assert_eq!(carousel.mode(), ModeKind::Idle);
    assert_eq!(carousel.real_index(), Some(0));
    assert_eq!(carousel.progress(), 0.0);

    let damage = carousel.take_damage();
    assert!(damage.contains(Damage::REMEASURE));
    assert!(damage.contains(Damage::MARKERS));

    // The old transition completion died with the swap.
    carousel.tick(1_500);
    assert_eq!(carousel.mode(), ModeKind::Idle);

    // The recreated autoplay pair still drives the new sequence.
    let mut t = 1_250;
    while t <= 3_200 {
        carousel.tick(t);
        t += 50;
    }
    assert_eq!(carousel.real_index(), Some(1));
}

#[test]
fn swapping_to_an_empty_set_degrades_to_inert() {
    let mut carousel = ready_carousel(CarouselConfig::default(), &["a", "b", "c"]);

    carousel.swap_media(&[], 1_000);
    assert!(carousel.sequence().is_empty());
    assert!(!carousel.is_initialized());
    assert!(!carousel.next(1_100));
    assert_eq!(carousel.progress(), 0.0);

    // Only inert time remains.
    carousel.tick(10_000);
    assert_eq!(carousel.real_index(), None);
}

#[test]
fn rest_invariant_holds_across_a_long_session() {
    let mut carousel = ready_carousel(quiet_config(), &["a", "b", "c"]);

    let mut t = 1_000;
    for _ in 0..12 {
        assert!(carousel.next(t));
        carousel.tick(t + 500);
        let real = carousel.real_index().unwrap();
        assert!(real < 3);
        t += 1_000;
    }
    // Twelve forward steps from A land on A again.
    assert_eq!(carousel.real_index(), Some(0));
}
