// Copyright 2026 the Gyre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scripted carousel session against a synthetic host.
//!
//! Drives a [`Carousel`] through its whole surface (ready gate, autoplay,
//! hover pause, touch drag, resize, and a catalog-driven media swap) on a
//! deterministic clock, printing the host-visible frame after each step.
//!
//! Run with: `cargo run -p gyre_demos --example carousel_sim`

use gyre_demos::host::SimHost;
use gyre_engine::{Carousel, CarouselConfig, MediaCatalog, PointerKind};
use kurbo::Point;

fn main() {
    let mut catalog = MediaCatalog::new();
    catalog.insert(
        "influencer",
        vec!["livestream.jpg", "livestream2.jpg", "panel.jpg"],
    );
    catalog.insert("events", vec!["tournament.jpg", "stage.jpg"]);

    let media = catalog
        .activate(&"influencer")
        .expect("trigger is registered")
        .to_vec();

    let mut clock: u64 = 0;
    let mut carousel = Carousel::new(CarouselConfig::default(), &media, clock);
    let mut host = SimHost::new(640.0);

    println!("-- startup: waiting for media --");
    for _ in 0..3 {
        carousel.media_settled(clock);
    }
    host.sync(&mut carousel, clock);
    println!("[{clock:>6}ms] {}", host.frame(&carousel));

    println!("-- autoplay: one full period --");
    pump(&mut carousel, &mut host, &mut clock, 2_000);
    println!("[{clock:>6}ms] {}", host.frame(&carousel));
    pump(&mut carousel, &mut host, &mut clock, 500);
    println!("[{clock:>6}ms] {}", host.frame(&carousel));

    println!("-- hover pauses the countdown --");
    carousel.hover_start(clock);
    pump(&mut carousel, &mut host, &mut clock, 3_000);
    println!("[{clock:>6}ms] {}", host.frame(&carousel));
    carousel.hover_end(clock);
    host.sync(&mut carousel, clock);

    println!("-- touch drag: commit forward --");
    carousel.pointer_down(PointerKind::Touch, Point::new(400.0, 120.0), clock);
    for step in 1..=4 {
        let x = 400.0 - f64::from(step) * 40.0;
        carousel.pointer_move(Point::new(x, 120.0));
        host.sync(&mut carousel, clock);
        println!("[{clock:>6}ms] {}", host.frame(&carousel));
    }
    carousel.pointer_up(Point::new(240.0, 120.0), clock);
    host.sync(&mut carousel, clock);
    println!("[{clock:>6}ms] {}", host.frame(&carousel));
    pump(&mut carousel, &mut host, &mut clock, 500);
    println!("[{clock:>6}ms] {}", host.frame(&carousel));

    println!("-- resize burst collapses to one remeasure --");
    host.set_slide_width(480.0);
    for _ in 0..4 {
        clock += 40;
        carousel.resized(clock);
    }
    pump(&mut carousel, &mut host, &mut clock, 200);
    println!("[{clock:>6}ms] {}", host.frame(&carousel));

    println!("-- trigger swap: events media set --");
    let media = catalog
        .activate(&"events")
        .expect("trigger is registered")
        .to_vec();
    carousel.swap_media(&media, clock);
    host.sync(&mut carousel, clock);
    println!("[{clock:>6}ms] {}", host.frame(&carousel));
    pump(&mut carousel, &mut host, &mut clock, 2_100);
    println!("[{clock:>6}ms] {}", host.frame(&carousel));
}

/// Advances the simulated clock in 50 ms steps, pumping engine and host.
fn pump(
    carousel: &mut Carousel<&'static str>,
    host: &mut SimHost,
    clock: &mut u64,
    duration: u64,
) {
    let end = *clock + duration;
    while *clock < end {
        *clock = (*clock + 50).min(end);
        carousel.tick(*clock);
        host.sync(carousel, *clock);
    }
}
