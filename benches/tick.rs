//! Benchmarks for the animation tick hot path
//!
//! Run with: cargo bench tick

use std::time::Duration;

use immersive::{AnimationDriver, Easing, PanelGeometry, Rect};

fn main() {
    divan::main();
}

#[divan::bench]
fn full_animation_at_120hz() {
    let mut driver = AnimationDriver::new(1.0);
    driver.start(1.0, 0.0, Duration::from_millis(750), Easing::InOutSine);
    let dt = Duration::from_micros(8333);
    while let Some(tick) = driver.tick(dt) {
        divan::black_box(tick);
    }
}

#[divan::bench(args = [0.0, 0.25, 0.5, 0.75, 1.0])]
fn easing_in_out_sine(t: f32) -> f32 {
    Easing::InOutSine.apply(divan::black_box(t))
}

#[divan::bench]
fn geometry_derive() -> PanelGeometry {
    let container = Rect::new(0.0, 0.0, 800.0, 600.0);
    PanelGeometry::derive(divan::black_box(container), 0.37, 0.2, true)
}
