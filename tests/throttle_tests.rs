// Host-side tests for the frame scheduler's pure gating logic.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod throttle {
        include!("../src/core/throttle.rs");
    }
}

use crate::core::throttle::FrameThrottle;

#[test]
fn first_frame_always_runs() {
    let mut throttle = FrameThrottle::new(33.0);
    assert!(throttle.should_run(0.0));
}

#[test]
fn frames_inside_the_interval_are_skipped() {
    let mut throttle = FrameThrottle::new(33.0);
    assert!(throttle.should_run(1000.0));
    assert!(!throttle.should_run(1016.0));
    assert!(!throttle.should_run(1032.0));
    assert!(throttle.should_run(1033.0));
}

#[test]
fn reference_time_only_advances_on_processed_frames() {
    let mut throttle = FrameThrottle::new(50.0);
    assert!(throttle.should_run(100.0));
    // skipped frames must not push the next accepted frame further out
    assert!(!throttle.should_run(120.0));
    assert!(!throttle.should_run(140.0));
    assert!(throttle.should_run(150.0));
}

#[test]
fn hidden_surface_never_runs() {
    let mut throttle = FrameThrottle::new(33.0);
    throttle.set_visible(false);
    assert!(!throttle.is_visible());
    for t in [0.0, 100.0, 10_000.0] {
        assert!(!throttle.should_run(t));
    }
}

#[test]
fn becoming_visible_resumes_immediately() {
    let mut throttle = FrameThrottle::new(33.0);
    assert!(throttle.should_run(0.0));
    throttle.set_visible(false);
    assert!(!throttle.should_run(500.0));
    throttle.set_visible(true);
    // plenty of time has passed since the last processed frame
    assert!(throttle.should_run(501.0));
}
