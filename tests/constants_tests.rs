// Host-side tests for the tuning table's internal consistency.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn probabilities_are_valid() {
    assert!((0.0..=1.0).contains(&RIPPLE_ADMISSION_PROBABILITY));
    assert!((0.0..=1.0).contains(&TRAIL_ADMISSION_PROBABILITY));
    assert!((0.0..=1.0).contains(&RETARGET_PROBABILITY));
    assert!(FORMATION_FRACTION > 0.0 && FORMATION_FRACTION < 1.0);
    assert!(LOGO_SEEKER_FRACTION > 0.0 && LOGO_SEEKER_FRACTION <= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn frame_pacing_is_sane() {
    assert!(FRAME_INTERVAL_MS_DESKTOP > 0.0);
    // mobile runs at a reduced rate, never a higher one
    assert!(FRAME_INTERVAL_MS_MOBILE >= FRAME_INTERVAL_MS_DESKTOP);
    assert!(MOBILE_BREAKPOINT_PX > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn decay_rates_terminate() {
    assert!(RIPPLE_OPACITY_DECAY > 0.0);
    assert!(TRAIL_LIFE_DECAY > 0.0 && TRAIL_LIFE_DECAY < 1.0);
    assert!(VELOCITY_DAMPING > 0.0 && VELOCITY_DAMPING < 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn press_burst_parameters_stay_layered() {
    assert!(PRESS_BURST_RINGS >= 1);
    // the faintest ring must still be visible
    let last = PRESS_BURST_RINGS as f32 - 1.0;
    assert!(PRESS_OPACITY_BASE - last * PRESS_OPACITY_STEP > 0.0);
    // rings start inside their own max radius
    assert!(last * PRESS_RADIUS_OFFSET < PRESS_MAX_RADIUS_BASE);
    assert!(PRESS_SPEED_BASE > 0.0 && PRESS_SPEED_STEP >= 0.0);
    assert!(PRESS_MAX_RADIUS_STEP >= 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn populations_fit_their_bursts() {
    // one press and one theme burst must fit an empty water store
    let burst = PRESS_BURST_RINGS + THEME_BURST_RINGS + THEME_BURST_PARTICLES;
    assert!(WATER_RIPPLE_CAP + WATER_TRAIL_CAP >= burst);
    assert!(SPAWN_QUEUE_CAP > 0);
    assert!(LOGO_PARTICLE_COUNT_MOBILE <= LOGO_PARTICLE_COUNT_DESKTOP);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn formation_geometry_is_positive() {
    assert!(FORMATION_DISTANCE_PX > 0.0);
    assert!(BREATHE_RATE > 0.0);
    assert!(BREATHE_AMPLITUDE >= 0.0);
    assert!(ATTRACTION_FACTOR > 0.0 && ATTRACTION_FACTOR < 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn logo_canvas_has_area() {
    assert!(LOGO_CANVAS_WIDTH > 0);
    assert!(LOGO_CANVAS_HEIGHT > 0);
    assert!(LINK_DISTANCE_PX > 0.0);
    assert!(MAX_LINKS_PER_PARTICLE > 0);
}
