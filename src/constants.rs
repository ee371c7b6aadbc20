/// Effect tuning constants for the Ocean Town front-end.
///
/// These express intended behavior (population caps, admission odds, decay
/// rates) and keep magic numbers out of the update code. All are empirical
/// visual-taste values; no behavioral contract depends on the exact numbers.
// Entity populations
pub const WATER_RIPPLE_CAP: usize = 30;
pub const WATER_TRAIL_CAP: usize = 60;
pub const LOGO_PARTICLE_COUNT_DESKTOP: usize = 180;
pub const LOGO_PARTICLE_COUNT_MOBILE: usize = 120;
// Fraction of the logo pool that seeks logo targets; the rest drift freely
pub const LOGO_SEEKER_FRACTION: f32 = 0.75;

// Frame pacing (20 fps mobile, 30 fps desktop)
pub const FRAME_INTERVAL_MS_DESKTOP: f64 = 33.0;
pub const FRAME_INTERVAL_MS_MOBILE: f64 = 50.0;
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

// Emitter admission
pub const RIPPLE_ADMISSION_PROBABILITY: f32 = 0.08;
pub const TRAIL_ADMISSION_PROBABILITY: f32 = 0.30;
pub const MIN_POINTER_DELTA_PX: f32 = 2.0;
pub const SPAWN_QUEUE_CAP: usize = 64;

// Ripple shape and decay
pub const RIPPLE_MAX_RADIUS_BASE: f32 = 120.0;
pub const RIPPLE_MAX_RADIUS_SPAN: f32 = 80.0;
pub const RIPPLE_SPEED_BASE: f32 = 2.5;
pub const RIPPLE_SPEED_SPAN: f32 = 1.5;
pub const RIPPLE_START_OPACITY: f32 = 0.6;
pub const RIPPLE_OPACITY_DECAY: f32 = 0.004;

// Press burst (3 staggered rings per click)
pub const PRESS_BURST_RINGS: usize = 3;
pub const PRESS_RADIUS_OFFSET: f32 = 20.0;
pub const PRESS_MAX_RADIUS_BASE: f32 = 250.0;
pub const PRESS_MAX_RADIUS_STEP: f32 = 50.0;
pub const PRESS_SPEED_BASE: f32 = 4.0;
pub const PRESS_SPEED_STEP: f32 = 0.5;
pub const PRESS_OPACITY_BASE: f32 = 0.8;
pub const PRESS_OPACITY_STEP: f32 = 0.2;

// Theme-toggle celebration burst
pub const THEME_BURST_RINGS: usize = 5;
pub const THEME_BURST_PARTICLES: usize = 20;
pub const THEME_BURST_SPEED_BASE: f32 = 2.0;
pub const THEME_BURST_SPEED_SPAN: f32 = 2.0;

// Particle dynamics
pub const ATTRACTION_FACTOR: f32 = 0.05;
pub const VELOCITY_DAMPING: f32 = 0.95;
pub const VELOCITY_PERTURBATION: f32 = 0.15;
pub const DRIFT_SPEED_SPAN: f32 = 2.5;
pub const PARTICLE_SIZE_MIN: f32 = 1.5;
pub const PARTICLE_SIZE_SPAN: f32 = 3.5;
pub const PARTICLE_OPACITY_MIN: f32 = 0.4;
pub const PARTICLE_OPACITY_SPAN: f32 = 0.6;
pub const RETARGET_PROBABILITY: f32 = 0.002;

// Logo formation
pub const FORMATION_FRACTION: f32 = 0.78;
pub const FORMATION_DISTANCE_PX: f32 = 6.0;
pub const BREATHE_RATE: f32 = 0.05;
pub const BREATHE_AMPLITUDE: f32 = 2.0;

// Cursor trail
pub const TRAIL_LIFE_DECAY: f32 = 0.02;
pub const TRAIL_SIZE_MIN: f32 = 2.0;
pub const TRAIL_SIZE_SPAN: f32 = 4.0;
pub const TRAIL_DRIFT_SPAN: f32 = 2.0;

// Particle link lines
pub const LINK_DISTANCE_PX: f32 = 120.0;
pub const MAX_LINKS_PER_PARTICLE: usize = 8;
pub const LINK_BASE_ALPHA: f32 = 0.25;

// Logo canvas backing size
pub const LOGO_CANVAS_WIDTH: u32 = 600;
pub const LOGO_CANVAS_HEIGHT: u32 = 200;

// Water palette (rgb components used to build rgba() strings)
pub const FOAM_RGB: (u8, u8, u8) = (127, 215, 255);
pub const DEEP_RGB: (u8, u8, u8) = (0, 170, 255);
pub const MIST_RGB: (u8, u8, u8) = (79, 195, 247);

// Page glue timing
pub const SLIDESHOW_INTERVAL_MS: i32 = 5000;
pub const STATUS_REFRESH_MS: i32 = 10_000;
pub const COUNT_UP_DURATION_MS: f64 = 1000.0;
pub const CLICK_RIPPLE_LIFETIME_MS: i32 = 600;
pub const CATCH_COPY_STAGGER_MS: f64 = 200.0;
pub const REVEAL_THRESHOLD: f64 = 0.12;
pub const REVEAL_BOTTOM_MARGIN: &str = "0px 0px -100px 0px";
pub const REVEAL_DURATION_MS: f64 = 800.0;
pub const SURFBOARD_BOTTOM_GAP_PX: f64 = 100.0;
