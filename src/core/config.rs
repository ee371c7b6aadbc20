use crate::constants::*;

/// Tuning for one animated surface. Scenes are constructed from a config
/// value so alternative tunings never require touching the update code.
#[derive(Clone, Debug)]
pub struct EffectConfig {
    // admission
    pub population_cap: usize,
    pub ripple_admission: f32,
    pub trail_admission: f32,
    pub min_pointer_delta: f32,
    pub spawn_queue_cap: usize,

    // ripples
    pub ripple_max_radius_base: f32,
    pub ripple_max_radius_span: f32,
    pub ripple_speed_base: f32,
    pub ripple_speed_span: f32,
    pub ripple_start_opacity: f32,
    pub ripple_opacity_decay: f32,

    // press burst
    pub press_rings: usize,
    pub press_radius_offset: f32,
    pub press_max_radius_base: f32,
    pub press_max_radius_step: f32,
    pub press_speed_base: f32,
    pub press_speed_step: f32,
    pub press_opacity_base: f32,
    pub press_opacity_step: f32,
    pub burst_particles: usize,
    pub burst_speed_base: f32,
    pub burst_speed_span: f32,

    // particles
    pub attraction: f32,
    pub damping: f32,
    pub perturbation: f32,
    pub drift_speed_span: f32,
    pub particle_size_min: f32,
    pub particle_size_span: f32,
    pub particle_opacity_min: f32,
    pub particle_opacity_span: f32,
    pub retarget_probability: f32,

    // formation
    pub formation_fraction: f32,
    pub formation_distance: f32,
    pub breathe_rate: f32,
    pub breathe_amplitude: f32,

    // trails
    pub trail_life_decay: f32,
    pub trail_size_min: f32,
    pub trail_size_span: f32,
    pub trail_drift_span: f32,
}

impl Default for EffectConfig {
    fn default() -> Self {
        Self {
            population_cap: WATER_RIPPLE_CAP + WATER_TRAIL_CAP,
            ripple_admission: RIPPLE_ADMISSION_PROBABILITY,
            trail_admission: TRAIL_ADMISSION_PROBABILITY,
            min_pointer_delta: MIN_POINTER_DELTA_PX,
            spawn_queue_cap: SPAWN_QUEUE_CAP,
            ripple_max_radius_base: RIPPLE_MAX_RADIUS_BASE,
            ripple_max_radius_span: RIPPLE_MAX_RADIUS_SPAN,
            ripple_speed_base: RIPPLE_SPEED_BASE,
            ripple_speed_span: RIPPLE_SPEED_SPAN,
            ripple_start_opacity: RIPPLE_START_OPACITY,
            ripple_opacity_decay: RIPPLE_OPACITY_DECAY,
            press_rings: PRESS_BURST_RINGS,
            press_radius_offset: PRESS_RADIUS_OFFSET,
            press_max_radius_base: PRESS_MAX_RADIUS_BASE,
            press_max_radius_step: PRESS_MAX_RADIUS_STEP,
            press_speed_base: PRESS_SPEED_BASE,
            press_speed_step: PRESS_SPEED_STEP,
            press_opacity_base: PRESS_OPACITY_BASE,
            press_opacity_step: PRESS_OPACITY_STEP,
            burst_particles: THEME_BURST_PARTICLES,
            burst_speed_base: THEME_BURST_SPEED_BASE,
            burst_speed_span: THEME_BURST_SPEED_SPAN,
            attraction: ATTRACTION_FACTOR,
            damping: VELOCITY_DAMPING,
            perturbation: VELOCITY_PERTURBATION,
            drift_speed_span: DRIFT_SPEED_SPAN,
            particle_size_min: PARTICLE_SIZE_MIN,
            particle_size_span: PARTICLE_SIZE_SPAN,
            particle_opacity_min: PARTICLE_OPACITY_MIN,
            particle_opacity_span: PARTICLE_OPACITY_SPAN,
            retarget_probability: RETARGET_PROBABILITY,
            formation_fraction: FORMATION_FRACTION,
            formation_distance: FORMATION_DISTANCE_PX,
            breathe_rate: BREATHE_RATE,
            breathe_amplitude: BREATHE_AMPLITUDE,
            trail_life_decay: TRAIL_LIFE_DECAY,
            trail_size_min: TRAIL_SIZE_MIN,
            trail_size_span: TRAIL_SIZE_SPAN,
            trail_drift_span: TRAIL_DRIFT_SPAN,
        }
    }
}

impl EffectConfig {
    /// Fullscreen water surface: transient ripples and cursor trails.
    pub fn water() -> Self {
        Self::default()
    }

    /// Logo surface: a persistent pool of seekers and drifters.
    pub fn logo(is_mobile: bool) -> Self {
        let count = if is_mobile {
            LOGO_PARTICLE_COUNT_MOBILE
        } else {
            LOGO_PARTICLE_COUNT_DESKTOP
        };
        Self {
            population_cap: count,
            ..Self::default()
        }
    }

    /// How a logo population splits into seekers vs. free drifters.
    pub fn logo_pool_split(total: usize) -> (usize, usize) {
        let seekers = ((total as f32) * LOGO_SEEKER_FRACTION).round() as usize;
        let seekers = seekers.min(total);
        (seekers, total - seekers)
    }
}
