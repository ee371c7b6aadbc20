use glam::Vec2;
use rand::rngs::StdRng;
use rand::Rng;

use crate::core::config::EffectConfig;

/// Everything an entity needs to advance one frame. Built fresh by the scene
/// each tick; entities never hold references into the scene.
pub struct StepCtx<'a> {
    pub width: f32,
    pub height: f32,
    pub formed: bool,
    pub cfg: &'a EffectConfig,
    pub rng: &'a mut StdRng,
}

impl StepCtx<'_> {
    fn contains(&self, p: Vec2) -> bool {
        p.x >= 0.0 && p.x <= self.width && p.y >= 0.0 && p.y <= self.height
    }

    pub fn random_point(&mut self) -> Vec2 {
        Vec2::new(
            self.rng.gen::<f32>() * self.width,
            self.rng.gen::<f32>() * self.height,
        )
    }
}

#[inline]
fn jitter(rng: &mut StdRng) -> f32 {
    rng.gen::<f32>() - 0.5
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum EntityKind {
    Ripple,
    Ambient,
    Seeker,
    Trail,
}

/// Palette slot for a ripple's outer ring.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RippleTint {
    Foam,
    Deep,
}

/// An expanding ring. Radius grows monotonically, opacity decays linearly;
/// the ring dies when either limit is crossed.
#[derive(Clone, Debug)]
pub struct Ripple {
    pub center: Vec2,
    pub radius: f32,
    pub max_radius: f32,
    pub speed: f32,
    pub opacity: f32,
    pub tint: RippleTint,
}

impl Ripple {
    fn step(&mut self, ctx: &StepCtx) {
        self.radius += self.speed;
        self.opacity -= ctx.cfg.ripple_opacity_decay;
    }

    fn alive(&self) -> bool {
        self.opacity > 0.0 && self.radius < self.max_radius
    }
}

/// A free drifter. Never removed: leaving the surface re-randomizes it in
/// place so the pool size stays constant without reallocation.
#[derive(Clone, Debug)]
pub struct Ambient {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    pub opacity: f32,
}

impl Ambient {
    pub fn spawn(ctx: &mut StepCtx) -> Self {
        let pos = ctx.random_point();
        let span = ctx.cfg.drift_speed_span;
        let vel = Vec2::new(jitter(ctx.rng) * span, jitter(ctx.rng) * span);
        Self {
            pos,
            vel,
            size: ctx.cfg.particle_size_min + ctx.rng.gen::<f32>() * ctx.cfg.particle_size_span,
            opacity: ctx.cfg.particle_opacity_min
                + ctx.rng.gen::<f32>() * ctx.cfg.particle_opacity_span,
        }
    }

    fn step(&mut self, ctx: &mut StepCtx) {
        self.pos += self.vel;
        let p = ctx.cfg.perturbation;
        self.vel += Vec2::new(jitter(ctx.rng) * p, jitter(ctx.rng) * p);
        self.vel *= ctx.cfg.damping;
        if !ctx.contains(self.pos) {
            *self = Self::spawn(ctx);
        }
    }
}

/// A particle attracted toward a target point of the logo shape. Once the
/// scene reports the formation substantially complete, a subtle phase-driven
/// breathing offset keeps the converged shape alive.
#[derive(Clone, Debug)]
pub struct Seeker {
    pub pos: Vec2,
    pub vel: Vec2,
    pub target: Vec2,
    pub size: f32,
    pub opacity: f32,
    pub phase: f32,
}

impl Seeker {
    pub fn spawn(ctx: &mut StepCtx) -> Self {
        let base = Ambient::spawn(ctx);
        Self {
            pos: base.pos,
            vel: base.vel,
            target: ctx.random_point(),
            size: base.size,
            opacity: base.opacity,
            phase: ctx.rng.gen::<f32>() * std::f32::consts::TAU,
        }
    }

    fn step(&mut self, ctx: &mut StepCtx) {
        self.pos += (self.target - self.pos) * ctx.cfg.attraction + self.vel;
        let p = ctx.cfg.perturbation;
        self.vel += Vec2::new(jitter(ctx.rng) * p, jitter(ctx.rng) * p);
        self.vel *= ctx.cfg.damping;

        if ctx.formed {
            let prev = self.phase;
            self.phase += ctx.cfg.breathe_rate;
            let amp = ctx.cfg.breathe_amplitude;
            self.pos += Vec2::new(
                (self.phase.sin() - prev.sin()) * amp,
                ((self.phase * 1.3).cos() - (prev * 1.3).cos()) * amp,
            );
        }

        if ctx.rng.gen::<f32>() < ctx.cfg.retarget_probability {
            self.target = ctx.random_point();
        }
        if !ctx.contains(self.pos) {
            let target = self.target;
            *self = Self::spawn(ctx);
            // keep seeking the same logo point after a respawn
            self.target = target;
        }
    }

    pub fn converged(&self, distance: f32) -> bool {
        (self.target - self.pos).length() < distance
    }
}

/// A short-lived cursor dot with fixed velocity and linear life decay.
#[derive(Clone, Debug)]
pub struct Trail {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    pub life: f32,
}

impl Trail {
    fn step(&mut self, ctx: &StepCtx) {
        self.pos += self.vel;
        self.life -= ctx.cfg.trail_life_decay;
    }

    fn alive(&self) -> bool {
        self.life > 0.0
    }
}

/// One tagged-variant entity type so the integrator and renderer operate
/// polymorphically over a single store.
#[derive(Clone, Debug)]
pub enum Entity {
    Ripple(Ripple),
    Ambient(Ambient),
    Seeker(Seeker),
    Trail(Trail),
}

impl Entity {
    pub fn kind(&self) -> EntityKind {
        match self {
            Entity::Ripple(_) => EntityKind::Ripple,
            Entity::Ambient(_) => EntityKind::Ambient,
            Entity::Seeker(_) => EntityKind::Seeker,
            Entity::Trail(_) => EntityKind::Trail,
        }
    }

    pub fn is_alive(&self) -> bool {
        match self {
            Entity::Ripple(r) => r.alive(),
            Entity::Ambient(_) | Entity::Seeker(_) => true,
            Entity::Trail(t) => t.alive(),
        }
    }

    pub fn step(&mut self, ctx: &mut StepCtx) {
        match self {
            Entity::Ripple(r) => r.step(ctx),
            Entity::Ambient(a) => a.step(ctx),
            Entity::Seeker(s) => s.step(ctx),
            Entity::Trail(t) => t.step(ctx),
        }
    }

    pub fn position(&self) -> Vec2 {
        match self {
            Entity::Ripple(r) => r.center,
            Entity::Ambient(a) => a.pos,
            Entity::Seeker(s) => s.pos,
            Entity::Trail(t) => t.pos,
        }
    }
}
