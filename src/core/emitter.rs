use glam::Vec2;
use rand::rngs::StdRng;
use rand::Rng;
use smallvec::SmallVec;

use crate::core::config::EffectConfig;
use crate::core::entity::{Entity, Ripple, RippleTint, Trail};
use crate::core::store::EntityStore;

/// Creation request produced by an input handler. Handlers never touch the
/// store directly; the scene drains these once per tick before integrating,
/// so the store has a single writer per frame.
#[derive(Clone, Copy, Debug)]
pub enum SpawnRequest {
    PointerMove { x: f32, y: f32 },
    Press { x: f32, y: f32 },
    Burst { x: f32, y: f32, rings: usize },
}

/// Bounded queue between input handlers and the frame tick. Overflow is
/// dropped; decorative input loss is invisible.
pub struct SpawnQueue {
    items: SmallVec<[SpawnRequest; 16]>,
    cap: usize,
}

impl SpawnQueue {
    pub fn new(cap: usize) -> Self {
        Self {
            items: SmallVec::new(),
            cap,
        }
    }

    pub fn push(&mut self, req: SpawnRequest) -> bool {
        if self.items.len() >= self.cap {
            return false;
        }
        self.items.push(req);
        true
    }

    pub fn drain(&mut self) -> SmallVec<[SpawnRequest; 16]> {
        std::mem::take(&mut self.items)
    }
}

/// Decides which requests become entities: probability gating for pointer
/// movement, a minimum movement delta to stop micro-movement flooding, and
/// unconditional (but still capped) staggered bursts for presses.
pub struct Emitter {
    last_sample: Option<Vec2>,
}

impl Emitter {
    pub fn new() -> Self {
        Self { last_sample: None }
    }

    pub fn apply(
        &mut self,
        req: SpawnRequest,
        store: &mut EntityStore,
        cfg: &EffectConfig,
        rng: &mut StdRng,
    ) {
        match req {
            SpawnRequest::PointerMove { x, y } => self.pointer_move(Vec2::new(x, y), store, cfg, rng),
            SpawnRequest::Press { x, y } => {
                press_burst(Vec2::new(x, y), cfg.press_rings, store, cfg);
            }
            SpawnRequest::Burst { x, y, rings } => {
                let center = Vec2::new(x, y);
                press_burst(center, rings, store, cfg);
                radial_trails(center, store, cfg, rng);
            }
        }
    }

    fn pointer_move(
        &mut self,
        pos: Vec2,
        store: &mut EntityStore,
        cfg: &EffectConfig,
        rng: &mut StdRng,
    ) {
        let delta = match self.last_sample.replace(pos) {
            Some(prev) => (pos - prev).length(),
            None => f32::INFINITY,
        };
        if delta < cfg.min_pointer_delta {
            return;
        }

        if rng.gen::<f32>() < cfg.trail_admission && store.has_room() {
            let span = cfg.trail_drift_span;
            store.push(Entity::Trail(Trail {
                pos,
                vel: Vec2::new(
                    (rng.gen::<f32>() - 0.5) * span,
                    (rng.gen::<f32>() - 0.5) * span,
                ),
                size: cfg.trail_size_min + rng.gen::<f32>() * cfg.trail_size_span,
                life: 1.0,
            }));
        }

        if rng.gen::<f32>() < cfg.ripple_admission && store.has_room() {
            store.push(Entity::Ripple(Ripple {
                center: pos,
                radius: 0.0,
                max_radius: cfg.ripple_max_radius_base
                    + rng.gen::<f32>() * cfg.ripple_max_radius_span,
                speed: cfg.ripple_speed_base + rng.gen::<f32>() * cfg.ripple_speed_span,
                opacity: cfg.ripple_start_opacity,
                tint: if rng.gen::<f32>() > 0.5 {
                    RippleTint::Foam
                } else {
                    RippleTint::Deep
                },
            }));
        }
    }
}

/// Layered rings with increasing reach and decreasing opacity. Bypasses the
/// probability gate but never the population cap.
fn press_burst(center: Vec2, rings: usize, store: &mut EntityStore, cfg: &EffectConfig) {
    for i in 0..rings {
        let i_f = i as f32;
        let admitted = store.push(Entity::Ripple(Ripple {
            center,
            radius: i_f * cfg.press_radius_offset,
            max_radius: cfg.press_max_radius_base + i_f * cfg.press_max_radius_step,
            speed: cfg.press_speed_base + i_f * cfg.press_speed_step,
            opacity: cfg.press_opacity_base - i_f * cfg.press_opacity_step,
            tint: RippleTint::Foam,
        }));
        if !admitted {
            break;
        }
    }
}

/// Evenly fanned short-lived particles for the theme-toggle celebration.
fn radial_trails(center: Vec2, store: &mut EntityStore, cfg: &EffectConfig, rng: &mut StdRng) {
    let count = cfg.burst_particles;
    for i in 0..count {
        let angle = std::f32::consts::TAU * i as f32 / count as f32;
        let speed = cfg.burst_speed_base + rng.gen::<f32>() * cfg.burst_speed_span;
        let admitted = store.push(Entity::Trail(Trail {
            pos: center,
            vel: Vec2::new(angle.cos(), angle.sin()) * speed,
            size: cfg.trail_size_min + rng.gen::<f32>() * cfg.trail_size_span,
            life: 1.0,
        }));
        if !admitted {
            break;
        }
    }
}
