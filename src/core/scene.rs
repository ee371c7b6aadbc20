use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::core::config::EffectConfig;
use crate::core::emitter::{Emitter, SpawnQueue, SpawnRequest};
use crate::core::entity::{Ambient, Entity, Seeker, StepCtx};
use crate::core::store::EntityStore;

/// Per-surface animation context: the store, the spawn queue, the emitter,
/// the seeded RNG and the surface dimensions, owned together so nothing
/// leaks into ambient state. One scene per canvas.
pub struct Scene {
    cfg: EffectConfig,
    width: f32,
    height: f32,
    store: EntityStore,
    queue: SpawnQueue,
    emitter: Emitter,
    rng: StdRng,
    formed: bool,
}

impl Scene {
    pub fn new(cfg: EffectConfig, width: f32, height: f32, seed: u64) -> Self {
        let store = EntityStore::new(cfg.population_cap);
        let queue = SpawnQueue::new(cfg.spawn_queue_cap);
        Self {
            cfg,
            width,
            height,
            store,
            queue,
            emitter: Emitter::new(),
            rng: StdRng::seed_from_u64(seed),
            formed: false,
        }
    }

    /// Populate the persistent logo pool: mostly target-seekers, the rest
    /// free drifters. Call once after construction.
    pub fn seed_logo_pool(&mut self, total: usize) {
        let (seekers, drifters) = EffectConfig::logo_pool_split(total);
        let mut ctx = StepCtx {
            width: self.width,
            height: self.height,
            formed: self.formed,
            cfg: &self.cfg,
            rng: &mut self.rng,
        };
        let mut pool = Vec::with_capacity(total);
        for _ in 0..seekers {
            pool.push(Entity::Seeker(Seeker::spawn(&mut ctx)));
        }
        for _ in 0..drifters {
            pool.push(Entity::Ambient(Ambient::spawn(&mut ctx)));
        }
        for entity in pool {
            self.store.push(entity);
        }
    }

    /// Called from input handlers; bounded, overflow silently dropped.
    pub fn enqueue(&mut self, req: SpawnRequest) {
        self.queue.push(req);
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    fn degenerate(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// One frame: drain queued spawn requests, integrate, update the
    /// formation latch. A zero-area surface skips everything.
    pub fn tick(&mut self) {
        if self.degenerate() {
            return;
        }
        self.drain_queue();
        self.integrate();
        self.update_formation();
    }

    /// Apply every queued spawn request through the emitter's admission
    /// rules. Runs before integration so same-frame input is visible to the
    /// integrator (and painted this frame).
    pub fn drain_queue(&mut self) {
        for req in self.queue.drain() {
            self.emitter
                .apply(req, &mut self.store, &self.cfg, &mut self.rng);
        }
    }

    /// Advance every entity one step and compact out the dead.
    pub fn integrate(&mut self) {
        let mut ctx = StepCtx {
            width: self.width,
            height: self.height,
            formed: self.formed,
            cfg: &self.cfg,
            rng: &mut self.rng,
        };
        self.store.integrate(&mut ctx);
    }

    /// Latch the formation flag once enough seekers sit on their targets.
    /// The latch only clears through `reseed_formation`.
    fn update_formation(&mut self) {
        if self.formed {
            return;
        }
        let mut seekers = 0usize;
        let mut converged = 0usize;
        for entity in self.store.entities() {
            if let Entity::Seeker(s) = entity {
                seekers += 1;
                if s.converged(self.cfg.formation_distance) {
                    converged += 1;
                }
            }
        }
        if seekers > 0 && (converged as f32) >= (seekers as f32) * self.cfg.formation_fraction {
            self.formed = true;
        }
    }

    pub fn formation_complete(&self) -> bool {
        self.formed
    }

    /// Explicit re-seed: clears the latch and scatters fresh targets so the
    /// pool re-forms from its current positions.
    pub fn reseed_formation(&mut self) {
        self.formed = false;
        let mut ctx = StepCtx {
            width: self.width,
            height: self.height,
            formed: false,
            cfg: &self.cfg,
            rng: &mut self.rng,
        };
        for entity in self.store.entities_mut() {
            if let Entity::Seeker(s) = entity {
                s.target = ctx.random_point();
            }
        }
    }

    pub fn entities(&self) -> &[Entity] {
        self.store.entities()
    }

    pub fn population(&self) -> usize {
        self.store.len()
    }

    pub fn population_cap(&self) -> usize {
        self.store.cap()
    }
}
