// Host-side tests for the per-entity update rules.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core {
    pub mod config {
        include!("../src/core/config.rs");
    }
    pub mod entity {
        include!("../src/core/entity.rs");
    }
}

use crate::core::config::EffectConfig;
use crate::core::entity::*;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn still_cfg() -> EffectConfig {
    // no randomness in motion: pure attraction and damping
    EffectConfig {
        perturbation: 0.0,
        retarget_probability: 0.0,
        drift_speed_span: 0.0,
        ..EffectConfig::default()
    }
}

#[test]
fn ripple_radius_grows_and_opacity_fades_until_removal() {
    let cfg = EffectConfig::default();
    let mut rng = StdRng::seed_from_u64(1);
    let mut ctx = StepCtx {
        width: 800.0,
        height: 600.0,
        formed: false,
        cfg: &cfg,
        rng: &mut rng,
    };
    let mut entity = Entity::Ripple(Ripple {
        center: Vec2::new(100.0, 100.0),
        radius: 0.0,
        max_radius: 120.0,
        speed: 3.0,
        opacity: 0.6,
        tint: RippleTint::Foam,
    });

    let mut prev_radius = 0.0_f32;
    let mut prev_opacity = 0.6_f32;
    let mut steps = 0usize;
    while entity.is_alive() {
        // alive means neither removal condition holds yet
        if let Entity::Ripple(r) = &entity {
            assert!(r.opacity > 0.0 && r.radius < r.max_radius);
        }
        entity.step(&mut ctx);
        let Entity::Ripple(r) = &entity else {
            unreachable!()
        };
        assert!(r.radius >= prev_radius, "radius must never shrink");
        assert!(r.opacity <= prev_opacity, "opacity must never grow");
        prev_radius = r.radius;
        prev_opacity = r.opacity;
        steps += 1;
        assert!(steps < 10_000, "ripple never died");
    }

    let Entity::Ripple(r) = &entity else {
        unreachable!()
    };
    assert!(r.opacity <= 0.0 || r.radius >= r.max_radius);
    // 120 max radius at speed 3 is exactly 40 growth steps
    assert_eq!(steps, 40);
}

#[test]
fn trail_life_decays_linearly_to_removal() {
    let cfg = EffectConfig::default();
    let mut rng = StdRng::seed_from_u64(2);
    let mut ctx = StepCtx {
        width: 800.0,
        height: 600.0,
        formed: false,
        cfg: &cfg,
        rng: &mut rng,
    };
    let mut entity = Entity::Trail(Trail {
        pos: Vec2::new(10.0, 10.0),
        vel: Vec2::new(1.0, 0.5),
        size: 3.0,
        life: 1.0,
    });

    let mut steps = 0usize;
    while entity.is_alive() {
        entity.step(&mut ctx);
        steps += 1;
        assert!(steps < 100, "trail never died");
    }
    // 1.0 life at 0.02 decay per frame dies around step 50
    assert!((49..=52).contains(&steps), "died at step {steps}");
    let pos = entity.position();
    assert!((pos.x - (10.0 + steps as f32 * 1.0)).abs() < 1e-3);
}

#[test]
fn ambient_leaving_bounds_is_reset_in_bounds_same_step() {
    let cfg = EffectConfig::default();
    let mut rng = StdRng::seed_from_u64(9);
    let mut ctx = StepCtx {
        width: 200.0,
        height: 100.0,
        formed: false,
        cfg: &cfg,
        rng: &mut rng,
    };
    let mut entity = Entity::Ambient(Ambient {
        pos: Vec2::new(199.5, 50.0),
        vel: Vec2::new(50.0, 0.0),
        size: 2.0,
        opacity: 0.5,
    });

    entity.step(&mut ctx);
    assert!(entity.is_alive(), "ambient particles are never removed");
    let pos = entity.position();
    assert!(pos.x >= 0.0 && pos.x <= 200.0, "x reset out of bounds: {}", pos.x);
    assert!(pos.y >= 0.0 && pos.y <= 100.0, "y reset out of bounds: {}", pos.y);
}

#[test]
fn seeker_closes_on_its_target_without_noise() {
    let cfg = still_cfg();
    let mut rng = StdRng::seed_from_u64(3);
    let mut ctx = StepCtx {
        width: 600.0,
        height: 200.0,
        formed: false,
        cfg: &cfg,
        rng: &mut rng,
    };
    let seeker = Seeker {
        pos: Vec2::new(10.0, 10.0),
        vel: Vec2::ZERO,
        target: Vec2::new(500.0, 150.0),
        size: 2.0,
        opacity: 0.8,
        phase: 0.0,
    };

    let mut prev = (seeker.target - seeker.pos).length();
    let mut entity = Entity::Seeker(seeker.clone());
    for _ in 0..60 {
        entity.step(&mut ctx);
        let Entity::Seeker(s) = &entity else {
            unreachable!()
        };
        let dist = (s.target - s.pos).length();
        assert!(dist < prev, "distance must contract every step");
        prev = dist;
    }

    // after enough steps it sits within the convergence distance
    for _ in 0..200 {
        entity.step(&mut ctx);
    }
    let Entity::Seeker(s) = &entity else {
        unreachable!()
    };
    assert!(s.converged(cfg.formation_distance));

    // breathing is gated on the formation flag
    assert_eq!(s.phase, seeker.phase, "phase must not advance before formation");
    let phase_before = s.phase;
    ctx.formed = true;
    entity.step(&mut ctx);
    let Entity::Seeker(s) = &entity else {
        unreachable!()
    };
    assert!(s.phase > phase_before, "phase advances once formed");
}
