use confetti_greeting::physic_engine::{
    IntegrationMode, Palette, Particle, ParticleStore, PhysicConfig, Shape, Vec2,
};

mod helpers;
use helpers::FixedBurst;

#[test]
fn test_burst_spawns_configured_count_at_origin() {
    let mut store = ParticleStore::with_seed(&PhysicConfig::default(), 42);
    let origin = Vec2::new(500.0, 500.0);
    store.spawn_default_burst(origin);

    assert_eq!(store.len(), 50);
    for p in store.iter() {
        assert_eq!(p.pos, origin);
        assert_eq!(p.life, 1.0);
        assert!((-6.0..6.0).contains(&p.vel.x));
        assert!((-4.0..4.0).contains(&p.vel.y));
        assert!((-0.1..0.1).contains(&p.rotation_vel));
        assert!((0.0..std::f32::consts::TAU).contains(&p.rotation));
    }
}

#[test]
fn test_burst_uses_palette_and_both_shapes() {
    let mut store = ParticleStore::with_seed(&PhysicConfig::default(), 5);
    let palette = Palette::default();
    store.spawn_burst(Vec2::ZERO, 200, &palette);

    assert!(store.iter().all(|p| palette.colors().contains(&p.color)));
    assert!(store.iter().any(|p| p.shape == Shape::Heart));
    assert!(store.iter().any(|p| p.shape == Shape::Circle));
}

#[test]
fn test_bursts_accumulate() {
    let mut store = ParticleStore::with_seed(&PhysicConfig::default(), 1);
    store.spawn_default_burst(Vec2::new(10.0, 10.0));
    store.spawn_default_burst(Vec2::new(20.0, 20.0));
    assert_eq!(store.len(), 100);
}

#[test]
fn test_zero_count_burst_is_noop() {
    let mut store = ParticleStore::with_seed(&PhysicConfig::default(), 1);
    store.spawn_burst(Vec2::ZERO, 0, &Palette::default());
    assert!(store.is_empty());
}

#[test]
fn test_spawned_particle_single_step_matches_hand_computation() {
    let mut store = ParticleStore::with_seed(&PhysicConfig::default(), 1);
    let palette = Palette::default();
    let mut sampler = FixedBurst {
        rotation_vel: 0.05,
        ..FixedBurst::with_velocity(Vec2::new(3.0, -2.0))
    };
    store.spawn_burst_with(&mut sampler, Vec2::new(500.0, 500.0), 1, &palette);

    assert_eq!(store.len(), 1);
    let spawned = store.as_slice()[0];
    assert_eq!(spawned.pos, Vec2::new(500.0, 500.0));
    assert_eq!(spawned.vel, Vec2::new(3.0, -2.0));
    assert_eq!(spawned.life, 1.0);
    assert_eq!(spawned.color, palette.colors()[0]);

    let result = store.update(1.0 / 60.0);
    assert_eq!(result.alive, 1);
    assert_eq!(result.removed, 0);

    let p = &store.as_slice()[0];
    assert_eq!(p.pos, Vec2::new(503.0, 498.0));
    assert_eq!(p.vel.x, 3.0);
    assert!((p.vel.y - -1.8).abs() < 1e-6);
    assert!((p.life - 0.985).abs() < 1e-6);
    assert!((p.rotation - 0.05).abs() < 1e-6);
}

#[test]
fn test_sampler_burst_with_empty_palette_uses_default_colors() {
    let mut store = ParticleStore::with_seed(&PhysicConfig::default(), 1);
    let mut sampler = FixedBurst::with_velocity(Vec2::ZERO);
    store.spawn_burst_with(&mut sampler, Vec2::ZERO, 3, &Palette::new(Vec::new()));

    let first_default = Palette::default().colors()[0];
    assert_eq!(store.len(), 3);
    assert!(store.iter().all(|p| p.color == first_default));
}

#[test]
fn test_life_strictly_decreases_until_pruned() {
    let mut store = ParticleStore::with_seed(&PhysicConfig::default(), 9);
    store.spawn_default_burst(Vec2::new(100.0, 100.0));

    let mut previous: Vec<f32> = store.iter().map(|p| p.life).collect();
    for _ in 0..66 {
        let result = store.update(1.0 / 60.0);
        assert_eq!(result.alive, 50);
        for (p, before) in store.iter().zip(&previous) {
            assert!(p.life < *before);
            assert!(p.life > 0.0);
        }
        previous = store.iter().map(|p| p.life).collect();
    }

    // 67e tick : vie ~ -0.005, tout disparaît
    let result = store.update(1.0 / 60.0);
    assert_eq!(result.removed, 50);
    assert_eq!(result.alive, 0);
    assert!(store.is_empty());
    assert_eq!(PhysicConfig::default().frames_to_live(), 67);
}

#[test]
fn test_particle_at_life_exactly_zero_is_pruned() {
    let mut store = ParticleStore::with_seed(&PhysicConfig::default(), 1);
    store.push(Particle {
        life: 0.015,
        ..Default::default()
    });
    let result = store.update(1.0 / 60.0);
    assert_eq!(result.removed, 1);
    assert!(store.is_empty());
}

#[test]
fn test_clear_is_idempotent() {
    let mut store = ParticleStore::with_seed(&PhysicConfig::default(), 1);
    store.clear();
    assert!(store.is_empty());
    store.spawn_default_burst(Vec2::ZERO);
    store.clear();
    store.clear();
    assert!(store.is_empty());
}

#[test]
fn test_same_seed_same_burst() {
    let config = PhysicConfig::default();
    let mut a = ParticleStore::with_seed(&config, 1234);
    let mut b = ParticleStore::with_seed(&config, 1234);
    a.spawn_default_burst(Vec2::new(1.0, 2.0));
    b.spawn_default_burst(Vec2::new(1.0, 2.0));
    assert_eq!(a.as_slice(), b.as_slice());
}

#[test]
fn test_real_time_integration_scales_step() {
    let config = PhysicConfig {
        integration: IntegrationMode::RealTime {
            reference_fps: 60.0,
        },
        ..Default::default()
    };
    let mut store = ParticleStore::with_seed(&config, 1);
    store.push(Particle {
        vel: Vec2::new(1.0, 0.0),
        ..Default::default()
    });

    // 120 Hz : demi-pas
    store.update(1.0 / 120.0);
    let p = &store.as_slice()[0];
    assert!((p.pos.x - 0.5).abs() < 1e-5);
    assert!((p.life - (1.0 - 0.0075)).abs() < 1e-5);
}

#[test]
fn test_reload_config_keeps_live_particles() {
    let mut store = ParticleStore::with_seed(&PhysicConfig::default(), 1);
    store.spawn_default_burst(Vec2::ZERO);
    store.reload_config(&PhysicConfig {
        burst_count: 10,
        ..Default::default()
    });
    assert_eq!(store.len(), 50);
    store.spawn_default_burst(Vec2::ZERO);
    assert_eq!(store.len(), 60);
}
