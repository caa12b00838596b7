#[cfg(debug_assertions)]
use log::debug;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use std::f32::consts::TAU;

use crate::physic_engine::{
    config::PhysicConfig,
    particle::Particle,
    types::{Color, Palette, Shape, UpdateResult, Vec2},
};

/// Ensemble des particules de confetti vivantes.
///
/// # Rôle
/// Le store possède les particules, leur générateur aléatoire et la
/// configuration physique. Il ne connaît ni le rendu ni l'ordonnancement
/// des frames : c'est le rôle de `ConfettiAnimation`.
///
/// L'ordre des particules n'a aucune importance (collection non ordonnée).
#[derive(Debug)]
pub struct ParticleStore {
    particles: Vec<Particle>,
    config: PhysicConfig,
    palette: Palette,
    rng: StdRng,
}

impl ParticleStore {
    /// Crée un store vide, avec un générateur seedé depuis l'entropie système.
    pub fn new(config: &PhysicConfig) -> Self {
        Self::with_rng(config, StdRng::from_rng(&mut rand::rng()))
    }

    /// Crée un store déterministe (tests, benchs).
    pub fn with_seed(config: &PhysicConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: &PhysicConfig, rng: StdRng) -> Self {
        let palette = config.palette().unwrap_or_default();
        Self {
            particles: Vec::with_capacity(config.burst_count),
            config: config.clone(),
            palette,
            rng,
        }
    }

    pub fn config(&self) -> &PhysicConfig {
        &self.config
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Remplace la configuration (les particules vivantes sont conservées).
    pub fn reload_config(&mut self, config: &PhysicConfig) {
        self.config = config.clone();
        self.palette = config.palette().unwrap_or_default();
    }

    /// Ajoute une rafale de `count` particules à `origin`, avec le générateur du store.
    pub fn spawn_burst(&mut self, origin: Vec2, count: usize, palette: &Palette) {
        push_burst(
            &mut self.particles,
            &self.config,
            &mut RandomBurst(&mut self.rng),
            origin,
            count,
            palette,
        );
    }

    /// Rafale avec la taille et la palette de la configuration.
    pub fn spawn_default_burst(&mut self, origin: Vec2) {
        push_burst(
            &mut self.particles,
            &self.config,
            &mut RandomBurst(&mut self.rng),
            origin,
            self.config.burst_count,
            &self.palette,
        );
    }

    /// Ajoute une rafale dont les tirages viennent de `sampler`.
    pub fn spawn_burst_with<S: BurstSampler + ?Sized>(
        &mut self,
        sampler: &mut S,
        origin: Vec2,
        count: usize,
        palette: &Palette,
    ) {
        push_burst(
            &mut self.particles,
            &self.config,
            sampler,
            origin,
            count,
            palette,
        );
    }

    /// Ajoute une particule déjà construite.
    pub fn push(&mut self, particle: Particle) {
        self.particles.push(particle);
    }

    /// Vide le store. Idempotent.
    pub fn clear(&mut self) {
        self.particles.clear();
    }

    /// Un pas d'intégration sur toutes les particules.
    pub fn integrate(&mut self, step: f32) {
        let gravity = self.config.gravity;
        let decay = self.config.life_decay;
        for p in self.particles.iter_mut() {
            p.update(step, gravity, decay);
        }
    }

    /// Retire les particules dont la vie est <= 0. Retourne le nombre retiré.
    pub fn prune(&mut self) -> usize {
        let before = self.particles.len();
        self.particles.retain(Particle::is_alive);
        before - self.particles.len()
    }

    /// Intégration + prune, pour un tick de durée `dt` secondes.
    pub fn update(&mut self, dt: f32) -> UpdateResult {
        let step = self.config.integration.step(dt);
        self.integrate(step);
        let removed = self.prune();
        UpdateResult {
            removed,
            alive: self.particles.len(),
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    pub fn as_slice(&self) -> &[Particle] {
        &self.particles
    }
}

/// Tirages d'une particule de rafale.
///
/// `RandomBurst` tire tout dans un générateur `rand` ; un test peut fournir
/// ses propres valeurs.
pub trait BurstSampler {
    fn velocity(&mut self, cfg: &PhysicConfig) -> Vec2;
    /// `palette` n'est jamais vide.
    fn color(&mut self, palette: &Palette) -> Color;
    fn rotation(&mut self) -> f32;
    fn rotation_velocity(&mut self, cfg: &PhysicConfig) -> f32;
    fn shape(&mut self, cfg: &PhysicConfig) -> Shape;
}

/// Tirages uniformes dans les bornes de la configuration.
#[derive(Debug)]
pub struct RandomBurst<R>(pub R);

impl<R: Rng> BurstSampler for RandomBurst<R> {
    fn velocity(&mut self, cfg: &PhysicConfig) -> Vec2 {
        Vec2::new(
            symmetric_range(&mut self.0, cfg.max_speed_x),
            symmetric_range(&mut self.0, cfg.max_speed_y),
        )
    }

    fn color(&mut self, palette: &Palette) -> Color {
        palette
            .colors()
            .choose(&mut self.0)
            .copied()
            .unwrap_or(Color::ONE)
    }

    fn rotation(&mut self) -> f32 {
        self.0.random_range(0.0..TAU)
    }

    fn rotation_velocity(&mut self, cfg: &PhysicConfig) -> f32 {
        symmetric_range(&mut self.0, cfg.max_rotation_speed)
    }

    fn shape(&mut self, cfg: &PhysicConfig) -> Shape {
        if self.0.random_bool(cfg.heart_probability.clamp(0.0, 1.0)) {
            Shape::Heart
        } else {
            Shape::Circle
        }
    }
}

/// Toutes les particules partent de `origin` avec une vie de 1.0.
/// Une palette vide retombe sur la palette par défaut.
fn push_burst<S: BurstSampler + ?Sized>(
    particles: &mut Vec<Particle>,
    cfg: &PhysicConfig,
    sampler: &mut S,
    origin: Vec2,
    count: usize,
    palette: &Palette,
) {
    let fallback;
    let palette = if palette.is_empty() {
        fallback = Palette::default();
        &fallback
    } else {
        palette
    };

    particles.reserve(count);

    for _ in 0..count {
        let vel = sampler.velocity(cfg);
        let color = sampler.color(palette);
        let rotation = sampler.rotation();
        let rotation_vel = sampler.rotation_velocity(cfg);
        let shape = sampler.shape(cfg);

        particles.push(Particle {
            pos: origin,
            vel,
            life: 1.0,
            color,
            rotation,
            rotation_vel,
            shape,
        });
    }

    #[cfg(debug_assertions)]
    debug!(
        "Burst of {} particles at ({:.1}, {:.1}), {} alive",
        count,
        origin.x,
        origin.y,
        particles.len()
    );
}

#[inline(always)]
fn symmetric_range<R: Rng + ?Sized>(rng: &mut R, amplitude: f32) -> f32 {
    if amplitude <= 0.0 {
        return 0.0;
    }
    rng.random_range(-amplitude..amplitude)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symmetric_range_zero_amplitude() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(symmetric_range(&mut rng, 0.0), 0.0);
        assert_eq!(symmetric_range(&mut rng, -3.0), 0.0);
    }

    #[test]
    fn test_prune_counts_removed() {
        let mut store = ParticleStore::with_seed(&PhysicConfig::default(), 7);
        store.push(Particle::default());
        store.push(Particle {
            life: 0.0,
            ..Default::default()
        });
        store.push(Particle {
            life: -0.5,
            ..Default::default()
        });
        assert_eq!(store.prune(), 2);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_spawn_with_empty_palette_falls_back() {
        let mut store = ParticleStore::with_seed(&PhysicConfig::default(), 7);
        store.spawn_burst(Vec2::ZERO, 10, &Palette::new(Vec::new()));
        let default = Palette::default();
        assert!(store
            .iter()
            .all(|p| default.colors().contains(&p.color)));
    }

    #[test]
    fn test_spawn_with_seeded_sampler_is_deterministic() {
        let cfg = PhysicConfig::default();
        let palette = Palette::default();
        let mut a = ParticleStore::with_seed(&cfg, 0);
        let mut b = ParticleStore::with_seed(&cfg, 0);
        a.spawn_burst_with(&mut RandomBurst(StdRng::seed_from_u64(3)), Vec2::ZERO, 20, &palette);
        b.spawn_burst_with(&mut RandomBurst(StdRng::seed_from_u64(3)), Vec2::ZERO, 20, &palette);
        assert_eq!(a.as_slice(), b.as_slice());
    }
}
