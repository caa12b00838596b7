use anyhow::Context;
use serde::Deserialize;

use crate::physic_engine::types::{Palette, DEFAULT_PALETTE_HEX};

/// Manière de convertir le temps écoulé en pas d'intégration.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Default)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum IntegrationMode {
    /// Un tick = une frame, quel que soit le temps réellement écoulé.
    #[default]
    FrameCoupled,
    /// Les constantes par frame sont mises à l'échelle par `dt * reference_fps`.
    RealTime { reference_fps: f32 },
}

impl IntegrationMode {
    /// Facteur appliqué aux constantes par frame pour un tick de durée `dt` (secondes).
    pub fn step(&self, dt: f32) -> f32 {
        match *self {
            IntegrationMode::FrameCoupled => 1.0,
            IntegrationMode::RealTime { reference_fps } => (dt * reference_fps).max(0.0),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PhysicConfig {
    pub burst_count: usize,

    /// Accélération verticale, unités/frame² (y vers le bas)
    pub gravity: f32,
    /// Perte de vie par frame
    pub life_decay: f32,

    /// vx tiré dans [-max_speed_x, max_speed_x]
    pub max_speed_x: f32,
    /// vy tiré dans [-max_speed_y, max_speed_y]
    pub max_speed_y: f32,
    /// vitesse angulaire tirée dans [-max_rotation_speed, max_rotation_speed]
    pub max_rotation_speed: f32,

    /// Probabilité qu'une particule soit un coeur (sinon un disque)
    pub heart_probability: f64,

    pub palette: Vec<String>,

    pub integration: IntegrationMode,
}

impl Default for PhysicConfig {
    fn default() -> Self {
        Self {
            burst_count: 50,
            gravity: 0.2,
            life_decay: 0.015,
            max_speed_x: 6.0,
            max_speed_y: 4.0,
            max_rotation_speed: 0.1,
            heart_probability: 0.5,
            palette: DEFAULT_PALETTE_HEX.iter().map(|s| s.to_string()).collect(),
            integration: IntegrationMode::FrameCoupled,
        }
    }
}

impl PhysicConfig {
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read physic config '{}'", path))?;
        Self::from_toml(&text)
    }

    /// Parse et valide (la palette doit être lisible).
    pub fn from_toml(text: &str) -> anyhow::Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.palette()?;
        Ok(config)
    }

    pub fn palette(&self) -> anyhow::Result<Palette> {
        Palette::from_hex_list(&self.palette).context("invalid confetti palette")
    }

    /// Nombre de frames avant qu'une particule fraîche ne s'éteigne.
    pub fn frames_to_live(&self) -> u32 {
        if self.life_decay <= 0.0 {
            return u32::MAX;
        }
        (1.0 / self.life_decay).ceil() as u32
    }
}
