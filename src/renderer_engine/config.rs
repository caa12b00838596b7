use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::renderer_engine::shapes::ConfettiShapes;

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct RendererConfig {
    /// Rayon des confettis ronds (pixels)
    pub circle_radius: f32,
    /// Paramètre d'échelle des coeurs (pixels)
    pub heart_size: f32,
    /// Segments par lobe de Bézier lors de l'aplatissement
    pub bezier_segments: usize,
    /// Couleur de fond de la fenêtre, RGBA
    pub background: [f32; 4],
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            circle_radius: 5.0,
            heart_size: 8.0,
            bezier_segments: 12,
            background: [1.0, 0.94, 0.97, 1.0],
        }
    }
}

impl RendererConfig {
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read renderer config '{}'", path))?;
        Ok(toml::from_str(&text)?)
    }

    pub fn save_to_file(&self, path: &str) -> anyhow::Result<()> {
        let text = toml::to_string_pretty(self)?;
        std::fs::write(path, text)?;
        Ok(())
    }

    pub fn shapes(&self) -> ConfettiShapes {
        ConfettiShapes::new(self.circle_radius, self.heart_size, self.bezier_segments)
    }
}
