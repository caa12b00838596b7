use anyhow::{anyhow, Context, Result};
pub use glam::{Vec2, Vec4 as Color};

// ------------------------
// Shape
// ------------------------
/// Forme d'une particule de confetti.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Shape {
    #[default]
    Circle,
    Heart,
}

// ------------------------
// Palette
// ------------------------
/// Couleurs du confetti, telles que définies sur la page d'origine.
pub const DEFAULT_PALETTE_HEX: [&str; 5] = ["#FF69B4", "#FFB6D9", "#E63946", "#FF1744", "#FFF0F7"];

/// Palette fixe de couleurs RGBA (composantes dans [0, 1]).
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Default for Palette {
    fn default() -> Self {
        // Les constantes sont valides : le parse ne peut pas échouer ici
        Self {
            colors: DEFAULT_PALETTE_HEX
                .iter()
                .filter_map(|hex| parse_hex_color(hex).ok())
                .collect(),
        }
    }
}

impl Palette {
    pub fn new(colors: Vec<Color>) -> Self {
        Self { colors }
    }

    /// Construit une palette depuis une liste `#RRGGBB`.
    pub fn from_hex_list<S: AsRef<str>>(list: &[S]) -> Result<Self> {
        let colors = list
            .iter()
            .map(|hex| parse_hex_color(hex.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { colors })
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

/// Convertit `#RRGGBB` (le `#` est optionnel) en couleur opaque.
pub fn parse_hex_color(hex: &str) -> Result<Color> {
    let digits = hex.trim().trim_start_matches('#');
    // from_str_radix accepterait un signe '+'
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(anyhow!("invalid hex color '{}': expected #RRGGBB", hex));
    }

    let channel = |range: std::ops::Range<usize>| -> Result<f32> {
        let value = u8::from_str_radix(&digits[range], 16)
            .with_context(|| format!("invalid hex color '{}'", hex))?;
        Ok(value as f32 / 255.0)
    };

    Ok(Color::new(channel(0..2)?, channel(2..4)?, channel(4..6)?, 1.0))
}

// ------------------------
// UpdateResult
// ------------------------
/// Bilan d'un pas de simulation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpdateResult {
    /// Particules retirées par le prune de ce pas
    pub removed: usize,
    /// Particules encore vivantes après le prune
    pub alive: usize,
}
