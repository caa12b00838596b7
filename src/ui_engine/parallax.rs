use crate::physic_engine::Vec2;

/// Amplitude maximale du décalage, en pixels de part et d'autre
const PARALLAX_AMPLITUDE: f32 = 10.0;

/// Ancres des coeurs décoratifs, en fraction de la fenêtre.
const HEART_ANCHORS: [(f32, f32); 8] = [
    (0.10, 0.15),
    (0.85, 0.20),
    (0.20, 0.80),
    (0.75, 0.75),
    (0.50, 0.08),
    (0.05, 0.50),
    (0.92, 0.55),
    (0.40, 0.92),
];

/// Décalage d'un coeur décoratif selon la position du pointeur.
///
/// Les coeurs d'indice pair suivent le pointeur en x et s'en éloignent en y,
/// les impairs font l'inverse.
pub fn parallax_offset(index: usize, cursor: Vec2, viewport: Vec2) -> Vec2 {
    if viewport.x <= 0.0 || viewport.y <= 0.0 {
        return Vec2::ZERO;
    }
    let rel = cursor / viewport - Vec2::splat(0.5);
    let sign = if index % 2 == 0 { 1.0 } else { -1.0 };
    Vec2::new(
        rel.x * PARALLAX_AMPLITUDE * sign,
        rel.y * PARALLAX_AMPLITUDE * -sign,
    )
}

#[derive(Debug, Clone)]
pub struct FloatingHearts {
    count: usize,
    cursor: Vec2,
}

impl FloatingHearts {
    pub fn new(count: usize) -> Self {
        Self {
            count: count.min(HEART_ANCHORS.len()),
            cursor: Vec2::ZERO,
        }
    }

    pub fn set_cursor(&mut self, cursor: Vec2) {
        self.cursor = cursor;
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Positions à l'écran, décalage de parallaxe inclus.
    pub fn positions(&self, viewport: Vec2) -> impl Iterator<Item = Vec2> + '_ {
        HEART_ANCHORS[..self.count]
            .iter()
            .enumerate()
            .map(move |(i, &(fx, fy))| {
                Vec2::new(fx, fy) * viewport + parallax_offset(i, self.cursor, viewport)
            })
    }
}
