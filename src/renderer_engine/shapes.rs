use glam::Affine2;

use crate::physic_engine::Vec2;

/// Point d'une courbe de Bézier cubique en `t`.
#[inline]
pub fn cubic_bezier(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2, t: f32) -> Vec2 {
    let u = 1.0 - t;
    p0 * (u * u * u) + p1 * (3.0 * u * u * t) + p2 * (3.0 * u * t * t) + p3 * (t * t * t)
}

/// Contour d'un coeur centré sur l'origine, pointe en bas (y vers le bas).
///
/// Deux lobes cubiques symétriques partent de la pointe `(0, size)` et se
/// rejoignent à l'encoche `(0, -size/2)`. Chaque lobe est aplati en
/// `segments` segments. Le premier point est la pointe ; le polygone n'est
/// pas refermé explicitement.
pub fn heart_outline(size: f32, segments: usize) -> Vec<Vec2> {
    let segments = segments.max(1);
    let tip = Vec2::new(0.0, size);
    let notch = Vec2::new(0.0, -0.5 * size);

    let left = [
        tip,
        Vec2::new(-1.5 * size, 0.5 * size),
        Vec2::new(-1.5 * size, -0.5 * size),
        notch,
    ];
    let right = [
        notch,
        Vec2::new(1.5 * size, -0.5 * size),
        Vec2::new(1.5 * size, 0.5 * size),
        tip,
    ];

    let mut points = Vec::with_capacity(segments * 2);
    for curve in [left, right] {
        // t = 1 est le premier point de la courbe suivante
        for i in 0..segments {
            let t = i as f32 / segments as f32;
            points.push(cubic_bezier(curve[0], curve[1], curve[2], curve[3], t));
        }
    }
    points
}

/// Géométrie locale des confettis, calculée une seule fois.
#[derive(Debug, Clone)]
pub struct ConfettiShapes {
    pub circle_radius: f32,
    heart: Vec<Vec2>,
    scratch: Vec<Vec2>,
}

impl ConfettiShapes {
    pub fn new(circle_radius: f32, heart_size: f32, bezier_segments: usize) -> Self {
        let heart = heart_outline(heart_size, bezier_segments);
        Self {
            circle_radius,
            scratch: Vec::with_capacity(heart.len()),
            heart,
        }
    }

    pub fn heart(&self) -> &[Vec2] {
        &self.heart
    }

    /// Coeur tourné de `rotation` puis translaté en `pos`.
    /// Réutilise un buffer interne pour éviter une allocation par particule.
    pub fn placed_heart(&mut self, pos: Vec2, rotation: f32) -> &[Vec2] {
        let transform = Affine2::from_angle_translation(rotation, pos);
        self.scratch.clear();
        self.scratch
            .extend(self.heart.iter().map(|&p| transform.transform_point2(p)));
        &self.scratch
    }
}

impl Default for ConfettiShapes {
    fn default() -> Self {
        Self::new(5.0, 8.0, 12)
    }
}
