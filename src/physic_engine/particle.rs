use crate::physic_engine::types::{Color, Shape, Vec2};

/// Particule de confetti.
///
/// Pas d'identité propre : une particule n'existe que par sa présence
/// dans le `ParticleStore`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    /// Vitesse en unités/frame
    pub vel: Vec2,
    /// Vie restante dans (0, 1], sert aussi d'opacité au rendu
    pub life: f32,
    pub color: Color,
    /// Radians
    pub rotation: f32,
    /// Radians/frame
    pub rotation_vel: f32,
    pub shape: Shape,
}

impl Default for Particle {
    fn default() -> Self {
        Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            life: 1.0,
            color: Color::ONE,
            rotation: 0.0,
            rotation_vel: 0.0,
            shape: Shape::Circle,
        }
    }
}

impl Particle {
    pub fn new(pos: Vec2, vel: Vec2, color: Color, shape: Shape) -> Self {
        Self {
            pos,
            vel,
            color,
            shape,
            ..Default::default()
        }
    }

    /// Un pas d'intégration, dans l'ordre : position, gravité, vie, rotation.
    ///
    /// `step` vaut 1.0 pour une frame de référence ; les constantes sont
    /// exprimées par frame.
    #[inline(always)]
    pub fn update(&mut self, step: f32, gravity: f32, decay: f32) {
        self.pos += self.vel * step;
        self.vel.y += gravity * step;
        self.life -= decay * step;
        self.rotation += self.rotation_vel * step;
    }

    #[inline(always)]
    pub fn is_alive(&self) -> bool {
        self.life > 0.0
    }

    /// Couleur avec l'opacité modulée par la vie restante.
    #[inline]
    pub fn faded_color(&self) -> Color {
        let mut color = self.color;
        color.w *= self.life.clamp(0.0, 1.0);
        color
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_order() {
        let mut p = Particle::new(
            Vec2::new(500.0, 500.0),
            Vec2::new(3.0, -2.0),
            Color::ONE,
            Shape::Heart,
        );
        p.rotation_vel = 0.05;
        p.update(1.0, 0.2, 0.015);

        // La position utilise la vitesse *avant* la gravité
        assert_eq!(p.pos, Vec2::new(503.0, 498.0));
        assert!((p.vel.y - -1.8).abs() < 1e-6);
        assert!((p.life - 0.985).abs() < 1e-6);
        assert!((p.rotation - 0.05).abs() < 1e-6);
    }

    #[test]
    fn test_faded_color() {
        let mut p = Particle::default();
        p.life = 0.25;
        assert_eq!(p.faded_color().w, 0.25);
        p.life = -0.1;
        assert_eq!(p.faded_color().w, 0.0);
    }
}
