use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::{Duration, Instant};

use crate::physic_engine::types::Vec2;

pub const DEFAULT_MARGIN: f32 = 20.0;
pub const PULSE_SCALE: f32 = 1.05;
pub const DEFAULT_PULSE: Duration = Duration::from_millis(150);

/// Tentative d'approche ou d'activation, quelle que soit la modalité d'entrée.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApproachEvent {
    Hover,
    PointerDown,
    TouchStart,
}

/// Placement du bouton : dans le flux normal de la mise en page, ou en absolu.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Placement {
    #[default]
    InFlow,
    Absolute(Vec2),
}

/// Tire une nouvelle position (coin haut-gauche) pour un bouton de taille
/// `button` dans `bounds`, à au moins `margin` des bords.
///
/// Si l'espace est insuffisant, l'intervalle est ramené à une plage non
/// négative : le bouton reste dans la vue dès qu'il y tient.
pub fn relocate<R: Rng + ?Sized>(rng: &mut R, bounds: Vec2, button: Vec2, margin: f32) -> Vec2 {
    Vec2::new(
        sample_axis(rng, bounds.x, button.x, margin),
        sample_axis(rng, bounds.y, button.y, margin),
    )
}

#[inline]
fn sample_axis<R: Rng + ?Sized>(rng: &mut R, extent: f32, size: f32, margin: f32) -> f32 {
    let max_pos = (extent - size).max(0.0);
    let low = margin.max(0.0).min(max_pos);
    let high = (extent - size - margin).max(low);

    if high > low {
        rng.random_range(low..=high)
    } else {
        low
    }
}

/// Bouton « non » qui s'échappe dès qu'on s'en approche.
///
/// Le bouton reste activable au clavier : seules les interactions
/// pointeur/tactile le déplacent.
#[derive(Debug)]
pub struct EvasiveButton {
    placement: Placement,
    margin: f32,
    pulse_duration: Duration,
    pulse_until: Option<Instant>,
    /// Dernière taille connue (mesurée par l'UI)
    size: Vec2,
    relocations: u64,
    rng: StdRng,
}

impl Default for EvasiveButton {
    fn default() -> Self {
        Self::new(DEFAULT_MARGIN, DEFAULT_PULSE)
    }
}

impl EvasiveButton {
    pub fn new(margin: f32, pulse_duration: Duration) -> Self {
        Self::with_rng(margin, pulse_duration, StdRng::from_rng(&mut rand::rng()))
    }

    pub fn with_seed(margin: f32, pulse_duration: Duration, seed: u64) -> Self {
        Self::with_rng(margin, pulse_duration, StdRng::seed_from_u64(seed))
    }

    fn with_rng(margin: f32, pulse_duration: Duration, rng: StdRng) -> Self {
        Self {
            placement: Placement::InFlow,
            margin,
            pulse_duration,
            pulse_until: None,
            size: Vec2::ZERO,
            relocations: 0,
            rng,
        }
    }

    pub fn set_size(&mut self, size: Vec2) {
        self.size = size;
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn placement(&self) -> Placement {
        self.placement
    }

    pub fn relocations(&self) -> u64 {
        self.relocations
    }

    /// Point d'entrée unique pour toutes les modalités d'approche.
    pub fn handle(&mut self, event: ApproachEvent, bounds: Vec2, now: Instant) -> Vec2 {
        let pos = relocate(&mut self.rng, bounds, self.size, self.margin);
        self.placement = Placement::Absolute(pos);
        self.pulse_until = Some(now + self.pulse_duration);
        self.relocations += 1;

        debug!(
            "🏃 {:?}: button moved to ({:.1}, {:.1}) in {:.0}x{:.0}",
            event, pos.x, pos.y, bounds.x, bounds.y
        );
        pos
    }

    /// Échelle cosmétique : 1.05 juste après un déplacement, puis 1.0.
    pub fn scale(&self, now: Instant) -> f32 {
        match self.pulse_until {
            Some(until) if now < until => PULSE_SCALE,
            _ => 1.0,
        }
    }

    /// Retour à la mise en page par défaut.
    pub fn reset(&mut self) {
        self.placement = Placement::InFlow;
        self.pulse_until = None;
    }
}
