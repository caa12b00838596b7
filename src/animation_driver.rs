//! Boucle d'animation des confettis.
//!
//! Le pilote avance le `ParticleStore`, le dessine sur un `Canvas` et ne
//! redemande une frame que tant qu'il reste des particules. Il n'y a ni
//! timer ni limite de frames : un store vide termine l'animation.
//!
//! La physique est couplée à la fréquence d'affichage par défaut
//! (`IntegrationMode::FrameCoupled`) : à 120 Hz, les confettis vont deux
//! fois plus vite qu'à 60 Hz.

use log::{debug, info};

use crate::physic_engine::{ParticleStore, Shape, UpdateResult, Vec2};
use crate::renderer_engine::{Canvas, ConfettiShapes};

/// Primitive d'ordonnancement « rappelle-moi à la prochaine frame ».
pub trait FrameScheduler {
    fn request_frame(&mut self);
}

/// Ordonnanceur minimal pour une boucle de fenêtre : un drapeau consommé
/// une fois par itération.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FrameRequest {
    pending: bool,
}

impl FrameRequest {
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Consomme la demande en attente.
    pub fn take(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }
}

impl FrameScheduler for FrameRequest {
    fn request_frame(&mut self) {
        self.pending = true;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DriverState {
    #[default]
    Idle,
    Running,
}

/// Un pas complet : intégration, prune, puis rendu des survivants.
///
/// Retourne le bilan du pas ; `alive > 0` signifie qu'une frame suivante
/// est nécessaire.
pub fn tick<C: Canvas + ?Sized>(
    store: &mut ParticleStore,
    canvas: &mut C,
    shapes: &mut ConfettiShapes,
    dt: f32,
) -> UpdateResult {
    let result = store.update(dt);
    render(store, canvas, shapes);
    result
}

/// Efface la surface et dessine chaque particule, opacité = vie.
pub fn render<C: Canvas + ?Sized>(store: &ParticleStore, canvas: &mut C, shapes: &mut ConfettiShapes) {
    canvas.clear();
    for p in store.iter() {
        let color = p.faded_color();
        match p.shape {
            Shape::Circle => canvas.fill_circle(p.pos, shapes.circle_radius, color),
            Shape::Heart => {
                let outline = shapes.placed_heart(p.pos, p.rotation);
                canvas.fill_polygon(outline, color);
            }
        }
    }
}

/// Store + surface + état du pilote, sans aucun état global.
#[derive(Debug)]
pub struct ConfettiAnimation<C: Canvas> {
    store: ParticleStore,
    canvas: C,
    shapes: ConfettiShapes,
    state: DriverState,
    /// Frames jouées depuis le dernier `start`
    frames: u64,
    /// Vrai si la surface a changé depuis le dernier `take_dirty`
    dirty: bool,
}

impl<C: Canvas> ConfettiAnimation<C> {
    pub fn new(store: ParticleStore, canvas: C, shapes: ConfettiShapes) -> Self {
        Self {
            store,
            canvas,
            shapes,
            state: DriverState::Idle,
            frames: 0,
            dirty: false,
        }
    }

    /// Rafale de la taille configurée à `origin`.
    pub fn burst(&mut self, origin: Vec2) {
        self.store.spawn_default_burst(origin);
        info!(
            "🎉 Confetti burst at ({:.0}, {:.0}), {} particles alive",
            origin.x,
            origin.y,
            self.store.len()
        );
    }

    /// Rafale au centre de la surface.
    pub fn burst_at_center(&mut self) {
        let (w, h) = self.canvas.size();
        self.burst(Vec2::new(w as f32 / 2.0, h as f32 / 2.0));
    }

    /// Idle -> Running et demande la première frame.
    ///
    /// Sans particule, on reste Idle. Déjà Running : rien à faire, la
    /// frame en attente suffit (jamais deux rappels à la fois).
    pub fn start<S: FrameScheduler + ?Sized>(&mut self, scheduler: &mut S) {
        if self.state == DriverState::Running || self.store.is_empty() {
            return;
        }
        self.state = DriverState::Running;
        self.frames = 0;
        scheduler.request_frame();
        debug!("▶️ Confetti animation running");
    }

    /// Rappel de frame. Redemande exactement une frame tant qu'il reste
    /// des particules ; sinon passe Idle.
    pub fn tick<S: FrameScheduler + ?Sized>(&mut self, dt: f32, scheduler: &mut S) -> DriverState {
        let result = tick(&mut self.store, &mut self.canvas, &mut self.shapes, dt);
        self.dirty = true;
        self.frames += 1;

        if result.alive > 0 {
            self.state = DriverState::Running;
            scheduler.request_frame();
        } else {
            if self.state == DriverState::Running {
                info!("✨ Confetti animation finished after {} frames", self.frames);
            }
            self.state = DriverState::Idle;
        }
        self.state
    }

    /// Retour en arrière : store vidé, surface effacée immédiatement.
    ///
    /// Une frame déjà demandée verra un store vide et s'arrêtera seule.
    pub fn stop(&mut self) {
        self.store.clear();
        self.canvas.clear();
        self.dirty = true;
        self.state = DriverState::Idle;
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.canvas.resize(width, height);
        self.dirty = true;
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn store(&self) -> &ParticleStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut ParticleStore {
        &mut self.store
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    /// Consomme le drapeau « surface modifiée ».
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}
