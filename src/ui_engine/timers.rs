use std::time::{Duration, Instant};

use crate::ui_engine::screens::Screen;

/// Évènements différés de l'application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    /// Masque `from` puis programme l'affichage de `to`
    SwitchScreen { from: Screen, to: Screen },
    ShowScreen(Screen),
    /// Recale la surface des confettis sur la taille de la fenêtre
    ResyncCanvas,
}

/// Minuteries à un coup, interrogées une fois par itération de la boucle.
///
/// Aucun thread : une échéance n'est traitée qu'au prochain `poll`.
#[derive(Debug)]
pub struct Timers<E> {
    pending: Vec<(Instant, E)>,
}

impl<E> Default for Timers<E> {
    fn default() -> Self {
        Self {
            pending: Vec::new(),
        }
    }
}

impl<E> Timers<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, now: Instant, delay: Duration, event: E) {
        self.pending.push((now + delay, event));
    }

    /// Retire et retourne les évènements échus, par ordre d'échéance.
    pub fn poll(&mut self, now: Instant) -> Vec<E> {
        let (mut due, rest): (Vec<_>, Vec<_>) = std::mem::take(&mut self.pending)
            .into_iter()
            .partition(|(deadline, _)| *deadline <= now);
        self.pending = rest;
        // Tri stable : à échéance égale, l'ordre de programmation est conservé
        due.sort_by_key(|(deadline, _)| *deadline);
        due.into_iter().map(|(_, event)| event).collect()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
