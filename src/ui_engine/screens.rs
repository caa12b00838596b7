use std::time::{Duration, Instant};

use log::debug;

use crate::ui_engine::timers::{Timers, UiEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    /// Question + boutons « sí » / « no »
    Prompt,
    /// Lettre datée + boutons « volver » / « compartir »
    Letter,
}

/// Au plus un écran visible ; aucun pendant le fondu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenSwitcher {
    active: Option<Screen>,
}

impl ScreenSwitcher {
    pub fn new(initial: Screen) -> Self {
        Self {
            active: Some(initial),
        }
    }

    pub fn active(&self) -> Option<Screen> {
        self.active
    }

    pub fn is_active(&self, screen: Screen) -> bool {
        self.active == Some(screen)
    }

    /// Masque `from` tout de suite et programme l'affichage de `to` après `fade`.
    pub fn switch(
        &mut self,
        from: Screen,
        to: Screen,
        timers: &mut Timers<UiEvent>,
        now: Instant,
        fade: Duration,
    ) {
        if self.active == Some(from) {
            self.active = None;
        }
        debug!("🔀 Screen {:?} -> {:?}", from, to);
        timers.schedule(now, fade, UiEvent::ShowScreen(to));
    }

    pub fn show(&mut self, screen: Screen) {
        self.active = Some(screen);
    }
}

impl Default for ScreenSwitcher {
    fn default() -> Self {
        Self::new(Screen::Prompt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_switch_hides_then_shows() {
        let t0 = Instant::now();
        let fade = Duration::from_millis(100);
        let mut timers = Timers::new();
        let mut switcher = ScreenSwitcher::default();

        switcher.switch(Screen::Prompt, Screen::Letter, &mut timers, t0, fade);
        assert_eq!(switcher.active(), None);
        assert!(timers.poll(t0 + Duration::from_millis(99)).is_empty());

        for event in timers.poll(t0 + fade) {
            if let UiEvent::ShowScreen(screen) = event {
                switcher.show(screen);
            }
        }
        assert!(switcher.is_active(Screen::Letter));
    }

    #[test]
    fn test_switch_from_inactive_screen_keeps_active() {
        let t0 = Instant::now();
        let mut timers = Timers::new();
        let mut switcher = ScreenSwitcher::new(Screen::Letter);
        switcher.switch(Screen::Prompt, Screen::Letter, &mut timers, t0, Duration::ZERO);
        assert!(switcher.is_active(Screen::Letter));
        assert_eq!(timers.len(), 1);
    }
}
