use imgui_glfw_rs::glfw::{Action, Key};

use crate::ui_engine::screens::Screen;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    /// « Sí » sur la question
    Yes,
    /// Lettre -> question
    Back,
    ToggleFullscreen,
    ReloadPhysicConfig,
}

/// Raccourcis clavier globaux, selon l'écran visible.
pub fn shortcut_for(key: Key, action: Action, active: Option<Screen>) -> Option<Shortcut> {
    if action != Action::Press {
        return None;
    }
    match key {
        Key::Enter | Key::KpEnter if active == Some(Screen::Prompt) => Some(Shortcut::Yes),
        Key::Escape if active == Some(Screen::Letter) => Some(Shortcut::Back),
        Key::F11 => Some(Shortcut::ToggleFullscreen),
        Key::R => Some(Shortcut::ReloadPhysicConfig),
        _ => None,
    }
}
