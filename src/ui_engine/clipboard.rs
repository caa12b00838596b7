use anyhow::{anyhow, Result};
use log::{info, warn};
use std::time::Instant;

use crate::ui_engine::notification::NotificationCenter;
use crate::ui_engine::settings::GreetingSettings;
use imgui_glfw_rs::glfw;

pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// GLFW ne signale pas les échecs d'écriture : on relit le contenu.
impl Clipboard for glfw::Window {
    fn write_text(&mut self, text: &str) -> Result<()> {
        self.set_clipboard_string(text);
        match self.get_clipboard_string() {
            Some(content) if content == text => Ok(()),
            Some(_) => Err(anyhow!("clipboard content differs after write")),
            None => Err(anyhow!("clipboard unavailable")),
        }
    }
}

/// Copie la lettre et affiche la notification correspondante.
/// Retourne `true` si la copie a réussi.
pub fn copy_letter<C: Clipboard + ?Sized>(
    clipboard: &mut C,
    text: &str,
    notifications: &mut NotificationCenter,
    settings: &GreetingSettings,
    now: Instant,
) -> bool {
    match clipboard.write_text(text) {
        Ok(()) => {
            info!("📋 Letter copied ({} chars)", text.chars().count());
            notifications.show(settings.copy_success.as_str(), now);
            true
        }
        Err(e) => {
            warn!("❌ Failed to copy letter: {e:#}");
            notifications.show(settings.copy_failure.as_str(), now);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[derive(Default)]
    struct Memory(Option<String>);

    impl Clipboard for Memory {
        fn write_text(&mut self, text: &str) -> Result<()> {
            self.0 = Some(text.to_owned());
            Ok(())
        }
    }

    #[test]
    fn test_copy_success_notifies() {
        let settings = GreetingSettings::default();
        let mut center = NotificationCenter::new(Duration::from_secs(3));
        let mut clipboard = Memory::default();
        let now = Instant::now();

        assert!(copy_letter(&mut clipboard, "carta", &mut center, &settings, now));
        assert_eq!(clipboard.0.as_deref(), Some("carta"));
        assert_eq!(center.current(now), Some("Carta copiada al portapapeles"));
    }
}
