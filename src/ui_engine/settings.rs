// =========================
// Greeting UI Configuration
// =========================

use anyhow::Context;
use derive_builder::Builder;
use serde::Deserialize;
use std::time::Duration;

/// Textes et délais de l'écran de voeux.
///
/// Construit via le builder (valeurs par défaut de la page d'origine) ou lu
/// depuis `assets/config/greeting.toml` ; les champs absents du fichier
/// gardent leur valeur par défaut.
#[derive(Clone, Builder, Debug, Deserialize, PartialEq)]
#[builder(pattern = "owned", build_fn(error = "anyhow::Error"))]
#[serde(default)]
pub struct GreetingSettings {
    #[builder(default = "\"¿Quieres ser mi San Valentín?\".into()")]
    pub question: String,

    #[builder(default = "\"Sí\".into()")]
    pub yes_label: String,

    #[builder(default = "\"No\".into()")]
    pub no_label: String,

    #[builder(default = "\"Volver\".into()")]
    pub back_label: String,

    #[builder(default = "\"Compartir carta\".into()")]
    pub share_label: String,

    #[builder(default = "\"Querida:\".into()")]
    pub letter_greeting: String,

    #[builder(default = "DEFAULT_LETTER_BODY.into()")]
    pub letter_body: String,

    #[builder(default = "\"Con todo mi cariño.\".into()")]
    pub letter_signature: String,

    #[builder(default = "\"Carta copiada al portapapeles\".into()")]
    pub copy_success: String,

    #[builder(default = "\"Error al copiar. Intenta de nuevo.\".into()")]
    pub copy_failure: String,

    /// Marge minimale entre le bouton « no » et les bords (pixels)
    #[builder(default = "20.0")]
    pub button_margin: f32,

    /// Délai entre le « oui » et le changement d'écran (ms)
    #[builder(default = "300")]
    pub transition_delay_ms: u64,

    /// Délai entre le masquage d'un écran et l'affichage du suivant (ms)
    #[builder(default = "100")]
    pub fade_ms: u64,

    /// Durée d'affichage d'une notification (ms)
    #[builder(default = "3000")]
    pub notification_ms: u64,

    /// Durée du grossissement du bouton après un déplacement (ms)
    #[builder(default = "150")]
    pub pulse_ms: u64,

    /// Délai de stabilisation avant de resynchroniser la surface (ms)
    #[builder(default = "100")]
    pub resize_settle_ms: u64,

    /// Nombre de coeurs décoratifs flottants
    #[builder(default = "6")]
    pub floating_hearts: usize,
}

pub const DEFAULT_LETTER_BODY: &str = "Cada día a tu lado es un regalo. \
Gracias por las risas, los abrazos y por hacer que todo sea más bonito. \
Hoy solo quería recordarte lo mucho que te quiero.";

/// Garde la compatibilité avec `.default()`
impl Default for GreetingSettings {
    fn default() -> Self {
        GreetingSettingsBuilder::default()
            .build()
            .expect("every greeting setting has a default")
    }
}

impl GreetingSettings {
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read greeting config '{}'", path))?;
        Ok(toml::from_str(&text)?)
    }

    pub fn transition_delay(&self) -> Duration {
        Duration::from_millis(self.transition_delay_ms)
    }

    pub fn fade(&self) -> Duration {
        Duration::from_millis(self.fade_ms)
    }

    pub fn notification_duration(&self) -> Duration {
        Duration::from_millis(self.notification_ms)
    }

    pub fn pulse(&self) -> Duration {
        Duration::from_millis(self.pulse_ms)
    }

    pub fn resize_settle(&self) -> Duration {
        Duration::from_millis(self.resize_settle_ms)
    }

    /// Texte complet de la lettre, tel qu'il est copié dans le presse-papiers.
    pub fn letter_text(&self, date: &str) -> String {
        format!(
            "{}\n\n{}\n\n{}\n\n{}",
            date, self.letter_greeting, self.letter_body, self.letter_signature
        )
    }
}
