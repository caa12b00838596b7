use confetti_greeting::physic_engine::{IntegrationMode, PhysicConfig};
use confetti_greeting::renderer_engine::RendererConfig;
use confetti_greeting::ui_engine::GreetingSettings;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_temp(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(content.as_bytes()).expect("write temp file");
    file
}

#[test]
fn test_physic_config_from_file() -> anyhow::Result<()> {
    let file = write_temp(
        r##"
burst_count = 80
gravity = 0.1
palette = ["#000000", "#FFFFFF"]

[integration]
mode = "real_time"
reference_fps = 60.0
"##,
    );
    let config = PhysicConfig::from_file(file.path().to_str().unwrap())?;
    assert_eq!(config.burst_count, 80);
    assert_eq!(config.gravity, 0.1);
    assert_eq!(config.life_decay, 0.015);
    assert_eq!(
        config.integration,
        IntegrationMode::RealTime {
            reference_fps: 60.0
        }
    );
    assert_eq!(config.palette()?.len(), 2);
    Ok(())
}

#[test]
fn test_physic_config_rejects_bad_palette() {
    let file = write_temp("palette = [\"#GG0000\"]\n");
    assert!(PhysicConfig::from_file(file.path().to_str().unwrap()).is_err());
}

#[test]
fn test_missing_file_is_an_error() {
    assert!(PhysicConfig::from_file("does/not/exist.toml").is_err());
    assert!(RendererConfig::from_file("does/not/exist.toml").is_err());
    assert!(GreetingSettings::from_file("does/not/exist.toml").is_err());
}

#[test]
fn test_renderer_config_save_and_reload() -> anyhow::Result<()> {
    let file = NamedTempFile::new()?;
    let path = file.path().to_str().unwrap();
    let config = RendererConfig {
        heart_size: 12.0,
        ..Default::default()
    };
    config.save_to_file(path)?;
    assert_eq!(RendererConfig::from_file(path)?, config);
    Ok(())
}

#[test]
fn test_greeting_settings_from_file() -> anyhow::Result<()> {
    let file = write_temp("question = \"Will you?\"\nnotification_ms = 1500\n");
    let settings = GreetingSettings::from_file(file.path().to_str().unwrap())?;
    assert_eq!(settings.question, "Will you?");
    assert_eq!(settings.notification_ms, 1500);
    assert_eq!(settings.yes_label, "Sí");
    Ok(())
}

#[test]
fn test_shipped_configs_parse() -> anyhow::Result<()> {
    let physic = PhysicConfig::from_file("assets/config/physic.toml")?;
    assert_eq!(physic.burst_count, 50);
    assert_eq!(physic.integration, IntegrationMode::FrameCoupled);
    RendererConfig::from_file("assets/config/renderer.toml")?;
    let settings = GreetingSettings::from_file("assets/config/greeting.toml")?;
    assert_eq!(settings.transition_delay_ms, 300);
    Ok(())
}
