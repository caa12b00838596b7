use anyhow::Result;
use log::{info, warn};

use confetti_greeting::animation_driver::ConfettiAnimation;
use confetti_greeting::greeting_app::PHYSIC_CONFIG_PATH;
use confetti_greeting::physic_engine::{ParticleStore, PhysicConfig};
use confetti_greeting::renderer_engine::{CanvasRenderer, PixelCanvas, RendererConfig};
use confetti_greeting::ui_engine::GreetingSettings;
use confetti_greeting::utils::show_rust_core_dependencies;
use confetti_greeting::window_engine::{GlfwWindowEngine, WindowEngine};
use confetti_greeting::GreetingApp;

const RENDERER_CONFIG_PATH: &str = "assets/config/renderer.toml";
const GREETING_CONFIG_PATH: &str = "assets/config/greeting.toml";

fn main() -> Result<()> {
    env_logger::init();

    info!("💌 Starting Confetti Greeting...");

    show_rust_core_dependencies();

    let physic_config = PhysicConfig::from_file(PHYSIC_CONFIG_PATH).unwrap_or_else(|e| {
        warn!("⚠️ {e:#}, using default physic config");
        PhysicConfig::default()
    });
    info!("Physic config loaded:\n{:#?}", physic_config);

    let renderer_config = RendererConfig::from_file(RENDERER_CONFIG_PATH).unwrap_or_else(|e| {
        warn!("⚠️ {e:#}, using default renderer config");
        RendererConfig::default()
    });

    let settings = GreetingSettings::from_file(GREETING_CONFIG_PATH).unwrap_or_else(|e| {
        warn!("⚠️ {e:#}, using default greeting settings");
        GreetingSettings::default()
    });

    let window_width = 1024;
    let window_height = 800;

    // 1. Init Window & Context
    let window_engine = GlfwWindowEngine::init(window_width, window_height, "Confetti Greeting")?;
    let sizes = window_engine.get_sizes();
    let (fb_width, fb_height) = sizes.framebuffer;

    // 2. Init Renderer (now that GL context is ready)
    let renderer_engine = CanvasRenderer::new(fb_width, fb_height, &renderer_config)?;

    // 3. Confettis, en pixels logiques
    let (canvas_width, canvas_height) = sizes.canvas();
    let animation = ConfettiAnimation::new(
        ParticleStore::new(&physic_config),
        PixelCanvas::new(canvas_width, canvas_height),
        renderer_config.shapes(),
    );

    let mut app = GreetingApp::new(renderer_engine, window_engine, animation, settings);
    app.run()?;
    app.close();

    Ok(())
}
