#![cfg(feature = "interactive_tests")]

use confetti_greeting::animation_driver::ConfettiAnimation;
use confetti_greeting::physic_engine::{ParticleStore, PhysicConfig};
use confetti_greeting::renderer_engine::{CanvasRenderer, PixelCanvas, RendererConfig};
use confetti_greeting::ui_engine::GreetingSettings;
use confetti_greeting::window_engine::{GlfwWindowEngine, WindowEngine};
use confetti_greeting::GreetingApp;

#[test]
fn test_greeting_app_runs_a_few_frames() -> anyhow::Result<()> {
    let _ = env_logger::builder().is_test(true).try_init();

    let window_engine = GlfwWindowEngine::init(800, 600, "Test Greeting")?;
    let sizes = window_engine.get_sizes();
    let (fb_width, fb_height) = sizes.framebuffer;
    let (width, height) = sizes.canvas();
    assert_eq!((width as i32, height as i32), window_engine.get_size());

    let renderer_config = RendererConfig::default();
    let renderer = CanvasRenderer::new(fb_width, fb_height, &renderer_config)?;
    let animation = ConfettiAnimation::new(
        ParticleStore::with_seed(&PhysicConfig::default(), 1),
        PixelCanvas::new(width, height),
        renderer_config.shapes(),
    );

    let mut app = GreetingApp::new(renderer, window_engine, animation, GreetingSettings::default());
    for _ in 0..3 {
        assert!(app.step());
    }
    assert_eq!(app.frames(), 3);
    app.close();
    Ok(())
}
