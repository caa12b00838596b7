// Boucle de l'application
pub mod greeting_app;
pub use greeting_app::GreetingApp;
// Animation des confettis
pub mod animation_driver;
pub use animation_driver::{ConfettiAnimation, DriverState, FrameRequest, FrameScheduler};
// Physic engine
pub mod physic_engine;
pub use physic_engine::{EvasiveButton, ParticleStore, PhysicConfig};
// Renderer engine
pub mod renderer_engine;
pub use renderer_engine::{Canvas, PixelCanvas, RendererEngine};
// Interface
pub mod ui_engine;
pub use ui_engine::GreetingSettings;
// Fenêtre
pub mod window_engine;
// Utilities
pub mod utils;
