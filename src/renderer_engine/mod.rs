pub mod r#trait;
pub use r#trait::{Canvas, RendererEngine};

pub mod config;
pub use self::config::RendererConfig;

pub mod shapes;
pub use self::shapes::{heart_outline, ConfettiShapes};

pub mod pixel_canvas;
pub use self::pixel_canvas::PixelCanvas;

pub mod canvas_renderer;
pub use self::canvas_renderer::CanvasRenderer;

pub mod tools;
pub use self::tools::show_opengl_context_info;
