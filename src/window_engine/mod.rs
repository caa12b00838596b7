pub mod r#trait;
pub use r#trait::{ImguiSystem, WindowEngine, WindowEvents, WindowSizes};

pub mod glfw_window_engine;
pub use glfw_window_engine::GlfwWindowEngine;
