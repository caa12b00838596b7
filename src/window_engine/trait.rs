use anyhow::Result;
use imgui_glfw_rs::glfw;

pub type WindowEvents = glfw::GlfwReceiver<(f64, glfw::WindowEvent)>;

/// Tailles d'une fenêtre : logique (évènements du pointeur, imgui) et
/// framebuffer (pixels physiques, viewport GL).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSizes {
    pub logical: (i32, i32),
    pub framebuffer: (i32, i32),
}

impl WindowSizes {
    /// Surface des confettis, en pixels logiques : le blit GL l'étire sur
    /// le framebuffer.
    pub fn canvas(&self) -> (u32, u32) {
        (self.logical.0.max(0) as u32, self.logical.1.max(0) as u32)
    }

    /// Pixels physiques par pixel logique (1.0 si la fenêtre est réduite).
    pub fn scale(&self) -> (f32, f32) {
        let axis = |fb: i32, logical: i32| {
            if logical > 0 && fb > 0 {
                fb as f32 / logical as f32
            } else {
                1.0
            }
        };
        (
            axis(self.framebuffer.0, self.logical.0),
            axis(self.framebuffer.1, self.logical.1),
        )
    }
}

pub struct ImguiSystem {
    pub context: imgui::Context,
    pub glfw: imgui_glfw_rs::ImguiGLFW,
}

pub trait WindowEngine {
    fn init(width: i32, height: i32, title: &str) -> Result<Self>
    where
        Self: Sized;

    fn poll_events(&mut self);
    fn swap_buffers(&mut self);
    fn should_close(&self) -> bool;
    fn set_should_close(&mut self, value: bool);
    fn get_size(&self) -> (i32, i32);
    /// Taille en pixels physiques (différente de `get_size` en HiDPI)
    fn get_framebuffer_size(&self) -> (i32, i32);

    fn get_sizes(&self) -> WindowSizes {
        WindowSizes {
            logical: self.get_size(),
            framebuffer: self.get_framebuffer_size(),
        }
    }

    fn get_window_mut(&mut self) -> &mut glfw::PWindow;
    fn get_events(&self) -> &WindowEvents;
    fn get_imgui_system_mut(&mut self) -> &mut ImguiSystem;

    // Fenêtre et imgui ensemble pour le rendu de l'UI
    fn get_window_and_imgui_mut(&mut self) -> (&mut glfw::PWindow, &mut ImguiSystem);
}
