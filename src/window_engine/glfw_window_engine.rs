use super::r#trait::{ImguiSystem, WindowEngine, WindowEvents};
use anyhow::{anyhow, Result};
use imgui::Context as ImContext;
use imgui_glfw_rs::glfw::{self, Context};
use imgui_glfw_rs::ImguiGLFW;
use log::{info, warn};

use crate::renderer_engine::tools::{setup_opengl_debug, show_opengl_context_info};
use crate::utils::CenterWindow;

/// Police optionnelle ; sans elle, la police intégrée d'imgui est utilisée.
pub const UI_FONT_PATH: &str = "assets/fonts/greeting.ttf";
pub const UI_FONT_SIZE: f32 = 22.0;

pub struct GlfwWindowEngine {
    glfw: glfw::Glfw,
    window: glfw::PWindow,
    events: WindowEvents,
    imgui_system: ImguiSystem,
}

fn load_ui_font(imgui: &mut ImContext) {
    match std::fs::read(UI_FONT_PATH) {
        Ok(font_data) => {
            imgui.fonts().add_font(&[imgui::FontSource::TtfData {
                data: &font_data,
                size_pixels: UI_FONT_SIZE,
                config: Some(imgui::FontConfig {
                    oversample_h: 2,
                    oversample_v: 2,
                    ..Default::default()
                }),
            }]);
            info!("🔤 UI font loaded from {}", UI_FONT_PATH);
        }
        Err(e) => {
            warn!("⚠️ No UI font at {} ({}), using imgui default", UI_FONT_PATH, e);
            imgui.fonts().add_font(&[imgui::FontSource::DefaultFontData {
                config: Some(imgui::FontConfig {
                    size_pixels: UI_FONT_SIZE,
                    ..Default::default()
                }),
            }]);
        }
    }
    imgui.fonts().build_rgba32_texture();
}

fn setup_ui_style(imgui: &mut ImContext) {
    let style = imgui.style_mut();
    style.use_light_colors();
    style.window_rounding = 16.0;
    style.frame_rounding = 24.0;
    style.frame_padding = [18.0, 10.0];
    style.item_spacing = [16.0, 12.0];
}

impl WindowEngine for GlfwWindowEngine {
    fn init(width: i32, height: i32, title: &str) -> Result<Self> {
        let mut glfw = glfw::init(glfw::fail_on_errors)
            .map_err(|_| anyhow!("Impossible d'initialiser GLFW"))?;

        glfw.window_hint(glfw::WindowHint::ContextVersionMajor(3));
        glfw.window_hint(glfw::WindowHint::ContextVersionMinor(3));
        glfw.window_hint(glfw::WindowHint::OpenGlProfile(
            glfw::OpenGlProfileHint::Core,
        ));

        let (mut window, events) = glfw
            .create_window(
                width as u32,
                height as u32,
                title,
                glfw::WindowMode::Windowed,
            )
            .ok_or_else(|| anyhow!("Erreur création fenêtre GLFW"))?;

        window.make_current();
        window.set_key_polling(true);
        window.set_char_polling(true);
        window.set_framebuffer_size_polling(true);
        window.set_content_scale_polling(true);
        window.set_cursor_pos_polling(true);
        window.set_mouse_button_polling(true);
        window.set_scroll_polling(true);
        window.center_on_primary_monitor();
        glfw.set_swap_interval(glfw::SwapInterval::Sync(1));

        info!("✅ OpenGL context ready for '{}'", title);

        // load OpenGL function pointers
        gl::load_with(|s| window.get_proc_address(s).map_or(std::ptr::null(), |f| f as *const _));

        unsafe {
            show_opengl_context_info();
            setup_opengl_debug();
            gl::Enable(gl::BLEND);
            gl::BlendFunc(gl::SRC_ALPHA, gl::ONE_MINUS_SRC_ALPHA);
        }

        let mut imgui = ImContext::create();
        imgui.set_ini_filename(None);
        imgui.io_mut().config_flags |= imgui::ConfigFlags::NAV_ENABLE_KEYBOARD;
        load_ui_font(&mut imgui);
        setup_ui_style(&mut imgui);

        let imgui_glfw = ImguiGLFW::new(&mut imgui, &mut window)?;

        Ok(Self {
            glfw,
            window,
            events,
            imgui_system: ImguiSystem {
                context: imgui,
                glfw: imgui_glfw,
            },
        })
    }

    fn poll_events(&mut self) {
        self.glfw.poll_events();
    }

    fn swap_buffers(&mut self) {
        self.window.swap_buffers();
    }

    fn should_close(&self) -> bool {
        self.window.should_close()
    }

    fn set_should_close(&mut self, value: bool) {
        self.window.set_should_close(value);
    }

    fn get_size(&self) -> (i32, i32) {
        self.window.get_size()
    }

    fn get_framebuffer_size(&self) -> (i32, i32) {
        self.window.get_framebuffer_size()
    }

    fn get_window_mut(&mut self) -> &mut glfw::PWindow {
        &mut self.window
    }

    fn get_events(&self) -> &WindowEvents {
        &self.events
    }

    fn get_imgui_system_mut(&mut self) -> &mut ImguiSystem {
        &mut self.imgui_system
    }

    fn get_window_and_imgui_mut(&mut self) -> (&mut glfw::PWindow, &mut ImguiSystem) {
        (&mut self.window, &mut self.imgui_system)
    }
}
