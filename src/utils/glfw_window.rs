use imgui_glfw_rs::glfw::{Monitor, Window, WindowMode};
use log::{info, warn};
use std::mem::discriminant;

pub trait CenterWindow {
    fn center_on_primary_monitor(&mut self);
}

impl CenterWindow for Window {
    fn center_on_primary_monitor(&mut self) {
        let mut glfw = self.glfw.clone();

        glfw.with_primary_monitor(|_, primary_monitor| {
            if let Some(mon) = primary_monitor {
                center_window(self, mon);
            }
        });
    }
}

fn center_window(window: &mut Window, monitor: &Monitor) {
    if let Some(mode) = monitor.get_video_mode() {
        let (monitor_x, monitor_y) = monitor.get_pos();
        let (window_w, window_h) = window.get_size();

        window.set_pos(
            monitor_x + ((mode.width as i32) - window_w) / 2,
            monitor_y + ((mode.height as i32) - window_h) / 2,
        );
    }
}

/// Position et taille à restaurer en quittant le plein écran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowedGeometry {
    pub pos: (i32, i32),
    pub size: (i32, i32),
}

pub trait Fullscreen {
    fn is_fullscreen(&self) -> bool;
    fn set_fullscreen(&mut self, monitor: &Monitor);
    /// Bascule fenêtré <-> plein écran sur le moniteur principal.
    fn toggle_fullscreen(&mut self, windowed: &mut WindowedGeometry);
}

impl Fullscreen for Window {
    fn is_fullscreen(&self) -> bool {
        self.with_window_mode(|mode| discriminant(&mode) != discriminant(&WindowMode::Windowed))
    }

    fn set_fullscreen(&mut self, monitor: &Monitor) {
        if let Some(mode) = monitor.get_video_mode() {
            self.set_monitor(
                WindowMode::FullScreen(monitor),
                0,
                0,
                mode.width,
                mode.height,
                Some(mode.refresh_rate),
            );
            info!("🖥️ Fullscreen: {} x {}", mode.width, mode.height);
        } else {
            warn!("⚠️ Could not get monitor video mode, staying windowed");
        }
    }

    fn toggle_fullscreen(&mut self, windowed: &mut WindowedGeometry) {
        if Fullscreen::is_fullscreen(self) {
            let WindowedGeometry { pos, size } = *windowed;
            self.set_monitor(
                WindowMode::Windowed,
                pos.0,
                pos.1,
                size.0 as u32,
                size.1 as u32,
                None,
            );
            info!("🖥️ Windowed: {} x {}", size.0, size.1);
        } else {
            *windowed = WindowedGeometry {
                pos: self.get_pos(),
                size: self.get_size(),
            };
            let mut glfw = self.glfw.clone();
            glfw.with_primary_monitor(|_, primary_monitor| {
                if let Some(mon) = primary_monitor {
                    self.set_fullscreen(mon);
                }
            });
        }
    }
}
