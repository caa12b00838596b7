use imgui_glfw_rs::glfw;
use log::{debug, info, warn};
use std::time::Instant;

use crate::animation_driver::{ConfettiAnimation, FrameRequest};
use crate::physic_engine::{EvasiveButton, PhysicConfig};
use crate::renderer_engine::{PixelCanvas, RendererEngine};
use crate::ui_engine::{
    copy_letter, draw_greeting_ui, shortcut_for, today_letter_date, FloatingHearts,
    GreetingSettings, NotificationCenter, Screen, ScreenSwitcher, Shortcut, Timers, UiActions,
    UiEvent, UiFrame,
};
use crate::utils::{Fullscreen, WindowedGeometry};
use crate::window_engine::WindowEngine;

pub const PHYSIC_CONFIG_PATH: &str = "assets/config/physic.toml";

pub struct GreetingApp<R, W>
where
    R: RendererEngine,
    W: WindowEngine,
{
    renderer_engine: R,
    window_engine: W,

    animation: ConfettiAnimation<PixelCanvas>,
    frame_request: FrameRequest,

    no_button: EvasiveButton,
    screens: ScreenSwitcher,
    timers: Timers<UiEvent>,
    notifications: NotificationCenter,
    hearts: FloatingHearts,
    settings: GreetingSettings,
    letter_date: String,

    windowed: WindowedGeometry,
    frames: u64,
    last_time: Instant,
    first_frame: bool,
}

impl<R, W> GreetingApp<R, W>
where
    R: RendererEngine,
    W: WindowEngine,
{
    pub fn new(
        renderer_engine: R,
        window_engine: W,
        animation: ConfettiAnimation<PixelCanvas>,
        settings: GreetingSettings,
    ) -> Self {
        let size = window_engine.get_size();

        Self {
            renderer_engine,
            window_engine,
            animation,
            frame_request: FrameRequest::default(),
            no_button: EvasiveButton::new(settings.button_margin, settings.pulse()),
            screens: ScreenSwitcher::new(Screen::Prompt),
            timers: Timers::new(),
            notifications: NotificationCenter::new(settings.notification_duration()),
            hearts: FloatingHearts::new(settings.floating_hearts),
            letter_date: today_letter_date(),
            settings,
            windowed: WindowedGeometry {
                pos: (0, 0),
                size,
            },
            frames: 0,
            last_time: Instant::now(),
            first_frame: true,
        }
    }

    pub fn run(&mut self) -> anyhow::Result<()> {
        self.sync_canvas_with_window();
        while self.step() {}
        Ok(())
    }

    pub fn step(&mut self) -> bool {
        if self.window_engine.should_close() {
            return false;
        }

        self.window_engine.poll_events();

        // Collect events into a Vec to avoid borrow checker issues
        let events: Vec<_> = glfw::flush_messages(self.window_engine.get_events()).collect();
        let now = Instant::now();

        for (_, event) in events {
            match event {
                glfw::WindowEvent::FramebufferSize(..) => {
                    self.sync_canvas_with_window();
                }
                glfw::WindowEvent::ContentScale(sx, sy) => {
                    // la taille ne se stabilise qu'après le changement d'échelle
                    debug!("🔍 Content scale changed: {:.2} x {:.2}", sx, sy);
                    self.timers
                        .schedule(now, self.settings.resize_settle(), UiEvent::ResyncCanvas);
                }
                glfw::WindowEvent::CursorPos(x, y) => {
                    self.hearts.set_cursor([x as f32, y as f32].into());
                }
                glfw::WindowEvent::Key(key, _, action, _) => {
                    match shortcut_for(key, action, self.screens.active()) {
                        // navigation clavier d'imgui active : le bouton focalisé gère « Entrée »
                        Some(Shortcut::Yes) if !self.imgui_wants_keyboard() => self.on_yes(now),
                        Some(Shortcut::Yes) => {}
                        Some(Shortcut::Back) => self.on_back(now),
                        Some(Shortcut::ToggleFullscreen) => {
                            self.window_engine
                                .get_window_mut()
                                .toggle_fullscreen(&mut self.windowed);
                        }
                        Some(Shortcut::ReloadPhysicConfig) => self.reload_config(),
                        None => {}
                    }
                }
                _ => {}
            }
            let imgui_system = self.window_engine.get_imgui_system_mut();
            imgui_system
                .glfw
                .handle_event(&mut imgui_system.context, &event);
        }

        for event in self.timers.poll(now) {
            self.on_timer(event, now);
        }

        let delta = now.duration_since(self.last_time).as_secs_f32();
        self.last_time = now;
        self.frames += 1;

        // N'avance les confettis que si une frame a été demandée
        if self.frame_request.take() {
            self.animation.tick(delta, &mut self.frame_request);
        }

        self.renderer_engine.begin_frame();

        let actions = {
            let frame = UiFrame {
                screen: self.screens.active(),
                settings: &self.settings,
                letter_date: &self.letter_date,
                no_button: &self.no_button,
                notification: self.notifications.current(now),
                hearts: &self.hearts,
                now,
            };
            let (window, imgui_system) = self.window_engine.get_window_and_imgui_mut();
            let ui = imgui_system
                .glfw
                .frame(window, &mut imgui_system.context);
            let actions = draw_greeting_ui(ui, &frame);
            imgui_system.glfw.draw(&mut imgui_system.context, window);
            actions
        };

        // Confettis par-dessus l'UI
        let dirty = self.animation.take_dirty();
        self.renderer_engine
            .present_canvas(self.animation.canvas(), dirty);

        self.window_engine.swap_buffers();

        if self.first_frame {
            info!("🚀 First frame rendered");
            self.first_frame = false;
        }

        self.apply_actions(actions, now);

        true
    }

    fn apply_actions(&mut self, actions: UiActions, now: Instant) {
        if let Some(size) = actions.no_button_size {
            self.no_button.set_size(size);
        }
        if let Some(event) = actions.approach {
            self.no_button.handle(event, actions.viewport, now);
        }
        if actions.no_activated {
            debug!("🙈 'No' activated from keyboard, nothing happens");
        }
        if actions.yes {
            self.on_yes(now);
        }
        if actions.back {
            self.on_back(now);
        }
        if actions.share {
            self.on_share(now);
        }
    }

    /// Rafale au centre, puis changement d'écran après le délai de transition.
    fn on_yes(&mut self, now: Instant) {
        if !self.screens.is_active(Screen::Prompt) {
            return;
        }
        info!("💖 Yes!");
        self.animation.burst_at_center();
        self.animation.start(&mut self.frame_request);
        self.timers.schedule(
            now,
            self.settings.transition_delay(),
            UiEvent::SwitchScreen {
                from: Screen::Prompt,
                to: Screen::Letter,
            },
        );
    }

    fn on_back(&mut self, now: Instant) {
        if !self.screens.is_active(Screen::Letter) {
            return;
        }
        self.animation.stop();
        self.no_button.reset();
        self.screens.switch(
            Screen::Letter,
            Screen::Prompt,
            &mut self.timers,
            now,
            self.settings.fade(),
        );
    }

    fn on_share(&mut self, now: Instant) {
        let text = self.settings.letter_text(&self.letter_date);
        let window = self.window_engine.get_window_mut();
        copy_letter(
            &mut **window,
            &text,
            &mut self.notifications,
            &self.settings,
            now,
        );
    }

    fn on_timer(&mut self, event: UiEvent, now: Instant) {
        match event {
            UiEvent::SwitchScreen { from, to } => {
                self.screens
                    .switch(from, to, &mut self.timers, now, self.settings.fade());
            }
            UiEvent::ShowScreen(screen) => {
                if screen == Screen::Letter {
                    self.letter_date = today_letter_date();
                }
                self.screens.show(screen);
            }
            UiEvent::ResyncCanvas => self.sync_canvas_with_window(),
        }
    }

    fn imgui_wants_keyboard(&mut self) -> bool {
        self.window_engine
            .get_imgui_system_mut()
            .context
            .io()
            .want_capture_keyboard
    }

    /// Viewport GL en pixels physiques, confettis en pixels logiques
    /// (mêmes coordonnées que le pointeur et l'UI).
    fn sync_canvas_with_window(&mut self) {
        let sizes = self.window_engine.get_sizes();
        let (fb_width, fb_height) = sizes.framebuffer;
        self.renderer_engine.set_window_size(fb_width, fb_height);

        let (width, height) = sizes.canvas();
        self.animation.resize(width, height);

        let (sx, sy) = sizes.scale();
        debug!(
            "🖥️ Canvas resized: {} x {} (framebuffer {} x {}, scale {:.2} x {:.2})",
            width, height, fb_width, fb_height, sx, sy
        );
    }

    pub fn reload_config(&mut self) {
        match PhysicConfig::from_file(PHYSIC_CONFIG_PATH) {
            Ok(config) => {
                info!("Physic config reloaded:\n{:#?}", config);
                self.animation.store_mut().reload_config(&config);
            }
            Err(e) => warn!("⚠️ Physic config not reloaded: {e:#}"),
        }
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn close(&mut self) {
        self.animation.stop();
        self.renderer_engine.close();
        info!("👋 Closed after {} frames", self.frames);
    }
}
