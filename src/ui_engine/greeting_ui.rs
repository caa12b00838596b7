use imgui::{Condition, MouseButton, StyleColor, StyleVar, Ui, WindowFlags};
use std::time::Instant;

use crate::physic_engine::{ApproachEvent, EvasiveButton, Placement, Vec2};
use crate::ui_engine::parallax::FloatingHearts;
use crate::ui_engine::screens::Screen;
use crate::ui_engine::settings::GreetingSettings;

const BUTTON_SIZE: [f32; 2] = [140.0, 52.0];
const LETTER_MAX_WIDTH: f32 = 560.0;
const FLOATING_HEART_SIZE: f32 = 18.0;

const PINK: [f32; 4] = [1.0, 0.41, 0.71, 1.0];
const PINK_HOVER: [f32; 4] = [1.0, 0.55, 0.78, 1.0];
const DEEP_RED: [f32; 4] = [0.9, 0.22, 0.27, 1.0];
const SOFT_PINK: [f32; 4] = [1.0, 0.71, 0.85, 1.0];
const PANEL_BG: [f32; 4] = [1.0, 1.0, 1.0, 0.92];
const HEART_TINT: [f32; 4] = [1.0, 0.41, 0.71, 0.35];

/// Ce que l'UI doit afficher pour une frame.
pub struct UiFrame<'a> {
    pub screen: Option<Screen>,
    pub settings: &'a GreetingSettings,
    pub letter_date: &'a str,
    pub no_button: &'a EvasiveButton,
    pub notification: Option<&'a str>,
    pub hearts: &'a FloatingHearts,
    pub now: Instant,
}

/// Interactions relevées pendant la frame, traitées ensuite par l'application.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct UiActions {
    pub yes: bool,
    /// « No » activé au clavier : aucun effet
    pub no_activated: bool,
    pub back: bool,
    pub share: bool,
    pub approach: Option<ApproachEvent>,
    /// Taille mesurée du bouton « no » (pixels logiques)
    pub no_button_size: Option<Vec2>,
    pub viewport: Vec2,
}

fn panel_flags() -> WindowFlags {
    WindowFlags::NO_DECORATION
        | WindowFlags::NO_MOVE
        | WindowFlags::NO_SAVED_SETTINGS
        | WindowFlags::ALWAYS_AUTO_RESIZE
}

pub fn draw_greeting_ui(ui: &Ui, frame: &UiFrame) -> UiActions {
    let viewport = Vec2::from(ui.io().display_size);
    let mut actions = UiActions {
        viewport,
        ..Default::default()
    };

    draw_floating_hearts(ui, frame.hearts, viewport);

    let _bg = ui.push_style_color(StyleColor::WindowBg, PANEL_BG);
    let _button = ui.push_style_color(StyleColor::Button, PINK);
    let _hovered = ui.push_style_color(StyleColor::ButtonHovered, PINK_HOVER);
    let _active = ui.push_style_color(StyleColor::ButtonActive, DEEP_RED);

    match frame.screen {
        Some(Screen::Prompt) => draw_prompt(ui, frame, viewport, &mut actions),
        Some(Screen::Letter) => draw_letter(ui, frame, viewport, &mut actions),
        // fondu entre deux écrans
        None => {}
    }

    if let Some(message) = frame.notification {
        draw_notification(ui, message, viewport);
    }

    actions
}

fn draw_prompt(ui: &Ui, frame: &UiFrame, viewport: Vec2, actions: &mut UiActions) {
    let settings = frame.settings;
    ui.window("##prompt")
        .position([viewport.x * 0.5, viewport.y * 0.5], Condition::Always)
        .position_pivot([0.5, 0.5])
        .flags(panel_flags())
        .build(|| {
            ui.set_window_font_scale(1.4);
            ui.text_colored(DEEP_RED, &settings.question);
            ui.set_window_font_scale(1.0);
            ui.spacing();

            if ui.button_with_size(&settings.yes_label, BUTTON_SIZE) {
                actions.yes = true;
            }
            ui.set_item_default_focus();

            if frame.no_button.placement() == Placement::InFlow {
                ui.same_line();
                draw_no_button(ui, frame, actions);
            }
        });

    if let Placement::Absolute(pos) = frame.no_button.placement() {
        let _padding = ui.push_style_var(StyleVar::WindowPadding([0.0, 0.0]));
        ui.window("##no-button")
            .position([pos.x, pos.y], Condition::Always)
            .flags(panel_flags() | WindowFlags::NO_BACKGROUND)
            .build(|| draw_no_button(ui, frame, actions));
    }
}

fn draw_no_button(ui: &Ui, frame: &UiFrame, actions: &mut UiActions) {
    let scale = frame.no_button.scale(frame.now);
    let size = [BUTTON_SIZE[0] * scale, BUTTON_SIZE[1] * scale];

    let _button = ui.push_style_color(StyleColor::Button, SOFT_PINK);
    if ui.button_with_size(&frame.settings.no_label, size) {
        actions.no_activated = true;
    }
    actions.no_button_size = Some(Vec2::from(ui.item_rect_size()));

    // pointeur uniquement : le focus clavier ne déplace pas le bouton
    if ui.is_mouse_hovering_rect(ui.item_rect_min(), ui.item_rect_max()) {
        actions.approach = Some(if ui.is_mouse_clicked(MouseButton::Left) {
            ApproachEvent::PointerDown
        } else {
            ApproachEvent::Hover
        });
    }
}

fn draw_letter(ui: &Ui, frame: &UiFrame, viewport: Vec2, actions: &mut UiActions) {
    let settings = frame.settings;
    let width = (viewport.x * 0.85).min(LETTER_MAX_WIDTH);

    ui.window("##letter")
        .position([viewport.x * 0.5, viewport.y * 0.5], Condition::Always)
        .position_pivot([0.5, 0.5])
        // hauteur 0 : ajustée au contenu, largeur fixe pour le retour à la ligne
        .size([width, 0.0], Condition::Always)
        .flags(WindowFlags::NO_DECORATION | WindowFlags::NO_MOVE | WindowFlags::NO_SAVED_SETTINGS)
        .build(|| {
            ui.text_colored(DEEP_RED, frame.letter_date);
            ui.separator();
            ui.spacing();
            ui.text_wrapped(&settings.letter_greeting);
            ui.spacing();
            ui.text_wrapped(&settings.letter_body);
            ui.spacing();
            ui.text_wrapped(&settings.letter_signature);
            ui.spacing();

            if ui.button_with_size(&settings.back_label, BUTTON_SIZE) {
                actions.back = true;
            }
            ui.same_line();
            if ui.button(&settings.share_label) {
                actions.share = true;
            }
        });
}

fn draw_notification(ui: &Ui, message: &str, viewport: Vec2) {
    ui.window("##notification")
        .position([viewport.x * 0.5, viewport.y - 40.0], Condition::Always)
        .position_pivot([0.5, 1.0])
        .bg_alpha(0.85)
        .flags(panel_flags() | WindowFlags::NO_INPUTS)
        .build(|| ui.text(message));
}

/// Coeur = deux cercles + un triangle (la liste de dessin d'imgui ne
/// remplit que des polygones convexes).
fn draw_floating_hearts(ui: &Ui, hearts: &FloatingHearts, viewport: Vec2) {
    let draw = ui.get_background_draw_list();
    let r = FLOATING_HEART_SIZE * 0.5;
    for center in hearts.positions(viewport) {
        let left = center + Vec2::new(-r * 0.5, -r * 0.25);
        let right = center + Vec2::new(r * 0.5, -r * 0.25);
        draw.add_circle(left.to_array(), r * 0.55, HEART_TINT)
            .filled(true)
            .build();
        draw.add_circle(right.to_array(), r * 0.55, HEART_TINT)
            .filled(true)
            .build();
        draw.add_triangle(
            (center + Vec2::new(-r, 0.0)).to_array(),
            (center + Vec2::new(r, 0.0)).to_array(),
            (center + Vec2::new(0.0, r * 1.1)).to_array(),
            HEART_TINT,
        )
        .filled(true)
        .build();
    }
}
