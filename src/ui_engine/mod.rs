pub mod settings;
pub use self::settings::{GreetingSettings, GreetingSettingsBuilder};

pub mod timers;
pub use self::timers::{Timers, UiEvent};

pub mod screens;
pub use self::screens::{Screen, ScreenSwitcher};

pub mod notification;
pub use self::notification::NotificationCenter;

pub mod letter;
pub use self::letter::{format_spanish_date, today_letter_date};

pub mod clipboard;
pub use self::clipboard::{copy_letter, Clipboard};

pub mod parallax;
pub use self::parallax::{parallax_offset, FloatingHearts};

pub mod shortcuts;
pub use self::shortcuts::{shortcut_for, Shortcut};

pub mod greeting_ui;
pub use self::greeting_ui::{draw_greeting_ui, UiActions, UiFrame};
