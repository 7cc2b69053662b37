// Settings module split: store (data & persistence) and ui (egui window).
// This file aggregates submodules and re-exports public API to preserve existing imports.

pub mod store;
pub mod ui;

// Store: data types, global state, and persistence
pub use store::{APP_SETTINGS, AppSettings, load_settings_from_disk, save_settings_to_disk};

// UI: egui viewport window for settings
pub use ui::{SETTINGS_OPEN, draw_settings_viewport, open_settings};

/// Helper function to read settings with a closure.
/// Reduces boilerplate of the `.read().unwrap()` pattern.
pub fn with_settings<F, R>(f: F) -> R
where
    F: FnOnce(&AppSettings) -> R,
{
    let st = APP_SETTINGS.read().unwrap();
    f(&st)
}

/// Helper function to modify settings with a closure.
/// Reduces boilerplate of the `.write().unwrap()` pattern.
pub fn with_settings_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut AppSettings) -> R,
{
    let mut st = APP_SETTINGS.write().unwrap();
    f(&mut st)
}
