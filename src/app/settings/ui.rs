// Settings UI: egui viewport window plus staged input state.

use eframe::egui;
use lazy_static::lazy_static;
use std::sync::RwLock;
use strum::IntoEnumIterator;

use super::store::{save_settings_to_disk, APP_SETTINGS};
use crate::localization::SupportedLang;

lazy_static! {
    pub static ref SETTINGS_OPEN: RwLock<bool> = RwLock::new(false);
    // Staged values for Save/Cancel
    static ref LANGUAGE_INPUT: RwLock<Option<SupportedLang>> = RwLock::new(None);
    static ref REDUCE_MOTION_INPUT: RwLock<bool> = RwLock::new(false);
}

pub fn open_settings() {
    let s = APP_SETTINGS.read().unwrap();
    {
        let mut lang = LANGUAGE_INPUT.write().unwrap();
        *lang = s.language;
    }
    {
        let mut b = REDUCE_MOTION_INPUT.write().unwrap();
        *b = s.reduce_motion;
    }
    *SETTINGS_OPEN.write().unwrap() = true;
}

fn language_label(lang: Option<SupportedLang>) -> String {
    match lang {
        Some(l) => l.to_string(),
        None => format!("Auto ({})", crate::localization::get_current_language()),
    }
}

pub fn draw_settings_viewport(ctx: &egui::Context) {
    if !*SETTINGS_OPEN.read().unwrap() {
        return;
    }
    let viewport_id = egui::ViewportId::from_hash_of("settings_window");
    ctx.show_viewport_immediate(
        viewport_id,
        egui::ViewportBuilder::default()
            .with_title("Settings")
            .with_inner_size([360.0, 180.0])
            .with_resizable(true),
        move |ctx, _class| {
            egui::CentralPanel::default().show(ctx, |ui| {
                // Interface language
                ui.horizontal(|ui| {
                    ui.label("Language:");
                    let current = { *LANGUAGE_INPUT.read().unwrap() };
                    egui::ComboBox::from_id_source("settings_language")
                        .selected_text(language_label(current))
                        .show_ui(ui, |ui| {
                            let mut sel = current;
                            ui.selectable_value(&mut sel, None, language_label(None));
                            for lang in SupportedLang::iter() {
                                ui.selectable_value(&mut sel, Some(lang), lang.to_string());
                            }
                            if sel != current {
                                *LANGUAGE_INPUT.write().unwrap() = sel;
                            }
                        });
                });
                ui.separator();

                {
                    let mut reduce_val = *REDUCE_MOTION_INPUT.read().unwrap();
                    if ui
                        .checkbox(&mut reduce_val, "Reduce motion")
                        .on_hover_text("Snap card flips into place without animating them.")
                        .changed()
                    {
                        *REDUCE_MOTION_INPUT.write().unwrap() = reduce_val;
                    }
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Save").clicked() {
                        let language = { *LANGUAGE_INPUT.read().unwrap() };
                        let reduce_motion = { *REDUCE_MOTION_INPUT.read().unwrap() };
                        {
                            let mut st = APP_SETTINGS.write().unwrap();
                            st.language = language;
                            st.reduce_motion = reduce_motion;
                        } // drop write lock before saving to avoid deadlock
                        save_settings_to_disk();
                        crate::localization::set_language(language);
                        *SETTINGS_OPEN.write().unwrap() = false;
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                    if ctx.input(|i| i.viewport().close_requested()) {
                        *SETTINGS_OPEN.write().unwrap() = false;
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                    ui.add_space(8.0);
                });
            });
        },
    );
}
