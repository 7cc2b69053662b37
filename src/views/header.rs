use eframe::egui::{self, Align, Color32, FontId, Layout, Margin, RichText, Rounding};

use crate::localization::translate;
use crate::ui_constants::{spacing, APPLE_BLUE, APPLE_GRAY};

/// Button flags from the header; the app acts on them after drawing.
pub struct HeaderResponse {
    pub reset_clicked: bool,
    pub open_settings: bool,
    pub open_logs: bool,
    pub open_about: bool,
}

/// Top chrome: activity title on the left, actions on the right.
pub fn draw_header_panel(ctx: &egui::Context) -> HeaderResponse {
    let mut out = HeaderResponse {
        reset_clicked: false,
        open_settings: false,
        open_logs: false,
        open_about: false,
    };

    egui::TopBottomPanel::top("header_panel")
        .frame(
            egui::Frame::none()
                .fill(APPLE_GRAY)
                .inner_margin(Margin::symmetric(24.0, 16.0)),
        )
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(translate("header-title"))
                        .font(FontId::proportional(30.0))
                        .color(Color32::from_rgb(17, 24, 39)),
                );
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    let reset = egui::Button::new(
                        RichText::new(translate("reset-order")).color(Color32::WHITE),
                    )
                    .fill(APPLE_BLUE)
                    .rounding(Rounding::same(16.0));
                    if ui.add(reset).clicked() {
                        out.reset_clicked = true;
                    }

                    ui.add_space(spacing::LARGE);
                    if ui.button("About").clicked() {
                        out.open_about = true;
                    }
                    if ui.button("Logs").clicked() {
                        out.open_logs = true;
                    }
                    if ui.button("Settings").clicked() {
                        out.open_settings = true;
                    }
                });
            });
        });

    out
}
