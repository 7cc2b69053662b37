// Logs window in its own OS viewport: colored levels, copy and clear.

use eframe::egui;
use lazy_static::lazy_static;
use log::Level;
use std::sync::RwLock;

lazy_static! {
    static ref LOGS_OPEN: RwLock<bool> = RwLock::new(false);
    static ref AUTOSCROLL: RwLock<bool> = RwLock::new(true);
}

pub fn open_logs() {
    *LOGS_OPEN.write().unwrap() = true;
}

fn level_color(level: Level) -> egui::Color32 {
    match level {
        Level::Error => egui::Color32::from_rgb(220, 80, 80),
        Level::Warn => egui::Color32::from_rgb(235, 200, 80),
        Level::Info => egui::Color32::from_gray(200),
        Level::Debug => egui::Color32::from_rgb(120, 180, 255),
        Level::Trace => egui::Color32::from_gray(160),
    }
}

fn append_entry(job: &mut egui::text::LayoutJob, entry: &crate::logger::LogEntry) {
    let fmt = egui::TextFormat {
        font_id: egui::FontId::monospace(12.0),
        color: level_color(entry.level),
        ..Default::default()
    };
    job.append(&(entry.text() + "\n"), 0.0, fmt);
}

fn draw_toolbar(ui: &mut egui::Ui) {
    ui.horizontal(|ui| {
        ui.label(format!("{} lines", crate::logger::len()));
        ui.separator();

        let mut autoscroll = *AUTOSCROLL.read().unwrap();
        if ui.checkbox(&mut autoscroll, "Autoscroll").changed() {
            *AUTOSCROLL.write().unwrap() = autoscroll;
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Clear").clicked() {
                crate::logger::clear();
            }
            if ui.button("Copy").clicked() {
                let text = crate::logger::all_text();
                ui.output_mut(|o| o.copied_text = text);
            }
        });
    });
}

pub fn draw_logs_viewport(ctx: &egui::Context) {
    if !*LOGS_OPEN.read().unwrap() {
        return;
    }

    let viewport_id = egui::ViewportId::from_hash_of("logs_window");

    // Deferred viewport: the log buffer is global, so the closure captures
    // no app state and can run on its own thread.
    ctx.show_viewport_deferred(
        viewport_id,
        egui::ViewportBuilder::default()
            .with_title("Logs")
            .with_inner_size([760.0, 480.0])
            .with_resizable(true),
        move |ctx, _class| {
            if ctx.input(|i| i.viewport().close_requested()) {
                *LOGS_OPEN.write().unwrap() = false;
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                return;
            }
            egui::CentralPanel::default().show(ctx, |ui| {
                draw_toolbar(ui);
                ui.separator();

                let stick = *AUTOSCROLL.read().unwrap();
                let mut scroll = egui::ScrollArea::vertical().auto_shrink([false, false]);
                if stick {
                    scroll = scroll.stick_to_bottom(true);
                }

                // Virtualized: only the visible rows get formatted, and they all
                // land in a single LayoutJob instead of one widget per line.
                let total = crate::logger::len();
                let row_height = ui.text_style_height(&egui::TextStyle::Monospace) + 2.0;
                scroll.show_rows(ui, row_height, total, |ui, row_range| {
                    let mut job = egui::text::LayoutJob::default();
                    crate::logger::visit_range(row_range.start, row_range.end, |e| {
                        append_entry(&mut job, e);
                    });
                    ui.label(job);
                });
            });
        },
    );
}
