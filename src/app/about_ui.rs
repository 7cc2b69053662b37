// About window in its own OS viewport.

use eframe::egui;
use lazy_static::lazy_static;
use std::sync::RwLock;

lazy_static! {
    static ref ABOUT_OPEN: RwLock<bool> = RwLock::new(false);
}

pub fn open_about() {
    if let Ok(mut v) = ABOUT_OPEN.write() {
        *v = true;
    }
}

pub fn draw_about_viewport(ctx: &egui::Context) {
    if !ABOUT_OPEN.read().map(|g| *g).unwrap_or(false) {
        return;
    }

    ctx.show_viewport_immediate(
        egui::ViewportId::from_hash_of("about_window"),
        egui::ViewportBuilder::default()
            .with_title("About Card Sorter")
            .with_inner_size([380.0, 200.0])
            .with_resizable(false),
        move |ctx, _class| {
            if ctx.input(|i| i.viewport().close_requested()) {
                if let Ok(mut v) = ABOUT_OPEN.write() {
                    *v = false;
                }
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                ctx.request_repaint();
                return;
            }

            egui::CentralPanel::default().show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(12.0);
                    ui.heading("Card Sorter");
                    ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                    ui.add_space(12.0);
                    ui.label("Ten project-management skills, one grid.");
                    ui.label("Drag cards to rank them, click a card to read the other side.");
                });
            });
        },
    );
}
