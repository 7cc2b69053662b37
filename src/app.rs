// Состояние CardSortApp и кадр отрисовки. Сетка, колода и окна в подмодулях.

use eframe::{egui, App};

use crate::dnd::DragController;

pub mod deck;
mod grid;
pub mod settings;
mod logs_ui;
mod about_ui;

use deck::Deck;

pub struct CardSortApp {
    deck: Deck,
    dnd: DragController,
}

impl Default for CardSortApp {
    fn default() -> Self {
        Self {
            deck: Deck::new(),
            dnd: DragController::default(),
        }
    }
}

impl App for CardSortApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // New log lines repaint so the logs window stays fresh
        if crate::logger::take_new_flag() {
            ctx.request_repaint();
        }

        // Верхняя панель: заголовок и кнопки
        let header = crate::views::header::draw_header_panel(ctx);
        if header.reset_clicked && self.deck.reset() {
            ctx.request_repaint();
        }
        if header.open_settings {
            settings::open_settings();
            ctx.request_repaint();
        }
        if header.open_logs {
            logs_ui::open_logs();
            ctx.request_repaint();
        }
        if header.open_about {
            about_ui::open_about();
            ctx.request_repaint();
        }

        self.draw_deck_grid(ctx);

        // Secondary OS viewports, drawn after the main panels
        logs_ui::draw_logs_viewport(ctx);
        about_ui::draw_about_viewport(ctx);
        settings::draw_settings_viewport(ctx);
    }
}
