use eframe::egui::{self, pos2, vec2, CursorIcon, Order, Rect, Sense};

use crate::dnd::{DragEvent, InputSnapshot, Slot};
use crate::types::CardRecord;
use crate::ui_constants::{card, grid, spacing};
use crate::views::cards::items::card::flip_fold;
use crate::views::cards::items::faces::draw_card_body;
use crate::views::cards::items::ghost::draw_ghost;
use crate::views::cards::{self, card_rect_in_cell};

/// Grid rendering and the drag-to-reorder pipeline split from app.rs.
impl super::CardSortApp {
    fn on_drag_event(&mut self, ctx: &egui::Context, event: DragEvent) {
        match event {
            DragEvent::Clicked(id) => {
                cards::toggle_flip(ctx, id);
                log::debug!("Card {} flipped", id);
            }
            DragEvent::DragStarted(id) => {
                log::debug!("Drag started for card {}", id);
            }
            DragEvent::DragEnded { active, over } => {
                self.deck.apply_drag_end(active, over);
            }
            DragEvent::DragCanceled(id) => {
                log::debug!("Drag canceled for card {}", id);
            }
        }
    }

    pub(super) fn draw_deck_grid(&mut self, ctx: &egui::Context) {
        // Центральная панель, сетка карточек в вертикальном скролле
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    let avail_w = ui.available_width().floor();
                    let cell_w = grid::CELL_WIDTH;
                    let gap = grid::GAP;

                    let mut cols = ((avail_w + gap) / (cell_w + gap)).floor() as usize;
                    cols = cols.clamp(1, grid::MAX_COLS);
                    let row_w = (cols as f32) * cell_w + ((cols - 1) as f32) * gap;
                    let left_pad = ((avail_w - row_w) / 2.0).max(0.0);

                    ui.add_space(grid::TOP_PAD);

                    let total = self.deck.cards().len();
                    let rows = (total + cols - 1) / cols;
                    let cell_h = card::HEIGHT + card::INDEX_STRIP_H;
                    let grid_h =
                        (rows as f32) * cell_h + (rows.saturating_sub(1) as f32) * gap;
                    let (grid_rect, _) =
                        ui.allocate_exact_size(vec2(avail_w, grid_h), Sense::hover());

                    // Cell rects in display order; these double as the drag hit areas.
                    let slots: Vec<Slot> = self
                        .deck
                        .cards()
                        .iter()
                        .enumerate()
                        .map(|(i, c)| {
                            let row = i / cols;
                            let col = i % cols;
                            let cell = Rect::from_min_size(
                                pos2(
                                    grid_rect.min.x + left_pad + (col as f32) * (cell_w + gap),
                                    grid_rect.min.y + (row as f32) * (cell_h + gap),
                                ),
                                vec2(cell_w, cell_h),
                            );
                            Slot {
                                id: c.id,
                                cell,
                                card: card_rect_in_cell(cell),
                            }
                        })
                        .collect();

                    let input = read_input(ctx);
                    if let Some(event) = self.dnd.step(&input, &slots) {
                        self.on_drag_event(ctx, event);
                    }

                    let active = self.dnd.active();
                    let drag_in_progress = active.is_some();

                    // Clone records so the card loop does not hold a borrow of self
                    let records: Vec<CardRecord> = self.deck.cards().to_vec();
                    for (i, (record, slot)) in records.iter().zip(slots.iter()).enumerate() {
                        if active.map(|d| d.card) == Some(record.id) {
                            // The carried card leaves a translucent stand-in at home,
                            // with no backdrop pod underneath.
                            draw_ghost(ui, slot.card);
                            continue;
                        }
                        cards::flip_card(ui, record, i, slot.cell, drag_in_progress);
                    }

                    ui.add_space(spacing::MEDIUM);
                });
        });

        // The card in flight rides a foreground overlay pinned to the pointer.
        if let Some(drag) = self.dnd.active() {
            let record = self
                .deck
                .cards()
                .iter()
                .find(|c| c.id == drag.card)
                .copied();
            if let Some(record) = record {
                let top_left = drag.last_pos - drag.grab_offset;
                egui::Area::new(egui::Id::new("carried_card"))
                    .order(Order::Foreground)
                    .fixed_pos(top_left)
                    .interactable(false)
                    .show(ctx, |ui| {
                        let (rect, _) = ui.allocate_exact_size(
                            vec2(card::WIDTH, card::HEIGHT),
                            Sense::hover(),
                        );
                        draw_card_body(ui, &record, rect, flip_fold(ctx, record.id), true);
                    });
            }
            ctx.output_mut(|o| o.cursor_icon = CursorIcon::Grabbing);
        }

        // Keep frames coming while a gesture is in progress: touch activation
        // fires on a timer and the overlay follows the pointer.
        if self.dnd.is_tracking() {
            ctx.request_repaint();
        }
    }
}

fn read_input(ctx: &egui::Context) -> InputSnapshot {
    ctx.input(|i| InputSnapshot {
        pos: i.pointer.latest_pos(),
        pressed: i.pointer.primary_pressed(),
        released: i.pointer.primary_released(),
        down: i.pointer.primary_down(),
        touch: i.any_touches(),
        escape: i.key_pressed(egui::Key::Escape),
        time: i.time,
    })
}
