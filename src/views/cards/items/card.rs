use std::f32::consts::PI;

use eframe::egui::{self, CursorIcon, Rect, Sense};

use super::faces::draw_card_body;
use super::ghost::draw_pod;
use crate::types::{CardId, CardRecord};
use crate::ui_constants::anim;
use crate::views::ui_helpers::scale_around_center;

/// Hover info returned by flip_card so the caller can adjust cursors.
pub struct CardResponse {
    pub hovered: bool,
}

fn flip_id(id: CardId) -> egui::Id {
    egui::Id::new(("card_flip", id))
}

/// Has this card been turned to its back side? The flag lives in egui temp
/// memory keyed by card id, so it survives reorders and resets.
pub fn is_flipped(ctx: &egui::Context, id: CardId) -> bool {
    ctx.memory(|m| m.data.get_temp::<bool>(flip_id(id)).unwrap_or(false))
}

pub fn toggle_flip(ctx: &egui::Context, id: CardId) {
    let flipped = !is_flipped(ctx, id);
    ctx.memory_mut(|m| m.data.insert_temp(flip_id(id), flipped));
}

/// Fold of the flip animation: 1.0 front fully shown, -1.0 back fully shown.
pub fn flip_fold(ctx: &egui::Context, id: CardId) -> f32 {
    let secs = if crate::app::settings::with_settings(|s| s.reduce_motion) {
        0.0
    } else {
        anim::FLIP_SECS
    };
    let t = ctx.animate_bool_with_time(flip_id(id).with("anim"), is_flipped(ctx, id), secs);
    (t * PI).cos()
}

/// Card resting in its cell: backdrop pod, hover growth, current flip state.
/// Hover growth is suppressed while any card is being carried.
pub fn flip_card(
    ui: &mut egui::Ui,
    record: &CardRecord,
    index: usize,
    cell: Rect,
    drag_in_progress: bool,
) -> CardResponse {
    draw_pod(ui, cell, index);

    let card_rect = crate::views::cards::render::card_rect_in_cell(cell);
    let resp = ui
        .interact(
            card_rect,
            egui::Id::new(("card", record.id)),
            Sense::click_and_drag(),
        )
        .on_hover_cursor(CursorIcon::Grab);
    let hovered = resp.hovered() && !drag_in_progress;

    let hover_secs = if crate::app::settings::with_settings(|s| s.reduce_motion) {
        0.0
    } else {
        anim::HOVER_SECS
    };
    let grow = ui.ctx().animate_bool_with_time(
        egui::Id::new(("card_hover", record.id)),
        hovered,
        hover_secs,
    );
    let rect = scale_around_center(card_rect, 1.0 + (anim::HOVER_SCALE - 1.0) * grow);

    draw_card_body(ui, record, rect, flip_fold(ui.ctx(), record.id), false);

    CardResponse { hovered }
}
