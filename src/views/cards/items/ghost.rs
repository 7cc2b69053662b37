use eframe::egui::{self, pos2, vec2, Align2, Color32, FontId, Rect, Rounding, Stroke};

use crate::ui_constants::{card, APPLE_BLUE};
use crate::views::ui_helpers::{draw_soft_shadow, with_alpha};

/// Backdrop pod behind a cell: frosted plate with the position number near
/// its bottom edge. Not drawn for the cell whose card is being carried.
pub fn draw_pod(ui: &egui::Ui, cell: Rect, index: usize) {
    let pod = cell.expand(card::POD_OUTSET);
    let rounding = Rounding::same(card::POD_ROUNDING);
    let p = ui.painter();

    p.rect_filled(
        pod.translate(vec2(0.0, 1.0)),
        rounding,
        Color32::from_black_alpha(6),
    );
    p.rect_filled(pod, rounding, Color32::from_rgba_unmultiplied(255, 255, 255, 128));
    p.rect_stroke(
        pod,
        rounding,
        Stroke::new(1.0, Color32::from_rgba_unmultiplied(255, 255, 255, 51)),
    );

    p.text(
        pos2(pod.center().x, pod.max.y - 16.0),
        Align2::CENTER_BOTTOM,
        format!("{:02}", index + 1),
        FontId::proportional(14.0),
        Color32::from_rgb(156, 163, 175),
    );
}

/// Translucent stand-in drawn at the carried card's home position.
pub fn draw_ghost(ui: &egui::Ui, card_rect: Rect) {
    let rounding = Rounding::same(card::ROUNDING);
    let p = ui.painter();

    draw_soft_shadow(p, card_rect, card::ROUNDING, true);
    p.rect_filled(
        card_rect,
        rounding,
        Color32::from_rgba_unmultiplied(255, 255, 255, 204),
    );
    p.rect_stroke(
        card_rect,
        rounding,
        Stroke::new(2.0, with_alpha(APPLE_BLUE, 0.3)),
    );
}
