use eframe::egui::{self, pos2, vec2, Color32, FontId, Rect, Rounding, Stroke};

use crate::types::CardRecord;
use crate::ui_constants::{card, APPLE_BLUE};
use crate::views::ui_helpers::{draw_soft_shadow, with_alpha};

/// Paint one card body. `fold` runs from 1.0 (front fully shown) through 0.0
/// (edge-on) to -1.0 (back fully shown): the card narrows around its vertical
/// axis and swaps face past the midpoint. `carried` adds the accent ring and
/// the stronger shadow of a card in flight.
pub fn draw_card_body(ui: &egui::Ui, record: &CardRecord, rect: Rect, fold: f32, carried: bool) {
    let width_factor = fold.abs().max(0.02);
    let face_rect = Rect::from_center_size(
        rect.center(),
        vec2(rect.width() * width_factor, rect.height()),
    );
    let back = fold < 0.0;

    let rounding = Rounding::same(card::ROUNDING);
    let p = ui.painter();
    draw_soft_shadow(p, face_rect, card::ROUNDING, carried);

    let fill = if back {
        Color32::from_rgb(229, 231, 235)
    } else {
        Color32::WHITE
    };
    p.rect_filled(face_rect, rounding, fill);
    p.rect_stroke(face_rect, rounding, Stroke::new(1.0, Color32::from_rgb(243, 244, 246)));
    if carried {
        p.rect_stroke(
            face_rect.expand(1.0),
            rounding,
            Stroke::new(card::RING_WIDTH, with_alpha(APPLE_BLUE, 0.3)),
        );
    }

    // Near the fold the face is too narrow to read; fade the text out rather
    // than squeezing the glyphs. Layout stays at the unfolded width and the
    // face rect clips it, so lines never rewrap mid-animation.
    let text_alpha = ((width_factor - 0.35) / 0.65).clamp(0.0, 1.0);
    if text_alpha <= 0.0 {
        return;
    }

    let text_painter = ui.painter_at(face_rect);
    let wrap_w = rect.width() - card::PADDING * 2.0;
    let left = rect.center().x - wrap_w / 2.0;
    let top = rect.min.y + card::PADDING;

    if back {
        let detail_color = with_alpha(Color32::from_rgb(75, 85, 99), text_alpha);
        let detail = ui.fonts(|f| {
            f.layout(
                record.detail.to_string(),
                FontId::proportional(14.0),
                detail_color,
                wrap_w,
            )
        });
        text_painter.galley(pos2(left, top), detail, detail_color);
    } else {
        let title_color = with_alpha(Color32::from_rgb(17, 24, 39), text_alpha);
        let title = ui.fonts(|f| {
            f.layout(
                record.title.to_string(),
                FontId::proportional(20.0),
                title_color,
                wrap_w,
            )
        });
        let title_h = title.size().y;
        text_painter.galley(pos2(left, top), title, title_color);

        let summary_color = with_alpha(Color32::from_rgb(75, 85, 99), text_alpha);
        let summary = ui.fonts(|f| {
            f.layout(
                record.summary.to_string(),
                FontId::proportional(14.0),
                summary_color,
                wrap_w,
            )
        });
        text_painter.galley(pos2(left, top + title_h + 8.0), summary, summary_color);
    }
}
