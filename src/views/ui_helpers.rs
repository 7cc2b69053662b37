use eframe::egui::{vec2, Color32, Painter, Rect, Rounding};

/// Layered translucent rects approximating a soft drop shadow.
/// `elevated` switches to the larger spread used while a card is carried.
pub fn draw_soft_shadow(painter: &Painter, rect: Rect, rounding: f32, elevated: bool) {
    // Biggest and faintest layer first so the smaller ones stack on top.
    let layers: &[(f32, f32, u8)] = if elevated {
        &[(12.0, 18.0, 8), (6.0, 10.0, 14), (2.0, 4.0, 22)]
    } else {
        &[(6.0, 6.0, 7), (3.0, 3.0, 12), (1.0, 1.0, 18)]
    };
    for &(expand, dy, alpha) in layers {
        painter.rect_filled(
            rect.expand(expand).translate(vec2(0.0, dy)),
            Rounding::same(rounding + expand),
            Color32::from_black_alpha(alpha),
        );
    }
}

/// Scale a color's alpha by `factor` in 0..=1, keeping the rgb channels.
pub fn with_alpha(color: Color32, factor: f32) -> Color32 {
    let a = (color.a() as f32 * factor.clamp(0.0, 1.0)).round() as u8;
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), a)
}

/// Shrink or grow a rect around its center.
pub fn scale_around_center(rect: Rect, factor: f32) -> Rect {
    Rect::from_center_size(rect.center(), rect.size() * factor)
}
