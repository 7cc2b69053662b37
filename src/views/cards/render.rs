// Render facade for cards: re-export the implementation from views::cards::items
// so external code keeps using views::cards::{flip_card, ...}, plus the one
// place that knows how a card sits inside its grid cell.

use eframe::egui::{pos2, vec2, Rect};

pub use crate::views::cards::items::{flip_card, is_flipped, toggle_flip, CardResponse};

use crate::ui_constants::card;

/// The card body occupies a centered fraction of the cell width at a 3:2
/// aspect ratio; the strip left underneath belongs to the position label.
pub fn card_rect_in_cell(cell: Rect) -> Rect {
    let w = cell.width() * card::WIDTH_FRACTION;
    let h = w * 2.0 / 3.0;
    Rect::from_min_size(pos2(cell.center().x - w / 2.0, cell.min.y), vec2(w, h))
}
