pub mod items;
pub mod render;
pub use render::{card_rect_in_cell, flip_card, is_flipped, toggle_flip, CardResponse};
