// Facade module for card building blocks.
// Re-export the primitives so render.rs can import via views::cards::items.
pub mod card;
pub mod faces;
pub mod ghost;
pub use card::{flip_card, is_flipped, toggle_flip, CardResponse};
