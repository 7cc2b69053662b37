pub mod cards;
pub mod header;
pub mod ui_helpers;
