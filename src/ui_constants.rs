// UI constants extracted from scattered magic numbers across the codebase.
// Clean Code principle: Replace Magic Numbers with Named Constants.

use eframe::egui::Color32;

/// Page background, the light gray the whole activity sits on.
pub const APPLE_GRAY: Color32 = Color32::from_rgb(245, 245, 247);

/// Accent color: Reset button fill, drag ring, ghost border.
pub const APPLE_BLUE: Color32 = Color32::from_rgb(0, 113, 227);

/// UI spacing constants
pub mod spacing {
    /// Small spacing (4px)
    pub const SMALL: f32 = 4.0;

    /// Medium spacing (8px)
    pub const MEDIUM: f32 = 8.0;

    /// Large spacing (16px)
    pub const LARGE: f32 = 16.0;
}

/// Grid layout constants
pub mod grid {
    /// Width of one grid cell in logical pixels
    pub const CELL_WIDTH: f32 = 320.0;

    /// Gap between cells, both axes
    pub const GAP: f32 = 32.0;

    /// The grid never grows wider than three columns
    pub const MAX_COLS: usize = 3;

    /// Vertical padding above the first row
    pub const TOP_PAD: f32 = 24.0;
}

/// Card-specific layout constants
pub mod card {
    /// Card takes this fraction of the cell width, centered
    pub const WIDTH_FRACTION: f32 = 0.85;

    /// Card width in logical pixels
    pub const WIDTH: f32 = super::grid::CELL_WIDTH * WIDTH_FRACTION;

    /// Card height keeps a 3:2 aspect ratio
    pub const HEIGHT: f32 = WIDTH * 2.0 / 3.0;

    /// Border radius of card corners
    pub const ROUNDING: f32 = 12.0;

    /// Inner padding of both faces
    pub const PADDING: f32 = 24.0;

    /// Height reserved under the card for the position label
    pub const INDEX_STRIP_H: f32 = 32.0;

    /// Backdrop pod extends this far past the card on every side
    pub const POD_OUTSET: f32 = 12.0;

    /// Border radius of the backdrop pod
    pub const POD_ROUNDING: f32 = 16.0;

    /// Width of the accent ring around a dragged card
    pub const RING_WIDTH: f32 = 2.0;
}

/// Animation timings
pub mod anim {
    /// Full front-to-back flip duration in seconds
    pub const FLIP_SECS: f32 = 0.5;

    /// Hover scale ease duration in seconds
    pub const HOVER_SECS: f32 = 0.15;

    /// Scale factor of a hovered card
    pub const HOVER_SCALE: f32 = 1.02;
}

/// Drag activation thresholds. These separate a click-to-flip from a
/// drag-to-reorder, so a card only starts moving on deliberate input.
pub mod activation {
    /// Pointer drag activates after this much movement (logical px)
    pub const POINTER_DISTANCE: f32 = 10.0;

    /// Touch drag activates after holding this long (seconds)
    pub const TOUCH_DELAY_SECS: f64 = 0.25;

    /// Movement allowed during the touch delay before the gesture
    /// stops being a drag candidate (logical px)
    pub const TOUCH_TOLERANCE: f32 = 5.0;
}
