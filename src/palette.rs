//! Sticker colours as linear RGB.

use crate::face::Color;

/// Fraction of brightness a sticker loses on a face turned away from the
/// camera.
pub const COLOR_LOSS: f32 = 0.45;

/// Body colour showing between the stickers.
pub const BODY: [f32; 3] = [0.02, 0.02, 0.02];

pub fn active(color: Color) -> [f32; 3] {
    match color {
        Color::White => [1.0, 1.0, 1.0],
        Color::Green => [0.0, 1.0, 0.0],
        Color::Blue => [0.0, 0.0, 1.0],
        Color::Red => [1.0, 0.0, 0.0],
        Color::Orange => [1.0, 0.647, 0.0],
        Color::Yellow => [1.0, 1.0, 0.0],
    }
}

pub fn inactive(color: Color) -> [f32; 3] {
    active(color).map(|channel| channel * (1.0 - COLOR_LOSS))
}

pub fn rgb(color: Color, is_active: bool) -> [f32; 3] {
    if is_active {
        active(color)
    } else {
        inactive(color)
    }
}
