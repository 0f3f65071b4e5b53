//! Theme colors as terminal colors

use higi_studio::theme::{Rgb, ThemeStyle};
use ratatui::style::Color;

pub fn rgb(color: Rgb) -> Color {
    Color::Rgb(color.r, color.g, color.b)
}

/// Glow blended onto the backdrop, used for card borders
pub fn glow(style: &ThemeStyle) -> Color {
    rgb(style.glow.over(style.backdrop.via))
}

/// Card background: a faint lift off the backdrop
pub fn card(style: &ThemeStyle) -> Color {
    rgb(style.backdrop.from.lerp(Rgb::new(255, 255, 255), 0.04))
}

/// Chant characters colored along the accent gradient
pub fn accent_cells(style: &ThemeStyle, count: usize) -> Vec<Color> {
    style.accent.spread(count).into_iter().map(rgb).collect()
}
