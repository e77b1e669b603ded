// Core constants for the pixel grid
use super::color::Rgb;

/// Number of columns; rows are derived from the viewport height
pub const COLUMN_COUNT: u32 = 100;

/// Number of randomly generated picker colors per session
pub const PALETTE_SIZE: usize = 20;

/// Upper bounds for a session; larger values are rejected, not truncated
pub const MAX_PALETTE_SIZE: usize = 256;
pub const MAX_GRID_CELLS: usize = 1 << 24;

/// Background color of an unpainted cell, also the erase color
pub const DEFAULT_CELL_COLOR: Rgb = Rgb::new(0xFF, 0xFF, 0xFF);

// Picker opens slightly up-left of the pointer so the pointer lands inside it
pub const PICKER_ANCHOR_CORRECTION: f32 = 5.0;

pub const SWATCH_SIZE: f32 = 24.0;
pub const SWATCH_PADDING: f32 = 4.0;
pub const SWATCH_COLUMNS: usize = 5;

pub fn grid_line_color() -> macroquad::prelude::Color {
    macroquad::prelude::Color::from_rgba(210, 225, 255, 255)
}
