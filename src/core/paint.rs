use log::debug;
use macroquad::prelude::*;

use super::cell::{Cell, CellGrid};
use super::color::Rgb;

/// Whether the primary pointer button is held
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PaintPhase {
    Idle,
    Painting,
}

/// Transient pointer tracking, reset on release
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointerState {
    pub is_painting: bool,
    /// Last pointer position seen over the grid (screen pixels)
    pub last_position: Vec2,
}

impl Default for PointerState {
    fn default() -> Self {
        Self {
            is_painting: false,
            last_position: Vec2::ZERO,
        }
    }
}

/// Colors a paint operation works with
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Brush {
    pub selected: Rgb,
    pub default: Rgb,
}

/// Result color of painting a cell currently showing `current`.
///
/// Unset cells take the selected color. A cell already showing the selected
/// color (in any parseable representation) is erased to the default color.
/// Anything else, including colors that fail to parse, is overwritten.
pub fn resolve_paint(current: Option<&str>, brush: Brush) -> Rgb {
    let current = match current {
        Some(raw) if !raw.trim().is_empty() => raw,
        _ => return brush.selected,
    };

    match current.parse::<Rgb>() {
        Ok(existing) if existing == brush.selected => brush.default,
        Ok(_) => brush.selected,
        Err(err) => {
            debug!("Treating unparseable cell color as unset: {}", err);
            brush.selected
        }
    }
}

/// Apply the toggle rule to a single cell and store the result as `#RRGGBB`
pub fn paint(cell: &mut Cell, brush: Brush) -> Rgb {
    let result = resolve_paint(cell.color.as_deref(), brush);
    cell.color = Some(result.to_string());
    result
}

/// Pointer-driven painting state machine
#[derive(Clone, Debug, Default)]
pub struct PaintEngine {
    pointer: PointerState,
}

impl PaintEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> PaintPhase {
        if self.pointer.is_painting {
            PaintPhase::Painting
        } else {
            PaintPhase::Idle
        }
    }

    pub fn pointer(&self) -> PointerState {
        self.pointer
    }

    /// Idle -> Painting, painting the pressed cell immediately
    pub fn pointer_down(
        &mut self,
        cells: &mut CellGrid,
        index: usize,
        position: Vec2,
        brush: Brush,
    ) -> Option<Rgb> {
        self.pointer.is_painting = true;
        self.pointer.last_position = position;
        Self::paint_index(cells, index, brush)
    }

    /// Drag-paint while held; otherwise only track the pointer position
    pub fn pointer_enter(
        &mut self,
        cells: &mut CellGrid,
        index: usize,
        position: Vec2,
        brush: Brush,
    ) -> Option<Rgb> {
        self.pointer.last_position = position;
        if !self.pointer.is_painting {
            return None;
        }
        Self::paint_index(cells, index, brush)
    }

    /// Painting -> Idle, no color change
    pub fn pointer_up(&mut self) {
        if self.pointer.is_painting {
            debug!("Stroke finished at {:?}", self.pointer.last_position);
        }
        self.pointer.is_painting = false;
    }

    fn paint_index(cells: &mut CellGrid, index: usize, brush: Brush) -> Option<Rgb> {
        match cells.get_mut(index) {
            Some(cell) => {
                let result = paint(cell, brush);
                debug!("Cell {} -> {}", index, result);
                Some(result)
            }
            None => {
                debug!("Ignoring paint on cell {} outside the grid ({} cells)", index, cells.len());
                None
            }
        }
    }
}
