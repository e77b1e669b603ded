use macroquad::prelude::*;

use crate::error::GeometryError;

/// Grid dimensions derived from the viewport and a fixed column count
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GridGeometry {
    /// Side of a square cell in screen pixels (fractional values are expected)
    pub cell_size: f32,
    pub row_count: u32,
    pub column_count: u32,
    pub total_cells: usize,
}

impl GridGeometry {
    /// Derive the grid from the viewport size.
    ///
    /// A zero (or negative) viewport dimension gives an empty grid rather than
    /// an error. A zero column count, or a row count that does not fit in
    /// `u32`, is rejected.
    pub fn resolve(
        viewport_width: f32,
        viewport_height: f32,
        column_count: u32,
    ) -> Result<Self, GeometryError> {
        if column_count == 0 {
            return Err(GeometryError::ZeroColumns);
        }

        let cell_size = viewport_width / column_count as f32;
        let rows = if cell_size > 0.0 && viewport_height > 0.0 && cell_size.is_finite() {
            (viewport_height as f64 / cell_size as f64).floor()
        } else {
            0.0
        };

        let too_large = || GeometryError::TooLarge {
            rows,
            columns: column_count,
        };
        if !rows.is_finite() || rows > u32::MAX as f64 {
            return Err(too_large());
        }
        let row_count = u32::try_from(rows as u64).map_err(|_| too_large())?;
        let total_cells = (row_count as usize)
            .checked_mul(column_count as usize)
            .ok_or_else(too_large)?;

        Ok(Self {
            cell_size,
            row_count,
            column_count,
            total_cells,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.total_cells == 0
    }

    /// (column, row) of a cell index
    pub fn coords_of(&self, index: usize) -> Option<(u32, u32)> {
        if index >= self.total_cells {
            return None;
        }
        let cols = self.column_count as usize;
        Some(((index % cols) as u32, (index / cols) as u32))
    }

    pub fn index_of(&self, column: u32, row: u32) -> Option<usize> {
        if column >= self.column_count || row >= self.row_count {
            return None;
        }
        Some(row as usize * self.column_count as usize + column as usize)
    }

    /// Convert a screen position to the index of the cell under it
    pub fn cell_at(&self, screen: Vec2) -> Option<usize> {
        if self.is_empty() || screen.x < 0.0 || screen.y < 0.0 {
            return None;
        }
        let column = (screen.x / self.cell_size).floor() as u32;
        let row = (screen.y / self.cell_size).floor() as u32;
        self.index_of(column, row)
    }

    /// Screen-space rectangle covered by a cell
    pub fn cell_rect(&self, index: usize) -> Option<Rect> {
        let (column, row) = self.coords_of(index)?;
        Some(Rect::new(
            column as f32 * self.cell_size,
            row as f32 * self.cell_size,
            self.cell_size,
            self.cell_size,
        ))
    }
}
