use macroquad::prelude::*;

use crate::core::*;
use crate::state::Session;

/// Draws painted cells and the grid lines of the session geometry
pub struct CanvasRenderer {
    show_grid_lines: bool,
}

impl CanvasRenderer {
    pub fn new() -> Self {
        CanvasRenderer {
            show_grid_lines: true,
        }
    }

    pub fn toggle_grid_lines(&mut self) {
        self.show_grid_lines = !self.show_grid_lines;
    }

    pub fn draw(&self, session: &Session) {
        let geometry = session.geometry();

        for (index, cell) in session.cells().iter() {
            if !cell.is_set() {
                continue;
            }
            // Erased cells keep their explicit default color string
            let Some(color) = session.cell_color(index).and_then(|c| c.parse::<Rgb>().ok()) else {
                continue;
            };
            if let Some(rect) = geometry.cell_rect(index) {
                draw_rectangle(rect.x, rect.y, rect.w, rect.h, color.to_mq_color());
            }
        }

        if self.show_grid_lines && !geometry.is_empty() {
            draw_grid_lines(geometry);
        }
    }
}

fn draw_grid_lines(geometry: &GridGeometry) {
    let width = geometry.column_count as f32 * geometry.cell_size;
    let height = geometry.row_count as f32 * geometry.cell_size;
    let color = grid_line_color();

    for col in 0..=geometry.column_count {
        let x = col as f32 * geometry.cell_size;
        draw_line(x, 0.0, x, height, 1.0, color);
    }
    for row in 0..=geometry.row_count {
        let y = row as f32 * geometry.cell_size;
        draw_line(0.0, y, width, y, 1.0, color);
    }
}
