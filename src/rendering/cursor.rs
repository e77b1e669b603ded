use macroquad::prelude::*;

use crate::core::PaintPhase;
use crate::state::Session;

pub fn draw_cursor(session: &Session, screen_mouse: Vec2) {
    let Some(rect) = session
        .geometry()
        .cell_at(screen_mouse)
        .and_then(|index| session.geometry().cell_rect(index))
    else {
        return;
    };

    match session.paint_phase() {
        PaintPhase::Idle => {
            // Highlight box around the cell under the pointer
            draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, 2.0, Color::from_rgba(0, 0, 0, 150));
        }
        PaintPhase::Painting => {
            draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, 2.0, session.selected_color().to_mq_color());
        }
    }
    draw_circle(screen_mouse.x, screen_mouse.y, 3.0, BLACK);
}
