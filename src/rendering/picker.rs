use macroquad::prelude::*;

use crate::core::{SWATCH_COLUMNS, SWATCH_PADDING, SWATCH_SIZE};
use crate::state::Session;

/// Screen placement of the picker overlay and its swatches
#[derive(Clone, Debug, PartialEq)]
pub struct PickerLayout {
    pub rect: Rect,
    pub swatches: Vec<Rect>,
}

impl PickerLayout {
    /// Swatches flow left to right, `SWATCH_COLUMNS` per row, from `anchor`
    pub fn new(anchor: Vec2, swatch_count: usize) -> Self {
        let step = SWATCH_SIZE + SWATCH_PADDING;
        let columns = SWATCH_COLUMNS.min(swatch_count.max(1));
        let rows = swatch_count.div_ceil(SWATCH_COLUMNS).max(1);

        let swatches = (0..swatch_count)
            .map(|i| {
                let col = i % SWATCH_COLUMNS;
                let row = i / SWATCH_COLUMNS;
                Rect::new(
                    anchor.x + SWATCH_PADDING + col as f32 * step,
                    anchor.y + SWATCH_PADDING + row as f32 * step,
                    SWATCH_SIZE,
                    SWATCH_SIZE,
                )
            })
            .collect();

        PickerLayout {
            rect: Rect::new(
                anchor.x,
                anchor.y,
                SWATCH_PADDING + columns as f32 * step,
                SWATCH_PADDING + rows as f32 * step,
            ),
            swatches,
        }
    }

    pub fn contains(&self, point: Vec2) -> bool {
        self.rect.contains(point)
    }

    /// Index of the swatch under `point`
    pub fn swatch_at(&self, point: Vec2) -> Option<usize> {
        self.swatches.iter().position(|swatch| swatch.contains(point))
    }
}

/// Layout of the picker when it is currently shown
pub fn visible_layout(session: &Session) -> Option<PickerLayout> {
    let picker = session.picker_state();
    picker
        .is_visible
        .then(|| PickerLayout::new(picker.anchor, session.palette().len()))
}

pub fn draw_picker(session: &Session) {
    let Some(layout) = visible_layout(session) else {
        return;
    };

    let r = layout.rect;
    draw_rectangle(r.x, r.y, r.w, r.h, Color::from_rgba(240, 240, 240, 255));
    draw_rectangle_lines(r.x, r.y, r.w, r.h, 2.0, BLACK);

    for (i, (swatch, color)) in layout.swatches.iter().zip(session.palette().colors()).enumerate() {
        draw_rectangle(swatch.x, swatch.y, swatch.w, swatch.h, color.to_mq_color());

        // Highlight the active entry
        if session.is_palette_entry_active(i) {
            draw_rectangle_lines(swatch.x, swatch.y, swatch.w, swatch.h, 3.0, Color::from_rgba(255, 255, 0, 255));
        } else {
            draw_rectangle_lines(swatch.x, swatch.y, swatch.w, swatch.h, 1.5, BLACK);
        }
    }
}
