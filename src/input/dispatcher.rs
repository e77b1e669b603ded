use log::warn;
use macroquad::prelude::*;

use super::tools::bresenham;
use crate::core::PaintPhase;
use crate::rendering::visible_layout;
use crate::state::{CellUpdate, Session, SurfaceEvent};

/// Raw input sampled once per frame
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct FrameInput {
    pub mouse: Vec2,
    pub primary_pressed: bool,
    pub primary_released: bool,
    pub secondary_pressed: bool,
    pub escape_pressed: bool,
}

impl FrameInput {
    pub fn poll() -> Self {
        FrameInput {
            mouse: Vec2::from(mouse_position()),
            primary_pressed: is_mouse_button_pressed(MouseButton::Left),
            primary_released: is_mouse_button_released(MouseButton::Left),
            secondary_pressed: is_mouse_button_pressed(MouseButton::Right),
            escape_pressed: is_key_pressed(KeyCode::Escape),
        }
    }
}

/// What the pointer is over
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HoverTarget {
    Outside,
    Picker,
    Cell(usize),
}

/// Turns polled frame input into the ordered event stream a session expects.
/// Enter events fire only when the hovered target changes, like DOM
/// `mouseover` does.
pub struct InputDispatcher {
    hover: HoverTarget,
}

impl Default for InputDispatcher {
    fn default() -> Self {
        Self {
            hover: HoverTarget::Outside,
        }
    }
}

impl InputDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hover(&self) -> HoverTarget {
        self.hover
    }

    fn hit_test(session: &Session, point: Vec2) -> HoverTarget {
        if visible_layout(session).is_some_and(|layout| layout.contains(point)) {
            return HoverTarget::Picker;
        }
        match session.geometry().cell_at(point) {
            Some(index) => HoverTarget::Cell(index),
            None => HoverTarget::Outside,
        }
    }

    pub fn translate(&mut self, frame: &FrameInput, session: &Session) -> Vec<SurfaceEvent> {
        let mut events = Vec::new();
        let target = Self::hit_test(session, frame.mouse);
        let previous = self.hover;
        self.hover = target;

        if let HoverTarget::Cell(index) = target {
            if previous != target {
                let from_picker = previous == HoverTarget::Picker;
                for cell in Self::entered_cells(session, previous, index) {
                    events.push(SurfaceEvent::PointerEnter {
                        cell,
                        from_picker,
                        position: frame.mouse,
                    });
                }
            }
        }

        if frame.primary_pressed {
            match target {
                HoverTarget::Picker => {
                    let swatch = visible_layout(session).and_then(|layout| layout.swatch_at(frame.mouse));
                    if let Some(index) = swatch {
                        events.push(SurfaceEvent::PaletteEntryClick { index });
                    }
                }
                HoverTarget::Cell(cell) => events.push(SurfaceEvent::PointerDown {
                    cell,
                    position: frame.mouse,
                }),
                HoverTarget::Outside => {}
            }
        }

        if frame.secondary_pressed {
            // Off the grid the picker opens where the pointer last crossed a cell
            let position = match target {
                HoverTarget::Outside => session.pointer().last_position,
                _ => frame.mouse,
            };
            events.push(SurfaceEvent::PaletteRequestOpen { position });
        }

        if frame.primary_released {
            events.push(SurfaceEvent::PointerUp);
        }

        if frame.escape_pressed {
            events.push(SurfaceEvent::ClosePicker);
        }

        events
    }

    /// Cells crossed since the previous frame. While painting, a pointer
    /// that skipped cells between two samples enters every cell on the line
    /// between them, excluding the one it came from.
    fn entered_cells(session: &Session, previous: HoverTarget, current: usize) -> Vec<usize> {
        let geometry = session.geometry();
        let HoverTarget::Cell(from) = previous else {
            return vec![current];
        };
        if session.paint_phase() != PaintPhase::Painting {
            return vec![current];
        }
        let (Some(start), Some(end)) = (geometry.coords_of(from), geometry.coords_of(current)) else {
            return vec![current];
        };

        bresenham(
            (start.0 as i32, start.1 as i32),
            (end.0 as i32, end.1 as i32),
        )
        .into_iter()
        .skip(1)
        .filter_map(|(col, row)| geometry.index_of(col as u32, row as u32))
        .collect()
    }
}

/// Feed events to the session in order, collecting the cells that changed
pub fn apply_events(session: &mut Session, events: Vec<SurfaceEvent>) -> Vec<CellUpdate> {
    let mut updates = Vec::new();
    for event in events {
        match session.dispatch(event) {
            Ok(Some(update)) => updates.push(update),
            Ok(None) => {}
            Err(err) => warn!("Dropped surface event: {}", err),
        }
    }
    updates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::core::{Palette, Rgb};

    fn session() -> Session {
        let palette = Palette::from_colors(vec![Rgb::new(0xAA, 0, 0), Rgb::new(0, 0xBB, 0)]);
        Session::with_palette(Config::default(), vec2(1000.0, 500.0), palette).unwrap()
    }

    fn at(x: f32, y: f32) -> FrameInput {
        FrameInput {
            mouse: vec2(x, y),
            ..Default::default()
        }
    }

    #[test]
    fn enter_fires_once_per_cell() {
        let session = session();
        let mut input = InputDispatcher::new();

        let events = input.translate(&at(5.0, 5.0), &session);
        assert!(matches!(events[..], [SurfaceEvent::PointerEnter { cell: 0, from_picker: false, .. }]));

        assert!(input.translate(&at(7.0, 6.0), &session).is_empty());
        assert_eq!(input.hover(), HoverTarget::Cell(0));
    }

    #[test]
    fn press_on_cell_starts_stroke() {
        let session = session();
        let mut input = InputDispatcher::new();
        input.translate(&at(15.0, 5.0), &session);

        let frame = FrameInput {
            primary_pressed: true,
            ..at(15.0, 5.0)
        };
        let events = input.translate(&frame, &session);
        assert_eq!(
            events,
            vec![SurfaceEvent::PointerDown {
                cell: 1,
                position: vec2(15.0, 5.0)
            }]
        );
    }

    #[test]
    fn fast_drag_fills_skipped_cells() {
        let mut session = session();
        let mut input = InputDispatcher::new();

        let down = FrameInput {
            primary_pressed: true,
            ..at(5.0, 5.0)
        };
        let events = input.translate(&down, &session);
        apply_events(&mut session, events);
        assert_eq!(session.paint_phase(), PaintPhase::Painting);

        // jump four cells to the right in one frame
        let events = input.translate(&at(45.0, 5.0), &session);
        let entered: Vec<usize> = events
            .iter()
            .filter_map(|e| match e {
                SurfaceEvent::PointerEnter { cell, .. } => Some(*cell),
                _ => None,
            })
            .collect();
        assert_eq!(entered, vec![1, 2, 3, 4]);

        let updates = apply_events(&mut session, events);
        assert_eq!(updates.len(), 4);
        for cell in 0..=4 {
            assert_eq!(session.cell_color(cell).as_deref(), Some("#AA0000"));
        }
    }

    #[test]
    fn secondary_press_opens_picker_and_click_selects() {
        let mut session = session();
        let mut input = InputDispatcher::new();

        let open = FrameInput {
            secondary_pressed: true,
            ..at(200.0, 200.0)
        };
        let events = input.translate(&open, &session);
        apply_events(&mut session, events);
        assert!(session.picker_state().is_visible);

        let layout = visible_layout(&session).unwrap();
        let second = layout.swatches[1].center();
        input.translate(&at(second.x, second.y), &session);
        assert_eq!(input.hover(), HoverTarget::Picker);

        let click = FrameInput {
            primary_pressed: true,
            primary_released: true,
            ..at(second.x, second.y)
        };
        let events = input.translate(&click, &session);
        assert_eq!(events[0], SurfaceEvent::PaletteEntryClick { index: 1 });
        apply_events(&mut session, events);

        assert_eq!(session.selected_color(), Rgb::new(0, 0xBB, 0));
        assert!(!session.picker_state().is_visible);
        assert_eq!(session.paint_phase(), PaintPhase::Idle);
    }

    #[test]
    fn leaving_picker_onto_cell_keeps_it_open_once() {
        let mut session = session();
        let mut input = InputDispatcher::new();
        session.on_palette_request_open(vec2(300.0, 300.0));

        input.translate(&at(296.0, 296.0), &session);
        assert_eq!(input.hover(), HoverTarget::Picker);

        // step out above the overlay
        let events = input.translate(&at(296.0, 290.0), &session);
        assert!(matches!(events[..], [SurfaceEvent::PointerEnter { from_picker: true, .. }]));
        apply_events(&mut session, events);
        assert!(session.picker_state().is_visible);

        let events = input.translate(&at(285.0, 285.0), &session);
        apply_events(&mut session, events);
        assert!(!session.picker_state().is_visible);
    }

    #[test]
    fn secondary_press_off_grid_opens_at_last_cell_position() {
        let mut session = session();
        let mut input = InputDispatcher::new();

        let events = input.translate(&at(120.0, 60.0), &session);
        apply_events(&mut session, events);
        assert_eq!(session.pointer().last_position, vec2(120.0, 60.0));

        // below the 50-row grid
        let open = FrameInput {
            secondary_pressed: true,
            ..at(120.0, 520.0)
        };
        let events = input.translate(&open, &session);
        assert_eq!(
            events,
            vec![SurfaceEvent::PaletteRequestOpen {
                position: vec2(120.0, 60.0)
            }]
        );
        apply_events(&mut session, events);
        assert_eq!(session.picker_state().anchor, vec2(115.0, 55.0));
    }

    #[test]
    fn escape_closes_picker() {
        let mut session = session();
        let mut input = InputDispatcher::new();
        session.on_palette_request_open(vec2(300.0, 300.0));

        let frame = FrameInput {
            escape_pressed: true,
            ..at(296.0, 296.0)
        };
        let events = input.translate(&frame, &session);
        apply_events(&mut session, events);
        assert!(!session.picker_state().is_visible);
    }
}
