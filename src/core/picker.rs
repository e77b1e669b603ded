use log::{debug, warn};
use macroquad::prelude::*;

use super::color::Rgb;
use super::palette::Palette;
use crate::error::PickerError;

/// Snapshot handed to the surface for showing and positioning the overlay
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PickerState {
    pub is_visible: bool,
    /// Top-left corner of the overlay; only meaningful while visible
    pub anchor: Vec2,
    /// The single active palette entry, if any was chosen
    pub selected_index: Option<usize>,
}

impl Default for PickerState {
    fn default() -> Self {
        Self {
            is_visible: false,
            anchor: Vec2::ZERO,
            selected_index: None,
        }
    }
}

/// Visibility, placement and selection of the floating color picker
#[derive(Clone, Debug)]
pub struct PickerController {
    state: PickerState,
    anchor_correction: f32,
}

impl PickerController {
    pub fn new(anchor_correction: f32) -> Self {
        Self {
            state: PickerState::default(),
            anchor_correction,
        }
    }

    pub fn state(&self) -> PickerState {
        self.state
    }

    pub fn is_visible(&self) -> bool {
        self.state.is_visible
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.state.selected_index == Some(index)
    }

    /// Show the overlay just up-left of the triggering pointer position
    pub fn request_open(&mut self, anchor: Vec2) {
        self.state.is_visible = true;
        self.state.anchor = anchor - Vec2::splat(self.anchor_correction);
        debug!("Picker opened at {:?}", self.state.anchor);
    }

    /// The pointer moved onto a grid cell. Closes the overlay unless the
    /// pointer came from the overlay itself.
    pub fn notify_pointer_left(&mut self, target_is_picker: bool) {
        if !target_is_picker && self.state.is_visible {
            self.close();
        }
    }

    pub fn close(&mut self) {
        if self.state.is_visible {
            debug!("Picker closed");
        }
        self.state.is_visible = false;
    }

    /// Make `index` the sole active entry, close the overlay and return the
    /// newly selected color. Out-of-range indices leave everything untouched.
    pub fn select_color(&mut self, index: usize, palette: &Palette) -> Result<Rgb, PickerError> {
        let color = palette.get(index).ok_or_else(|| {
            let err = PickerError::IndexOutOfRange {
                index,
                len: palette.len(),
            };
            warn!("Rejected palette selection: {}", err);
            err
        })?;

        self.state.selected_index = Some(index);
        self.state.is_visible = false;
        debug!("Selected palette entry {} ({})", index, color);
        Ok(color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn palette() -> Palette {
        Palette::from_colors(vec![
            Rgb::new(0xAA, 0, 0),
            Rgb::new(0, 0xBB, 0),
            Rgb::new(0, 0, 0xCC),
        ])
    }

    #[test]
    fn open_applies_anchor_correction() {
        let mut picker = PickerController::new(5.0);
        picker.request_open(vec2(100.0, 40.0));

        let state = picker.state();
        assert!(state.is_visible);
        assert_eq!(state.anchor, vec2(95.0, 35.0));
    }

    #[test]
    fn leaving_towards_picker_keeps_it_open() {
        let mut picker = PickerController::new(5.0);
        picker.request_open(vec2(10.0, 10.0));

        picker.notify_pointer_left(true);
        assert!(picker.is_visible());

        picker.notify_pointer_left(false);
        assert!(!picker.is_visible());
    }

    #[test]
    fn selection_is_exclusive_and_closes() {
        let mut picker = PickerController::new(5.0);
        let palette = palette();

        picker.request_open(vec2(10.0, 10.0));
        assert_eq!(picker.select_color(1, &palette), Ok(Rgb::new(0, 0xBB, 0)));
        assert!(!picker.is_visible());
        assert!(picker.is_active(1));

        assert_eq!(picker.select_color(2, &palette), Ok(Rgb::new(0, 0, 0xCC)));
        assert!(!picker.is_active(1));
        assert!(picker.is_active(2));
    }

    #[test]
    fn out_of_range_selection_changes_nothing() {
        let mut picker = PickerController::new(5.0);
        let palette = palette();
        picker.request_open(vec2(10.0, 10.0));

        assert_eq!(
            picker.select_color(3, &palette),
            Err(PickerError::IndexOutOfRange { index: 3, len: 3 })
        );
        assert!(picker.is_visible());
        assert_eq!(picker.state().selected_index, None);
    }
}
