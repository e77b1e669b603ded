//! Session State Module
//!
//! `Session` is the single mutable context of a drawing session. It owns the
//! grid geometry, the cells, the palette, the paint engine and the picker,
//! and exposes the calls a surface makes: pointer and palette events in,
//! cell colors and picker state out. Everything runs synchronously on the
//! caller's thread; a multi-threaded host must serialize access itself.

use log::info;
use macroquad::math::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::Config;
use crate::core::*;
use crate::error::{GeometryError, PickerError, Result};

/// Raw events forwarded by the surface, applied strictly in arrival order
#[derive(Clone, Debug, PartialEq)]
pub enum SurfaceEvent {
    PointerDown { cell: usize, position: Vec2 },
    /// `from_picker` is true when the pointer arrived from the picker overlay
    PointerEnter { cell: usize, from_picker: bool, position: Vec2 },
    PointerUp,
    PaletteRequestOpen { position: Vec2 },
    PaletteEntryClick { index: usize },
    ClosePicker,
}

/// A cell whose displayed color changed
#[derive(Clone, Debug, PartialEq)]
pub struct CellUpdate {
    pub cell: usize,
    pub color: Rgb,
}

pub struct Session {
    config: Config,
    geometry: GridGeometry,
    cells: CellGrid,
    palette: Palette,
    selected_color: Rgb,
    painter: PaintEngine,
    picker: PickerController,
}

impl Session {
    /// Build a session for the given viewport, generating its palette
    pub fn new(config: Config, viewport: Vec2) -> Result<Self> {
        config.validate()?;
        let palette = match config.seed {
            Some(seed) => Palette::generate(config.palette_size, &mut StdRng::seed_from_u64(seed)),
            None => Palette::generate(config.palette_size, &mut rand::thread_rng()),
        };
        Self::with_palette(config, viewport, palette)
    }

    /// Build a session around an existing palette
    pub fn with_palette(config: Config, viewport: Vec2, palette: Palette) -> Result<Self> {
        let geometry = GridGeometry::resolve(viewport.x, viewport.y, config.column_count)?;
        if geometry.total_cells > MAX_GRID_CELLS {
            return Err(GeometryError::TooManyCells {
                cells: geometry.total_cells,
                max: MAX_GRID_CELLS,
            }
            .into());
        }
        let selected_color = palette.get(0).unwrap_or(config.default_color);

        info!(
            "Session started: {}x{} cells of {:.2}px, {} palette colors",
            geometry.column_count,
            geometry.row_count,
            geometry.cell_size,
            palette.len()
        );

        Ok(Self {
            cells: CellGrid::new(geometry.total_cells),
            picker: PickerController::new(config.anchor_correction),
            painter: PaintEngine::new(),
            config,
            geometry,
            palette,
            selected_color,
        })
    }

    fn brush(&self) -> Brush {
        Brush {
            selected: self.selected_color,
            default: self.config.default_color,
        }
    }

    pub fn on_pointer_down(&mut self, cell: usize, position: Vec2) -> Option<Rgb> {
        let brush = self.brush();
        self.painter.pointer_down(&mut self.cells, cell, position, brush)
    }

    pub fn on_pointer_enter(&mut self, cell: usize, from_picker: bool, position: Vec2) -> Option<Rgb> {
        self.picker.notify_pointer_left(from_picker);
        let brush = self.brush();
        self.painter.pointer_enter(&mut self.cells, cell, position, brush)
    }

    pub fn on_pointer_up(&mut self) {
        self.painter.pointer_up();
    }

    pub fn on_palette_request_open(&mut self, position: Vec2) {
        self.picker.request_open(position);
    }

    pub fn on_palette_entry_click(&mut self, index: usize) -> std::result::Result<Rgb, PickerError> {
        let color = self.picker.select_color(index, &self.palette)?;
        self.selected_color = color;
        Ok(color)
    }

    pub fn close_picker(&mut self) {
        self.picker.close();
    }

    /// Apply one surface event
    pub fn dispatch(&mut self, event: SurfaceEvent) -> Result<Option<CellUpdate>> {
        let painted = |cell: usize, color: Option<Rgb>| color.map(|color| CellUpdate { cell, color });

        let update = match event {
            SurfaceEvent::PointerDown { cell, position } => {
                painted(cell, self.on_pointer_down(cell, position))
            }
            SurfaceEvent::PointerEnter {
                cell,
                from_picker,
                position,
            } => painted(cell, self.on_pointer_enter(cell, from_picker, position)),
            SurfaceEvent::PointerUp => {
                self.on_pointer_up();
                None
            }
            SurfaceEvent::PaletteRequestOpen { position } => {
                self.on_palette_request_open(position);
                None
            }
            SurfaceEvent::PaletteEntryClick { index } => {
                self.on_palette_entry_click(index)?;
                None
            }
            SurfaceEvent::ClosePicker => {
                self.close_picker();
                None
            }
        };
        Ok(update)
    }

    /// Color string the surface should display for a cell
    pub fn cell_color(&self, cell: usize) -> Option<String> {
        let cell = self.cells.get(cell)?;
        Some(match &cell.color {
            Some(color) if cell.is_set() => color.clone(),
            _ => self.config.default_color.to_string(),
        })
    }

    /// Record the color representation the surface reports for a cell
    pub fn set_cell_color(&mut self, cell: usize, color: impl Into<String>) -> bool {
        match self.cells.get_mut(cell) {
            Some(target) => {
                target.color = Some(color.into());
                true
            }
            None => false,
        }
    }

    pub fn picker_state(&self) -> PickerState {
        self.picker.state()
    }

    pub fn is_palette_entry_active(&self, index: usize) -> bool {
        self.picker.is_active(index)
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn palette_hex(&self) -> Vec<String> {
        self.palette.hex_strings()
    }

    pub fn selected_color(&self) -> Rgb {
        self.selected_color
    }

    pub fn default_color(&self) -> Rgb {
        self.config.default_color
    }

    pub fn geometry(&self) -> &GridGeometry {
        &self.geometry
    }

    pub fn cells(&self) -> &CellGrid {
        &self.cells
    }

    pub fn paint_phase(&self) -> PaintPhase {
        self.painter.phase()
    }

    pub fn pointer(&self) -> PointerState {
        self.painter.pointer()
    }
}
