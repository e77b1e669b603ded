pub mod canvas;
pub mod cursor;
pub mod hud;
pub mod picker;

pub use canvas::CanvasRenderer;
pub use cursor::draw_cursor;
pub use hud::Hud;
pub use picker::{draw_picker, visible_layout, PickerLayout};
