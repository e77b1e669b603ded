pub mod constants;
pub mod color;
pub mod geometry;
pub mod palette;
pub mod cell;
pub mod paint;
pub mod picker;

pub use constants::*;
pub use color::*;
pub use geometry::*;
pub use palette::*;
pub use cell::*;
pub use paint::*;
pub use picker::*;
