pub mod app;
pub mod config;
pub mod core;
pub mod error;
pub mod input;
pub mod rendering;
pub mod state;

pub use config::Config;
pub use error::{PixelGridError, Result};
pub use state::{CellUpdate, Session, SurfaceEvent};
