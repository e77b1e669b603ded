pub mod dispatcher;
pub mod tools;

pub use dispatcher::{apply_events, FrameInput, HoverTarget, InputDispatcher};
pub use tools::bresenham;
