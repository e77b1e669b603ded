use thiserror::Error;

pub type Result<T> = std::result::Result<T, PixelGridError>;

#[derive(Debug, Error)]
pub enum PixelGridError {
    #[error("geometry error: {0}")]
    Geometry(#[from] GeometryError),

    #[error("picker error: {0}")]
    Picker(#[from] PickerError),

    #[error("color error: {0}")]
    Color(#[from] ColorParseError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("column count must be greater than zero")]
    ZeroColumns,

    #[error("grid of {rows} rows x {columns} columns is too large")]
    TooLarge { rows: f64, columns: u32 },

    #[error("grid of {cells} cells exceeds the limit of {max}")]
    TooManyCells { cells: usize, max: usize },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PickerError {
    #[error("palette index {index} out of range (palette has {len} entries)")]
    IndexOutOfRange { index: usize, len: usize },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColorParseError {
    #[error("empty color string")]
    Empty,

    #[error("unrecognized color format: {0:?}")]
    UnknownFormat(String),

    #[error("invalid color channel {0:?}")]
    InvalidChannel(String),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}: {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}
