use std::fmt;
use std::str::FromStr;

use crate::error::ColorParseError;

/// 24-bit color, rendered canonically as `#RRGGBB`
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Convert to macroquad Color (f32 0.0-1.0)
    pub fn to_mq_color(self) -> macroquad::color::Color {
        macroquad::color::Color::from_rgba(self.r, self.g, self.b, 255)
    }

    /// Device-style `rgb(r, g, b)` form, as a browser-like surface reports it
    pub fn to_device_string(self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ColorParseError;

    /// Accepts `#RRGGBB`, `#RGB` (any case) and `rgb(r, g, b)` / `rgba(r, g, b, a)`.
    /// Functional channels are rounded and clamped to 0..=255, alpha is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ColorParseError::Empty);
        }

        if let Some(hex) = s.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(|| ColorParseError::UnknownFormat(s.to_string()));
        }

        let lower = s.to_ascii_lowercase();
        let args = lower
            .strip_prefix("rgba(")
            .or_else(|| lower.strip_prefix("rgb("))
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(|| ColorParseError::UnknownFormat(s.to_string()))?;

        let parts: Vec<&str> = args.split(',').map(str::trim).collect();
        if parts.len() != 3 && parts.len() != 4 {
            return Err(ColorParseError::UnknownFormat(s.to_string()));
        }

        Ok(Rgb::new(
            parse_channel(parts[0])?,
            parse_channel(parts[1])?,
            parse_channel(parts[2])?,
        ))
    }
}

fn parse_hex(hex: &str) -> Option<Rgb> {
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    match hex.len() {
        6 => Some(Rgb::new(
            u8::from_str_radix(&hex[0..2], 16).ok()?,
            u8::from_str_radix(&hex[2..4], 16).ok()?,
            u8::from_str_radix(&hex[4..6], 16).ok()?,
        )),
        3 => {
            // #abc is shorthand for #aabbcc
            let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|n| n * 17);
            Some(Rgb::new(nibble(0)?, nibble(1)?, nibble(2)?))
        }
        _ => None,
    }
}

fn parse_channel(raw: &str) -> Result<u8, ColorParseError> {
    let value: f64 = raw
        .parse()
        .map_err(|_| ColorParseError::InvalidChannel(raw.to_string()))?;
    if !value.is_finite() {
        return Err(ColorParseError::InvalidChannel(raw.to_string()));
    }
    Ok(value.round().clamp(0.0, 255.0) as u8)
}

/// Canonical `#RRGGBB` form of any supported color representation
pub fn normalize(raw: &str) -> Option<String> {
    raw.parse::<Rgb>().ok().map(|c| c.to_string())
}
