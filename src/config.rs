//! Session configuration.
//!
//! Defaults come from `core::constants`; each value can be overridden through
//! an environment variable so a session can be reproduced (e.g. a fixed
//! palette seed) without recompiling.

use std::env;

use crate::core::{
    Rgb, COLUMN_COUNT, DEFAULT_CELL_COLOR, MAX_PALETTE_SIZE, PALETTE_SIZE, PICKER_ANCHOR_CORRECTION,
};
use crate::error::ConfigError;

pub const ENV_COLUMNS: &str = "PIXEL_GRID_COLUMNS";
pub const ENV_PALETTE_SIZE: &str = "PIXEL_GRID_PALETTE_SIZE";
pub const ENV_DEFAULT_COLOR: &str = "PIXEL_GRID_DEFAULT_COLOR";
pub const ENV_SEED: &str = "PIXEL_GRID_SEED";

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub column_count: u32,
    pub palette_size: usize,
    pub default_color: Rgb,
    pub anchor_correction: f32,
    /// Fixed palette seed; `None` draws from the thread RNG
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            column_count: COLUMN_COUNT,
            palette_size: PALETTE_SIZE,
            default_color: DEFAULT_CELL_COLOR,
            anchor_correction: PICKER_ANCHOR_CORRECTION,
            seed: None,
        }
    }
}

impl Config {
    /// Defaults overridden by the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each key
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_COLUMNS) {
            let columns: u32 = parse_value(ENV_COLUMNS, &raw)?;
            if columns == 0 {
                return Err(invalid(ENV_COLUMNS, &raw, "must be greater than zero"));
            }
            config.column_count = columns;
        }
        if let Some(raw) = lookup(ENV_PALETTE_SIZE) {
            config.palette_size = parse_value(ENV_PALETTE_SIZE, &raw)?;
        }
        if let Some(raw) = lookup(ENV_DEFAULT_COLOR) {
            config.default_color = parse_value(ENV_DEFAULT_COLOR, &raw)?;
        }
        if let Some(raw) = lookup(ENV_SEED) {
            config.seed = Some(parse_value(ENV_SEED, &raw)?);
        }

        config.validate()?;
        Ok(config)
    }

    /// Reject values that would make a session unreasonably large
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.palette_size > MAX_PALETTE_SIZE {
            return Err(invalid(
                ENV_PALETTE_SIZE,
                &self.palette_size.to_string(),
                &format!("at most {} colors", MAX_PALETTE_SIZE),
            ));
        }
        Ok(())
    }
}

fn parse_value<T>(key: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse()
        .map_err(|err: T::Err| invalid(key, raw, &err.to_string()))
}

fn invalid(key: &'static str, raw: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        key,
        value: raw.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&'static str, &str)]) -> impl Fn(&'static str) -> Option<String> {
        let map: HashMap<&'static str, String> =
            pairs.iter().map(|(k, v)| (*k, v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_overrides() {
        let config = Config::from_lookup(|_| None).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.column_count, 100);
        assert_eq!(config.palette_size, 20);
        assert_eq!(config.default_color.to_string(), "#FFFFFF");
    }

    #[test]
    fn applies_overrides() {
        let config = Config::from_lookup(lookup(&[
            (ENV_COLUMNS, "64"),
            (ENV_PALETTE_SIZE, " 8 "),
            (ENV_DEFAULT_COLOR, "rgb(0, 0, 0)"),
            (ENV_SEED, "1234"),
        ]))
        .unwrap();

        assert_eq!(config.column_count, 64);
        assert_eq!(config.palette_size, 8);
        assert_eq!(config.default_color, Rgb::new(0, 0, 0));
        assert_eq!(config.seed, Some(1234));
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            Config::from_lookup(lookup(&[(ENV_COLUMNS, "0")])),
            Err(ConfigError::InvalidValue { key: ENV_COLUMNS, .. })
        ));
        assert!(Config::from_lookup(lookup(&[(ENV_PALETTE_SIZE, "many")])).is_err());
        assert!(Config::from_lookup(lookup(&[(ENV_DEFAULT_COLOR, "white")])).is_err());
    }

    #[test]
    fn caps_palette_size() {
        assert!(Config::from_lookup(lookup(&[(ENV_PALETTE_SIZE, "256")])).is_ok());
        assert!(matches!(
            Config::from_lookup(lookup(&[(ENV_PALETTE_SIZE, "18446744073709551615")])),
            Err(ConfigError::InvalidValue { key: ENV_PALETTE_SIZE, .. })
        ));

        let config = Config {
            palette_size: MAX_PALETTE_SIZE + 1,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }
}
