use rand::Rng;

use super::color::Rgb;

/// Session palette: generated once, immutable afterwards.
/// Duplicate entries are allowed.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    colors: Vec<Rgb>,
}

impl Palette {
    /// Draw `count` colors, every channel an independent uniform byte
    pub fn generate<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Self {
        let colors = (0..count)
            .map(|_| Rgb::new(rng.gen(), rng.gen(), rng.gen()))
            .collect();
        Self { colors }
    }

    pub fn from_colors(colors: Vec<Rgb>) -> Self {
        Self { colors }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Rgb> {
        self.colors.get(index).copied()
    }

    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    /// `#RRGGBB` strings in palette order
    pub fn hex_strings(&self) -> Vec<String> {
        self.colors.iter().map(Rgb::to_string).collect()
    }
}
