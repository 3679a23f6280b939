//! Cosmetic colour assignment for categories.

use uuid::Uuid;

pub const DEFAULT_COLOR: &str = "#808080";

/// Hands out display colours for new categories.
pub trait ColorSource {
    /// Returns the next colour as a `#rrggbb` string.
    fn next_color(&self) -> String;
}

/// Non-deterministic colours derived from random v4 UUID bytes.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomColors;

impl ColorSource for RandomColors {
    fn next_color(&self) -> String {
        let bytes = Uuid::new_v4().into_bytes();
        format!("#{:02x}{:02x}{:02x}", bytes[0], bytes[1], bytes[2])
    }
}

/// Deterministic colours cycling through a fixed palette.
#[derive(Debug)]
pub struct PaletteColors {
    palette: Vec<String>,
    cursor: std::cell::Cell<usize>,
}

impl PaletteColors {
    pub fn new<I, S>(palette: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            palette: palette.into_iter().map(Into::into).collect(),
            cursor: std::cell::Cell::new(0),
        }
    }
}

impl ColorSource for PaletteColors {
    fn next_color(&self) -> String {
        if self.palette.is_empty() {
            return DEFAULT_COLOR.to_string();
        }
        let idx = self.cursor.get();
        self.cursor.set((idx + 1) % self.palette.len());
        self.palette[idx].clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_cycles() {
        let colors = PaletteColors::new(["#111111", "#222222"]);
        assert_eq!(colors.next_color(), "#111111");
        assert_eq!(colors.next_color(), "#222222");
        assert_eq!(colors.next_color(), "#111111");
    }

    #[test]
    fn empty_palette_falls_back_to_default() {
        let colors = PaletteColors::new(Vec::<String>::new());
        assert_eq!(colors.next_color(), DEFAULT_COLOR);
    }

    #[test]
    fn random_colors_are_hex_triplets() {
        let color = RandomColors.next_color();
        assert_eq!(color.len(), 7);
        assert!(color.starts_with('#'));
        assert!(color[1..].chars().all(|c| c.is_ascii_hexdigit()));
    }
}
