//! Named color registry

use ahash::AHashMap;

use crate::color::Color;
use crate::error::ColorError;
use crate::palette::PALETTE;

/// Registry of the predefined named colors.
///
/// Built once from [`PALETTE`] and read-only afterwards; construct it
/// during startup and share it by reference between consumers.
/// Concurrent readers need no synchronization since the registry is
/// never mutated after construction.
#[derive(Debug)]
pub struct ColorRegistry {
    names: Vec<&'static str>,
    colors: Vec<Color>,
    by_name: AHashMap<&'static str, u32>,
}

impl ColorRegistry {
    /// Create a registry holding all predefined colors
    pub fn new() -> Self {
        let mut registry = ColorRegistry {
            names: Vec::with_capacity(PALETTE.len()),
            colors: Vec::with_capacity(PALETTE.len()),
            by_name: AHashMap::with_capacity(PALETTE.len()),
        };
        for &(name, color) in PALETTE {
            registry.insert(name, color);
        }
        registry
    }

    fn insert(&mut self, name: &'static str, color: Color) {
        let index = self.colors.len() as u32;
        self.names.push(name);
        self.colors.push(color);
        self.by_name.insert(name, index);
    }

    /// Look up a color by its palette name.
    ///
    /// Lookup is case-insensitive, and `_` and spaces fold to `-`, so
    /// `"Light-Blue"` and `"light_blue"` both find `"light-blue"`.
    pub fn get(&self, name: &str) -> Result<Color, ColorError> {
        let normalized = normalize(name);
        self.by_name
            .get(normalized.as_str())
            .map(|&index| self.colors[index as usize])
            .ok_or_else(|| ColorError::NotFound(name.to_string()))
    }

    /// All palette names, in palette order
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.names.iter().copied()
    }

    /// All `(name, color)` pairs, in palette order
    pub fn iter(&self) -> impl Iterator<Item = (&str, Color)> + '_ {
        self.names
            .iter()
            .zip(&self.colors)
            .map(|(&name, &color)| (name, color))
    }

    /// Number of registered colors
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Resolve a color string to a color.
    ///
    /// Tries, in order: a palette name, an HTML code (`#rrggbb` or
    /// `#rrggbbaa`), a hex code (`0xrrggbb` or `0xrrggbbaa`).
    pub fn resolve(&self, value: &str) -> Result<Color, ColorError> {
        if let Ok(color) = self.get(value) {
            return Ok(color);
        }
        Color::from_html(value)
            .or_else(|_| Color::from_hex(value))
            .map_err(|_| ColorError::InvalidValue(format!("invalid color string: '{value}'")))
    }
}

impl Default for ColorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn normalize(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '_' | ' ' => '-',
            c => c.to_ascii_lowercase(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get() {
        let registry = ColorRegistry::new();

        let red = registry.get("red").unwrap();
        assert_eq!(red.rgb(), (255, 0, 0));

        // Test case insensitivity
        let red2 = registry.get("RED").unwrap();
        assert_eq!(red, red2);
    }

    #[test]
    fn test_get_normalization() {
        let registry = ColorRegistry::new();

        let expected = registry.get("light-blue").unwrap();
        assert_eq!(registry.get("Light-Blue").unwrap(), expected);
        assert_eq!(registry.get("light_blue").unwrap(), expected);
        assert_eq!(registry.get("LIGHT BLUE").unwrap(), expected);
    }

    #[test]
    fn test_get_not_found() {
        let registry = ColorRegistry::new();

        let err = registry.get("vermillion").unwrap_err();
        assert_eq!(err, ColorError::NotFound("vermillion".to_string()));
    }

    #[test]
    fn test_insertion_order() {
        let registry = ColorRegistry::new();

        assert_eq!(registry.len(), PALETTE.len());
        assert!(!registry.is_empty());
        assert_eq!(registry.names().next(), Some("alice-blue"));
        assert_eq!(registry.names().last(), Some("yellow4"));
    }

    #[test]
    fn test_resolve() {
        let registry = ColorRegistry::new();

        assert_eq!(registry.resolve("red").unwrap(), Color::RED);
        assert_eq!(
            registry.resolve("#3C54FF").unwrap(),
            Color::from_rgb(0x3C, 0x54, 0xFF)
        );
        assert_eq!(
            registry.resolve("0x404040").unwrap(),
            Color::from_rgb(0x40, 0x40, 0x40)
        );

        assert!(matches!(
            registry.resolve("no-such-color"),
            Err(ColorError::InvalidValue(_))
        ));
    }
}
