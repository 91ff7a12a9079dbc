//! Keyboard layout description.
//!
//! A layout lists letter keys with their rectangles and, optionally, the
//! letters considered adjacent to each key. Layouts are loaded from TOML:
//!
//! ```toml
//! name = "tiny"
//!
//! [[keys]]
//! letter = "ا"
//! x = 0.0
//! y = 0.0
//! width = 30.0
//! height = 40.0
//! neighbors = ["ب"]
//! ```
//!
//! Keys without an explicit `neighbors` list get neighbors derived from
//! geometry.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::adjacency::{KeyAdjacency, Point};
use crate::error::Result;

/// A single letter key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeySpec {
    pub letter: char,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub neighbors: Vec<char>,
}

impl KeySpec {
    pub fn new(letter: char, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            letter,
            x,
            y,
            width,
            height,
            neighbors: Vec::new(),
        }
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Whether the gap between the two rectangles is under `gap` on both axes.
    pub fn is_near(&self, other: &KeySpec, gap: f64) -> bool {
        let horizontal = self.x - gap < other.x + other.width && other.x < self.x + self.width + gap;
        let vertical = self.y - gap < other.y + other.height && other.y < self.y + self.height + gap;
        horizontal && vertical
    }
}

/// A named set of letter keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeyboardLayout {
    pub name: String,
    pub keys: Vec<KeySpec>,
}

impl KeyboardLayout {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            keys: Vec::new(),
        }
    }

    pub fn add_key(&mut self, key: KeySpec) {
        self.keys.push(key);
    }

    pub fn key(&self, letter: char) -> Option<&KeySpec> {
        self.keys.iter().find(|k| k.letter == letter)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn load_toml<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Neighbor lists and key centers for this layout.
    pub fn adjacency(&self, gap: f64) -> KeyAdjacency {
        let mut adj = KeyAdjacency::new();
        for key in &self.keys {
            adj.set_center(key.letter, key.center());
            if !key.neighbors.is_empty() {
                for &n in &key.neighbors {
                    adj.add_neighbor(key.letter, n);
                }
                continue;
            }
            for other in &self.keys {
                if other.letter != key.letter && key.is_near(other, gap) {
                    adj.add_neighbor(key.letter, other.letter);
                }
            }
        }
        adj
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> KeyboardLayout {
        // two rows of three keys, 6pt column gap, 11pt row gap
        let mut l = KeyboardLayout::new("grid");
        for (i, c) in ['ا', 'ب', 'پ'].into_iter().enumerate() {
            l.add_key(KeySpec::new(c, 80.0 - i as f64 * 37.5, 0.0, 31.5, 42.0));
        }
        for (i, c) in ['د', 'ڈ', 'ذ'].into_iter().enumerate() {
            l.add_key(KeySpec::new(c, 80.0 - i as f64 * 37.5, 53.0, 31.5, 42.0));
        }
        l
    }

    #[test]
    fn geometric_neighbors_include_diagonals_only_one_key_away() {
        let adj = grid().adjacency(12.0);
        let mut n = adj.neighbors('ب').to_vec();
        n.sort();
        let mut expected = vec!['ا', 'پ', 'د', 'ڈ', 'ذ'];
        expected.sort();
        assert_eq!(n, expected);
        assert!(!adj.is_neighbor('ا', 'پ'));
        assert!(!adj.is_neighbor('ا', 'ذ'));
    }

    #[test]
    fn centers_are_recorded() {
        let adj = grid().adjacency(12.0);
        assert_eq!(adj.center('ا'), Some(Point::new(95.75, 21.0)));
    }

    #[test]
    fn explicit_neighbors_win() {
        let content = r#"
name = "tiny"

[[keys]]
letter = "ا"
x = 0.0
y = 0.0
width = 30.0
height = 40.0
neighbors = ["ب"]

[[keys]]
letter = "ب"
x = 200.0
y = 0.0
width = 30.0
height = 40.0
"#;
        let layout = KeyboardLayout::from_toml_str(content).unwrap();
        assert_eq!(layout.name, "tiny");
        let adj = layout.adjacency(12.0);
        assert_eq!(adj.neighbors('ا'), &['ب']);
        assert!(adj.neighbors('ب').is_empty());
        assert_eq!(layout.key('ب').unwrap().center(), Point::new(215.0, 20.0));
    }
}
