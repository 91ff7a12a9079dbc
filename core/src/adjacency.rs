//! Physical key adjacency: which letters sit next to each other on a layout,
//! and where each key's center is for touch-distance weighting.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// A point in layout coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Per-letter physical neighbor lists plus optional key centers.
///
/// A letter without an entry has no neighbors and never matches a
/// different letter through proximity.
#[derive(Debug, Clone, Default)]
pub struct KeyAdjacency {
    neighbors: AHashMap<char, Vec<char>>,
    centers: AHashMap<char, Point>,
}

impl KeyAdjacency {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from explicit `(letter, neighbors)` lists, without geometry.
    pub fn from_lists<I, N>(lists: I) -> Self
    where
        I: IntoIterator<Item = (char, N)>,
        N: IntoIterator<Item = char>,
    {
        let mut adj = Self::new();
        for (letter, neighbors) in lists {
            for n in neighbors {
                adj.add_neighbor(letter, n);
            }
        }
        adj
    }

    /// Record `neighbor` as adjacent to `letter` (one direction only).
    pub fn add_neighbor(&mut self, letter: char, neighbor: char) {
        if letter == neighbor {
            return;
        }
        let list = self.neighbors.entry(letter).or_default();
        if !list.contains(&neighbor) {
            list.push(neighbor);
        }
    }

    pub fn set_center(&mut self, letter: char, center: Point) {
        self.centers.insert(letter, center);
    }

    pub fn neighbors(&self, letter: char) -> &[char] {
        self.neighbors
            .get(&letter)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn is_neighbor(&self, letter: char, other: char) -> bool {
        self.neighbors(letter).contains(&other)
    }

    pub fn center(&self, letter: char) -> Option<Point> {
        self.centers.get(&letter).copied()
    }

    pub fn has_geometry(&self) -> bool {
        !self.centers.is_empty()
    }

    /// Every letter mentioned, as a key or as a neighbor.
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.neighbors
            .iter()
            .flat_map(|(k, v)| std::iter::once(*k).chain(v.iter().copied()))
            .chain(self.centers.keys().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_are_directional_and_deduplicated() {
        let adj = KeyAdjacency::from_lists([('س', vec!['چ', 'ش', 'چ']), ('ش', vec!['ش'])]);
        assert_eq!(adj.neighbors('س'), &['چ', 'ش']);
        assert!(adj.is_neighbor('س', 'چ'));
        assert!(!adj.is_neighbor('چ', 'س'));
        assert!(adj.neighbors('ش').is_empty());
        assert!(adj.neighbors('ب').is_empty());
    }

    #[test]
    fn centers_and_distance() {
        let mut adj = KeyAdjacency::new();
        assert!(!adj.has_geometry());
        adj.set_center('ا', Point::new(3.0, 4.0));
        assert_eq!(adj.center('ا'), Some(Point::new(3.0, 4.0)));
        assert_eq!(adj.center('ب'), None);
        assert_eq!(Point::default().distance(&Point::new(3.0, 4.0)), 5.0);
    }
}
