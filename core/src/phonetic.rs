//! Phonetic confusion groups: letters that sound alike regardless of where
//! their keys are.
use std::collections::HashMap;

/// Symmetric letter-to-letters map built from textual group rules.
#[derive(Debug, Clone, Default)]
pub struct PhoneticMap {
    map: HashMap<char, Vec<char>>,
}

impl PhoneticMap {
    /// Create a new empty PhoneticMap.
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    /// Build a `PhoneticMap` from group rule strings.
    ///
    /// Each rule lists letters that are mutually confusable, joined by `=`,
    /// e.g. `"س=ص=ث"`. Whitespace around letters is ignored. A rule with
    /// fewer than two letters adds nothing.
    pub fn from_rules(rules: &[String]) -> Self {
        let mut pm = Self::new();
        for rule in rules.iter() {
            let group: Vec<char> = rule
                .split('=')
                .filter_map(|part| {
                    let mut chars = part.trim().chars();
                    match (chars.next(), chars.next()) {
                        (Some(c), None) => Some(c),
                        _ => None,
                    }
                })
                .collect();
            pm.add_group(&group);
        }
        pm
    }

    /// Make every letter of `group` a neighbor of every other.
    pub fn add_group(&mut self, group: &[char]) {
        for &a in group {
            for &b in group {
                self.add_pair(a, b);
            }
        }
    }

    /// Add a single directed pair.
    pub fn add_pair(&mut self, from: char, to: char) {
        if from == to {
            return;
        }
        let list = self.map.entry(from).or_default();
        if !list.contains(&to) {
            list.push(to);
        }
    }

    /// Letters that sound like `letter`, excluding itself.
    pub fn neighbors(&self, letter: char) -> &[char] {
        self.map.get(&letter).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_neighbor(&self, letter: char, other: char) -> bool {
        self.neighbors(letter).contains(&other)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
