//! Solution representation: the set of chosen shops.

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A set of shop vertices kept in insertion order.
///
/// Duplicates are never stored. The energy of a solution is its size.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    shops: Vec<usize>,
}

impl Solution {
    /// Create a new, empty solution.
    pub fn new() -> Self {
        Solution { shops: Vec::new() }
    }

    /// Create a solution from a list of shops, dropping repeated ids.
    pub fn from_shops<I: IntoIterator<Item = usize>>(shops: I) -> Self {
        Solution {
            shops: shops.into_iter().unique().collect(),
        }
    }

    /// Append a shop. Returns `false` and leaves the solution untouched if
    /// it is already present.
    pub fn insert(&mut self, vertex: usize) -> bool {
        if self.contains(vertex) {
            return false;
        }
        self.shops.push(vertex);
        true
    }

    /// Remove the shop at `position`, keeping the order of the others.
    pub fn remove_at(&mut self, position: usize) -> usize {
        self.shops.remove(position)
    }

    /// Check if a vertex is a shop.
    pub fn contains(&self, vertex: usize) -> bool {
        self.shops.contains(&vertex)
    }

    /// The quantity being minimized.
    pub fn energy(&self) -> usize {
        self.shops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shops.is_empty()
    }

    /// The shops in insertion order.
    pub fn shops(&self) -> &[usize] {
        &self.shops
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.shops.iter().copied()
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.energy())?;
        write!(f, "{}", self.shops.iter().join(" "))
    }
}
