pub mod greedy;

use std::fmt;

use indexmap::IndexMap;

use crate::error::Result;
use crate::graph::{Graph, Node};

pub use greedy::Greedy;

/// Number of registers available, named 'A' through 'Z'.
pub const COLOR_COUNT: usize = 26;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Color(u8);

impl Color {
    pub fn new(index: usize) -> Option<Color> {
        (index < COLOR_COUNT).then(|| Color(index as u8))
    }

    pub fn from_letter(letter: char) -> Option<Color> {
        letter
            .is_ascii_uppercase()
            .then(|| Color(letter as u8 - b'A'))
    }

    /// All colors in the order they are tried.
    pub fn all() -> impl Iterator<Item = Color> {
        (0..COLOR_COUNT as u8).map(Color)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn letter(self) -> char {
        (b'A' + self.0) as char
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Node to color assignments, remembered in the order they were made.
///
/// A node is colored at most once; later attempts are ignored.
#[derive(Debug, Clone, Default)]
pub struct Coloring {
    colors: IndexMap<Node, Color>,
}

impl Coloring {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `color` for `node` unless it already has one.
    pub fn assign(&mut self, node: Node, color: Color) -> bool {
        if self.colors.contains_key(&node) {
            return false;
        }
        self.colors.insert(node, color);
        true
    }

    pub fn get(&self, node: Node) -> Option<Color> {
        self.colors.get(&node).copied()
    }

    /// Position of `node` in assignment order.
    pub fn position(&self, node: Node) -> Option<usize> {
        self.colors.get_index_of(&node)
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Assignments in the order they were made.
    pub fn iter(&self) -> impl Iterator<Item = (Node, Color)> + '_ {
        self.colors.iter().map(|(node, color)| (*node, *color))
    }

    /// Assignments by ascending node id.
    pub fn sorted(&self) -> Vec<(Node, Color)> {
        let mut assignments: Vec<_> = self.iter().collect();
        assignments.sort_by_key(|(node, _)| *node);
        assignments
    }

    /// Number of distinct colors in use.
    pub fn color_count(&self) -> usize {
        let mut used = [false; COLOR_COUNT];
        for color in self.colors.values() {
            used[color.index()] = true;
        }
        used.iter().filter(|u| **u).count()
    }
}

pub trait RegisterAllocator {
    /// Colors every node of `graph`, visiting entries in the graph's order.
    fn allocate(&self, graph: &Graph) -> Result<Coloring>;
}
