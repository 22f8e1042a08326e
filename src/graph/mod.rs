pub mod order;

use std::fmt;

use indexmap::IndexMap;
use indexmap::map::Entry;

pub use order::DegreeOrder;

/// A variable in the interference graph, identified by its input id.
pub type Node = u32;

/// Largest graph the input format promises. Bigger graphs are still colored.
pub const MAX_NODES: usize = 50;

/// Interference graph as declared by the input: one entry per line, each a
/// node and the nodes it interferes with.
///
/// Entries keep their declaration order until [`DegreeOrder`] rearranges
/// them. Edges are not made symmetric; a neighbor that never appears as a
/// node of its own is kept as-is.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    adjacency: IndexMap<Node, Vec<Node>>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `node` with its neighbor list. Returns `false` and leaves the
    /// graph untouched if `node` is already present.
    pub fn insert(&mut self, node: Node, neighbors: Vec<Node>) -> bool {
        match self.adjacency.entry(node) {
            Entry::Occupied(_) => false,
            Entry::Vacant(entry) => {
                entry.insert(neighbors);
                true
            }
        }
    }

    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    pub fn neighbors(&self, node: Node) -> Option<&[Node]> {
        self.adjacency.get(&node).map(Vec::as_slice)
    }

    /// Entries in their current order.
    pub fn iter(&self) -> impl Iterator<Item = (Node, &[Node])> + '_ {
        self.adjacency
            .iter()
            .map(|(node, neighbors)| (*node, neighbors.as_slice()))
    }

    /// Node ids in their current order.
    pub fn nodes(&self) -> Vec<Node> {
        self.adjacency.keys().copied().collect()
    }

    pub(crate) fn adjacency_mut(&mut self) -> &mut IndexMap<Node, Vec<Node>> {
        &mut self.adjacency
    }
}

impl FromIterator<(Node, Vec<Node>)> for Graph {
    fn from_iter<I: IntoIterator<Item = (Node, Vec<Node>)>>(iter: I) -> Self {
        let mut graph = Graph::new();
        for (node, neighbors) in iter {
            graph.insert(node, neighbors);
        }
        graph
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (node, neighbors) in self.iter() {
            write!(f, "{}:", node)?;
            for neighbor in neighbors {
                write!(f, " {}", neighbor)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
