use log::trace;

use crate::error::{Error, Result};
use crate::graph::Graph;

use super::{COLOR_COUNT, Color, Coloring, RegisterAllocator};

/// Greedy first-fit coloring.
///
/// Each node takes the lowest color not held by a neighbor that is already
/// colored. Neighbors colored later, or never declared as nodes, do not
/// constrain it, so a one-sided edge only binds the node that lists it when
/// that node comes second.
pub struct Greedy;

impl RegisterAllocator for Greedy {
    fn allocate(&self, graph: &Graph) -> Result<Coloring> {
        let mut coloring = Coloring::new();

        for (node, neighbors) in graph.iter() {
            let mut used = [false; COLOR_COUNT];
            for &neighbor in neighbors {
                if let Some(color) = coloring.get(neighbor) {
                    used[color.index()] = true;
                }
            }

            let color = Color::all()
                .find(|color| !used[color.index()])
                .ok_or(Error::ColorExhaustion { node })?;

            trace!("node {} -> {} (neighbors {:?})", node, color, neighbors);
            coloring.assign(node, color);
        }

        Ok(coloring)
    }
}
