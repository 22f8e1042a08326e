use crate::graph::{Graph, Node};
use crate::registers::Coloring;

/// Outcome of checking a coloring against the graph it was built from.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Report {
    /// `(node, neighbor)` where the neighbor was colored before the node and
    /// holds the same color. The allocator must never produce these.
    pub violations: Vec<(Node, Node)>,
    /// `(node, neighbor)` where the neighbor was colored after the node and
    /// ended up with the same color. Only one-sided declarations allow this.
    pub shared: Vec<(Node, Node)>,
    /// Declared nodes without a color.
    pub uncolored: Vec<Node>,
}

impl Report {
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty() && self.uncolored.is_empty()
    }
}

/// Checks every declared edge of `graph` against `coloring`, using the
/// coloring's assignment order to tell which endpoint was colored first.
pub fn verify(graph: &Graph, coloring: &Coloring) -> Report {
    let mut report = Report::default();

    for (node, neighbors) in graph.iter() {
        let (Some(color), Some(position)) = (coloring.get(node), coloring.position(node)) else {
            report.uncolored.push(node);
            continue;
        };

        for &neighbor in neighbors {
            if neighbor == node || coloring.get(neighbor) != Some(color) {
                continue;
            }
            match coloring.position(neighbor) {
                Some(earlier) if earlier < position => report.violations.push((node, neighbor)),
                _ => report.shared.push((node, neighbor)),
            }
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::DegreeOrder;
    use crate::registers::{Color, Greedy, RegisterAllocator};

    fn graph(entries: Vec<(Node, Vec<Node>)>) -> Graph {
        let mut graph: Graph = entries.into_iter().collect();
        DegreeOrder::apply(&mut graph);
        graph
    }

    #[test]
    fn test_greedy_output_is_valid() {
        let graph = graph(vec![
            (1, vec![2, 3, 4]),
            (2, vec![1, 3]),
            (3, vec![1, 2, 4]),
            (4, vec![1, 3]),
            (5, vec![]),
        ]);
        let coloring = Greedy.allocate(&graph).unwrap();
        let report = verify(&graph, &coloring);
        assert!(report.is_valid());
        assert!(report.shared.is_empty());
    }

    #[test]
    fn test_reports_one_sided_conflict() {
        let graph = graph(vec![(1, vec![]), (2, vec![1])]);
        let coloring = Greedy.allocate(&graph).unwrap();
        let report = verify(&graph, &coloring);
        assert!(report.is_valid());
        assert_eq!(report.shared, vec![(2, 1)]);
    }

    #[test]
    fn test_detects_violation() {
        let graph = graph(vec![(1, vec![2]), (2, vec![1])]);
        let a = Color::new(0).unwrap();
        let mut coloring = Coloring::new();
        coloring.assign(1, a);
        coloring.assign(2, a);

        let report = verify(&graph, &coloring);
        assert!(!report.is_valid());
        assert_eq!(report.violations, vec![(2, 1)]);
        assert_eq!(report.shared, vec![(1, 2)]);
    }

    #[test]
    fn test_detects_uncolored() {
        let graph = graph(vec![(1, vec![]), (2, vec![])]);
        let mut coloring = Coloring::new();
        coloring.assign(1, Color::new(0).unwrap());

        let report = verify(&graph, &coloring);
        assert_eq!(report.uncolored, vec![2]);
        assert!(!report.is_valid());
    }
}
