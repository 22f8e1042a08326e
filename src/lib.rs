pub mod backend;
pub mod cli;
pub mod error;
pub mod frontend;
pub mod graph;
pub mod registers;
pub mod verification;

use log::{debug, info, warn};

pub use error::{Error, Result};

use frontend::{Parser, Tokenizer};
use graph::{DegreeOrder, Graph};
use registers::{Coloring, Greedy, RegisterAllocator};

/// Reads an adjacency list into a graph in declaration order.
pub fn parse(input: &str) -> Result<Graph> {
    let tokens = Tokenizer::tokenize(input)?;
    Parser::parse(&tokens)
}

/// Runs the whole pipeline: parse, order by degree, color greedily.
pub fn color(input: &str) -> Result<Coloring> {
    let mut graph = parse(input)?;
    debug!("parsed graph:\n{}", graph);

    DegreeOrder::apply(&mut graph);
    debug!("ordered graph:\n{}", graph);

    let coloring = Greedy.allocate(&graph)?;

    let report = verification::verify(&graph, &coloring);
    debug_assert!(report.is_valid(), "greedy coloring broke: {:?}", report);
    for (node, neighbor) in &report.shared {
        warn!(
            "node {} lists {} but both got {}: {} does not list {} back",
            node,
            neighbor,
            coloring.get(*node).map_or('?', |c| c.letter()),
            neighbor,
            node
        );
    }

    info!(
        "colored {} nodes with {} colors",
        coloring.len(),
        coloring.color_count()
    );
    Ok(coloring)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(input: &str) -> String {
        backend::render(&color(input).unwrap())
    }

    #[test]
    fn test_pipeline_example() {
        assert_eq!(listing("1,2\n2,1\n3,1"), "1A\n2B\n3B\n");
    }

    #[test]
    fn test_pipeline_single_node() {
        assert_eq!(listing("5"), "5A\n");
    }

    #[test]
    fn test_pipeline_every_node_colored_once() {
        let input = "7,3,1\n3,7\n1,7,3\n12\n4,12";
        let coloring = color(input).unwrap();
        let nodes: Vec<_> = coloring.sorted().into_iter().map(|(n, _)| n).collect();
        assert_eq!(nodes, vec![1, 3, 4, 7, 12]);
    }

    #[test]
    fn test_pipeline_rejects_invalid_character() {
        assert!(matches!(
            color("1,2,x"),
            Err(Error::InvalidCharacter { character: 'x', .. })
        ));
    }
}
