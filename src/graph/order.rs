use super::Graph;

/// Most-constrained-first ordering.
///
/// Neighbor lists are sorted ascending, then entries are sorted by neighbor
/// count descending with ties broken by ascending node id. Node ids are
/// unique, so the resulting order is total.
pub struct DegreeOrder;

impl DegreeOrder {
    pub fn apply(graph: &mut Graph) {
        let adjacency = graph.adjacency_mut();

        for neighbors in adjacency.values_mut() {
            neighbors.sort();
        }

        adjacency.sort_by(|a, a_neighbors, b, b_neighbors| {
            b_neighbors
                .len()
                .cmp(&a_neighbors.len())
                .then_with(|| a.cmp(b))
        });
    }
}
