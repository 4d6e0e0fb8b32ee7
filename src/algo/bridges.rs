use crate::algo::traversal::LowLinkForest;
use crate::interface::StaticGraph;

/// Returns the bridges of the graph as pairs of identities of the DFS parent and child.
///
/// The graph is treated as undirected by following the out-edges as they are stored,
/// so an undirected edge needs to be stored in both directions.
/// Bridges are returned in the order in which the depth-first search finishes their child.
///
/// Since every edge back to the DFS parent is ignored, two parallel undirected edges are not recognised as a cycle.
pub fn find_bridges<Graph: StaticGraph>(graph: &Graph) -> Vec<(usize, usize)> {
    let forest = LowLinkForest::new(graph);
    let bridges: Vec<_> = forest
        .tree_edges()
        .iter()
        .copied()
        .filter(|&(parent, child)| forest.low_link(child) > forest.discovery_order(parent))
        .collect();
    debug!("Found {} bridges", bridges.len());
    bridges
}
