use crate::algo::traversal::LowLinkForest;
use crate::interface::StaticGraph;
use bitvector::BitVector;

/// Returns the identities of the articulation points of the graph, in enumeration order.
///
/// As for [find_bridges](crate::algo::bridges::find_bridges), the graph is treated as undirected
/// by following the out-edges as they are stored.
/// A vertex that is not the root of its DFS tree is an articulation point if one of its DFS children
/// cannot reach above it without passing through it.
/// A root is an articulation point if it has more than one DFS child.
pub fn find_articulation_points<Graph: StaticGraph>(graph: &Graph) -> Vec<usize> {
    let forest = LowLinkForest::new(graph);
    let mut articulation_points = BitVector::new(graph.vertex_count());
    let mut root_children = vec![0usize; graph.vertex_count()];

    for &(parent, child) in forest.tree_edges() {
        if forest.dfs_parent(parent).is_none() {
            root_children[parent] += 1;
        } else if forest.low_link(child) >= forest.discovery_order(parent) {
            articulation_points.insert(parent);
        }
    }

    let result: Vec<_> = graph
        .enumeration_order()
        .iter()
        .copied()
        .filter(|&vertex| articulation_points.contains(vertex) || root_children[vertex] > 1)
        .collect();
    debug!("Found {} articulation points", result.len());
    result
}
