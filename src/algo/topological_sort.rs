use crate::algo::traversal::PostOrderForwardDfs;
use crate::interface::StaticGraph;

/// Returns the identities of all vertices in topological order.
///
/// The order is the reverse postorder of a depth-first search that starts from the undiscovered vertices
/// in enumeration order and follows out-edges in insertion order.
/// The graph is expected to be acyclic, which is not checked.
/// On a cyclic graph, every vertex is still returned exactly once, but some edges point backwards.
pub fn topological_order<Graph: StaticGraph>(graph: &Graph) -> Vec<usize> {
    let mut order = vec![0; graph.vertex_count()];
    let mut position = order.len();
    for vertex in PostOrderForwardDfs::new(graph) {
        position -= 1;
        order[position] = vertex;
    }
    debug_assert_eq!(position, 0);
    order
}
