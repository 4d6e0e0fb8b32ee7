use crate::interface::StaticGraph;

/// Computes the distances from `source` to all vertices, indexed by identity.
///
/// The relaxation phase visits each slot of the enumeration order once and relaxes the out-edges of the vertex in it.
/// Afterwards, one more sweep in the same order sets the target of every edge that still relaxes to negative infinity.
///
/// The detection sweep is not repeated until a fixpoint is reached.
/// Vertices that are reachable from a negative cycle, or even lie on one, keep a finite distance
/// unless an edge into them relaxes during that single sweep.
/// A vertex set to negative infinity earlier in the sweep does propagate to the edges visited after it.
pub fn shortest_distances<Graph: StaticGraph>(graph: &Graph, source: usize) -> Vec<f64> {
    let mut distances = vec![f64::INFINITY; graph.vertex_count()];
    distances[source] = 0.0;

    for &vertex in graph.enumeration_order() {
        for edge in graph.out_edges(vertex) {
            let new_distance = distances[vertex] + edge.cost();
            if new_distance < distances[edge.target()] {
                distances[edge.target()] = new_distance;
            }
        }
    }

    let mut negative_cycle_markings = 0;
    for &vertex in graph.enumeration_order() {
        for edge in graph.out_edges(vertex) {
            if distances[vertex] + edge.cost() < distances[edge.target()] {
                distances[edge.target()] = f64::NEG_INFINITY;
                negative_cycle_markings += 1;
            }
        }
    }

    if negative_cycle_markings > 0 {
        debug!(
            "Bellman-Ford from {} marked {} edge targets as affected by a negative cycle",
            source, negative_cycle_markings
        );
    }
    distances
}
