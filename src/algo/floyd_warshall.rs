use crate::error::{check_vertex_reference, Result};
use crate::interface::StaticGraph;

/// The outcome of reconstructing a single path from a [FloydWarshall] result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReconstructedPath {
    /// The target is unreachable from the source.
    NoPath,
    /// The target has a finite or negatively infinite distance, but the route to it was cut while marking negative cycles.
    Severed,
    /// The identities of the vertices on a shortest path, including source and target.
    Path(Vec<usize>),
}

/// The distance and successor matrices computed by the Floyd-Warshall algorithm.
///
/// Both matrices are indexed by vertex identity.
/// Pairs whose shortest path can be made arbitrarily short by a negative cycle have distance negative infinity.
#[derive(Debug, Clone)]
pub struct FloydWarshall {
    distances: Vec<Vec<f64>>,
    next: Vec<Vec<Option<usize>>>,
}

impl FloydWarshall {
    /// Runs the Floyd-Warshall algorithm on the given graph.
    ///
    /// The initial distance between two distinct vertices is the cost of the edge between them that was visited last,
    /// in enumeration order and then insertion order, not the cheapest one.
    /// The same applies to self-loops, which replace the zero on the diagonal.
    pub fn new<Graph: StaticGraph>(graph: &Graph) -> Self {
        let n = graph.vertex_count();
        let mut distances = vec![vec![f64::INFINITY; n]; n];
        let mut next = vec![vec![None; n]; n];
        for (vertex, row) in distances.iter_mut().enumerate() {
            row[vertex] = 0.0;
        }

        for &vertex in graph.enumeration_order() {
            for edge in graph.out_edges(vertex) {
                distances[vertex][edge.target()] = edge.cost();
                next[vertex][edge.target()] = Some(edge.target());
            }
        }

        for k in 0..n {
            for i in 0..n {
                for j in 0..n {
                    let through_k = distances[i][k] + distances[k][j];
                    if through_k < distances[i][j] {
                        distances[i][j] = through_k;
                        next[i][j] = next[i][k];
                    }
                }
            }
        }

        let mut negative_cycle_markings = 0usize;
        for k in 0..n {
            for i in 0..n {
                for j in 0..n {
                    if distances[i][k] != f64::INFINITY
                        && distances[k][j] != f64::INFINITY
                        && distances[k][k] < 0.0
                    {
                        distances[i][j] = f64::NEG_INFINITY;
                        next[i][k] = None;
                        negative_cycle_markings += 1;
                    }
                }
            }
        }

        if negative_cycle_markings > 0 {
            debug!(
                "Floyd-Warshall found {} pairs routed through negative cycles",
                negative_cycle_markings
            );
        }
        Self { distances, next }
    }

    /// Returns the distance matrix.
    pub fn distances(&self) -> &[Vec<f64>] {
        &self.distances
    }

    /// Consumes this result and returns the distance matrix.
    pub fn into_distances(self) -> Vec<Vec<f64>> {
        self.distances
    }

    /// Reconstructs a shortest path between the given identities by following the successor matrix.
    ///
    /// A vertex reaches itself by the path consisting of only itself, unless it lies on a negative cycle.
    /// Fails if one of the identities does not belong to a vertex.
    pub fn reconstruct_path(&self, from: usize, to: usize) -> Result<ReconstructedPath> {
        check_vertex_reference(from, self.distances.len())?;
        check_vertex_reference(to, self.distances.len())?;
        Ok(self.reconstruct_path_unchecked(from, to))
    }

    fn reconstruct_path_unchecked(&self, from: usize, to: usize) -> ReconstructedPath {
        let distance = self.distances[from][to];
        if distance == f64::INFINITY {
            return ReconstructedPath::NoPath;
        }
        if from == to {
            return if distance == f64::NEG_INFINITY {
                ReconstructedPath::Severed
            } else {
                ReconstructedPath::Path(vec![from])
            };
        }
        if self.next[from][to].is_none() {
            return ReconstructedPath::Severed;
        }

        let mut path = vec![from];
        let mut at = from;
        while at != to {
            // A walk longer than the amount of vertices can only circle within a negative cycle.
            if path.len() > self.distances.len() {
                trace!("Path from {} to {} does not terminate", from, to);
                return ReconstructedPath::Severed;
            }

            match self.next[at][to] {
                Some(successor) => at = successor,
                None => {
                    trace!("Path from {} to {} is severed at {}", from, to, at);
                    return ReconstructedPath::Severed;
                }
            }
            path.push(at);
        }

        ReconstructedPath::Path(path)
    }

    /// Returns a shortest path for every ordered pair of distinct vertices that has a reconstructable one.
    /// The paths are ordered by the identity of their source, and then by the identity of their target.
    pub fn paths(&self) -> Vec<Vec<usize>> {
        let n = self.distances.len();
        let mut result = Vec::new();
        for from in 0..n {
            for to in (0..n).filter(|&to| to != from) {
                if let ReconstructedPath::Path(path) = self.reconstruct_path_unchecked(from, to) {
                    result.push(path);
                }
            }
        }
        result
    }
}
