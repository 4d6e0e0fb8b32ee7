use crate::interface::StaticGraph;
use bitvector::BitVector;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// A tentative distance, totally ordered so it can be used as priority.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Distance(f64);

impl Eq for Distance {}

impl PartialOrd for Distance {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Distance {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Data structure for Dijkstra's shortest path algorithm.
///
/// The queue uses lazy deletion: a vertex is enqueued again whenever its distance improves,
/// and outdated entries are skipped when they are dequeued.
/// All edge costs are expected to be nonnegative, which is not checked.
///
/// The data structure can be reused for multiple searches on graphs with at most as many vertices as the graph it was created for.
pub struct Dijkstra {
    queue: BinaryHeap<Reverse<(Distance, usize)>>,
    node_weights: Vec<f64>,
    back_pointers: Vec<Option<usize>>,
    settled: BitVector,
}

impl Dijkstra {
    /// Create the data structures for the given graph.
    pub fn new<Graph: StaticGraph>(graph: &Graph) -> Self {
        Self {
            queue: BinaryHeap::new(),
            node_weights: vec![f64::INFINITY; graph.vertex_count()],
            back_pointers: vec![None; graph.vertex_count()],
            settled: BitVector::new(graph.vertex_count()),
        }
    }

    /// Computes a shortest path from `source` to `target`, both given as identities.
    ///
    /// Returns the length of the path and the identities of its vertices.
    /// The search stops as soon as the target is dequeued.
    /// If the target is unreachable, the length is positive infinity and the path consists of only the target,
    /// since the target has no predecessor.
    pub fn shortest_path<Graph: StaticGraph>(
        &mut self,
        graph: &Graph,
        source: usize,
        target: usize,
    ) -> (f64, Vec<usize>) {
        let distance = self.search(graph, source, Some(target));

        let mut path: Vec<_> =
            std::iter::successors(Some(target), |&vertex| self.back_pointers[vertex])
                .take(graph.vertex_count())
                .collect();
        path.reverse();

        self.clear();
        (distance, path)
    }

    /// Computes the distances from `source` to all vertices, indexed by identity.
    pub fn shortest_distances<Graph: StaticGraph>(
        &mut self,
        graph: &Graph,
        source: usize,
    ) -> Vec<f64> {
        self.search(graph, source, None);
        let distances = self.node_weights[..graph.vertex_count()].to_vec();
        self.clear();
        distances
    }

    fn search<Graph: StaticGraph>(
        &mut self,
        graph: &Graph,
        source: usize,
        target: Option<usize>,
    ) -> f64 {
        debug_assert!(graph.vertex_count() <= self.node_weights.len());
        self.node_weights[source] = 0.0;
        self.queue.push(Reverse((Distance(0.0), source)));

        while let Some(Reverse((Distance(weight), vertex))) = self.queue.pop() {
            // Check if the entry is outdated
            if self.node_weights[vertex] < weight {
                continue;
            }
            self.settled.insert(vertex);

            if Some(vertex) == target {
                trace!(
                    "Dijkstra reached target {} with {} entries left in the queue",
                    vertex,
                    self.queue.len()
                );
                return weight;
            }

            // Relax neighbors
            for edge in graph.out_edges(vertex) {
                let neighbor = edge.target();
                if self.settled.contains(neighbor) {
                    continue;
                }

                let new_neighbor_weight = weight + edge.cost();
                if new_neighbor_weight < self.node_weights[neighbor] {
                    self.node_weights[neighbor] = new_neighbor_weight;
                    self.back_pointers[neighbor] = Some(vertex);
                    self.queue
                        .push(Reverse((Distance(new_neighbor_weight), neighbor)));
                }
            }
        }

        f64::INFINITY
    }

    fn clear(&mut self) {
        self.queue.clear();
        for weight in &mut self.node_weights {
            *weight = f64::INFINITY;
        }
        for back_pointer in &mut self.back_pointers {
            *back_pointer = None;
        }
        self.settled.clear();
    }
}

/// Computes a shortest path from `source` to `target` with a fresh [Dijkstra] instance.
/// See [Dijkstra::shortest_path].
pub fn shortest_path<Graph: StaticGraph>(
    graph: &Graph,
    source: usize,
    target: usize,
) -> (f64, Vec<usize>) {
    Dijkstra::new(graph).shortest_path(graph, source, target)
}
