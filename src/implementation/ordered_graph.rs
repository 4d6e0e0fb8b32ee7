use crate::algo::articulation_points::find_articulation_points;
use crate::algo::bellman_ford::shortest_distances;
use crate::algo::bridges::find_bridges;
use crate::algo::components::strongly_connected_components;
use crate::algo::dijkstra::Dijkstra;
use crate::algo::eulerian::find_eulerian_path;
use crate::algo::floyd_warshall::FloydWarshall;
use crate::algo::topological_sort::topological_order;
use crate::error::{check_vertex_reference, ErrorKind, Result};
use crate::interface::{Edge, StaticGraph, Vertex};
use std::fmt;

/// A weighted directed graph that owns an ordered mapping from each vertex to its out-edges.
///
/// Vertices and edges are append-only.
/// Vertices and their adjacency lists are stored by identity, and the enumeration order is kept as a separate permutation.
/// All methods that take a vertex reference expect a *slot*, i.e. a position in the current enumeration order.
/// Until [topological_sort](Graph::topological_sort) is called, slots and identities are the same.
#[derive(Debug, Clone)]
pub struct Graph<T> {
    vertices: Vec<Vertex<T>>,
    edges: Vec<Vec<Edge>>,
    /// Maps slots to identities.
    order: Vec<usize>,
    /// Maps identities to slots.
    slots: Vec<usize>,
}

impl<T> Default for Graph<T> {
    fn default() -> Self {
        Self {
            vertices: Vec::new(),
            edges: Vec::new(),
            order: Vec::new(),
            slots: Vec::new(),
        }
    }
}

impl<T> Graph<T> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a vertex carrying the given value and returns its identity.
    /// The new vertex is appended to the enumeration order, so the returned identity is also its slot.
    pub fn add_vertex(&mut self, value: T) -> usize {
        let identity = self.vertices.len();
        self.vertices.push(Vertex::new(identity, value));
        self.edges.push(Vec::new());
        self.slots.push(self.order.len());
        self.order.push(identity);
        identity
    }

    /// Appends a directed edge between the vertices in the given slots.
    pub fn add_edge(&mut self, from: usize, to: usize, cost: f64) -> Result<()> {
        let from = self.checked_identity_at(from)?;
        let to = self.checked_identity_at(to)?;
        self.push_edge(from, to, cost);
        Ok(())
    }

    /// Appends a directed edge between the vertices with the given identities, which must exist.
    pub(crate) fn push_edge(&mut self, from: usize, to: usize, cost: f64) {
        self.edges[from].push(Edge::new(to, cost));
    }

    /// Appends a directed edge in both directions between the vertices in the given slots.
    /// Nothing is added if one of the slots is invalid.
    pub fn add_undirected_edge(&mut self, from: usize, to: usize, cost: f64) -> Result<()> {
        let from = self.checked_identity_at(from)?;
        let to = self.checked_identity_at(to)?;
        self.push_edge(from, to, cost);
        self.push_edge(to, from, cost);
        Ok(())
    }

    /// Returns the vertex in the given slot.
    pub fn vertex_at(&self, slot: usize) -> Result<&Vertex<T>> {
        let identity = self.checked_identity_at(slot)?;
        Ok(&self.vertices[identity])
    }

    /// Returns a copy of the out-edges of the vertex in the given slot.
    pub fn edges_at(&self, slot: usize) -> Result<Vec<Edge>> {
        let identity = self.checked_identity_at(slot)?;
        Ok(self.edges[identity].clone())
    }

    /// Returns the vertex with the given identity, or `None` if there is no such vertex.
    pub fn vertex(&self, identity: usize) -> Option<&Vertex<T>> {
        self.vertices.get(identity)
    }

    /// Returns the slot currently occupied by the vertex with the given identity.
    pub fn slot_of(&self, identity: usize) -> Result<usize> {
        self.slots
            .get(identity)
            .copied()
            .ok_or_else(|| ErrorKind::InvalidVertexReference(identity, self.vertex_count()).into())
    }

    /// Iterates over all vertices together with their out-edges, in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = (&Vertex<T>, &[Edge])> + '_ {
        self.order
            .iter()
            .map(move |&identity| (&self.vertices[identity], self.edges[identity].as_slice()))
    }

    /// Computes a shortest path between the vertices in the given slots with Dijkstra's algorithm.
    ///
    /// Returns the path from source to target and its length.
    /// All edge costs are expected to be nonnegative, which is not checked.
    /// If the target is unreachable, the length is positive infinity and the path consists of the target alone.
    pub fn shortest_path(&self, from: usize, to: usize) -> Result<(Vec<&Vertex<T>>, f64)> {
        let source = self.checked_identity_at(from)?;
        let target = self.checked_identity_at(to)?;
        let (distance, path) = Dijkstra::new(self).shortest_path(self, source, target);
        Ok((self.resolve(path), distance))
    }

    /// Computes the distances from the vertex in the given slot to all vertices with the Bellman-Ford algorithm.
    ///
    /// The result is indexed by identity.
    /// Vertices found to be affected by a negative cycle are set to negative infinity,
    /// see [shortest_distances](crate::algo::bellman_ford::shortest_distances) for the exact extent of this.
    ///
    /// The edges are relaxed in a single sweep over the enumeration order, so the distances are only exact
    /// if every vertex is enumerated after all of its predecessors, e.g. on an acyclic graph after
    /// [topological_sort](Graph::topological_sort).
    /// Otherwise, an edge that still relaxes after the sweep sets its target to negative infinity,
    /// even if no edge cost is negative.
    /// In that case, the result can differ from [shortest_path](Graph::shortest_path).
    pub fn shortest_distances(&self, from: usize) -> Result<Vec<f64>> {
        let source = self.checked_identity_at(from)?;
        Ok(shortest_distances(self, source))
    }

    /// Computes the distances between all pairs of vertices with the Floyd-Warshall algorithm.
    /// The matrix is indexed by identity.
    pub fn all_pairs_distances(&self) -> Vec<Vec<f64>> {
        FloydWarshall::new(self).into_distances()
    }

    /// Computes the distances between all pairs of vertices, as well as a shortest path for every ordered pair of
    /// distinct vertices that has a reconstructable one.
    /// The paths are ordered by the identities of their source and then their target.
    pub fn all_pairs_paths(&self) -> (Vec<Vec<f64>>, Vec<Vec<&Vertex<T>>>) {
        let floyd_warshall = FloydWarshall::new(self);
        let paths = floyd_warshall
            .paths()
            .into_iter()
            .map(|path| self.resolve(path))
            .collect();
        (floyd_warshall.into_distances(), paths)
    }

    /// Runs the Floyd-Warshall algorithm and returns its state for querying single paths.
    pub fn floyd_warshall(&self) -> FloydWarshall {
        FloydWarshall::new(self)
    }

    /// Reorders the enumeration of this graph topologically.
    ///
    /// The graph is expected to be acyclic, which is not checked.
    /// Identities stay the same, but afterwards slot `k` holds the `k`-th vertex in topological order.
    pub fn topological_sort(&mut self) {
        let order = topological_order(self);
        debug_assert_eq!(order.len(), self.vertex_count());
        for (slot, &identity) in order.iter().enumerate() {
            self.slots[identity] = slot;
        }
        self.order = order;
        debug!("Reordered {} vertices topologically", self.vertex_count());
    }

    /// Returns the bridges of this graph as pairs of DFS parent and child.
    pub fn find_bridges(&self) -> Vec<(&Vertex<T>, &Vertex<T>)> {
        find_bridges(self)
            .into_iter()
            .map(|(from, to)| (&self.vertices[from], &self.vertices[to]))
            .collect()
    }

    /// Returns the articulation points of this graph in enumeration order.
    pub fn find_articulation_points(&self) -> Vec<&Vertex<T>> {
        self.resolve(find_articulation_points(self))
    }

    /// Returns the strongly connected components of this graph in the order Tarjan's algorithm closes them.
    pub fn strongly_connected_components(&self) -> Vec<Vec<&Vertex<T>>> {
        strongly_connected_components(self)
            .into_iter()
            .map(|component| self.resolve(component))
            .collect()
    }

    /// Returns a walk that traverses every edge exactly once, or `None` if there is no such walk.
    pub fn find_eulerian_path(&self) -> Option<Vec<&Vertex<T>>> {
        find_eulerian_path(self).map(|path| self.resolve(path))
    }

    fn checked_identity_at(&self, slot: usize) -> Result<usize> {
        check_vertex_reference(slot, self.vertex_count())?;
        Ok(self.order[slot])
    }

    fn resolve(&self, identities: Vec<usize>) -> Vec<&Vertex<T>> {
        identities
            .into_iter()
            .map(|identity| &self.vertices[identity])
            .collect()
    }
}

impl<T> StaticGraph for Graph<T> {
    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn enumeration_order(&self) -> &[usize] {
        &self.order
    }

    fn out_edges(&self, identity: usize) -> &[Edge] {
        &self.edges[identity]
    }

    fn edge_count(&self) -> usize {
        self.edges.iter().map(Vec::len).sum()
    }
}

impl<T: fmt::Display> fmt::Display for Graph<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (vertex, edges) in self.iter() {
            write!(f, "{} -> ", vertex.value())?;
            for edge in edges {
                write!(
                    f,
                    "[{} ({})]",
                    self.vertices[edge.target()].value(),
                    edge.cost()
                )?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
