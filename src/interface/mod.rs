//! The graph trait and its value types.
//!
//! Solvers only ever see a graph through [StaticGraph], which exposes vertices by *identity*:
//! the index assigned to a vertex when it was added.
//! The *enumeration order* of the graph is exposed separately as a permutation of identities,
//! because it may diverge from the identities once the graph has been reordered.

/// A vertex of a graph, carrying an arbitrary payload.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Vertex<T> {
    id: usize,
    value: T,
}

impl<T> Vertex<T> {
    pub(crate) fn new(id: usize, value: T) -> Self {
        Self { id, value }
    }

    /// The identity of this vertex, assigned sequentially at creation.
    pub fn id(&self) -> usize {
        self.id
    }

    /// The payload of this vertex.
    pub fn value(&self) -> &T {
        &self.value
    }
}

/// A directed edge, stored in the out-edge list of its source vertex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    target: usize,
    cost: f64,
}

impl Edge {
    pub(crate) fn new(target: usize, cost: f64) -> Self {
        Self { target, cost }
    }

    /// The identity of the vertex this edge points to.
    pub fn target(&self) -> usize {
        self.target
    }

    /// The cost of traversing this edge. May be negative.
    pub fn cost(&self) -> f64 {
        self.cost
    }
}

/// Read access to a weighted directed graph whose vertices are indexed consecutively by identity.
pub trait StaticGraph {
    /// Returns the amount of vertices in this graph.
    fn vertex_count(&self) -> usize;

    /// Returns the identities of all vertices in enumeration order.
    /// The element at position `k` is the identity of the vertex in slot `k`.
    fn enumeration_order(&self) -> &[usize];

    /// Returns the outgoing edges of the vertex with the given identity, in insertion order.
    /// Panics if the identity is out of range.
    fn out_edges(&self, identity: usize) -> &[Edge];

    /// Returns the amount of edges in this graph.
    fn edge_count(&self) -> usize {
        self.enumeration_order()
            .iter()
            .map(|&identity| self.out_edges(identity).len())
            .sum()
    }

    /// Returns the identity of the vertex in the given slot.
    /// Panics if the slot is out of range.
    fn identity_at(&self, slot: usize) -> usize {
        self.enumeration_order()[slot]
    }

    /// Returns the amount of outgoing edges of the vertex with the given identity.
    fn out_degree(&self, identity: usize) -> usize {
        self.out_edges(identity).len()
    }

    /// Returns true if the graph contains no vertices.
    fn is_empty(&self) -> bool {
        self.vertex_count() == 0
    }
}
