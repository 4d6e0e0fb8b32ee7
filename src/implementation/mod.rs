/// A graph storing an ordered mapping from vertices to their out-edge lists.
pub mod ordered_graph;

pub use ordered_graph::Graph;
