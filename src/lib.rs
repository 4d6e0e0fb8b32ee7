//! A weighted directed graph together with a set of classical graph algorithms.
//!
//! Graphs are built incrementally through [Graph](implementation::Graph), and then analysed by the solvers in [algo].
//! Each solver is generic over the read-only [StaticGraph](interface::StaticGraph) trait, works on vertex identities
//! and returns a freshly allocated result.
//!
//! Vertices are addressed in two ways:
//!  - their *identity*, an index assigned at creation that never changes, and
//!  - their *slot*, the position in the enumeration order of the graph.
//!
//! Both coincide until [Graph::topological_sort](implementation::Graph::topological_sort) reorders the enumeration.
#![warn(missing_docs)]
#![recursion_limit = "1024"]
#[macro_use]
extern crate error_chain;
#[macro_use]
extern crate log;

/// The graph algorithms.
pub mod algo;
/// Contains the error types used by this crate.
pub mod error;
/// The concrete graph store.
pub mod implementation;
/// The graph traits and value types.
pub mod interface;

#[cfg(test)]
mod test_util;

pub use error::{Error, ErrorKind, Result};
pub use implementation::Graph;
pub use interface::{Edge, StaticGraph, Vertex};
