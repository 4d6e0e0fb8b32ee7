//! Fixture graphs and oracles shared by the unit tests.

use crate::implementation::Graph;
use crate::interface::{StaticGraph, Vertex};
use petgraph::graph::{DiGraph, NodeIndex};
use simplelog::{Config, LevelFilter, SimpleLogger};

pub fn initialise_logging() {
    // Only the first test to get here installs the logger.
    let _ = SimpleLogger::init(LevelFilter::Debug, Config::default());
}

pub fn values<T: Clone>(vertices: &[&Vertex<T>]) -> Vec<T> {
    vertices.iter().map(|vertex| vertex.value().clone()).collect()
}

/*
    A -> [B (1)][C (3)]
    B -> [D (2)][E (8)][C (1)]
    C -> [D (1)][E (3)]
    D -> [E (4)]
    E -> [C (3)]
*/
pub fn create_graph() -> Graph<&'static str> {
    let mut graph = Graph::new();

    let a = graph.add_vertex("A");
    let b = graph.add_vertex("B");
    let c = graph.add_vertex("C");
    let d = graph.add_vertex("D");
    let e = graph.add_vertex("E");

    graph.add_edge(a, b, 1.0).unwrap();
    graph.add_edge(a, c, 3.0).unwrap();
    graph.add_edge(b, d, 2.0).unwrap();
    graph.add_edge(b, e, 8.0).unwrap();
    graph.add_edge(b, c, 1.0).unwrap();
    graph.add_edge(c, d, 1.0).unwrap();
    graph.add_edge(d, e, 4.0).unwrap();
    graph.add_undirected_edge(e, c, 3.0).unwrap();

    graph
}

/*
    A -> [B (1)][C (1)]
    B -> [D (4)]
    C -> [B (1)]
    D -> [C (-6)][E (1)][F (1)]
    E ->
    F ->
*/
pub fn create_graph_with_negative_cycle() -> Graph<&'static str> {
    let mut graph = Graph::new();

    let a = graph.add_vertex("A");
    let b = graph.add_vertex("B");
    let c = graph.add_vertex("C");
    let d = graph.add_vertex("D");
    let e = graph.add_vertex("E");
    let f = graph.add_vertex("F");

    graph.add_edge(a, b, 1.0).unwrap();
    graph.add_edge(a, c, 1.0).unwrap();
    graph.add_edge(b, d, 4.0).unwrap();
    graph.add_edge(c, b, 1.0).unwrap();
    graph.add_edge(d, c, -6.0).unwrap();
    graph.add_edge(d, e, 1.0).unwrap();
    graph.add_edge(d, f, 1.0).unwrap();

    graph
}

/*
    A -> [B (1)]
    B -> [C (1)][E (1)]
    C -> [A (1)]
    D -> [E (1)]
    E -> [B (1)][F (1)]
    F -> [D (1)][I (1)]
    G -> [H (1)]
    H -> [I (1)]
    I -> [G (1)]
*/
pub fn create_graph_with_bridges() -> Graph<&'static str> {
    let mut graph = Graph::new();

    let a = graph.add_vertex("A");
    let b = graph.add_vertex("B");
    let c = graph.add_vertex("C");
    let d = graph.add_vertex("D");
    let e = graph.add_vertex("E");
    let f = graph.add_vertex("F");
    let g = graph.add_vertex("G");
    let h = graph.add_vertex("H");
    let i = graph.add_vertex("I");

    graph.add_edge(a, b, 1.0).unwrap();
    graph.add_edge(b, c, 1.0).unwrap();
    graph.add_edge(c, a, 1.0).unwrap();
    graph.add_undirected_edge(b, e, 1.0).unwrap();
    graph.add_edge(d, e, 1.0).unwrap();
    graph.add_edge(e, f, 1.0).unwrap();
    graph.add_edge(f, d, 1.0).unwrap();
    graph.add_edge(f, i, 1.0).unwrap();
    graph.add_edge(g, h, 1.0).unwrap();
    graph.add_edge(h, i, 1.0).unwrap();
    graph.add_edge(i, g, 1.0).unwrap();

    graph
}

/*
    A -> [B (1)]
    B -> [C (1)]
    C -> [A (1)]
    D -> [E (1)][H (1)]
    E -> [F (1)]
    F -> [A (1)][G (1)]
    G -> [A (1)][C (1)][E (1)]
    H -> [F (1)][D (1)]
*/
pub fn create_graph_with_strongly_connected_components() -> Graph<&'static str> {
    let mut graph = Graph::new();

    let a = graph.add_vertex("A");
    let b = graph.add_vertex("B");
    let c = graph.add_vertex("C");
    let d = graph.add_vertex("D");
    let e = graph.add_vertex("E");
    let f = graph.add_vertex("F");
    let g = graph.add_vertex("G");
    let h = graph.add_vertex("H");

    graph.add_edge(a, b, 1.0).unwrap();
    graph.add_edge(b, c, 1.0).unwrap();
    graph.add_edge(c, a, 1.0).unwrap();
    graph.add_edge(e, f, 1.0).unwrap();
    graph.add_edge(d, e, 1.0).unwrap();
    graph.add_edge(d, h, 1.0).unwrap();
    graph.add_edge(f, a, 1.0).unwrap();
    graph.add_edge(f, g, 1.0).unwrap();
    graph.add_edge(g, a, 1.0).unwrap();
    graph.add_edge(g, c, 1.0).unwrap();
    graph.add_edge(g, e, 1.0).unwrap();
    graph.add_edge(h, f, 1.0).unwrap();
    graph.add_edge(h, d, 1.0).unwrap();

    graph
}

/// Copies a graph into a petgraph graph whose node indices are the identities of the copied vertices.
pub fn to_petgraph<Graph: StaticGraph>(graph: &Graph) -> DiGraph<usize, f64> {
    let mut result = DiGraph::new();
    for identity in 0..graph.vertex_count() {
        result.add_node(identity);
    }
    for identity in 0..graph.vertex_count() {
        for edge in graph.out_edges(identity) {
            result.add_edge(
                NodeIndex::new(identity),
                NodeIndex::new(edge.target()),
                edge.cost(),
            );
        }
    }
    result
}

/// Returns the amount of weakly connected components of the graph restricted to the allowed vertices and edges.
pub fn count_weak_components<Graph: StaticGraph>(
    graph: &Graph,
    is_vertex_allowed: impl Fn(usize) -> bool,
    is_edge_allowed: impl Fn(usize, usize) -> bool,
) -> usize {
    let n = graph.vertex_count();
    let mut neighbors = vec![Vec::new(); n];
    for from in 0..n {
        for edge in graph.out_edges(from) {
            let to = edge.target();
            if is_vertex_allowed(from) && is_vertex_allowed(to) && is_edge_allowed(from, to) {
                neighbors[from].push(to);
                neighbors[to].push(from);
            }
        }
    }

    let mut visited = vec![false; n];
    let mut components = 0;
    for start in (0..n).filter(|&vertex| is_vertex_allowed(vertex)) {
        if visited[start] {
            continue;
        }
        components += 1;
        visited[start] = true;
        let mut stack = vec![start];
        while let Some(vertex) = stack.pop() {
            for &neighbor in &neighbors[vertex] {
                if !visited[neighbor] {
                    visited[neighbor] = true;
                    stack.push(neighbor);
                }
            }
        }
    }
    components
}

/// Returns true if `to` can be reached from `from`.
pub fn is_reachable<Graph: StaticGraph>(graph: &Graph, from: usize, to: usize) -> bool {
    let mut visited = vec![false; graph.vertex_count()];
    visited[from] = true;
    let mut stack = vec![from];
    while let Some(vertex) = stack.pop() {
        if vertex == to {
            return true;
        }
        for edge in graph.out_edges(vertex) {
            if !visited[edge.target()] {
                visited[edge.target()] = true;
                stack.push(edge.target());
            }
        }
    }
    false
}
