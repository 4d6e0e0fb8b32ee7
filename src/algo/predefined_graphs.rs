use crate::implementation::Graph;
use rand::Rng;

/// Adds a binary tree to the given graph, with edges from parents to children of cost 1.
/// The first added vertex is the root of the tree, and its identity is returned.
/// A negative depth adds no vertices to the graph, a depth of 0 just the root, a depth of 1 the root and its children, and so on.
pub fn create_binary_tree<T: Default>(graph: &mut Graph<T>, depth: i32) -> Option<usize> {
    if depth < 0 {
        return None;
    }

    let root = graph.add_vertex(Default::default());
    create_binary_tree_recursively(graph, depth - 1, root);
    Some(root)
}

fn create_binary_tree_recursively<T: Default>(graph: &mut Graph<T>, depth: i32, root: usize) {
    if depth < 0 {
        return;
    }

    let l = graph.add_vertex(Default::default());
    let r = graph.add_vertex(Default::default());
    graph.push_edge(root, l, 1.0);
    graph.push_edge(root, r, 1.0);
    create_binary_tree_recursively(graph, depth - 1, l);
    create_binary_tree_recursively(graph, depth - 1, r);
}

/// Adds a chain of `length` vertices to the given graph, connected by edges of cost 1.
/// Returns the identity of the first vertex of the chain, or `None` if the length is zero.
pub fn create_path_graph<T: Default>(graph: &mut Graph<T>, length: usize) -> Option<usize> {
    if length == 0 {
        return None;
    }

    let first = graph.add_vertex(Default::default());
    let mut last = first;
    for _ in 1..length {
        let next = graph.add_vertex(Default::default());
        graph.push_edge(last, next, 1.0);
        last = next;
    }
    Some(first)
}

/// Adds `vertex_amount` vertices and `edge_amount` edges between them to the given graph.
/// The endpoints of each edge are drawn uniformly at random, so there may be self-loops and parallel edges.
/// The costs are integral and drawn uniformly from `0..=max_cost`.
pub fn create_random_graph<T: Default, Random: Rng>(
    graph: &mut Graph<T>,
    vertex_amount: usize,
    edge_amount: usize,
    max_cost: u32,
    random: &mut Random,
) {
    if vertex_amount == 0 {
        return;
    }

    let first = graph.add_vertex(Default::default());
    for _ in 1..vertex_amount {
        graph.add_vertex(Default::default());
    }

    for _ in 0..edge_amount {
        let from = first + random.gen_range(0..vertex_amount);
        let to = first + random.gen_range(0..vertex_amount);
        let cost = random.gen_range(0..=max_cost);
        graph.push_edge(from, to, f64::from(cost));
    }
}
