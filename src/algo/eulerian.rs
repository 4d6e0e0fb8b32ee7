use crate::interface::StaticGraph;

/// Returns the in-degree of each vertex, indexed by identity.
pub fn in_degrees<Graph: StaticGraph>(graph: &Graph) -> Vec<usize> {
    let mut in_degrees = vec![0; graph.vertex_count()];
    for &vertex in graph.enumeration_order() {
        for edge in graph.out_edges(vertex) {
            in_degrees[edge.target()] += 1;
        }
    }
    in_degrees
}

/// Returns true if every vertex of the graph has equal in- and out-degree.
pub fn decomposes_into_eulerian_cycles<Graph: StaticGraph>(graph: &Graph) -> bool {
    let in_degrees = in_degrees(graph);
    graph
        .enumeration_order()
        .iter()
        .all(|&vertex| graph.out_degree(vertex) == in_degrees[vertex])
}

/// Compute a vector of tuples of vertices and outdegree - indegree for all vertices that have indegree != outdegree.
/// The vertices are given as identities, in enumeration order.
pub fn find_non_eulerian_vertices_with_differences<Graph: StaticGraph>(
    graph: &Graph,
) -> Vec<(usize, isize)> {
    let in_degrees = in_degrees(graph);
    let mut vertices_and_differences = Vec::new();
    for &vertex in graph.enumeration_order() {
        let difference = graph.out_degree(vertex) as isize - in_degrees[vertex] as isize;
        if difference != 0 {
            vertices_and_differences.push((vertex, difference));
        }
    }
    vertices_and_differences
}

/// Returns the identities of the vertices of a walk that uses every edge exactly once, or `None` if there is no such walk.
///
/// A walk can only exist if there are no unbalanced vertices, or exactly one vertex with one more outgoing than incoming edge
/// and one vertex with one more incoming than outgoing edge.
/// In the first case, the walk starts at the last vertex in enumeration order that has outgoing edges,
/// in the second case at the vertex with the surplus of outgoing edges.
/// A graph without edges has no such walk.
///
/// The walk is built with Hierholzer's algorithm, consuming the out-edges of each vertex from the back of its edge list.
/// If it does not use every edge, the edges are not connected and `None` is returned.
pub fn find_eulerian_path<Graph: StaticGraph>(graph: &Graph) -> Option<Vec<usize>> {
    let edge_count = graph.edge_count();
    if edge_count == 0 {
        debug!("Graph has no edges, so it has no Eulerian path");
        return None;
    }

    let mut start = None;
    let mut start_candidates = 0;
    for (vertex, difference) in find_non_eulerian_vertices_with_differences(graph) {
        match difference {
            1 => {
                start_candidates += 1;
                if start.is_none() {
                    start = Some(vertex);
                }
            }
            -1 => {}
            _ => {
                debug!(
                    "Vertex {} has out-degree minus in-degree {}, so there is no Eulerian path",
                    vertex, difference
                );
                return None;
            }
        }
    }
    // The differences sum up to zero, so there are as many end candidates as start candidates.
    if start_candidates > 1 {
        debug!(
            "Graph has {} vertices with a surplus of outgoing edges, so there is no Eulerian path",
            start_candidates
        );
        return None;
    }

    let start = match start {
        Some(start) => start,
        None => *graph
            .enumeration_order()
            .iter()
            .rev()
            .find(|&&vertex| graph.out_degree(vertex) > 0)?,
    };

    let mut remaining_out_degrees: Vec<_> = (0..graph.vertex_count())
        .map(|vertex| graph.out_degree(vertex))
        .collect();
    let mut stack = vec![start];
    let mut path = Vec::with_capacity(edge_count + 1);

    while let Some(&vertex) = stack.last() {
        let remaining = &mut remaining_out_degrees[vertex];
        if *remaining > 0 {
            *remaining -= 1;
            stack.push(graph.out_edges(vertex)[*remaining].target());
        } else {
            stack.pop();
            path.push(vertex);
        }
    }
    path.reverse();

    if path.len() == edge_count + 1 {
        Some(path)
    } else {
        debug!(
            "Walk from {} uses only {} of {} edges, so there is no Eulerian path",
            start,
            path.len() - 1,
            edge_count
        );
        None
    }
}

#[cfg(test)]
mod tests {
    use super::{
        decomposes_into_eulerian_cycles, find_eulerian_path,
        find_non_eulerian_vertices_with_differences, in_degrees,
    };
    use crate::algo::predefined_graphs::create_path_graph;
    use crate::implementation::Graph;
    use crate::interface::StaticGraph;
    use crate::test_util::{create_graph, initialise_logging, values};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_eulerian_circuit() {
        let mut graph = Graph::new();
        let a = graph.add_vertex("A");
        let b = graph.add_vertex("B");
        let c = graph.add_vertex("C");
        graph.add_edge(a, b, 1.0).unwrap();
        graph.add_edge(b, c, 1.0).unwrap();
        graph.add_edge(c, a, 1.0).unwrap();

        assert!(decomposes_into_eulerian_cycles(&graph));
        assert!(find_non_eulerian_vertices_with_differences(&graph).is_empty());
        let path = graph.find_eulerian_path().unwrap();
        assert_eq!(values(&path), vec!["C", "A", "B", "C"]);
    }

    #[test]
    fn test_eulerian_path() {
        let mut graph = Graph::new();
        let a = graph.add_vertex("A");
        let b = graph.add_vertex("B");
        let c = graph.add_vertex("C");
        let d = graph.add_vertex("D");
        graph.add_edge(a, b, 1.0).unwrap();
        graph.add_edge(b, c, 1.0).unwrap();
        graph.add_edge(c, a, 1.0).unwrap();
        graph.add_edge(a, d, 1.0).unwrap();

        assert!(!decomposes_into_eulerian_cycles(&graph));
        assert_eq!(
            find_non_eulerian_vertices_with_differences(&graph),
            vec![(a, 1), (d, -1)]
        );
        let path = graph.find_eulerian_path().unwrap();
        assert_eq!(values(&path), vec!["A", "B", "C", "A", "D"]);
    }

    #[test]
    fn test_eulerian_self_loop() {
        let mut graph = Graph::new();
        let a = graph.add_vertex("A");
        graph.add_edge(a, a, 1.0).unwrap();
        assert_eq!(values(&graph.find_eulerian_path().unwrap()), vec!["A", "A"]);
    }

    #[test]
    fn test_no_eulerian_path_without_edges() {
        let mut graph = Graph::new();
        graph.add_vertex("A");
        assert!(decomposes_into_eulerian_cycles(&graph));
        assert_eq!(graph.find_eulerian_path(), None);
        assert_eq!(Graph::<()>::new().find_eulerian_path(), None);
    }

    #[test]
    fn test_no_eulerian_path_if_unbalanced() {
        initialise_logging();
        assert_eq!(create_graph().find_eulerian_path(), None);

        // Two vertices with a surplus of outgoing edges.
        let mut graph = Graph::new();
        let a = graph.add_vertex(());
        let b = graph.add_vertex(());
        let c = graph.add_vertex(());
        let d = graph.add_vertex(());
        graph.add_edge(a, b, 1.0).unwrap();
        graph.add_edge(c, d, 1.0).unwrap();
        assert_eq!(
            find_non_eulerian_vertices_with_differences(&graph),
            vec![(a, 1), (b, -1), (c, 1), (d, -1)]
        );
        assert_eq!(find_eulerian_path(&graph), None);
    }

    #[test]
    fn test_no_eulerian_path_if_disconnected() {
        let mut graph = Graph::new();
        let a = graph.add_vertex(());
        let b = graph.add_vertex(());
        let c = graph.add_vertex(());
        let d = graph.add_vertex(());
        graph.add_undirected_edge(a, b, 1.0).unwrap();
        graph.add_undirected_edge(c, d, 1.0).unwrap();
        assert!(decomposes_into_eulerian_cycles(&graph));
        assert_eq!(find_eulerian_path(&graph), None);
    }

    #[test]
    fn test_eulerian_path_of_random_walks() {
        let mut random = StdRng::seed_from_u64(29);
        for _ in 0..50 {
            let vertex_amount = 8;
            let mut graph = Graph::<()>::new();
            for _ in 0..vertex_amount {
                graph.add_vertex(());
            }
            let walk: Vec<usize> = (0..30)
                .map(|_| random.gen_range(0..vertex_amount))
                .collect();
            for pair in walk.windows(2) {
                graph.add_edge(pair[0], pair[1], 1.0).unwrap();
            }

            let path = find_eulerian_path(&graph).unwrap();
            assert_eq!(path.len(), graph.edge_count() + 1);
            if walk[0] != walk[walk.len() - 1] {
                assert_eq!(path[0], walk[0]);
                assert_eq!(path[path.len() - 1], walk[walk.len() - 1]);
            }

            let mut used: Vec<_> = path.windows(2).map(|pair| (pair[0], pair[1])).collect();
            let mut edges: Vec<_> = walk.windows(2).map(|pair| (pair[0], pair[1])).collect();
            used.sort_unstable();
            edges.sort_unstable();
            assert_eq!(used, edges);

            let in_degrees = in_degrees(&graph);
            assert_eq!(in_degrees.iter().sum::<usize>(), graph.edge_count());
        }
    }

    #[test]
    fn test_eulerian_path_deep_graph() {
        let vertex_amount = 200_000;
        let mut graph = Graph::<()>::new();
        let first = create_path_graph(&mut graph, vertex_amount).unwrap();
        assert_eq!(
            find_eulerian_path(&graph),
            Some((0..vertex_amount).collect())
        );

        graph.add_edge(vertex_amount - 1, first, 1.0).unwrap();
        let path = find_eulerian_path(&graph).unwrap();
        assert_eq!(path.len(), vertex_amount + 1);
        assert_eq!(path[0], vertex_amount - 1);
        assert_eq!(path[1], first);
        assert_eq!(path[vertex_amount], vertex_amount - 1);
    }
}
