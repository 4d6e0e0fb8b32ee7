/// Finding the articulation points of a graph, treating it as undirected.
pub mod articulation_points;
/// The Bellman-Ford single-source shortest distance algorithm, which supports negative edge costs.
pub mod bellman_ford;
/// Finding the bridges of a graph, treating it as undirected.
pub mod bridges;
/// Algorithms related to graph components, i.e. finding the strongly connected components of a graph.
pub mod components;
/// Dijkstra's shortest path algorithm.
pub mod dijkstra;
/// Algorithms related to Eulerian graphs.
pub mod eulerian;
/// The Floyd-Warshall all-pairs shortest path algorithm.
pub mod floyd_warshall;
/// Algorithms to create certain parameterisable graph classes, like binary trees.
pub mod predefined_graphs;
/// Sorting the vertices of an acyclic graph topologically.
pub mod topological_sort;
/// Depth first search traversals with an explicit stack, i.e. a postorder forward search and a low-link forest.
pub mod traversal;
