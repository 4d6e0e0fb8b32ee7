use crate::interface::StaticGraph;
use bitvector::BitVector;

/// A frame of an explicit depth-first search stack.
/// It stores the vertex being explored and the position of the next out-edge to follow.
#[derive(Debug, Clone, Copy)]
pub(crate) struct DfsFrame {
    pub vertex: usize,
    pub parent: Option<usize>,
    next_edge: usize,
}

impl DfsFrame {
    pub fn new(vertex: usize, parent: Option<usize>) -> Self {
        Self {
            vertex,
            parent,
            next_edge: 0,
        }
    }

    /// Advances to the next out-edge of the vertex and returns its target, or `None` if all out-edges were followed.
    pub fn next_neighbor<Graph: StaticGraph>(&mut self, graph: &Graph) -> Option<usize> {
        let edge = graph.out_edges(self.vertex).get(self.next_edge)?;
        self.next_edge += 1;
        Some(edge.target())
    }
}

/// A forward depth-first search that returns vertex identities in postorder.
///
/// Once a search tree is exhausted, the traversal continues from the next unvisited vertex in enumeration order,
/// so every vertex is returned exactly once.
/// Out-edges are followed in insertion order.
/// The stack of the search is kept on the heap, so the depth of the graph is not limited by the call stack.
pub struct PostOrderForwardDfs<'a, Graph> {
    graph: &'a Graph,
    stack: Vec<DfsFrame>,
    visited: BitVector,
    next_root_slot: usize,
}

impl<'a, Graph: StaticGraph> PostOrderForwardDfs<'a, Graph> {
    /// Creates a new traversal over the whole graph.
    pub fn new(graph: &'a Graph) -> Self {
        Self {
            graph,
            stack: Vec::new(),
            visited: BitVector::new(graph.vertex_count()),
            next_root_slot: 0,
        }
    }

    fn start_next_tree(&mut self) -> bool {
        while self.next_root_slot < self.graph.vertex_count() {
            let root = self.graph.identity_at(self.next_root_slot);
            self.next_root_slot += 1;
            if self.visited.insert(root) {
                self.stack.push(DfsFrame::new(root, None));
                return true;
            }
        }
        false
    }
}

impl<'a, Graph: StaticGraph> Iterator for PostOrderForwardDfs<'a, Graph> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.stack.last_mut() {
                Some(frame) => {
                    let vertex = frame.vertex;
                    match frame.next_neighbor(self.graph) {
                        Some(neighbor) => {
                            if self.visited.insert(neighbor) {
                                self.stack.push(DfsFrame::new(neighbor, Some(vertex)));
                            }
                        }
                        None => {
                            self.stack.pop();
                            return Some(vertex);
                        }
                    }
                }
                None => {
                    if !self.start_next_tree() {
                        return None;
                    }
                }
            }
        }
    }
}

/// The discovery orders and low-links of a depth-first search forest.
///
/// The search starts a new tree from every undiscovered vertex in enumeration order and follows out-edges in insertion order.
/// Every edge leading back to the DFS parent of a vertex is ignored, all other edges to discovered vertices are back edges.
/// The low-link of a vertex is the minimum of its own discovery order, the discovery orders of the targets of its back edges,
/// and the low-links of its DFS children.
///
/// Discovery orders are drawn from one counter for the whole forest, so they are unique.
pub struct LowLinkForest {
    discovery_order: Vec<Option<usize>>,
    low_link: Vec<usize>,
    dfs_parent: Vec<Option<usize>>,
    tree_edges: Vec<(usize, usize)>,
}

impl LowLinkForest {
    /// Runs the depth-first search on the given graph.
    pub fn new<Graph: StaticGraph>(graph: &Graph) -> Self {
        let n = graph.vertex_count();
        let mut discovery_order = vec![None; n];
        let mut low_link = vec![0; n];
        let mut dfs_parent = vec![None; n];
        let mut tree_edges = Vec::new();
        let mut next_discovery_order = 0;
        let mut stack = Vec::new();

        for &root in graph.enumeration_order() {
            if discovery_order[root].is_some() {
                continue;
            }

            discovery_order[root] = Some(next_discovery_order);
            low_link[root] = next_discovery_order;
            next_discovery_order += 1;
            stack.push(DfsFrame::new(root, None));

            while let Some(frame) = stack.last_mut() {
                let vertex = frame.vertex;
                let parent = frame.parent;

                match frame.next_neighbor(graph) {
                    Some(neighbor) if Some(neighbor) == parent => {}
                    Some(neighbor) => match discovery_order[neighbor] {
                        Some(order) => low_link[vertex] = low_link[vertex].min(order),
                        None => {
                            discovery_order[neighbor] = Some(next_discovery_order);
                            low_link[neighbor] = next_discovery_order;
                            next_discovery_order += 1;
                            dfs_parent[neighbor] = Some(vertex);
                            stack.push(DfsFrame::new(neighbor, Some(vertex)));
                        }
                    },
                    None => {
                        stack.pop();
                        if let Some(parent) = parent {
                            low_link[parent] = low_link[parent].min(low_link[vertex]);
                            tree_edges.push((parent, vertex));
                        }
                    }
                }
            }
        }

        Self {
            discovery_order,
            low_link,
            dfs_parent,
            tree_edges,
        }
    }

    /// Returns the discovery order of the given vertex.
    pub fn discovery_order(&self, vertex: usize) -> usize {
        self.discovery_order[vertex].unwrap_or(usize::MAX)
    }

    /// Returns the low-link of the given vertex.
    pub fn low_link(&self, vertex: usize) -> usize {
        self.low_link[vertex]
    }

    /// Returns the parent of the given vertex in the DFS forest, or `None` if it is the root of a tree.
    pub fn dfs_parent(&self, vertex: usize) -> Option<usize> {
        self.dfs_parent[vertex]
    }

    /// Returns the edges of the DFS forest as pairs of parent and child,
    /// in the order in which the depth-first search finished the child.
    pub fn tree_edges(&self) -> &[(usize, usize)] {
        &self.tree_edges
    }
}
