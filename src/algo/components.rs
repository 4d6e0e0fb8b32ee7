use crate::algo::traversal::DfsFrame;
use crate::interface::StaticGraph;
use bitvector::BitVector;

/// Computes the strongly connected components of the graph with Tarjan's algorithm.
///
/// Returns one group of identities per strongly connected component, in the order in which the components are closed.
/// Within a group, the vertices are in the order in which they are popped from the component stack,
/// so the vertex that closes the component comes last.
///
/// The depth-first search starts from the undiscovered vertices in enumeration order and follows out-edges in insertion order.
/// It uses an explicit stack, so deep graphs do not overflow the call stack.
pub fn strongly_connected_components<Graph: StaticGraph>(graph: &Graph) -> Vec<Vec<usize>> {
    let n = graph.vertex_count();
    let mut discovery_order = vec![None; n];
    let mut low_link = vec![0; n];
    let mut on_stack = BitVector::new(n);
    let mut component_stack = Vec::new();
    let mut next_discovery_order = 0;
    let mut components = Vec::new();
    let mut dfs_stack = Vec::new();

    for &root in graph.enumeration_order() {
        if discovery_order[root].is_some() {
            continue;
        }

        discovery_order[root] = Some(next_discovery_order);
        low_link[root] = next_discovery_order;
        next_discovery_order += 1;
        component_stack.push(root);
        on_stack.insert(root);
        dfs_stack.push(DfsFrame::new(root, None));

        while let Some(frame) = dfs_stack.last_mut() {
            let vertex = frame.vertex;
            let parent = frame.parent;

            if let Some(neighbor) = frame.next_neighbor(graph) {
                match discovery_order[neighbor] {
                    None => {
                        discovery_order[neighbor] = Some(next_discovery_order);
                        low_link[neighbor] = next_discovery_order;
                        next_discovery_order += 1;
                        component_stack.push(neighbor);
                        on_stack.insert(neighbor);
                        dfs_stack.push(DfsFrame::new(neighbor, Some(vertex)));
                    }
                    Some(order) => {
                        if on_stack.contains(neighbor) {
                            low_link[vertex] = low_link[vertex].min(order);
                        }
                    }
                }
                continue;
            }

            dfs_stack.pop();
            if let Some(parent) = parent {
                low_link[parent] = low_link[parent].min(low_link[vertex]);
            }

            if Some(low_link[vertex]) == discovery_order[vertex] {
                let mut component = Vec::new();
                while let Some(member) = component_stack.pop() {
                    on_stack.remove(member);
                    component.push(member);
                    if member == vertex {
                        break;
                    }
                }
                components.push(component);
            }
        }
    }

    debug!(
        "Found {} strongly connected components in a graph with {} vertices",
        components.len(),
        n
    );
    components
}
