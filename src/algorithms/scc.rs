//! Strongly connected components via Tarjan's algorithm.
//!
//! Iterative index/low-link DFS with an explicit frame stack, so component
//! depth is never bounded by the native call stack. Components come out in
//! reverse topological order (sink components first).

use crate::graph::{Graph, VertexId};

struct TarjanFrame {
    v: usize,
    next: usize,
}

/// Find the strongly connected components of a graph.
///
/// Each vertex receives a discovery index and a low-link (the smallest index
/// reachable through its DFS subtree plus back-edges); a vertex whose
/// low-link equals its own index roots a component, which is popped off the
/// component stack down to and including that vertex.
///
/// With `exclude_single` set, components of size 1 (vertices with no
/// self-cycle) are dropped from the result.
///
/// # Example
///
/// ```
/// use quiver_graph::{algorithms::tarjan_scc, Graph};
///
/// // x → y → z → x plus an isolated edge p → q
/// let mut graph: Graph<(), f32> = Graph::directed();
/// let x = graph.add_vertex(());
/// let y = graph.add_vertex(());
/// let z = graph.add_vertex(());
/// let p = graph.add_vertex(());
/// let q = graph.add_vertex(());
/// graph.add_edge_with(x, y, 1.0).unwrap();
/// graph.add_edge_with(y, z, 1.0).unwrap();
/// graph.add_edge_with(z, x, 1.0).unwrap();
/// graph.add_edge_with(p, q, 1.0).unwrap();
///
/// let components = tarjan_scc(&graph, true);
/// assert_eq!(components.len(), 1);
/// assert_eq!(components[0].len(), 3);
/// ```
#[must_use]
pub fn tarjan_scc<V, E>(graph: &Graph<V, E>, exclude_single: bool) -> Vec<Vec<VertexId>> {
    let n = graph.vertex_count();
    let mut index: Vec<Option<u32>> = vec![None; n];
    let mut low_link: Vec<u32> = vec![0; n];
    let mut on_stack: Vec<bool> = vec![false; n];
    let mut stack: Vec<usize> = Vec::new();
    let mut next_index: u32 = 0;
    let mut components: Vec<Vec<VertexId>> = Vec::new();

    // Adjacency snapshot up front keeps the frame stack free of iterators.
    let adjacency: Vec<Vec<usize>> = graph
        .vertex_ids()
        .map(|v| {
            graph
                .neighbors(v)
                .map(|iter| iter.map(VertexId::index).collect())
                .unwrap_or_default()
        })
        .collect();

    for root in graph.vertex_ids() {
        if index[root.index()].is_some() {
            continue;
        }

        let mut frames: Vec<TarjanFrame> = Vec::new();

        index[root.index()] = Some(next_index);
        low_link[root.index()] = next_index;
        next_index += 1;
        stack.push(root.index());
        on_stack[root.index()] = true;
        frames.push(TarjanFrame {
            v: root.index(),
            next: 0,
        });

        while let Some(frame) = frames.last_mut() {
            let v = frame.v;
            if frame.next < adjacency[v].len() {
                let w = adjacency[v][frame.next];
                frame.next += 1;

                if index[w].is_none() {
                    index[w] = Some(next_index);
                    low_link[w] = next_index;
                    next_index += 1;
                    stack.push(w);
                    on_stack[w] = true;
                    frames.push(TarjanFrame { v: w, next: 0 });
                } else if on_stack[w] {
                    // Back-edge into the current component.
                    if let Some(w_index) = index[w] {
                        low_link[v] = low_link[v].min(w_index);
                    }
                }
            } else {
                frames.pop();

                if Some(low_link[v]) == index[v] {
                    // v roots a component: pop down to and including it.
                    let mut component = Vec::new();
                    while let Some(w) = stack.pop() {
                        on_stack[w] = false;
                        #[allow(clippy::cast_possible_truncation)]
                        component.push(VertexId(w as u32));
                        if w == v {
                            break;
                        }
                    }
                    components.push(component);
                }

                if let Some(parent) = frames.last() {
                    low_link[parent.v] = low_link[parent.v].min(low_link[v]);
                }
            }
        }
    }

    if exclude_single {
        components.retain(|c| c.len() > 1);
    }
    components
}
