//! Minimum spanning trees: Prim's and Kruskal's algorithms.
//!
//! Prim mirrors Dijkstra's heap loop but relaxes on raw edge weight
//! (greedy local-edge selection instead of path-cost accumulation) and
//! keeps the input's directedness. Kruskal drains an edge min-heap against
//! a parent-pointer forest and always produces an undirected result.

use std::collections::BinaryHeap;

use super::shortest_path::{build_tree, MinState, VertexInfo};
use crate::error::{GraphError, Result};
use crate::graph::{EdgeWeight, Graph, VertexId};

/// Grow a spanning tree from `start` by repeatedly attaching the cheapest
/// edge that leaves the tree.
///
/// The result graph contains the vertices reachable from `start` and, for
/// each (except `start` itself), the edge that attached it. Weights are
/// assumed non-negative and are not checked.
///
/// # Errors
///
/// [`GraphError::UnknownVertex`] if `start` is not part of `graph`.
pub fn prim_mst<V, E>(graph: &Graph<V, E>, start: VertexId) -> Result<Graph<V, E>>
where
    V: Clone,
    E: Clone + EdgeWeight,
{
    if !graph.contains_vertex(start) {
        return Err(GraphError::UnknownVertex(start));
    }

    let n = graph.vertex_count();
    let mut info: Vec<VertexInfo> = vec![VertexInfo::fresh(); n];
    info[start.index()].distance = 0.0;

    let mut heap = BinaryHeap::new();
    heap.push(MinState {
        cost: 0.0,
        item: start.index(),
    });

    while let Some(MinState { item: v, .. }) = heap.pop() {
        if info[v].finalised {
            continue; // stale entry, lazy deletion
        }
        info[v].finalised = true;

        #[allow(clippy::cast_possible_truncation)]
        let v_id = VertexId(v as u32);
        for e in graph.emanating_edges(v_id)? {
            let successor = graph.partner(e, v_id)?;
            let s = successor.index();
            if info[s].finalised {
                continue;
            }

            // Raw edge weight, not accumulated distance: that single change
            // turns Dijkstra's loop into Prim's.
            let weight = graph
                .edge(e)
                .map(|edge| edge.data.weight())
                .unwrap_or(f32::INFINITY);
            if weight < info[s].distance {
                info[s].distance = weight;
                info[s].edge_followed = Some(e);
                heap.push(MinState {
                    cost: weight,
                    item: s,
                });
            }
        }
    }

    Ok(build_tree(graph, &info).into_tree())
}

/// Parent-pointer forest: plain root-walking `find`, no rank or path
/// compression.
fn find_root(parent: &[usize], v: usize) -> usize {
    let mut root = v;
    while parent[root] != root {
        root = parent[root];
    }
    root
}

/// Build a minimum spanning forest by taking edges in ascending weight
/// order and rejecting any that would close a cycle.
///
/// All vertices of the input appear in the result; components of the input
/// become trees of the forest. Stops once `|V| - 1` edges are selected or
/// the edge heap is exhausted. The result is always undirected, whatever
/// the input's directedness.
///
/// # Example
///
/// ```
/// use quiver_graph::{algorithms::kruskal_mst, Graph};
///
/// let mut graph: Graph<(), f32> = Graph::undirected();
/// let a = graph.add_vertex(());
/// let b = graph.add_vertex(());
/// let c = graph.add_vertex(());
/// graph.add_edge_with(a, b, 1.0).unwrap();
/// graph.add_edge_with(b, c, 2.0).unwrap();
/// graph.add_edge_with(a, c, 9.0).unwrap(); // closes a cycle, rejected
///
/// let forest = kruskal_mst(&graph);
/// assert_eq!(forest.edge_count(), 2);
/// ```
#[must_use]
pub fn kruskal_mst<V, E>(graph: &Graph<V, E>) -> Graph<V, E>
where
    V: Clone,
    E: Clone + EdgeWeight,
{
    let n = graph.vertex_count();
    let mut forest = Graph::undirected();
    let mut mapping = Vec::with_capacity(n);
    for v in graph.vertex_ids() {
        if let Some(data) = graph.vertex(v) {
            mapping.push(forest.add_vertex(data.clone()));
        }
    }

    let mut heap = BinaryHeap::new();
    for (id, edge) in graph.edges() {
        heap.push(MinState {
            cost: edge.data.weight(),
            item: id.index(),
        });
    }

    let mut parent: Vec<usize> = (0..n).collect();
    let mut selected = 0;
    let quota = n.saturating_sub(1);

    while selected < quota {
        let Some(MinState { item, .. }) = heap.pop() else {
            break; // heap exhausted: input was disconnected
        };
        #[allow(clippy::cast_possible_truncation)]
        let Some(edge) = graph.edge(crate::graph::EdgeId(item as u32)) else {
            continue;
        };

        let root_from = find_root(&parent, edge.from().index());
        let root_to = find_root(&parent, edge.to().index());
        if root_from == root_to {
            continue; // would close a cycle (also skips self-loops)
        }

        parent[root_from] = root_to;
        let from = mapping[edge.from().index()];
        let to = mapping[edge.to().index()];
        // Endpoints exist in the forest by construction.
        let _ = forest.add_edge_with(from, to, edge.data.clone());
        selected += 1;
    }

    forest
}
