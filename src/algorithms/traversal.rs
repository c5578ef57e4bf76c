//! Graph traversal: depth-first and breadth-first visits.
//!
//! Both walks take a visitor that can short-circuit the traversal by
//! returning [`ControlFlow::Break`]; both return the vertices actually
//! visited, in visit order. The walks are iterative (explicit stack/queue),
//! so traversal depth is never bounded by the native call stack.

use std::collections::HashSet;
use std::collections::VecDeque;
use std::ops::ControlFlow;

use crate::error::Result;
use crate::graph::{Graph, VertexId};

/// Depth-first pre-order visit from `start`.
///
/// Neighbors are expanded in incident-edge insertion order. The visitor
/// receives each vertex handle and payload once; returning
/// [`ControlFlow::Break`] stops the walk immediately (the breaking vertex is
/// still included in the returned order).
///
/// # Errors
///
/// [`crate::GraphError::UnknownVertex`] if `start` is not part of `graph`.
///
/// # Example
///
/// ```
/// use std::ops::ControlFlow;
/// use quiver_graph::{algorithms::dfs, Graph};
///
/// let mut graph: Graph<&str, f32> = Graph::directed();
/// let a = graph.add_vertex("a");
/// let b = graph.add_vertex("b");
/// let c = graph.add_vertex("c");
/// graph.add_edge_with(a, b, 1.0).unwrap();
/// graph.add_edge_with(b, c, 1.0).unwrap();
///
/// let order = dfs(&graph, a, |_, _| ControlFlow::Continue(())).unwrap();
/// assert_eq!(order, vec![a, b, c]);
/// ```
pub fn dfs<V, E, F>(graph: &Graph<V, E>, start: VertexId, mut visit: F) -> Result<Vec<VertexId>>
where
    F: FnMut(VertexId, &V) -> ControlFlow<()>,
{
    // Validates start before any work.
    graph.incident_edges(start)?;

    let mut visited: HashSet<VertexId> = HashSet::new();
    let mut stack = vec![start];
    let mut order = Vec::new();

    while let Some(v) = stack.pop() {
        if !visited.insert(v) {
            continue;
        }
        order.push(v);

        if let Some(data) = graph.vertex(v) {
            if visit(v, data).is_break() {
                break;
            }
        }

        // Reverse push so the first incident edge is expanded first.
        let neighbors: Vec<VertexId> = graph.neighbors(v)?.collect();
        for n in neighbors.into_iter().rev() {
            if !visited.contains(&n) {
                stack.push(n);
            }
        }
    }

    Ok(order)
}

/// Breadth-first level-order visit from `start`.
///
/// Same visitor and short-circuit contract as [`dfs`].
///
/// # Errors
///
/// [`crate::GraphError::UnknownVertex`] if `start` is not part of `graph`.
pub fn bfs<V, E, F>(graph: &Graph<V, E>, start: VertexId, mut visit: F) -> Result<Vec<VertexId>>
where
    F: FnMut(VertexId, &V) -> ControlFlow<()>,
{
    graph.incident_edges(start)?;

    let mut visited: HashSet<VertexId> = HashSet::new();
    let mut queue = VecDeque::new();
    let mut order = Vec::new();

    visited.insert(start);
    queue.push_back(start);

    while let Some(v) = queue.pop_front() {
        order.push(v);

        if let Some(data) = graph.vertex(v) {
            if visit(v, data).is_break() {
                break;
            }
        }

        for n in graph.neighbors(v)?.collect::<Vec<_>>() {
            if visited.insert(n) {
                queue.push_back(n);
            }
        }
    }

    Ok(order)
}
