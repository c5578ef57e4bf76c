//! Topological ordering via Kahn's algorithm.
//!
//! A cyclic input is not an error: the emitted order simply stops short of
//! the full vertex count, and the caller checks `order.len()` against
//! [`Graph::vertex_count`]. Only an undirected input is rejected.

use std::collections::VecDeque;

use crate::error::{GraphError, Result};
use crate::graph::{Graph, VertexId};

/// Compute a topological order of a directed graph.
///
/// Kahn's algorithm: seed a queue with every in-degree-0 vertex, then
/// repeatedly dequeue, emit, and decrement successor in-degrees, enqueueing
/// vertices as they reach zero.
///
/// If the graph contains a cycle, the returned order covers only the acyclic
/// prefix: `order.len() < graph.vertex_count()` is the cycle signal, and the
/// prefix is a valid topological order of the vertices it contains. A fully
/// cyclic graph (no in-degree-0 vertex) yields an empty order.
///
/// # Errors
///
/// [`GraphError::RequiresDirected`] if `graph` is undirected.
///
/// # Example
///
/// ```
/// use quiver_graph::{algorithms::toposort, Graph};
///
/// let mut graph: Graph<&str, f32> = Graph::directed();
/// let a = graph.add_vertex("a");
/// let b = graph.add_vertex("b");
/// let c = graph.add_vertex("c");
/// graph.add_edge_with(a, b, 1.0).unwrap();
/// graph.add_edge_with(b, c, 1.0).unwrap();
///
/// let order = toposort(&graph).unwrap();
/// assert_eq!(order, vec![a, b, c]);
/// assert_eq!(order.len(), graph.vertex_count()); // acyclic
/// ```
pub fn toposort<V, E>(graph: &Graph<V, E>) -> Result<Vec<VertexId>> {
    if !graph.is_directed() {
        return Err(GraphError::RequiresDirected);
    }

    let n = graph.vertex_count();
    let mut in_degree = vec![0usize; n];
    for (_, edge) in graph.edges() {
        in_degree[edge.to().index()] += 1;
    }

    let mut queue: VecDeque<VertexId> = graph
        .vertex_ids()
        .filter(|v| in_degree[v.index()] == 0)
        .collect();
    let mut order = Vec::with_capacity(n);

    while let Some(v) = queue.pop_front() {
        order.push(v);

        for e in graph.emanating_edges(v)? {
            let successor = graph.partner(e, v)?;
            in_degree[successor.index()] -= 1;
            if in_degree[successor.index()] == 0 {
                queue.push_back(successor);
            }
        }
    }

    Ok(order)
}
