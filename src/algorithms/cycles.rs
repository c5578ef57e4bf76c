//! Brute-force elementary cycle enumeration.
//!
//! All entry points share one walk: from a start vertex, extend the current
//! walk along emanating edges to vertices not already on it, and record a
//! cycle whenever the current vertex has a neighbor equal to the start while
//! the vertex immediately before it is not the start (that guard keeps the
//! edge just walked over from being reported as a spurious 2-cycle).
//!
//! The walk assumes a simple graph: self-loops and parallel edges are never
//! reported, and the length-3 early exit in [`minimum_cycle_length`] relies
//! on no shorter cycle existing. Cycles are recorded once per starting
//! vertex, so a triangle contributes three walks (six when undirected).
//! Exponential in the worst case; meant for small or sparse graphs.

use std::collections::HashSet;
use std::ops::ControlFlow;

use crate::error::Result;
use crate::graph::{Graph, VertexId};

/// Aggregate cycle statistics accumulated without materializing cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CycleStatus {
    /// Length of the shortest cycle found (0 when `count` is 0).
    pub shortest: usize,
    /// Length of the longest cycle found (0 when `count` is 0).
    pub longest: usize,
    /// Number of cycles recorded across all starting vertices.
    pub count: usize,
}

/// Walk frame: a vertex on the current walk and its unexpanded neighbors.
struct Frame {
    neighbors: Vec<VertexId>,
    next: usize,
}

/// Run the cycle walk from `start`, handing each recorded cycle (as the
/// current walk slice) to `on_cycle`. A `Break` aborts the whole walk.
fn walk_cycles<V, E, F>(graph: &Graph<V, E>, start: VertexId, on_cycle: &mut F) -> Result<ControlFlow<()>>
where
    F: FnMut(&[VertexId]) -> ControlFlow<()>,
{
    let collect_neighbors = |v: VertexId| -> Result<Vec<VertexId>> {
        Ok(graph.neighbors(v)?.collect())
    };

    let mut walk = vec![start];
    let mut on_walk: HashSet<VertexId> = HashSet::from([start]);
    let mut frames = vec![Frame {
        neighbors: collect_neighbors(start)?,
        next: 0,
    }];

    while let Some(frame) = frames.last_mut() {
        if frame.next < frame.neighbors.len() {
            let n = frame.neighbors[frame.next];
            frame.next += 1;

            if n == start {
                // Guard: the vertex before the current one must not be the
                // start, or we would report the walked-over edge itself.
                let walked_back = walk.len() < 2 || walk[walk.len() - 2] == start;
                if !walked_back && on_cycle(&walk).is_break() {
                    return Ok(ControlFlow::Break(()));
                }
            } else if !on_walk.contains(&n) {
                walk.push(n);
                on_walk.insert(n);
                frames.push(Frame {
                    neighbors: collect_neighbors(n)?,
                    next: 0,
                });
            }
        } else {
            frames.pop();
            if let Some(v) = walk.pop() {
                on_walk.remove(&v);
            }
        }
    }

    Ok(ControlFlow::Continue(()))
}

/// Materialize every elementary cycle recorded from every start vertex.
///
/// Each returned list is the walk that closed back to its first element.
#[must_use]
pub fn find_cycles<V, E>(graph: &Graph<V, E>) -> Vec<Vec<VertexId>> {
    let mut cycles = Vec::new();
    for start in graph.vertex_ids() {
        let mut record = |walk: &[VertexId]| {
            cycles.push(walk.to_vec());
            ControlFlow::Continue(())
        };
        // Start vertices come straight from the graph, so the walk cannot fail.
        let _ = walk_cycles(graph, start, &mut record);
    }
    cycles
}

/// Materialize the cycles recorded from a single start vertex.
///
/// # Errors
///
/// [`crate::GraphError::UnknownVertex`] if `start` is not part of `graph`.
pub fn find_cycles_from<V, E>(graph: &Graph<V, E>, start: VertexId) -> Result<Vec<Vec<VertexId>>> {
    let mut cycles = Vec::new();
    let mut record = |walk: &[VertexId]| {
        cycles.push(walk.to_vec());
        ControlFlow::Continue(())
    };
    walk_cycles(graph, start, &mut record)?;
    Ok(cycles)
}

/// Accumulate `(shortest, longest, count)` over the same walk as
/// [`find_cycles`], without allocating per-cycle lists.
///
/// `count` always equals `find_cycles(graph).len()`.
#[must_use]
pub fn cycle_status<V, E>(graph: &Graph<V, E>) -> CycleStatus {
    let mut status = CycleStatus::default();
    for start in graph.vertex_ids() {
        let mut tally = |walk: &[VertexId]| {
            let len = walk.len();
            if status.count == 0 {
                status.shortest = len;
                status.longest = len;
            } else {
                status.shortest = status.shortest.min(len);
                status.longest = status.longest.max(len);
            }
            status.count += 1;
            ControlFlow::Continue(())
        };
        let _ = walk_cycles(graph, start, &mut tally);
    }
    status
}

/// Length of the shortest cycle, or `None` if the graph is acyclic under
/// the walk.
///
/// Exits early the moment a length-3 cycle appears: in a simple graph (no
/// self-loops or parallel edges) no cycle can be shorter.
#[must_use]
pub fn minimum_cycle_length<V, E>(graph: &Graph<V, E>) -> Option<usize> {
    let mut shortest: Option<usize> = None;
    for start in graph.vertex_ids() {
        let mut probe = |walk: &[VertexId]| {
            let len = walk.len();
            shortest = Some(shortest.map_or(len, |s| s.min(len)));
            if len == 3 {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        };
        let _ = walk_cycles(graph, start, &mut probe);
        if shortest == Some(3) {
            break;
        }
    }
    shortest
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directed_triangle() -> (Graph<(), f32>, [VertexId; 3]) {
        let mut graph = Graph::directed();
        let a = graph.add_vertex(());
        let b = graph.add_vertex(());
        let c = graph.add_vertex(());
        graph.add_edge_with(a, b, 1.0).unwrap();
        graph.add_edge_with(b, c, 1.0).unwrap();
        graph.add_edge_with(c, a, 1.0).unwrap();
        (graph, [a, b, c])
    }

    #[test]
    fn test_acyclic_graph_has_no_cycles() {
        let mut graph: Graph<(), f32> = Graph::directed();
        let a = graph.add_vertex(());
        let b = graph.add_vertex(());
        let c = graph.add_vertex(());
        graph.add_edge_with(a, b, 1.0).unwrap();
        graph.add_edge_with(b, c, 1.0).unwrap();

        assert!(find_cycles(&graph).is_empty());
        assert_eq!(cycle_status(&graph), CycleStatus::default());
        assert_eq!(minimum_cycle_length(&graph), None);
    }

    #[test]
    fn test_directed_triangle_one_walk_per_start() {
        let (graph, [a, b, c]) = directed_triangle();

        let cycles = find_cycles(&graph);
        assert_eq!(cycles.len(), 3);
        assert!(cycles.contains(&vec![a, b, c]));
        assert!(cycles.contains(&vec![b, c, a]));
        assert!(cycles.contains(&vec![c, a, b]));
    }

    #[test]
    fn test_find_cycles_from_single_start() {
        let (graph, [a, b, c]) = directed_triangle();
        let cycles = find_cycles_from(&graph, a).unwrap();
        assert_eq!(cycles, vec![vec![a, b, c]]);
    }

    #[test]
    fn test_directed_pair_reports_no_cycle() {
        // The walked-over guard cannot distinguish a genuine directed
        // 2-cycle from an undirected walk-back, so a ↔ b records nothing.
        let mut graph: Graph<(), f32> = Graph::directed();
        let a = graph.add_vertex(());
        let b = graph.add_vertex(());
        graph.add_edge_with(a, b, 1.0).unwrap();
        graph.add_edge_with(b, a, 1.0).unwrap();

        assert!(find_cycles(&graph).is_empty());
        assert_eq!(cycle_status(&graph).count, 0);
    }

    #[test]
    fn test_undirected_triangle_both_directions() {
        let mut graph: Graph<(), f32> = Graph::undirected();
        let a = graph.add_vertex(());
        let b = graph.add_vertex(());
        let c = graph.add_vertex(());
        graph.add_edge_with(a, b, 1.0).unwrap();
        graph.add_edge_with(b, c, 1.0).unwrap();
        graph.add_edge_with(c, a, 1.0).unwrap();

        // Each start records the triangle in both rotations.
        let cycles = find_cycles(&graph);
        assert_eq!(cycles.len(), 6);
        assert!(cycles.iter().all(|c| c.len() == 3));
    }

    #[test]
    fn test_status_matches_enumeration() {
        // Triangle a-b-c plus a 4-cycle a-b-d-e sharing the a→b edge.
        let mut graph: Graph<(), f32> = Graph::directed();
        let a = graph.add_vertex(());
        let b = graph.add_vertex(());
        let c = graph.add_vertex(());
        let d = graph.add_vertex(());
        let e = graph.add_vertex(());
        graph.add_edge_with(a, b, 1.0).unwrap();
        graph.add_edge_with(b, c, 1.0).unwrap();
        graph.add_edge_with(c, a, 1.0).unwrap();
        graph.add_edge_with(b, d, 1.0).unwrap();
        graph.add_edge_with(d, e, 1.0).unwrap();
        graph.add_edge_with(e, a, 1.0).unwrap();

        let cycles = find_cycles(&graph);
        let status = cycle_status(&graph);

        assert_eq!(status.count, cycles.len());
        assert_eq!(
            status.shortest,
            cycles.iter().map(Vec::len).min().unwrap()
        );
        assert_eq!(
            status.longest,
            cycles.iter().map(Vec::len).max().unwrap()
        );
        assert_eq!(status.shortest, 3);
        assert_eq!(status.longest, 4);
    }

    #[test]
    fn test_minimum_length_matches_status() {
        let (graph, _) = directed_triangle();
        assert_eq!(minimum_cycle_length(&graph), Some(3));
        assert_eq!(minimum_cycle_length(&graph), Some(cycle_status(&graph).shortest));
    }

    #[test]
    fn test_minimum_length_longer_cycle() {
        // Single 4-cycle, no early exit possible.
        let mut graph: Graph<(), f32> = Graph::directed();
        let ids: Vec<_> = (0..4).map(|_| graph.add_vertex(())).collect();
        for i in 0..4 {
            graph.add_edge_with(ids[i], ids[(i + 1) % 4], 1.0).unwrap();
        }
        assert_eq!(minimum_cycle_length(&graph), Some(4));
    }

    #[test]
    fn test_unknown_start_rejected() {
        let graph: Graph<(), f32> = Graph::directed();
        let ghost = VertexId(3);
        assert!(find_cycles_from(&graph, ghost).is_err());
    }
}
