//! A* pathfinding between two vertices.
//!
//! Search-frontier records (tracks) live in an arena with integer parent
//! indices, so path reconstruction is index-chasing with no ownership
//! ambiguity between the open list and the returned path. The open list is
//! a min-`f` binary heap with lazy invalidation: a per-vertex best-track
//! table supersedes stale entries instead of removing them eagerly.
//!
//! A whole `Search` call holds the owning graph's search gate, so
//! concurrent searches against the same graph serialize while unrelated
//! graphs proceed independently. The gate does not protect against a
//! caller mutating the graph mid-search from another thread.

use std::collections::{BinaryHeap, HashMap};

use super::shortest_path::MinState;
use crate::error::{GraphError, Result};
use crate::graph::{EdgeId, EdgeWeight, Graph, Position2, VertexId};

/// One search-frontier record: a vertex reached, the cost so far, the
/// heuristic estimate, and the arena index of the track it extends.
struct Track {
    end: VertexId,
    parent: Option<usize>,
    via: Option<EdgeId>,
    g: f32,
    h: f32,
    edges_visited: usize,
}

impl Track {
    fn f(&self) -> f32 {
        self.g + self.h
    }
}

/// A path found by [`astar`]/[`astar_with`]: edges chaining source to
/// target, the vertices they pass through, and the accumulated cost.
#[derive(Debug, Clone, PartialEq)]
pub struct AstarPath {
    /// Ordered edge sequence from source to target.
    pub edges: Vec<EdgeId>,
    /// Ordered vertex sequence, starting at the source and ending at the
    /// target (one longer than `edges`).
    pub vertices: Vec<VertexId>,
    /// Total weight of the edges on the path.
    pub cost: f32,
}

/// Euclidean distance between two positioned payloads — the default A*
/// heuristic, admissible whenever edge weights respect planar distance.
#[must_use]
pub fn euclidean<V: Position2>(from: &V, to: &V) -> f32 {
    let (x1, y1) = from.position();
    let (x2, y2) = to.position();
    let dx = x2 - x1;
    let dy = y2 - y1;
    (dx * dx + dy * dy).sqrt()
}

/// A* search with the default Euclidean heuristic.
///
/// # Errors
///
/// [`GraphError::UnknownVertex`] if `source` or `target` is not part of
/// `graph`. Exhausting the frontier without reaching `target` is not an
/// error: it returns `Ok(None)`.
///
/// # Example
///
/// ```
/// use quiver_graph::{algorithms::astar, Graph};
///
/// let mut graph: Graph<(f32, f32), f32> = Graph::undirected();
/// let a = graph.add_vertex((0.0, 0.0));
/// let b = graph.add_vertex((1.0, 0.0));
/// let c = graph.add_vertex((2.0, 0.0));
/// graph.add_edge_with(a, b, 1.0).unwrap();
/// graph.add_edge_with(b, c, 1.0).unwrap();
///
/// let path = astar(&graph, a, c).unwrap().expect("path exists");
/// assert_eq!(path.vertices, vec![a, b, c]);
/// assert_eq!(path.cost, 2.0);
/// ```
pub fn astar<V, E>(graph: &Graph<V, E>, source: VertexId, target: VertexId) -> Result<Option<AstarPath>>
where
    V: Position2,
    E: EdgeWeight,
{
    astar_with(graph, source, target, euclidean)
}

/// A* search with a caller-supplied heuristic `(vertex, target) -> estimate`.
///
/// The heuristic must be admissible (never overestimate the true remaining
/// cost) for the returned path to be optimal; a zero heuristic degenerates
/// to Dijkstra's search order.
///
/// # Errors
///
/// Same contract as [`astar`].
pub fn astar_with<V, E, H>(
    graph: &Graph<V, E>,
    source: VertexId,
    target: VertexId,
    mut heuristic: H,
) -> Result<Option<AstarPath>>
where
    E: EdgeWeight,
    H: FnMut(&V, &V) -> f32,
{
    let source_data = graph.vertex(source).ok_or(GraphError::UnknownVertex(source))?;
    let target_data = graph.vertex(target).ok_or(GraphError::UnknownVertex(target))?;

    // One concurrent search per graph instance.
    let _gate = graph.search_gate();

    let mut tracks: Vec<Track> = Vec::new();
    // Arena index of the best-known track per end vertex, open or closed.
    // Heap entries that no longer match are stale and skipped when popped,
    // and a cheaper successor supersedes (reopens) the incumbent.
    let mut best: HashMap<VertexId, usize> = HashMap::new();
    let mut open: BinaryHeap<MinState> = BinaryHeap::new();

    tracks.push(Track {
        end: source,
        parent: None,
        via: None,
        g: 0.0,
        h: heuristic(source_data, target_data),
        edges_visited: 0,
    });
    best.insert(source, 0);
    open.push(MinState {
        cost: tracks[0].f(),
        item: 0,
    });

    while let Some(MinState { item, .. }) = open.pop() {
        if best.get(&tracks[item].end) != Some(&item) {
            continue; // superseded by a cheaper track to the same vertex
        }
        let end = tracks[item].end;

        if end == target {
            return Ok(Some(reconstruct(&tracks, item)));
        }

        for e in graph.emanating_edges(end)?.collect::<Vec<_>>() {
            let successor = graph.partner(e, end)?;
            let weight = graph
                .edge(e)
                .map(|edge| edge.data.weight())
                .unwrap_or(f32::INFINITY);
            let g = tracks[item].g + weight;

            // A track of weight <= the candidate already reaches this
            // vertex (open or closed): discard the candidate. Otherwise the
            // inferior track is superseded and, if closed, reopened.
            if let Some(&incumbent) = best.get(&successor) {
                if tracks[incumbent].g <= g {
                    continue;
                }
            }

            let h = match graph.vertex(successor) {
                Some(data) => heuristic(data, target_data),
                None => continue,
            };
            let track = Track {
                end: successor,
                parent: Some(item),
                via: Some(e),
                g,
                h,
                edges_visited: tracks[item].edges_visited + 1,
            };
            let f = track.f();
            let index = tracks.len();
            tracks.push(track);
            best.insert(successor, index);
            open.push(MinState { cost: f, item: index });
        }
    }

    Ok(None)
}

/// Walk parent indices backward from the terminal track to build the
/// ordered edge sequence.
fn reconstruct(tracks: &[Track], terminal: usize) -> AstarPath {
    let length = tracks[terminal].edges_visited;
    let mut edges = Vec::with_capacity(length);
    let mut vertices = Vec::with_capacity(length + 1);

    let mut current = Some(terminal);
    while let Some(index) = current {
        let track = &tracks[index];
        vertices.push(track.end);
        if let Some(e) = track.via {
            edges.push(e);
        }
        current = track.parent;
    }

    edges.reverse();
    vertices.reverse();
    AstarPath {
        edges,
        vertices,
        cost: tracks[terminal].g,
    }
}
