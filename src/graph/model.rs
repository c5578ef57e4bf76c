//! Arena-backed graph representation.
//!
//! A [`Graph`] owns its vertices and edges in index arenas and hands out
//! copyable [`VertexId`]/[`EdgeId`] handles. Handles are only meaningful for
//! the graph that issued them; the model is grow-only, so handles never
//! dangle. Directedness and the self-loop policy are fixed at construction.

use std::fmt;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::error::{GraphError, Result};

/// Vertex handle issued by the owning [`Graph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(pub(crate) u32);

impl VertexId {
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// Edge handle issued by the owning [`Graph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(pub(crate) u32);

impl EdgeId {
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

/// An edge with immutable endpoints and a mutable payload.
///
/// Endpoint order is preserved even in undirected graphs, purely for
/// representation; traversal treats both directions equivalently when the
/// owning graph is undirected.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge<E> {
    from: VertexId,
    to: VertexId,
    /// Edge payload (weight, voltage, ...).
    pub data: E,
}

impl<E> Edge<E> {
    /// Source endpoint.
    #[must_use]
    pub fn from(&self) -> VertexId {
        self.from
    }

    /// Target endpoint.
    #[must_use]
    pub fn to(&self) -> VertexId {
        self.to
    }

    /// The endpoint that is not `v`, or `None` if `v` is not an endpoint.
    ///
    /// For a self-loop both endpoints equal `v`, so the partner is `v`.
    #[must_use]
    pub fn partner(&self, v: VertexId) -> Option<VertexId> {
        if v == self.from {
            Some(self.to)
        } else if v == self.to {
            Some(self.from)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Vertex<V> {
    data: V,
    incident: Vec<EdgeId>,
}

/// A weighted, directed-or-undirected graph with generic payloads.
///
/// Vertices carry `V`, edges carry `E`. Parallel edges are not merged or
/// rejected; callers keep graphs simple when the algorithms they run assume
/// it (cycle analysis in particular relies on no self-loops or parallel
/// edges).
///
/// # Example
///
/// ```
/// use quiver_graph::Graph;
///
/// let mut graph: Graph<&str, f32> = Graph::directed();
/// let a = graph.add_vertex("a");
/// let b = graph.add_vertex("b");
/// let ab = graph.add_edge_with(a, b, 2.5).unwrap();
///
/// assert_eq!(graph.vertex_count(), 2);
/// assert_eq!(graph.edge(ab).unwrap().to(), b);
/// ```
#[derive(Debug)]
pub struct Graph<V, E> {
    vertices: Vec<Vertex<V>>,
    edges: Vec<Edge<E>>,
    directed: bool,
    allows_self_loops: bool,
    // Serializes concurrent A* searches against this graph instance.
    search_gate: Mutex<()>,
}

// Manual impl: the search gate carries no data, so equality is determined
// by the graph contents alone (a derive is blocked by the `Mutex` field).
impl<V: PartialEq, E: PartialEq> PartialEq for Graph<V, E> {
    fn eq(&self, other: &Self) -> bool {
        self.vertices == other.vertices
            && self.edges == other.edges
            && self.directed == other.directed
            && self.allows_self_loops == other.allows_self_loops
    }
}

impl<V, E> Graph<V, E> {
    /// Create an empty directed graph.
    #[must_use]
    pub fn directed() -> Self {
        Self::with_directedness(true)
    }

    /// Create an empty undirected graph.
    #[must_use]
    pub fn undirected() -> Self {
        Self::with_directedness(false)
    }

    fn with_directedness(directed: bool) -> Self {
        Self {
            vertices: Vec::new(),
            edges: Vec::new(),
            directed,
            allows_self_loops: false,
            search_gate: Mutex::new(()),
        }
    }

    /// Opt in or out of self-loop edges (default: disallowed).
    #[must_use]
    pub fn with_self_loops(mut self, allow: bool) -> Self {
        self.allows_self_loops = allow;
        self
    }

    /// Whether edges are traversed from source to target only.
    #[must_use]
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Whether edges from a vertex to itself are accepted.
    #[must_use]
    pub fn allows_self_loops(&self) -> bool {
        self.allows_self_loops
    }

    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Insert a vertex carrying `data` and return its handle.
    pub fn add_vertex(&mut self, data: V) -> VertexId {
        #[allow(clippy::cast_possible_truncation)] // Graphs >4B vertices not supported
        let id = VertexId(self.vertices.len() as u32);
        self.vertices.push(Vertex {
            data,
            incident: Vec::new(),
        });
        id
    }

    /// Insert an edge with an explicit payload and return its handle.
    ///
    /// # Errors
    ///
    /// [`GraphError::UnknownVertex`] if either endpoint is not part of this
    /// graph; [`GraphError::SelfLoop`] if `from == to` and self-loops are
    /// disallowed.
    pub fn add_edge_with(&mut self, from: VertexId, to: VertexId, data: E) -> Result<EdgeId> {
        if !self.contains_vertex(from) {
            return Err(GraphError::UnknownVertex(from));
        }
        if !self.contains_vertex(to) {
            return Err(GraphError::UnknownVertex(to));
        }
        if from == to && !self.allows_self_loops {
            return Err(GraphError::SelfLoop);
        }

        #[allow(clippy::cast_possible_truncation)]
        let id = EdgeId(self.edges.len() as u32);
        self.edges.push(Edge { from, to, data });

        // A self-loop registers once so incident iteration stays duplicate-free.
        self.vertices[from.index()].incident.push(id);
        if from != to {
            self.vertices[to.index()].incident.push(id);
        }

        Ok(id)
    }

    /// Whether `v` was issued by this graph.
    #[must_use]
    pub fn contains_vertex(&self, v: VertexId) -> bool {
        v.index() < self.vertices.len()
    }

    /// Whether `e` was issued by this graph.
    #[must_use]
    pub fn contains_edge(&self, e: EdgeId) -> bool {
        e.index() < self.edges.len()
    }

    /// Payload of vertex `v`.
    #[must_use]
    pub fn vertex(&self, v: VertexId) -> Option<&V> {
        self.vertices.get(v.index()).map(|vertex| &vertex.data)
    }

    /// Mutable payload of vertex `v`.
    pub fn vertex_mut(&mut self, v: VertexId) -> Option<&mut V> {
        self.vertices.get_mut(v.index()).map(|vertex| &mut vertex.data)
    }

    /// Edge `e` with its endpoints and payload.
    #[must_use]
    pub fn edge(&self, e: EdgeId) -> Option<&Edge<E>> {
        self.edges.get(e.index())
    }

    /// Mutable payload of edge `e` (endpoints stay immutable).
    pub fn edge_data_mut(&mut self, e: EdgeId) -> Option<&mut E> {
        self.edges.get_mut(e.index()).map(|edge| &mut edge.data)
    }

    /// All vertex handles in insertion order.
    #[allow(clippy::cast_possible_truncation)]
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> {
        (0..self.vertices.len() as u32).map(VertexId)
    }

    /// All edges with their handles, in insertion order.
    #[allow(clippy::cast_possible_truncation)]
    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, &Edge<E>)> {
        self.edges
            .iter()
            .enumerate()
            .map(|(i, edge)| (EdgeId(i as u32), edge))
    }

    /// Edges incident to `v`, in insertion order (deterministic iteration).
    ///
    /// # Errors
    ///
    /// [`GraphError::UnknownVertex`] if `v` is not part of this graph.
    pub fn incident_edges(&self, v: VertexId) -> Result<&[EdgeId]> {
        self.vertices
            .get(v.index())
            .map(|vertex| vertex.incident.as_slice())
            .ok_or(GraphError::UnknownVertex(v))
    }

    /// Number of edges incident to `v`.
    ///
    /// # Errors
    ///
    /// [`GraphError::UnknownVertex`] if `v` is not part of this graph.
    pub fn degree(&self, v: VertexId) -> Result<usize> {
        self.incident_edges(v).map(<[EdgeId]>::len)
    }

    /// Edges emanating from `v`.
    ///
    /// For a directed graph these are the edges where `v` is the source; for
    /// an undirected graph all incident edges emanate.
    ///
    /// # Errors
    ///
    /// [`GraphError::UnknownVertex`] if `v` is not part of this graph.
    pub fn emanating_edges(&self, v: VertexId) -> Result<impl Iterator<Item = EdgeId> + '_> {
        let incident = self.incident_edges(v)?;
        let directed = self.directed;
        Ok(incident
            .iter()
            .copied()
            .filter(move |&e| !directed || self.edges[e.index()].from == v))
    }

    /// Vertices reachable from `v` across one emanating edge.
    ///
    /// # Errors
    ///
    /// [`GraphError::UnknownVertex`] if `v` is not part of this graph.
    pub fn neighbors(&self, v: VertexId) -> Result<impl Iterator<Item = VertexId> + '_> {
        let emanating = self.emanating_edges(v)?;
        Ok(emanating.map(move |e| {
            let edge = &self.edges[e.index()];
            if edge.from == v {
                edge.to
            } else {
                edge.from
            }
        }))
    }

    /// The endpoint of `e` that is not `v`.
    ///
    /// # Errors
    ///
    /// [`GraphError::UnknownEdge`] if `e` is not part of this graph;
    /// [`GraphError::UnknownVertex`] if `v` is not an endpoint of `e`.
    pub fn partner(&self, e: EdgeId, v: VertexId) -> Result<VertexId> {
        let edge = self.edge(e).ok_or(GraphError::UnknownEdge(e))?;
        edge.partner(v).ok_or(GraphError::UnknownVertex(v))
    }

    /// Acquire the search gate serializing A* runs against this graph.
    ///
    /// A poisoned gate is recovered: the guard only orders searches, it
    /// protects no data of its own.
    pub(crate) fn search_gate(&self) -> MutexGuard<'_, ()> {
        self.search_gate.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<V: Clone, E: Clone> Clone for Graph<V, E> {
    fn clone(&self) -> Self {
        Self {
            vertices: self.vertices.clone(),
            edges: self.edges.clone(),
            directed: self.directed,
            allows_self_loops: self.allows_self_loops,
            search_gate: Mutex::new(()),
        }
    }
}

impl<V, E: Default> Graph<V, E> {
    /// Insert an edge with a defaulted payload and return its handle.
    ///
    /// # Errors
    ///
    /// Same contract as [`Graph::add_edge_with`].
    pub fn add_edge(&mut self, from: VertexId, to: VertexId) -> Result<EdgeId> {
        self.add_edge_with(from, to, E::default())
    }
}

impl<V, E> Default for Graph<V, E> {
    /// An empty undirected graph with self-loops disallowed.
    fn default() -> Self {
        Self::undirected()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_graph() {
        let graph: Graph<(), f32> = Graph::directed();
        assert_eq!(graph.vertex_count(), 0);
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.is_directed());
    }

    #[test]
    fn test_add_vertices_and_edges() {
        let mut graph: Graph<&str, f32> = Graph::directed();
        let a = graph.add_vertex("a");
        let b = graph.add_vertex("b");
        let c = graph.add_vertex("c");

        let ab = graph.add_edge_with(a, b, 1.0).unwrap();
        let ac = graph.add_edge_with(a, c, 2.0).unwrap();

        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.vertex(a), Some(&"a"));
        assert_eq!(graph.edge(ab).unwrap().from(), a);
        assert_eq!(graph.edge(ac).unwrap().to(), c);
    }

    #[test]
    fn test_self_loop_rejected_by_default() {
        let mut graph: Graph<(), f32> = Graph::directed();
        let a = graph.add_vertex(());
        assert_eq!(graph.add_edge_with(a, a, 1.0), Err(GraphError::SelfLoop));
    }

    #[test]
    fn test_self_loop_allowed_when_opted_in() {
        let mut graph: Graph<(), f32> = Graph::directed().with_self_loops(true);
        let a = graph.add_vertex(());
        let aa = graph.add_edge_with(a, a, 1.0).unwrap();

        // Registered once on the incident list.
        assert_eq!(graph.incident_edges(a).unwrap(), &[aa]);
        assert_eq!(graph.partner(aa, a).unwrap(), a);
    }

    #[test]
    fn test_unknown_vertex_rejected() {
        let mut graph: Graph<(), f32> = Graph::directed();
        let a = graph.add_vertex(());
        let ghost = VertexId(42);
        assert_eq!(
            graph.add_edge_with(a, ghost, 1.0),
            Err(GraphError::UnknownVertex(ghost))
        );
    }

    #[test]
    fn test_emanating_directed() {
        let mut graph: Graph<(), f32> = Graph::directed();
        let a = graph.add_vertex(());
        let b = graph.add_vertex(());
        let ab = graph.add_edge_with(a, b, 1.0).unwrap();

        let from_a: Vec<_> = graph.emanating_edges(a).unwrap().collect();
        let from_b: Vec<_> = graph.emanating_edges(b).unwrap().collect();

        assert_eq!(from_a, vec![ab]);
        assert!(from_b.is_empty(), "directed edge must not emanate from its target");
    }

    #[test]
    fn test_emanating_undirected() {
        let mut graph: Graph<(), f32> = Graph::undirected();
        let a = graph.add_vertex(());
        let b = graph.add_vertex(());
        let ab = graph.add_edge_with(a, b, 1.0).unwrap();

        let from_b: Vec<_> = graph.emanating_edges(b).unwrap().collect();
        assert_eq!(from_b, vec![ab]);

        let neighbors: Vec<_> = graph.neighbors(b).unwrap().collect();
        assert_eq!(neighbors, vec![a]);
    }

    #[test]
    fn test_partner() {
        let mut graph: Graph<(), f32> = Graph::undirected();
        let a = graph.add_vertex(());
        let b = graph.add_vertex(());
        let c = graph.add_vertex(());
        let ab = graph.add_edge_with(a, b, 1.0).unwrap();

        assert_eq!(graph.partner(ab, a).unwrap(), b);
        assert_eq!(graph.partner(ab, b).unwrap(), a);
        assert_eq!(graph.partner(ab, c), Err(GraphError::UnknownVertex(c)));
        assert_eq!(
            graph.partner(EdgeId(9), a),
            Err(GraphError::UnknownEdge(EdgeId(9)))
        );
    }

    #[test]
    fn test_default_edge_payload() {
        let mut graph: Graph<(), f32> = Graph::directed();
        let a = graph.add_vertex(());
        let b = graph.add_vertex(());
        let ab = graph.add_edge(a, b).unwrap();
        assert_eq!(graph.edge(ab).unwrap().data, 0.0);
    }

    #[test]
    fn test_parallel_edges_not_merged() {
        let mut graph: Graph<(), f32> = Graph::directed();
        let a = graph.add_vertex(());
        let b = graph.add_vertex(());
        graph.add_edge_with(a, b, 1.0).unwrap();
        graph.add_edge_with(a, b, 2.0).unwrap();

        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.degree(a).unwrap(), 2);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut graph: Graph<&str, f32> = Graph::directed();
        let a = graph.add_vertex("a");
        let mut copy = graph.clone();
        copy.add_vertex("b");

        assert_eq!(graph.vertex_count(), 1);
        assert_eq!(copy.vertex_count(), 2);
        assert_eq!(copy.vertex(a), Some(&"a"));
    }

    #[test]
    fn test_edge_data_mut() {
        let mut graph: Graph<(), f32> = Graph::directed();
        let a = graph.add_vertex(());
        let b = graph.add_vertex(());
        let ab = graph.add_edge_with(a, b, 1.0).unwrap();

        *graph.edge_data_mut(ab).unwrap() = 7.5;
        assert_eq!(graph.edge(ab).unwrap().data, 7.5);
    }
}
