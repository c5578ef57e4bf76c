//! Single-source shortest paths: Dijkstra's algorithm.
//!
//! Produces a shortest-path tree as a derived graph, plus distance and
//! handle lookups keyed by the source graph's vertex handles. Stale heap
//! entries are skipped lazily via a per-vertex finalised flag instead of a
//! decrease-key heap.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use crate::error::{GraphError, Result};
use crate::graph::{EdgeId, EdgeWeight, Graph, VertexId};

/// Min-heap entry: `BinaryHeap` is a max-heap, so the ordering is reversed
/// on cost, with the item index as a deterministic tie-break.
#[derive(Clone, Copy)]
pub(crate) struct MinState {
    pub(crate) cost: f32,
    pub(crate) item: usize,
}

impl PartialEq for MinState {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost && self.item == other.item
    }
}

impl Eq for MinState {}

impl Ord for MinState {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .partial_cmp(&self.cost)
            .unwrap_or(Ordering::Equal)
            .then_with(|| self.item.cmp(&other.item))
    }
}

impl PartialOrd for MinState {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Per-vertex search state for one Dijkstra (or Prim) invocation.
#[derive(Clone, Copy)]
pub(crate) struct VertexInfo {
    pub(crate) distance: f32,
    pub(crate) edge_followed: Option<EdgeId>,
    pub(crate) finalised: bool,
}

impl VertexInfo {
    pub(crate) fn fresh() -> Self {
        Self {
            distance: f32::INFINITY,
            edge_followed: None,
            finalised: false,
        }
    }
}

/// A shortest-path tree rooted at a source vertex.
///
/// The derived graph contains the source plus every reached vertex, each
/// with exactly the predecessor edge used to reach it; the source has no
/// incoming edge. Lookups are keyed by the *source graph's* handles.
#[derive(Debug, Clone)]
pub struct ShortestPathTree<V, E> {
    tree: Graph<V, E>,
    distances: HashMap<VertexId, f32>,
    mapping: HashMap<VertexId, VertexId>,
}

impl<V, E> ShortestPathTree<V, E> {
    /// The derived tree graph.
    #[must_use]
    pub fn tree(&self) -> &Graph<V, E> {
        &self.tree
    }

    /// Consume the result, keeping only the tree graph.
    #[must_use]
    pub fn into_tree(self) -> Graph<V, E> {
        self.tree
    }

    /// Shortest distance from the source to `v` (a source-graph handle), or
    /// `None` if `v` was not reached.
    #[must_use]
    pub fn distance(&self, v: VertexId) -> Option<f32> {
        self.distances.get(&v).copied()
    }

    /// The tree-graph handle corresponding to source-graph vertex `v`.
    #[must_use]
    pub fn tree_vertex(&self, v: VertexId) -> Option<VertexId> {
        self.mapping.get(&v).copied()
    }

    /// Number of vertices reached from the source (including the source).
    #[must_use]
    pub fn reached_count(&self) -> usize {
        self.mapping.len()
    }
}

/// Compute shortest paths from `source` to every reachable vertex.
///
/// Edge weights are assumed non-negative; negative weights produce
/// undefined (non-shortest) results and are not checked.
///
/// # Errors
///
/// [`GraphError::UnknownVertex`] if `source` is not part of `graph`.
///
/// # Example
///
/// ```
/// use quiver_graph::{algorithms::shortest_path_tree, Graph};
///
/// let mut graph: Graph<&str, f32> = Graph::directed();
/// let a = graph.add_vertex("a");
/// let b = graph.add_vertex("b");
/// let c = graph.add_vertex("c");
/// graph.add_edge_with(a, b, 1.0).unwrap();
/// graph.add_edge_with(b, c, 2.0).unwrap();
/// graph.add_edge_with(a, c, 5.0).unwrap();
///
/// let paths = shortest_path_tree(&graph, a).unwrap();
/// assert_eq!(paths.distance(c), Some(3.0)); // a → b → c, not a → c
/// ```
pub fn shortest_path_tree<V, E>(graph: &Graph<V, E>, source: VertexId) -> Result<ShortestPathTree<V, E>>
where
    V: Clone,
    E: Clone + EdgeWeight,
{
    if !graph.contains_vertex(source) {
        return Err(GraphError::UnknownVertex(source));
    }

    let n = graph.vertex_count();
    let mut info: Vec<VertexInfo> = vec![VertexInfo::fresh(); n];
    info[source.index()].distance = 0.0;

    let mut heap = BinaryHeap::new();
    heap.push(MinState {
        cost: 0.0,
        item: source.index(),
    });

    while let Some(MinState { item: v, .. }) = heap.pop() {
        if info[v].finalised {
            // Stale duplicate left behind by a later relaxation.
            continue;
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

            let weight = graph
                .edge(e)
                .map(|edge| edge.data.weight())
                .unwrap_or(f32::INFINITY);
            let candidate = info[v].distance + weight;
            if candidate < info[s].distance {
                info[s].distance = candidate;
                info[s].edge_followed = Some(e);
                heap.push(MinState {
                    cost: candidate,
                    item: s,
                });
            }
        }
    }

    Ok(build_tree(graph, &info))
}

/// Materialize the derived graph from settled per-vertex search state.
///
/// Shared by Dijkstra and Prim: both record one predecessor edge per
/// finalised vertex.
pub(crate) fn build_tree<V, E>(graph: &Graph<V, E>, info: &[VertexInfo]) -> ShortestPathTree<V, E>
where
    V: Clone,
    E: Clone + EdgeWeight,
{
    let mut tree = if graph.is_directed() {
        Graph::directed()
    } else {
        Graph::undirected()
    };
    let mut distances = HashMap::new();
    let mut mapping: HashMap<VertexId, VertexId> = HashMap::new();

    for v in graph.vertex_ids() {
        let state = info[v.index()];
        if !state.finalised {
            continue;
        }
        if let Some(data) = graph.vertex(v) {
            let clone = tree.add_vertex(data.clone());
            mapping.insert(v, clone);
            distances.insert(v, state.distance);
        }
    }

    for v in graph.vertex_ids() {
        let state = info[v.index()];
        let Some(e) = state.edge_followed else {
            continue;
        };
        let Some(edge) = graph.edge(e) else { continue };
        let Some(predecessor) = edge.partner(v) else {
            continue;
        };
        if let (Some(&from), Some(&to)) = (mapping.get(&predecessor), mapping.get(&v)) {
            // Both endpoints were finalised, so insertion cannot fail.
            let _ = tree.add_edge_with(from, to, edge.data.clone());
        }
    }

    ShortestPathTree {
        tree,
        distances,
        mapping,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_edge() {
        let mut graph: Graph<(), f32> = Graph::directed();
        let a = graph.add_vertex(());
        let b = graph.add_vertex(());
        graph.add_edge_with(a, b, 5.0).unwrap();

        let paths = shortest_path_tree(&graph, a).unwrap();
        assert_eq!(paths.distance(a), Some(0.0));
        assert_eq!(paths.distance(b), Some(5.0));
    }

    #[test]
    fn test_shorter_path_via_intermediate() {
        // Direct a → c costs 5; a → b → c costs 3.
        let mut graph: Graph<(), f32> = Graph::directed();
        let a = graph.add_vertex(());
        let b = graph.add_vertex(());
        let c = graph.add_vertex(());
        graph.add_edge_with(a, b, 1.0).unwrap();
        graph.add_edge_with(b, c, 2.0).unwrap();
        graph.add_edge_with(a, c, 5.0).unwrap();

        let paths = shortest_path_tree(&graph, a).unwrap();
        assert_eq!(paths.distance(c), Some(3.0));
    }

    #[test]
    fn test_round_trip_scenario() {
        // a→b(1), b→c(1), a→c(5), c→d(1), b→d(10): distances 0/1/2/3.
        let mut graph: Graph<(), f32> = Graph::directed();
        let a = graph.add_vertex(());
        let b = graph.add_vertex(());
        let c = graph.add_vertex(());
        let d = graph.add_vertex(());
        graph.add_edge_with(a, b, 1.0).unwrap();
        graph.add_edge_with(b, c, 1.0).unwrap();
        graph.add_edge_with(a, c, 5.0).unwrap();
        graph.add_edge_with(c, d, 1.0).unwrap();
        graph.add_edge_with(b, d, 10.0).unwrap();

        let paths = shortest_path_tree(&graph, a).unwrap();
        assert_eq!(paths.distance(a), Some(0.0));
        assert_eq!(paths.distance(b), Some(1.0));
        assert_eq!(paths.distance(c), Some(2.0));
        assert_eq!(paths.distance(d), Some(3.0));

        // The tree keeps one predecessor edge per reached vertex.
        assert_eq!(paths.tree().vertex_count(), 4);
        assert_eq!(paths.tree().edge_count(), 3);
    }

    #[test]
    fn test_result_is_a_tree() {
        let mut graph: Graph<(), f32> = Graph::directed();
        let ids: Vec<_> = (0..6).map(|_| graph.add_vertex(())).collect();
        // Dense-ish mesh with varying weights.
        let weighted = [
            (0, 1, 2.0),
            (0, 2, 4.0),
            (1, 2, 1.0),
            (1, 3, 7.0),
            (2, 4, 3.0),
            (4, 3, 2.0),
            (3, 5, 1.0),
            (4, 5, 5.0),
        ];
        for &(f, t, w) in &weighted {
            graph.add_edge_with(ids[f], ids[t], w).unwrap();
        }

        let paths = shortest_path_tree(&graph, ids[0]).unwrap();
        assert_eq!(paths.reached_count(), 6);
        assert_eq!(
            paths.tree().edge_count(),
            paths.reached_count() - 1,
            "tree must have exactly reached-1 edges"
        );
    }

    #[test]
    fn test_unreachable_excluded() {
        let mut graph: Graph<(), f32> = Graph::directed();
        let a = graph.add_vertex(());
        let b = graph.add_vertex(());
        let island = graph.add_vertex(());
        graph.add_edge_with(a, b, 1.0).unwrap();

        let paths = shortest_path_tree(&graph, a).unwrap();
        assert_eq!(paths.distance(island), None);
        assert_eq!(paths.tree_vertex(island), None);
        assert_eq!(paths.tree().vertex_count(), 2);
    }

    #[test]
    fn test_undirected_walks_both_ways() {
        let mut graph: Graph<(), f32> = Graph::undirected();
        let a = graph.add_vertex(());
        let b = graph.add_vertex(());
        let c = graph.add_vertex(());
        graph.add_edge_with(b, a, 1.0).unwrap(); // endpoint order irrelevant
        graph.add_edge_with(b, c, 2.0).unwrap();

        let paths = shortest_path_tree(&graph, a).unwrap();
        assert_eq!(paths.distance(c), Some(3.0));
    }

    #[test]
    fn test_cycle_terminates() {
        let mut graph: Graph<(), f32> = Graph::directed();
        let a = graph.add_vertex(());
        let b = graph.add_vertex(());
        let c = graph.add_vertex(());
        graph.add_edge_with(a, b, 1.0).unwrap();
        graph.add_edge_with(b, c, 1.0).unwrap();
        graph.add_edge_with(c, a, 1.0).unwrap();

        let paths = shortest_path_tree(&graph, a).unwrap();
        assert_eq!(paths.distance(c), Some(2.0));
    }

    #[test]
    fn test_unknown_source_rejected() {
        let graph: Graph<(), f32> = Graph::directed();
        let ghost = VertexId(7);
        assert!(matches!(
            shortest_path_tree(&graph, ghost),
            Err(GraphError::UnknownVertex(_))
        ));
    }

    #[test]
    fn test_zero_weight_edges() {
        let mut graph: Graph<(), f32> = Graph::directed();
        let a = graph.add_vertex(());
        let b = graph.add_vertex(());
        let c = graph.add_vertex(());
        graph.add_edge_with(a, b, 0.0).unwrap();
        graph.add_edge_with(b, c, 0.0).unwrap();

        let paths = shortest_path_tree(&graph, a).unwrap();
        assert_eq!(paths.distance(c), Some(0.0));
    }
}
