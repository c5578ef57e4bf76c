//! Voltage-graph covering-space lifts.
//!
//! A voltage graph assigns each edge an integer in `[0, order)`. Its lift
//! of order `n` has `n` fibre copies of every vertex; an edge `u → v` with
//! voltage `w` lifts to the `n` edges `(u, i) → (v, (i + w) mod n)`. The
//! lift is a pure derivation: the input graph is never mutated.

use crate::error::{GraphError, Result};
use crate::graph::{Graph, VertexId, Voltage};

/// Derive the covering-space lift of `graph` with group order `order`.
///
/// The lift preserves the input's directedness and self-loop policy.
/// Vertex fibres are laid out contiguously, so the copies of the input's
/// first vertex come first, in fibre order.
///
/// # Errors
///
/// [`GraphError::InvalidOrder`] if `order` is zero;
/// [`GraphError::VoltageOutOfRange`] if any edge voltage is `>= order`.
///
/// # Example
///
/// ```
/// use quiver_graph::{voltage_lift, Graph};
///
/// // Single vertex with a voltage-1 self-loop lifts to a 3-cycle.
/// let mut graph: Graph<(), u32> = Graph::directed().with_self_loops(true);
/// let v = graph.add_vertex(());
/// graph.add_edge_with(v, v, 1).unwrap();
///
/// let lift = voltage_lift(&graph, 3).unwrap();
/// assert_eq!(lift.vertex_count(), 3);
/// assert_eq!(lift.edge_count(), 3);
/// ```
pub fn voltage_lift<V, E>(graph: &Graph<V, E>, order: u32) -> Result<Graph<V, E>>
where
    V: Clone,
    E: Clone + Voltage,
{
    if order == 0 {
        return Err(GraphError::InvalidOrder);
    }
    for (_, edge) in graph.edges() {
        let voltage = edge.data.voltage();
        if voltage >= order {
            return Err(GraphError::VoltageOutOfRange { voltage, order });
        }
    }

    let mut lift = if graph.is_directed() {
        Graph::directed()
    } else {
        Graph::undirected()
    };
    lift = lift.with_self_loops(graph.allows_self_loops());

    // fibre(v, i) is the i-th copy of v; fibres are contiguous.
    let mut fibres: Vec<Vec<VertexId>> = Vec::with_capacity(graph.vertex_count());
    for v in graph.vertex_ids() {
        let mut fibre = Vec::with_capacity(order as usize);
        if let Some(data) = graph.vertex(v) {
            for _ in 0..order {
                fibre.push(lift.add_vertex(data.clone()));
            }
        }
        fibres.push(fibre);
    }

    for (_, edge) in graph.edges() {
        let voltage = edge.data.voltage();
        for i in 0..order {
            let from = fibres[edge.from().index()][i as usize];
            let to = fibres[edge.to().index()][((i + voltage) % order) as usize];
            lift.add_edge_with(from, to, edge.data.clone())?;
        }
    }

    Ok(lift)
}
