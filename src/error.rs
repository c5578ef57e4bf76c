//! Error taxonomy for graph construction and algorithm preconditions.
//!
//! Algorithmic non-results (no path found, a cycle truncating a topological
//! order) are ordinary return values, not errors. Only invalid arguments and
//! precondition violations surface here.

use crate::graph::{EdgeId, VertexId};

/// Errors raised by graph mutation and algorithm preconditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// An edge between a vertex and itself was requested on a graph that
    /// disallows self-loops.
    #[error("self-loops are not allowed on this graph")]
    SelfLoop,

    /// A vertex handle does not belong to this graph.
    #[error("vertex {0} is not part of this graph")]
    UnknownVertex(VertexId),

    /// An edge handle does not belong to this graph.
    #[error("edge {0} is not part of this graph")]
    UnknownEdge(EdgeId),

    /// The operation is only defined for directed graphs.
    #[error("operation requires a directed graph")]
    RequiresDirected,

    /// A voltage-graph lift was requested with group order zero.
    #[error("lift order must be at least 1")]
    InvalidOrder,

    /// An edge voltage falls outside `[0, order)` for the requested lift.
    #[error("edge voltage {voltage} out of range for lift of order {order}")]
    VoltageOutOfRange {
        /// The offending edge voltage.
        voltage: u32,
        /// The requested group order.
        order: u32,
    },
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, GraphError>;
