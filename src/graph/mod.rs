//! Graph model: vertex/edge arenas, handles, and payload capability traits.

mod model;
mod traits;

pub use model::{Edge, EdgeId, Graph, VertexId};
pub use traits::{EdgeWeight, Position2, Voltage};
