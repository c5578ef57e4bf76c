//! Capability traits for vertex and edge payloads.
//!
//! Algorithms constrain payload types at compile time instead of checking
//! capabilities at runtime: Dijkstra/Prim/Kruskal need [`EdgeWeight`], the
//! default A* heuristic needs [`Position2`], and the voltage-graph lift
//! needs [`Voltage`].

/// Edge payloads that expose a scalar traversal cost.
///
/// Weights are assumed non-negative by every algorithm that consumes them;
/// negative weights produce undefined (non-shortest) results and are not
/// checked.
pub trait EdgeWeight {
    /// The cost of traversing this edge.
    fn weight(&self) -> f32;
}

impl EdgeWeight for f32 {
    fn weight(&self) -> f32 {
        *self
    }
}

/// Vertex payloads that expose a 2D position.
///
/// Used by the default A* heuristic (Euclidean distance between vertex
/// positions).
pub trait Position2 {
    /// Position of this vertex in the plane.
    fn position(&self) -> (f32, f32);
}

impl Position2 for (f32, f32) {
    fn position(&self) -> (f32, f32) {
        *self
    }
}

impl Position2 for [f32; 2] {
    fn position(&self) -> (f32, f32) {
        (self[0], self[1])
    }
}

/// Edge payloads that carry an integer voltage for covering-space lifts.
///
/// A lift of order `n` requires every voltage to lie in `[0, n)`.
pub trait Voltage {
    /// The group element assigned to this edge.
    fn voltage(&self) -> u32;
}

impl Voltage for u32 {
    fn voltage(&self) -> u32 {
        *self
    }
}
