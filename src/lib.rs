//! quiver-graph: generic weighted graph engine
//!
//! # Overview
//!
//! quiver-graph provides a reusable directed-or-undirected graph with
//! generic vertex/edge payloads and the algorithms built on it: A*
//! pathfinding, Dijkstra shortest-path trees, Prim/Kruskal spanning trees,
//! elementary-cycle enumeration, Tarjan strongly connected components, and
//! DFS/BFS/topological traversal.
//!
//! # Quick Start
//!
//! ```
//! use quiver_graph::{algorithms::shortest_path_tree, Graph};
//!
//! // Build a weighted directed graph
//! let mut graph: Graph<&str, f32> = Graph::directed();
//! let hub = graph.add_vertex("hub");
//! let east = graph.add_vertex("east");
//! let west = graph.add_vertex("west");
//! graph.add_edge_with(hub, east, 2.0)?;
//! graph.add_edge_with(hub, west, 3.5)?;
//!
//! // Derive the shortest-path tree rooted at the hub
//! let paths = shortest_path_tree(&graph, hub)?;
//! assert_eq!(paths.distance(west), Some(3.5));
//! # Ok::<(), quiver_graph::GraphError>(())
//! ```
//!
//! # Architecture
//!
//! - **Model**: arena-backed `Graph<V, E>` with copyable vertex/edge handles
//! - **Capabilities**: payload traits (`EdgeWeight`, `Position2`, `Voltage`)
//!   bound per algorithm at compile time
//! - **Algorithms**: iterative walks throughout (explicit stacks, never
//!   native recursion), lazy priority-queue deletion for the heap searches
//! - **Concurrency**: single-threaded per call; A* serializes per graph
//!   instance via the graph's search gate

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod algorithms;
mod error;
pub mod graph;
pub mod voltage;

// Re-export core types
pub use algorithms::{
    astar, astar_with, bfs, cycle_status, dfs, find_cycles, find_cycles_from, kruskal_mst,
    minimum_cycle_length, prim_mst, shortest_path_tree, tarjan_scc, toposort, AstarPath,
    CycleStatus, ShortestPathTree,
};
pub use graph::{Edge, EdgeId, EdgeWeight, Graph, Position2, VertexId, Voltage};
pub use voltage::voltage_lift;

// Error type
pub use error::{GraphError, Result};
