//! Graph algorithms: traversal, topological order, cycle analysis,
//! pathfinding, and spanning trees.

pub mod astar;
pub mod cycles;
pub mod mst;
pub mod scc;
pub mod shortest_path;
pub mod topo;
pub mod traversal;

pub use astar::{astar, astar_with, euclidean, AstarPath};
pub use cycles::{cycle_status, find_cycles, find_cycles_from, minimum_cycle_length, CycleStatus};
pub use mst::{kruskal_mst, prim_mst};
pub use scc::tarjan_scc;
pub use shortest_path::{shortest_path_tree, ShortestPathTree};
pub use topo::toposort;
pub use traversal::{bfs, dfs};
