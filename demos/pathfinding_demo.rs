//! Pathfinding demo: A* versus a full Dijkstra tree on a small road map.
//!
//! Run with: `cargo run --example pathfinding_demo`

use quiver_graph::{astar, shortest_path_tree, Graph, GraphError};

fn main() -> Result<(), GraphError> {
    // Positions are kilometres on a flat map; weights are road lengths.
    let mut map: Graph<(f32, f32), f32> = Graph::undirected();
    let depot = map.add_vertex((0.0, 0.0));
    let north = map.add_vertex((0.0, 4.0));
    let east = map.add_vertex((5.0, 0.0));
    let ridge = map.add_vertex((3.0, 4.0));
    let summit = map.add_vertex((6.0, 5.0));

    map.add_edge_with(depot, north, 4.0)?;
    map.add_edge_with(depot, east, 5.0)?;
    map.add_edge_with(north, ridge, 3.2)?;
    map.add_edge_with(east, ridge, 4.8)?;
    map.add_edge_with(ridge, summit, 3.5)?;
    map.add_edge_with(east, summit, 5.4)?;

    println!("map: {} vertices, {} roads", map.vertex_count(), map.edge_count());

    // Point-to-point: A* with the built-in Euclidean heuristic.
    match astar(&map, depot, summit)? {
        Some(path) => {
            println!("depot → summit: {:.1} km over {} roads", path.cost, path.edges.len());
            for v in &path.vertices {
                if let Some((x, y)) = map.vertex(*v) {
                    println!("  via {v} at ({x}, {y})");
                }
            }
        }
        None => println!("summit unreachable"),
    }

    // One-to-all: the Dijkstra tree answers every destination at once.
    let paths = shortest_path_tree(&map, depot)?;
    println!("\ndistances from depot:");
    for v in map.vertex_ids() {
        match paths.distance(v) {
            Some(d) => println!("  {v}: {d:.1} km"),
            None => println!("  {v}: unreachable"),
        }
    }

    Ok(())
}
