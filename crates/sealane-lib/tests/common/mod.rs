//! Shared fixtures for integration tests.

#![allow(dead_code)]

use sealane_lib::{build_graph, haversine_distance, EdgeRecord, Graph, NodeId, NodeRecord, Point};

/// Three nodes along the equator, linked in a chain with unit weights:
/// 1 at (0, 0), 2 at (0, 1), 3 at (0, 2). There is no direct 1-3 edge.
pub fn chain_graph() -> Graph {
    build_graph(
        vec![
            NodeRecord {
                id: 1,
                lon: 0.0,
                lat: 0.0,
            },
            NodeRecord {
                id: 2,
                lon: 1.0,
                lat: 0.0,
            },
            NodeRecord {
                id: 3,
                lon: 2.0,
                lat: 0.0,
            },
        ],
        vec![
            EdgeRecord {
                from: 1,
                to: 2,
                distance: 1.0,
            },
            EdgeRecord {
                from: 2,
                to: 3,
                distance: 1.0,
            },
        ],
    )
}

/// Rook-connected lattice of `height` rows by `width` columns, nodes spaced
/// one degree apart, edge weights equal to the great-circle distance
/// between their endpoints. Node ids are `row * width + col`.
pub fn lattice_graph(width: i64, height: i64) -> Graph {
    let mut nodes = Vec::new();
    let mut edges = Vec::new();

    for row in 0..height {
        for col in 0..width {
            nodes.push(NodeRecord {
                id: lattice_id(width, row, col),
                lon: col as f64,
                lat: row as f64,
            });
        }
    }
    for row in 0..height {
        for col in 0..width {
            if col + 1 < width {
                edges.push(lattice_edge(width, (row, col), (row, col + 1)));
            }
            if row + 1 < height {
                edges.push(lattice_edge(width, (row, col), (row + 1, col)));
            }
        }
    }

    build_graph(nodes, edges)
}

/// Node id at a lattice position.
pub fn lattice_id(width: i64, row: i64, col: i64) -> NodeId {
    row * width + col
}

fn lattice_edge(width: i64, a: (i64, i64), b: (i64, i64)) -> EdgeRecord {
    EdgeRecord {
        from: lattice_id(width, a.0, a.1),
        to: lattice_id(width, b.0, b.1),
        distance: haversine_distance(
            &Point::new(a.0 as f64, a.1 as f64),
            &Point::new(b.0 as f64, b.1 as f64),
        ),
    }
}

/// Brute-force nearest node by great-circle distance, for cross-checking
/// the grid-backed resolver.
pub fn brute_force_nearest(graph: &Graph, point: Point) -> Option<NodeId> {
    let mut best: Option<(NodeId, f64)> = None;
    for node in graph.nodes() {
        let distance = point.distance_to(&node.position());
        match best {
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((node.id, distance)),
        }
    }
    best.map(|(id, _)| id)
}
