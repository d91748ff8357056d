mod common;

use common::{brute_force_nearest, lattice_graph, lattice_id};
use sealane_lib::{build_graph, nearest_node, NodeRecord, Point};

#[test]
fn grid_resolution_matches_brute_force_inside_the_network() {
    let graph = lattice_graph(10, 10);

    let queries = [
        Point::new(3.4, 6.7),
        Point::new(0.0, 0.0),
        Point::new(9.0, 9.0),
        Point::new(4.5, 4.49),
        Point::new(7.9, 0.2),
    ];
    for point in queries {
        assert_eq!(
            nearest_node(&graph, point),
            brute_force_nearest(&graph, point),
            "mismatch for {point:?}"
        );
    }
}

#[test]
fn exact_node_coordinates_resolve_to_that_node() {
    let graph = lattice_graph(10, 10);

    let resolved = nearest_node(&graph, Point::new(4.0, 7.0));
    assert_eq!(resolved, Some(lattice_id(10, 4, 7)));
}

#[test]
fn degenerate_single_latitude_network_still_resolves() {
    // Every node on one parallel: the grid's latitude axis collapses, and a
    // query far east of the bounding box misses every probed cell.
    let nodes: Vec<NodeRecord> = (0..50)
        .map(|id| NodeRecord {
            id,
            lon: id as f64,
            lat: 5.0,
        })
        .collect();
    let graph = build_graph(nodes, Vec::new());

    let query = Point::new(5.0, 300.0);
    let resolved = nearest_node(&graph, query);

    assert_eq!(resolved, brute_force_nearest(&graph, query));
    // Longitude wraps: 300 degrees east of node 0 is only 60 degrees west.
    assert_eq!(resolved, Some(0));
}

#[test]
fn point_far_outside_the_network_extent_resolves() {
    let graph = lattice_graph(10, 10);

    let query = Point::new(-80.0, 150.0);
    let resolved = nearest_node(&graph, query);

    assert!(resolved.is_some());
    assert_eq!(resolved, brute_force_nearest(&graph, query));
}

#[test]
fn empty_network_resolves_nothing() {
    let graph = build_graph(Vec::new(), Vec::new());
    assert_eq!(nearest_node(&graph, Point::new(0.0, 0.0)), None);
}
