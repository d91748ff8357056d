//! Uniform lat/lon grid for nearest-node resolution.
//!
//! The grid partitions the network's nodes into cells sized for a fixed
//! average density, so proximity queries only touch a small block of cells
//! instead of the whole node table. It is built once during network
//! construction and read-only afterwards.

use std::collections::HashMap;

use tracing::debug;

use crate::geo::Point;
use crate::graph::{Graph, GraphNode, NodeId};

/// Average number of nodes a grid cell is sized to hold.
const CELL_TARGET_DENSITY: f64 = 20.0;

/// Widest cell radius probed before falling back to a linear scan.
const MAX_SEARCH_RADIUS: i64 = 5;

/// Bounding box of the indexed nodes.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct Bounds {
    min_lat: f64,
    max_lat: f64,
    min_lon: f64,
    max_lon: f64,
}

/// Uniform spatial partition of the network's nodes.
///
/// Cells are keyed by signed coordinates, so a query point outside the
/// bounding box resolves to an unoccupied cell instead of wrapping.
#[derive(Debug, Clone, Default)]
pub struct SpatialGrid {
    resolution: i64,
    bounds: Bounds,
    cells: HashMap<(i64, i64), Vec<NodeId>>,
}

impl SpatialGrid {
    /// Partition `nodes` into a grid sized for roughly
    /// [`CELL_TARGET_DENSITY`] nodes per cell.
    pub(crate) fn build(nodes: &HashMap<NodeId, GraphNode>) -> Self {
        if nodes.is_empty() {
            return Self::default();
        }

        let cell_count = (nodes.len() as f64 / CELL_TARGET_DENSITY).ceil();
        let resolution = cell_count.sqrt().ceil() as i64;

        let mut bounds = Bounds {
            min_lat: f64::INFINITY,
            max_lat: f64::NEG_INFINITY,
            min_lon: f64::INFINITY,
            max_lon: f64::NEG_INFINITY,
        };
        for node in nodes.values() {
            bounds.min_lat = bounds.min_lat.min(node.lat);
            bounds.max_lat = bounds.max_lat.max(node.lat);
            bounds.min_lon = bounds.min_lon.min(node.lon);
            bounds.max_lon = bounds.max_lon.max(node.lon);
        }

        let mut grid = Self {
            resolution,
            bounds,
            cells: HashMap::new(),
        };
        for node in nodes.values() {
            let key = grid.cell(node.lat, node.lon);
            grid.cells.entry(key).or_default().push(node.id);
        }

        debug!(
            resolution,
            occupied_cells = grid.cells.len(),
            "built spatial grid"
        );
        grid
    }

    /// Collect node ids from every cell within `radius` cells of the query
    /// coordinate. Radius 0 is the exact cell; the order of the returned
    /// ids is unspecified.
    pub fn nearby(&self, lat: f64, lon: f64, radius: i64) -> Vec<NodeId> {
        let (cell_lat, cell_lon) = self.cell(lat, lon);
        let mut found = Vec::new();
        for d_lat in -radius..=radius {
            for d_lon in -radius..=radius {
                if let Some(ids) = self.cells.get(&(cell_lat + d_lat, cell_lon + d_lon)) {
                    found.extend_from_slice(ids);
                }
            }
        }
        found
    }

    fn cell(&self, lat: f64, lon: f64) -> (i64, i64) {
        (
            axis_cell(self.resolution, lat, self.bounds.min_lat, self.bounds.max_lat),
            axis_cell(self.resolution, lon, self.bounds.min_lon, self.bounds.max_lon),
        )
    }
}

/// Grid coordinate along one axis; `0` when the axis has no extent.
fn axis_cell(resolution: i64, value: f64, min: f64, max: f64) -> i64 {
    let span = max - min;
    if span == 0.0 {
        return 0;
    }
    (resolution as f64 * (value - min) / span).floor() as i64
}

/// Resolve the network node closest to `point`.
///
/// The grid is probed with an expanding cell radius; the closest candidate
/// by great-circle distance wins, with ties kept in first-encountered
/// order. When nothing falls within [`MAX_SEARCH_RADIUS`] cells the whole
/// node table is scanned, so a non-empty network always yields a node.
/// Returns `None` only when the network has no nodes.
pub fn nearest_node(graph: &Graph, point: Point) -> Option<NodeId> {
    if graph.is_empty() {
        return None;
    }

    for radius in 0..=MAX_SEARCH_RADIUS {
        let candidates = graph.grid().nearby(point.lat, point.lon, radius);
        if candidates.is_empty() {
            continue;
        }
        debug!(
            radius,
            candidates = candidates.len(),
            "nearest-node candidates gathered from grid"
        );
        return closest_of(graph, point, candidates.into_iter());
    }

    // A far-off query point can miss every probed cell; the scan keeps
    // resolution exact in that case.
    debug!("grid probing exhausted, scanning the full node table");
    closest_of(graph, point, graph.nodes().map(|node| node.id))
}

fn closest_of(graph: &Graph, point: Point, ids: impl Iterator<Item = NodeId>) -> Option<NodeId> {
    let mut best: Option<(NodeId, f64)> = None;
    for id in ids {
        let Some(node) = graph.node(id) else {
            continue;
        };
        let distance = point.distance_to(&node.position());
        match best {
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((id, distance)),
        }
    }
    best.map(|(id, _)| id)
}
