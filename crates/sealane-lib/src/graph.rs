use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, warn};

use crate::geo::Point;
use crate::spatial::SpatialGrid;

/// Numeric identifier for a network node.
pub type NodeId = i64;

/// A vertex of the sea-lane network.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraphNode {
    pub id: NodeId,
    pub lat: f64,
    pub lon: f64,
}

impl GraphNode {
    /// Geodetic position of the node.
    pub fn position(&self) -> Point {
        Point::new(self.lat, self.lon)
    }
}

/// Edge within the routing graph.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub target: NodeId,
    pub distance: f64,
}

/// Node record consumed during construction: `(id, longitude, latitude)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    pub id: NodeId,
    pub lon: f64,
    pub lat: f64,
}

/// Edge record consumed during construction: `(from, to, distance)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub from: NodeId,
    pub to: NodeId,
    pub distance: f64,
}

/// Immutable sea-lane network used by pathfinding.
///
/// Built once from node and edge collections; every later operation is a
/// read, so one instance can serve concurrent routing calls. Cloning is
/// cheap because the adjacency table is shared.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: HashMap<NodeId, GraphNode>,
    adjacency: Arc<HashMap<NodeId, Vec<Edge>>>,
    grid: SpatialGrid,
}

impl Graph {
    /// Look up a node by identifier.
    pub fn node(&self, id: NodeId) -> Option<&GraphNode> {
        self.nodes.get(&id)
    }

    /// Return the neighbours for a given node identifier.
    pub fn neighbours(&self, id: NodeId) -> &[Edge] {
        self.adjacency.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Weight of the edge from `from` to `to`, if one exists.
    pub fn edge_distance(&self, from: NodeId, to: NodeId) -> Option<f64> {
        self.neighbours(from)
            .iter()
            .find(|edge| edge.target == to)
            .map(|edge| edge.distance)
    }

    /// Number of nodes in the network.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the network has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate over every node in the network.
    pub fn nodes(&self) -> impl Iterator<Item = &GraphNode> {
        self.nodes.values()
    }

    /// Read-only handle to the spatial grid built over the node set.
    pub fn grid(&self) -> &SpatialGrid {
        &self.grid
    }
}

/// Build a network from typed node and edge records.
///
/// Every input edge is stored in both directions at equal weight. Edges
/// whose endpoints are unknown, or whose weight is negative or non-finite,
/// are dropped rather than poisoning the adjacency table.
pub fn build_graph<N, E>(nodes: N, edges: E) -> Graph
where
    N: IntoIterator<Item = NodeRecord>,
    E: IntoIterator<Item = EdgeRecord>,
{
    let mut node_table: HashMap<NodeId, GraphNode> = HashMap::new();
    for record in nodes {
        node_table.insert(
            record.id,
            GraphNode {
                id: record.id,
                lat: record.lat,
                lon: record.lon,
            },
        );
    }

    let mut adjacency: HashMap<NodeId, Vec<Edge>> = HashMap::new();
    for &id in node_table.keys() {
        adjacency.entry(id).or_default();
    }

    let mut dropped = 0usize;
    for record in edges {
        if !record.distance.is_finite() || record.distance < 0.0 {
            warn!(
                from = record.from,
                to = record.to,
                distance = record.distance,
                "skipping edge with invalid distance"
            );
            dropped += 1;
            continue;
        }
        if !node_table.contains_key(&record.from) || !node_table.contains_key(&record.to) {
            warn!(
                from = record.from,
                to = record.to,
                "skipping edge with unknown endpoint"
            );
            dropped += 1;
            continue;
        }

        adjacency.entry(record.from).or_default().push(Edge {
            target: record.to,
            distance: record.distance,
        });
        adjacency.entry(record.to).or_default().push(Edge {
            target: record.from,
            distance: record.distance,
        });
    }

    let grid = SpatialGrid::build(&node_table);

    info!(
        nodes = node_table.len(),
        dropped_edges = dropped,
        "built sea-lane network"
    );

    Graph {
        nodes: node_table,
        adjacency: Arc::new(adjacency),
        grid,
    }
}

/// Build a network from loosely-typed JSON collections.
///
/// Each node entry is expected to be an array `[id, lon, lat]` and each edge
/// entry an array `[from, to, distance]`; trailing elements are ignored.
/// Entries of the wrong shape are skipped so a partially corrupt dataset
/// still loads.
pub fn load_graph(nodes: &[Value], edges: &[Value]) -> Graph {
    let node_records: Vec<NodeRecord> = nodes.iter().filter_map(parse_node_entry).collect();
    let edge_records: Vec<EdgeRecord> = edges.iter().filter_map(parse_edge_entry).collect();
    build_graph(node_records, edge_records)
}

fn parse_node_entry(entry: &Value) -> Option<NodeRecord> {
    let parsed = (|| {
        let fields = entry.as_array()?;
        Some(NodeRecord {
            id: fields.first()?.as_i64()?,
            lon: fields.get(1)?.as_f64()?,
            lat: fields.get(2)?.as_f64()?,
        })
    })();

    if parsed.is_none() {
        warn!(%entry, "skipping malformed node entry");
    }
    parsed
}

fn parse_edge_entry(entry: &Value) -> Option<EdgeRecord> {
    let parsed = (|| {
        let fields = entry.as_array()?;
        Some(EdgeRecord {
            from: fields.first()?.as_i64()?,
            to: fields.get(1)?.as_i64()?,
            distance: fields.get(2)?.as_f64()?,
        })
    })();

    if parsed.is_none() {
        warn!(%entry, "skipping malformed edge entry");
    }
    parsed
}
