//! Sealane library entry points.
//!
//! This crate loads a sea-lane network into memory, indexes it for
//! nearest-node resolution, and computes shortest maritime routes between
//! arbitrary geographic coordinates. Higher-level consumers (CLIs,
//! services) should only depend on the functions exported here instead of
//! reimplementing behavior.

#![deny(warnings)]

pub mod error;
pub mod geo;
pub mod graph;
pub mod path;
pub mod queue;
pub mod routing;
pub mod spatial;

pub use error::{Error, Result};
pub use geo::{haversine_distance, Point, EARTH_RADIUS_NM};
pub use graph::{build_graph, load_graph, Edge, EdgeRecord, Graph, GraphNode, NodeId, NodeRecord};
pub use path::{find_route_a_star, SearchResult};
pub use queue::{OpenEntry, OpenList};
pub use routing::{find_distance, find_route, RoutePlan};
pub use spatial::{nearest_node, SpatialGrid};
