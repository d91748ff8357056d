//! Route planning between arbitrary geographic coordinates.
//!
//! This module composes nearest-node resolution with the shortest-path
//! search and converts the result into coordinate form: input points are
//! `{lat, lon}`, output pairs are `[lon, lat]`, matching the usual
//! geospatial interchange conventions for point input versus
//! polyline-like output.

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::geo::Point;
use crate::graph::{Graph, NodeId};
use crate::path::find_route_a_star;
use crate::spatial::nearest_node;

/// Planned sea route returned by the library.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RoutePlan {
    /// Network node the origin resolved to.
    pub start: NodeId,
    /// Network node the destination resolved to.
    pub goal: NodeId,
    /// Ordered `[longitude, latitude]` pairs from start to goal.
    pub route: Vec<[f64; 2]>,
    /// Total length of the route in nautical miles.
    pub distance: f64,
    /// Number of nodes in the route, endpoints included.
    pub waypoints: usize,
}

/// Compute the shortest sea route between two coordinates.
///
/// Both endpoints are snapped to their nearest network node before the
/// search runs. When origin and destination snap to the same node the
/// result is a single-waypoint, zero-distance plan and no search is run.
pub fn find_route(graph: &Graph, origin: Point, destination: Point) -> Result<RoutePlan> {
    let start = nearest_node(graph, origin).ok_or(Error::EmptyGraph)?;
    let goal = nearest_node(graph, destination).ok_or(Error::EmptyGraph)?;

    if start == goal {
        debug!(node = start, "origin and destination share a nearest node");
        let position = node_position(graph, start)?;
        return Ok(RoutePlan {
            start,
            goal,
            route: vec![position],
            distance: 0.0,
            waypoints: 1,
        });
    }

    let found =
        find_route_a_star(graph, start, goal)?.ok_or(Error::RouteNotFound { start, goal })?;

    let mut route = Vec::with_capacity(found.steps.len());
    for &id in &found.steps {
        route.push(node_position(graph, id)?);
    }

    debug!(
        start,
        goal,
        waypoints = route.len(),
        distance = found.distance,
        "planned sea route"
    );

    Ok(RoutePlan {
        start,
        goal,
        waypoints: route.len(),
        route,
        distance: found.distance,
    })
}

/// Compute only the total distance of the shortest sea route.
///
/// Defined as the distance component of [`find_route`], with the same
/// failure modes.
pub fn find_distance(graph: &Graph, origin: Point, destination: Point) -> Result<f64> {
    find_route(graph, origin, destination).map(|plan| plan.distance)
}

fn node_position(graph: &Graph, id: NodeId) -> Result<[f64; 2]> {
    let node = graph.node(id).ok_or(Error::MissingNode { id })?;
    Ok([node.lon, node.lat])
}
