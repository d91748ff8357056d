//! Heuristic-guided shortest-path search over the sea-lane network.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::error::{Error, Result};
use crate::geo::Point;
use crate::graph::{Graph, NodeId};
use crate::queue::{OpenEntry, OpenList};

/// Outcome of a successful path search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// Node sequence from start to goal, inclusive.
    pub steps: Vec<NodeId>,
    /// Sum of the traversed edge weights in nautical miles.
    pub distance: f64,
}

/// Find the minimum-distance path between two nodes using A* with a
/// great-circle heuristic.
///
/// The goal must exist in the network; passing an unknown goal id is a
/// caller bug and fails before any search work. `Ok(None)` means the
/// endpoints are not connected.
pub fn find_route_a_star(
    graph: &Graph,
    start: NodeId,
    goal: NodeId,
) -> Result<Option<SearchResult>> {
    let Some(goal_node) = graph.node(goal) else {
        return Err(Error::UnknownGoal { id: goal });
    };
    let goal_position = goal_node.position();

    if start == goal {
        return Ok(Some(SearchResult {
            steps: vec![start],
            distance: 0.0,
        }));
    }

    let mut open = OpenList::new();
    let mut closed: HashSet<NodeId> = HashSet::new();
    let mut g_score: HashMap<NodeId, f64> = HashMap::new();
    let mut parents: HashMap<NodeId, NodeId> = HashMap::new();

    g_score.insert(start, 0.0);
    open.push(OpenEntry {
        node: start,
        f: heuristic(graph, start, goal_position),
        g: 0.0,
    });

    while let Some(entry) = open.pop() {
        if entry.node == goal {
            let steps = reconstruct_path(&parents, start, goal);
            let distance = path_distance(graph, &steps)?;
            debug!(
                start,
                goal,
                hops = steps.len().saturating_sub(1),
                distance,
                "search reached the goal"
            );
            return Ok(Some(SearchResult { steps, distance }));
        }

        closed.insert(entry.node);

        for edge in graph.neighbours(entry.node) {
            let next = edge.target;
            if closed.contains(&next) {
                continue;
            }

            let tentative_g = entry.g + edge.distance;
            if tentative_g >= *g_score.get(&next).unwrap_or(&f64::INFINITY) {
                continue;
            }

            g_score.insert(next, tentative_g);
            parents.insert(next, entry.node);

            let f = tentative_g + heuristic(graph, next, goal_position);
            if !open.update(next, f, tentative_g) {
                open.push(OpenEntry {
                    node: next,
                    f,
                    g: tentative_g,
                });
            }
        }
    }

    debug!(start, goal, "open set exhausted without reaching the goal");
    Ok(None)
}

fn heuristic(graph: &Graph, from: NodeId, goal_position: Point) -> f64 {
    graph
        .node(from)
        .map(|node| node.position().distance_to(&goal_position))
        .unwrap_or(0.0)
}

fn reconstruct_path(parents: &HashMap<NodeId, NodeId>, start: NodeId, goal: NodeId) -> Vec<NodeId> {
    let mut path = Vec::new();
    let mut current = Some(goal);
    while let Some(node) = current {
        path.push(node);
        if node == start {
            break;
        }
        current = parents.get(&node).copied();
    }
    path.reverse();
    path
}

/// Sum the real edge weights along `steps`.
///
/// The total comes from the adjacency table rather than the final g-cost,
/// so the reported distance always matches the traversed edges.
fn path_distance(graph: &Graph, steps: &[NodeId]) -> Result<f64> {
    let mut total = 0.0;
    for pair in steps.windows(2) {
        let distance = graph
            .edge_distance(pair[0], pair[1])
            .ok_or(Error::MissingEdge {
                from: pair[0],
                to: pair[1],
            })?;
        total += distance;
    }
    Ok(total)
}
