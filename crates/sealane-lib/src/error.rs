use thiserror::Error;

use crate::graph::NodeId;

/// Convenient result alias for the sealane library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when the network contains no nodes to resolve against.
    #[error("network contains no nodes")]
    EmptyGraph,

    /// Raised when no route connects the resolved endpoints.
    #[error("no route found between nodes {start} and {goal}")]
    RouteNotFound { start: NodeId, goal: NodeId },

    /// Raised when a search is invoked with a goal absent from the network.
    #[error("goal node {id} is not part of the network")]
    UnknownGoal { id: NodeId },

    /// Raised when a node id referenced by a computed route is missing from
    /// the node table, which indicates corrupt network data.
    #[error("route references node {id} which is missing from the network")]
    MissingNode { id: NodeId },

    /// Raised when consecutive route nodes have no connecting edge in the
    /// adjacency table, which indicates corrupt network data.
    #[error("route references a missing edge between nodes {from} and {to}")]
    MissingEdge { from: NodeId, to: NodeId },
}
