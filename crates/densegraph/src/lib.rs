//! Structural graph algorithms over dense adjacency matrices.
//!
//! A graph is a square matrix of edge weights in which one reserved value,
//! the sentinel, marks "no edge". This crate provides:
//!
//! - **Reachability**: vertices reachable from a start vertex
//! - **Component labeling**: partition of all vertices into labelled components
//! - **Borůvka MST**: minimum spanning tree (or forest) built by repeatedly
//!   merging components through their cheapest leaving edge
//! - **Union-Find**: disjoint set structure backing the fast labeling strategy
//!
//! # Example
//!
//! ```
//! use densegraph::{build_mst, label_components, reachable_from, AdjacencyMatrix, NodeId};
//!
//! // 0 - 1 - 2 - 3 with a heavier 0 - 3 shortcut, 0 marks "no edge"
//! let graph = AdjacencyMatrix::new(
//!     vec![
//!         vec![0, 1, 0, 4],
//!         vec![1, 0, 2, 0],
//!         vec![0, 2, 0, 3],
//!         vec![4, 0, 3, 0],
//!     ],
//!     0,
//! )?;
//!
//! assert_eq!(reachable_from(NodeId(0), &graph)?.len(), 4);
//! assert_eq!(label_components(&graph)?.num_components(), 1);
//!
//! let mst = build_mst(&graph)?;
//! assert_eq!(mst.undirected_weight(), 6);
//! # Ok::<(), densegraph::GraphError>(())
//! ```

pub mod algorithms;
pub mod models;

// Re-export main types
pub use algorithms::components::{
    label_components, label_components_with_config, ComponentLabeling, LabelConfig, LabelStrategy,
};
pub use algorithms::mst::{build_mst, build_mst_with_config, MstConfig, MstOutcome};
pub use algorithms::reachability::{
    reachable_from, reachable_from_with_config, Direction, ReachabilityConfig, ReachableSet,
};
pub use algorithms::union_find::UnionFind;
pub use models::matrix::{AdjacencyMatrix, AdjacencyMatrixBuilder, WeightedEdge};
pub use models::node::{ComponentId, NodeId};
pub use models::weight::{is_edge, Sentinel, Weight};

/// Graph algorithm error types.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    /// Invalid node ID.
    #[error("Invalid node ID: {0}")]
    InvalidNodeId(u64),

    /// Graph has no vertices.
    #[error("Empty graph")]
    EmptyGraph,

    /// A row length differs from the number of rows.
    #[error("Matrix is not square: row {row} has {actual} entries, expected {expected}")]
    NotSquare {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// More vertices than `NodeId` can address.
    #[error("Too many vertices: {0}")]
    TooManyVertices(usize),

    /// A real edge carries the sentinel value, or the diagonal does not.
    #[error("Sentinel collision at ({row}, {col})")]
    SentinelCollision { row: usize, col: usize },

    /// A weight is not comparable (NaN).
    #[error("Malformed weight at ({row}, {col})")]
    MalformedWeight { row: usize, col: usize },

    /// The sentinel itself is not comparable (NaN).
    #[error("Malformed sentinel value")]
    MalformedSentinel,

    /// Borůvka did not converge within the configured round cap.
    #[error("Round limit exceeded: {limit}")]
    RoundLimitExceeded { limit: usize },
}

/// Result type for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;
