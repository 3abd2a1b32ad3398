//! Graph algorithms.
//!
//! This module provides the dense-matrix algorithms:
//! - [`reachability`]: Vertices reachable from a start vertex
//! - [`components`]: Connected component labeling
//! - [`union_find`]: Disjoint set data structure
//! - [`mst`]: Borůvka minimum spanning tree

pub mod components;
pub mod mst;
pub mod reachability;
pub mod union_find;

pub use components::{
    label_components, label_components_with_config, ComponentLabeling, LabelConfig, LabelStrategy,
};
pub use mst::{build_mst, build_mst_with_config, MstConfig, MstOutcome};
pub use reachability::{
    reachable_from, reachable_from_with_config, Direction, ReachabilityConfig, ReachableSet,
};
pub use union_find::UnionFind;
