//! Graph data models.
//!
//! This module provides the core data structures for representing graphs:
//! - [`AdjacencyMatrix`]: Dense square matrix of edge weights
//! - [`Weight`], [`Sentinel`]: Edge weights and the "no edge" marker
//! - [`NodeId`], [`ComponentId`]: Graph node types

pub mod matrix;
pub mod node;
pub mod weight;

pub use matrix::{AdjacencyMatrix, AdjacencyMatrixBuilder, WeightedEdge};
pub use node::{ComponentId, NodeId};
pub use weight::{is_edge, Sentinel, Weight};
