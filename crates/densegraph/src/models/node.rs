//! Node types for graph algorithms.
//!
//! This module provides strongly-typed wrappers for graph concepts:
//! - [`NodeId`]: Index of a vertex (row/column of the adjacency matrix)
//! - [`ComponentId`]: Connected component label

/// Node identifier (vertex index).
///
/// Using a newtype prevents mixing up vertex indices with component labels
/// and edge weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[repr(transparent)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Maximum valid node ID.
    pub const MAX: NodeId = NodeId(u32::MAX - 1);

    /// Invalid/sentinel node ID.
    pub const INVALID: NodeId = NodeId(u32::MAX);

    /// Create a new node ID.
    pub const fn new(id: u32) -> Self {
        NodeId(id)
    }

    /// Check if this is a valid node ID.
    pub const fn is_valid(&self) -> bool {
        self.0 != u32::MAX
    }

    /// Get the inner value.
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Row/column index in an adjacency matrix.
    pub const fn index(&self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for NodeId {
    fn from(id: u32) -> Self {
        NodeId(id)
    }
}

impl From<usize> for NodeId {
    fn from(id: usize) -> Self {
        NodeId(id as u32)
    }
}

impl From<NodeId> for usize {
    fn from(id: NodeId) -> Self {
        id.0 as usize
    }
}

/// Connected component label.
///
/// Assigned labels are positive and contiguous: the first component found is
/// [`ComponentId::FIRST`], the next one `FIRST.next()`, and so on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[repr(transparent)]
pub struct ComponentId(pub u32);

impl ComponentId {
    /// Unassigned component.
    pub const UNASSIGNED: ComponentId = ComponentId(u32::MAX);

    /// Label of the first component discovered.
    pub const FIRST: ComponentId = ComponentId(1);

    /// Create a new component ID.
    pub const fn new(id: u32) -> Self {
        ComponentId(id)
    }

    /// Check if component is assigned.
    pub const fn is_assigned(&self) -> bool {
        self.0 != u32::MAX && self.0 != 0
    }

    /// Get the inner value.
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// The label following this one.
    pub const fn next(&self) -> Self {
        ComponentId(self.0 + 1)
    }

    /// Zero-based slot for per-component tables.
    pub(crate) const fn slot(&self) -> usize {
        (self.0 - 1) as usize
    }
}

impl From<u32> for ComponentId {
    fn from(id: u32) -> Self {
        ComponentId(id)
    }
}
