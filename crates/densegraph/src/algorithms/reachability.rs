//! Reachability from a start vertex.
//!
//! Depth-first traversal with an explicit work-list, so the traversal depth is
//! bounded by heap memory rather than the call stack. Every newly reached
//! vertex scans its full matrix row, giving O(n²) on a dense matrix.

use tracing::trace;

use crate::models::{AdjacencyMatrix, NodeId, Weight};
use crate::Result;

/// Which edges connect two vertices during traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Follow `graph[v][u]` from v to u.
    #[default]
    Outgoing,
    /// Follow an edge in either direction.
    Undirected,
}

/// Reachability configuration.
#[derive(Debug, Clone, Default)]
pub struct ReachabilityConfig {
    /// Edge direction to follow.
    pub direction: Direction,
}

impl ReachabilityConfig {
    /// Create new reachability configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set edge direction.
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }
}

/// Set of vertices reachable from a start vertex.
#[derive(Debug, Clone)]
pub struct ReachableSet {
    start: NodeId,
    reached: Vec<bool>,
    order: Vec<NodeId>,
}

impl ReachableSet {
    /// The vertex the traversal started from.
    pub fn start(&self) -> NodeId {
        self.start
    }

    /// Check membership.
    pub fn contains(&self, node: NodeId) -> bool {
        self.reached.get(node.index()).copied().unwrap_or(false)
    }

    /// Number of reached vertices.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Always false for a set produced by a traversal.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Members in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.order.iter().copied()
    }

    /// Members sorted by index.
    pub fn to_sorted_vec(&self) -> Vec<NodeId> {
        let mut members = self.order.clone();
        members.sort_unstable();
        members
    }
}

impl<'a> IntoIterator for &'a ReachableSet {
    type Item = NodeId;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, NodeId>>;

    fn into_iter(self) -> Self::IntoIter {
        self.order.iter().copied()
    }
}

/// Vertices reachable from `start` following outgoing edges.
///
/// The result always contains `start` itself.
///
/// # Example
///
/// ```
/// use densegraph::{reachable_from, AdjacencyMatrix, NodeId};
///
/// // 0 -> 1 -> 2, 3 isolated
/// let g = AdjacencyMatrix::new(
///     vec![
///         vec![0, 1, 0, 0],
///         vec![0, 0, 1, 0],
///         vec![0, 0, 0, 0],
///         vec![0, 0, 0, 0],
///     ],
///     0,
/// )
/// .unwrap();
///
/// let reach = reachable_from(NodeId(0), &g).unwrap();
/// assert_eq!(reach.to_sorted_vec(), vec![NodeId(0), NodeId(1), NodeId(2)]);
/// ```
pub fn reachable_from<W: Weight>(
    start: NodeId,
    graph: &AdjacencyMatrix<W>,
) -> Result<ReachableSet> {
    reachable_from_with_config(start, graph, &ReachabilityConfig::default())
}

/// Reachability with configuration.
pub fn reachable_from_with_config<W: Weight>(
    start: NodeId,
    graph: &AdjacencyMatrix<W>,
    config: &ReachabilityConfig,
) -> Result<ReachableSet> {
    graph.check_node(start)?;

    let n = graph.num_vertices();
    let mut reached = vec![false; n];
    let mut order = Vec::new();
    let mut stack = vec![start.index()];

    while let Some(v) = stack.pop() {
        if reached[v] {
            continue;
        }
        reached[v] = true;
        order.push(NodeId::from(v));

        for u in 0..n {
            if reached[u] {
                continue;
            }
            let linked = match config.direction {
                Direction::Outgoing => graph.has_edge_at(v, u),
                Direction::Undirected => graph.has_edge_at(v, u) || graph.has_edge_at(u, v),
            };
            if linked {
                stack.push(u);
            }
        }
    }

    trace!(start = start.get(), reached = order.len(), "reachability done");

    Ok(ReachableSet {
        start,
        reached,
        order,
    })
}
