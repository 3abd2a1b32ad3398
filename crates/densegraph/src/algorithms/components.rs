//! Connected component labeling.
//!
//! Vertices are scanned in increasing index order. Each vertex not yet
//! labelled opens a new component, and everything reachable from it that is
//! still unlabelled joins that component. The scan order makes both the labels
//! and the component count deterministic for a fixed matrix.
//!
//! With [`Direction::Outgoing`] on a directed matrix this is *not* strongly
//! connected component labeling: a vertex joins the first component whose
//! opening vertex reaches it.

use tracing::trace;

use super::reachability::{reachable_from_with_config, Direction, ReachabilityConfig};
use super::union_find::UnionFind;
use crate::models::{AdjacencyMatrix, ComponentId, NodeId, Weight};
use crate::Result;

/// How components are computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelStrategy {
    /// One reachability traversal per unlabelled vertex. O(n³) worst case.
    #[default]
    Reachability,
    /// Disjoint-set merge over every edge, direction ignored. O(n² α(n)).
    ///
    /// Yields the same labels as `Reachability` with [`Direction::Undirected`].
    UnionFind,
}

/// Component labeling configuration.
#[derive(Debug, Clone, Default)]
pub struct LabelConfig {
    /// Edge direction followed by the reachability strategy.
    pub direction: Direction,
    /// Labeling strategy.
    pub strategy: LabelStrategy,
}

impl LabelConfig {
    /// Create new labeling configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set edge direction.
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Set labeling strategy.
    pub fn with_strategy(mut self, strategy: LabelStrategy) -> Self {
        self.strategy = strategy;
        self
    }
}

/// Component label of every vertex plus the component count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentLabeling {
    labels: Vec<ComponentId>,
    num_components: usize,
}

impl ComponentLabeling {
    /// Label of a vertex, or `None` if out of range.
    pub fn label(&self, node: NodeId) -> Option<ComponentId> {
        self.labels.get(node.index()).copied()
    }

    /// Labels indexed by vertex.
    pub fn labels(&self) -> &[ComponentId] {
        &self.labels
    }

    /// Number of components. Labels run from 1 to this value.
    pub fn num_components(&self) -> usize {
        self.num_components
    }

    /// Whether every vertex shares one label.
    pub fn is_connected(&self) -> bool {
        self.num_components == 1
    }

    /// Check if two vertices carry the same label.
    pub fn same_component(&self, a: NodeId, b: NodeId) -> bool {
        match (self.label(a), self.label(b)) {
            (Some(la), Some(lb)) => la == lb,
            _ => false,
        }
    }

    /// Vertices carrying `label`, in increasing index order.
    pub fn members(&self, label: ComponentId) -> Vec<NodeId> {
        self.labels
            .iter()
            .enumerate()
            .filter(|&(_, &l)| l == label)
            .map(|(v, _)| NodeId::from(v))
            .collect()
    }

    /// Members of every component, indexed by `label - 1`.
    pub fn components(&self) -> Vec<Vec<NodeId>> {
        let mut groups = vec![Vec::new(); self.num_components];
        for (v, label) in self.labels.iter().enumerate() {
            groups[label.slot()].push(NodeId::from(v));
        }
        groups
    }
}

/// Label the components of `graph` following outgoing reachability.
///
/// # Example
///
/// ```
/// use densegraph::{label_components, AdjacencyMatrixBuilder, ComponentId, NodeId};
///
/// let g = AdjacencyMatrixBuilder::new(4, 0)
///     .with_undirected_edges(&[(0, 2, 1)])
///     .build()
///     .unwrap();
///
/// let labels = label_components(&g).unwrap();
/// assert_eq!(labels.num_components(), 3);
/// assert_eq!(labels.label(NodeId(2)), Some(ComponentId(1)));
/// assert_eq!(labels.label(NodeId(3)), Some(ComponentId(3)));
/// ```
pub fn label_components<W: Weight>(graph: &AdjacencyMatrix<W>) -> Result<ComponentLabeling> {
    label_components_with_config(graph, &LabelConfig::default())
}

/// Component labeling with configuration.
pub fn label_components_with_config<W: Weight>(
    graph: &AdjacencyMatrix<W>,
    config: &LabelConfig,
) -> Result<ComponentLabeling> {
    let labeling = match config.strategy {
        LabelStrategy::Reachability => label_by_reachability(graph, config.direction)?,
        LabelStrategy::UnionFind => label_by_union_find(graph),
    };

    trace!(
        vertices = graph.num_vertices(),
        components = labeling.num_components,
        strategy = ?config.strategy,
        "labelled components"
    );

    Ok(labeling)
}

fn label_by_reachability<W: Weight>(
    graph: &AdjacencyMatrix<W>,
    direction: Direction,
) -> Result<ComponentLabeling> {
    let n = graph.num_vertices();
    let reach_config = ReachabilityConfig::new().with_direction(direction);

    let mut labels = vec![ComponentId::UNASSIGNED; n];
    let mut current = ComponentId::UNASSIGNED;
    let mut num_components = 0;

    for u in 0..n {
        if labels[u].is_assigned() {
            continue;
        }

        current = if current.is_assigned() {
            current.next()
        } else {
            ComponentId::FIRST
        };
        num_components += 1;

        let reach = reachable_from_with_config(NodeId::from(u), graph, &reach_config)?;
        for v in &reach {
            let slot = &mut labels[v.index()];
            if !slot.is_assigned() {
                *slot = current;
            }
        }
    }

    Ok(ComponentLabeling {
        labels,
        num_components,
    })
}

fn label_by_union_find<W: Weight>(graph: &AdjacencyMatrix<W>) -> ComponentLabeling {
    let mut uf = UnionFind::from_matrix(graph);
    let num_components = uf.num_components();
    ComponentLabeling {
        labels: uf.component_ids(),
        num_components,
    }
}
