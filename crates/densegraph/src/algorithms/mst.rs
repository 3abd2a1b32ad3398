//! Borůvka minimum spanning tree.
//!
//! The tree `T` starts edgeless. Each round:
//! 1. Label the components of `T`
//! 2. Stop if a single component remains
//! 3. Pick every component's cheapest edge of the input leaving it
//! 4. Add the picked edges to `T` (both directions, input weight)
//!
//! A connected input converges in at most ⌈log₂ n⌉ rounds. A disconnected
//! input stalls once no component has a leaving edge; the result is then a
//! spanning forest with one tree per connected component of the input.
//!
//! Candidates are scanned in row-major `(u, v)` order and only a strictly
//! cheaper edge replaces the current pick, so equal weights resolve to the
//! first edge encountered. This makes the output deterministic and keeps the
//! picks of one round acyclic.

use tracing::{debug, info, warn};

use super::components::{
    label_components_with_config, ComponentLabeling, LabelConfig, LabelStrategy,
};
use super::reachability::Direction;
use super::union_find::UnionFind;
use crate::models::{AdjacencyMatrix, NodeId, Weight, WeightedEdge};
use crate::{GraphError, Result};

/// MST configuration.
#[derive(Debug, Clone, Default)]
pub struct MstConfig {
    /// Strategy used to relabel the tree every round.
    pub strategy: LabelStrategy,
    /// Maximum number of rounds; `None` means the vertex count.
    pub max_rounds: Option<usize>,
    /// Reject matrices whose diagonal holds anything but the sentinel.
    pub validate_diagonal: bool,
}

impl MstConfig {
    /// Create new MST configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the relabeling strategy.
    pub fn with_strategy(mut self, strategy: LabelStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Set the round cap.
    pub fn with_max_rounds(mut self, max: usize) -> Self {
        self.max_rounds = Some(max);
        self
    }

    /// Require a sentinel-only diagonal.
    pub fn with_diagonal_validation(mut self) -> Self {
        self.validate_diagonal = true;
        self
    }
}

/// Result of a Borůvka run.
#[derive(Debug, Clone)]
pub struct MstOutcome<W> {
    tree: AdjacencyMatrix<W>,
    edges: Vec<WeightedEdge<W>>,
    rounds: usize,
    num_components: usize,
}

impl<W: Weight> MstOutcome<W> {
    /// The tree (or forest) as an adjacency matrix.
    pub fn tree(&self) -> &AdjacencyMatrix<W> {
        &self.tree
    }

    /// Take the tree matrix.
    pub fn into_tree(self) -> AdjacencyMatrix<W> {
        self.tree
    }

    /// Selected edges in insertion order, oriented as found in the input.
    pub fn edges(&self) -> &[WeightedEdge<W>] {
        &self.edges
    }

    /// Sum of the selected edge weights.
    pub fn total_weight(&self) -> W
    where
        W: std::iter::Sum<W>,
    {
        self.edges.iter().map(|e| e.weight).sum()
    }

    /// Number of merge rounds performed.
    pub fn rounds(&self) -> usize {
        self.rounds
    }

    /// Components left in the tree: 1 for a connected input.
    pub fn num_components(&self) -> usize {
        self.num_components
    }

    /// Whether the result spans every vertex with a single tree.
    pub fn is_spanning_tree(&self) -> bool {
        self.num_components == 1
    }
}

/// Build a minimum spanning tree (or forest) of `graph`.
///
/// Returns a matrix of the same size and sentinel holding only the selected
/// edges, each written in both directions.
///
/// # Example
///
/// ```
/// use densegraph::{build_mst, AdjacencyMatrix, NodeId};
///
/// let g = AdjacencyMatrix::new(
///     vec![
///         vec![0, 1, 0, 4],
///         vec![1, 0, 2, 0],
///         vec![0, 2, 0, 3],
///         vec![4, 0, 3, 0],
///     ],
///     0,
/// )
/// .unwrap();
///
/// let mst = build_mst(&g).unwrap();
/// assert_eq!(mst.undirected_weight(), 6);
/// assert!(!mst.has_edge(NodeId(0), NodeId(3)));
/// ```
pub fn build_mst<W: Weight>(graph: &AdjacencyMatrix<W>) -> Result<AdjacencyMatrix<W>> {
    Ok(build_mst_with_config(graph, &MstConfig::default())?.into_tree())
}

/// Borůvka MST with configuration.
pub fn build_mst_with_config<W: Weight>(
    graph: &AdjacencyMatrix<W>,
    config: &MstConfig,
) -> Result<MstOutcome<W>> {
    if config.validate_diagonal {
        graph.validate_diagonal()?;
    }

    let n = graph.num_vertices();
    let limit = config.max_rounds.unwrap_or(n);
    // The tree is kept symmetric, so outgoing and undirected labeling agree.
    let label_config = LabelConfig::new()
        .with_direction(Direction::Outgoing)
        .with_strategy(config.strategy);

    let mut tree = graph.edgeless();
    let mut edges = Vec::with_capacity(n.saturating_sub(1));
    let mut rounds = 0;

    let num_components = loop {
        let labeling = label_components_with_config(&tree, &label_config)?;
        let count = labeling.num_components();
        if count <= 1 {
            break count;
        }

        let cheapest = select_cheapest(graph, &labeling);
        if cheapest.is_empty() {
            warn!(components = count, "no edges leave the remaining components");
            break count;
        }

        if rounds == limit {
            return Err(GraphError::RoundLimitExceeded { limit });
        }
        rounds += 1;

        let added = merge(&mut tree, &labeling, &cheapest, &mut edges);
        debug!(round = rounds, components = count, added, "boruvka round");

        if added == 0 {
            warn!(components = count, "boruvka round made no progress");
            break count;
        }
    };

    info!(
        vertices = n,
        edges = edges.len(),
        rounds,
        components = num_components,
        "minimum spanning tree built"
    );

    Ok(MstOutcome {
        tree,
        edges,
        rounds,
        num_components,
    })
}

/// Cheapest leaving edge per component, indexed by label slot.
struct CheapestEdgeTable<W> {
    slots: Vec<Option<WeightedEdge<W>>>,
}

impl<W: Weight> CheapestEdgeTable<W> {
    fn new(num_components: usize) -> Self {
        Self {
            slots: vec![None; num_components],
        }
    }

    /// Keep `edge` for the slot unless a strictly cheaper one is recorded.
    fn offer(&mut self, slot: usize, edge: WeightedEdge<W>) {
        let replace = match &self.slots[slot] {
            Some(best) => edge.weight < best.weight,
            None => true,
        };
        if replace {
            self.slots[slot] = Some(edge);
        }
    }

    fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    fn picks(&self) -> impl Iterator<Item = &WeightedEdge<W>> + '_ {
        self.slots.iter().flatten()
    }
}

fn select_cheapest<W: Weight>(
    graph: &AdjacencyMatrix<W>,
    labeling: &ComponentLabeling,
) -> CheapestEdgeTable<W> {
    let labels = labeling.labels();
    let mut table = CheapestEdgeTable::new(labeling.num_components());

    for edge in graph.edges() {
        let (u, v) = (edge.src.index(), edge.dst.index());
        if u == v || labels[u] == labels[v] {
            continue;
        }
        table.offer(labels[u].slot(), edge);
        table.offer(labels[v].slot(), edge);
    }

    table
}

/// Add every picked edge to the tree, each pair of components joined once.
fn merge<W: Weight>(
    tree: &mut AdjacencyMatrix<W>,
    labeling: &ComponentLabeling,
    cheapest: &CheapestEdgeTable<W>,
    edges: &mut Vec<WeightedEdge<W>>,
) -> usize {
    let labels = labeling.labels();
    let mut joined = UnionFind::new(labeling.num_components());
    let mut added = 0;

    for edge in cheapest.picks() {
        let (u, v) = (edge.src.index(), edge.dst.index());
        let cu = NodeId::from(labels[u].slot());
        let cv = NodeId::from(labels[v].slot());
        if !joined.union(cu, cv) {
            continue;
        }
        tree.set_cell(u, v, edge.weight);
        tree.set_cell(v, u, edge.weight);
        edges.push(*edge);
        added += 1;
    }

    added
}
