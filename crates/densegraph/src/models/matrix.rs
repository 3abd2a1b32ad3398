//! Dense adjacency matrix.
//!
//! The matrix stores one weight for every ordered pair of vertices:
//! - `weight(i, j)` = weight of the directed edge i -> j
//! - entries equal to the matrix sentinel mean "no edge"
//!
//! Memory layout is a single row-major buffer of `n * n` cells, so a row scan
//! (the hot loop of reachability) is a contiguous slice.

use super::node::NodeId;
use super::weight::{Sentinel, Weight};
use crate::{GraphError, Result};

/// A directed, weighted edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightedEdge<W> {
    /// Source vertex.
    pub src: NodeId,
    /// Destination vertex.
    pub dst: NodeId,
    /// Edge weight.
    pub weight: W,
}

impl<W> WeightedEdge<W> {
    /// Create a new edge.
    pub fn new(src: impl Into<NodeId>, dst: impl Into<NodeId>, weight: W) -> Self {
        Self {
            src: src.into(),
            dst: dst.into(),
            weight,
        }
    }
}

/// Square adjacency matrix with an explicit "no edge" sentinel.
///
/// For a graph with N vertices:
/// - `cells`: N*N weights, row-major
/// - `sentinel`: value marking absent edges, constant across the matrix
#[derive(Debug, Clone, PartialEq)]
pub struct AdjacencyMatrix<W> {
    num_vertices: usize,
    cells: Vec<W>,
    sentinel: Sentinel<W>,
}

impl<W: Weight> AdjacencyMatrix<W> {
    /// Create a matrix from rows with an explicit sentinel.
    ///
    /// # Errors
    ///
    /// * [`GraphError::EmptyGraph`] if there are no rows
    /// * [`GraphError::NotSquare`] if a row length differs from the row count
    /// * [`GraphError::MalformedSentinel`] / [`GraphError::MalformedWeight`]
    ///   if the sentinel or a cell is not comparable (NaN)
    ///
    /// # Example
    ///
    /// ```
    /// use densegraph::AdjacencyMatrix;
    ///
    /// let g = AdjacencyMatrix::new(vec![vec![0, 3], vec![3, 0]], 0).unwrap();
    /// assert_eq!(g.num_vertices(), 2);
    /// assert_eq!(g.num_edges(), 2);
    /// ```
    pub fn new(rows: Vec<Vec<W>>, sentinel: W) -> Result<Self> {
        let n = rows.len();
        if n == 0 {
            return Err(GraphError::EmptyGraph);
        }
        check_vertex_count(n)?;
        let sentinel = Sentinel::new(sentinel).ok_or(GraphError::MalformedSentinel)?;

        let mut cells = Vec::with_capacity(n * n);
        for (row_idx, row) in rows.into_iter().enumerate() {
            if row.len() != n {
                return Err(GraphError::NotSquare {
                    row: row_idx,
                    expected: n,
                    actual: row.len(),
                });
            }
            if let Some(col) = row.iter().position(|w| !w.is_comparable()) {
                return Err(GraphError::MalformedWeight { row: row_idx, col });
            }
            cells.extend(row);
        }

        Ok(Self {
            num_vertices: n,
            cells,
            sentinel,
        })
    }

    /// Create a matrix from rows, taking the sentinel from `rows[0][0]`.
    ///
    /// This relies on the convention that vertex 0 never has a self-loop, so
    /// the first diagonal cell always holds the "no edge" value.
    pub fn from_rows(rows: Vec<Vec<W>>) -> Result<Self> {
        let first_row = rows.first().ok_or(GraphError::EmptyGraph)?;
        let sentinel = *first_row.first().ok_or(GraphError::NotSquare {
            row: 0,
            expected: rows.len(),
            actual: 0,
        })?;
        Self::new(rows, sentinel)
    }

    /// Create an edgeless matrix of `num_vertices` vertices.
    pub fn empty(num_vertices: usize, sentinel: W) -> Result<Self> {
        if num_vertices == 0 {
            return Err(GraphError::EmptyGraph);
        }
        check_vertex_count(num_vertices)?;
        let sentinel = Sentinel::new(sentinel).ok_or(GraphError::MalformedSentinel)?;
        Ok(Self::filled(num_vertices, sentinel))
    }

    /// Edgeless matrix with the same size and sentinel as `self`.
    pub fn edgeless(&self) -> Self {
        Self::filled(self.num_vertices, self.sentinel)
    }

    fn filled(num_vertices: usize, sentinel: Sentinel<W>) -> Self {
        Self {
            num_vertices,
            cells: vec![sentinel.value(); num_vertices * num_vertices],
            sentinel,
        }
    }

    /// Number of vertices (rows).
    pub fn num_vertices(&self) -> usize {
        self.num_vertices
    }

    /// The "no edge" value.
    pub fn sentinel(&self) -> W {
        self.sentinel.value()
    }

    /// Check whether a stored weight denotes an edge in this matrix.
    #[inline]
    pub fn is_edge(&self, weight: W) -> bool {
        self.sentinel.is_edge(weight)
    }

    /// Check that `node` is a vertex of this matrix.
    pub fn check_node(&self, node: NodeId) -> Result<usize> {
        let i = node.index();
        if !node.is_valid() || i >= self.num_vertices {
            return Err(GraphError::InvalidNodeId(node.get() as u64));
        }
        Ok(i)
    }

    /// Raw cell value. Indices must be in range.
    #[inline]
    pub(crate) fn cell(&self, src: usize, dst: usize) -> W {
        self.cells[src * self.num_vertices + dst]
    }

    #[inline]
    pub(crate) fn set_cell(&mut self, src: usize, dst: usize, weight: W) {
        self.cells[src * self.num_vertices + dst] = weight;
    }

    /// Check if edge exists from src to dst.
    #[inline]
    pub(crate) fn has_edge_at(&self, src: usize, dst: usize) -> bool {
        self.is_edge(self.cell(src, dst))
    }

    /// Get the raw row of a vertex (empty if out of range).
    pub fn row(&self, node: NodeId) -> &[W] {
        let i = node.index();
        if i >= self.num_vertices {
            return &[];
        }
        let start = i * self.num_vertices;
        &self.cells[start..start + self.num_vertices]
    }

    /// Weight of the edge src -> dst, or `None` if there is no such edge.
    pub fn weight(&self, src: NodeId, dst: NodeId) -> Option<W> {
        let (s, d) = (src.index(), dst.index());
        if s >= self.num_vertices || d >= self.num_vertices {
            return None;
        }
        let w = self.cell(s, d);
        self.is_edge(w).then_some(w)
    }

    /// Check if edge exists from src to dst.
    pub fn has_edge(&self, src: NodeId, dst: NodeId) -> bool {
        self.weight(src, dst).is_some()
    }

    /// Set the weight of src -> dst.
    ///
    /// Writing the sentinel removes the edge.
    pub fn set_edge(&mut self, src: NodeId, dst: NodeId, weight: W) -> Result<()> {
        let s = self.check_node(src)?;
        let d = self.check_node(dst)?;
        if !weight.is_comparable() {
            return Err(GraphError::MalformedWeight { row: s, col: d });
        }
        self.set_cell(s, d, weight);
        Ok(())
    }

    /// Remove the edge src -> dst, returning its weight if it existed.
    pub fn remove_edge(&mut self, src: NodeId, dst: NodeId) -> Result<Option<W>> {
        let s = self.check_node(src)?;
        let d = self.check_node(dst)?;
        let old = self.cell(s, d);
        self.set_cell(s, d, self.sentinel());
        Ok(self.is_edge(old).then_some(old))
    }

    /// Outgoing neighbors of a vertex, in increasing index order.
    pub fn neighbors(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        let sentinel = self.sentinel;
        self.row(node)
            .iter()
            .enumerate()
            .filter(move |&(_, &w)| sentinel.is_edge(w))
            .map(|(v, _)| NodeId::from(v))
    }

    /// Number of outgoing edges of a vertex.
    pub fn degree(&self, node: NodeId) -> usize {
        self.neighbors(node).count()
    }

    /// All edges in row-major order.
    pub fn edges(&self) -> impl Iterator<Item = WeightedEdge<W>> + '_ {
        let n = self.num_vertices;
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &w)| self.is_edge(w))
            .map(move |(i, &w)| WeightedEdge::new(i / n, i % n, w))
    }

    /// Number of directed edges (non-sentinel cells).
    pub fn num_edges(&self) -> usize {
        self.cells.iter().filter(|&&w| self.is_edge(w)).count()
    }

    /// Whether `weight(i, j) == weight(j, i)` for every pair.
    pub fn is_symmetric(&self) -> bool {
        let n = self.num_vertices;
        (0..n).all(|i| ((i + 1)..n).all(|j| self.cell(i, j) == self.cell(j, i)))
    }

    /// Sum of edge weights, counting each undirected edge once.
    ///
    /// On a symmetric matrix only the upper triangle (and diagonal) is summed;
    /// otherwise every directed edge is counted.
    pub fn undirected_weight(&self) -> W
    where
        W: std::iter::Sum<W>,
    {
        if self.is_symmetric() {
            self.edges()
                .filter(|e| e.src <= e.dst)
                .map(|e| e.weight)
                .sum()
        } else {
            self.edges().map(|e| e.weight).sum()
        }
    }

    /// Verify that every diagonal cell holds the sentinel.
    pub fn validate_diagonal(&self) -> Result<()> {
        match (0..self.num_vertices).find(|&i| self.has_edge_at(i, i)) {
            Some(i) => Err(GraphError::SentinelCollision { row: i, col: i }),
            None => Ok(()),
        }
    }

    /// Create transpose (reverse graph).
    pub fn transpose(&self) -> Self {
        let mut out = self.edgeless();
        let n = self.num_vertices;
        for i in 0..n {
            for j in 0..n {
                out.set_cell(j, i, self.cell(i, j));
            }
        }
        out
    }

    /// Copy the matrix back into rows.
    pub fn to_rows(&self) -> Vec<Vec<W>> {
        self.cells
            .chunks(self.num_vertices)
            .map(<[W]>::to_vec)
            .collect()
    }

    /// Convert the matrix back into rows.
    pub fn into_rows(self) -> Vec<Vec<W>> {
        self.to_rows()
    }
}

fn check_vertex_count(n: usize) -> Result<()> {
    if n > NodeId::MAX.index() {
        return Err(GraphError::TooManyVertices(n));
    }
    Ok(())
}

/// Builder for adjacency matrices.
#[derive(Debug)]
pub struct AdjacencyMatrixBuilder<W> {
    num_vertices: usize,
    sentinel: W,
    edges: Vec<(u32, u32, W)>,
}

impl<W: Weight> AdjacencyMatrixBuilder<W> {
    /// Create new builder with given number of vertices and sentinel.
    pub fn new(num_vertices: usize, sentinel: W) -> Self {
        Self {
            num_vertices,
            sentinel,
            edges: Vec::new(),
        }
    }

    /// Add directed weighted edges from slice.
    pub fn with_edges(mut self, edges: &[(u32, u32, W)]) -> Self {
        self.edges.extend_from_slice(edges);
        self
    }

    /// Add undirected weighted edges from slice (both directions).
    pub fn with_undirected_edges(mut self, edges: &[(u32, u32, W)]) -> Self {
        for &(a, b, w) in edges {
            self.add_undirected_edge(a, b, w);
        }
        self
    }

    /// Add a single directed edge.
    pub fn add_edge(&mut self, src: u32, dst: u32, weight: W) {
        self.edges.push((src, dst, weight));
    }

    /// Add an undirected edge.
    pub fn add_undirected_edge(&mut self, a: u32, b: u32, weight: W) {
        self.edges.push((a, b, weight));
        self.edges.push((b, a, weight));
    }

    /// Build the matrix.
    ///
    /// Later edges overwrite earlier ones on the same cell. An edge whose
    /// weight equals the sentinel is reported as
    /// [`GraphError::SentinelCollision`].
    pub fn build(self) -> Result<AdjacencyMatrix<W>> {
        let mut matrix = AdjacencyMatrix::empty(self.num_vertices, self.sentinel)?;
        for (src, dst, weight) in self.edges {
            let s = matrix.check_node(NodeId(src))?;
            let d = matrix.check_node(NodeId(dst))?;
            if !weight.is_comparable() {
                return Err(GraphError::MalformedWeight { row: s, col: d });
            }
            if !matrix.is_edge(weight) {
                return Err(GraphError::SentinelCollision { row: s, col: d });
            }
            matrix.set_cell(s, d, weight);
        }
        Ok(matrix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_matrix() {
        let g = AdjacencyMatrix::empty(5, 0u32).unwrap();
        assert_eq!(g.num_vertices(), 5);
        assert_eq!(g.num_edges(), 0);
        assert_eq!(g.sentinel(), 0);
    }

    #[test]
    fn test_zero_vertices_rejected() {
        assert!(matches!(
            AdjacencyMatrix::<i32>::new(vec![], 0),
            Err(GraphError::EmptyGraph)
        ));
        assert!(matches!(
            AdjacencyMatrix::<i32>::from_rows(vec![]),
            Err(GraphError::EmptyGraph)
        ));
        assert!(matches!(
            AdjacencyMatrix::empty(0, 0i32),
            Err(GraphError::EmptyGraph)
        ));
    }

    #[test]
    fn test_not_square_rejected() {
        let result = AdjacencyMatrix::new(vec![vec![0, 1], vec![1]], 0);
        assert!(matches!(
            result,
            Err(GraphError::NotSquare {
                row: 1,
                expected: 2,
                actual: 1
            })
        ));

        let result = AdjacencyMatrix::<i32>::from_rows(vec![vec![]]);
        assert!(matches!(result, Err(GraphError::NotSquare { row: 0, .. })));
    }

    #[test]
    fn test_nan_rejected() {
        let result = AdjacencyMatrix::new(vec![vec![0.0, f64::NAN], vec![1.0, 0.0]], 0.0);
        assert!(matches!(
            result,
            Err(GraphError::MalformedWeight { row: 0, col: 1 })
        ));

        let result = AdjacencyMatrix::new(vec![vec![0.0]], f64::NAN);
        assert!(matches!(result, Err(GraphError::MalformedSentinel)));
    }

    #[test]
    fn test_sentinel_inferred_from_first_cell() {
        let g = AdjacencyMatrix::from_rows(vec![vec![-1, 4], vec![4, -1]]).unwrap();
        assert_eq!(g.sentinel(), -1);
        assert_eq!(g.num_edges(), 2);
        assert_eq!(g.weight(NodeId(0), NodeId(1)), Some(4));
        assert_eq!(g.weight(NodeId(0), NodeId(0)), None);
    }

    #[test]
    fn test_neighbors() {
        let g = AdjacencyMatrixBuilder::new(3, 0)
            .with_edges(&[(0, 1, 5), (0, 2, 6), (1, 2, 7)])
            .build()
            .unwrap();

        let n0: Vec<_> = g.neighbors(NodeId(0)).collect();
        assert_eq!(n0, vec![NodeId(1), NodeId(2)]);

        let n1: Vec<_> = g.neighbors(NodeId(1)).collect();
        assert_eq!(n1, vec![NodeId(2)]);

        assert_eq!(g.degree(NodeId(2)), 0);
        assert_eq!(g.neighbors(NodeId(99)).count(), 0);
    }

    #[test]
    fn test_has_edge() {
        let g = AdjacencyMatrixBuilder::new(3, 0)
            .with_edges(&[(0, 1, 1), (1, 2, 1)])
            .build()
            .unwrap();

        assert!(g.has_edge(NodeId(0), NodeId(1)));
        assert!(g.has_edge(NodeId(1), NodeId(2)));
        assert!(!g.has_edge(NodeId(0), NodeId(2)));
        assert!(!g.has_edge(NodeId(2), NodeId(0)));
        assert!(!g.has_edge(NodeId(0), NodeId(10)));
    }

    #[test]
    fn test_set_and_remove_edge() {
        let mut g = AdjacencyMatrix::empty(3, 0i64).unwrap();
        g.set_edge(NodeId(0), NodeId(2), 9).unwrap();
        assert_eq!(g.weight(NodeId(0), NodeId(2)), Some(9));

        assert_eq!(g.remove_edge(NodeId(0), NodeId(2)).unwrap(), Some(9));
        assert_eq!(g.remove_edge(NodeId(0), NodeId(2)).unwrap(), None);

        assert!(matches!(
            g.set_edge(NodeId(3), NodeId(0), 1),
            Err(GraphError::InvalidNodeId(3))
        ));
    }

    #[test]
    fn test_edges_row_major() {
        let g = AdjacencyMatrixBuilder::new(3, 0)
            .with_edges(&[(2, 0, 3), (0, 1, 1), (1, 2, 2)])
            .build()
            .unwrap();

        let edges: Vec<_> = g.edges().collect();
        assert_eq!(
            edges,
            vec![
                WeightedEdge::new(0u32, 1u32, 1),
                WeightedEdge::new(1u32, 2u32, 2),
                WeightedEdge::new(2u32, 0u32, 3),
            ]
        );
    }

    #[test]
    fn test_symmetry_and_weight() {
        let sym = AdjacencyMatrixBuilder::new(3, 0)
            .with_undirected_edges(&[(0, 1, 2), (1, 2, 5)])
            .build()
            .unwrap();
        assert!(sym.is_symmetric());
        assert_eq!(sym.num_edges(), 4);
        assert_eq!(sym.undirected_weight(), 7);

        let directed = AdjacencyMatrixBuilder::new(3, 0)
            .with_edges(&[(0, 1, 2), (1, 2, 5)])
            .build()
            .unwrap();
        assert!(!directed.is_symmetric());
        assert_eq!(directed.undirected_weight(), 7);
    }

    #[test]
    fn test_transpose() {
        let g = AdjacencyMatrixBuilder::new(3, 0)
            .with_edges(&[(0, 1, 4), (1, 2, 8)])
            .build()
            .unwrap();
        let t = g.transpose();

        assert_eq!(t.weight(NodeId(1), NodeId(0)), Some(4));
        assert_eq!(t.weight(NodeId(2), NodeId(1)), Some(8));
        assert!(!t.has_edge(NodeId(0), NodeId(1)));
    }

    #[test]
    fn test_validate_diagonal() {
        let ok = AdjacencyMatrix::new(vec![vec![0, 1], vec![1, 0]], 0).unwrap();
        assert!(ok.validate_diagonal().is_ok());

        let bad = AdjacencyMatrix::new(vec![vec![0, 1], vec![1, 3]], 0).unwrap();
        assert!(matches!(
            bad.validate_diagonal(),
            Err(GraphError::SentinelCollision { row: 1, col: 1 })
        ));
    }

    #[test]
    fn test_builder_validation() {
        let out_of_range = AdjacencyMatrixBuilder::new(2, 0).with_edges(&[(0, 5, 1)]).build();
        assert!(matches!(out_of_range, Err(GraphError::InvalidNodeId(5))));

        let collision = AdjacencyMatrixBuilder::new(2, 0).with_edges(&[(0, 1, 0)]).build();
        assert!(matches!(
            collision,
            Err(GraphError::SentinelCollision { row: 0, col: 1 })
        ));
    }

    #[test]
    fn test_rows_round_trip() {
        let rows = vec![vec![0, 2, 0], vec![2, 0, 3], vec![0, 3, 0]];
        let g = AdjacencyMatrix::new(rows.clone(), 0).unwrap();
        assert_eq!(g.to_rows(), rows);
        assert_eq!(g.row(NodeId(1)), &[2, 0, 3]);
        assert!(g.row(NodeId(3)).is_empty());
        assert_eq!(g.into_rows(), rows);
    }
}
