//! Union-Find (Disjoint Set) data structure.
//!
//! Union-Find tracks connected components under edge insertion.
//! Supports:
//! - `find(x)`: Find representative of x's component
//! - `union(x, y)`: Merge components containing x and y
//!
//! Uses path compression and union by rank for near O(1) amortized operations.

use crate::models::{AdjacencyMatrix, ComponentId, NodeId, Weight};

/// Union-Find data structure with path compression and union by rank.
#[derive(Debug, Clone)]
pub struct UnionFind {
    /// Parent pointers (parent[i] = parent of node i, or i if root).
    parent: Vec<u32>,
    /// Rank (tree height upper bound) for union by rank.
    rank: Vec<u32>,
    /// Number of components.
    num_components: usize,
}

impl UnionFind {
    /// Create new Union-Find with n singleton sets.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n as u32).collect(),
            rank: vec![0; n],
            num_components: n,
        }
    }

    /// Union-Find over the vertices of `graph`, with every edge merged.
    ///
    /// Edge direction is ignored.
    pub fn from_matrix<W: Weight>(graph: &AdjacencyMatrix<W>) -> Self {
        let mut uf = Self::new(graph.num_vertices());
        for edge in graph.edges() {
            uf.union(edge.src, edge.dst);
        }
        uf
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint components.
    pub fn num_components(&self) -> usize {
        self.num_components
    }

    /// Find representative of node's component with path compression.
    pub fn find(&mut self, x: NodeId) -> NodeId {
        let mut root = x.0;

        while self.parent[root as usize] != root {
            root = self.parent[root as usize];
        }

        // Point every node on the path directly at the root
        let mut node = x.0;
        while self.parent[node as usize] != root {
            let next = self.parent[node as usize];
            self.parent[node as usize] = root;
            node = next;
        }

        NodeId(root)
    }

    /// Union two components by rank.
    ///
    /// Returns true if a merge occurred (x and y were in different components).
    pub fn union(&mut self, x: NodeId, y: NodeId) -> bool {
        let root_x = self.find(x);
        let root_y = self.find(y);

        if root_x == root_y {
            return false;
        }

        let rx = self.rank[root_x.index()];
        let ry = self.rank[root_y.index()];

        if rx < ry {
            self.parent[root_x.index()] = root_y.0;
        } else if rx > ry {
            self.parent[root_y.index()] = root_x.0;
        } else {
            self.parent[root_y.index()] = root_x.0;
            self.rank[root_x.index()] += 1;
        }

        self.num_components -= 1;
        true
    }

    /// Check if two nodes are in the same component.
    pub fn connected(&mut self, x: NodeId, y: NodeId) -> bool {
        self.find(x) == self.find(y)
    }

    /// Get component label for each node.
    ///
    /// Returns a vector where `result[i]` is the label of node i. Labels start
    /// at [`ComponentId::FIRST`] and follow the first occurrence of each
    /// component when scanning nodes in increasing index order.
    pub fn component_ids(&mut self) -> Vec<ComponentId> {
        let n = self.parent.len();
        let mut comp_id = vec![ComponentId::UNASSIGNED; n];
        let mut next_id = ComponentId::FIRST;

        for i in 0..n {
            let root = self.find(NodeId::from(i)).index();

            if !comp_id[root].is_assigned() {
                comp_id[root] = next_id;
                next_id = next_id.next();
            }

            comp_id[i] = comp_id[root];
        }

        comp_id
    }

    /// Get the size of the component containing node x.
    pub fn component_size(&mut self, x: NodeId) -> usize {
        let root = self.find(x);
        (0..self.parent.len())
            .filter(|&i| self.find(NodeId::from(i)) == root)
            .count()
    }
}
