//! Fuzz target for Borůvka MST construction.
//!
//! Builds small matrices from arbitrary cells and checks the tree invariants:
//! termination, acyclicity, the forest edge count, and that relabeling the
//! tree reproduces the components of the input.

#![no_main]

use arbitrary::Arbitrary;
use densegraph::{
    build_mst_with_config, label_components, label_components_with_config, AdjacencyMatrix,
    Direction, LabelConfig, LabelStrategy, MstConfig, UnionFind,
};
use libfuzzer_sys::fuzz_target;

/// Fuzz input: matrix size and raw cells.
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    /// Number of vertices (reduced to 1..=16).
    size: u8,
    /// Row-major cells; missing cells are treated as "no edge".
    cells: Vec<u8>,
    /// Relabel with union-find instead of reachability.
    union_find: bool,
}

fuzz_target!(|input: FuzzInput| {
    let n = (input.size % 16) as usize + 1;
    let sentinel = 0u8;

    let rows: Vec<Vec<u8>> = (0..n)
        .map(|i| {
            (0..n)
                .map(|j| {
                    if i == j {
                        sentinel
                    } else {
                        input.cells.get(i * n + j).copied().unwrap_or(sentinel)
                    }
                })
                .collect()
        })
        .collect();

    let graph = match AdjacencyMatrix::new(rows, sentinel) {
        Ok(g) => g,
        Err(_) => return,
    };

    let strategy = if input.union_find {
        LabelStrategy::UnionFind
    } else {
        LabelStrategy::Reachability
    };
    let outcome = build_mst_with_config(&graph, &MstConfig::new().with_strategy(strategy))
        .expect("Borůvka must converge within n rounds");

    // Components of the input with edge direction ignored.
    let input_components = label_components_with_config(
        &graph,
        &LabelConfig::new().with_direction(Direction::Undirected),
    )
    .expect("labeling")
    .num_components();

    assert_eq!(outcome.num_components(), input_components);
    assert_eq!(outcome.edges().len(), n - input_components);

    // Every selected edge joins two previously separate trees.
    let mut uf = UnionFind::new(n);
    for edge in outcome.edges() {
        assert!(uf.union(edge.src, edge.dst), "cycle in spanning forest");
    }

    let tree = outcome.tree();
    assert!(tree.is_symmetric());
    assert_eq!(
        label_components(tree).expect("labeling").num_components(),
        input_components
    );
});
