#![no_main]

use libfuzzer_sys::fuzz_target;
use matrixgraph_core::AdjacencyMatrix;
use matrixgraph_core::generate::random_weights;
use matrixgraph_core::mst::SpanningForest;
use matrixgraph_core::reach::ConnectivityAnalysis;
use matrixgraph_core::traverse::{TraversalEngine, TraversalKind};

// First byte picks n (at most 12), the rest fill the matrix bit by bit.
fuzz_target!(|data: &[u8]| {
    let Some((&head, bits)) = data.split_first() else {
        return;
    };
    let n = usize::from(head % 13);
    let mut matrix = AdjacencyMatrix::empty(n);
    for i in 0..n {
        for j in 0..n {
            let bit = i * n + j;
            let present = bits.get(bit / 8).is_some_and(|b| (*b >> (bit % 8)) & 1 == 1);
            matrix.set(i, j, present);
        }
    }

    let analysis = ConnectivityAnalysis::from_matrix(&matrix);
    assert!(analysis.condensation.matrix.size() <= n);

    let weights = random_weights(&matrix.symmetrized_without_loops(), u64::from(head));
    let summary = SpanningForest::from_weights(&weights).run_to_completion();
    assert_eq!(summary.edges.len() + summary.component_count, n);

    for kind in [TraversalKind::Bfs, TraversalKind::Dfs] {
        let mut engine = TraversalEngine::new(matrix.clone(), kind);
        let summary = engine.run_to_completion();
        assert!(summary.discovery_order.len() <= n);
    }
});
