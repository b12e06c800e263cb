//! Known-topology regression tests for the analysis engine.
//!
//! Each test uses a hand-crafted matrix with known properties. Expected
//! values are worked out by hand and hardcoded, so any change in ordering
//! or semantics shows up here.

use matrixgraph_core::degree::{
    DegreeReport, directed_degrees, is_regular, special_vertices_undirected, undirected_degrees,
};
use matrixgraph_core::matrix::{AdjacencyMatrix, WeightMatrix, WeightedEdge};
use matrixgraph_core::mst::{ForestState, SpanningForest, Verdict};
use matrixgraph_core::paths::{WalkLength, paths_of_length};
use matrixgraph_core::reach::{ConnectivityAnalysis, extract_sccs, warshall_closure};
use matrixgraph_core::traverse::{TraversalEngine, TraversalEvent, TraversalKind};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn directed(n: usize, edges: &[(usize, usize)]) -> AdjacencyMatrix {
    AdjacencyMatrix::from_edges(n, edges)
}

fn undirected(n: usize, edges: &[(usize, usize)]) -> AdjacencyMatrix {
    directed(n, edges).symmetrized()
}

fn discovery(n: usize, edges: &[(usize, usize)], kind: TraversalKind) -> Vec<usize> {
    let mut engine = TraversalEngine::new(directed(n, edges), kind);
    engine.run_to_completion().discovery_order
}

// ===========================================================================
// Topology 1: Directed triangle plus isolated vertex
//
//   1 → 2 → 3 → 1      4
//
// Properties:
//   - SCCs: {1,2,3}, {4}
//   - Condensation: 2 nodes, no edges
//   - Directed-regular? No: vertex 4 has out = in = 0.
// ===========================================================================

#[test]
fn triangle_plus_isolated_sccs() {
    let m = directed(4, &[(0, 1), (1, 2), (2, 0)]);
    let a = ConnectivityAnalysis::from_matrix(&m);

    assert_eq!(a.scc_count(), 2);
    assert_eq!(a.components[0].members(), &[0, 1, 2]);
    assert_eq!(a.components[1].members(), &[3]);
    assert_eq!(a.condensation.labels, vec!["1,2,3", "4"]);
    assert_eq!(a.condensation.edge_count(), 0);
}

#[test]
fn triangle_plus_isolated_reachability() {
    let m = directed(4, &[(0, 1), (1, 2), (2, 0)]);
    let r = warshall_closure(&m);
    for i in 0..3 {
        for j in 0..3 {
            assert!(r.reaches(i, j), "{i} should reach {j}");
        }
        assert!(!r.reaches(i, 3));
        assert!(!r.reaches(3, i));
    }
    assert!(r.reaches(3, 3));
}

#[test]
fn triangle_plus_isolated_degrees() {
    let m = directed(4, &[(0, 1), (1, 2), (2, 0)]);
    let report = DegreeReport::directed(&m);
    assert!(!report.regularity().is_regular);
    assert_eq!(report.special().isolated, vec![4]);
    assert!(report.special().pendant.is_empty());
}

// ===========================================================================
// Topology 2: Directed chain 1 → 2 → 3 → 4
// ===========================================================================

#[test]
fn chain_bfs_discovers_in_order_and_every_edge_is_tree_edge() {
    let edges = [(0, 1), (1, 2), (2, 3)];
    let mut engine = TraversalEngine::new(directed(4, &edges), TraversalKind::Bfs);
    let events: Vec<_> = engine.by_ref().collect();

    assert_eq!(engine.discovery_order(), &[0, 1, 2, 3]);
    let tree: Vec<_> = events.iter().filter_map(TraversalEvent::tree_edge).collect();
    assert_eq!(tree, edges.to_vec());
    assert!(!events.iter().any(|e| matches!(e, TraversalEvent::AlreadyKnown { .. })));
}

#[test]
fn chain_condensation_is_the_chain() {
    let m = directed(4, &[(0, 1), (1, 2), (2, 3)]);
    let a = ConnectivityAnalysis::from_matrix(&m);
    assert_eq!(a.scc_count(), 4);
    assert_eq!(a.condensation.matrix, m);
}

#[test]
fn chain_walks() {
    let m = directed(4, &[(0, 1), (1, 2), (2, 3)]);
    let two: Vec<String> = paths_of_length(&m, WalkLength::Two).map(|w| w.to_string()).collect();
    assert_eq!(two, vec!["1 -> 2 -> 3", "2 -> 3 -> 4"]);
    let three: Vec<String> = paths_of_length(&m, WalkLength::Three).map(|w| w.to_string()).collect();
    assert_eq!(three, vec!["1 -> 2 -> 3 -> 4"]);
}

// ===========================================================================
// Topology 3: Branching  1 → {2, 3},  2 → 4
//
// BFS visits by level, DFS dives into 2 before 3.
// ===========================================================================

#[test]
fn branching_bfs_and_dfs_diverge() {
    let edges = [(0, 1), (0, 2), (1, 3)];
    assert_eq!(discovery(4, &edges, TraversalKind::Bfs), vec![0, 1, 2, 3]);
    assert_eq!(discovery(4, &edges, TraversalKind::Dfs), vec![0, 1, 3, 2]);
}

#[test]
fn branching_dfs_full_event_log() {
    use TraversalEvent::{Discover, ProcessFinish, ProcessStart, StartComponent};

    let engine = TraversalEngine::new(directed(4, &[(0, 1), (0, 2), (1, 3)]), TraversalKind::Dfs);
    let events: Vec<_> = engine.collect();
    assert_eq!(
        events,
        vec![
            StartComponent { root: 0 },
            Discover { node: 0, parent: None },
            ProcessStart { node: 0 },
            Discover { node: 1, parent: Some(0) },
            ProcessStart { node: 1 },
            Discover { node: 3, parent: Some(1) },
            ProcessStart { node: 3 },
            ProcessFinish { node: 3 },
            ProcessFinish { node: 1 },
            Discover { node: 2, parent: Some(0) },
            ProcessStart { node: 2 },
            ProcessFinish { node: 2 },
            ProcessFinish { node: 0 },
        ]
    );
}

#[test]
fn branching_renumbering() {
    let mut engine = TraversalEngine::new(directed(4, &[(0, 1), (0, 2), (1, 3)]), TraversalKind::Dfs);
    engine.run_to_completion();
    assert_eq!(engine.new_numbering(), &[Some(1), Some(2), Some(4), Some(3)]);
    assert_eq!(engine.renumbering(), vec![(1, 1), (2, 2), (4, 3), (3, 4)]);
}

// ===========================================================================
// Topology 4: Two components and a bystander
//
//   1 → 2      3 → 4      5 (no edges)
// ===========================================================================

#[test]
fn sweep_skips_vertex_without_edges() {
    for kind in [TraversalKind::Bfs, TraversalKind::Dfs] {
        let mut engine = TraversalEngine::new(directed(5, &[(0, 1), (2, 3)]), kind);
        let summary = engine.run_to_completion();
        assert_eq!(summary.discovery_order, vec![0, 1, 2, 3], "{kind}");
        assert_eq!(summary.components, 2);
        assert_eq!(engine.new_numbering()[4], None);
        assert_eq!(summary.tree.edge_count(), 2);
    }
}

#[test]
fn discovered_vertex_is_not_a_later_root() {
    // 3 → 1 → 2: root 1 (index 0) can't reach 3, so 3 becomes a second root
    // and then meets 1 as already known.
    let mut engine = TraversalEngine::new(directed(3, &[(2, 0), (0, 1)]), TraversalKind::Bfs);
    let events: Vec<_> = engine.by_ref().collect();
    assert!(events.contains(&TraversalEvent::StartComponent { root: 2 }));
    assert!(events.contains(&TraversalEvent::AlreadyKnown { from: 2, to: 0 }));
    assert_eq!(engine.discovery_order(), &[0, 1, 2]);
}

// ===========================================================================
// Topology 5: Undirected shapes for degree analysis
// ===========================================================================

#[test]
fn undirected_cycle_is_regular() {
    let m = undirected(4, &[(0, 1), (1, 2), (2, 3), (3, 0)]);
    let r = is_regular(&undirected_degrees(&m));
    assert!(r.is_regular);
    assert_eq!(r.degree, 2);
}

#[test]
fn star_has_pendants() {
    // center 1, leaves 2..4, vertex 5 isolated
    let m = undirected(5, &[(0, 1), (0, 2), (0, 3)]);
    let degrees = undirected_degrees(&m);
    assert_eq!(degrees, vec![3, 1, 1, 1, 0]);
    let special = special_vertices_undirected(&degrees);
    assert_eq!(special.pendant, vec![2, 3, 4]);
    assert_eq!(special.isolated, vec![5]);
}

#[test]
fn loop_vertex_is_not_pendant() {
    // A lone self-loop gives degree 2.
    let m = undirected(2, &[(1, 1)]);
    assert_eq!(undirected_degrees(&m), vec![0, 2]);
    let d = directed_degrees(&directed(2, &[(1, 1)]));
    assert_eq!(d.out_degree, vec![0, 1]);
    assert_eq!(d.in_degree, vec![0, 1]);
}

// ===========================================================================
// Topology 6: Weighted square with a heavy diagonal
//
//   0 -1- 1 -2- 2 -3- 3,  0 -10- 3
// ===========================================================================

fn square_weights() -> WeightMatrix {
    let mut w = WeightMatrix::zeros(4);
    w.set_symmetric(0, 1, 1);
    w.set_symmetric(1, 2, 2);
    w.set_symmetric(2, 3, 3);
    w.set_symmetric(0, 3, 10);
    w
}

#[test]
fn square_spanning_tree() {
    let mut forest = SpanningForest::from_weights(&square_weights());
    let summary = forest.run_to_completion();
    assert_eq!(
        summary.edges,
        vec![
            WeightedEdge::new(1, 0, 1),
            WeightedEdge::new(2, 1, 2),
            WeightedEdge::new(3, 2, 3),
        ]
    );
    assert_eq!(summary.total_weight, 6);
    assert!(summary.is_spanning_tree);
    assert!(forest.rejected_edges().is_empty());
}

#[test]
fn square_stepwise_highlights() {
    let mut forest = SpanningForest::from_weights(&square_weights());
    let mut verdicts = Vec::new();
    while forest.step() {
        let considered = forest.last_considered().unwrap();
        verdicts.push((considered.edge.weight, considered.verdict));
    }
    assert_eq!(
        verdicts,
        vec![
            (1, Verdict::Accepted),
            (2, Verdict::Accepted),
            (3, Verdict::Accepted),
        ]
    );
    assert_eq!(forest.state(), ForestState::Done);
}

#[test]
fn equal_weight_disjoint_edges_independent_of_input_order() {
    let forward = [WeightedEdge::new(5, 0, 1), WeightedEdge::new(5, 2, 3)];
    let backward = [WeightedEdge::new(5, 2, 3), WeightedEdge::new(5, 0, 1)];

    let a = SpanningForest::from_edges(4, forward).run_to_completion();
    let b = SpanningForest::from_edges(4, backward).run_to_completion();
    assert_eq!(a, b);
    assert_eq!(a.edges.len(), 2);
    assert_eq!(a.component_count, 2);
    assert!(!a.is_spanning_tree, "two components: forest, not tree");
}

#[test]
fn sccs_need_closure_first() {
    // The only route to an S matrix is through the closure, so the result
    // always partitions the vertex set.
    let m = directed(5, &[(0, 1), (1, 2), (2, 1), (3, 4)]);
    let sccs = extract_sccs(&warshall_closure(&m).strong_connectivity());
    let mut covered: Vec<usize> = sccs.iter().flat_map(|c| c.members().to_vec()).collect();
    covered.sort_unstable();
    assert_eq!(covered, vec![0, 1, 2, 3, 4]);
    assert_eq!(sccs.len(), 4);
}
