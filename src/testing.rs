//! Internal helpers for randomized tests.

use fxhash::FxHashMap;
use rand::Rng;

use crate::repr::RouteGraph;

/// Node labels `"n0"` .. `"n{n-1}"`.
pub(crate) fn node_labels(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("n{i}")).collect()
}

/// Creates a random unit-weight digraph over `n` labelled nodes with at most
/// `m_ub` edges, together with the same graph as a plain mapping-of-lists for
/// BFS cross-checks.
pub(crate) fn random_unit_graph<R: Rng>(
    rng: &mut R,
    n: usize,
    m_ub: usize,
) -> (RouteGraph, FxHashMap<String, Vec<String>>) {
    let labels = node_labels(n);

    let mut edges: Vec<(usize, usize)> = (0..m_ub)
        .map(|_| (rng.random_range(0..n), rng.random_range(0..n)))
        .collect();
    edges.sort_unstable();
    edges.dedup();

    let mut graph = RouteGraph::new();
    graph.add_nodes(labels.iter().cloned());
    let mut adjacency: FxHashMap<String, Vec<String>> =
        labels.iter().map(|l| (l.clone(), Vec::new())).collect();

    for (u, v) in edges {
        graph
            .try_add_edge(&labels[u], labels[v].clone(), 1.0)
            .unwrap();
        adjacency
            .get_mut(&labels[u])
            .unwrap()
            .push(labels[v].clone());
    }

    (graph, adjacency)
}
