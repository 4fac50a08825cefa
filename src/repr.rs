/*!
# Graph Representation

[`RouteGraph`] stores a directed, weighted multigraph as an adjacency list
keyed by node label. Nodes enter the graph only through explicit
[`RouteGraph::add_node`] calls; there are no removal operations.

Edge lists preserve insertion order and keep parallel edges: adding two edges
between the same pair of nodes with different weights retains both, and
queries simply consider each of them. Edge *destinations* are not required to
be known nodes: such labels own no edge list of their own and are treated as
unreachable by shortest-path queries until they are added explicitly.
*/

use fxhash::FxHashMap;
use smallvec::SmallVec;

use crate::{
    error::{GraphError, Result},
    weight::Weight,
};

/// A single outgoing connection: destination label plus edge weight.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteEdge {
    pub to: String,
    pub weight: Weight,
}

/// Outgoing edge list of one node. Route-style graphs are sparse, so a few
/// edges stay inline without a heap allocation.
type OutEdges = SmallVec<[RouteEdge; 4]>;

/// A directed, weighted multigraph over string node labels.
#[derive(Debug, Clone, Default)]
pub struct RouteGraph {
    adj: FxHashMap<String, OutEdges>,
    num_edges: usize,
}

impl RouteGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of nodes added so far.
    pub fn number_of_nodes(&self) -> usize {
        self.adj.len()
    }

    /// Returns the number of edges, counting parallel edges separately.
    pub fn number_of_edges(&self) -> usize {
        self.num_edges
    }

    /// Returns *true* if the graph has no nodes (and thus no edges).
    pub fn is_empty(&self) -> bool {
        self.adj.is_empty()
    }

    /// Returns *true* if `label` was added via [`RouteGraph::add_node`].
    ///
    /// Labels that only ever appeared as edge destinations do not count.
    pub fn contains_node(&self, label: &str) -> bool {
        self.adj.contains_key(label)
    }

    /// Returns an iterator over all node labels in arbitrary order.
    pub fn nodes(&self) -> impl Iterator<Item = &str> + '_ {
        self.adj.keys().map(String::as_str)
    }

    /// Returns an iterator over the outgoing edges of `label` in insertion
    /// order. Unknown labels yield an empty iterator.
    pub fn edges_of<'g>(&'g self, label: &str) -> impl Iterator<Item = &'g RouteEdge> + 'g {
        self.adj.get(label).into_iter().flatten()
    }

    /// Returns the number of outgoing edges of `label`.
    pub fn out_degree_of(&self, label: &str) -> usize {
        self.adj.get(label).map_or(0, SmallVec::len)
    }

    /// Adds a node. Returns *true* exactly if the node was not present
    /// before; adding a known label again is a no-op and leaves its edge
    /// list untouched.
    pub fn add_node(&mut self, label: impl Into<String>) -> bool {
        use std::collections::hash_map::Entry;

        match self.adj.entry(label.into()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(OutEdges::new());
                true
            }
        }
    }

    /// Adds all nodes in the collection.
    pub fn add_nodes<I>(&mut self, labels: I)
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        for label in labels {
            self.add_node(label);
        }
    }

    /// Adds the directed edge `(source, destination)` with the given weight.
    ///
    /// Parallel edges are kept as-is; no deduplication or min-merge happens.
    /// `destination` does not have to be a known node. `weight` is expected
    /// to be non-negative; negative weights are not rejected here but void
    /// the guarantees of [`RouteGraph::shortest_path`].
    ///
    /// # Errors
    /// [`GraphError::UnknownSource`] if `source` was never added; the graph
    /// is left unchanged.
    pub fn try_add_edge(
        &mut self,
        source: &str,
        destination: impl Into<String>,
        weight: Weight,
    ) -> Result<()> {
        let Some(edges) = self.adj.get_mut(source) else {
            log::warn!("rejected edge out of unknown node '{source}'");
            return Err(GraphError::UnknownSource(source.to_string()));
        };

        edges.push(RouteEdge {
            to: destination.into(),
            weight,
        });
        self.num_edges += 1;
        Ok(())
    }

    /// Adds the directed edge `(source, destination)` with the given weight.
    /// ** Panics if `source` was never added **
    pub fn add_edge(&mut self, source: &str, destination: impl Into<String>, weight: Weight) {
        assert!(
            self.try_add_edge(source, destination, weight).is_ok(),
            "unknown source node '{source}'"
        );
    }

    /// Creates a graph from a collection of node labels and an iterator of
    /// `(source, destination, weight)` triples.
    ///
    /// # Errors
    /// [`GraphError::UnknownSource`] if any edge names a source outside of
    /// `nodes`.
    pub fn from_edges<N, E, S, D>(nodes: N, edges: E) -> Result<Self>
    where
        N: IntoIterator,
        N::Item: Into<String>,
        E: IntoIterator<Item = (S, D, Weight)>,
        S: AsRef<str>,
        D: Into<String>,
    {
        let mut graph = Self::new();
        graph.add_nodes(nodes);
        for (source, destination, weight) in edges {
            graph.try_add_edge(source.as_ref(), destination, weight)?;
        }
        Ok(graph)
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn new_graph_is_empty() {
        let graph = RouteGraph::new();
        assert!(graph.is_empty());
        assert_eq!(graph.number_of_nodes(), 0);
        assert_eq!(graph.number_of_edges(), 0);
    }

    #[test]
    fn add_node_is_idempotent() {
        let mut graph = RouteGraph::new();
        assert!(graph.add_node("a"));
        graph.add_edge("a", "b", 1.0);

        // Re-adding must neither duplicate the node nor reset its edges.
        assert!(!graph.add_node("a"));
        assert_eq!(graph.number_of_nodes(), 1);
        assert_eq!(graph.out_degree_of("a"), 1);
    }

    #[test]
    fn parallel_edges_are_retained() {
        let mut graph = RouteGraph::new();
        graph.add_node("a");
        graph.add_edge("a", "b", 5.0);
        graph.add_edge("a", "b", 3.0);

        assert_eq!(graph.number_of_edges(), 2);
        let weights = graph.edges_of("a").map(|e| e.weight).collect_vec();
        assert_eq!(weights, vec![5.0, 3.0]);
    }

    #[test]
    fn edge_from_unknown_source_is_rejected() {
        let mut graph = RouteGraph::new();
        graph.add_node("a");

        let err = graph.try_add_edge("ghost", "a", 1.0).unwrap_err();
        assert_eq!(err, GraphError::UnknownSource("ghost".to_string()));
        assert_eq!(graph.number_of_edges(), 0);
    }

    #[test]
    fn destination_does_not_become_a_node() {
        let mut graph = RouteGraph::new();
        graph.add_node("a");
        graph.try_add_edge("a", "b", 2.0).unwrap();

        assert!(!graph.contains_node("b"));
        assert_eq!(graph.number_of_nodes(), 1);
        assert_eq!(graph.out_degree_of("b"), 0);
        assert!(graph.edges_of("b").next().is_none());
    }

    #[test]
    fn from_edges_builds_the_same_graph() {
        let graph =
            RouteGraph::from_edges(["a", "b", "c"], [("a", "b", 1.0), ("b", "c", 2.0)]).unwrap();
        assert_eq!(graph.number_of_nodes(), 3);
        assert_eq!(graph.number_of_edges(), 2);
        assert_eq!(graph.edges_of("b").next().unwrap().to, "c");

        assert!(RouteGraph::from_edges(["a"], [("b", "a", 1.0)]).is_err());
    }
}
