/*!
# Single-Pair Shortest Paths

Dijkstra's algorithm over a [`RouteGraph`]. The frontier is a binary min-heap
without decrease-key support, so improved distances push a fresh entry and
superseded entries are skipped when popped (lazy deletion). The search drains
the whole reachable component rather than stopping at the destination; with
non-negative weights the result is the same either way.
*/

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use fxhash::FxHashMap;

use crate::{
    repr::RouteGraph,
    weight::{Weight, UNREACHABLE},
};

/// Frontier entry: a node together with the tentative distance it was pushed
/// with. Ordered by distance first so that `Reverse`-wrapping turns the
/// standard max-heap into a min-heap; ties fall back to the label to keep
/// `Ord` consistent with `Eq`.
#[derive(Debug, Clone, Copy)]
struct HeapEntry<'a> {
    dist: Weight,
    node: &'a str,
}

impl PartialEq for HeapEntry<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry<'_> {}

impl PartialOrd for HeapEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.dist
            .total_cmp(&other.dist)
            .then_with(|| self.node.cmp(other.node))
    }
}

impl RouteGraph {
    /// Computes a shortest route from `source` to `destination`.
    ///
    /// Returns the node labels along the route including both endpoints;
    /// `shortest_path(a, a)` is `Some(vec![a])`. Returns `None` if either
    /// endpoint was never added to the graph, or if no route exists. When
    /// several routes share the minimum total weight, which one is returned
    /// is unspecified.
    ///
    /// Weights must be non-negative; this is not validated, and negative
    /// weights void the result.
    pub fn shortest_path(&self, source: &str, destination: &str) -> Option<Vec<String>> {
        if !self.contains_node(source) || !self.contains_node(destination) {
            log::debug!("shortest_path: unknown endpoint ('{source}' -> '{destination}')");
            return None;
        }

        let mut dist: FxHashMap<&str, Weight> =
            self.nodes().map(|node| (node, UNREACHABLE)).collect();
        dist.insert(source, 0.0);

        let mut prev: FxHashMap<&str, &str> = FxHashMap::default();
        let mut frontier = BinaryHeap::new();
        frontier.push(Reverse(HeapEntry {
            dist: 0.0,
            node: source,
        }));

        while let Some(Reverse(HeapEntry { dist: d, node })) = frontier.pop() {
            // Stale entry: a shorter route to `node` was already recorded.
            if dist.get(node).is_some_and(|&best| d > best) {
                continue;
            }

            for edge in self.edges_of(node) {
                let candidate = d + edge.weight;
                let known = dist.get(edge.to.as_str()).copied().unwrap_or(UNREACHABLE);
                if candidate < known {
                    dist.insert(&edge.to, candidate);
                    prev.insert(&edge.to, node);
                    frontier.push(Reverse(HeapEntry {
                        dist: candidate,
                        node: &edge.to,
                    }));
                }
            }
        }

        // Reconstructing from `prev` alone cannot distinguish "no route" from
        // a single-node route, so check reachability explicitly first.
        if !dist
            .get(destination)
            .copied()
            .unwrap_or(UNREACHABLE)
            .is_finite()
        {
            return None;
        }

        let mut route = vec![destination.to_string()];
        let mut current = destination;
        while let Some(&parent) = prev.get(current) {
            route.push(parent.to_string());
            current = parent;
        }
        route.reverse();
        Some(route)
    }
}
