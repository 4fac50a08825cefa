/*!
`wgraphs` is a small graph data structure & algorithms library for graphs that are
- **w**eighted : every edge carries a non-negative weight,
- **w**ord-labelled : nodes are arbitrary string labels rather than dense integer ids.

# Representation

The central type is [`RouteGraph`](crate::repr::RouteGraph), a directed multigraph
stored as an adjacency list keyed by node label. Parallel edges between the same
pair of nodes are retained, so two routes with different weights can coexist.
See the [`repr`] module for details and the [`weight`] module for the choice of
edge-weight scalar.

# Algorithms

- `RouteGraph::shortest_path` computes single-pair shortest routes with
  Dijkstra's algorithm (lazy-deletion priority queue, predecessor
  reconstruction).
- [`algo::bfs`] provides breadth-first reachability and shortest edge-count
  paths over any caller-supplied mapping-of-lists adjacency structure. It does
  not require a [`RouteGraph`](crate::repr::RouteGraph); any `HashMap<L, Vec<L>>`
  works, with an arbitrary label type.

# Collections

The [`collections`] module carries a handful of classic teaching containers
(stack, queue, linked list, binary search tree, counter) implemented over
generic payload types. They are independent of the graph types.

# Usage

```
use wgraphs::prelude::*;

let mut graph = RouteGraph::new();
graph.add_node("JFK");
graph.add_node("ORD");
graph.add_node("DFW");
graph.add_edge("JFK", "ORD", 800.0);
graph.add_edge("ORD", "DFW", 900.0);

let route = graph.shortest_path("JFK", "DFW").unwrap();
assert_eq!(route, vec!["JFK", "ORD", "DFW"]);
```
*/

pub mod algo;
pub mod collections;
pub mod error;
pub mod repr;
pub mod weight;

#[cfg(test)]
pub(crate) mod testing;

/// `wgraphs::prelude` includes the graph representation, weight and error
/// types, and the BFS search module.
pub mod prelude {
    pub use super::{
        algo::bfs,
        error::{GraphError, Result},
        repr::{RouteEdge, RouteGraph},
        weight::{Weight, UNREACHABLE},
    };
}
