/*!
# Graph Algorithms

Search algorithms over the graph structures of this crate:

- Dijkstra single-pair shortest paths, exposed as `RouteGraph::shortest_path`.
- [`bfs`]: breadth-first reachability and shortest edge-count paths over a
  plain mapping-of-lists adjacency structure.
*/

pub mod bfs;

mod dijkstra;
