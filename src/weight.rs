/*!
# Edge Weights

We choose `Weight = f64` since route-style inputs (distances, durations, fares)
are naturally fractional and `f64` keeps the full range of such values without
a fixed-point convention. Weights are expected to be **non-negative**: the
shortest-path search relies on this and does not validate it.

`f64` is not `Ord`, so ordered contexts (the Dijkstra frontier) compare weights
via [`f64::total_cmp`] instead of wrapping them in a dedicated newtype.
*/

/// Weight of a single edge, or of an accumulated route.
pub type Weight = f64;

/// Distance assigned to nodes no route has reached.
pub const UNREACHABLE: Weight = Weight::INFINITY;
