/*!
# Breadth-First Search

Reachability and shortest edge-count paths over a caller-supplied adjacency
structure: any `HashMap<L, Vec<L>>` mapping a label to its neighbor list. The
label type is generic; edges have implicit weight 1.

Unlike [`RouteGraph`](crate::repr::RouteGraph), the mapping carries no
node-existence invariant: a label may appear only as a neighbor (it simply has
no outgoing entries), and an unknown `start` or `target` is not an error, the
search just fails.
*/

use std::collections::{HashMap, VecDeque};
use std::hash::{BuildHasher, Hash};

use fxhash::{FxHashMap, FxHashSet};

/// Returns *true* if `target` is reachable from `start`.
///
/// `search(g, a, a)` is always *true*, even for labels absent from `graph`.
pub fn search<L, S>(graph: &HashMap<L, Vec<L>, S>, start: &L, target: &L) -> bool
where
    L: Eq + Hash,
    S: BuildHasher,
{
    let mut visited: FxHashSet<&L> = FxHashSet::default();
    let mut queue: VecDeque<&L> = VecDeque::new();
    visited.insert(start);
    queue.push_back(start);

    while let Some(node) = queue.pop_front() {
        if node == target {
            return true;
        }
        for neighbor in graph.get(node).into_iter().flatten() {
            if visited.insert(neighbor) {
                queue.push_back(neighbor);
            }
        }
    }

    false
}

/// Computes a shortest path (fewest edges) from `start` to `target`.
///
/// Returns the labels along the path including both endpoints;
/// `search_path(g, a, a)` is `Some(vec![a])`. Returns `None` if `target`
/// cannot be reached. When several shortest paths exist, which one is
/// returned is unspecified.
pub fn search_path<'a, L, S>(
    graph: &'a HashMap<L, Vec<L>, S>,
    start: &'a L,
    target: &'a L,
) -> Option<Vec<L>>
where
    L: Eq + Hash + Clone,
    S: BuildHasher,
{
    let mut visited: FxHashSet<&L> = FxHashSet::default();
    let mut parent: FxHashMap<&L, &L> = FxHashMap::default();
    let mut queue: VecDeque<&L> = VecDeque::new();
    visited.insert(start);
    queue.push_back(start);

    while let Some(node) = queue.pop_front() {
        if node == target {
            // Walk the discovery tree back to `start`.
            let mut path = vec![node.clone()];
            let mut current = node;
            while let Some(&p) = parent.get(current) {
                path.push(p.clone());
                current = p;
            }
            path.reverse();
            return Some(path);
        }

        for neighbor in graph.get(node).into_iter().flatten() {
            if visited.insert(neighbor) {
                parent.insert(neighbor, node);
                queue.push_back(neighbor);
            }
        }
    }

    None
}
