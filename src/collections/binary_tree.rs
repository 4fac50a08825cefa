use std::cmp::Ordering;

/// An (unbalanced) binary search tree holding each value at most once.
///
/// Lookups and insertions are O(height); sorted insertion order degrades the
/// tree to a linked list.
#[derive(Debug, Default)]
pub struct BinarySearchTree<T> {
    root: Link<T>,
    len: usize,
}

type Link<T> = Option<Box<Node<T>>>;

#[derive(Debug)]
struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T: Ord> BinarySearchTree<T> {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Returns the number of values in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns *true* if the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Inserts `value` into the tree. Returns *true* exactly if the value was
    /// not present before.
    pub fn insert(&mut self, value: T) -> bool {
        let mut cursor = &mut self.root;
        while let Some(node) = cursor {
            match value.cmp(&node.value) {
                Ordering::Less => cursor = &mut node.left,
                Ordering::Greater => cursor = &mut node.right,
                Ordering::Equal => return false,
            }
        }
        *cursor = Some(Box::new(Node {
            value,
            left: None,
            right: None,
        }));
        self.len += 1;
        true
    }

    /// Returns *true* if `value` is in the tree.
    pub fn contains(&self, value: &T) -> bool {
        let mut cursor = &self.root;
        while let Some(node) = cursor {
            match value.cmp(&node.value) {
                Ordering::Less => cursor = &node.left,
                Ordering::Greater => cursor = &node.right,
                Ordering::Equal => return true,
            }
        }
        false
    }

    /// Returns the smallest value in the tree.
    pub fn min(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some(&node.value)
    }

    /// Returns the largest value in the tree.
    pub fn max(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some(&node.value)
    }

    /// Collects the values in ascending order.
    pub fn in_order(&self) -> Vec<&T> {
        let mut out = Vec::with_capacity(self.len);
        in_order_into(&self.root, &mut out);
        out
    }
}

fn in_order_into<'t, T>(link: &'t Link<T>, out: &mut Vec<&'t T>) {
    if let Some(node) = link {
        in_order_into(&node.left, out);
        out.push(&node.value);
        in_order_into(&node.right, out);
    }
}

impl<T: Ord> FromIterator<T> for BinarySearchTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        for value in iter {
            tree.insert(value);
        }
        tree
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use rand::{seq::SliceRandom, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    use super::*;

    #[test]
    fn insert_rejects_duplicates() {
        let mut tree = BinarySearchTree::new();
        assert!(tree.insert(8));
        assert!(tree.insert(3));
        assert!(tree.insert(10));
        assert!(!tree.insert(3));
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn contains_and_extrema() {
        let tree: BinarySearchTree<_> = [8, 3, 10, 1, 6, 14].into_iter().collect();

        assert!(tree.contains(&6));
        assert!(!tree.contains(&7));
        assert_eq!(tree.min(), Some(&1));
        assert_eq!(tree.max(), Some(&14));
    }

    #[test]
    fn empty_tree_has_no_extrema() {
        let tree: BinarySearchTree<u32> = BinarySearchTree::new();
        assert!(tree.is_empty());
        assert_eq!(tree.min(), None);
        assert_eq!(tree.max(), None);
        assert!(tree.in_order().is_empty());
    }

    #[test]
    fn in_order_traversal_is_sorted() {
        let mut rng = Pcg64Mcg::seed_from_u64(3);
        for n in [1usize, 10, 100] {
            let mut values = (0..n as u64).collect_vec();
            values.shuffle(&mut rng);

            let tree: BinarySearchTree<_> = values.iter().copied().collect();
            assert_eq!(
                tree.in_order().into_iter().copied().collect_vec(),
                (0..n as u64).collect_vec()
            );
        }
    }
}
