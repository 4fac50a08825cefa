use std::hash::Hash;

use fxhash::FxHashMap;
use itertools::Itertools;

/// Counts occurrences of hashable items, with zero as the implicit count for
/// anything never seen.
#[derive(Debug, Clone, Default)]
pub struct Counter<T> {
    counts: FxHashMap<T, usize>,
}

impl<T: Eq + Hash> Counter<T> {
    /// Creates an empty counter.
    pub fn new() -> Self {
        Self {
            counts: FxHashMap::default(),
        }
    }

    /// Records one occurrence of `item` and returns its updated count.
    pub fn add(&mut self, item: T) -> usize {
        let count = self.counts.entry(item).or_insert(0);
        *count += 1;
        *count
    }

    /// Returns how often `item` was recorded. Unseen items count as `0`.
    pub fn count(&self, item: &T) -> usize {
        self.counts.get(item).copied().unwrap_or(0)
    }

    /// Returns the number of distinct items recorded.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Returns *true* if nothing was recorded yet.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Returns an iterator over the distinct items and their counts, in no
    /// particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&T, usize)> + '_ {
        self.counts.iter().map(|(item, &count)| (item, count))
    }

    /// Returns all items sorted by descending count.
    pub fn most_common(&self) -> Vec<(&T, usize)> {
        self.iter()
            .sorted_by(|(_, a), (_, b)| b.cmp(a))
            .collect_vec()
    }
}

impl<T: Eq + Hash> Extend<T> for Counter<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

impl<T: Eq + Hash> FromIterator<T> for Counter<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut counter = Self::new();
        counter.extend(iter);
        counter
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_accumulate() {
        let mut counter = Counter::new();
        assert_eq!(counter.add("a"), 1);
        assert_eq!(counter.add("b"), 1);
        assert_eq!(counter.add("a"), 2);

        assert_eq!(counter.count(&"a"), 2);
        assert_eq!(counter.count(&"b"), 1);
        assert_eq!(counter.len(), 2);
    }

    #[test]
    fn unseen_items_count_as_zero() {
        let counter: Counter<&str> = Counter::new();
        assert!(counter.is_empty());
        assert_eq!(counter.count(&"missing"), 0);
    }

    #[test]
    fn word_frequencies() {
        let text = "the quick fox and the lazy dog and the cat";
        let counter: Counter<_> = text.split_whitespace().collect();

        assert_eq!(counter.count(&"the"), 3);
        assert_eq!(counter.count(&"and"), 2);
        assert_eq!(counter.count(&"fox"), 1);

        let ranking = counter.most_common();
        assert_eq!(ranking[0], (&"the", 3));
        assert_eq!(ranking[1], (&"and", 2));
    }
}
