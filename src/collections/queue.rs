use std::collections::VecDeque;

/// A First-In/First-Out queue.
///
/// Elements enter at the back and leave at the front, in arrival order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Queue<T> {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    /// Returns the number of queued elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns *true* if the queue holds no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Appends an element at the back of the queue.
    pub fn enqueue(&mut self, item: T) {
        self.items.push_back(item);
    }

    /// Removes and returns the front element, or `None` if the queue is
    /// empty.
    pub fn dequeue(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    /// Returns the front element without removing it.
    pub fn front(&self) -> Option<&T> {
        self.items.front()
    }

    /// Returns an iterator over the elements from front to back.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.items.iter()
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn enqueue_dequeue_is_fifo() {
        let mut queue = Queue::new();
        queue.enqueue("first");
        queue.enqueue("second");
        queue.enqueue("third");

        assert_eq!(queue.len(), 3);
        assert_eq!(queue.front(), Some(&"first"));
        assert_eq!(queue.dequeue(), Some("first"));
        assert_eq!(queue.dequeue(), Some("second"));
        assert_eq!(queue.dequeue(), Some("third"));
        assert_eq!(queue.dequeue(), None);
        assert!(queue.is_empty());
    }

    #[test]
    fn iterates_front_to_back() {
        let queue: Queue<_> = (1..=4).collect();
        assert_eq!(queue.iter().copied().collect_vec(), vec![1, 2, 3, 4]);
    }
}
