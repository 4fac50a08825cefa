/// A Last-In/First-Out stack.
///
/// Elements are pushed and popped at the same end; no other access order is
/// offered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    /// Creates an empty stack.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Returns the number of elements on the stack.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns *true* if the stack holds no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Pushes an element on top of the stack.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Removes and returns the top element, or `None` if the stack is empty.
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Returns the top element without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    /// Returns an iterator over the elements from top to bottom.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.items.iter().rev()
    }
}

impl<T> FromIterator<T> for Stack<T> {
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
    fn push_pop_is_lifo() {
        let mut stack = Stack::new();
        stack.push(5);
        stack.push(10);
        stack.push(15);

        assert_eq!(stack.len(), 3);
        assert_eq!(stack.peek(), Some(&15));
        assert_eq!(stack.pop(), Some(15));
        assert_eq!(stack.pop(), Some(10));
        assert_eq!(stack.pop(), Some(5));
        assert_eq!(stack.pop(), None);
        assert!(stack.is_empty());
    }

    #[test]
    fn iterates_top_to_bottom() {
        let stack: Stack<_> = (1..=4).collect();
        assert_eq!(stack.iter().copied().collect_vec(), vec![4, 3, 2, 1]);
    }

    #[test]
    fn empty_stack_reports_nothing() {
        let mut stack: Stack<String> = Stack::new();
        assert_eq!(stack.peek(), None);
        assert_eq!(stack.pop(), None);
        assert_eq!(stack.len(), 0);
    }
}
