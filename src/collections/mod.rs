/*!
# Teaching Collections

Classic container structures implemented over generic payload types. None of
them are meant to outperform their `std` counterparts; they exist to spell
out the standard operations (and are handy where a minimal, explicit API is
preferable to the full `std` surface).

- [`Stack`]: LIFO push/pop/peek over a `Vec`.
- [`Queue`]: FIFO enqueue/dequeue over a `VecDeque`.
- [`LinkedList`]: singly linked list with removal by value.
- [`BinarySearchTree`]: ordered set with in-order traversal.
- [`Counter`]: occurrence counter with default-zero lookups.
*/

mod binary_tree;
mod counter;
mod linked_list;
mod queue;
mod stack;

pub use binary_tree::BinarySearchTree;
pub use counter::Counter;
pub use linked_list::LinkedList;
pub use queue::Queue;
pub use stack::Stack;
