//! Binary search tree without any rebalancing.
//!
//! The shape of the tree depends entirely on insertion order, so operations take time linear in
//! the number of elements in the worst case. It exposes the same operations as
//! [`AvlTree`](crate::avl_tree::AvlTree) and serves as the baseline it is measured against.

mod node;
mod set;
mod tree;

pub use self::set::BinarySearchTree;
