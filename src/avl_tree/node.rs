use crate::avl_tree::tree::{self, Tree};
use crate::print::PrintNode;
use std::cmp;

/// A struct representing an internal node of an avl tree.
///
/// Cloning a node deep copies the whole subtree below it, cached heights included.
#[derive(Clone)]
pub struct Node<T> {
    pub value: T,
    pub height: i32,
    pub left: Tree<T>,
    pub right: Tree<T>,
}

impl<T> Node<T> {
    pub fn new(value: T) -> Self {
        Node {
            value,
            height: 0,
            left: None,
            right: None,
        }
    }

    pub fn update(&mut self) {
        self.height = cmp::max(tree::height(&self.left), tree::height(&self.right)) + 1;
    }

    pub fn balance(&self) -> i32 {
        tree::height(&self.left) - tree::height(&self.right)
    }
}

impl<T> PrintNode for Node<T>
where
    T: std::fmt::Display,
{
    type Value = T;

    fn value(&self) -> &T {
        &self.value
    }

    fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }
}
