//! Ordered search trees over a strict total order.
//!
//! Two trees share one operation set through [`SearchTree`]: [`avl_tree::AvlTree`], which keeps
//! the heights of the two child subtrees of every node within one of each other, and
//! [`bst::BinarySearchTree`], which performs no rebalancing and serves as a baseline.

#[macro_use]
extern crate log;

mod error;
mod print;
mod search_tree;
pub mod avl_tree;
pub mod bst;

pub use crate::error::{Error, Result};
pub use crate::search_tree::SearchTree;
