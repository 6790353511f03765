use crate::bst::tree;
use crate::print;
use crate::{Error, Result, SearchTree};
use std::fmt::{self, Display};
use std::io;

/// An ordered set implemented using an unbalanced binary search tree.
///
/// # Examples
/// ```
/// use search_trees::bst::BinarySearchTree;
///
/// let mut tree = BinarySearchTree::new();
/// tree.insert(3);
/// tree.insert(0);
///
/// assert_eq!(tree.len(), 2);
/// assert_eq!(tree.find_min().ok(), Some(&0));
///
/// assert_eq!(tree.remove(&0), Some(0));
/// assert_eq!(tree.remove(&1), None);
/// ```
pub struct BinarySearchTree<T> {
    root: tree::Tree<T>,
    len: usize,
}

impl<T> BinarySearchTree<T>
where
    T: Ord,
{
    /// Constructs a new, empty `BinarySearchTree<T>`.
    pub fn new() -> Self {
        BinarySearchTree {
            root: None,
            len: 0,
        }
    }

    /// Inserts a value into the tree. Returns `true` if the value was not already present. If an
    /// equivalent value is already present, the tree is left unchanged.
    ///
    /// # Examples
    /// ```
    /// use search_trees::bst::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// ```
    pub fn insert(&mut self, value: T) -> bool {
        if tree::contains(&self.root, &value) {
            return false;
        }
        tree::insert(&mut self.root, value);
        self.len += 1;
        true
    }

    /// Removes a value from the tree. If the value exists in the tree, it will return the stored
    /// value. Otherwise it will return `None`.
    pub fn remove(&mut self, value: &T) -> Option<T> {
        let removed = tree::remove(&mut self.root, value);
        if removed.is_some() {
            self.len -= 1;
        }
        removed
    }

    /// Checks if a value exists in the tree.
    pub fn contains(&self, value: &T) -> bool {
        tree::contains(&self.root, value)
    }

    /// Returns the minimum value of the tree, or `Error::EmptyTree` if the tree is empty.
    pub fn find_min(&self) -> Result<&T> {
        tree::min(&self.root).ok_or(Error::EmptyTree)
    }

    /// Returns the maximum value of the tree, or `Error::EmptyTree` if the tree is empty.
    pub fn find_max(&self) -> Result<&T> {
        tree::max(&self.root).ok_or(Error::EmptyTree)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Releases every node of the tree, leaving it empty.
    pub fn make_empty(&mut self) {
        debug!("releasing {} nodes of binary search tree", self.len);
        tree::destroy(self.root.take());
        self.len = 0;
    }

    /// Returns the height of the tree: `-1` when empty, `0` for a single element. Runs in time
    /// linear in the number of elements.
    pub fn height(&self) -> i32 {
        tree::height(&self.root)
    }

    /// Returns `true` if the elements are in strictly increasing in-order and the cached length
    /// matches the number of nodes.
    pub fn is_valid(&self) -> bool {
        tree::checked_size(&self.root) == Some(self.len)
    }

    /// Writes the tree rotated 90 degrees to `out`. An empty tree is written as `<empty>`.
    pub fn print_tree<W>(&self, out: &mut W) -> Result<()>
    where
        T: Display,
        W: io::Write + ?Sized,
    {
        write!(out, "{}", self)?;
        Ok(())
    }
}

impl<T> Display for BinarySearchTree<T>
where
    T: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        print::write_tree(self.root.as_deref(), f)
    }
}

impl<T> Clone for BinarySearchTree<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        BinarySearchTree {
            root: tree::copy(&self.root),
            len: self.len,
        }
    }

    fn clone_from(&mut self, source: &Self) {
        tree::destroy(self.root.take());
        self.root = tree::copy(&source.root);
        self.len = source.len;
    }
}

impl<T> Drop for BinarySearchTree<T> {
    fn drop(&mut self) {
        tree::destroy(self.root.take());
    }
}

impl<T> Default for BinarySearchTree<T>
where
    T: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SearchTree<T> for BinarySearchTree<T>
where
    T: Ord,
{
    fn insert(&mut self, value: T) -> bool {
        BinarySearchTree::insert(self, value)
    }

    fn remove(&mut self, value: &T) -> Option<T> {
        BinarySearchTree::remove(self, value)
    }

    fn contains(&self, value: &T) -> bool {
        BinarySearchTree::contains(self, value)
    }

    fn find_min(&self) -> Result<&T> {
        BinarySearchTree::find_min(self)
    }

    fn find_max(&self) -> Result<&T> {
        BinarySearchTree::find_max(self)
    }

    fn len(&self) -> usize {
        BinarySearchTree::len(self)
    }

    fn is_empty(&self) -> bool {
        BinarySearchTree::is_empty(self)
    }

    fn make_empty(&mut self) {
        BinarySearchTree::make_empty(self)
    }

    fn height(&self) -> i32 {
        BinarySearchTree::height(self)
    }

    fn is_valid(&self) -> bool {
        BinarySearchTree::is_valid(self)
    }

    fn print_tree(&self, out: &mut dyn io::Write) -> Result<()>
    where
        T: Display,
    {
        BinarySearchTree::print_tree(self, out)
    }
}
