use crate::avl_tree::tree;
use crate::print;
use crate::{Error, Result, SearchTree};
use std::fmt::{self, Display};
use std::io;

/// An ordered set implemented using an avl tree.
///
/// An avl tree is a self-balancing binary search tree that maintains the invariant that the
/// heights of two child subtrees of any node differ by at most one. Every insertion and removal
/// restores that invariant on its way back to the root with at most one single or double rotation
/// per ancestor, so the height of a tree holding `n` elements never exceeds about
/// `1.44 * log2(n + 2)`.
///
/// # Examples
/// ```
/// use search_trees::avl_tree::AvlTree;
///
/// let mut tree = AvlTree::new();
/// tree.insert(0);
/// tree.insert(3);
///
/// assert_eq!(tree.len(), 2);
/// assert_eq!(tree.find_min().ok(), Some(&0));
/// assert_eq!(tree.find_max().ok(), Some(&3));
///
/// assert_eq!(tree.remove(&0), Some(0));
/// assert_eq!(tree.remove(&1), None);
/// ```
pub struct AvlTree<T> {
    root: tree::Tree<T>,
    len: usize,
}

impl<T> AvlTree<T>
where
    T: Ord,
{
    /// Constructs a new, empty `AvlTree<T>`.
    ///
    /// # Examples
    /// ```
    /// use search_trees::avl_tree::AvlTree;
    ///
    /// let tree: AvlTree<u32> = AvlTree::new();
    /// ```
    pub fn new() -> Self {
        AvlTree {
            root: None,
            len: 0,
        }
    }

    /// Inserts a value into the tree. Returns `true` if the value was not already present. If an
    /// equivalent value is already present, the tree is left unchanged and the stored value is
    /// kept.
    ///
    /// # Examples
    /// ```
    /// use search_trees::avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// assert!(tree.insert(1));
    /// assert!(tree.contains(&1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> bool {
        let (root, inserted) = tree::insert(self.root.take(), value);
        self.root = Some(root);
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Removes a value from the tree. If the value exists in the tree, it will return the stored
    /// value. Otherwise it will return `None`.
    ///
    /// # Examples
    /// ```
    /// use search_trees::avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(1);
    /// assert_eq!(tree.remove(&1), Some(1));
    /// assert_eq!(tree.remove(&1), None);
    /// ```
    pub fn remove(&mut self, value: &T) -> Option<T> {
        let (root, removed) = tree::remove(self.root.take(), value);
        self.root = root;
        if removed.is_some() {
            self.len -= 1;
        }
        removed
    }

    /// Checks if a value exists in the tree.
    ///
    /// # Examples
    /// ```
    /// use search_trees::avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(1);
    /// assert!(!tree.contains(&0));
    /// assert!(tree.contains(&1));
    /// ```
    pub fn contains(&self, value: &T) -> bool {
        tree::contains(&self.root, value)
    }

    /// Returns the minimum value of the tree, or `Error::EmptyTree` if the tree is empty.
    ///
    /// # Examples
    /// ```
    /// use search_trees::avl_tree::AvlTree;
    /// use search_trees::Error;
    ///
    /// let mut tree = AvlTree::new();
    /// assert!(matches!(tree.find_min(), Err(Error::EmptyTree)));
    ///
    /// tree.insert(1);
    /// tree.insert(3);
    /// assert_eq!(tree.find_min().ok(), Some(&1));
    /// ```
    pub fn find_min(&self) -> Result<&T> {
        tree::min(&self.root).ok_or(Error::EmptyTree)
    }

    /// Returns the maximum value of the tree, or `Error::EmptyTree` if the tree is empty.
    ///
    /// # Examples
    /// ```
    /// use search_trees::avl_tree::AvlTree;
    /// use search_trees::Error;
    ///
    /// let mut tree = AvlTree::new();
    /// assert!(matches!(tree.find_max(), Err(Error::EmptyTree)));
    ///
    /// tree.insert(1);
    /// tree.insert(3);
    /// assert_eq!(tree.find_max().ok(), Some(&3));
    /// ```
    pub fn find_max(&self) -> Result<&T> {
        tree::max(&self.root).ok_or(Error::EmptyTree)
    }

    /// Returns the number of elements in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the tree is empty.
    ///
    /// # Examples
    /// ```
    /// use search_trees::avl_tree::AvlTree;
    ///
    /// let tree: AvlTree<u32> = AvlTree::new();
    /// assert!(tree.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Releases every node of the tree, leaving it empty.
    ///
    /// # Examples
    /// ```
    /// use search_trees::avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(1);
    /// tree.insert(2);
    /// tree.make_empty();
    /// assert!(tree.is_empty());
    /// ```
    pub fn make_empty(&mut self) {
        debug!("releasing {} nodes of avl tree", self.len);
        tree::destroy(self.root.take());
        self.len = 0;
    }

    /// Returns the height of the tree: `-1` when empty, `0` for a single element.
    pub fn height(&self) -> i32 {
        tree::height(&self.root)
    }

    /// Returns `true` if the elements are in strictly increasing in-order, every node is balanced,
    /// every cached height is correct, and the cached length matches the number of nodes.
    pub fn is_valid(&self) -> bool {
        tree::is_valid(&self.root) && tree::size(&self.root) == self.len
    }

    /// Writes the tree rotated 90 degrees to `out`: the right subtree above its parent, the left
    /// subtree below, and two spaces of indentation per level. An empty tree is written as
    /// `<empty>`.
    ///
    /// # Examples
    /// ```
    /// use search_trees::avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(1);
    /// tree.insert(2);
    /// tree.insert(3);
    ///
    /// let mut out = Vec::new();
    /// tree.print_tree(&mut out).unwrap();
    /// assert_eq!(String::from_utf8(out).unwrap(), "  3\n2\n  1\n");
    /// ```
    pub fn print_tree<W>(&self, out: &mut W) -> Result<()>
    where
        T: Display,
        W: io::Write + ?Sized,
    {
        write!(out, "{}", self)?;
        Ok(())
    }
}

impl<T> Display for AvlTree<T>
where
    T: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        print::write_tree(self.root.as_deref(), f)
    }
}

impl<T> Clone for AvlTree<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        AvlTree {
            root: self.root.clone(),
            len: self.len,
        }
    }

    fn clone_from(&mut self, source: &Self) {
        tree::destroy(self.root.take());
        self.root = source.root.clone();
        self.len = source.len;
    }
}

impl<T> Drop for AvlTree<T> {
    fn drop(&mut self) {
        tree::destroy(self.root.take());
    }
}

impl<T> Default for AvlTree<T>
where
    T: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SearchTree<T> for AvlTree<T>
where
    T: Ord,
{
    fn insert(&mut self, value: T) -> bool {
        AvlTree::insert(self, value)
    }

    fn remove(&mut self, value: &T) -> Option<T> {
        AvlTree::remove(self, value)
    }

    fn contains(&self, value: &T) -> bool {
        AvlTree::contains(self, value)
    }

    fn find_min(&self) -> Result<&T> {
        AvlTree::find_min(self)
    }

    fn find_max(&self) -> Result<&T> {
        AvlTree::find_max(self)
    }

    fn len(&self) -> usize {
        AvlTree::len(self)
    }

    fn is_empty(&self) -> bool {
        AvlTree::is_empty(self)
    }

    fn make_empty(&mut self) {
        AvlTree::make_empty(self)
    }

    fn height(&self) -> i32 {
        AvlTree::height(self)
    }

    fn is_valid(&self) -> bool {
        AvlTree::is_valid(self)
    }

    fn print_tree(&self, out: &mut dyn io::Write) -> Result<()>
    where
        T: Display,
    {
        AvlTree::print_tree(self, out)
    }
}

#[cfg(test)]
mod tests {
    use super::AvlTree;
    use crate::Error;
    use std::io;

    #[test]
    fn test_len_empty() {
        let tree: AvlTree<u32> = AvlTree::new();
        assert_eq!(tree.len(), 0);
        assert_eq!(tree.height(), -1);
    }

    #[test]
    fn test_is_empty() {
        let tree: AvlTree<u32> = AvlTree::new();
        assert!(tree.is_empty());
        assert!(tree.is_valid());
    }

    #[test]
    fn test_min_max_empty() {
        let tree: AvlTree<u32> = AvlTree::new();
        assert!(matches!(tree.find_min(), Err(Error::EmptyTree)));
        assert!(matches!(tree.find_max(), Err(Error::EmptyTree)));
    }

    #[test]
    fn test_insert() {
        let mut tree = AvlTree::new();
        assert!(tree.insert(1));
        assert!(tree.contains(&1));
        assert!(!tree.is_empty());
    }

    #[test]
    fn test_insert_duplicate() {
        let mut tree = AvlTree::new();
        assert!(tree.insert(1));
        assert!(!tree.insert(1));
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.height(), 0);
    }

    #[test]
    fn test_remove() {
        let mut tree = AvlTree::new();
        tree.insert(1);
        assert_eq!(tree.remove(&1), Some(1));
        assert!(!tree.contains(&1));
        assert!(tree.is_empty());
    }

    #[test]
    fn test_min_max() {
        let mut tree = AvlTree::new();
        tree.insert(1);
        tree.insert(3);
        tree.insert(5);

        assert_eq!(tree.find_min().ok(), Some(&1));
        assert_eq!(tree.find_max().ok(), Some(&5));
    }

    #[test]
    fn test_make_empty() {
        let mut tree = AvlTree::new();
        for i in 0..10 {
            tree.insert(i);
        }
        tree.make_empty();

        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert!(!tree.contains(&2));
        assert!(matches!(tree.find_min(), Err(Error::EmptyTree)));

        tree.insert(4);
        assert_eq!(tree.find_max().ok(), Some(&4));
    }

    #[test]
    fn test_clone() {
        let mut tree = AvlTree::new();
        for i in 0..10 {
            tree.insert(i);
        }

        let mut copy = tree.clone();
        assert!(copy.is_valid());
        assert_eq!(copy.height(), tree.height());
        assert_eq!(copy.to_string(), tree.to_string());

        tree.remove(&3);
        copy.insert(42);
        assert!(!tree.contains(&3));
        assert!(copy.contains(&3));
        assert!(!tree.contains(&42));
    }

    #[test]
    fn test_clone_from() {
        let mut source = AvlTree::new();
        source.insert('a');
        source.insert('b');

        let mut target = AvlTree::new();
        target.insert('z');
        target.clone_from(&source);

        assert!(!target.contains(&'z'));
        assert!(target.contains(&'a'));
        assert_eq!(target.len(), 2);
        assert!(target.is_valid());
    }

    #[test]
    fn test_print_tree_empty() {
        let tree: AvlTree<u32> = AvlTree::new();
        let mut out = Vec::new();
        tree.print_tree(&mut out).unwrap();
        assert_eq!(out, b"<empty>\n");
    }

    struct ClosedSink;

    impl io::Write for ClosedSink {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_print_tree_sink_error() {
        let mut tree = AvlTree::new();
        tree.insert(1);
        assert!(matches!(tree.print_tree(&mut ClosedSink), Err(Error::IOError(_))));
        assert!(tree.contains(&1));
    }
}
