use crate::Result;
use std::fmt::Display;
use std::io;

/// The operation set shared by every search tree in this crate.
///
/// Implementations hold at most one element per equivalence class of `Ord`. Inserting an element
/// equivalent to one already stored leaves the tree untouched.
pub trait SearchTree<T>
where
    T: Ord,
{
    /// Inserts `value`, returning `true` if a new node was created.
    fn insert(&mut self, value: T) -> bool;

    /// Removes the element equivalent to `value` and returns it, or `None` if there was none.
    fn remove(&mut self, value: &T) -> Option<T>;

    fn contains(&self, value: &T) -> bool;

    /// Returns the minimum element, or `Error::EmptyTree` if the tree is empty.
    fn find_min(&self) -> Result<&T>;

    /// Returns the maximum element, or `Error::EmptyTree` if the tree is empty.
    fn find_max(&self) -> Result<&T>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Releases every node, leaving the tree as if newly constructed.
    fn make_empty(&mut self);

    /// Returns the number of edges on the longest root-to-leaf path, or `-1` if the tree is empty.
    fn height(&self) -> i32;

    /// Checks every structural invariant the tree promises to uphold.
    fn is_valid(&self) -> bool;

    /// Writes the tree rotated 90 degrees to `out`.
    fn print_tree(&self, out: &mut dyn io::Write) -> Result<()>
    where
        T: Display;
}
