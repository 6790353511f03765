use crate::avl_tree::node::Node;
use std::cmp::Ordering;
use std::mem;

pub type Tree<T> = Option<Box<Node<T>>>;

/// The largest difference allowed between the heights of the two subtrees of a node.
pub const ALLOWED_IMBALANCE: i32 = 1;

/// The height of an absent subtree. A leaf therefore has height `0`.
pub const HEIGHT_OF_EMPTY: i32 = -1;

pub fn height<T>(tree: &Tree<T>) -> i32 {
    match tree {
        None => HEIGHT_OF_EMPTY,
        Some(ref node) => node.height,
    }
}

// k1, the left child of k2, takes the place of k2 and k2 becomes the right child of k1.
fn rotate_with_left_child<T>(mut k2: Box<Node<T>>) -> Box<Node<T>> {
    let mut k1 = match k2.left.take() {
        Some(k1) => k1,
        None => unreachable!(),
    };
    k2.left = k1.right.take();
    k2.update();
    k1.right = Some(k2);
    k1.update();
    trace!("rotated with left child, subtree height is now {}", k1.height);
    k1
}

// k2, the right child of k1, takes the place of k1 and k1 becomes the left child of k2.
fn rotate_with_right_child<T>(mut k1: Box<Node<T>>) -> Box<Node<T>> {
    let mut k2 = match k1.right.take() {
        Some(k2) => k2,
        None => unreachable!(),
    };
    k1.right = k2.left.take();
    k1.update();
    k2.left = Some(k1);
    k2.update();
    trace!("rotated with right child, subtree height is now {}", k2.height);
    k2
}

fn double_with_left_child<T>(mut k3: Box<Node<T>>) -> Box<Node<T>> {
    k3.left = k3.left.take().map(rotate_with_right_child);
    rotate_with_left_child(k3)
}

fn double_with_right_child<T>(mut k3: Box<Node<T>>) -> Box<Node<T>> {
    k3.right = k3.right.take().map(rotate_with_left_child);
    rotate_with_right_child(k3)
}

// Restores the balance of a node whose subtrees are balanced and differ in height by at most two.
fn balance<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let left_height = height(&node.left);
    let right_height = height(&node.right);

    if left_height - right_height > ALLOWED_IMBALANCE {
        let is_outer_heavy = match node.left {
            Some(ref child) => height(&child.left) >= height(&child.right),
            None => unreachable!(),
        };
        node = if is_outer_heavy {
            rotate_with_left_child(node)
        } else {
            double_with_left_child(node)
        };
    } else if right_height - left_height > ALLOWED_IMBALANCE {
        let is_outer_heavy = match node.right {
            Some(ref child) => height(&child.right) >= height(&child.left),
            None => unreachable!(),
        };
        node = if is_outer_heavy {
            rotate_with_right_child(node)
        } else {
            double_with_right_child(node)
        };
    }

    node.update();
    debug_assert!(node.balance().abs() <= ALLOWED_IMBALANCE);
    node
}

/// Inserts `value` into `tree` and returns the new root of the tree along with whether a new node
/// was created. An element equivalent to `value` is left in place.
pub fn insert<T>(tree: Tree<T>, value: T) -> (Box<Node<T>>, bool)
where
    T: Ord,
{
    let mut node = match tree {
        Some(node) => node,
        None => return (Box::new(Node::new(value)), true),
    };

    let inserted = match value.cmp(&node.value) {
        Ordering::Less => {
            let (left, inserted) = insert(node.left.take(), value);
            node.left = Some(left);
            inserted
        },
        Ordering::Greater => {
            let (right, inserted) = insert(node.right.take(), value);
            node.right = Some(right);
            inserted
        },
        Ordering::Equal => false,
    };

    (balance(node), inserted)
}

// Detaches the minimum node of the subtree rooted at `node`, rebalancing every node on the way
// back up. Returns the new root of the subtree and the detached element.
fn remove_min<T>(mut node: Box<Node<T>>) -> (Tree<T>, T) {
    match node.left.take() {
        Some(left) => {
            let (left, min) = remove_min(left);
            node.left = left;
            (Some(balance(node)), min)
        },
        None => {
            let Node { value, right, .. } = *node;
            (right, value)
        },
    }
}

/// Removes the element equivalent to `value` from `tree` and returns the new root of the tree
/// along with the removed element.
pub fn remove<T>(tree: Tree<T>, value: &T) -> (Tree<T>, Option<T>)
where
    T: Ord,
{
    let mut node = match tree {
        Some(node) => node,
        None => return (None, None),
    };

    let removed = match value.cmp(&node.value) {
        Ordering::Less => {
            let (left, removed) = remove(node.left.take(), value);
            node.left = left;
            removed
        },
        Ordering::Greater => {
            let (right, removed) = remove(node.right.take(), value);
            node.right = right;
            removed
        },
        Ordering::Equal => match (node.left.take(), node.right.take()) {
            (Some(left), Some(right)) => {
                let (right, successor) = remove_min(right);
                node.left = Some(left);
                node.right = right;
                Some(mem::replace(&mut node.value, successor))
            },
            (left, right) => {
                let Node { value: removed, .. } = *node;
                return (left.or(right), Some(removed));
            },
        },
    };

    (Some(balance(node)), removed)
}

pub fn contains<T>(tree: &Tree<T>, value: &T) -> bool
where
    T: Ord,
{
    let mut curr = tree;
    while let Some(ref node) = curr {
        match value.cmp(&node.value) {
            Ordering::Less => curr = &node.left,
            Ordering::Greater => curr = &node.right,
            Ordering::Equal => return true,
        }
    }
    false
}

pub fn min<T>(tree: &Tree<T>) -> Option<&T> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref left_node) = curr.left {
            curr = left_node;
        }
        &curr.value
    })
}

pub fn max<T>(tree: &Tree<T>) -> Option<&T> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref right_node) = curr.right {
            curr = right_node;
        }
        &curr.value
    })
}

/// Releases every node of `tree`, children before their parent.
pub fn destroy<T>(tree: Tree<T>) {
    if let Some(mut node) = tree {
        destroy(node.left.take());
        destroy(node.right.take());
    }
}

pub fn size<T>(tree: &Tree<T>) -> usize {
    match tree {
        None => 0,
        Some(ref node) => size(&node.left) + size(&node.right) + 1,
    }
}

// Returns the height of the subtree if every element lies strictly between the bounds and every
// node is balanced with a correct cached height.
fn checked_height<T>(tree: &Tree<T>, lower: Option<&T>, upper: Option<&T>) -> Option<i32>
where
    T: Ord,
{
    let node = match tree {
        None => return Some(HEIGHT_OF_EMPTY),
        Some(ref node) => node,
    };

    if lower.map_or(false, |lower| node.value <= *lower) {
        return None;
    }
    if upper.map_or(false, |upper| node.value >= *upper) {
        return None;
    }

    let left_height = checked_height(&node.left, lower, Some(&node.value))?;
    let right_height = checked_height(&node.right, Some(&node.value), upper)?;

    if (left_height - right_height).abs() > ALLOWED_IMBALANCE {
        return None;
    }
    if node.height != left_height.max(right_height) + 1 {
        return None;
    }
    Some(node.height)
}

pub fn is_valid<T>(tree: &Tree<T>) -> bool
where
    T: Ord,
{
    checked_height(tree, None, None).is_some()
}
