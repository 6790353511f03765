use crate::bst::node::Node;
use std::cmp::{self, Ordering};

pub type Tree<T> = Option<Box<Node<T>>>;

// precondition: no element of the tree is equivalent to value
pub fn insert<T>(tree: &mut Tree<T>, value: T)
where
    T: Ord,
{
    let mut curr = tree;
    while let Some(node) = curr {
        curr = if value < node.value {
            &mut node.left
        } else {
            &mut node.right
        };
    }
    *curr = Some(Box::new(Node::new(value)));
}

// precondition: there exists a minimum node in the tree
fn remove_min<T>(tree: &mut Tree<T>) -> Box<Node<T>> {
    let mut curr = tree;
    while curr.as_ref().map_or(false, |node| node.left.is_some()) {
        curr = match curr.as_mut() {
            Some(node) => &mut node.left,
            None => unreachable!(),
        };
    }

    match curr.take() {
        Some(mut node) => {
            *curr = node.right.take();
            node
        },
        None => unreachable!(),
    }
}

fn combine_subtrees<T>(left_tree: Tree<T>, mut right_tree: Tree<T>) -> Tree<T> {
    let mut new_root = remove_min(&mut right_tree);
    new_root.left = left_tree;
    new_root.right = right_tree;
    Some(new_root)
}

pub fn remove<T>(tree: &mut Tree<T>, value: &T) -> Option<T>
where
    T: Ord,
{
    let mut curr = tree;
    loop {
        let ordering = match curr.as_ref() {
            Some(node) => value.cmp(&node.value),
            None => return None,
        };
        if ordering == Ordering::Equal {
            break;
        }
        curr = match curr.as_mut() {
            Some(node) => {
                if ordering == Ordering::Less {
                    &mut node.left
                } else {
                    &mut node.right
                }
            },
            None => unreachable!(),
        };
    }

    let node = match curr.take() {
        Some(node) => node,
        None => unreachable!(),
    };
    let Node { value: removed, left, right } = *node;
    *curr = match (left, right) {
        (None, right) => right,
        (left, None) => left,
        (left, right) => combine_subtrees(left, right),
    };
    Some(removed)
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

// The walks below use an explicit stack since a degenerate tree is as deep as it is large.

pub fn height<T>(tree: &Tree<T>) -> i32 {
    let mut max_depth = -1;
    let mut stack = Vec::new();
    stack.extend(tree.as_deref().map(|node| (node, 0)));
    while let Some((node, depth)) = stack.pop() {
        max_depth = cmp::max(max_depth, depth);
        stack.extend(node.left.as_deref().map(|left| (left, depth + 1)));
        stack.extend(node.right.as_deref().map(|right| (right, depth + 1)));
    }
    max_depth
}

/// Returns the number of nodes in the tree, or `None` if some element is not strictly between
/// the elements of its ancestors that bound it.
pub fn checked_size<T>(tree: &Tree<T>) -> Option<usize>
where
    T: Ord,
{
    let mut size = 0;
    let mut stack: Vec<(&Node<T>, Option<&T>, Option<&T>)> = Vec::new();
    stack.extend(tree.as_deref().map(|node| (node, None, None)));
    while let Some((node, lower, upper)) = stack.pop() {
        if lower.map_or(false, |lower| node.value <= *lower) {
            return None;
        }
        if upper.map_or(false, |upper| node.value >= *upper) {
            return None;
        }
        size += 1;
        if let Some(left) = node.left.as_deref() {
            stack.push((left, lower, Some(&node.value)));
        }
        if let Some(right) = node.right.as_deref() {
            stack.push((right, Some(&node.value), upper));
        }
    }
    Some(size)
}

/// Deep copies `tree`, visiting each source node before its children.
pub fn copy<T>(tree: &Tree<T>) -> Tree<T>
where
    T: Clone,
{
    let mut copy = None;
    {
        let mut stack: Vec<(&Node<T>, &mut Tree<T>)> = Vec::new();
        if let Some(node) = tree.as_deref() {
            stack.push((node, &mut copy));
        }
        while let Some((node, link)) = stack.pop() {
            let new_node: &mut Node<T> = link.insert(Box::new(Node::new(node.value.clone())));
            if let Some(left) = node.left.as_deref() {
                stack.push((left, &mut new_node.left));
            }
            if let Some(right) = node.right.as_deref() {
                stack.push((right, &mut new_node.right));
            }
        }
    }
    copy
}

pub fn destroy<T>(tree: Tree<T>) {
    let mut stack: Vec<Box<Node<T>>> = tree.into_iter().collect();
    while let Some(mut node) = stack.pop() {
        stack.extend(node.left.take());
        stack.extend(node.right.take());
    }
}

#[cfg(test)]
mod tests {
    use super::{checked_size, contains, copy, destroy, height, insert, max, min, remove, Tree};
    use crate::bst::node::Node;

    fn build(values: &[i32]) -> Tree<i32> {
        let mut tree = None;
        for value in values {
            insert(&mut tree, *value);
        }
        tree
    }

    // Builds the right-leaning chain that ascending inserts of `0..len` produce, in linear time.
    fn chain(len: i32) -> Tree<i32> {
        let mut tree = None;
        for value in (0..len).rev() {
            let mut node = Node::new(value);
            node.right = tree;
            tree = Some(Box::new(node));
        }
        tree
    }

    #[test]
    fn test_insert_keeps_order() {
        let tree = build(&[5, 3, 8, 1, 4, 9]);
        assert_eq!(checked_size(&tree), Some(6));
        assert_eq!(min(&tree), Some(&1));
        assert_eq!(max(&tree), Some(&9));
        assert!(contains(&tree, &4));
        assert!(!contains(&tree, &7));
    }

    #[test]
    fn test_height_degenerate() {
        let values: Vec<i32> = (0..100).collect();
        let tree = build(&values);
        assert_eq!(height(&tree), 99);
        assert_eq!(height::<i32>(&None), -1);
    }

    #[test]
    fn test_remove_two_children() {
        let mut tree = build(&[5, 3, 8, 7, 9, 6]);
        assert_eq!(remove(&mut tree, &5), Some(5));
        assert_eq!(tree.as_ref().map(|node| node.value), Some(6));
        assert_eq!(checked_size(&tree), Some(5));
        assert!(!contains(&tree, &5));
    }

    #[test]
    fn test_remove_leaf_and_missing() {
        let mut tree = build(&[2, 1, 3]);
        assert_eq!(remove(&mut tree, &4), None);
        assert_eq!(remove(&mut tree, &1), Some(1));
        assert_eq!(remove(&mut tree, &1), None);
        assert_eq!(checked_size(&tree), Some(2));
    }

    #[test]
    fn test_checked_size_detects_misordering() {
        let mut tree = build(&[2, 1, 3]);
        if let Some(ref mut node) = tree {
            node.value = 10;
        }
        assert_eq!(checked_size(&tree), None);
    }

    #[test]
    fn test_destroy_degenerate() {
        let values: Vec<i32> = (0..10_000).collect();
        let tree = build(&values);
        destroy(tree);
    }

    #[test]
    fn test_copy() {
        let tree = build(&[5, 3, 8, 7, 9, 6, 1]);
        let mut copied = copy(&tree);
        assert_eq!(checked_size(&copied), Some(7));
        assert_eq!(height(&copied), height(&tree));

        remove(&mut copied, &5);
        assert!(contains(&tree, &5));
        assert!(!contains(&copied, &5));
        assert!(copy::<i32>(&None).is_none());
    }

    #[test]
    fn test_copy_degenerate() {
        let tree = chain(40_000);
        let copied = copy(&tree);
        assert_eq!(checked_size(&copied), Some(40_000));
        assert_eq!(max(&copied), Some(&39_999));
        destroy(copied);
        destroy(tree);
    }

    #[test]
    fn test_remove_deepest_degenerate() {
        let mut tree = chain(40_000);
        assert_eq!(remove(&mut tree, &39_999), Some(39_999));
        assert_eq!(remove(&mut tree, &39_999), None);
        assert_eq!(max(&tree), Some(&39_998));
        assert_eq!(height(&tree), 39_998);
        destroy(tree);
    }

    #[test]
    fn test_remove_deep_successor() {
        // Root 0 with a leaf on the left and a left-leaning chain 40_000, 39_999, .., 1 on the
        // right, so the successor of the root sits at the bottom of the chain.
        let mut right = None;
        for value in 1..=40_000 {
            let mut node = Node::new(value);
            node.left = right;
            right = Some(Box::new(node));
        }
        let mut root = Node::new(0);
        root.left = Some(Box::new(Node::new(-1)));
        root.right = right;
        let mut tree = Some(Box::new(root));

        assert_eq!(remove(&mut tree, &0), Some(0));
        assert_eq!(tree.as_ref().map(|node| node.value), Some(1));
        assert_eq!(checked_size(&tree), Some(40_001));
        assert_eq!(min(&tree), Some(&-1));
        assert_eq!(max(&tree), Some(&40_000));
        destroy(tree);
    }
}
