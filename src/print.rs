//! Diagnostic rendering of a tree rotated 90 degrees counter-clockwise.
//!
//! Elements are written in reverse in-order (right subtree, node, left subtree), one per line,
//! indented by two spaces per level of depth. The largest element is therefore on the first line
//! and the root is the only unindented line.

use std::fmt::{self, Display, Write};

const INDENT: &str = "  ";
const EMPTY: &str = "<empty>";

/// A node that can be rendered by `write_tree`.
pub trait PrintNode {
    type Value: Display;

    fn value(&self) -> &Self::Value;

    fn left(&self) -> Option<&Self>;

    fn right(&self) -> Option<&Self>;
}

pub fn write_tree<N, W>(root: Option<&N>, out: &mut W) -> fmt::Result
where
    N: PrintNode,
    W: Write,
{
    let root = match root {
        Some(root) => root,
        None => return writeln!(out, "{}", EMPTY),
    };

    // nodes whose right subtree has been written, but not the node itself
    let mut stack: Vec<(&N, usize)> = Vec::new();
    let mut curr = Some((root, 0));
    loop {
        while let Some((node, depth)) = curr {
            stack.push((node, depth));
            curr = node.right().map(|right| (right, depth + 1));
        }
        let (node, depth) = match stack.pop() {
            Some(entry) => entry,
            None => return Ok(()),
        };
        for _ in 0..depth {
            out.write_str(INDENT)?;
        }
        writeln!(out, "{}", node.value())?;
        curr = node.left().map(|left| (left, depth + 1));
    }
}
