use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents a node in a tree structure. The node owns its children and their order is the order
/// in which every search visits them.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TreeNode<T> {
    /// Label of the node. For filesystem trees this is an [`crate::FsEntry`].
    pub value: T,
    /// The children of the node in insertion order.
    pub children: Vec<TreeNode<T>>,
}

impl<T> TreeNode<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            children: vec![],
        }
    }

    /// Appends `child` after the existing children.
    pub fn add_child(&mut self, child: TreeNode<T>) {
        self.children.push(child);
    }

    /// Appends every node of `children` in order, same as calling [`TreeNode::add_child`] for each.
    pub fn add_children<I>(&mut self, children: I)
    where
        I: IntoIterator<Item = TreeNode<T>>,
    {
        for child in children {
            self.add_child(child);
        }
    }

    /// Builder form of [`TreeNode::add_children`], handy when assembling a tree by hand.
    pub fn with_children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = TreeNode<T>>,
    {
        self.add_children(children);
        self
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of edges on the longest path from this node down to a leaf.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack = vec![(self, 0usize)];
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.children.iter().map(|child| (child, depth + 1)));
        }
        height
    }

    /// Total number of nodes, this one included.
    pub fn len(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children.iter());
        }
        count
    }
}

impl<T: fmt::Display> fmt::Display for TreeNode<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.value)
    }
}
