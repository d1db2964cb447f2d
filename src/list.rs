//! List owner of a chain's root node.
//!
//! The list holds the head of the chain and delegates every operation to it,
//! except index-0 insertion, which replaces the root (a node cannot replace
//! itself at the list level).

use crate::error::ChainError;
use crate::node::{Iter, NodeRef};
use core::fmt;

/// Owner of a chain's head node.
///
/// A list is never empty: it is constructed from its first value (or an
/// existing node) and the forward chain from the root is the sole ownership
/// path for the rest of the nodes.
///
/// # Example
///
/// ```
/// use chainlist::List;
///
/// let mut list = List::new(1);
/// list.append(2);
/// list.insert_at(0, 0).unwrap();
///
/// let values: Vec<i32> = list.iter().map(|n| *n.value()).collect();
/// assert_eq!(values, [0, 1, 2]);
/// ```
pub struct List<T> {
    root: NodeRef<T>,
}

// A list is never empty, so there is no is_empty to pair with len.
#[allow(clippy::len_without_is_empty)]
impl<T> List<T> {
    /// Creates a list whose root node wraps `value`.
    pub fn new(value: T) -> Self {
        Self {
            root: NodeRef::new(value),
        }
    }

    /// Creates a list that adopts an existing node (and its chain) as root.
    pub fn from_node(root: NodeRef<T>) -> Self {
        Self { root }
    }

    /// Returns a handle to the root node.
    pub fn root(&self) -> NodeRef<T> {
        self.root.clone()
    }

    /// Returns the number of nodes in the chain.
    pub fn len(&self) -> usize {
        self.root.len()
    }

    /// Wraps `value` in a new node and inserts it at position `index`.
    ///
    /// Position 0 makes the new node the root, linked in front of the old
    /// one. Other positions delegate to the root node; a position beyond the
    /// chain's end is a [`ChainError::PositionOutOfRange`].
    pub fn insert_at(&mut self, value: T, index: usize) -> Result<NodeRef<T>, ChainError> {
        self.insert_node_at(NodeRef::new(value), index)
    }

    /// Inserts an existing node at position `index`.
    ///
    /// See [`List::insert_at`].
    pub fn insert_node_at(
        &mut self,
        node: NodeRef<T>,
        index: usize,
    ) -> Result<NodeRef<T>, ChainError> {
        if index == 0 {
            // The old root is the head, so it has no predecessor and the
            // link below never splices.
            node.link_forward(self.root.clone());
            self.root = node.clone();
            return Ok(node);
        }
        self.root.insert_node_at(node, index).ok_or_else(|| {
            ChainError::PositionOutOfRange {
                index,
                len: self.root.len(),
            }
        })
    }

    /// Wraps `value` in a new node and links it after the chain's last node.
    pub fn append(&self, value: T) -> NodeRef<T> {
        self.root.append(value)
    }

    /// Links an existing node after the chain's last node.
    pub fn append_node(&self, node: NodeRef<T>) -> NodeRef<T> {
        self.root.append_node(node)
    }

    /// Linear search from the root for the first node whose value equals
    /// `value`.
    pub fn get(&self, value: &T) -> Option<NodeRef<T>>
    where
        T: PartialEq,
    {
        self.root.get(value)
    }

    /// Iterates over the node handles from the root to the tail.
    pub fn iter(&self) -> Iter<T> {
        self.root.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "List[")?;
        for (i, node) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{:?}", node.value())?;
        }
        write!(f, "]")
    }
}
