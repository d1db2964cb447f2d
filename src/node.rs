//! Chain nodes and the traversal operations built on their links.
//!
//! A [`NodeRef`] is a cheap cloneable handle to a node. The forward link owns
//! the successor; the backward link is a weak mirror maintained by the link
//! primitives in `link.rs`. All traversals are iterative, so chain length
//! never bounds the call stack.

use alloc::rc::{Rc, Weak};
use core::cell::{Ref, RefCell, RefMut};
use core::fmt;
use core::hash::{Hash, Hasher};

/// Interior node state. Only the link primitives and accessors touch this.
pub(crate) struct RawNode<T> {
    pub(crate) value: T,
    /// Owning reference to the successor, or `None` at the tail.
    pub(crate) forward: Option<NodeRef<T>>,
    /// Non-owning mirror of some predecessor's forward link.
    pub(crate) backward: Option<Weak<RefCell<RawNode<T>>>>,
}

impl<T> Drop for RawNode<T> {
    fn drop(&mut self) {
        // Steal the chain front to back so dropping a long chain does not
        // recurse through every node's drop glue. A node still referenced
        // elsewhere keeps its suffix and runs the same loop when its last
        // handle drops.
        let mut cursor = self.forward.take();
        while let Some(node) = cursor {
            if Rc::strong_count(&node.0) > 1 {
                break;
            }
            cursor = node.0.borrow_mut().forward.take();
        }
    }
}

/// Shared handle to a chain node.
///
/// Cloning the handle shares the node; two handles can point at the same node
/// (check with [`NodeRef::ptr_eq`]) while equality and hashing go by value.
///
/// # Example
///
/// ```
/// use chainlist::NodeRef;
///
/// let head = NodeRef::new(1);
/// head.append(2);
/// head.append(3);
///
/// assert_eq!(head.len(), 3);
/// assert_eq!(*head.forward().unwrap().value(), 2);
/// ```
pub struct NodeRef<T>(pub(crate) Rc<RefCell<RawNode<T>>>);

impl<T> Clone for NodeRef<T> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

// A chain always holds at least one node, so there is no is_empty to pair
// with len.
#[allow(clippy::len_without_is_empty)]
impl<T> NodeRef<T> {
    /// Creates a detached node holding `value`.
    ///
    /// The value is taken by value, so a node always holds a payload; there
    /// is no absent state to reject at run time.
    pub fn new(value: T) -> Self {
        Self(Rc::new(RefCell::new(RawNode {
            value,
            forward: None,
            backward: None,
        })))
    }

    /// Borrows the node's value.
    ///
    /// # Panics
    ///
    /// Panics if the value is currently borrowed mutably.
    pub fn value(&self) -> Ref<'_, T> {
        Ref::map(self.0.borrow(), |n| &n.value)
    }

    /// Mutably borrows the node's value.
    ///
    /// # Panics
    ///
    /// Panics if the value is currently borrowed.
    pub fn value_mut(&self) -> RefMut<'_, T> {
        RefMut::map(self.0.borrow_mut(), |n| &mut n.value)
    }

    /// Replaces the node's value, returning the old one.
    pub fn replace_value(&self, value: T) -> T {
        core::mem::replace(&mut self.0.borrow_mut().value, value)
    }

    /// Returns the successor, or `None` at the tail.
    pub fn forward(&self) -> Option<NodeRef<T>> {
        self.0.borrow().forward.clone()
    }

    /// Returns the predecessor, or `None` at the head.
    ///
    /// The backward link is a weak handle; if the predecessor has been
    /// dropped the link counts as absent.
    pub fn backward(&self) -> Option<NodeRef<T>> {
        self.0.borrow().backward.as_ref().and_then(Weak::upgrade).map(NodeRef)
    }

    /// Returns `true` if both handles refer to the same node.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Distance from the chain's head: 0 at the head, else one more than the
    /// predecessor's index.
    pub fn idx(&self) -> usize {
        let mut depth = 0;
        let mut current = self.clone();
        while let Some(prev) = current.backward() {
            depth += 1;
            current = prev;
        }
        depth
    }

    /// Total node count of the whole chain, regardless of which node it is
    /// invoked on.
    pub fn len(&self) -> usize {
        let mut ahead = 0;
        let mut current = self.clone();
        while let Some(next) = current.forward() {
            ahead += 1;
            current = next;
        }
        self.idx() + ahead + 1
    }

    /// Wraps `value` in a new node and splices it immediately after `self`.
    ///
    /// If `self` already has a successor the new node is spliced in between
    /// (see [`NodeRef::link_forward`]). Returns the inserted node.
    pub fn insert(&self, value: T) -> NodeRef<T> {
        self.insert_node(NodeRef::new(value))
    }

    /// Splices an existing node immediately after `self`.
    pub fn insert_node(&self, node: NodeRef<T>) -> NodeRef<T> {
        self.link_forward(node.clone());
        node
    }

    /// Wraps `value` in a new node and inserts it at position `index`,
    /// counted from the chain's head.
    ///
    /// Returns `None` if `index` is beyond the chain's current end. Position
    /// 0 cannot be expressed at the node level; that is the list owner's job.
    pub fn insert_at(&self, value: T, index: usize) -> Option<NodeRef<T>> {
        self.insert_node_at(NodeRef::new(value), index)
    }

    /// Inserts an existing node at position `index`, counted from the
    /// chain's head.
    ///
    /// Returns `None` if `index` is beyond the chain's current end.
    pub fn insert_node_at(&self, node: NodeRef<T>, index: usize) -> Option<NodeRef<T>> {
        let mut position = self.idx();
        let mut current = self.clone();
        while position + 1 < index {
            current = current.forward()?;
            position += 1;
        }
        Some(current.insert_node(node))
    }

    /// Wraps `value` in a new node and links it after the chain's last node.
    pub fn append(&self, value: T) -> NodeRef<T> {
        self.append_node(NodeRef::new(value))
    }

    /// Links an existing node after the chain's last node.
    ///
    /// The tail has no successor, so this never splices.
    pub fn append_node(&self, node: NodeRef<T>) -> NodeRef<T> {
        let mut current = self.clone();
        while let Some(next) = current.forward() {
            current = next;
        }
        current.link_forward(node.clone());
        node
    }

    /// Linear forward search from `self` for the first node whose value
    /// equals `value`.
    pub fn get(&self, value: &T) -> Option<NodeRef<T>>
    where
        T: PartialEq,
    {
        self.iter().find(|node| *node.value() == *value)
    }

    /// Iterates over the node handles from `self` to the tail.
    pub fn iter(&self) -> Iter<T> {
        Iter {
            next: Some(self.clone()),
        }
    }
}

/// Forward iterator over a chain's node handles.
pub struct Iter<T> {
    next: Option<NodeRef<T>>,
}

impl<T> Iterator for Iter<T> {
    type Item = NodeRef<T>;

    fn next(&mut self) -> Option<NodeRef<T>> {
        let node = self.next.take()?;
        self.next = node.forward();
        Some(node)
    }
}

impl<T: PartialEq> PartialEq for NodeRef<T> {
    /// Nodes compare by value; link structure is ignored.
    fn eq(&self, other: &Self) -> bool {
        if self.ptr_eq(other) {
            return true;
        }
        *self.value() == *other.value()
    }
}

impl<T: Eq> Eq for NodeRef<T> {}

impl<T: Hash> Hash for NodeRef<T> {
    /// Hashes the value only, consistent with value equality.
    fn hash<H: Hasher>(&self, state: &mut H) {
        (*self.value()).hash(state);
    }
}

impl<T: fmt::Display> fmt::Display for NodeRef<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let depth = self.idx();
        for _ in 0..depth {
            f.write_str("  ")?;
        }
        write!(f, "([{}] Node: {})", depth, self.value())
    }
}

impl<T: fmt::Debug> fmt::Debug for NodeRef<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "([{}] Node: {:?})", self.idx(), self.value())
    }
}
