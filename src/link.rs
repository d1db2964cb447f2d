//! Link-field primitives: the one place the forward/backward invariant is
//! enforced.
//!
//! Callers never write a backward link. Every backward link is a side effect
//! of the forward-link write, clear, and delete operations below, which keep
//! the two fields mirrored within a single logical operation.

use crate::node::NodeRef;
use alloc::rc::Rc;

#[cfg(feature = "logging")]
use tracing::warn;

impl<T> NodeRef<T> {
    /// Writes the forward link from `self` to `node`, splicing on overwrite.
    ///
    /// If `self` already has a successor N, the net effect is
    /// `self -> node -> N` with all backward links consistent. If `node`
    /// itself carries a chain, each displaced successor is pushed one step
    /// down it, so linking a chain into a chain interleaves the two; in the
    /// common case of a fresh node this is a single splice.
    ///
    /// `node` must not already be in `self`'s chain: linking a node to one of
    /// its own ancestors creates a cycle, after which traversal never
    /// terminates.
    pub fn link_forward(&self, node: NodeRef<T>) {
        let mut anchor = self.clone();
        let mut incoming = node;
        loop {
            let displaced = anchor.0.borrow_mut().forward.replace(incoming.clone());
            incoming.0.borrow_mut().backward = Some(Rc::downgrade(&anchor.0));
            match displaced {
                Some(next) => {
                    anchor = incoming;
                    incoming = next;
                }
                None => break,
            }
        }
    }

    /// Sets the forward link to absent, detaching any successor.
    ///
    /// Detaching a live successor is a policy violation: the suffix would be
    /// silently cut loose. The operation still completes (the field becomes
    /// absent regardless) but a warning is emitted and the detached successor
    /// is returned so the caller can observe or keep it. The detached node's
    /// backward link is left untouched, mirroring the violated state the
    /// warning reports.
    pub fn clear_forward(&self) -> Option<NodeRef<T>> {
        let detached = self.0.borrow_mut().forward.take();
        if detached.is_some() {
            #[cfg(feature = "logging")]
            warn!("clearing a forward link that still has a live successor");
        }
        detached
    }

    /// Deletes the forward link, folding the successor out of the chain.
    ///
    /// Let N be the successor. If N has its own successor M, N is removed by
    /// linking `self -> M` (fold-over); if N is the tail, the chain now ends
    /// at `self`. Either way the removed node is returned with both of its
    /// links cleared. If there is no successor at all, a warning is emitted
    /// and the field stays explicitly absent; this no-op-with-warning shape
    /// is long-standing documented behavior.
    pub fn unlink_forward(&self) -> Option<NodeRef<T>> {
        let removed = match self.0.borrow_mut().forward.take() {
            Some(node) => node,
            None => {
                #[cfg(feature = "logging")]
                warn!("deleting a forward link but there is no successor");
                return None;
            }
        };

        let successor = {
            let mut inner = removed.0.borrow_mut();
            inner.backward = None;
            inner.forward.take()
        };
        if let Some(next) = successor {
            self.link_forward(next);
        }
        Some(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn chain(values: &[i32]) -> NodeRef<i32> {
        let head = NodeRef::new(values[0]);
        for &v in &values[1..] {
            head.append(v);
        }
        head
    }

    fn values(head: &NodeRef<i32>) -> Vec<i32> {
        head.iter().map(|n| *n.value()).collect()
    }

    /// Every forward link must be mirrored by the target's backward link.
    fn assert_mirrored(head: &NodeRef<i32>) {
        for node in head.iter() {
            if let Some(next) = node.forward() {
                let back = next.backward().expect("missing backward link");
                assert!(back.ptr_eq(&node), "backward link does not mirror forward");
            }
        }
    }

    #[test]
    fn plain_link_sets_both_sides() {
        let a = NodeRef::new(1);
        let b = NodeRef::new(2);
        a.link_forward(b.clone());

        assert!(a.forward().unwrap().ptr_eq(&b));
        assert!(b.backward().unwrap().ptr_eq(&a));
    }

    #[test]
    fn overwrite_splices_displaced_successor() {
        // [1 -> 2 -> 3], link 10 after 1: [1 -> 10 -> 2 -> 3]
        let head = chain(&[1, 2, 3]);
        let x = NodeRef::new(10);
        head.link_forward(x.clone());

        assert_eq!(values(&head), [1, 10, 2, 3]);
        assert_mirrored(&head);
        assert!(x.backward().unwrap().ptr_eq(&head));
    }

    #[test]
    fn linking_a_chain_interleaves() {
        // [1 -> 2] with incoming [10 -> 20]: displaced 2 is pushed one step
        // down the incoming chain.
        let head = chain(&[1, 2]);
        let incoming = chain(&[10, 20]);
        head.link_forward(incoming);

        assert_eq!(values(&head), [1, 10, 2, 20]);
        assert_mirrored(&head);
    }

    #[test]
    fn unlink_folds_over_middle_node() {
        let head = chain(&[1, 2, 3]);
        let removed = head.unlink_forward().unwrap();

        assert_eq!(*removed.value(), 2);
        assert!(removed.forward().is_none());
        assert!(removed.backward().is_none());

        assert_eq!(values(&head), [1, 3]);
        assert_mirrored(&head);
        assert!(head.forward().unwrap().backward().unwrap().ptr_eq(&head));
    }

    #[test]
    fn unlink_tail_ends_chain_at_self() {
        let head = chain(&[1, 2]);
        let removed = head.unlink_forward().unwrap();

        assert_eq!(*removed.value(), 2);
        assert!(head.forward().is_none());
        assert_eq!(head.len(), 1);
    }

    #[test]
    fn unlink_without_successor_is_warned_noop() {
        let head = chain(&[1, 2, 3]);
        assert!(head.unlink_forward().is_some()); // [1 -> 3]
        assert!(head.unlink_forward().is_some()); // [1]
        assert!(head.unlink_forward().is_none()); // nothing left to delete
        assert!(head.forward().is_none());
        assert_eq!(head.len(), 1);
    }

    #[test]
    fn clear_forward_detaches_suffix() {
        let head = chain(&[1, 2, 3]);
        let detached = head.clear_forward().unwrap();

        assert_eq!(*detached.value(), 2);
        assert!(head.forward().is_none());
        // The suffix keeps its own links
        assert_eq!(*detached.forward().unwrap().value(), 3);
    }

    #[test]
    fn clear_forward_on_tail_is_silent() {
        let tail = NodeRef::new(1);
        assert!(tail.clear_forward().is_none());
        assert!(tail.forward().is_none());
    }

    #[test]
    fn dropping_a_long_detached_suffix_does_not_overflow() {
        let head = NodeRef::new(0u32);
        let mut tail = head.clone();
        for i in 1..300_000 {
            tail = tail.append(i);
        }
        drop(tail);

        let suffix = head.clear_forward().unwrap();
        drop(suffix);
        drop(head);
    }

    #[test]
    fn mirror_holds_after_mixed_operations() {
        let head = chain(&[1, 2, 3, 4]);
        head.insert(10);
        assert!(head.forward().unwrap().unlink_forward().is_some());
        head.append(5);
        assert!(head.insert_at(6, 2).is_some());
        assert_mirrored(&head);
    }
}
