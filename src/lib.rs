//! # Chainlist
//!
//! An auto-synchronizing doubly-linked chain: every node carries a pair of
//! linked fields (`forward`, `backward`) that keep each other consistent
//! whenever either is written, spliced, or deleted.
//!
//! The forward link owns the successor; the backward link is a weak,
//! non-owning mirror maintained entirely by the link primitives, so for any
//! two nodes A and B, `A.forward == B` exactly when `B.backward == A`.
//!
//! ## Modules
//!
//! - `node`: Chain nodes, handles, and traversal operations
//! - `link`: The forward-link write/clear/delete primitives (splice, fold)
//! - `list`: Owner of a chain's root node
//! - `export`: Node/edge records for a graph-rendering collaborator
//! - `error`: Error types
//!
//! ## Example
//!
//! ```
//! use chainlist::List;
//!
//! let mut list = List::new(1);
//! list.append(2);
//! list.append(3);
//!
//! // Splice a node between positions 0 and 1
//! list.insert_at(10, 1)?;
//! let values: Vec<i32> = list.iter().map(|n| *n.value()).collect();
//! assert_eq!(values, [1, 10, 2, 3]);
//!
//! // Fold the spliced node back out
//! let removed = list.root().unlink_forward().unwrap();
//! assert_eq!(*removed.value(), 10);
//! assert_eq!(list.len(), 3);
//! # Ok::<(), chainlist::ChainError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

pub mod error;
pub mod export;
mod link;
pub mod list;
pub mod node;

// Re-export commonly used types
pub use error::ChainError;
pub use export::{EdgeRecord, GraphExport, NodeRecord};
pub use list::List;
pub use node::{Iter, NodeRef};

/// Result type alias for chain operations
pub type Result<T> = core::result::Result<T, ChainError>;
