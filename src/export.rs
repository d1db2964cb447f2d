//! Graph export: ordered node and edge records for a rendering collaborator.
//!
//! The export is one-directional and stateless: it walks the chain once and
//! produces plain records a graph renderer can consume in any serde format.

use crate::list::List;
use crate::node::NodeRef;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

/// One node of the chain: its payload and its position from the head.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeRecord<T> {
    /// Position from the head, 0-based.
    pub position: usize,
    /// The node's payload.
    pub value: T,
}

/// One forward link of the chain, by node positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeRecord {
    /// Position of the link's source node.
    pub from: usize,
    /// Position of the link's target node.
    pub to: usize,
}

/// A chain rendered as ordered node and edge records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphExport<T> {
    /// Node records in chain order.
    pub nodes: Vec<NodeRecord<T>>,
    /// Edge records in chain order, one per forward link.
    pub edges: Vec<EdgeRecord>,
}

impl<T: Clone> GraphExport<T> {
    /// Walks the chain from `root` and records every node and forward link.
    pub fn from_root(root: &NodeRef<T>) -> Self {
        let mut nodes = Vec::new();
        let mut edges = Vec::new();
        for (position, node) in root.iter().enumerate() {
            nodes.push(NodeRecord {
                position,
                value: node.value().clone(),
            });
            if node.forward().is_some() {
                edges.push(EdgeRecord {
                    from: position,
                    to: position + 1,
                });
            }
        }
        Self { nodes, edges }
    }

    /// Exports a list's chain, starting at its root.
    pub fn from_list(list: &List<T>) -> Self {
        Self::from_root(&list.root())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_records_nodes_in_order() {
        let list = List::new(1);
        list.append(2);
        list.append(3);

        let export = GraphExport::from_list(&list);

        let positions: Vec<usize> = export.nodes.iter().map(|n| n.position).collect();
        let values: Vec<i32> = export.nodes.iter().map(|n| n.value).collect();
        assert_eq!(positions, [0, 1, 2]);
        assert_eq!(values, [1, 2, 3]);
    }

    #[test]
    fn export_has_one_edge_per_forward_link() {
        let list = List::new(1);
        list.append(2);
        list.append(3);

        let export = GraphExport::from_list(&list);

        assert_eq!(
            export.edges,
            [EdgeRecord { from: 0, to: 1 }, EdgeRecord { from: 1, to: 2 }]
        );
    }

    #[test]
    fn single_node_exports_no_edges() {
        let export = GraphExport::from_root(&NodeRef::new(7));
        assert_eq!(export.nodes.len(), 1);
        assert!(export.edges.is_empty());
    }

    #[cfg(feature = "std")]
    #[test]
    fn export_serializes_to_json() {
        let list = List::new("a");
        list.append("b");

        let export = GraphExport::from_list(&list);
        let json = serde_json::to_string(&export).unwrap();

        assert!(json.contains("\"position\":0"));
        assert!(json.contains("\"from\":0"));
    }
}
