//! In-memory node sink for testing and development.

use async_trait::async_trait;
use std::sync::RwLock;

use crate::error::Result;
use crate::traits::NodeSink;
use crate::types::Node;

/// Collects created nodes in memory.
///
/// Useful for tests and for driving the pipeline without a host framework.
/// Nodes are lost on drop.
#[derive(Default)]
pub struct MemorySink {
    nodes: RwLock<Vec<Node>>,
}

impl MemorySink {
    /// Create a new empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of nodes created so far.
    pub fn node_count(&self) -> usize {
        self.nodes.read().unwrap().len()
    }

    /// Snapshot of every created node, in creation order.
    pub fn nodes(&self) -> Vec<Node> {
        self.nodes.read().unwrap().clone()
    }

    /// Snapshot of the nodes of one type.
    pub fn nodes_of_type(&self, node_type: &str) -> Vec<Node> {
        self.nodes
            .read()
            .unwrap()
            .iter()
            .filter(|n| n.node_type == node_type)
            .cloned()
            .collect()
    }

    /// Drop all collected nodes.
    pub fn clear(&self) {
        self.nodes.write().unwrap().clear();
    }
}

#[async_trait]
impl NodeSink for MemorySink {
    async fn create_node(&self, node: Node) -> Result<()> {
        self.nodes.write().unwrap().push(node);
        Ok(())
    }
}
