//! Node-creation seam.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::Node;

/// Where finished nodes go.
///
/// In production this wraps the host framework's node-creation callback;
/// [`crate::sinks::MemorySink`] collects nodes for tests and development.
#[async_trait]
pub trait NodeSink: Send + Sync {
    async fn create_node(&self, node: Node) -> Result<()>;
}
