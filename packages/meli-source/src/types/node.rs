//! Content-addressed nodes for the host's data layer.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::types::product::EnrichedProduct;

/// Node type for individual products.
pub const PRODUCT_NODE_TYPE: &str = "MercadoLibreProduct";

/// Node type for the seller-level filter taxonomy.
pub const FILTERS_NODE_TYPE: &str = "MercadoLibreFilters";

/// A content-addressed record handed to the node sink.
///
/// Identity derivation is pure: the same content always yields the same
/// `id` and `content_digest`, regardless of fetch order across runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Stable identifier derived from a namespaced seed
    pub id: String,

    /// Node type the host indexes by
    pub node_type: String,

    /// Digest over the serialized content, for host-side change detection
    pub content_digest: String,

    /// The payload itself
    pub content: serde_json::Value,
}

impl Node {
    /// Build a node from an identity seed and its payload.
    pub fn new(seed: &str, node_type: impl Into<String>, content: serde_json::Value) -> Self {
        Self {
            id: hash_hex(seed),
            node_type: node_type.into(),
            content_digest: hash_hex(&content.to_string()),
            content,
        }
    }
}

fn hash_hex(input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    hex::encode(hasher.finalize())
}

/// Build the node for one enriched product.
pub fn product_node(product: &EnrichedProduct) -> Result<Node, serde_json::Error> {
    let seed = format!("mercadolibre-product-{}", product.item_id);
    let content = serde_json::to_value(product)?;
    Ok(Node::new(&seed, PRODUCT_NODE_TYPE, content))
}

/// Build the single taxonomy node for a seller's filters.
pub fn filters_node(
    site_id: &str,
    filters: &[serde_json::Value],
) -> Result<Node, serde_json::Error> {
    let seed = format!("mercadolibre-filters-{site_id}");
    let content = serde_json::to_value(filters)?;
    Ok(Node::new(&seed, FILTERS_NODE_TYPE, content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn same_content_yields_same_identity() {
        let a = Node::new("seed-1", PRODUCT_NODE_TYPE, json!({"title": "Guitarra"}));
        let b = Node::new("seed-1", PRODUCT_NODE_TYPE, json!({"title": "Guitarra"}));
        assert_eq!(a.id, b.id);
        assert_eq!(a.content_digest, b.content_digest);
    }

    #[test]
    fn different_content_changes_digest_but_not_id() {
        let a = Node::new("seed-1", PRODUCT_NODE_TYPE, json!({"title": "Guitarra"}));
        let b = Node::new("seed-1", PRODUCT_NODE_TYPE, json!({"title": "Bajo"}));
        assert_eq!(a.id, b.id);
        assert_ne!(a.content_digest, b.content_digest);
    }

    #[test]
    fn filters_node_is_namespaced_by_site() {
        let mla = filters_node("MLA", &[]).unwrap();
        let mlb = filters_node("MLB", &[]).unwrap();
        assert_ne!(mla.id, mlb.id);
        assert_eq!(mla.node_type, FILTERS_NODE_TYPE);
    }
}
