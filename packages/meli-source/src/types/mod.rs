//! Domain types built on top of the wire types from `meli-client`.

pub mod node;
pub mod product;

pub use node::{filters_node, product_node, Node, FILTERS_NODE_TYPE, PRODUCT_NODE_TYPE};
pub use product::{EnrichedProduct, ImageRef};

// Wire types, re-exported so pipeline consumers need only one crate.
pub use meli_client::types::{
    ItemDescription, Paging, Picture, ProductDetail, ProductSummary, SearchPage,
};
