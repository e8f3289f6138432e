//! Core trait abstractions.
//!
//! The pipeline is generic over two seams: the marketplace API transport
//! ([`CatalogApi`]) and the host's node-creation callback ([`NodeSink`]).
//! Both have real and mock implementations.

pub mod api;
pub mod sink;

pub use api::CatalogApi;
pub use sink::NodeSink;
