//! Node sink implementations.

pub mod memory;

pub use memory::MemorySink;
