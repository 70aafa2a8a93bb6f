//! Core data models for center
//!
//! Lines as read from an input source, and blocks that hold every line of
//! a source for whole-block alignment.

pub mod block;
pub mod line;

// Re-exports for convenience
pub use block::Block;
pub use line::Line;
