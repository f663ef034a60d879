//! Backing storage for the forest encoding.
//!
//! The encoding stores a single element type only, so the buffer here is a
//! plain resizable `i64` sequence rather than a generic container.
pub mod list;

pub use list::IntList;
