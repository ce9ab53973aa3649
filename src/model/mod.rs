//! Document model for DemoLink
//!
//! This module provides the in-memory document tree the editor operates on:
//! an arena of element and text nodes addressed by `NodeId`, a selection
//! stored on the document, and a `Transaction` type that is the only way to
//! mutate the tree.

mod document;
mod position;
mod selection;

pub use document::{Document, NodeData, NodeId, Transaction};
pub use position::Position;
pub use selection::Selection;
