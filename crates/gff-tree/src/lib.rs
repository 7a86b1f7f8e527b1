//! Field-tree contract for GFF 4.0 resource documents.
//!
//! A GFF document is a tree of labeled fields. Labels are small integers from
//! a fixed registry ([`labels`]), and every struct node carries a 4-byte
//! structural tag ([`StructType`]). This crate only describes how such a tree
//! is *exposed*; parsing the container format is left to a
//! [`DocumentProvider`] implementation.
//!
//! # Key types
//!
//! - [`FieldNode`]: typed value lookup on one struct node
//! - [`Value`]: the variants a field can hold
//! - [`DocumentProvider`]: loads a [`Document`] for a path
//! - [`MemoryNode`] / [`MemoryProvider`]: in-memory trees for tests and tools

mod document;
mod label;
mod memory;
mod struct_type;
mod value;

pub mod labels;

pub use document::{Document, DocumentError, DocumentHeader, DocumentProvider};
pub use label::Label;
pub use memory::{MemoryNode, MemoryProvider, MemoryValue};
pub use struct_type::{NodeKind, StructType};
pub use value::{Blob, FieldError, FieldNode, Node, Reference, Value};
