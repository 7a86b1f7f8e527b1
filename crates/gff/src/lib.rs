//! Mesh and model-hierarchy documents decoded from GFF 4.0 field trees.
//!
//! A mesh document (`.msh`) holds shared vertex and index blobs and a list of
//! chunks describing how to slice them. A model-hierarchy document (`.mmh`)
//! holds a single root node whose mesh children place those chunks with a
//! transform.
//!
//! Loading goes through a [`DocumentProvider`]; decoding itself is
//! synchronous and does no I/O.
//!
//! # Example
//!
//! ```no_run
//! use gff::{Loader, MemoryProvider};
//!
//! let loader = Loader::new(MemoryProvider::new());
//! let model = loader.load_model("props/door.mmh")?;
//! for placed in model.instantiate(&glam::Mat4::IDENTITY)? {
//!     println!("{}: {} triangles", placed.name, placed.chunk.triangle_count());
//! }
//! # Ok::<(), gff::Error>(())
//! ```

mod depth;
mod error;

pub mod hierarchy;
pub mod loader;
pub mod mesh;
pub mod transform;

pub use error::{Error, Result};
pub use hierarchy::{ModelHierarchy, ModelPart, PlacedMesh};
pub use loader::{Loader, LoaderConfig};
pub use mesh::{ChunkFailure, MeshDocument};
pub use transform::resolve_local_transform;

pub use gff_decode::{
    BoundingSphere, DecodeError, MeshChunk, compose, matrix_from_row_major, to_row_major,
};
pub use gff_tree::{
    Document, DocumentError, DocumentHeader, DocumentProvider, FieldError, FieldNode, MemoryNode,
    MemoryProvider, MemoryValue, Node, StructType, labels,
};
