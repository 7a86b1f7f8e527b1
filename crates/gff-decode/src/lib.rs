//! Decode vertex, index and transform data from GFF 4.0 mesh and model
//! documents.
//!
//! This crate provides pure synchronous decoding functions over resident
//! byte buffers. It knows nothing about field trees; the `gff` crate reads
//! the tree and feeds the values in here.
//!
//! # Key functions
//!
//! - [`decode_vertex`]: Decode one vertex component with a declared encoding
//! - [`VertexStreams::select`]: Pick position/normal/texcoord declarators
//! - [`unpack_vertices`]: Walk fixed-stride vertex records of one chunk
//! - [`unpack_indices`]: Read a triangle list from the shared index buffer
//! - [`local_transform`]: Build an affine matrix from translation + quaternion
//! - [`compose`]: Parent-then-child matrix product

mod error;

pub mod declarators;
pub mod indices;
pub mod transform;
pub mod vertex;
pub mod vertices;

pub use declarators::{VertexDeclarator, VertexStreams, VertexUsage};
pub use error::{DecodeError, DecodeResult};
pub use indices::{IndexFormat, PrimitiveType, unpack_indices};
pub use transform::{compose, local_transform, matrix_from_row_major, to_row_major};
pub use vertex::{Components, VertexType, decode_vertex, half_to_f32};
pub use vertices::{ChunkLayout, Vertices, unpack_vertices};

/// Bounding sphere as authored; never recomputed from vertices.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BoundingSphere {
    pub center: glam::Vec3,
    pub radius: f32,
}

/// One drawable sub-mesh decoded from a mesh document.
///
/// `tex_coords` and `normals` are either empty or hold one entry per
/// position. `indices` is a triangle list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshChunk {
    pub name: String,
    pub positions: Vec<glam::Vec3>,
    pub tex_coords: Vec<glam::Vec2>,
    pub normals: Vec<glam::Vec3>,
    pub indices: Vec<u32>,
    pub bounding_sphere: BoundingSphere,
}

impl MeshChunk {
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}
