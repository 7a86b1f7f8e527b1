//! Mesh documents.

use std::collections::HashMap;

use glam::Vec3;

use gff_decode::{
    BoundingSphere, ChunkLayout, IndexFormat, MeshChunk, PrimitiveType, VertexDeclarator,
    VertexStreams, VertexType, VertexUsage, unpack_indices, unpack_vertices,
};
use gff_tree::{FieldNode, labels};

use crate::error::{Context, Error, Result};
use crate::transform::vector;

/// A chunk that could not be decoded.
#[derive(Debug)]
pub struct ChunkFailure {
    /// Position in the document's chunk list.
    pub index: usize,
    /// Chunk name, when it could be read.
    pub name: Option<String>,
    pub error: Error,
}

/// Decoded chunks of one mesh document.
///
/// A chunk that fails to decode does not fail the document; it is recorded
/// in [`failures`](Self::failures) instead.
#[derive(Debug, Default)]
pub struct MeshDocument {
    chunks: Vec<MeshChunk>,
    by_name: HashMap<String, usize>,
    failures: Vec<ChunkFailure>,
}

impl MeshDocument {
    /// Decode every chunk under a mesh document's top-level struct.
    pub fn from_node(top: &dyn FieldNode) -> Result<Self> {
        let context = || "mesh document".to_string();
        let vertex_data = top.blob(labels::VERTEX_DATA).context(context)?;
        let index_data = top.blob(labels::INDEX_DATA).context(context)?;
        let chunk_nodes = top.nodes(labels::CHUNKS).context(context)?;

        let mut document = Self::default();
        for (index, node) in chunk_nodes.iter().enumerate() {
            match decode_chunk(&**node, index, &vertex_data, &index_data) {
                Ok(chunk) => document.insert(chunk),
                Err(error) => {
                    let name = node.text(labels::NAME).ok();
                    tracing::warn!("Skipping chunk {index} ({name:?}): {error}");
                    document.failures.push(ChunkFailure { index, name, error });
                }
            }
        }

        Ok(document)
    }

    fn insert(&mut self, chunk: MeshChunk) {
        tracing::debug!(
            "Decoded chunk {:?}: {} vertices, {} triangles",
            chunk.name,
            chunk.vertex_count(),
            chunk.triangle_count()
        );
        if let Some(&existing) = self.by_name.get(&chunk.name) {
            tracing::warn!("Duplicate chunk name {:?}, keeping the later one", chunk.name);
            self.chunks[existing] = chunk;
        } else {
            self.by_name.insert(chunk.name.clone(), self.chunks.len());
            self.chunks.push(chunk);
        }
    }

    /// Look up a chunk by name (the mesh group name used by hierarchies).
    #[must_use]
    pub fn chunk(&self, name: &str) -> Option<&MeshChunk> {
        self.by_name.get(name).map(|&i| &self.chunks[i])
    }

    /// Decoded chunks in document order.
    #[must_use]
    pub fn chunks(&self) -> &[MeshChunk] {
        &self.chunks
    }

    #[must_use]
    pub fn failures(&self) -> &[ChunkFailure] {
        &self.failures
    }
}

/// Decode a single chunk struct against the shared buffers.
fn decode_chunk(
    node: &dyn FieldNode,
    index: usize,
    vertex_data: &[u8],
    index_data: &[u8],
) -> Result<MeshChunk> {
    let context = || format!("chunk {index}");

    let PrimitiveType::TriangleList =
        PrimitiveType::try_from(node.uint(labels::CHUNK_PRIMITIVE_TYPE).context(context)?)
            .context(context)?;

    let name = node.text(labels::NAME).context(context)?;
    let context = || format!("chunk {name:?}");

    let layout = ChunkLayout {
        vertex_size: node.uint(labels::CHUNK_VERTEX_SIZE).context(context)?,
        vertex_count: node.uint(labels::CHUNK_VERTEX_COUNT).context(context)?,
        vertex_offset: node.uint(labels::CHUNK_VERTEX_OFFSET).context(context)?,
    };

    let bounds = node.node(labels::CHUNK_BOUNDS).context(context)?;
    let [x, y, z, radius] = vector::<4>(&*bounds, labels::BOUNDS_SPHERE)?;
    let bounding_sphere = BoundingSphere {
        center: Vec3::new(x, y, z),
        radius,
    };

    let declarators = read_declarators(node, &name)?;
    let streams = VertexStreams::select(&declarators).context(context)?;
    let vertices = unpack_vertices(vertex_data, &layout, &streams).context(context)?;

    let format = IndexFormat::try_from(node.uint(labels::CHUNK_INDEX_FORMAT).context(context)?)
        .context(context)?;
    let indices = unpack_indices(
        index_data,
        format,
        node.uint(labels::CHUNK_START_INDEX).context(context)?,
        node.uint(labels::CHUNK_INDEX_COUNT).context(context)?,
    )
    .context(context)?;

    Ok(MeshChunk {
        name,
        positions: vertices.positions,
        tex_coords: vertices.tex_coords,
        normals: vertices.normals,
        indices,
        bounding_sphere,
    })
}

/// Read the declarators that can take part in stream selection.
///
/// Declarators for other usages are skipped without validating their data
/// type, so an exotic tangent encoding does not sink the chunk.
fn read_declarators(node: &dyn FieldNode, chunk: &str) -> Result<Vec<VertexDeclarator>> {
    let context = || format!("chunk {chunk:?} declarator");

    let mut declarators = Vec::new();
    for decl in node.nodes(labels::CHUNK_VERTEX_DECLARATOR).context(context)? {
        let usage = VertexUsage::from(decl.uint(labels::DECLARATOR_USAGE).context(context)?);
        if !usage.is_decoded() {
            continue;
        }
        let data_type = decl.uint(labels::DECLARATOR_DATATYPE).context(context)?;
        declarators.push(VertexDeclarator {
            offset: decl.uint(labels::DECLARATOR_OFFSET).context(context)?,
            data_type: VertexType::try_from(data_type).context(context)?,
            usage,
            usage_index: decl.uint(labels::DECLARATOR_USAGE_INDEX).context(context)?,
        });
    }
    Ok(declarators)
}
