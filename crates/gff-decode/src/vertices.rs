//! Vertex record unpacking.

use glam::{Vec2, Vec3};

use crate::error::{DecodeError, DecodeResult, span};
use crate::{VertexDeclarator, VertexStreams, decode_vertex};

/// Window of the shared vertex buffer owned by one chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkLayout {
    /// Stride of one vertex record in bytes.
    pub vertex_size: u32,
    pub vertex_count: u32,
    /// Byte offset of the first record in the shared buffer.
    pub vertex_offset: u32,
}

/// Per-vertex streams, aligned by vertex index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Vertices {
    pub positions: Vec<Vec3>,
    pub tex_coords: Vec<Vec2>,
    pub normals: Vec<Vec3>,
}

/// Decode every vertex record of a chunk.
///
/// # Format
///
/// Record `i` starts at `vertex_offset + i * vertex_size`; each selected
/// declarator is decoded at its offset inside the record.
///
/// - Positions keep x, y, z; a fourth component is dropped.
/// - Texture coordinates keep u, v and flip `v` to `1 - v`.
/// - Normals keep x, y, z untransformed.
pub fn unpack_vertices(
    data: &[u8],
    layout: &ChunkLayout,
    streams: &VertexStreams,
) -> DecodeResult<Vertices> {
    let count = layout.vertex_count as usize;
    let stride = layout.vertex_size as usize;
    let base = layout.vertex_offset as usize;

    check_last_record(data, layout, streams)?;

    let mut vertices = Vertices {
        positions: Vec::with_capacity(count),
        tex_coords: Vec::with_capacity(if streams.tex_coord.is_some() { count } else { 0 }),
        normals: Vec::with_capacity(if streams.normal.is_some() { count } else { 0 }),
    };

    for i in 0..count {
        let record = i
            .checked_mul(stride)
            .and_then(|o| o.checked_add(base))
            .ok_or(DecodeError::OutOfBounds {
                buffer: "vertex",
                offset: base,
                len: stride,
                available: data.len(),
            })?;

        let [x, y, z] = read::<3>(data, record, &streams.position)?;
        vertices.positions.push(Vec3::new(x, y, z));

        if let Some(decl) = &streams.tex_coord {
            let [u, v] = read::<2>(data, record, decl)?;
            vertices.tex_coords.push(Vec2::new(u, 1.0 - v));
        }

        if let Some(decl) = &streams.normal {
            let [x, y, z] = read::<3>(data, record, decl)?;
            vertices.normals.push(Vec3::new(x, y, z));
        }
    }

    Ok(vertices)
}

/// Fail before allocating if the final record's streams overrun `data`.
///
/// Records are evenly strided, so once the last one fits every earlier one
/// does too, and the vertex count is bounded by the buffer length.
fn check_last_record(
    data: &[u8],
    layout: &ChunkLayout,
    streams: &VertexStreams,
) -> DecodeResult<()> {
    let Some(last) = (layout.vertex_count as usize).checked_sub(1) else {
        return Ok(());
    };
    if layout.vertex_size == 0 && last > 0 {
        return Err(DecodeError::ZeroStride(layout.vertex_count));
    }

    let stride = layout.vertex_size as usize;
    let base = layout.vertex_offset as usize;
    let record = last
        .checked_mul(stride)
        .and_then(|o| o.checked_add(base))
        .ok_or(DecodeError::OutOfBounds {
            buffer: "vertex",
            offset: base,
            len: stride,
            available: data.len(),
        })?;

    let selected = std::iter::once(&streams.position)
        .chain(streams.tex_coord.as_ref())
        .chain(streams.normal.as_ref());
    for decl in selected {
        let offset = record.saturating_add(decl.offset as usize);
        span("vertex", data, offset, decl.data_type.byte_width())?;
    }
    Ok(())
}

/// Decode a declarator in the record at `record` and keep the first `N`
/// components.
fn read<const N: usize>(
    data: &[u8],
    record: usize,
    decl: &VertexDeclarator,
) -> DecodeResult<[f32; N]> {
    let offset = record.saturating_add(decl.offset as usize);
    let components = decode_vertex(data, offset, decl.data_type)?;
    let mut out = [0.0; N];
    let kept = components.get(..N).ok_or(DecodeError::ComponentCount {
        usage: decl.usage,
        expected: N,
        found: components.len(),
    })?;
    out.copy_from_slice(kept);
    Ok(out)
}
