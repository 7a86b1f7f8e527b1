//! Vertex declarators and stream selection.

use crate::VertexType;
use crate::error::{DecodeError, DecodeResult};

/// Semantic of a declared vertex component, using the Direct3D usage codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VertexUsage {
    Position,
    BlendWeight,
    BlendIndices,
    Normal,
    TexCoord,
    Tangent,
    Binormal,
    Color,
    Other(u32),
}

impl From<u32> for VertexUsage {
    fn from(code: u32) -> Self {
        match code {
            0 => Self::Position,
            1 => Self::BlendWeight,
            2 => Self::BlendIndices,
            3 => Self::Normal,
            5 => Self::TexCoord,
            6 => Self::Tangent,
            7 => Self::Binormal,
            10 => Self::Color,
            other => Self::Other(other),
        }
    }
}

impl VertexUsage {
    /// Whether [`VertexStreams::select`] ever picks a declarator of this usage.
    #[must_use]
    pub fn is_decoded(self) -> bool {
        matches!(self, Self::Position | Self::Normal | Self::TexCoord)
    }
}

/// Where and how one semantic component sits inside each vertex record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexDeclarator {
    /// Byte offset from the start of the vertex record.
    pub offset: u32,
    pub data_type: VertexType,
    pub usage: VertexUsage,
    pub usage_index: u32,
}

/// The declarators a chunk's vertices are decoded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexStreams {
    pub position: VertexDeclarator,
    pub normal: Option<VertexDeclarator>,
    pub tex_coord: Option<VertexDeclarator>,
}

impl VertexStreams {
    /// Pick the streams to decode from a chunk's declarator list.
    ///
    /// - Position is required; the first one wins.
    /// - Normal is optional (occlusion-only geometry has none).
    /// - Texture coordinates prefer channel 1, where most models keep their
    ///   UVs, then channel 0 (terrain), then none.
    pub fn select(declarators: &[VertexDeclarator]) -> DecodeResult<Self> {
        let first = |usage: VertexUsage, index: Option<u32>| {
            declarators
                .iter()
                .find(|d| d.usage == usage && index.is_none_or(|i| d.usage_index == i))
                .copied()
        };

        let position = first(VertexUsage::Position, None).ok_or(DecodeError::MissingPosition)?;
        let normal = first(VertexUsage::Normal, None);
        let tex_coord = first(VertexUsage::TexCoord, Some(1))
            .or_else(|| first(VertexUsage::TexCoord, Some(0)));

        Ok(Self {
            position,
            normal,
            tex_coord,
        })
    }
}
