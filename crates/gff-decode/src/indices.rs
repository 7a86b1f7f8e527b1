//! Index unpacking.

use crate::error::{DecodeError, DecodeResult, span};

/// Width of one entry in the shared index buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexFormat {
    U16,
    U32,
}

impl IndexFormat {
    #[must_use]
    pub const fn byte_width(self) -> usize {
        match self {
            Self::U16 => 2,
            Self::U32 => 4,
        }
    }
}

impl TryFrom<u32> for IndexFormat {
    type Error = DecodeError;

    fn try_from(code: u32) -> DecodeResult<Self> {
        match code {
            0 => Ok(Self::U16),
            1 => Ok(Self::U32),
            other => Err(DecodeError::UnsupportedIndexFormat(other)),
        }
    }
}

/// Primitive topology of a chunk. Only triangle lists are decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveType {
    TriangleList,
}

impl TryFrom<u32> for PrimitiveType {
    type Error = DecodeError;

    fn try_from(code: u32) -> DecodeResult<Self> {
        match code {
            0 => Ok(Self::TriangleList),
            other => Err(DecodeError::UnsupportedPrimitive(other)),
        }
    }
}

/// Read a chunk's triangle-list indices from the shared index buffer.
///
/// # Arguments
///
/// * `data` - The shared index buffer
/// * `format` - Entry width
/// * `start` - First entry, counted in elements rather than bytes
/// * `count` - Number of entries; must be a multiple of three
pub fn unpack_indices(
    data: &[u8],
    format: IndexFormat,
    start: u32,
    count: u32,
) -> DecodeResult<Vec<u32>> {
    let count = count as usize;
    if count % 3 != 0 {
        return Err(DecodeError::PartialTriangle(count));
    }

    let width = format.byte_width();
    let offset = (start as usize).saturating_mul(width);
    let bytes = span("index", data, offset, count.saturating_mul(width))?;

    let indices = match format {
        IndexFormat::U16 => bytes
            .chunks_exact(2)
            .map(|b| u32::from(u16::from_le_bytes([b[0], b[1]])))
            .collect(),
        IndexFormat::U32 => bytes
            .chunks_exact(4)
            .map(|b| u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
            .collect(),
    };

    Ok(indices)
}
