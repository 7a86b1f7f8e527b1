use crate::VertexUsage;

/// Errors from decoding a chunk's buffers or a transform.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("unsupported vertex data type {0}")]
    UnsupportedVertexType(u32),
    #[error("unsupported primitive type {0}, only triangle lists are decoded")]
    UnsupportedPrimitive(u32),
    #[error("unsupported index format {0}")]
    UnsupportedIndexFormat(u32),
    #[error("chunk has no position stream")]
    MissingPosition,
    #[error("{usage:?} stream yields {found} components, need at least {expected}")]
    ComponentCount {
        usage: VertexUsage,
        expected: usize,
        found: usize,
    },
    #[error("read of {len} bytes at offset {offset} exceeds {buffer} buffer of {available} bytes")]
    OutOfBounds {
        buffer: &'static str,
        offset: usize,
        len: usize,
        available: usize,
    },
    #[error("{0} vertices share a zero-byte stride")]
    ZeroStride(u32),
    #[error("index count {0} is not a whole number of triangles")]
    PartialTriangle(usize),
    #[error("expected 16 matrix elements, got {0}")]
    MatrixDimension(usize),
}

pub type DecodeResult<T> = Result<T, DecodeError>;

/// Borrow `len` bytes at `offset`, or report which buffer was overrun.
pub(crate) fn span<'a>(
    buffer: &'static str,
    data: &'a [u8],
    offset: usize,
    len: usize,
) -> DecodeResult<&'a [u8]> {
    offset
        .checked_add(len)
        .and_then(|end| data.get(offset..end))
        .ok_or(DecodeError::OutOfBounds {
            buffer,
            offset,
            len,
            available: data.len(),
        })
}
