//! Per-component vertex encodings.

use std::ops::Deref;

use crate::error::{DecodeError, DecodeResult, span};

/// Declared numeric encoding of one vertex component.
///
/// Discriminants are the on-disk data type codes. All multi-byte values are
/// little-endian.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VertexType {
    Float1 = 0,
    Float2 = 1,
    Float3 = 2,
    Float4 = 3,
    /// Packed color, one unnormalized float per byte.
    Color = 4,
    UByte4 = 5,
    Short2 = 6,
    Short4 = 7,
    UByte4N = 8,
    Short2N = 9,
    Short4N = 10,
    UShort2N = 11,
    UShort4N = 12,
    /// Three unsigned 10-bit fields.
    UDec3 = 13,
    /// Three 10-bit fields scaled by 1/511.
    Dec3N = 14,
    Float16x2 = 15,
    Float16x4 = 16,
}

impl VertexType {
    /// Raw size of one encoded component in bytes.
    #[must_use]
    pub const fn byte_width(self) -> usize {
        match self {
            Self::Float1
            | Self::Color
            | Self::UByte4
            | Self::UByte4N
            | Self::Short2
            | Self::Short2N
            | Self::UShort2N
            | Self::UDec3
            | Self::Dec3N
            | Self::Float16x2 => 4,
            Self::Float2 | Self::Short4 | Self::Short4N | Self::UShort4N | Self::Float16x4 => 8,
            Self::Float3 => 12,
            Self::Float4 => 16,
        }
    }

    /// Number of floats [`decode_vertex`] yields.
    #[must_use]
    pub const fn component_count(self) -> usize {
        match self {
            Self::Float1 => 1,
            Self::Float2 | Self::Short2 | Self::Short2N | Self::UShort2N | Self::Float16x2 => 2,
            Self::Float3 | Self::UDec3 | Self::Dec3N => 3,
            Self::Float4
            | Self::Color
            | Self::UByte4
            | Self::UByte4N
            | Self::Short4
            | Self::Short4N
            | Self::UShort4N
            | Self::Float16x4 => 4,
        }
    }
}

impl TryFrom<u32> for VertexType {
    type Error = DecodeError;

    fn try_from(code: u32) -> DecodeResult<Self> {
        Ok(match code {
            0 => Self::Float1,
            1 => Self::Float2,
            2 => Self::Float3,
            3 => Self::Float4,
            4 => Self::Color,
            5 => Self::UByte4,
            6 => Self::Short2,
            7 => Self::Short4,
            8 => Self::UByte4N,
            9 => Self::Short2N,
            10 => Self::Short4N,
            11 => Self::UShort2N,
            12 => Self::UShort4N,
            13 => Self::UDec3,
            14 => Self::Dec3N,
            15 => Self::Float16x2,
            16 => Self::Float16x4,
            _ => return Err(DecodeError::UnsupportedVertexType(code)),
        })
    }
}

/// One to four decoded floats.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Components {
    values: [f32; 4],
    len: usize,
}

impl Components {
    fn push(&mut self, value: f32) {
        self.values[self.len] = value;
        self.len += 1;
    }
}

impl Deref for Components {
    type Target = [f32];

    fn deref(&self) -> &[f32] {
        &self.values[..self.len]
    }
}

impl FromIterator<f32> for Components {
    fn from_iter<I: IntoIterator<Item = f32>>(iter: I) -> Self {
        let mut components = Self::default();
        for value in iter.into_iter().take(4) {
            components.push(value);
        }
        components
    }
}

/// Decode the component at `offset` in a vertex buffer.
///
/// Reads exactly `ty.byte_width()` bytes; a span running past the end of
/// `data` is an error rather than a short read.
pub fn decode_vertex(data: &[u8], offset: usize, ty: VertexType) -> DecodeResult<Components> {
    let bytes = span("vertex", data, offset, ty.byte_width())?;

    let components = match ty {
        VertexType::Float1 | VertexType::Float2 | VertexType::Float3 | VertexType::Float4 => bytes
            .chunks_exact(4)
            .map(|b| f32::from_le_bytes([b[0], b[1], b[2], b[3]]))
            .collect(),
        VertexType::Color | VertexType::UByte4 => bytes.iter().copied().map(f32::from).collect(),
        VertexType::UByte4N => bytes.iter().map(|&b| f32::from(b) / 255.0).collect(),
        VertexType::Short2 | VertexType::Short4 => shorts(bytes).map(f32::from).collect(),
        VertexType::Short2N | VertexType::Short4N => {
            shorts(bytes).map(|s| f32::from(s) / 65535.0).collect()
        }
        VertexType::UShort2N | VertexType::UShort4N => {
            ushorts(bytes).map(|s| f32::from(s) / 65535.0).collect()
        }
        VertexType::UDec3 => dec3(bytes).into_iter().collect(),
        VertexType::Dec3N => dec3(bytes).into_iter().map(|f| f / 511.0).collect(),
        VertexType::Float16x2 | VertexType::Float16x4 => ushorts(bytes).map(half_to_f32).collect(),
    };

    Ok(components)
}

/// Widen an IEEE-754 half to single precision.
///
/// Rebiases the exponent and shifts the mantissa into place. Zero,
/// subnormal, infinite and NaN inputs are not special-cased and produce
/// meaningless values; vertex data never contains them.
#[must_use]
pub fn half_to_f32(bits: u16) -> f32 {
    let bits = u32::from(bits);
    let sign = (bits & 0x8000) << 16;
    let mantissa = (bits & 0x03ff) << 13;
    let exponent = ((bits & 0x7c00) >> 10) + 0x70;
    f32::from_bits(sign | (exponent << 23) | mantissa)
}

fn shorts(bytes: &[u8]) -> impl Iterator<Item = i16> + '_ {
    bytes.chunks_exact(2).map(|b| i16::from_le_bytes([b[0], b[1]]))
}

fn ushorts(bytes: &[u8]) -> impl Iterator<Item = u16> + '_ {
    bytes.chunks_exact(2).map(|b| u16::from_le_bytes([b[0], b[1]]))
}

/// Unpack three 10-bit unsigned fields at bits 0, 10 and 20.
#[allow(clippy::cast_precision_loss)]
fn dec3(bytes: &[u8]) -> [f32; 3] {
    let packed = u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    [0, 10, 20].map(|shift| ((packed >> shift) & 0x3ff) as f32)
}
