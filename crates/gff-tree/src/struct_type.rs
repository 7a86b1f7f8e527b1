use std::fmt;

/// Four-character structural tag carried by every struct node.
///
/// Packed little-endian, so `b"trsl"` has `'t'` in the low byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct StructType(pub u32);

impl StructType {
    pub const TRANSLATION: Self = Self::from_bytes(*b"trsl");
    pub const ROTATION: Self = Self::from_bytes(*b"rota");
    pub const MESH: Self = Self::from_bytes(*b"mshh");

    #[must_use]
    pub const fn from_bytes(bytes: [u8; 4]) -> Self {
        Self(u32::from_le_bytes(bytes))
    }

    #[must_use]
    pub const fn to_bytes(self) -> [u8; 4] {
        self.0.to_le_bytes()
    }

    /// Classify the tag into the node kinds the decoders care about.
    #[must_use]
    pub fn kind(self) -> NodeKind {
        match self {
            Self::TRANSLATION => NodeKind::Translation,
            Self::ROTATION => NodeKind::Rotation,
            Self::MESH => NodeKind::Mesh,
            other => NodeKind::Other(other),
        }
    }
}

impl fmt::Display for StructType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.to_bytes() {
            if byte.is_ascii_graphic() || byte == b' ' {
                write!(f, "{}", char::from(byte))?;
            } else {
                write!(f, "\\x{byte:02x}")?;
            }
        }
        Ok(())
    }
}

impl TryFrom<String> for StructType {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let bytes: [u8; 4] = value
            .as_bytes()
            .try_into()
            .map_err(|_| format!("struct type {value:?} is not four bytes"))?;
        Ok(Self::from_bytes(bytes))
    }
}

impl From<StructType> for String {
    fn from(value: StructType) -> Self {
        String::from_utf8_lossy(&value.to_bytes()).into_owned()
    }
}

/// Hierarchy node kinds, discriminated by [`StructType`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// `trsl`: carries a translation vector.
    Translation,
    /// `rota`: carries a rotation quaternion.
    Rotation,
    /// `mshh`: a mesh part.
    Mesh,
    Other(StructType),
}
