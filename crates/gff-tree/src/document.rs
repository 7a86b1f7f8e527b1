//! Whole documents and the provider that loads them.

use std::path::{Path, PathBuf};

use crate::Node;

/// Magic token at the start of every GFF file.
pub const GFF_MAGIC: [u8; 4] = *b"GFF ";
/// The only format version this workspace decodes.
pub const GFF_VERSION: [u8; 4] = *b"V4.0";

/// Format identification read from a document's header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentHeader {
    pub magic: [u8; 4],
    pub version: [u8; 4],
}

impl DocumentHeader {
    /// Header of a GFF 4.0 document.
    pub const V4: Self = Self {
        magic: GFF_MAGIC,
        version: GFF_VERSION,
    };

    /// Reject anything that is not a GFF 4.0 document.
    pub fn validate(&self, path: &Path) -> Result<(), DocumentError> {
        if self.magic != GFF_MAGIC {
            return Err(DocumentError::BadMagic {
                path: path.to_path_buf(),
                found: self.magic,
            });
        }
        if self.version != GFF_VERSION {
            return Err(DocumentError::BadVersion {
                path: path.to_path_buf(),
                found: self.version,
            });
        }
        Ok(())
    }
}

/// A loaded document: header plus top-level struct.
#[derive(Clone)]
pub struct Document {
    pub header: DocumentHeader,
    pub root: Node,
}

impl Document {
    #[must_use]
    pub fn new(root: Node) -> Self {
        Self {
            header: DocumentHeader::V4,
            root,
        }
    }
}

/// Failure to acquire a document.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DocumentError {
    #[error("{} not found", path.display())]
    NotFound { path: PathBuf },
    #[error("{} has bad magic {:?}", path.display(), String::from_utf8_lossy(found))]
    BadMagic { path: PathBuf, found: [u8; 4] },
    #[error("{} has unsupported version {:?}", path.display(), String::from_utf8_lossy(found))]
    BadVersion { path: PathBuf, found: [u8; 4] },
    #[error("failed to parse {}: {message}", path.display())]
    ParseFailure { path: PathBuf, message: String },
}

/// Source of documents.
///
/// A call either yields the whole document or fails; there are no partial
/// results. Implementations may block.
pub trait DocumentProvider {
    fn load(&self, path: &Path) -> Result<Document, DocumentError>;
}

impl<P: DocumentProvider + ?Sized> DocumentProvider for &P {
    fn load(&self, path: &Path) -> Result<Document, DocumentError> {
        (**self).load(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn v4_header_validates() {
        assert!(DocumentHeader::V4.validate(Path::new("a.msh")).is_ok());
    }

    #[test]
    fn wrong_magic_and_version_are_rejected() {
        let bad_magic = DocumentHeader {
            magic: *b"RIFF",
            version: GFF_VERSION,
        };
        assert!(matches!(
            bad_magic.validate(Path::new("a.msh")),
            Err(DocumentError::BadMagic { .. })
        ));

        let bad_version = DocumentHeader {
            magic: GFF_MAGIC,
            version: *b"V3.2",
        };
        let err = bad_version.validate(Path::new("a.msh")).unwrap_err();
        assert!(matches!(err, DocumentError::BadVersion { .. }));
        assert!(err.to_string().contains("V3.2"));
    }
}
