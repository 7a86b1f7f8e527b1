use std::path::PathBuf;

use gff_decode::DecodeError;
use gff_tree::{DocumentError, FieldError, Label};

/// Errors from loading or decoding a document.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Document(#[from] DocumentError),
    #[error("{context}: {source}")]
    Field {
        context: String,
        #[source]
        source: FieldError,
    },
    #[error("{context}: {source}")]
    Decode {
        context: String,
        #[source]
        source: DecodeError,
    },
    #[error("{context}: field {label} holds {found} floats, need {expected}")]
    ShortVector {
        context: String,
        label: Label,
        expected: usize,
        found: usize,
    },
    #[error("mesh {} referenced by {} does not exist", mesh.display(), hierarchy.display())]
    MissingMeshReference { hierarchy: PathBuf, mesh: PathBuf },
    #[error("model must have exactly one root node, found {0}")]
    RootCount(usize),
    #[error("model has no parts")]
    NoParts,
    #[error("part {part:?} uses mesh group {group:?}, which the mesh does not contain")]
    UnknownMeshGroup { part: String, group: String },
    #[error("node nesting exceeds the limit of {0}")]
    DepthExceeded(usize),
    #[error("{}: {source}", path.display())]
    At {
        path: PathBuf,
        #[source]
        source: Box<Error>,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Attach the document path, unless the error already names one.
    pub(crate) fn at(self, path: impl Into<PathBuf>) -> Self {
        match self {
            Self::Document(_) | Self::MissingMeshReference { .. } | Self::At { .. } => self,
            other => Self::At {
                path: path.into(),
                source: Box::new(other),
            },
        }
    }
}

/// Attach a human-readable location to field and decode failures.
pub(crate) trait Context<T> {
    fn context(self, context: impl FnOnce() -> String) -> Result<T>;
}

impl<T> Context<T> for std::result::Result<T, FieldError> {
    fn context(self, context: impl FnOnce() -> String) -> Result<T> {
        self.map_err(|source| Error::Field {
            context: context(),
            source,
        })
    }
}

impl<T> Context<T> for std::result::Result<T, DecodeError> {
    fn context(self, context: impl FnOnce() -> String) -> Result<T> {
        self.map_err(|source| Error::Decode {
            context: context(),
            source,
        })
    }
}
