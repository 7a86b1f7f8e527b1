//! Field values and the node lookup trait.

use std::fmt;
use std::sync::Arc;

use crate::{Label, StructType};

/// Shared handle to a struct node.
pub type Node = Arc<dyn FieldNode>;

/// Shared raw byte blob.
pub type Blob = Arc<[u8]>;

/// A value stored under a label.
#[derive(Clone)]
pub enum Value {
    Number(f64),
    Text(String),
    /// Short float vector (translation, quaternion, bounding sphere).
    Floats(Vec<f32>),
    Blob(Blob),
    Struct(Node),
    List(Vec<Value>),
    Reference(Reference),
}

impl Value {
    /// Name of the variant, for error messages.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::Text(_) => "text",
            Self::Floats(_) => "floats",
            Self::Blob(_) => "blob",
            Self::Struct(_) => "struct",
            Self::List(_) => "list",
            Self::Reference(_) => "reference",
        }
    }

    /// The node this value holds or points at.
    ///
    /// Only follows a single reference; a reference never targets another
    /// reference.
    #[must_use]
    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Self::Struct(node) => Some(node),
            Self::Reference(reference) => Some(reference.target()),
            _ => None,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => f.debug_tuple("Number").field(n).finish(),
            Self::Text(s) => f.debug_tuple("Text").field(s).finish(),
            Self::Floats(v) => f.debug_tuple("Floats").field(v).finish(),
            Self::Blob(b) => write!(f, "Blob({} bytes)", b.len()),
            Self::Struct(node) => write!(f, "Struct({})", node.struct_type()),
            Self::List(items) => f.debug_tuple("List").field(items).finish(),
            Self::Reference(r) => write!(f, "Reference({})", r.target().struct_type()),
        }
    }
}

/// Link to a struct node stored elsewhere in the document.
#[derive(Clone)]
pub struct Reference(Node);

impl Reference {
    #[must_use]
    pub fn new(target: Node) -> Self {
        Self(target)
    }

    #[must_use]
    pub fn target(&self) -> &Node {
        &self.0
    }
}

/// Lookup failure for a single field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("field {label} is missing")]
    Missing { label: Label },
    #[error("field {label} holds {found}, expected {expected}")]
    Mismatched {
        label: Label,
        expected: &'static str,
        found: &'static str,
    },
}

/// Read-only view of one struct node.
///
/// Implementors provide [`struct_type`](Self::struct_type) and
/// [`value`](Self::value); the typed accessors are built on top of them and
/// turn absence or a type mismatch into a [`FieldError`].
pub trait FieldNode: Send + Sync {
    fn struct_type(&self) -> StructType;

    /// Raw lookup. `None` when the label is absent.
    fn value(&self, label: Label) -> Option<Value>;

    fn require(&self, label: Label) -> Result<Value, FieldError> {
        self.value(label).ok_or(FieldError::Missing { label })
    }

    fn number(&self, label: Label) -> Result<f64, FieldError> {
        match self.require(label)? {
            Value::Number(n) => Ok(n),
            other => Err(mismatch(label, "number", &other)),
        }
    }

    /// A number that must be a non-negative integer fitting in `u32`.
    fn uint(&self, label: Label) -> Result<u32, FieldError> {
        let n = self.number(label)?;
        if n.fract() != 0.0 || !(0.0..=f64::from(u32::MAX)).contains(&n) {
            return Err(FieldError::Mismatched {
                label,
                expected: "unsigned integer",
                found: "number",
            });
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        Ok(n as u32)
    }

    fn text(&self, label: Label) -> Result<String, FieldError> {
        match self.require(label)? {
            Value::Text(s) => Ok(s),
            other => Err(mismatch(label, "text", &other)),
        }
    }

    fn floats(&self, label: Label) -> Result<Vec<f32>, FieldError> {
        match self.require(label)? {
            Value::Floats(v) => Ok(v),
            other => Err(mismatch(label, "floats", &other)),
        }
    }

    fn blob(&self, label: Label) -> Result<Blob, FieldError> {
        match self.require(label)? {
            Value::Blob(b) => Ok(b),
            other => Err(mismatch(label, "blob", &other)),
        }
    }

    /// A struct, or the target of a reference.
    fn node(&self, label: Label) -> Result<Node, FieldError> {
        let value = self.require(label)?;
        value
            .as_node()
            .cloned()
            .ok_or_else(|| mismatch(label, "struct", &value))
    }

    /// A list whose items are all structs or references.
    fn nodes(&self, label: Label) -> Result<Vec<Node>, FieldError> {
        match self.require(label)? {
            Value::List(items) => items
                .iter()
                .map(|item| {
                    item.as_node()
                        .cloned()
                        .ok_or_else(|| mismatch(label, "list of structs", item))
                })
                .collect(),
            other => Err(mismatch(label, "list", &other)),
        }
    }
}

fn mismatch(label: Label, expected: &'static str, found: &Value) -> FieldError {
    FieldError::Mismatched {
        label,
        expected,
        found: found.type_name(),
    }
}
