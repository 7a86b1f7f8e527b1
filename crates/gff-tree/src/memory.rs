//! In-memory field trees.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::{
    Document, DocumentError, DocumentProvider, FieldNode, Label, Reference, StructType, Value,
};

/// Owned value stored in a [`MemoryNode`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MemoryValue {
    Number(f64),
    Text(String),
    Floats(Vec<f32>),
    Blob(Arc<[u8]>),
    Struct(Arc<MemoryNode>),
    List(Vec<MemoryValue>),
    Reference(Arc<MemoryNode>),
}

impl MemoryValue {
    /// A list of inline structs.
    pub fn structs(nodes: impl IntoIterator<Item = MemoryNode>) -> Self {
        Self::List(
            nodes
                .into_iter()
                .map(|node| Self::Struct(Arc::new(node)))
                .collect(),
        )
    }

    /// A list of references.
    pub fn references(nodes: impl IntoIterator<Item = MemoryNode>) -> Self {
        Self::List(
            nodes
                .into_iter()
                .map(|node| Self::Reference(Arc::new(node)))
                .collect(),
        )
    }

    fn to_value(&self) -> Value {
        match self {
            Self::Number(n) => Value::Number(*n),
            Self::Text(s) => Value::Text(s.clone()),
            Self::Floats(v) => Value::Floats(v.clone()),
            Self::Blob(b) => Value::Blob(Arc::clone(b)),
            Self::Struct(node) => Value::Struct(Arc::clone(node) as _),
            Self::List(items) => Value::List(items.iter().map(Self::to_value).collect()),
            Self::Reference(node) => Value::Reference(Reference::new(Arc::clone(node) as _)),
        }
    }
}

impl From<f64> for MemoryValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<u32> for MemoryValue {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<&str> for MemoryValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<Vec<f32>> for MemoryValue {
    fn from(value: Vec<f32>) -> Self {
        Self::Floats(value)
    }
}

impl From<Vec<u8>> for MemoryValue {
    fn from(value: Vec<u8>) -> Self {
        Self::Blob(value.into())
    }
}

impl From<MemoryNode> for MemoryValue {
    fn from(value: MemoryNode) -> Self {
        Self::Struct(Arc::new(value))
    }
}

/// Struct node backed by a map.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MemoryNode {
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub struct_type: StructType,
    #[cfg_attr(feature = "serde", serde(default))]
    pub fields: BTreeMap<Label, MemoryValue>,
}

impl MemoryNode {
    #[must_use]
    pub fn new(struct_type: StructType) -> Self {
        Self {
            struct_type,
            fields: BTreeMap::new(),
        }
    }

    /// Builder-style field insertion.
    #[must_use]
    pub fn with(mut self, label: Label, value: impl Into<MemoryValue>) -> Self {
        self.fields.insert(label, value.into());
        self
    }

    #[must_use]
    pub fn into_document(self) -> Document {
        Document::new(Arc::new(self))
    }
}

impl FieldNode for MemoryNode {
    fn struct_type(&self) -> StructType {
        self.struct_type
    }

    fn value(&self, label: Label) -> Option<Value> {
        self.fields.get(&label).map(MemoryValue::to_value)
    }
}

/// Provider serving documents from a path-keyed map.
#[derive(Clone, Default)]
pub struct MemoryProvider {
    documents: HashMap<PathBuf, Document>,
}

impl MemoryProvider {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: impl Into<PathBuf>, document: Document) {
        self.documents.insert(path.into(), document);
    }

    /// Builder-style insertion.
    #[must_use]
    pub fn with(mut self, path: impl Into<PathBuf>, document: Document) -> Self {
        self.insert(path, document);
        self
    }
}

impl DocumentProvider for MemoryProvider {
    fn load(&self, path: &Path) -> Result<Document, DocumentError> {
        self.documents
            .get(path)
            .cloned()
            .ok_or_else(|| DocumentError::NotFound {
                path: path.to_path_buf(),
            })
    }
}
