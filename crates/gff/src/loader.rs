//! Loading documents through a [`DocumentProvider`].

use std::path::{Path, PathBuf};

use gff_tree::{Document, DocumentError, DocumentProvider};

use crate::error::{Error, Result};
use crate::hierarchy::ModelHierarchy;
use crate::mesh::MeshDocument;

/// Settings for a [`Loader`].
#[derive(Debug, Clone, Copy)]
pub struct LoaderConfig {
    /// How many levels of node references may be followed below the top
    /// level struct.
    pub max_depth: usize,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self { max_depth: 16 }
    }
}

/// Loads and decodes mesh and model-hierarchy documents.
pub struct Loader<P> {
    provider: P,
    config: LoaderConfig,
}

impl<P: DocumentProvider> Loader<P> {
    pub fn new(provider: P) -> Self {
        Self::with_config(provider, LoaderConfig::default())
    }

    pub fn with_config(provider: P, config: LoaderConfig) -> Self {
        Self { provider, config }
    }

    #[must_use]
    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// Load a document and check that it is GFF 4.0.
    fn document(&self, path: &Path) -> Result<Document> {
        let document = self.provider.load(path)?;
        document.header.validate(path)?;
        Ok(document)
    }

    /// Load and decode a mesh document.
    pub fn load_mesh(&self, path: impl AsRef<Path>) -> Result<MeshDocument> {
        let path = path.as_ref();
        let document = self.document(path)?;
        let mesh = MeshDocument::from_node(&*document.root).map_err(|e| e.at(path))?;

        tracing::info!(
            "Loaded mesh {}: {} chunks, {} skipped",
            path.display(),
            mesh.chunks().len(),
            mesh.failures().len()
        );
        Ok(mesh)
    }

    /// Load a model hierarchy together with its companion mesh.
    ///
    /// The mesh file name stored in the hierarchy is resolved relative to the
    /// hierarchy's directory. Nothing is returned unless both documents
    /// decode.
    pub fn load_model(&self, path: impl AsRef<Path>) -> Result<ModelHierarchy> {
        let path = path.as_ref();
        let document = self.document(path)?;
        let top = &*document.root;

        let reference = ModelHierarchy::mesh_reference(top).map_err(|e| e.at(path))?;
        let mesh_path = mesh_path(path, &reference);
        let mesh = match self.load_mesh(&mesh_path) {
            Err(Error::Document(DocumentError::NotFound { .. })) => {
                return Err(Error::MissingMeshReference {
                    hierarchy: path.to_path_buf(),
                    mesh: mesh_path,
                });
            }
            other => other?,
        };

        let model =
            ModelHierarchy::from_node(top, mesh, self.config.max_depth).map_err(|e| e.at(path))?;

        tracing::info!(
            "Loaded model {}: {} parts from {}",
            path.display(),
            model.parts().len(),
            mesh_path.display()
        );
        Ok(model)
    }
}

fn mesh_path(hierarchy: &Path, reference: &str) -> PathBuf {
    hierarchy
        .parent()
        .map_or_else(|| PathBuf::from(reference), |dir| dir.join(reference))
}
