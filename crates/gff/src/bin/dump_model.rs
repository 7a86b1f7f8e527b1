//! Decode a model hierarchy stored as JSON fixture documents and print a
//! summary.
//!
//! Each document is a serialized `MemoryNode`. The companion mesh named by
//! the hierarchy is looked up next to it on disk.
//!
//! Run: `cargo run -p gff --features test-tools --bin dump_model -- <model.mmh.json>`

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use gff::{
    Document, DocumentError, DocumentProvider, Loader, MemoryNode, ModelHierarchy, to_row_major,
};
use tracing_subscriber::EnvFilter;

/// Serves JSON fixture files from disk.
struct JsonFileProvider;

impl DocumentProvider for JsonFileProvider {
    fn load(&self, path: &Path) -> Result<Document, DocumentError> {
        let content = fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => DocumentError::NotFound {
                path: path.to_path_buf(),
            },
            _ => DocumentError::ParseFailure {
                path: path.to_path_buf(),
                message: e.to_string(),
            },
        })?;
        let root: MemoryNode =
            serde_json::from_str(&content).map_err(|e| DocumentError::ParseFailure {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        Ok(Document::new(Arc::new(root)))
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let Some(path) = std::env::args().nth(1).map(PathBuf::from) else {
        eprintln!("usage: dump_model <model.mmh.json>");
        std::process::exit(2);
    };

    let loader = Loader::new(JsonFileProvider);
    let model = loader.load_model(&path)?;

    let summary = summarize(&model);
    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}

fn summarize(model: &ModelHierarchy) -> serde_json::Value {
    let mesh = model.mesh();
    serde_json::json!({
        "parts": model.parts().iter().map(|part| {
            serde_json::json!({
                "name": part.name,
                "mesh_group": part.mesh_group,
                "transform": to_row_major(&part.local_transform),
                "cast_baked_shadow": part.casts_baked_shadow,
                "receive_baked_shadow": part.receives_baked_shadow,
            })
        }).collect::<Vec<_>>(),
        "chunks": mesh.chunks().iter().map(|chunk| {
            let sphere = chunk.bounding_sphere;
            serde_json::json!({
                "name": chunk.name,
                "vertex_count": chunk.vertex_count(),
                "index_count": chunk.indices.len(),
                "has_normals": !chunk.normals.is_empty(),
                "has_tex_coords": !chunk.tex_coords.is_empty(),
                "bounding_sphere": [sphere.center.x, sphere.center.y, sphere.center.z, sphere.radius],
                "first_positions": chunk.positions.iter().take(5).map(|p| [p.x, p.y, p.z]).collect::<Vec<_>>(),
                "first_indices": chunk.indices.iter().take(12).collect::<Vec<_>>(),
            })
        }).collect::<Vec<_>>(),
        "skipped_chunks": mesh.failures().iter().map(|failure| {
            serde_json::json!({
                "index": failure.index,
                "name": failure.name,
                "error": failure.error.to_string(),
            })
        }).collect::<Vec<_>>(),
    })
}
