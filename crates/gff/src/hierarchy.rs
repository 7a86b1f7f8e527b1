//! Model hierarchy documents.

use glam::Mat4;

use gff_decode::{MeshChunk, compose};
use gff_tree::{FieldNode, NodeKind, labels};

use crate::depth::Depth;
use crate::error::{Context, Error, Result};
use crate::mesh::MeshDocument;
use crate::transform::resolve_with_depth;

/// One mesh placed by a hierarchy.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelPart {
    pub name: String,
    /// Name of the chunk in the companion mesh document.
    pub mesh_group: String,
    /// Part transform, already composed with the root's transform.
    pub local_transform: Mat4,
    pub casts_baked_shadow: bool,
    pub receives_baked_shadow: bool,
}

/// A part resolved against its mesh and placed in world space.
#[derive(Debug, Clone, Copy)]
pub struct PlacedMesh<'a> {
    pub name: &'a str,
    pub part: &'a ModelPart,
    pub chunk: &'a MeshChunk,
    pub transform: Mat4,
}

/// A decoded model: its parts and the mesh they draw from.
#[derive(Debug)]
pub struct ModelHierarchy {
    mesh: MeshDocument,
    parts: Vec<ModelPart>,
}

impl ModelHierarchy {
    /// File name of the companion mesh document.
    pub fn mesh_reference(top: &dyn FieldNode) -> Result<String> {
        top.text(labels::MODEL_DATA_NAME)
            .context(|| "model hierarchy".to_string())
    }

    /// Decode the parts under a hierarchy document's top-level struct.
    ///
    /// The document must have exactly one root node, and the root must have
    /// at least one mesh child. Parts keep the root's child order.
    pub fn from_node(top: &dyn FieldNode, mesh: MeshDocument, max_depth: usize) -> Result<Self> {
        let depth = Depth::new(max_depth).descend()?;
        let roots = top
            .nodes(labels::CHILDREN)
            .context(|| "model hierarchy".to_string())?;
        let [root] = roots.as_slice() else {
            return Err(Error::RootCount(roots.len()));
        };

        let ambient = resolve_with_depth(&**root, depth)?;

        let depth = depth.descend()?;
        let children = root
            .nodes(labels::CHILDREN)
            .context(|| "model root".to_string())?;

        let parts = children
            .iter()
            .filter(|child| child.struct_type().kind() == NodeKind::Mesh)
            .map(|child| read_part(&**child, &ambient, depth))
            .collect::<Result<Vec<_>>>()?;

        if parts.is_empty() {
            return Err(Error::NoParts);
        }

        Ok(Self { mesh, parts })
    }

    #[must_use]
    pub fn mesh(&self) -> &MeshDocument {
        &self.mesh
    }

    #[must_use]
    pub fn parts(&self) -> &[ModelPart] {
        &self.parts
    }

    /// Place every part under an instance transform.
    ///
    /// Each result's transform is `instance × part.local_transform`. Fails on
    /// the first part whose mesh group the mesh document lacks, including
    /// groups whose chunk failed to decode.
    pub fn instantiate(&self, instance: &Mat4) -> Result<Vec<PlacedMesh<'_>>> {
        self.parts
            .iter()
            .map(|part| {
                let chunk =
                    self.mesh
                        .chunk(&part.mesh_group)
                        .ok_or_else(|| Error::UnknownMeshGroup {
                            part: part.name.clone(),
                            group: part.mesh_group.clone(),
                        })?;
                Ok(PlacedMesh {
                    name: &part.name,
                    part,
                    chunk,
                    transform: compose(instance, &part.local_transform),
                })
            })
            .collect()
    }
}

fn read_part(node: &dyn FieldNode, ambient: &Mat4, depth: Depth) -> Result<ModelPart> {
    let name = node
        .text(labels::MMH_NAME)
        .context(|| "model part".to_string())?;
    let context = || format!("part {name:?}");

    let local = resolve_with_depth(node, depth)?;
    let mesh_group = node.text(labels::MESH_GROUP_NAME).context(context)?;

    // Production metadata; older exports omit it.
    let flag = |label| node.number(label).is_ok_and(|n| n != 0.0);

    let part = ModelPart {
        local_transform: compose(ambient, &local),
        casts_baked_shadow: flag(labels::CAST_BAKED_SHADOW),
        receives_baked_shadow: flag(labels::RECEIVE_BAKED_SHADOW),
        mesh_group,
        name,
    };
    tracing::debug!(
        "Part {:?} -> mesh group {:?} (cast={}, receive={})",
        part.name,
        part.mesh_group,
        part.casts_baked_shadow,
        part.receives_baked_shadow
    );
    Ok(part)
}
