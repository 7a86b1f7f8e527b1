//! Local transforms of hierarchy nodes.

use glam::{Mat4, Vec3, Vec4};

use gff_decode::transform::IDENTITY_ROTATION;
use gff_tree::{FieldNode, Label, NodeKind, labels};

use crate::depth::Depth;
use crate::error::{Context, Error, Result};

/// Default nesting budget when resolving a transform on its own.
const DEFAULT_DEPTH: usize = 16;

/// Resolve a node's local transform from its `trsl` and `rota` children.
///
/// A missing child leaves that part at identity. When a kind appears more
/// than once, the last child wins.
pub fn resolve_local_transform(node: &dyn FieldNode) -> Result<Mat4> {
    resolve_with_depth(node, Depth::new(DEFAULT_DEPTH))
}

pub(crate) fn resolve_with_depth(node: &dyn FieldNode, depth: Depth) -> Result<Mat4> {
    let mut translation = Vec3::ZERO;
    let mut rotation = IDENTITY_ROTATION;

    if node.value(labels::CHILDREN).is_some() {
        depth.descend()?;
        let children = node
            .nodes(labels::CHILDREN)
            .context(|| format!("{} node children", node.struct_type()))?;

        for child in &children {
            match child.struct_type().kind() {
                NodeKind::Translation => {
                    let [x, y, z] = vector::<3>(&**child, labels::TRANSLATION)?;
                    translation = Vec3::new(x, y, z);
                }
                NodeKind::Rotation => {
                    rotation = Vec4::from_array(vector::<4>(&**child, labels::ROTATION)?);
                }
                NodeKind::Mesh | NodeKind::Other(_) => {}
            }
        }
    }

    Ok(gff_decode::local_transform(translation, rotation))
}

/// First `N` floats of a vector field.
pub(crate) fn vector<const N: usize>(node: &dyn FieldNode, label: Label) -> Result<[f32; N]> {
    let context = || format!("{} node", node.struct_type());
    let values = node.floats(label).context(context)?;
    let mut out = [0.0; N];
    let kept = values.get(..N).ok_or_else(|| Error::ShortVector {
        context: context(),
        label,
        expected: N,
        found: values.len(),
    })?;
    out.copy_from_slice(kept);
    Ok(out)
}
