//! Affine transforms for model hierarchies.
//!
//! Matrices are [`glam::Mat4`]. The on-disk convention is row-major with the
//! translation in the last column; [`to_row_major`] and
//! [`matrix_from_row_major`] convert at the boundary.

use glam::{Mat4, Vec3, Vec4};

use crate::error::{DecodeError, DecodeResult};

/// Rotation used when a node has no `rota` child.
pub const IDENTITY_ROTATION: Vec4 = Vec4::W;

/// Build the local transform of a hierarchy node.
///
/// `rotation` is a quaternion `(x, y, z, w)`. It is used as stored and not
/// renormalized, so a non-unit quaternion yields a non-rigid matrix; baked
/// content depends on that.
#[must_use]
pub fn local_transform(translation: Vec3, rotation: Vec4) -> Mat4 {
    let [x, y, z, w] = rotation.to_array();

    // Row-major terms, named r<row><col>.
    let r00 = 1.0 - 2.0 * (y * y + z * z);
    let r01 = 2.0 * (x * y - w * z);
    let r02 = 2.0 * (x * z + w * y);
    let r10 = 2.0 * (x * y + w * z);
    let r11 = 1.0 - 2.0 * (x * x + z * z);
    let r12 = 2.0 * (y * z - w * x);
    let r20 = 2.0 * (x * z - w * y);
    let r21 = 2.0 * (y * z + w * x);
    let r22 = 1.0 - 2.0 * (x * x + y * y);

    Mat4::from_cols(
        Vec4::new(r00, r10, r20, 0.0),
        Vec4::new(r01, r11, r21, 0.0),
        Vec4::new(r02, r12, r22, 0.0),
        translation.extend(1.0),
    )
}

/// Apply `child` inside `parent`'s space.
///
/// Order matters: the parent is the left operand.
#[must_use]
pub fn compose(parent: &Mat4, child: &Mat4) -> Mat4 {
    *parent * *child
}

/// Read a 4×4 matrix from 16 row-major floats.
pub fn matrix_from_row_major(values: &[f32]) -> DecodeResult<Mat4> {
    let rows: &[f32; 16] = values
        .try_into()
        .map_err(|_| DecodeError::MatrixDimension(values.len()))?;
    Ok(Mat4::from_cols_array(rows).transpose())
}

#[must_use]
pub fn to_row_major(matrix: &Mat4) -> [f32; 16] {
    matrix.transpose().to_cols_array()
}
