//! 3×3 matrix utilities for normal transformation.

use glam::{Mat3, Mat4};

/// Upper-left 3×3 block of a 4×4 transform: the linear (rotation/scale)
/// part, with translation and the homogeneous row dropped.
pub fn mat3_from_mat4(m: Mat4) -> Mat3 {
    Mat3::from_cols(
        m.x_axis.truncate(),
        m.y_axis.truncate(),
        m.z_axis.truncate(),
    )
}

/// Adjugate-method 3×3 inverse.
///
/// There is no error channel at this layer: a zero determinant yields a
/// non-finite result rather than a panic, and callers must guarantee
/// well-conditioned input upstream.
pub fn inverse_mat3(m: Mat3) -> Mat3 {
    let row0 = m.y_axis.cross(m.z_axis);
    let row1 = m.z_axis.cross(m.x_axis);
    let row2 = m.x_axis.cross(m.y_axis);
    let inv_det = 1.0 / m.x_axis.dot(row0);
    Mat3::from_cols(row0 * inv_det, row1 * inv_det, row2 * inv_det).transpose()
}

/// Normal matrix for `m`: transpose of the inverse of its 3×3 linear part.
/// Transforms surface normals correctly under non-uniform scale. Only
/// meaningful when `m` is invertible.
pub fn make_normal_matrix(m: Mat4) -> Mat3 {
    inverse_mat3(mat3_from_mat4(m)).transpose()
}
