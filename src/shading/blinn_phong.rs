//! Direct-lighting Blinn-Phong evaluation over the shared uniform records.

use glam::Vec3;

use crate::uniforms::{BlinnPhongMaterial, BlinnPhongSceneUniforms};

/// Shade one surface sample with ambient + Lambert diffuse + Blinn-Phong
/// specular, exactly the computation the fragment program performs from the
/// same two records.
///
/// `position` and `normal` are in world space; `normal` need not be unit
/// length. Cosine terms are clamped at zero and the specular lobe is gated
/// on the diffuse cosine so back-facing geometry never picks up highlights.
pub fn shade(
    material: &BlinnPhongMaterial,
    scene: &BlinnPhongSceneUniforms,
    position: Vec3,
    normal: Vec3,
) -> Vec3 {
    let n = normal.normalize_or_zero();
    let l = (Vec3::from(scene.light_position) - position).normalize_or_zero();
    let v = (Vec3::from(scene.view_position) - position).normalize_or_zero();
    let h = (l + v).normalize_or_zero();

    let diffuse_color = Vec3::from(material.diffuse_color);
    let n_dot_l = n.dot(l).max(0.0);

    let ambient = Vec3::from(scene.ambient_light) * diffuse_color;
    let diffuse = diffuse_color * n_dot_l;
    let specular = if n_dot_l > 0.0 {
        Vec3::from(material.specular_color) * n.dot(h).max(0.0).powf(material.shininess)
    } else {
        Vec3::ZERO
    };

    ambient + diffuse + specular
}
