//! Smith shadowing-masking terms for the Cook-Torrance specular BRDF.

/// Schlick-GGX geometric attenuation for a single direction.
///
/// Uses the direct-lighting remap `k = (roughness + 1)² / 8`. The cosine is
/// clamped to [0, 1] before use so grazing or back-facing input can never
/// produce negative attenuation. The result lies in [0, 1].
pub fn geometry_schlick_ggx(n_dot_v: f32, roughness: f32) -> f32 {
    let r = roughness.clamp(0.0, 1.0) + 1.0;
    let k = r * r / 8.0;
    let n_dot_v = n_dot_v.clamp(0.0, 1.0);
    n_dot_v / (n_dot_v * (1.0 - k) + k)
}

/// Full Smith joint shadowing-masking term: the product of the view-side
/// and light-side Schlick-GGX terms.
pub fn geometry_smith(n_dot_v: f32, n_dot_l: f32, roughness: f32) -> f32 {
    geometry_schlick_ggx(n_dot_v, roughness) * geometry_schlick_ggx(n_dot_l, roughness)
}
