//! Low-discrepancy sequence generation and hemisphere importance sampling.

use std::f32::consts::PI;

use glam::{vec2, Vec2, Vec3};

/// Reverse the bit order of a 32-bit word.
///
/// All 32 bits are reversed, not just the occupied range; the radical
/// inverse below depends on that for its low-discrepancy property.
pub fn bitfield_reverse(mut bits: u32) -> u32 {
    bits = ((bits & 0x5555_5555) << 1) | ((bits & 0xAAAA_AAAA) >> 1);
    bits = ((bits & 0x3333_3333) << 2) | ((bits & 0xCCCC_CCCC) >> 2);
    bits = ((bits & 0x0F0F_0F0F) << 4) | ((bits & 0xF0F0_F0F0) >> 4);
    bits = ((bits & 0x00FF_00FF) << 8) | ((bits & 0xFF00_FF00) >> 8);
    bits.rotate_left(16)
}

/// Van der Corput radical inverse in base 2, mapped to [0, 1).
pub fn radical_inverse_vdc(bits: u32) -> f32 {
    // 2^-32
    bitfield_reverse(bits) as f32 * 2.328_306_4e-10
}

/// The i-th point of the length-n Hammersley sequence in [0, 1)².
pub fn hammersley(i: u32, n: u32) -> Vec2 {
    vec2(i as f32 / n as f32, radical_inverse_vdc(i))
}

/// Rotate a tangent-space sample (z up) into the hemisphere around `n`.
fn tangent_to_world(sample: Vec3, n: Vec3) -> Vec3 {
    let up = if n.z.abs() < 0.999 { Vec3::Z } else { Vec3::X };
    let tangent = up.cross(n).normalize();
    let bitangent = n.cross(tangent);
    (tangent * sample.x + bitangent * sample.y + n * sample.z).normalize()
}

/// Sample a half-vector from the GGX normal distribution around `n`.
///
/// `xi` is a uniform 2D sample in [0, 1), typically one [`hammersley`]
/// point. Roughness is clamped to [0, 1]; at zero the distribution
/// collapses onto `n`, at one it approaches a uniform hemisphere. The
/// result is always unit length.
pub fn importance_sample_ggx(xi: Vec2, n: Vec3, roughness: f32) -> Vec3 {
    let a = roughness.clamp(0.0, 1.0).powi(2);

    let phi = 2.0 * PI * xi.x;
    let cos_theta = ((1.0 - xi.y) / (1.0 + (a * a - 1.0) * xi.y)).sqrt().min(1.0);
    let sin_theta = (1.0 - cos_theta * cos_theta).sqrt();

    let h = Vec3::new(phi.cos() * sin_theta, phi.sin() * sin_theta, cos_theta);
    tangent_to_world(h, n)
}

/// Sample a direction from a cosine-weighted hemisphere around `n`.
///
/// The cosine lobe is folded into the sampling density, so integrating
/// `f(l)` over these samples estimates `∫ f(l) (n·l) dl / π` without a
/// separate cosine weight.
pub fn importance_sample_cosine_weighted(xi: Vec2, n: Vec3) -> Vec3 {
    let phi = 2.0 * PI * xi.x;
    let cos_theta = (1.0 - xi.y).sqrt();
    let sin_theta = xi.y.sqrt();

    let l = Vec3::new(phi.cos() * sin_theta, phi.sin() * sin_theta, cos_theta);
    tangent_to_world(l, n)
}
