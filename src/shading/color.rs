//! sRGB transfer functions and filmic tone mapping.
//!
//! The transfer functions are defined on display-range input [0, 1]; HDR
//! values must be tone mapped through [`aces_film`] first.

use glam::{Vec3, Vec4};

/// sRGB piecewise transfer function, single channel, encode → linear.
pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Inverse of [`srgb_to_linear`], single channel.
pub fn linear_to_srgb(c: f32) -> f32 {
    if c <= 0.003_130_8 {
        c * 12.92
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}

pub fn srgb_to_linear_vec3(c: Vec3) -> Vec3 {
    Vec3::new(srgb_to_linear(c.x), srgb_to_linear(c.y), srgb_to_linear(c.z))
}

pub fn linear_to_srgb_vec3(c: Vec3) -> Vec3 {
    Vec3::new(linear_to_srgb(c.x), linear_to_srgb(c.y), linear_to_srgb(c.z))
}

/// 4-component overload; alpha passes through unmodified.
pub fn srgb_to_linear_vec4(c: Vec4) -> Vec4 {
    srgb_to_linear_vec3(c.truncate()).extend(c.w)
}

/// 4-component overload; alpha passes through unmodified.
pub fn linear_to_srgb_vec4(c: Vec4) -> Vec4 {
    linear_to_srgb_vec3(c.truncate()).extend(c.w)
}

/// ACES filmic tone-mapping approximation (Narkowicz fit).
///
/// Compresses linear HDR color into [0, 1] per channel; monotonically
/// non-decreasing for non-negative finite input.
pub fn aces_film(x: Vec3) -> Vec3 {
    const A: f32 = 2.51;
    const B: f32 = 0.03;
    const C: f32 = 2.43;
    const D: f32 = 0.59;
    const E: f32 = 0.14;

    let mapped = (x * (A * x + Vec3::splat(B))) / (x * (C * x + Vec3::splat(D)) + Vec3::splat(E));
    mapped.clamp(Vec3::ZERO, Vec3::ONE)
}

/// Uniform tool-strength multiplier applied by the viewer's debug paths.
///
/// Currently an identity pass-through; the intended scale policy (exposure
/// vs. visualization gain) is still undecided upstream, so the hook keeps
/// its call sites in place without changing any output.
pub fn tool_multiplier(value: f32) -> f32 {
    value
}
