//! CPU reference implementation of the shading math helpers.
//!
//! Every function here is pure and infallible: values in, values out, no
//! shared state. Degenerate inputs (zero determinant, out-of-range cosines)
//! produce clamped or documented-degenerate results instead of errors,
//! matching the GPU execution model where no error channel exists.

pub mod blinn_phong;
pub mod color;
pub mod geometry;
pub mod matrix;
pub mod sampling;


pub use blinn_phong::shade;
pub use color::{
    aces_film, linear_to_srgb, linear_to_srgb_vec3, linear_to_srgb_vec4, srgb_to_linear,
    srgb_to_linear_vec3, srgb_to_linear_vec4, tool_multiplier,
};
pub use geometry::{geometry_schlick_ggx, geometry_smith};
pub use matrix::{inverse_mat3, make_normal_matrix, mat3_from_mat4};
pub use sampling::{
    bitfield_reverse, hammersley, importance_sample_cosine_weighted, importance_sample_ggx,
    radical_inverse_vdc,
};
