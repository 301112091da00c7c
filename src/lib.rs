//! Shared CPU/GPU shading contract for a glTF renderer.
//!
//! Two layers live here: [`uniforms`] holds the binary-compatible uniform
//! buffer records populated by the host and read verbatim by shader programs,
//! and [`shading`] is the CPU reference implementation of the shading math
//! helpers those programs call (importance sampling, microfacet geometry
//! terms, color-space conversion, tone mapping, matrix utilities).

pub mod shading;
pub mod uniforms;

pub use uniforms::{
    BlinnPhongMaterial, BlinnPhongSceneUniforms, PbrSceneUniforms, TexcoordIndices, VertexFlags,
};
