use anyhow::Result;

#[cfg(test)]
mod tests;

/// Blinn-Phong material constants, one per material.
///
/// Layout follows uniform buffer rules: 3-component vectors are aligned to
/// 16 bytes, and `shininess` packs into the pad slot after `specular_color`.
/// Field order is an ABI contract with the shader side.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct BlinnPhongMaterial {
    pub diffuse_color: [f32; 3],
    _pad0: f32,
    pub specular_color: [f32; 3],
    pub shininess: f32,
}

impl BlinnPhongMaterial {
    pub fn new(diffuse_color: [f32; 3], specular_color: [f32; 3], shininess: f32) -> Self {
        Self {
            diffuse_color,
            _pad0: 0.0,
            specular_color,
            shininess,
        }
    }
}

/// Per-scene lighting for the Blinn-Phong path. All positions in world space.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct BlinnPhongSceneUniforms {
    pub light_position: [f32; 3],
    _pad0: f32,
    pub view_position: [f32; 3],
    _pad1: f32,
    pub ambient_light: [f32; 3],
    _pad2: f32,
}

impl BlinnPhongSceneUniforms {
    pub fn new(light_position: [f32; 3], view_position: [f32; 3], ambient_light: [f32; 3]) -> Self {
        Self {
            light_position,
            _pad0: 0.0,
            view_position,
            _pad1: 0.0,
            ambient_light,
            _pad2: 0.0,
        }
    }
}

/// Per-scene lighting for the PBR path.
///
/// Same shape as [`BlinnPhongSceneUniforms`] but bound to a different shader
/// struct; kept separate so the two pipelines can diverge independently.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PbrSceneUniforms {
    pub light_position: [f32; 3],
    _pad0: f32,
    pub view_position: [f32; 3],
    _pad1: f32,
    pub ambient_light_color: [f32; 3],
    _pad2: f32,
}

impl PbrSceneUniforms {
    pub fn new(
        light_position: [f32; 3],
        view_position: [f32; 3],
        ambient_light_color: [f32; 3],
    ) -> Self {
        Self {
            light_position,
            _pad0: 0.0,
            view_position,
            _pad1: 0.0,
            ambient_light_color,
            _pad2: 0.0,
        }
    }
}

/// Vertex stream availability for the current PBR layout: tangent stream,
/// two UV sets, and an optional per-vertex modulation color. Booleans are
/// `u32` because uniform buffers have no 1-byte bool.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PbrVertexFlags {
    pub has_tangent: u32,
    pub has_uv0: u32,
    pub has_uv1: u32,
    pub has_modulation_color: u32,
}

impl PbrVertexFlags {
    pub fn new(has_tangent: bool, has_uv0: bool, has_uv1: bool, has_modulation_color: bool) -> Self {
        Self {
            has_tangent: has_tangent as u32,
            has_uv0: has_uv0 as u32,
            has_uv1: has_uv1 as u32,
            has_modulation_color: has_modulation_color as u32,
        }
    }
}

/// Older single-UV layout that still carries a tangent stream.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct TangentVertexFlags {
    pub has_tangent: u32,
    pub has_uv: u32,
    pub has_modulation_color: u32,
    _pad: u32,
}

impl TangentVertexFlags {
    pub fn new(has_tangent: bool, has_uv: bool, has_modulation_color: bool) -> Self {
        Self {
            has_tangent: has_tangent as u32,
            has_uv: has_uv as u32,
            has_modulation_color: has_modulation_color as u32,
            _pad: 0,
        }
    }
}

/// Minimal layout: single UV set and modulation color only.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct BasicVertexFlags {
    pub has_uv: u32,
    pub has_modulation_color: u32,
    _pad: [u32; 2],
}

impl BasicVertexFlags {
    pub fn new(has_uv: bool, has_modulation_color: bool) -> Self {
        Self {
            has_uv: has_uv as u32,
            has_modulation_color: has_modulation_color as u32,
            _pad: [0; 2],
        }
    }
}

/// Versioned vertex-attribute availability record.
///
/// Three historical layouts exist and are bound to different shader structs;
/// they are kept as distinct variants rather than merged into one record so
/// mixing them up is a type error on the host side, not a silent layout
/// mismatch on the GPU.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum VertexFlags {
    Pbr(PbrVertexFlags),
    Tangent(TangentVertexFlags),
    Basic(BasicVertexFlags),
}

impl VertexFlags {
    /// Pick the narrowest layout that covers the streams the asset provides.
    pub fn select(has_tangent: bool, uv_set_count: u32, has_modulation_color: bool) -> Self {
        let flags = if uv_set_count >= 2 {
            Self::Pbr(PbrVertexFlags::new(
                has_tangent,
                true,
                true,
                has_modulation_color,
            ))
        } else if has_tangent {
            Self::Tangent(TangentVertexFlags::new(
                true,
                uv_set_count > 0,
                has_modulation_color,
            ))
        } else {
            Self::Basic(BasicVertexFlags::new(uv_set_count > 0, has_modulation_color))
        };
        log::debug!(
            "selected vertex layout {} (tangent={}, uv_sets={}, modulation={})",
            flags.variant_name(),
            has_tangent,
            uv_set_count,
            has_modulation_color
        );
        flags
    }

    pub fn variant_name(&self) -> &'static str {
        match self {
            Self::Pbr(_) => "pbr",
            Self::Tangent(_) => "tangent",
            Self::Basic(_) => "basic",
        }
    }

    pub fn has_tangent(&self) -> bool {
        match self {
            Self::Pbr(f) => f.has_tangent != 0,
            Self::Tangent(f) => f.has_tangent != 0,
            Self::Basic(_) => false,
        }
    }

    /// Number of UV sets the layout carries.
    pub fn uv_set_count(&self) -> u32 {
        match self {
            Self::Pbr(f) => (f.has_uv0 != 0) as u32 + (f.has_uv1 != 0) as u32,
            Self::Tangent(f) => (f.has_uv != 0) as u32,
            Self::Basic(f) => (f.has_uv != 0) as u32,
        }
    }

    pub fn has_modulation_color(&self) -> bool {
        match self {
            Self::Pbr(f) => f.has_modulation_color != 0,
            Self::Tangent(f) => f.has_modulation_color != 0,
            Self::Basic(f) => f.has_modulation_color != 0,
        }
    }
}

/// Which UV set each texture slot samples from. Padded to a 16-byte multiple
/// for uniform buffer binding.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct TexcoordIndices {
    pub base_color: u32,
    pub normal: u32,
    pub metallic_roughness: u32,
    pub emissive: u32,
    pub occlusion: u32,
    _pad: [u32; 3],
}

impl TexcoordIndices {
    pub fn new(
        base_color: u32,
        normal: u32,
        metallic_roughness: u32,
        emissive: u32,
        occlusion: u32,
    ) -> Self {
        Self {
            base_color,
            normal,
            metallic_roughness,
            emissive,
            occlusion,
            _pad: [0; 3],
        }
    }

    fn slots(&self) -> [(&'static str, u32); 5] {
        [
            ("base_color", self.base_color),
            ("normal", self.normal),
            ("metallic_roughness", self.metallic_roughness),
            ("emissive", self.emissive),
            ("occlusion", self.occlusion),
        ]
    }

    /// Check every slot against the UV sets the active vertex layout carries.
    /// A slot pointing at a missing UV set would sample garbage on the GPU,
    /// so this must run before the records are uploaded.
    pub fn validate(&self, flags: &VertexFlags) -> Result<()> {
        let uv_sets = flags.uv_set_count();
        for (name, index) in self.slots() {
            if index >= uv_sets {
                return Err(anyhow::anyhow!(
                    "texture slot {} references UV set {} but the {} vertex layout carries {} set(s)",
                    name,
                    index,
                    flags.variant_name(),
                    uv_sets
                ));
            }
        }
        Ok(())
    }
}
