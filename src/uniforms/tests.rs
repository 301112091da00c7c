use super::*;
use std::mem::{offset_of, size_of};

#[test]
fn material_layout() {
    assert_eq!(size_of::<BlinnPhongMaterial>(), 32);
    assert_eq!(offset_of!(BlinnPhongMaterial, diffuse_color), 0);
    assert_eq!(offset_of!(BlinnPhongMaterial, specular_color), 16);
    assert_eq!(offset_of!(BlinnPhongMaterial, shininess), 28);
}

#[test]
fn scene_uniform_layouts() {
    assert_eq!(size_of::<BlinnPhongSceneUniforms>(), 48);
    assert_eq!(offset_of!(BlinnPhongSceneUniforms, light_position), 0);
    assert_eq!(offset_of!(BlinnPhongSceneUniforms, view_position), 16);
    assert_eq!(offset_of!(BlinnPhongSceneUniforms, ambient_light), 32);

    assert_eq!(size_of::<PbrSceneUniforms>(), 48);
    assert_eq!(offset_of!(PbrSceneUniforms, ambient_light_color), 32);
}

#[test]
fn vertex_flag_layouts() {
    assert_eq!(size_of::<PbrVertexFlags>(), 16);
    assert_eq!(size_of::<TangentVertexFlags>(), 16);
    assert_eq!(size_of::<BasicVertexFlags>(), 16);
    assert_eq!(offset_of!(PbrVertexFlags, has_modulation_color), 12);
}

#[test]
fn texcoord_indices_layout() {
    assert_eq!(size_of::<TexcoordIndices>(), 32);
    assert_eq!(offset_of!(TexcoordIndices, occlusion), 16);
}

#[test]
fn material_bytes_round_trip() {
    let material = BlinnPhongMaterial::new([0.8, 0.2, 0.2], [1.0, 1.0, 1.0], 32.0);
    let bytes = bytemuck::bytes_of(&material);
    assert_eq!(bytes.len(), 32);
    let back: &BlinnPhongMaterial = bytemuck::from_bytes(bytes);
    assert_eq!(*back, material);
}

#[test_log::test]
fn select_prefers_widest_matching_layout() {
    let flags = VertexFlags::select(true, 2, true);
    assert_eq!(flags.variant_name(), "pbr");
    assert!(flags.has_tangent());
    assert_eq!(flags.uv_set_count(), 2);
    assert!(flags.has_modulation_color());

    let flags = VertexFlags::select(true, 1, false);
    assert_eq!(flags.variant_name(), "tangent");
    assert_eq!(flags.uv_set_count(), 1);

    let flags = VertexFlags::select(false, 1, false);
    assert_eq!(flags.variant_name(), "basic");
    assert!(!flags.has_tangent());

    let flags = VertexFlags::select(false, 0, true);
    assert_eq!(flags.uv_set_count(), 0);
    assert!(flags.has_modulation_color());
}

#[test]
fn texcoord_validation_accepts_in_range_indices() {
    let flags = VertexFlags::select(true, 2, false);
    let indices = TexcoordIndices::new(0, 0, 1, 1, 0);
    assert!(indices.validate(&flags).is_ok());
}

#[test]
fn texcoord_validation_rejects_missing_uv_set() {
    let flags = VertexFlags::select(true, 1, false);
    let indices = TexcoordIndices::new(0, 1, 0, 0, 0);
    let err = indices.validate(&flags).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("normal"), "unexpected error: {}", message);
    assert!(message.contains("UV set 1"), "unexpected error: {}", message);
}

#[test]
fn texcoord_validation_rejects_all_slots_without_uvs() {
    let flags = VertexFlags::select(false, 0, false);
    let indices = TexcoordIndices::new(0, 0, 0, 0, 0);
    assert!(indices.validate(&flags).is_err());
}
