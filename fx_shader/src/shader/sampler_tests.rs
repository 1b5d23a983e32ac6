use super::*;

// ============================================================================
// SamplerKind
// ============================================================================

#[test]
fn test_sampler_kind_persisted_values() {
    assert_eq!(SamplerKind::from_u8(0).unwrap(), SamplerKind::Texture2D);
    assert_eq!(SamplerKind::from_u8(1).unwrap(), SamplerKind::TextureCube);
    assert_eq!(SamplerKind::from_u8(2).unwrap(), SamplerKind::Texture3D);
    assert_eq!(SamplerKind::from_u8(3).unwrap(), SamplerKind::Texture1D);
    assert_eq!(SamplerKind::Texture1D.as_u8(), 3);
}

#[test]
fn test_sampler_kind_unknown_byte_is_error() {
    let err = SamplerKind::from_u8(4).unwrap_err();
    assert!(matches!(err, Error::UnknownEnumValue { field: "sampler kind", .. }));
}

#[test]
fn test_sampler_kind_literals_round_trip() {
    for kind in [
        SamplerKind::Texture1D,
        SamplerKind::Texture2D,
        SamplerKind::TextureCube,
        SamplerKind::Texture3D,
    ] {
        assert_eq!(SamplerKind::from_literal(kind.literal()), kind);
    }
}

#[test]
fn test_sampler_kind_unknown_literal_falls_back_to_volume() {
    assert_eq!(SamplerKind::from_literal("Bogus"), SamplerKind::Texture3D);
    assert_eq!(SamplerKind::from_literal(""), SamplerKind::Texture3D);
    // Literal match is case sensitive
    assert_eq!(SamplerKind::from_literal("sampler2d"), SamplerKind::Texture3D);
}

// ============================================================================
// Sampler state
// ============================================================================

#[test]
fn test_address_mode_and_filter_bytes() {
    assert_eq!(TextureAddressMode::from_u8(2).unwrap(), TextureAddressMode::Mirror);
    assert!(TextureAddressMode::from_u8(3).is_err());
    assert_eq!(TextureFilter::from_u8(8).unwrap(), TextureFilter::MinPointMagLinearMipPoint);
    assert!(matches!(
        TextureFilter::from_u8(9),
        Err(Error::UnknownEnumValue { field: "texture filter", .. })
    ));
}

#[test]
fn test_sampler_state_defaults() {
    let state = SamplerState::default();
    assert_eq!(state.address_u, TextureAddressMode::Wrap);
    assert_eq!(state.address_v, TextureAddressMode::Wrap);
    assert_eq!(state.address_w, TextureAddressMode::Wrap);
    assert_eq!(state.filter, TextureFilter::Linear);
    assert_eq!(state.max_anisotropy, 4);
    assert_eq!(state.max_mip_level, 0);
    assert_eq!(state.mip_lod_bias, 0.0);
}

#[test]
fn test_sampler_descriptor_builder() {
    let sampler = SamplerDescriptor::new(SamplerKind::TextureCube, 2, 3, "EnvMap")
        .with_parameter(7)
        .with_state(SamplerState { filter: TextureFilter::Point, ..SamplerState::default() });

    assert_eq!(sampler.kind, SamplerKind::TextureCube);
    assert_eq!(sampler.texture_slot, 2);
    assert_eq!(sampler.sampler_slot, 3);
    assert_eq!(sampler.name, "EnvMap");
    assert_eq!(sampler.parameter_index, 7);
    assert_eq!(sampler.state.unwrap().filter, TextureFilter::Point);
}
