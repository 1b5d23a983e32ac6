/// Binary encoder, the archive-builder side of the decoder's layout

use super::binary::BinaryWriter;
use super::descriptor::{FormatVariant, ShaderDescriptor, ShaderStage};
use super::sampler::SamplerDescriptor;
use crate::error::{Error, Result};

fn count_byte(what: &str, len: usize) -> Result<u8> {
    u8::try_from(len).map_err(|_| {
        Error::InvalidResource(format!("{} {} exceeds the 255 entry limit", len, what))
    })
}

/// Encode a descriptor for the given backend family
///
/// Sampler names and attributes are dropped for variants that do not carry
/// them. Samplers and attributes keep their order.
pub fn encode(descriptor: &ShaderDescriptor, variant: FormatVariant) -> Result<Vec<u8>> {
    let sampler_count = count_byte("samplers", descriptor.samplers().len())?;
    let cbuffer_count = count_byte("constant buffers", descriptor.constant_buffer_slots().len())?;
    let attribute_count = if variant.has_attributes() {
        count_byte("attributes", descriptor.attributes().len())?
    } else {
        0
    };

    let mut writer = BinaryWriter::new();

    writer.write_bool(descriptor.stage() == ShaderStage::Vertex);
    writer.write_length_prefixed(descriptor.payload().as_bytes())?;

    writer.write_u8(sampler_count);
    for sampler in descriptor.samplers() {
        write_sampler(&mut writer, sampler, variant);
    }

    writer.write_u8(cbuffer_count);
    writer.write_bytes(descriptor.constant_buffer_slots());

    if variant.has_attributes() {
        writer.write_u8(attribute_count);
        for attribute in descriptor.attributes() {
            writer.write_string(&attribute.name);
            writer.write_u8(attribute.usage.as_u8());
            writer.write_u8(attribute.usage_index);
            writer.write_i16(attribute.format);
        }
    }

    Ok(writer.into_bytes())
}

fn write_sampler(writer: &mut BinaryWriter, sampler: &SamplerDescriptor, variant: FormatVariant) {
    writer.write_u8(sampler.kind.as_u8());
    writer.write_u8(sampler.texture_slot);
    writer.write_u8(sampler.sampler_slot);

    writer.write_bool(sampler.state.is_some());
    if let Some(state) = &sampler.state {
        writer.write_u8(state.address_u.as_u8());
        writer.write_u8(state.address_v.as_u8());
        writer.write_u8(state.address_w.as_u8());
        writer.write_u8(state.filter.as_u8());
        writer.write_i32(state.max_anisotropy);
        writer.write_i32(state.max_mip_level);
        writer.write_f32(state.mip_lod_bias);
    }

    if variant.has_sampler_names() {
        writer.write_string(&sampler.name);
    }

    writer.write_u8(sampler.parameter_index);
}
