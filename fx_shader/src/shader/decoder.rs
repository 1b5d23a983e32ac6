/// Binary decoder for shader entries of an effect archive
///
/// Layout (little-endian, no padding):
///
/// 1. `bool` stage (true = vertex)
/// 2. `i32` payload length, then the payload bytes
/// 3. `u8` sampler count, then per sampler: kind, texture slot, sampler slot
///    (`u8` each), `bool` state present (+ address U/V/W, filter as `u8`,
///    max anisotropy `i32`, max mip level `i32`, mip LOD bias `f32`),
///    name string (OpenGL only), parameter index `u8`
/// 4. `u8` constant-buffer count, then one `u8` slot each
/// 5. OpenGL only: `u8` attribute count, then per attribute: name string,
///    usage `u8`, usage index `u8`, format `i16`

use super::binary::BinaryReader;
use super::attribute::{AttributeDescriptor, VertexElementUsage};
use super::descriptor::{FormatVariant, ShaderDescriptor, ShaderPayload, ShaderStage};
use super::meta;
use super::sampler::{
    SamplerDescriptor, SamplerKind, SamplerState, TextureAddressMode, TextureFilter,
};
use crate::error::Result;
use crate::hash::content_hash;

/// Decoder configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    pub variant: FormatVariant,
    /// Also build the readable declaration dump
    pub readable_source: bool,
}

impl DecodeOptions {
    pub fn new(variant: FormatVariant) -> Self {
        Self { variant, readable_source: false }
    }

    pub fn with_readable_source(mut self) -> Self {
        self.readable_source = true;
        self
    }
}

/// Result of a successful decode
#[derive(Debug, Clone)]
pub struct DecodedShader {
    pub descriptor: ShaderDescriptor,
    /// Present when requested through [`DecodeOptions::readable_source`]
    pub readable_source: Option<String>,
    /// Number of bytes the entry occupied
    pub consumed: usize,
}

/// Decode one shader entry, discarding the readable dump
pub fn decode(bytes: &[u8], variant: FormatVariant) -> Result<ShaderDescriptor> {
    decode_with(bytes, DecodeOptions::new(variant)).map(|decoded| decoded.descriptor)
}

/// Decode one shader entry
///
/// Trailing bytes after the entry are left untouched and reported through
/// `consumed`. Nothing is returned on error.
pub fn decode_with(bytes: &[u8], options: DecodeOptions) -> Result<DecodedShader> {
    let mut reader = BinaryReader::new(bytes);
    let decoded = read_shader(&mut reader, options.variant).and_then(|descriptor| {
        let readable_source = if options.readable_source {
            Some(meta::write_readable(&descriptor, options.variant)?)
        } else {
            None
        };
        Ok((descriptor, readable_source))
    });

    match decoded {
        Ok((descriptor, readable_source)) => {
            crate::fx_debug!("fx::decoder",
                "Decoded {:?} shader ({:?}): {} bytes payload, {} samplers, {} cbuffers, {} attributes, hash {:016x}",
                descriptor.stage(), options.variant,
                descriptor.payload().len(),
                descriptor.samplers().len(),
                descriptor.constant_buffer_slots().len(),
                descriptor.attributes().len(),
                descriptor.content_hash().unwrap_or_default());

            Ok(DecodedShader {
                descriptor,
                readable_source,
                consumed: reader.position(),
            })
        }
        Err(error) => {
            crate::fx_error!("fx::decoder", "Failed to decode shader entry: {}", error);
            Err(error)
        }
    }
}

fn read_shader(reader: &mut BinaryReader<'_>, variant: FormatVariant) -> Result<ShaderDescriptor> {
    let stage = if reader.read_bool("stage")? {
        ShaderStage::Vertex
    } else {
        ShaderStage::Pixel
    };

    let payload_bytes = reader.read_length_prefixed("payload")?;
    let hash = content_hash(payload_bytes);
    let payload = if variant.payload_is_source() {
        ShaderPayload::Source(String::from_utf8_lossy(payload_bytes).into_owned())
    } else {
        ShaderPayload::Bytecode(payload_bytes.to_vec())
    };

    let sampler_count = reader.read_u8("sampler count")?;
    let mut samplers = Vec::with_capacity(sampler_count as usize);
    for _ in 0..sampler_count {
        samplers.push(read_sampler(reader, variant)?);
    }

    let cbuffer_count = reader.read_u8("constant buffer count")?;
    let constant_buffer_slots = reader
        .read_bytes(cbuffer_count as usize, "constant buffer slots")?
        .to_vec();

    let mut attributes = Vec::new();
    if variant.has_attributes() {
        let attribute_count = reader.read_u8("attribute count")?;
        attributes.reserve(attribute_count as usize);
        for _ in 0..attribute_count {
            attributes.push(read_attribute(reader)?);
        }
    }

    Ok(ShaderDescriptor::new(stage, constant_buffer_slots, samplers, attributes, payload)
        .with_precomputed_hash(hash))
}

fn read_sampler(reader: &mut BinaryReader<'_>, variant: FormatVariant) -> Result<SamplerDescriptor> {
    let kind = SamplerKind::from_u8(reader.read_u8("sampler kind")?)?;
    let texture_slot = reader.read_u8("texture slot")?;
    let sampler_slot = reader.read_u8("sampler slot")?;

    let state = if reader.read_bool("sampler state flag")? {
        Some(read_sampler_state(reader)?)
    } else {
        None
    };

    let name = if variant.has_sampler_names() {
        reader.read_string("sampler name")?
    } else {
        String::new()
    };

    let parameter_index = reader.read_u8("sampler parameter")?;

    Ok(SamplerDescriptor {
        kind,
        texture_slot,
        sampler_slot,
        name,
        state,
        parameter_index,
    })
}

fn read_sampler_state(reader: &mut BinaryReader<'_>) -> Result<SamplerState> {
    Ok(SamplerState {
        address_u: TextureAddressMode::from_u8(reader.read_u8("address u")?)?,
        address_v: TextureAddressMode::from_u8(reader.read_u8("address v")?)?,
        address_w: TextureAddressMode::from_u8(reader.read_u8("address w")?)?,
        filter: TextureFilter::from_u8(reader.read_u8("filter")?)?,
        max_anisotropy: reader.read_i32("max anisotropy")?,
        max_mip_level: reader.read_i32("max mip level")?,
        mip_lod_bias: reader.read_f32("mip lod bias")?,
    })
}

fn read_attribute(reader: &mut BinaryReader<'_>) -> Result<AttributeDescriptor> {
    let name = reader.read_string("attribute name")?;
    let usage = VertexElementUsage::from_u8(reader.read_u8("attribute usage")?)?;
    let usage_index = reader.read_u8("attribute usage index")?;
    let format = reader.read_i16("attribute format")?;
    Ok(AttributeDescriptor {
        name,
        usage,
        usage_index,
        format,
    })
}

#[cfg(test)]
#[path = "decoder_tests.rs"]
mod tests;
