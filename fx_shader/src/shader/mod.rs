//! Shader module - descriptors, archive codec and backend binding.
//!
//! A shader entry is decoded once into an immutable [`ShaderDescriptor`].
//! Everything a graphics backend produces later (compiled handles,
//! attribute locations) lives beside it in [`Shader`].

pub mod sampler;
pub mod attribute;
pub mod descriptor;
pub mod binary;
pub mod meta;
pub mod decoder;
pub mod encoder;
pub mod text_parser;
pub mod backend;
pub mod bindings;
pub mod shader;

#[cfg(test)]
pub(crate) mod mock_backend;

pub use sampler::{
    SamplerDescriptor, SamplerKind, SamplerState, TextureAddressMode, TextureFilter,
};
pub use attribute::{AttributeDescriptor, VertexElementUsage};
pub use descriptor::{FormatVariant, ShaderDescriptor, ShaderPayload, ShaderStage};
pub use binary::{BinaryReader, BinaryWriter};
pub use decoder::{decode, decode_with, DecodeOptions, DecodedShader};
pub use encoder::encode;
pub use text_parser::{parse_shader_block, parse_shader_body};
pub use backend::ShaderBackend;
pub use bindings::{AttributeBindings, UNRESOLVED_LOCATION};
pub use shader::Shader;
