/// Shader descriptor - structural metadata of one compiled shader
///
/// A descriptor is built once, either by the binary decoder or by the
/// text-driven constructor, and is never mutated afterwards. Backend binding
/// state resolved later (attribute locations) lives in a separate side table.

use super::attribute::{AttributeDescriptor, VertexElementUsage};
use super::sampler::SamplerDescriptor;
use crate::hash::content_hash;

/// Pipeline stage of a shader
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    Vertex,
    Pixel,
}

impl ShaderStage {
    /// Name used by meta declarations
    pub fn name(self) -> &'static str {
        match self {
            ShaderStage::Vertex => "vertex",
            ShaderStage::Pixel => "pixel",
        }
    }
}

/// Graphics backend family an archive entry was built for
///
/// Selects which optional blocks are present in the binary layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatVariant {
    /// Payload is shader source text; samplers carry uniform names and an
    /// attribute block follows the constant buffers.
    OpenGl,
    /// Payload is compiled bytecode; no sampler names, no attribute block.
    Direct3D,
}

impl FormatVariant {
    pub fn has_sampler_names(self) -> bool {
        matches!(self, FormatVariant::OpenGl)
    }

    pub fn has_attributes(self) -> bool {
        matches!(self, FormatVariant::OpenGl)
    }

    pub fn payload_is_source(self) -> bool {
        matches!(self, FormatVariant::OpenGl)
    }
}

/// The authoritative code of a shader: bytecode or source, never both
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShaderPayload {
    Bytecode(Vec<u8>),
    Source(String),
}

impl ShaderPayload {
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            ShaderPayload::Bytecode(bytes) => bytes,
            ShaderPayload::Source(source) => source.as_bytes(),
        }
    }

    pub fn as_source(&self) -> Option<&str> {
        match self {
            ShaderPayload::Source(source) => Some(source),
            ShaderPayload::Bytecode(_) => None,
        }
    }

    pub fn as_bytecode(&self) -> Option<&[u8]> {
        match self {
            ShaderPayload::Bytecode(bytes) => Some(bytes),
            ShaderPayload::Source(_) => None,
        }
    }

    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Structural metadata of a shader plus its payload
#[derive(Debug, Clone, PartialEq)]
pub struct ShaderDescriptor {
    stage: ShaderStage,
    constant_buffer_slots: Vec<u8>,
    samplers: Vec<SamplerDescriptor>,
    attributes: Vec<AttributeDescriptor>,
    payload: ShaderPayload,
    content_hash: Option<u64>,
}

impl ShaderDescriptor {
    /// Create a descriptor without a content hash
    ///
    /// Used by the text-driven constructor and by archive builders; call
    /// [`with_content_hash`](Self::with_content_hash) to fingerprint it.
    pub fn new(
        stage: ShaderStage,
        constant_buffer_slots: Vec<u8>,
        samplers: Vec<SamplerDescriptor>,
        attributes: Vec<AttributeDescriptor>,
        payload: ShaderPayload,
    ) -> Self {
        Self {
            stage,
            constant_buffer_slots,
            samplers,
            attributes,
            payload,
            content_hash: None,
        }
    }

    /// Compute the content hash over the payload bytes
    pub fn with_content_hash(mut self) -> Self {
        self.content_hash = Some(content_hash(self.payload.as_bytes()));
        self
    }

    pub(crate) fn with_precomputed_hash(mut self, hash: u64) -> Self {
        self.content_hash = Some(hash);
        self
    }

    // ===== ACCESSORS =====

    pub fn stage(&self) -> ShaderStage {
        self.stage
    }

    /// Constant-buffer binding indices in declaration order
    pub fn constant_buffer_slots(&self) -> &[u8] {
        &self.constant_buffer_slots
    }

    /// Samplers in binding declaration order
    pub fn samplers(&self) -> &[SamplerDescriptor] {
        &self.samplers
    }

    /// Vertex attributes (empty for bytecode backends)
    pub fn attributes(&self) -> &[AttributeDescriptor] {
        &self.attributes
    }

    pub fn payload(&self) -> &ShaderPayload {
        &self.payload
    }

    /// Payload fingerprint; `None` when built from text
    pub fn content_hash(&self) -> Option<u64> {
        self.content_hash
    }

    // ===== LOOKUP =====

    /// Index of the first attribute matching `(usage, usage_index)`
    pub fn attribute_index(&self, usage: VertexElementUsage, usage_index: u8) -> Option<usize> {
        self.attributes.iter().position(|a| a.matches(usage, usage_index))
    }

    /// Sampler bound to the given texture slot, if any
    pub fn sampler_for_texture_slot(&self, texture_slot: u8) -> Option<&SamplerDescriptor> {
        self.samplers.iter().find(|s| s.texture_slot == texture_slot)
    }

    /// Whether both descriptors wrap the same compiled unit
    ///
    /// Compares content hashes only, so metadata differences are ignored.
    /// Descriptors without a hash never compare equal.
    pub fn same_payload(&self, other: &ShaderDescriptor) -> bool {
        match (self.content_hash, other.content_hash) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}

#[cfg(test)]
#[path = "descriptor_tests.rs"]
mod tests;
