/// Sampler descriptor records
///
/// Plain data describing how a shader reads texture data: which texture and
/// sampler slots it binds to, the texture dimensionality, and optionally an
/// embedded sampler state baked into the effect archive.

use crate::error::{Error, Result};

// ===== SAMPLER KIND =====

/// Texture dimensionality a sampler reads from
///
/// Discriminants are the persisted byte values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SamplerKind {
    Texture2D = 0,
    TextureCube = 1,
    /// Volume texture
    Texture3D = 2,
    Texture1D = 3,
}

impl SamplerKind {
    /// Decode a persisted byte
    pub fn from_u8(value: u8) -> Result<Self> {
        match value {
            0 => Ok(SamplerKind::Texture2D),
            1 => Ok(SamplerKind::TextureCube),
            2 => Ok(SamplerKind::Texture3D),
            3 => Ok(SamplerKind::Texture1D),
            _ => Err(Error::unknown_enum("sampler kind", value)),
        }
    }

    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Literal used by meta declarations
    pub fn literal(self) -> &'static str {
        match self {
            SamplerKind::Texture1D => "Sampler1D",
            SamplerKind::Texture2D => "Sampler2D",
            SamplerKind::TextureCube => "SamplerCube",
            SamplerKind::Texture3D => "SamplerVolume",
        }
    }

    /// Parse a meta-declaration literal
    ///
    /// Anything other than the 1D, 2D and cube literals maps to `Texture3D`.
    pub fn from_literal(literal: &str) -> Self {
        match literal {
            "Sampler1D" => SamplerKind::Texture1D,
            "Sampler2D" => SamplerKind::Texture2D,
            "SamplerCube" => SamplerKind::TextureCube,
            _ => SamplerKind::Texture3D,
        }
    }
}

// ===== SAMPLER STATE =====

/// Texture coordinate addressing outside [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextureAddressMode {
    #[default]
    Wrap = 0,
    Clamp = 1,
    Mirror = 2,
}

impl TextureAddressMode {
    pub fn from_u8(value: u8) -> Result<Self> {
        match value {
            0 => Ok(TextureAddressMode::Wrap),
            1 => Ok(TextureAddressMode::Clamp),
            2 => Ok(TextureAddressMode::Mirror),
            _ => Err(Error::unknown_enum("texture address mode", value)),
        }
    }

    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

/// Minification/magnification/mip filter combination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextureFilter {
    #[default]
    Linear = 0,
    Point = 1,
    Anisotropic = 2,
    LinearMipPoint = 3,
    PointMipLinear = 4,
    MinLinearMagPointMipLinear = 5,
    MinLinearMagPointMipPoint = 6,
    MinPointMagLinearMipLinear = 7,
    MinPointMagLinearMipPoint = 8,
}

impl TextureFilter {
    pub fn from_u8(value: u8) -> Result<Self> {
        Ok(match value {
            0 => TextureFilter::Linear,
            1 => TextureFilter::Point,
            2 => TextureFilter::Anisotropic,
            3 => TextureFilter::LinearMipPoint,
            4 => TextureFilter::PointMipLinear,
            5 => TextureFilter::MinLinearMagPointMipLinear,
            6 => TextureFilter::MinLinearMagPointMipPoint,
            7 => TextureFilter::MinPointMagLinearMipLinear,
            8 => TextureFilter::MinPointMagLinearMipPoint,
            _ => return Err(Error::unknown_enum("texture filter", value)),
        })
    }

    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

/// Sampler configuration embedded in an effect archive
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplerState {
    pub address_u: TextureAddressMode,
    pub address_v: TextureAddressMode,
    pub address_w: TextureAddressMode,
    pub filter: TextureFilter,
    pub max_anisotropy: i32,
    pub max_mip_level: i32,
    pub mip_lod_bias: f32,
}

impl Default for SamplerState {
    fn default() -> Self {
        Self {
            address_u: TextureAddressMode::Wrap,
            address_v: TextureAddressMode::Wrap,
            address_w: TextureAddressMode::Wrap,
            filter: TextureFilter::Linear,
            max_anisotropy: 4,
            max_mip_level: 0,
            mip_lod_bias: 0.0,
        }
    }
}

// ===== SAMPLER DESCRIPTOR =====

/// One sampler binding declared by a shader
#[derive(Debug, Clone, PartialEq)]
pub struct SamplerDescriptor {
    pub kind: SamplerKind,
    pub texture_slot: u8,
    pub sampler_slot: u8,
    /// Uniform name, used by backends that bind samplers by name.
    /// Empty for backends that bind by slot.
    pub name: String,
    /// Present only when the archive carried an embedded state
    pub state: Option<SamplerState>,
    /// Index into the owning effect's parameter table
    pub parameter_index: u8,
}

impl SamplerDescriptor {
    /// Create a sampler without embedded state
    pub fn new(kind: SamplerKind, texture_slot: u8, sampler_slot: u8, name: impl Into<String>) -> Self {
        Self {
            kind,
            texture_slot,
            sampler_slot,
            name: name.into(),
            state: None,
            parameter_index: 0,
        }
    }

    pub fn with_state(mut self, state: SamplerState) -> Self {
        self.state = Some(state);
        self
    }

    pub fn with_parameter(mut self, parameter_index: u8) -> Self {
        self.parameter_index = parameter_index;
        self
    }
}

#[cfg(test)]
#[path = "sampler_tests.rs"]
mod tests;
