/// Vertex attribute descriptor records

use crate::error::{Error, Result};

/// Semantic role of a vertex input channel
///
/// Discriminants are the persisted byte values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VertexElementUsage {
    Position = 0,
    Color = 1,
    TextureCoordinate = 2,
    Normal = 3,
    Binormal = 4,
    Tangent = 5,
    BlendIndices = 6,
    BlendWeight = 7,
    Depth = 8,
    Fog = 9,
    PointSize = 10,
    Sample = 11,
    TessellateFactor = 12,
}

const ALL_USAGES: [VertexElementUsage; 13] = [
    VertexElementUsage::Position,
    VertexElementUsage::Color,
    VertexElementUsage::TextureCoordinate,
    VertexElementUsage::Normal,
    VertexElementUsage::Binormal,
    VertexElementUsage::Tangent,
    VertexElementUsage::BlendIndices,
    VertexElementUsage::BlendWeight,
    VertexElementUsage::Depth,
    VertexElementUsage::Fog,
    VertexElementUsage::PointSize,
    VertexElementUsage::Sample,
    VertexElementUsage::TessellateFactor,
];

impl VertexElementUsage {
    pub fn from_u8(value: u8) -> Result<Self> {
        ALL_USAGES
            .get(value as usize)
            .copied()
            .ok_or_else(|| Error::unknown_enum("vertex element usage", value))
    }

    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Name used by meta declarations
    pub fn name(self) -> &'static str {
        match self {
            VertexElementUsage::Position => "Position",
            VertexElementUsage::Color => "Color",
            VertexElementUsage::TextureCoordinate => "TextureCoordinate",
            VertexElementUsage::Normal => "Normal",
            VertexElementUsage::Binormal => "Binormal",
            VertexElementUsage::Tangent => "Tangent",
            VertexElementUsage::BlendIndices => "BlendIndices",
            VertexElementUsage::BlendWeight => "BlendWeight",
            VertexElementUsage::Depth => "Depth",
            VertexElementUsage::Fog => "Fog",
            VertexElementUsage::PointSize => "PointSize",
            VertexElementUsage::Sample => "Sample",
            VertexElementUsage::TessellateFactor => "TessellateFactor",
        }
    }

    /// Parse a meta-declaration usage name (exact match, no fallback)
    pub fn from_name(name: &str) -> Result<Self> {
        ALL_USAGES
            .iter()
            .copied()
            .find(|usage| usage.name() == name)
            .ok_or_else(|| Error::unknown_enum("vertex element usage", name))
    }
}

/// A per-vertex input consumed by a vertex shader
///
/// The binding location is resolved after the backend links a program and is
/// kept in [`AttributeBindings`](super::AttributeBindings), not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeDescriptor {
    /// Name used for name-based attribute binding
    pub name: String,
    pub usage: VertexElementUsage,
    /// Disambiguates several attributes with the same usage
    pub usage_index: u8,
    /// Element format code
    pub format: i16,
}

impl AttributeDescriptor {
    pub fn new(name: impl Into<String>, usage: VertexElementUsage, usage_index: u8, format: i16) -> Self {
        Self {
            name: name.into(),
            usage,
            usage_index,
            format,
        }
    }

    /// Whether this attribute answers to `(usage, index)`
    pub fn matches(&self, usage: VertexElementUsage, usage_index: u8) -> bool {
        self.usage == usage && self.usage_index == usage_index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_bytes() {
        assert_eq!(VertexElementUsage::from_u8(0).unwrap(), VertexElementUsage::Position);
        assert_eq!(VertexElementUsage::from_u8(12).unwrap(), VertexElementUsage::TessellateFactor);
        assert_eq!(VertexElementUsage::Normal.as_u8(), 3);
        assert!(matches!(
            VertexElementUsage::from_u8(13),
            Err(Error::UnknownEnumValue { field: "vertex element usage", .. })
        ));
    }

    #[test]
    fn test_usage_names_round_trip() {
        for usage in ALL_USAGES {
            assert_eq!(VertexElementUsage::from_name(usage.name()).unwrap(), usage);
            assert_eq!(VertexElementUsage::from_u8(usage.as_u8()).unwrap(), usage);
        }
    }

    #[test]
    fn test_usage_unknown_name_is_error() {
        let err = VertexElementUsage::from_name("Bogus").unwrap_err();
        match err {
            Error::UnknownEnumValue { value, .. } => assert_eq!(value, "Bogus"),
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_attribute_matches() {
        let attr = AttributeDescriptor::new("a_texcoord1", VertexElementUsage::TextureCoordinate, 1, 2);
        assert!(attr.matches(VertexElementUsage::TextureCoordinate, 1));
        assert!(!attr.matches(VertexElementUsage::TextureCoordinate, 0));
        assert!(!attr.matches(VertexElementUsage::Position, 1));
    }
}
