/// Resolved attribute locations, kept beside the immutable descriptor

use super::attribute::VertexElementUsage;
use super::backend::ShaderBackend;
use super::descriptor::ShaderDescriptor;

/// Location not resolved, or attribute absent from the program
pub const UNRESOLVED_LOCATION: i32 = -1;

/// Attribute locations keyed by attribute index
///
/// Starts unresolved; filled by [`resolve`](Self::resolve) once a backend
/// has linked the shader into a program.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeBindings {
    locations: Vec<i32>,
    resolved: bool,
}

impl AttributeBindings {
    /// Unresolved bindings sized for `descriptor`
    pub fn new(descriptor: &ShaderDescriptor) -> Self {
        Self {
            locations: vec![UNRESOLVED_LOCATION; descriptor.attributes().len()],
            resolved: false,
        }
    }

    /// Look up every attribute name in `program`
    pub fn resolve<B: ShaderBackend>(
        &mut self,
        descriptor: &ShaderDescriptor,
        backend: &B,
        program: B::Program,
    ) {
        self.locations = descriptor
            .attributes()
            .iter()
            .map(|attribute| backend.lookup_attribute_location(program, &attribute.name))
            .collect();
        self.resolved = true;
    }

    /// A program has been looked up, even if it exposes none of the attributes
    pub fn is_resolved(&self) -> bool {
        self.resolved
    }

    /// Location of attribute `index`, -1 if out of range or unresolved
    pub fn location(&self, index: usize) -> i32 {
        self.locations.get(index).copied().unwrap_or(UNRESOLVED_LOCATION)
    }

    /// Location of the first attribute matching `(usage, usage_index)`, or -1
    pub fn attrib_location(
        &self,
        descriptor: &ShaderDescriptor,
        usage: VertexElementUsage,
        usage_index: u8,
    ) -> i32 {
        descriptor
            .attribute_index(usage, usage_index)
            .map_or(UNRESOLVED_LOCATION, |index| self.location(index))
    }

    pub fn clear(&mut self) {
        self.locations.fill(UNRESOLVED_LOCATION);
        self.resolved = false;
    }
}
