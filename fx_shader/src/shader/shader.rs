/// Shader resource wrapper
///
/// Owns a decoded descriptor and the backend objects created from it: the
/// lazily compiled shader handle and the resolved attribute locations.
/// The backend is passed to each call; the wrapper is used from the single
/// thread that owns graphics resource creation.
///
/// Backend handles are not released on drop. Call [`Shader::release`] on
/// device reset and before discarding the wrapper.

use super::attribute::VertexElementUsage;
use super::backend::ShaderBackend;
use super::bindings::AttributeBindings;
use super::decoder;
use super::descriptor::{FormatVariant, ShaderDescriptor, ShaderStage};
use super::sampler::SamplerDescriptor;
use crate::error::Result;

pub struct Shader<B: ShaderBackend> {
    descriptor: ShaderDescriptor,
    bindings: AttributeBindings,
    handle: Option<B::Shader>,
}

impl<B: ShaderBackend> Shader<B> {
    /// Wrap an already built descriptor
    pub fn from_descriptor(descriptor: ShaderDescriptor) -> Self {
        let bindings = AttributeBindings::new(&descriptor);
        Self {
            descriptor,
            bindings,
            handle: None,
        }
    }

    /// Decode an archive entry and wrap it
    pub fn load(bytes: &[u8], variant: FormatVariant) -> Result<Self> {
        Ok(Self::from_descriptor(decoder::decode(bytes, variant)?))
    }

    // ===== ACCESSORS =====

    pub fn descriptor(&self) -> &ShaderDescriptor {
        &self.descriptor
    }

    pub fn stage(&self) -> ShaderStage {
        self.descriptor.stage()
    }

    pub fn samplers(&self) -> &[SamplerDescriptor] {
        self.descriptor.samplers()
    }

    pub fn constant_buffer_slots(&self) -> &[u8] {
        self.descriptor.constant_buffer_slots()
    }

    /// Raw bytecode, for input-layout creation on bytecode backends
    pub fn bytecode(&self) -> Option<&[u8]> {
        self.descriptor.payload().as_bytecode()
    }

    /// Key for caching linked programs by shader content
    pub fn hash_key(&self) -> Option<u64> {
        self.descriptor.content_hash()
    }

    pub fn bindings(&self) -> &AttributeBindings {
        &self.bindings
    }

    pub fn is_compiled(&self) -> bool {
        self.handle.is_some()
    }

    // ===== BACKEND OBJECTS =====

    /// Compiled shader handle, compiling on first use
    ///
    /// A failed compile leaves no handle behind and returns the backend's
    /// `CompileError` unchanged; the next call retries.
    pub fn handle(&mut self, backend: &mut B) -> Result<B::Shader> {
        if let Some(handle) = self.handle {
            return Ok(handle);
        }

        let stage = self.descriptor.stage();
        match backend.compile_shader(stage, self.descriptor.payload()) {
            Ok(handle) => {
                crate::fx_trace!("fx::Shader", "Compiled {:?} shader {:?}", stage, handle);
                self.handle = Some(handle);
                Ok(handle)
            }
            Err(error) => {
                crate::fx_error!("fx::Shader", "{:?} shader failed to compile: {}", stage, error);
                Err(error)
            }
        }
    }

    /// Resolve attribute locations against a linked program
    pub fn resolve_attribute_locations(&mut self, backend: &B, program: B::Program) {
        self.bindings.resolve(&self.descriptor, backend, program);
    }

    /// Location of the first attribute matching `(usage, usage_index)`, or -1
    pub fn attrib_location(&self, usage: VertexElementUsage, usage_index: u8) -> i32 {
        self.bindings.attrib_location(&self.descriptor, usage, usage_index)
    }

    /// Bind each named sampler uniform to its texture slot
    ///
    /// Samplers whose uniform the program does not expose are skipped.
    pub fn apply_sampler_texture_units(&self, backend: &mut B, program: B::Program) {
        for sampler in self.descriptor.samplers() {
            let location = backend.lookup_uniform_location(program, &sampler.name);
            if location != -1 {
                backend.bind_sampler_unit(program, location, sampler.texture_slot);
            }
        }
    }

    /// Release backend objects (device reset or disposal)
    ///
    /// The descriptor stays valid; the shader recompiles on next use. The
    /// handle and bindings are dropped even when the backend rejects the
    /// delete, and that error is returned.
    pub fn release(&mut self, backend: &mut B) -> Result<()> {
        self.bindings.clear();
        if let Some(handle) = self.handle.take() {
            crate::fx_trace!("fx::Shader", "Releasing shader {:?}", handle);
            backend.delete_shader(handle)?;
        }
        Ok(())
    }

    /// Source text for source-based backends
    pub fn source(&self) -> Option<&str> {
        self.descriptor.payload().as_source()
    }
}

#[cfg(test)]
#[path = "shader_tests.rs"]
mod tests;
