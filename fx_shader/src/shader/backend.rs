/// ShaderBackend trait - the graphics API seam
///
/// Implemented by backend-specific code (OpenGL, Direct3D, test mocks).
/// Nothing in this crate issues graphics API calls except through this trait.

use super::descriptor::{ShaderPayload, ShaderStage};
use crate::error::Result;

pub trait ShaderBackend {
    /// Backend shader object handle
    type Shader: Copy + PartialEq + std::fmt::Debug;
    /// Linked program handle
    type Program: Copy + PartialEq + std::fmt::Debug;

    /// Compile a payload for the given stage
    ///
    /// On failure the backend releases anything it allocated and returns
    /// `Error::CompileError` with the compiler log.
    fn compile_shader(&mut self, stage: ShaderStage, payload: &ShaderPayload) -> Result<Self::Shader>;

    /// Release a compiled shader
    ///
    /// Fails with `Error::BackendError` when the handle is unknown to the
    /// backend (already deleted, or created before a device reset).
    fn delete_shader(&mut self, shader: Self::Shader) -> Result<()>;

    /// Attribute binding location of `name` in `program`, -1 if absent
    fn lookup_attribute_location(&self, program: Self::Program, name: &str) -> i32;

    /// Uniform location of `name` in `program`, -1 if absent
    fn lookup_uniform_location(&self, program: Self::Program, name: &str) -> i32;

    /// Point a sampler uniform at a texture unit
    fn bind_sampler_unit(&mut self, program: Self::Program, location: i32, texture_slot: u8);
}
