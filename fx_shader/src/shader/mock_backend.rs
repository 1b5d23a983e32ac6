/// Mock ShaderBackend for unit tests (no GPU required)
///
/// Records every call so tests can assert on what the shader wrapper asked
/// the backend to do.

use rustc_hash::FxHashMap;
use slotmap::{new_key_type, SlotMap};

use crate::error::{Error, Result};
use crate::shader::{ShaderBackend, ShaderPayload, ShaderStage};

new_key_type! {
    pub struct MockShaderKey;
    pub struct MockProgramKey;
}

// ============================================================================
// Mock objects
// ============================================================================

#[derive(Debug)]
pub struct MockCompiledShader {
    pub stage: ShaderStage,
    pub payload_len: usize,
}

#[derive(Debug, Default)]
pub struct MockProgram {
    pub attributes: FxHashMap<String, i32>,
    pub uniforms: FxHashMap<String, i32>,
}

// ============================================================================
// Mock backend
// ============================================================================

#[derive(Default)]
pub struct MockShaderBackend {
    pub shaders: SlotMap<MockShaderKey, MockCompiledShader>,
    pub programs: SlotMap<MockProgramKey, MockProgram>,
    /// When set, the next compile fails with this log
    pub fail_next_compile: Option<String>,
    pub compile_count: usize,
    pub deleted: Vec<MockShaderKey>,
    pub bound_units: Vec<(MockProgramKey, i32, u8)>,
}

impl MockShaderBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a linked program exposing the given attributes and uniforms
    pub fn create_program(&mut self, attributes: &[(&str, i32)], uniforms: &[(&str, i32)]) -> MockProgramKey {
        let program = MockProgram {
            attributes: attributes.iter().map(|(n, l)| (n.to_string(), *l)).collect(),
            uniforms: uniforms.iter().map(|(n, l)| (n.to_string(), *l)).collect(),
        };
        self.programs.insert(program)
    }

    pub fn live_shader_count(&self) -> usize {
        self.shaders.len()
    }
}

impl ShaderBackend for MockShaderBackend {
    type Shader = MockShaderKey;
    type Program = MockProgramKey;

    fn compile_shader(&mut self, stage: ShaderStage, payload: &ShaderPayload) -> Result<MockShaderKey> {
        self.compile_count += 1;
        if let Some(log) = self.fail_next_compile.take() {
            return Err(Error::CompileError(log));
        }
        Ok(self.shaders.insert(MockCompiledShader {
            stage,
            payload_len: payload.len(),
        }))
    }

    fn delete_shader(&mut self, shader: MockShaderKey) -> Result<()> {
        if self.shaders.remove(shader).is_none() {
            crate::fx_bail!("fx::mock", "delete_shader: unknown shader {:?}", shader);
        }
        self.deleted.push(shader);
        Ok(())
    }

    fn lookup_attribute_location(&self, program: MockProgramKey, name: &str) -> i32 {
        self.programs
            .get(program)
            .and_then(|p| p.attributes.get(name).copied())
            .unwrap_or(-1)
    }

    fn lookup_uniform_location(&self, program: MockProgramKey, name: &str) -> i32 {
        self.programs
            .get(program)
            .and_then(|p| p.uniforms.get(name).copied())
            .unwrap_or(-1)
    }

    fn bind_sampler_unit(&mut self, program: MockProgramKey, location: i32, texture_slot: u8) {
        self.bound_units.push((program, location, texture_slot));
    }
}

#[cfg(test)]
#[path = "mock_backend_tests.rs"]
mod tests;
