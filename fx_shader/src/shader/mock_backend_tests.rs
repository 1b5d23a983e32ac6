/// Unit tests for MockShaderBackend

use super::*;

#[test]
fn test_compile_and_delete() {
    let mut backend = MockShaderBackend::new();
    let payload = ShaderPayload::Source("void main() {}".to_string());

    let shader = backend.compile_shader(ShaderStage::Vertex, &payload).unwrap();
    assert_eq!(backend.compile_count, 1);
    assert_eq!(backend.live_shader_count(), 1);
    assert_eq!(backend.shaders[shader].stage, ShaderStage::Vertex);
    assert_eq!(backend.shaders[shader].payload_len, 14);

    backend.delete_shader(shader).unwrap();
    assert_eq!(backend.live_shader_count(), 0);
    assert_eq!(backend.deleted, vec![shader]);
}

#[test]
fn test_delete_unknown_shader_is_backend_error() {
    let mut backend = MockShaderBackend::new();
    let payload = ShaderPayload::Bytecode(vec![1]);
    let shader = backend.compile_shader(ShaderStage::Pixel, &payload).unwrap();
    backend.delete_shader(shader).unwrap();

    match backend.delete_shader(shader) {
        Err(Error::BackendError(msg)) => assert!(msg.contains("unknown shader")),
        other => panic!("unexpected result {:?}", other),
    }
    assert_eq!(backend.deleted, vec![shader]);
}

#[test]
fn test_fail_next_compile_is_one_shot() {
    let mut backend = MockShaderBackend::new();
    backend.fail_next_compile = Some("0:1: error".to_string());
    let payload = ShaderPayload::Bytecode(Vec::new());

    match backend.compile_shader(ShaderStage::Pixel, &payload) {
        Err(Error::CompileError(log)) => assert_eq!(log, "0:1: error"),
        other => panic!("unexpected result {:?}", other),
    }
    assert_eq!(backend.live_shader_count(), 0);
    assert!(backend.compile_shader(ShaderStage::Pixel, &payload).is_ok());
}

#[test]
fn test_lookups() {
    let mut backend = MockShaderBackend::new();
    let program = backend.create_program(&[("a_position", 3)], &[("Diffuse", 7)]);

    assert_eq!(backend.lookup_attribute_location(program, "a_position"), 3);
    assert_eq!(backend.lookup_attribute_location(program, "a_normal"), -1);
    assert_eq!(backend.lookup_uniform_location(program, "Diffuse"), 7);
    assert_eq!(backend.lookup_uniform_location(program, "a_position"), -1);

    let stale = backend.create_program(&[], &[]);
    backend.programs.remove(stale);
    assert_eq!(backend.lookup_uniform_location(stale, "Diffuse"), -1);
}

#[test]
fn test_bind_sampler_unit_recorded() {
    let mut backend = MockShaderBackend::new();
    let program = backend.create_program(&[], &[]);
    backend.bind_sampler_unit(program, 4, 2);
    assert_eq!(backend.bound_units, vec![(program, 4, 2)]);
}
