/// Text-driven descriptor constructor
///
/// Builds a [`ShaderDescriptor`] from the intermediate text form of an effect
/// (see [`meta`](super::meta) for the declaration grammar). Used by archive
/// builders before the binary layout is emitted, and to re-read the dump the
/// decoder produces.

use super::attribute::{AttributeDescriptor, VertexElementUsage};
use super::descriptor::{ShaderDescriptor, ShaderPayload, ShaderStage};
use super::meta::{self, ATTRIBUTE, BEGIN_SHADER, END_SHADER, SAMPLER};
use super::sampler::{SamplerDescriptor, SamplerKind};
use crate::error::{Error, Result};

/// Parse declarations and source lines until `EndShader()`
///
/// Starts at `*cursor` and leaves it just past the `EndShader()` line, or at
/// `lines.len()` when the terminator is missing. Non-declaration lines form
/// the source payload, joined with `\n`. Missing keys default to an empty
/// string or zero. No content hash is computed.
pub fn parse_shader_body(
    stage: ShaderStage,
    constant_buffer_slots: Vec<u8>,
    lines: &[&str],
    cursor: &mut usize,
) -> Result<ShaderDescriptor> {
    let mut samplers = Vec::new();
    let mut attributes = Vec::new();
    let mut source_lines: Vec<&str> = Vec::new();

    while *cursor < lines.len() {
        let line = lines[*cursor];
        *cursor += 1;

        if let Some(args) = meta::matches_meta_declaration(line, SAMPLER) {
            samplers.push(parse_sampler(args));
        } else if let Some(args) = meta::matches_meta_declaration(line, ATTRIBUTE) {
            attributes.push(parse_attribute(args)?);
        } else if meta::matches_meta_declaration(line, END_SHADER).is_some() {
            break;
        } else {
            source_lines.push(line);
        }
    }

    Ok(ShaderDescriptor::new(
        stage,
        constant_buffer_slots,
        samplers,
        attributes,
        ShaderPayload::Source(source_lines.join("\n")),
    ))
}

/// Parse a `BeginShader(...)` line at `*cursor`, then the body
///
/// Fails with `MalformedStream` when the cursor is not on a `BeginShader`
/// declaration. An unrecognised stage name is an unknown enum value.
pub fn parse_shader_block(lines: &[&str], cursor: &mut usize) -> Result<ShaderDescriptor> {
    let line = lines.get(*cursor).ok_or_else(|| {
        Error::MalformedStream(format!("expected {} at line {}, found end of input", BEGIN_SHADER, *cursor))
    })?;
    let args = meta::matches_meta_declaration(line, BEGIN_SHADER).ok_or_else(|| {
        Error::MalformedStream(format!("expected {} at line {}, found '{}'", BEGIN_SHADER, *cursor, line))
    })?;

    let stage = match meta::parse_param_str(args, "stage", "").as_str() {
        "vertex" => ShaderStage::Vertex,
        "pixel" => ShaderStage::Pixel,
        other => return Err(Error::unknown_enum("shader stage", other)),
    };
    let slots = meta::split_slots(&meta::parse_param_str(args, "constantBuffers", ""));

    *cursor += 1;
    parse_shader_body(stage, slots, lines, cursor)
}

fn parse_sampler(args: &str) -> SamplerDescriptor {
    SamplerDescriptor {
        name: meta::parse_param_str(args, "name", ""),
        kind: SamplerKind::from_literal(&meta::parse_param_str(args, "type", "")),
        texture_slot: meta::parse_param_int(args, "textureSlot", 0),
        sampler_slot: meta::parse_param_int(args, "samplerSlot", 0),
        state: None,
        parameter_index: meta::parse_param_int(args, "parameter", 0),
    }
}

fn parse_attribute(args: &str) -> Result<AttributeDescriptor> {
    Ok(AttributeDescriptor {
        name: meta::parse_param_str(args, "name", ""),
        usage: VertexElementUsage::from_name(&meta::parse_param_str(args, "usage", ""))?,
        usage_index: meta::parse_param_int(args, "index", 0),
        format: meta::parse_param_int(args, "format", 0),
    })
}

#[cfg(test)]
#[path = "text_parser_tests.rs"]
mod tests;
