/// Meta-declaration micro-format
///
/// Shader source in an effect's intermediate text form is interleaved with
/// declaration lines such as
///
/// ```text
/// #fx BeginShader(stage=vertex,constantBuffers=0 1)
/// #fx Sampler(name=Diffuse,type=Sampler2D,textureSlot=0,samplerSlot=0,parameter=3)
/// #fx Attribute(name=a_position,usage=Position,index=0,format=0)
/// #fx EndShader()
/// ```
///
/// Parameters are `key=value` pairs separated by commas. List values
/// (constant-buffer slots) are space separated. Values are not escaped, so
/// names written into a declaration must not contain `,` `=` `(` `)` or line
/// breaks, nor start or end with whitespace.

use std::str::FromStr;
use super::descriptor::{FormatVariant, ShaderDescriptor};
use crate::error::{Error, Result};

/// Marker that starts every declaration line
pub const META_PREFIX: &str = "#fx";

pub const BEGIN_SHADER: &str = "BeginShader";
pub const SAMPLER: &str = "Sampler";
pub const ATTRIBUTE: &str = "Attribute";
pub const END_SHADER: &str = "EndShader";

/// Build a full declaration line (without trailing newline)
pub fn format_declaration(directive: &str, params: &[(&str, String)]) -> String {
    let args: Vec<String> = params
        .iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect();
    format!("{} {}({})", META_PREFIX, directive, args.join(","))
}

/// Space-separated list of slot indices
pub fn join_slots(slots: &[u8]) -> String {
    slots.iter().map(|s| s.to_string()).collect::<Vec<_>>().join(" ")
}

/// Inverse of [`join_slots`]; entries that are not numbers are skipped
pub fn split_slots(value: &str) -> Vec<u8> {
    value.split_whitespace().filter_map(|s| s.parse().ok()).collect()
}

/// Check that `value` survives a format/parse round trip as a parameter
pub fn check_param_value(directive: &str, key: &str, value: &str) -> Result<()> {
    let reserved = value.contains([',', '=', '(', ')', '\n', '\r']);
    if reserved || value.trim() != value {
        return Err(Error::InvalidResource(format!(
            "{} {} '{}' cannot be written as a declaration parameter",
            directive, key, value
        )));
    }
    Ok(())
}

/// If `line` declares `directive`, return its argument list
pub fn matches_meta_declaration<'a>(line: &'a str, directive: &str) -> Option<&'a str> {
    let rest = line.trim().strip_prefix(META_PREFIX)?;
    // The prefix must be followed by whitespace, "#fxSampler(" is plain source
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    let rest = rest.trim_start().strip_prefix(directive)?;
    let rest = rest.trim_start().strip_prefix('(')?;
    rest.trim_end().strip_suffix(')')
}

fn find_param<'a>(args: &'a str, key: &str) -> Option<&'a str> {
    args.split(',').find_map(|pair| {
        let (k, v) = pair.split_once('=')?;
        (k.trim() == key).then(|| v.trim())
    })
}

/// String parameter, `default` when the key is missing
pub fn parse_param_str(args: &str, key: &str, default: &str) -> String {
    find_param(args, key).unwrap_or(default).to_string()
}

/// Numeric parameter, `default` when the key is missing or not a number
pub fn parse_param_int<T: FromStr>(args: &str, key: &str, default: T) -> T {
    find_param(args, key)
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Render a descriptor as declarations the text-driven constructor accepts
///
/// Sampler names and attributes are written only for variants that carry
/// them. The source payload is written verbatim followed by one newline so
/// that splitting on lines and re-joining with `\n` restores it exactly.
/// Fails with `InvalidResource` when a sampler or attribute name does not
/// pass [`check_param_value`].
pub fn write_readable(descriptor: &ShaderDescriptor, variant: FormatVariant) -> Result<String> {
    let mut out = String::new();

    out.push_str(&format_declaration(BEGIN_SHADER, &[
        ("stage", descriptor.stage().name().to_string()),
        ("constantBuffers", join_slots(descriptor.constant_buffer_slots())),
    ]));
    out.push('\n');

    for sampler in descriptor.samplers() {
        check_param_value(SAMPLER, "name", &sampler.name)?;
        out.push_str(&format_declaration(SAMPLER, &[
            ("name", sampler.name.clone()),
            ("type", sampler.kind.literal().to_string()),
            ("textureSlot", sampler.texture_slot.to_string()),
            ("samplerSlot", sampler.sampler_slot.to_string()),
            ("parameter", sampler.parameter_index.to_string()),
        ]));
        out.push('\n');
    }

    if variant.has_attributes() {
        for attribute in descriptor.attributes() {
            check_param_value(ATTRIBUTE, "name", &attribute.name)?;
            out.push_str(&format_declaration(ATTRIBUTE, &[
                ("name", attribute.name.clone()),
                ("usage", attribute.usage.name().to_string()),
                ("index", attribute.usage_index.to_string()),
                ("format", attribute.format.to_string()),
            ]));
            out.push('\n');
        }
    }

    if let Some(source) = descriptor.payload().as_source() {
        out.push_str(source);
        out.push('\n');
    }

    out.push_str(&format_declaration(END_SHADER, &[]));
    out.push('\n');
    Ok(out)
}

#[cfg(test)]
#[path = "meta_tests.rs"]
mod tests;
