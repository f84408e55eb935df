//! Offline WGSL checks backed by naga.
//!
//! `compile_wgsl` mirrors what a driver does for one stage; `check_interface`
//! mirrors the link step: entry points present and every fragment input fed
//! by a vertex output of the same type.

use std::collections::BTreeMap;

use naga::valid::{Capabilities, ValidationFlags, Validator};
use naga::{Binding, Handle, Module, Type, TypeInner};

use super::types::ShaderStage;

/// Parse and validate a single WGSL stage.
pub fn compile_wgsl(source: &str) -> Result<Module, String> {
    let module = naga::front::wgsl::parse_str(source).map_err(|e| e.emit_to_string(source))?;

    Validator::new(ValidationFlags::all(), Capabilities::all())
        .validate(&module)
        .map_err(|e| e.emit_to_string(source))?;

    Ok(module)
}

/// Check that two compiled stages form a complete program.
pub fn check_interface(vertex: &Module, fragment: &Module) -> Result<(), String> {
    let vs = find_entry(vertex, ShaderStage::Vertex)?;
    let fs = find_entry(fragment, ShaderStage::Fragment)?;

    let mut outputs = BTreeMap::new();
    if let Some(result) = &vs.function.result {
        collect_locations(vertex, result.ty, result.binding.as_ref(), &mut outputs);
    }

    let mut inputs = BTreeMap::new();
    for arg in &fs.function.arguments {
        collect_locations(fragment, arg.ty, arg.binding.as_ref(), &mut inputs);
    }

    for (location, input) in &inputs {
        match outputs.get(location) {
            None => {
                return Err(format!(
                    "fragment input at location {location} is not written by the vertex stage"
                ));
            }
            Some(output) if output != input => {
                return Err(format!(
                    "location {location}: vertex output {output:?} does not match fragment input {input:?}"
                ));
            }
            Some(_) => {}
        }
    }

    Ok(())
}

fn find_entry(module: &Module, stage: ShaderStage) -> Result<&naga::EntryPoint, String> {
    let naga_stage = match stage {
        ShaderStage::Vertex => naga::ShaderStage::Vertex,
        ShaderStage::Fragment => naga::ShaderStage::Fragment,
    };
    module
        .entry_points
        .iter()
        .find(|ep| ep.name == stage.entry_point() && ep.stage == naga_stage)
        .ok_or_else(|| format!("missing {stage} entry point `{}`", stage.entry_point()))
}

/// Record user locations reachable from a binding or an IO struct.
fn collect_locations(
    module: &Module,
    ty: Handle<Type>,
    binding: Option<&Binding>,
    out: &mut BTreeMap<u32, TypeInner>,
) {
    match binding {
        Some(Binding::Location { location, .. }) => {
            out.insert(*location, module.types[ty].inner.clone());
        }
        Some(Binding::BuiltIn(_)) => {}
        None => {
            if let TypeInner::Struct { members, .. } = &module.types[ty].inner {
                for member in members {
                    collect_locations(module, member.ty, member.binding.as_ref(), out);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VS: &str = r#"
struct Out {
    @builtin(position) clip: vec4<f32>,
    @location(0) uv: vec2<f32>,
};
@vertex
fn vs_main(@location(0) p: vec3<f32>, @location(1) uv: vec2<f32>) -> Out {
    var out: Out;
    out.clip = vec4<f32>(p, 1.0);
    out.uv = uv;
    return out;
}
"#;

    const FS: &str = r#"
@fragment
fn fs_main(@location(0) uv: vec2<f32>) -> @location(0) vec4<f32> {
    return vec4<f32>(uv, 0.0, 1.0);
}
"#;

    #[test]
    fn valid_pair_links() {
        let vs = compile_wgsl(VS).unwrap();
        let fs = compile_wgsl(FS).unwrap();
        assert!(check_interface(&vs, &fs).is_ok());
    }

    #[test]
    fn syntax_error_reports_log() {
        let err = compile_wgsl("fn vs_main( {").unwrap_err();
        assert!(!err.is_empty());
    }

    #[test]
    fn unwritten_varying_fails_link() {
        let fs = compile_wgsl(
            r#"
@fragment
fn fs_main(@location(3) tint: vec4<f32>) -> @location(0) vec4<f32> {
    return tint;
}
"#,
        )
        .unwrap();
        let vs = compile_wgsl(VS).unwrap();
        let err = check_interface(&vs, &fs).unwrap_err();
        assert!(err.contains("location 3"), "{err}");
    }

    #[test]
    fn mismatched_varying_type_fails_link() {
        let fs = compile_wgsl(
            r#"
@fragment
fn fs_main(@location(0) uv: vec4<f32>) -> @location(0) vec4<f32> {
    return uv;
}
"#,
        )
        .unwrap();
        let vs = compile_wgsl(VS).unwrap();
        assert!(check_interface(&vs, &fs).is_err());
    }

    #[test]
    fn missing_entry_point_fails_link() {
        let vs = compile_wgsl(VS).unwrap();
        let err = check_interface(&vs, &vs).unwrap_err();
        assert!(err.contains("fs_main"), "{err}");
    }
}
