//! Versioned WGSL sources for the radar sphere program.

use std::borrow::Cow;

/// Version of the built-in shader pair. Bump when either stage changes.
pub const SHADER_VERSION: u32 = 1;

const VERTEX_SOURCE: &str = include_str!("radar_sphere_vertex.wgsl");
const FRAGMENT_SOURCE: &str = include_str!("radar_sphere_fragment.wgsl");

/// A vertex/fragment source pair handed to the layer at construction.
///
/// Compiled once at attach; never recompiled per frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderSources {
    pub version: u32,
    pub vertex: Cow<'static, str>,
    pub fragment: Cow<'static, str>,
}

impl ShaderSources {
    /// The built-in radar sphere shaders.
    pub fn builtin() -> Self {
        Self {
            version: SHADER_VERSION,
            vertex: Cow::Borrowed(VERTEX_SOURCE),
            fragment: Cow::Borrowed(FRAGMENT_SOURCE),
        }
    }

    /// Replace the vertex stage source.
    pub fn with_vertex(mut self, source: impl Into<Cow<'static, str>>) -> Self {
        self.vertex = source.into();
        self
    }

    /// Replace the fragment stage source.
    pub fn with_fragment(mut self, source: impl Into<Cow<'static, str>>) -> Self {
        self.fragment = source.into();
        self
    }
}

impl Default for ShaderSources {
    fn default() -> Self {
        Self::builtin()
    }
}
