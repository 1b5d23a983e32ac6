/*!
# fx_shader

Shader descriptors and texture helpers for an effect-based graphics layer.

This crate decodes the shader entries of a compiled effect archive into
immutable descriptors, and binds them to a graphics backend through a small
trait. Backend implementations (OpenGL, Direct3D, test mocks) provide the
actual API calls.

## Architecture

- **ShaderDescriptor**: stage, samplers, constant buffers, attributes, payload
- **decode / encode**: binary archive entry codec for both backend families
- **parse_shader_block**: text-driven constructor over `#fx` declarations
- **ShaderBackend**: graphics API seam (compile, lookups, sampler units)
- **Shader**: descriptor plus lazily compiled handle and attribute locations
- **Rectangle / TexturePixels**: texture regions and CPU-side pixel copies
*/

// Internal modules
mod error;
pub mod log;
pub mod hash;
pub mod shader;
pub mod geometry;
pub mod texture;

// Main fx namespace module
pub mod fx {
    // Error types
    pub use crate::error::{Error, Result};

    // Logging facade
    pub use crate::log::Log;

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    // Shader descriptors, codec and backend binding
    pub mod shader {
        pub use crate::shader::*;
    }

    // Geometry sub-module
    pub mod geometry {
        pub use crate::geometry::*;
    }

    // Texture sub-module
    pub mod texture {
        pub use crate::texture::*;
    }
}

// Re-export math library at crate root
pub use glam;
