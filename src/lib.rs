//! A CPU-based, flat-shaded software rasterizer.
//!
//! Converts a triangle mesh whose vertices are already in normalized device
//! coordinates into a raster image without a GPU: faces are lit by a single
//! directional light, mapped to pixel space and filled with barycentric
//! rasterization.
//!
//! # Quick Start
//!
//! ```ignore
//! use softraster::prelude::*;
//!
//! let mesh = Mesh::from_obj("head.obj")?;
//! let mut engine = Engine::new(800, 800);
//! engine.render(&mesh);
//! let mut image = engine.into_buffer();
//! image.flip_vertically();
//! image.write_file("output.tga")?;
//! ```

// Public API - exposed to library consumers
pub mod colors;
pub mod config;
pub mod engine;
pub mod error;
pub mod light;
pub mod math;
pub mod mesh;
pub mod pattern;
pub mod render;

// Re-export commonly needed types at crate root for convenience
pub use config::RenderConfig;
pub use engine::{Engine, RenderMode, RenderStats};
pub use error::{Error, Result};
pub use mesh::{Face, LoadError, Mesh};
pub use render::FrameBuffer;

/// Prelude module for convenient imports.
///
/// # Example
/// ```ignore
/// use softraster::prelude::*;
/// ```
pub mod prelude {
    // Engine
    pub use crate::engine::{face_normal, Engine, RenderMode, RenderStats};

    // Scene
    pub use crate::colors::Color;
    pub use crate::light::DirectionalLight;
    pub use crate::mesh::{Face, Mesh};

    // Math
    pub use crate::math::{Vec2, Vec2f, Vec2i, Vec3, Vec3f, Vec3i};

    // Rendering
    pub use crate::pattern::test_pattern;
    pub use crate::render::{barycentric, draw_line, fill_triangle, to_screen, FrameBuffer};
}
