//! Core rendering engine.
//!
//! The [`Engine`] owns the framebuffer for one render pass and drives the
//! per-face pipeline: compute the face normal, light it, map the vertices
//! to screen space and rasterize.
//!
//! There is no depth buffer. Faces are drawn in mesh order, so where
//! triangles overlap the one drawn last wins (painter's algorithm).

use std::fmt;

use crate::colors::{self, Color};
use crate::light::DirectionalLight;
use crate::math::Vec3f;
use crate::mesh::Mesh;
use crate::render::{draw_line, fill_triangle, to_screen, FrameBuffer};

/// Rendering mode presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum RenderMode {
    /// Filled triangles, one gray level per face from the directional light
    #[default]
    Flat,
    /// Triangle edges only, unlit and unculled
    Wireframe,
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderMode::Flat => write!(f, "flat"),
            RenderMode::Wireframe => write!(f, "wireframe"),
        }
    }
}

/// Counters collected over one call to [`Engine::render`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub faces_drawn: usize,
    /// Faces skipped because they face away from the light or have no
    /// well-defined normal.
    pub faces_culled: usize,
    pub pixels_written: usize,
}

/// Unit normal of a triangle, `(v1 - v0) × (v2 - v0)` normalized.
///
/// Counter-clockwise triangles in the xy plane get `(0, 0, 1)`. A triangle
/// with zero area yields a non-finite vector.
pub fn face_normal(vertices: [Vec3f; 3]) -> Vec3f {
    let [v0, v1, v2] = vertices;
    (v1 - v0).cross(v2 - v0).normalize()
}

pub struct Engine {
    buffer: FrameBuffer,
    light: DirectionalLight,
    render_mode: RenderMode,
}

impl Engine {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            buffer: FrameBuffer::new(width, height),
            light: DirectionalLight::default(),
            render_mode: RenderMode::default(),
        }
    }

    pub fn set_render_mode(&mut self, mode: RenderMode) {
        self.render_mode = mode;
    }

    pub fn render_mode(&self) -> RenderMode {
        self.render_mode
    }

    pub fn set_light(&mut self, light: DirectionalLight) {
        self.light = light;
    }

    pub fn light(&self) -> DirectionalLight {
        self.light
    }

    pub fn width(&self) -> u32 {
        self.buffer.width()
    }

    pub fn height(&self) -> u32 {
        self.buffer.height()
    }

    pub fn buffer(&self) -> &FrameBuffer {
        &self.buffer
    }

    /// End the render pass and hand the framebuffer to the caller.
    pub fn into_buffer(self) -> FrameBuffer {
        self.buffer
    }

    /// Draw every face of `mesh` on top of the current buffer contents.
    pub fn render(&mut self, mesh: &Mesh) -> RenderStats {
        let stats = match self.render_mode {
            RenderMode::Flat => self.render_flat(mesh),
            RenderMode::Wireframe => self.render_wireframe(mesh),
        };
        log::info!(
            "{} pass: {} faces drawn, {} culled, {} pixels written",
            self.render_mode,
            stats.faces_drawn,
            stats.faces_culled,
            stats.pixels_written
        );
        stats
    }

    fn render_flat(&mut self, mesh: &Mesh) -> RenderStats {
        let (width, height) = (self.width(), self.height());
        let mut stats = RenderStats::default();

        for (index, &face) in mesh.faces().iter().enumerate() {
            let vertices = mesh.face_vertices(face);
            let normal = face_normal(vertices);

            let intensity = self.light.intensity(normal);
            // Facing away from the light doubles as backface culling. NaN
            // (degenerate face or zero-length light) fails the test too.
            if intensity.is_nan() || intensity <= 0.0 {
                log::trace!("face {index} culled (intensity {intensity})");
                stats.faces_culled += 1;
                continue;
            }

            let points = vertices.map(|v| to_screen(v, width, height));
            stats.pixels_written +=
                fill_triangle(points, &mut self.buffer, Color::from_intensity(intensity));
            stats.faces_drawn += 1;
        }
        stats
    }

    fn render_wireframe(&mut self, mesh: &Mesh) -> RenderStats {
        let (width, height) = (self.width(), self.height());
        let mut stats = RenderStats::default();

        for &face in mesh.faces() {
            let points = mesh
                .face_vertices(face)
                .map(|v| to_screen(v, width, height));
            for j in 0..3 {
                stats.pixels_written += draw_line(
                    points[j],
                    points[(j + 1) % 3],
                    &mut self.buffer,
                    colors::WIREFRAME,
                );
            }
            stats.faces_drawn += 1;
        }
        stats
    }
}
