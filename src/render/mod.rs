//! Framebuffer and rasterization primitives.

pub mod framebuffer;
pub mod rasterizer;

pub use framebuffer::FrameBuffer;
pub use rasterizer::{barycentric, draw_line, fill_triangle, to_screen};
