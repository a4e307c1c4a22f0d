//! Crate-level error type.

use thiserror::Error;

use crate::mesh::LoadError;

/// Failures surfaced by a render pass or by writing its result.
///
/// Rasterization itself cannot fail: out-of-range pixels and degenerate
/// triangles are no-ops. Only the collaborators on either side of the
/// pipeline (model loading and image encoding) produce errors.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to load model: {0}")]
    Load(#[from] LoadError),
    #[error("failed to write image: {0}")]
    Encode(#[from] image::ImageError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
