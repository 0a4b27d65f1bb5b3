//! Preview rendering: the compositor, its raster sinks and PNG export

/// Tiled weave compositor
pub mod compositor;
/// PNG export
pub mod export;
/// Raster surface abstraction and implementations
pub mod surface;
