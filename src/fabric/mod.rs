//! Colorway model shared by the compositor and the analysis engines

/// RGB colors and palettes
pub mod color;
/// Fabric configuration and catalog resolution
pub mod config;
