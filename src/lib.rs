//! Woven fabric colorway previews with production analysis
//!
//! A colorway is a weave structure, warp and weft color palettes, thread
//! densities and yarn references. The crate composites it into a raster
//! preview and estimates areal weight, production risks and selling points
//! from a built-in catalog of weaves and yarns.

#![forbid(unsafe_code)]

/// Weight, production risk and selling point engines
pub mod analysis;
/// Built-in weave and yarn catalogs with lookup and filtering
pub mod catalog;
/// Colors, palettes and colorway configuration
pub mod fabric;
/// Command line, configuration constants, errors, logging and reports
pub mod io;
/// Raster surfaces, the weave compositor and PNG export
pub mod render;

pub use io::error::{FabricError, Result};
