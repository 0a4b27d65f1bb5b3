//! Preview constants, presentation-layer ranges and runtime defaults

use std::ops::RangeInclusive;

/// Tool name used as the prefix of exported preview files
pub const EXPORT_TOOL_NAME: &str = "PlaidColorways";

// Preview canvas, in logical pixels
/// Default preview width
pub const DEFAULT_PREVIEW_WIDTH: u32 = 520;
/// Default preview height
pub const DEFAULT_PREVIEW_HEIGHT: u32 = 520;
/// Default device pixel ratio
pub const DEFAULT_DEVICE_SCALE: f64 = 1.0;

// Compositor shading
/// Overdraw added to each block to hide seams between neighbouring cells
pub const CELL_OVERDRAW: f64 = 0.5;
/// Opacity of the crossing-shadow tint drawn over each cell
pub const CROSSING_TINT_OPACITY: f64 = 0.1;

// Ranges enforced by the command line, never by the core
/// Accepted pitch range
pub const PITCH_RANGE: RangeInclusive<f64> = 8.0..=80.0;
/// Accepted zoom range
pub const ZOOM_RANGE: RangeInclusive<f64> = 0.5..=3.0;
/// Zoom slider step
pub const ZOOM_STEP: f64 = 0.1;
/// Accepted EPI / PPI range
pub const DENSITY_RANGE: RangeInclusive<f64> = 40.0..=200.0;
/// Maximum number of colors on each side of the colorway
pub const MAX_COLORS_PER_SIDE: usize = 8;

// Defaults of a fresh configuration
/// Default stripe pitch in logical pixels
pub const DEFAULT_PITCH: f64 = 28.0;
/// Default zoom factor
pub const DEFAULT_ZOOM: f64 = 1.0;
/// Default warp density
pub const DEFAULT_EPI: f64 = 110.0;
/// Default weft density
pub const DEFAULT_PPI: f64 = 90.0;
/// Default weave id
pub const DEFAULT_WEAVE_ID: &str = "oxford";
/// Default yarn id for both warp and weft
pub const DEFAULT_YARN_ID: &str = "cotton_combed_40";
/// Default warp palette
pub const DEFAULT_WARP_COLORS: [&str; 2] = ["#1d3557", "#e76f51"];
/// Default weft palette
pub const DEFAULT_WEFT_COLORS: [&str; 2] = ["#ffffff", "#e9c46a"];

/// Fixed seed for reproducible random swatches
pub const DEFAULT_SEED: u64 = 42;

// Output settings
/// Suffix of the JSON analysis report written next to each batch preview
pub const REPORT_SUFFIX: &str = "_report.json";
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_LINES: usize = 5;
