//! Tiled weave rendering under the solid, stripe and check colorways
//!
//! The surface is covered by a grid of blocks, one per crossing. Each block
//! is `pitch·zoom / repeat_x` wide and `pitch·zoom / repeat_y` tall, so one
//! weave repeat spans exactly one stripe. Block `(col, row)` shows the
//! crossing `(col mod repeat_x, row mod repeat_y)` of the interlacement
//! matrix, and the stripe it belongs to is `col / repeat_x` across and
//! `row / repeat_y` down.
//!
//! Blocks smaller than a device pixel are not drawn one by one. Each device
//! pixel instead takes the colors of the block under its center, the same
//! result block drawing leaves under the pixel-center coverage rule.

use crate::catalog::Catalog;
use crate::catalog::weave::WeaveDefinition;
use crate::fabric::color::Rgb;
use crate::fabric::config::{FabricConfiguration, PatternMode};
use crate::io::configuration::{CELL_OVERDRAW, CROSSING_TINT_OPACITY};
use crate::render::surface::RasterSurface;

/// Block grid covering a surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellGeometry {
    /// Block width in pixels
    pub cell_width: f64,
    /// Block height in pixels
    pub cell_height: f64,
    /// Blocks needed to cover the width
    pub columns: usize,
    /// Blocks needed to cover the height
    pub rows: usize,
}

impl CellGeometry {
    /// Lay the grid out for a `width × height` surface
    ///
    /// Returns `None` when the configuration yields no drawable block size.
    pub fn new(
        weave: &WeaveDefinition,
        config: &FabricConfiguration,
        width: u32,
        height: u32,
    ) -> Option<Self> {
        let stripe = config.stripe_width();
        let cell_width = stripe / weave.repeat_x.max(1) as f64;
        let cell_height = stripe / weave.repeat_y.max(1) as f64;
        if !(cell_width.is_finite() && cell_height.is_finite())
            || cell_width <= 0.0
            || cell_height <= 0.0
        {
            return None;
        }

        Some(Self {
            cell_width,
            cell_height,
            columns: (f64::from(width) / cell_width).ceil() as usize,
            rows: (f64::from(height) / cell_height).ceil() as usize,
        })
    }

    /// Block containing the pixel `(x, y)`
    pub fn block_at(&self, x: f64, y: f64) -> (usize, usize) {
        (
            (x / self.cell_width).floor().max(0.0) as usize,
            (y / self.cell_height).floor().max(0.0) as usize,
        )
    }
}

/// Face and crossing-shadow colors of one block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockColors {
    /// Color of the yarn on the face
    pub face: Rgb,
    /// Color of the yarn underneath, drawn as a faint tint
    pub shadow: Rgb,
}

/// Colors of block `(col, row)`
pub fn block_colors(
    weave: &WeaveDefinition,
    config: &FabricConfiguration,
    col: usize,
    row: usize,
) -> BlockColors {
    let repeat_x = weave.repeat_x.max(1);
    let repeat_y = weave.repeat_y.max(1);
    let warp_face = weave.is_warp_face(col % repeat_x, row % repeat_y);

    let (warp, weft) = match config.pattern {
        PatternMode::Solid => (config.warp_colors.primary(), config.weft_colors.primary()),
        PatternMode::Stripe => (
            config.warp_colors.cycle(col / repeat_x),
            config.weft_colors.primary(),
        ),
        // Matching and differing stripe indices resolve the same way
        PatternMode::Check => (
            config.warp_colors.cycle(col / repeat_x),
            config.weft_colors.cycle(row / repeat_y),
        ),
    };

    if warp_face {
        BlockColors {
            face: warp,
            shadow: weft,
        }
    } else {
        BlockColors {
            face: weft,
            shadow: warp,
        }
    }
}

/// Face color shown at pixel `(x, y)` of a preview
///
/// Returns `None` when the configuration yields no drawable block size.
pub fn resolve_pixel(
    weave: &WeaveDefinition,
    config: &FabricConfiguration,
    x: u32,
    y: u32,
) -> Option<Rgb> {
    let geometry = CellGeometry::new(weave, config, x.saturating_add(1), y.saturating_add(1))?;
    let (col, row) = geometry.block_at(f64::from(x), f64::from(y));
    Some(block_colors(weave, config, col, row).face)
}

/// Clear `surface` to `width × height` and draw the tiled weave
///
/// Draws nothing beyond the clear when pitch or zoom cannot produce a block.
#[tracing::instrument(
    skip(surface, weave, config),
    fields(weave = %weave.id, pattern = %config.pattern)
)]
pub fn render_fabric<S: RasterSurface + ?Sized>(
    surface: &mut S,
    width: u32,
    height: u32,
    weave: &WeaveDefinition,
    config: &FabricConfiguration,
) {
    surface.clear(width, height);

    let Some(geometry) = CellGeometry::new(weave, config, width, height) else {
        tracing::warn!(
            pitch = config.pitch,
            zoom = config.zoom,
            "no drawable block size"
        );
        return;
    };

    let scale = surface.device_scale();
    if geometry.cell_width * scale < 1.0 || geometry.cell_height * scale < 1.0 {
        tracing::debug!(
            cell_width = geometry.cell_width,
            cell_height = geometry.cell_height,
            scale,
            "blocks below device resolution, sampling per pixel"
        );
        render_per_pixel(surface, (width, height), weave, config, &geometry, scale);
        return;
    }

    let block_width = geometry.cell_width + CELL_OVERDRAW;
    let block_height = geometry.cell_height + CELL_OVERDRAW;

    for row in 0..geometry.rows {
        let y = row as f64 * geometry.cell_height;
        for col in 0..geometry.columns {
            let x = col as f64 * geometry.cell_width;
            let colors = block_colors(weave, config, col, row);
            fill_crossing(surface, (x, y), (block_width, block_height), colors);
        }
    }
}

fn fill_crossing<S: RasterSurface + ?Sized>(
    surface: &mut S,
    (x, y): (f64, f64),
    (width, height): (f64, f64),
    colors: BlockColors,
) {
    surface.fill_block(x, y, width, height, colors.face.opaque());
    surface.fill_block(
        x,
        y,
        width,
        height,
        colors.shadow.with_opacity(CROSSING_TINT_OPACITY),
    );
}

// One fill per device pixel, colored by the block under the pixel center
fn render_per_pixel<S: RasterSurface + ?Sized>(
    surface: &mut S,
    (width, height): (u32, u32),
    weave: &WeaveDefinition,
    config: &FabricConfiguration,
    geometry: &CellGeometry,
    scale: f64,
) {
    let device = |length: u32| (f64::from(length) * scale).round() as u32;
    let pixel = scale.recip();
    let half = pixel / 2.0;

    for py in 0..device(height) {
        let y = f64::from(py) * pixel;
        for px in 0..device(width) {
            let x = f64::from(px) * pixel;
            let (col, row) = geometry.block_at(x + half, y + half);
            let colors = block_colors(weave, config, col, row);
            fill_crossing(surface, (x, y), (pixel, pixel), colors);
        }
    }
}

/// Resolve the configured weave and render it
///
/// Returns false, leaving a cleared surface, when the weave is not in the
/// catalog.
pub fn render_preview<S: RasterSurface + ?Sized>(
    surface: &mut S,
    width: u32,
    height: u32,
    config: &FabricConfiguration,
    catalog: &Catalog,
) -> bool {
    let Some(weave) = catalog.weave(&config.weave_id) else {
        tracing::debug!(weave_id = %config.weave_id, "weave not in catalog, preview left blank");
        surface.clear(width, height);
        return false;
    };
    render_fabric(surface, width, height, weave, config);
    true
}
