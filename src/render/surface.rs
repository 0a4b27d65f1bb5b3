//! Raster sinks the compositor draws into
//!
//! The compositor only needs two operations from a surface: reset it to a
//! given size and fill an axis-aligned block with a possibly translucent
//! color. Surface lifetime and pixel density stay with the caller.

use image::{Rgba, RgbaImage};

/// Minimal 2D raster target
pub trait RasterSurface {
    /// Resize to `width × height` logical pixels and discard all contents
    fn clear(&mut self, width: u32, height: u32);

    /// Source-over fill of the block at `(x, y)` sized `width × height`
    fn fill_block(&mut self, x: f64, y: f64, width: f64, height: f64, color: Rgba<u8>);

    /// Device pixels per logical pixel
    fn device_scale(&self) -> f64 {
        1.0
    }
}

/// In-memory RGBA surface backed by an [`RgbaImage`]
///
/// A pixel is covered by a block when its center lies inside the block.
#[derive(Debug, Clone)]
pub struct ImageSurface {
    image: RgbaImage,
}

impl Default for ImageSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageSurface {
    /// Empty zero-sized surface
    pub fn new() -> Self {
        Self {
            image: RgbaImage::new(0, 0),
        }
    }

    /// Transparent surface of the given size
    pub fn with_size(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::new(width, height),
        }
    }

    /// Width in pixels
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Height in pixels
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Pixel at `(x, y)`, or `None` outside the surface
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba<u8>> {
        self.image.get_pixel_checked(x, y).copied()
    }

    /// Rendered image
    pub const fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Take the rendered image
    pub fn into_image(self) -> RgbaImage {
        self.image
    }
}

// First pixel index whose center is at or past `edge`
fn covered_from(edge: f64, limit: u32) -> u32 {
    let index = (edge - 0.5).ceil().max(0.0);
    if index >= f64::from(limit) {
        limit
    } else {
        index as u32
    }
}

fn blend_channel(src: u8, dst: u8, src_alpha: f64, dst_weight: f64, out_alpha: f64) -> u8 {
    let value = f64::from(src).mul_add(src_alpha, f64::from(dst) * dst_weight) / out_alpha;
    value.round().clamp(0.0, 255.0) as u8
}

fn source_over(dst: Rgba<u8>, src: Rgba<u8>) -> Rgba<u8> {
    let [sr, sg, sb, sa] = src.0;
    if sa == u8::MAX {
        return src;
    }
    if sa == 0 {
        return dst;
    }
    let [dr, dg, db, da] = dst.0;
    let src_alpha = f64::from(sa) / 255.0;
    let dst_weight = f64::from(da) / 255.0 * (1.0 - src_alpha);
    let out_alpha = src_alpha + dst_weight;

    Rgba([
        blend_channel(sr, dr, src_alpha, dst_weight, out_alpha),
        blend_channel(sg, dg, src_alpha, dst_weight, out_alpha),
        blend_channel(sb, db, src_alpha, dst_weight, out_alpha),
        (out_alpha * 255.0).round().clamp(0.0, 255.0) as u8,
    ])
}

impl RasterSurface for ImageSurface {
    fn clear(&mut self, width: u32, height: u32) {
        self.image = RgbaImage::new(width, height);
    }

    fn fill_block(&mut self, x: f64, y: f64, width: f64, height: f64, color: Rgba<u8>) {
        if !(x.is_finite() && y.is_finite() && width > 0.0 && height > 0.0) {
            return;
        }
        let (surface_width, surface_height) = self.image.dimensions();
        let x0 = covered_from(x, surface_width);
        let x1 = covered_from(x + width, surface_width);
        let y0 = covered_from(y, surface_height);
        let y1 = covered_from(y + height, surface_height);

        for py in y0..y1 {
            for px in x0..x1 {
                if let Some(pixel) = self.image.get_pixel_mut_checked(px, py) {
                    *pixel = source_over(*pixel, color);
                }
            }
        }
    }
}

/// Adapter that multiplies all geometry by a device pixel ratio
///
/// Callers wrap their surface in this to render a logical-pixel layout at
/// physical resolution; the compositor itself never scales.
#[derive(Debug, Clone)]
pub struct ScaledSurface<S> {
    inner: S,
    scale: f64,
}

impl<S: RasterSurface> ScaledSurface<S> {
    /// Wrap `inner`; non-positive or non-finite scales fall back to 1
    pub fn new(inner: S, scale: f64) -> Self {
        let scale = if scale.is_finite() && scale > 0.0 {
            scale
        } else {
            1.0
        };
        Self { inner, scale }
    }

    /// Effective device pixel ratio
    pub const fn scale(&self) -> f64 {
        self.scale
    }

    /// Wrapped surface
    pub const fn inner(&self) -> &S {
        &self.inner
    }

    /// Unwrap the surface
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: RasterSurface> RasterSurface for ScaledSurface<S> {
    fn clear(&mut self, width: u32, height: u32) {
        let scaled = |length: u32| (f64::from(length) * self.scale).round() as u32;
        self.inner.clear(scaled(width), scaled(height));
    }

    fn fill_block(&mut self, x: f64, y: f64, width: f64, height: f64, color: Rgba<u8>) {
        self.inner.fill_block(
            x * self.scale,
            y * self.scale,
            width * self.scale,
            height * self.scale,
            color,
        );
    }

    fn device_scale(&self) -> f64 {
        self.scale * self.inner.device_scale()
    }
}
