//! Tests for the tiled weave compositor under the three colorway modes

#[cfg(test)]
mod tests {
    use image::Rgba;
    use weavelab::catalog::Catalog;
    use weavelab::catalog::weave::WeaveDefinition;
    use weavelab::fabric::color::{Palette, Rgb};
    use weavelab::fabric::config::{FabricConfiguration, PatternMode};
    use weavelab::io::configuration::CROSSING_TINT_OPACITY;
    use weavelab::render::compositor::{
        BlockColors, CellGeometry, block_colors, render_fabric, render_preview, resolve_pixel,
    };
    use weavelab::render::surface::{ImageSurface, RasterSurface, ScaledSurface};

    const A: Rgb = Rgb::new(255, 0, 0);
    const B: Rgb = Rgb::new(0, 255, 0);
    const C: Rgb = Rgb::new(0, 0, 255);
    const D: Rgb = Rgb::new(255, 255, 0);

    fn weave(id: &str) -> &'static WeaveDefinition {
        Catalog::builtin().weave(id).unwrap()
    }

    fn config(pattern: PatternMode, pitch: f64) -> FabricConfiguration {
        FabricConfiguration {
            pattern,
            pitch,
            zoom: 1.0,
            warp_colors: Palette::new(vec![A, B]).unwrap(),
            weft_colors: Palette::new(vec![C, D]).unwrap(),
            weave_id: "plain".to_string(),
            ..FabricConfiguration::default()
        }
    }

    // Tests block size divides the zoomed pitch by the repeat
    // Verified by ignoring zoom in the stripe width
    #[test]
    fn test_cell_geometry() {
        let oxford = weave("oxford");
        let mut settings = config(PatternMode::Solid, 28.0);
        settings.zoom = 2.0;

        let geometry = CellGeometry::new(oxford, &settings, 520, 520).unwrap();
        assert!((geometry.cell_width - 14.0).abs() < f64::EPSILON);
        assert!((geometry.cell_height - 14.0).abs() < f64::EPSILON);
        assert_eq!(geometry.columns, 38);
        assert_eq!(geometry.block_at(27.9, 14.0), (1, 1));
    }

    // Tests geometry is absent when pitch cannot produce a block
    // Verified by removing the positive-size check
    #[test]
    fn test_cell_geometry_degenerate() {
        let plain = weave("plain");

        assert!(CellGeometry::new(plain, &config(PatternMode::Solid, 0.0), 10, 10).is_none());
        assert!(CellGeometry::new(plain, &config(PatternMode::Solid, f64::NAN), 10, 10).is_none());
    }

    // Tests solid mode uses the first color of each side everywhere
    // Verified by cycling warp colors in solid mode
    #[test]
    fn test_solid_colors() {
        let plain = weave("plain");
        let settings = config(PatternMode::Solid, 20.0);

        assert_eq!(
            block_colors(plain, &settings, 0, 0),
            BlockColors { face: A, shadow: C }
        );
        assert_eq!(
            block_colors(plain, &settings, 3, 0),
            BlockColors { face: C, shadow: A }
        );
    }

    // Tests stripe mode cycles warp per stripe and keeps the first weft
    // Verified by dividing the column by one instead of the repeat
    #[test]
    fn test_stripe_colors() {
        let plain = weave("plain");
        let settings = config(PatternMode::Stripe, 20.0);

        assert_eq!(block_colors(plain, &settings, 2, 0).face, B);
        assert_eq!(block_colors(plain, &settings, 4, 0).face, A);
        assert_eq!(block_colors(plain, &settings, 3, 2).face, C);
        assert_eq!(block_colors(plain, &settings, 1, 4).face, C);
    }

    // Tests check mode cycles both sides
    // Verified by using the warp stripe index for the weft
    #[test]
    fn test_check_colors() {
        let plain = weave("plain");
        let settings = config(PatternMode::Check, 20.0);

        assert_eq!(block_colors(plain, &settings, 2, 2).face, B);
        assert_eq!(block_colors(plain, &settings, 3, 2).face, D);
        assert_eq!(block_colors(plain, &settings, 1, 0).shadow, A);
    }

    // Tests the documented check-pattern pixels at pitch 20
    // Verified by computing the stripe from the block index directly
    #[test]
    fn test_resolve_pixel_check() {
        let plain = weave("plain");
        let settings = config(PatternMode::Check, 20.0);

        assert!(plain.is_warp_face(0, 0));
        assert_eq!(resolve_pixel(plain, &settings, 0, 0), Some(A));
        assert_eq!(resolve_pixel(plain, &settings, 25, 0), Some(B));
        assert_eq!(resolve_pixel(plain, &settings, 10, 0), Some(C));
        assert_eq!(resolve_pixel(plain, &settings, 0, 25), Some(A));
        assert_eq!(resolve_pixel(plain, &settings, 10, 25), Some(D));
    }

    // Tests rendered pixels carry the face color with a faint crossing tint
    // Verified by drawing the tint opaque
    #[test]
    fn test_render_tint() {
        let plain = weave("plain");
        let mut settings = config(PatternMode::Check, 20.0);
        settings.warp_colors = Palette::single(A);
        settings.weft_colors = Palette::single(C);
        let mut surface = ImageSurface::new();

        render_fabric(&mut surface, 40, 40, plain, &settings);

        assert_eq!((surface.width(), surface.height()), (40, 40));
        assert_eq!(surface.pixel(5, 5), Some(Rgba([229, 0, 26, 255])));
        assert_eq!(surface.pixel(15, 5), Some(Rgba([26, 0, 229, 255])));
    }

    // Tests matching warp and weft colors render a flat fill
    // Verified by skipping cells at the right edge
    #[test]
    fn test_render_covers_surface() {
        let twill = weave("twill_2_2");
        let mut settings = config(PatternMode::Solid, 13.0);
        settings.warp_colors = Palette::single(B);
        settings.weft_colors = Palette::single(B);
        let mut surface = ImageSurface::new();

        render_fabric(&mut surface, 31, 17, twill, &settings);

        for (_, _, pixel) in surface.image().enumerate_pixels() {
            assert_eq!(*pixel, B.opaque());
        }
    }

    // Tests re-rendering fully replaces the previous contents
    // Verified by not clearing before drawing
    #[test]
    fn test_render_overwrites() {
        let plain = weave("plain");
        let mut surface = ImageSurface::new();
        let mut settings = config(PatternMode::Solid, 20.0);
        settings.warp_colors = Palette::single(A);
        settings.weft_colors = Palette::single(A);
        render_fabric(&mut surface, 30, 30, plain, &settings);

        settings.warp_colors = Palette::single(C);
        settings.weft_colors = Palette::single(C);
        render_fabric(&mut surface, 10, 20, plain, &settings);

        assert_eq!((surface.width(), surface.height()), (10, 20));
        assert_eq!(surface.pixel(0, 0), Some(C.opaque()));
    }

    // Tests an undrawable configuration leaves a cleared surface
    // Verified by returning before the clear
    #[test]
    fn test_render_degenerate_clears() {
        let plain = weave("plain");
        let mut surface = ImageSurface::with_size(4, 4);
        surface.fill_block(0.0, 0.0, 4.0, 4.0, A.opaque());

        render_fabric(&mut surface, 8, 8, plain, &config(PatternMode::Solid, 0.0));

        assert_eq!(surface.width(), 8);
        assert_eq!(surface.pixel(0, 0), Some(Rgba([0, 0, 0, 0])));
    }

    // Tests unknown weaves draw nothing and report false
    // Verified by falling back to the plain weave
    #[test]
    fn test_render_preview_unknown_weave() {
        let mut settings = config(PatternMode::Solid, 20.0);
        let mut surface = ImageSurface::new();
        assert!(render_preview(&mut surface, 8, 8, &settings, Catalog::builtin()));
        assert_ne!(surface.pixel(0, 0), Some(Rgba([0, 0, 0, 0])));

        settings.weave_id = "moon_weave".to_string();
        assert!(!render_preview(&mut surface, 8, 8, &settings, Catalog::builtin()));
        assert_eq!(surface.pixel(0, 0), Some(Rgba([0, 0, 0, 0])));
    }

    fn crossing_pixel(colors: BlockColors) -> Rgba<u8> {
        let mut swatch = ImageSurface::with_size(1, 1);
        swatch.fill_block(0.0, 0.0, 1.0, 1.0, colors.face.opaque());
        swatch.fill_block(0.0, 0.0, 1.0, 1.0, colors.shadow.with_opacity(CROSSING_TINT_OPACITY));
        swatch.pixel(0, 0).unwrap()
    }

    // Tests sub-pixel blocks render in time bounded by the surface size
    // Verified by always drawing block by block
    #[test]
    fn test_render_sub_pixel_blocks() {
        let plain = weave("plain");
        let mut settings = config(PatternMode::Check, 0.002);
        settings.zoom = 0.5;
        let geometry = CellGeometry::new(plain, &settings, 64, 64).unwrap();
        assert!(geometry.columns > 100_000);

        let mut surface = ImageSurface::new();
        render_fabric(&mut surface, 64, 64, plain, &settings);

        assert_eq!((surface.width(), surface.height()), (64, 64));
        for (x, y, pixel) in surface.image().enumerate_pixels() {
            let (col, row) = geometry.block_at(f64::from(x) + 0.5, f64::from(y) + 0.5);
            assert_eq!(*pixel, crossing_pixel(block_colors(plain, &settings, col, row)));
        }
    }

    // Tests per-pixel sampling matches block drawing at the same pixel centers
    // Verified by sampling the block at the pixel corner
    #[test]
    fn test_sub_pixel_matches_block_rule() {
        let twill = weave("twill_2_1");
        let settings = config(PatternMode::Stripe, 2.4);
        let geometry = CellGeometry::new(twill, &settings, 12, 12).unwrap();
        assert!(geometry.cell_width < 1.0);

        let mut surface = ImageSurface::new();
        render_fabric(&mut surface, 12, 12, twill, &settings);

        for (x, y, pixel) in surface.image().enumerate_pixels() {
            let (col, row) = geometry.block_at(f64::from(x) + 0.5, f64::from(y) + 0.5);
            assert_eq!(*pixel, crossing_pixel(block_colors(twill, &settings, col, row)));
        }
    }

    // Tests the device scale decides when blocks fall below one pixel
    // Verified by comparing the logical block size against one
    #[test]
    fn test_sub_pixel_blocks_scaled() {
        let plain = weave("plain");
        let settings = config(PatternMode::Check, 0.004);
        let mut scaled = ScaledSurface::new(ImageSurface::new(), 2.0);

        render_fabric(&mut scaled, 16, 16, plain, &settings);

        let surface = scaled.into_inner();
        assert_eq!((surface.width(), surface.height()), (32, 32));
        for (_, _, pixel) in surface.image().enumerate_pixels() {
            assert_eq!(pixel.0[3], 255);
        }
    }
}
