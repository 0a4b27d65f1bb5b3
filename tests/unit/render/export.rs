//! Tests for PNG export and export file naming

#[cfg(test)]
mod tests {
    use tempfile::TempDir;
    use weavelab::FabricError;
    use weavelab::catalog::Catalog;
    use weavelab::fabric::config::{FabricConfiguration, PatternMode};
    use weavelab::io::configuration::EXPORT_TOOL_NAME;
    use weavelab::render::compositor::render_preview;
    use weavelab::render::export::{export_file_name, export_png, export_preview};
    use weavelab::render::surface::ImageSurface;

    // Tests the file name joins tool, pattern and weave id
    // Verified by swapping pattern and weave id
    #[test]
    fn test_export_file_name() {
        assert_eq!(
            export_file_name("PlaidColorways", PatternMode::Check, "twill_2_2"),
            "PlaidColorways_check_twill_2_2.png"
        );
    }

    // Tests a rendered preview is written as a readable PNG
    // Verified by saving with the default format guess
    #[test]
    fn test_export_png_round_trip() {
        let dir = TempDir::new().unwrap();
        let config = FabricConfiguration::default();
        let mut surface = ImageSurface::new();
        assert!(render_preview(&mut surface, 24, 16, &config, Catalog::builtin()));

        let path = dir.path().join("nested").join("preview.png");
        export_png(&surface, &path).unwrap();

        let decoded = image::open(&path).unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), (24, 16));
        assert_eq!(decoded.get_pixel(3, 3), surface.pixel(3, 3).as_ref().unwrap());
    }

    // Tests exporting an empty surface is rejected
    // Verified by removing the empty-surface check
    #[test]
    fn test_export_empty_surface() {
        let dir = TempDir::new().unwrap();
        let result = export_png(&ImageSurface::new(), &dir.path().join("empty.png"));

        assert!(matches!(
            result,
            Err(FabricError::InvalidConfiguration { parameter: "surface", .. })
        ));
    }

    // Tests export_preview names the file after the configuration
    // Verified by ignoring the pattern in the file name
    #[test]
    fn test_export_preview_naming() {
        let dir = TempDir::new().unwrap();
        let config = FabricConfiguration {
            pattern: PatternMode::Stripe,
            ..FabricConfiguration::default()
        };
        let mut surface = ImageSurface::new();
        render_preview(&mut surface, 8, 8, &config, Catalog::builtin());

        let path = export_preview(&surface, dir.path(), &config).unwrap();
        assert_eq!(
            path.file_name().and_then(|n| n.to_str()),
            Some(format!("{EXPORT_TOOL_NAME}_stripe_{}.png", config.weave_id).as_str())
        );
        assert!(path.exists());
    }
}
