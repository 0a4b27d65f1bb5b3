//! Tests for fabric configuration parsing, validation and resolution

#[cfg(test)]
mod tests {
    use weavelab::FabricError;
    use weavelab::catalog::Catalog;
    use weavelab::catalog::yarn::{Fiber, FiberShare, YarnSpec};
    use weavelab::fabric::config::{
        FabricConfiguration, PatternMode, YarnRef, ensure_positive, sanitize_density,
    };
    use weavelab::io::configuration::{DEFAULT_EPI, DEFAULT_WEAVE_ID, DEFAULT_YARN_ID};

    // Tests defaults come from the configuration constants and validate
    // Verified by defaulting pitch to zero
    #[test]
    fn test_default_configuration() {
        let config = FabricConfiguration::default();

        assert_eq!(config.pattern, PatternMode::Check);
        assert_eq!(config.weave_id, DEFAULT_WEAVE_ID);
        assert_eq!(config.warp_yarn.id(), DEFAULT_YARN_ID);
        assert!((config.epi - DEFAULT_EPI).abs() < f64::EPSILON);
        assert!(config.weft_yarn.is_none());
        assert!(config.validate().is_ok());
    }

    // Tests partial JSON fills in defaults
    // Verified by removing serde(default) from the struct
    #[test]
    fn test_from_json_partial() {
        let config = FabricConfiguration::from_json(
            r##"{"pattern": "stripe", "weave_id": "plain", "warp_colors": ["#ff0000"]}"##,
        )
        .unwrap();

        assert_eq!(config.pattern, PatternMode::Stripe);
        assert_eq!(config.weave_id, "plain");
        assert_eq!(config.warp_colors.len(), 1);
        assert_eq!(config.weft_colors, FabricConfiguration::default().weft_colors);
    }

    // Tests non-positive pitch and zoom are rejected
    // Verified by validating only pitch
    #[test]
    fn test_validate_pitch_zoom() {
        let config = FabricConfiguration {
            zoom: 0.0,
            ..FabricConfiguration::default()
        };
        assert!(matches!(
            config.validate(),
            Err(FabricError::InvalidConfiguration { parameter: "zoom", .. })
        ));

        assert!(FabricConfiguration::from_json(r#"{"pitch": -3}"#).is_err());
        assert!(FabricConfiguration::from_json(r#"{"warp_colors": []}"#).is_err());
    }

    // Tests the core accepts densities and pitches outside the UI ranges
    // Verified by range-checking epi inside validate
    #[test]
    fn test_core_is_permissive() {
        let config = FabricConfiguration {
            pitch: 500.0,
            epi: 1000.0,
            ppi: -5.0,
            ..FabricConfiguration::default()
        };

        assert!(config.validate().is_ok());
    }

    // Tests the generic positive check and density sanitizer
    // Verified by letting NaN through ensure_positive
    #[test]
    fn test_numeric_helpers() {
        assert!(ensure_positive("pitch", 4.0_f64).is_ok());
        assert!(ensure_positive("pitch", 0.0_f32).is_err());
        assert!(ensure_positive("pitch", f64::NAN).is_err());

        assert!((sanitize_density(90.0_f64) - 90.0).abs() < f64::EPSILON);
        assert!(sanitize_density(-1.0_f64).abs() < f64::EPSILON);
        assert!(sanitize_density(f64::INFINITY).abs() < f64::EPSILON);
    }

    // Tests stripe width scales with zoom
    // Verified by adding instead of multiplying
    #[test]
    fn test_stripe_width() {
        let config = FabricConfiguration {
            pitch: 20.0,
            zoom: 1.5,
            ..FabricConfiguration::default()
        };

        assert!((config.stripe_width() - 30.0).abs() < f64::EPSILON);
    }

    // Tests resolution succeeds for catalog ids and falls back for the weft
    // Verified by resolving the weft from the warp id
    #[test]
    fn test_resolve_catalog_ids() {
        let catalog = Catalog::builtin();
        let config = FabricConfiguration {
            weft_yarn: Some(YarnRef::from("linen_25")),
            ppi: f64::NAN,
            ..FabricConfiguration::default()
        };

        let fabric = config.resolve(catalog).unwrap();
        assert_eq!(fabric.weave.id, DEFAULT_WEAVE_ID);
        assert_eq!(fabric.warp.id(), DEFAULT_YARN_ID);
        assert_eq!(fabric.weft_or_warp().id(), "linen_25");
        assert_eq!(fabric.yarns().count(), 2);
        assert!(fabric.ppi.abs() < f64::EPSILON);
    }

    // Tests unknown references degrade instead of failing
    // Verified by resolving unknown wefts to the warp yarn id lookup
    #[test]
    fn test_resolve_unknown_references() {
        let catalog = Catalog::builtin();

        let unknown_weave = FabricConfiguration {
            weave_id: "moon_weave".to_string(),
            ..FabricConfiguration::default()
        };
        assert!(unknown_weave.resolve(catalog).is_none());

        let unknown_warp = FabricConfiguration {
            warp_yarn: YarnRef::from("ghost"),
            ..FabricConfiguration::default()
        };
        assert!(unknown_warp.resolve(catalog).is_none());

        let unknown_weft = FabricConfiguration {
            weft_yarn: Some(YarnRef::from("ghost")),
            ..FabricConfiguration::default()
        };
        let fabric = unknown_weft.resolve(catalog).unwrap();
        assert!(fabric.weft.is_none());
        assert_eq!(fabric.weft_or_warp().id(), DEFAULT_YARN_ID);
    }

    // Tests inline yarns shadow catalog entries with the same id
    // Verified by looking custom yarns up in the catalog first
    #[test]
    fn test_custom_yarn_shadows_catalog() {
        let custom = YarnSpec::custom(
            DEFAULT_YARN_ID,
            "Shadow",
            20.0,
            vec![FiberShare::new(Fiber::Hemp, 100)],
        )
        .unwrap();
        let config = FabricConfiguration {
            warp_yarn: YarnRef::from(custom),
            ..FabricConfiguration::default()
        };

        let fabric = config.resolve(Catalog::builtin()).unwrap();
        assert_eq!(fabric.warp.name(), "Shadow");
        assert_eq!(fabric.warp.main_fiber(), Some(Fiber::Hemp));
    }

    // Tests JSON yarn references accept ids and inline objects
    // Verified by tagging the YarnRef enum
    #[test]
    fn test_yarn_ref_json() {
        let config = FabricConfiguration::from_json(
            r#"{
                "warp_yarn": "silk_21d",
                "weft_yarn": {
                    "id": "blend",
                    "name": "Blend",
                    "category": "blend",
                    "composition": [
                        {"fiber": "cotton", "percentage": 50},
                        {"fiber": "linen", "percentage": 50}
                    ],
                    "count": {"ne": 30.0}
                }
            }"#,
        )
        .unwrap();

        assert_eq!(config.warp_yarn, YarnRef::Catalog("silk_21d".to_string()));
        assert!(matches!(config.weft_yarn, Some(YarnRef::Custom(_))));

        let bad = r#"{"weft_yarn": {"id": "b", "name": "B", "category": "blend",
            "composition": [{"fiber": "cotton", "percentage": 90}], "count": {"ne": 30.0}}}"#;
        assert!(FabricConfiguration::from_json(bad).is_err());
    }

    // Tests pattern identifiers used in file names
    // Verified by capitalizing the display form
    #[test]
    fn test_pattern_ids() {
        assert_eq!(PatternMode::Solid.to_string(), "solid");
        assert_eq!(PatternMode::Stripe.id(), "stripe");
        assert_eq!(PatternMode::Check.id(), "check");
    }
}
