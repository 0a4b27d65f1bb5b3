//! Tests for yarn construction, counts and composition validation

#[cfg(test)]
mod tests {
    use weavelab::FabricError;
    use weavelab::catalog::yarn::{
        Certification, FALLBACK_NE, Fiber, FiberShare, NE_TEX_FACTOR, SpecialProperty,
        YarnCategory, YarnCount, YarnSpec,
    };

    // Tests a composition summing to 100 is accepted
    // Verified by requiring the total to be 90
    #[test]
    fn test_custom_composition_accepted() {
        let yarn = YarnSpec::custom(
            "my_blend",
            "My Blend",
            40.0,
            vec![
                FiberShare::new(Fiber::Cotton, 60),
                FiberShare::new(Fiber::Polyester, 40),
            ],
        )
        .unwrap();

        assert_eq!(yarn.category(), YarnCategory::Blend);
        assert_eq!(yarn.main_fiber(), Some(Fiber::Cotton));
        assert_eq!(yarn.composition_label(), "cotton 60% / polyester 40%");
    }

    // Tests a composition summing to 90 is rejected with the actual total
    // Verified by removing the composition check
    #[test]
    fn test_custom_composition_rejected() {
        let result = YarnSpec::custom(
            "short_blend",
            "Short Blend",
            40.0,
            vec![
                FiberShare::new(Fiber::Cotton, 50),
                FiberShare::new(Fiber::Polyester, 40),
            ],
        );

        assert!(matches!(
            result,
            Err(FabricError::InvalidComposition { total: 90, .. })
        ));
    }

    // Tests blank names, missing counts and zero price are rejected
    // Verified by skipping the count check
    #[test]
    fn test_builder_rejections() {
        let blank_name = YarnSpec::builder("a", " ", YarnCategory::Cotton)
            .fiber(Fiber::Cotton, 100)
            .ne(40.0)
            .build();
        assert!(matches!(blank_name, Err(FabricError::InvalidYarn { .. })));

        let no_count = YarnSpec::builder("b", "B", YarnCategory::Cotton)
            .fiber(Fiber::Cotton, 100)
            .build();
        assert!(matches!(no_count, Err(FabricError::InvalidYarn { .. })));

        let free = YarnSpec::builder("c", "C", YarnCategory::Cotton)
            .fiber(Fiber::Cotton, 100)
            .ne(40.0)
            .price_level(0)
            .build();
        assert!(matches!(free, Err(FabricError::InvalidYarn { .. })));
    }

    // Tests Ne and tex derive from each other
    // Verified by multiplying instead of dividing by the factor
    #[test]
    fn test_count_conversion() {
        let from_ne = YarnCount::from_ne(40.0);
        assert!((from_ne.tex() - NE_TEX_FACTOR / 40.0).abs() < 1e-9);
        assert!((from_ne.ne() - 40.0).abs() < 1e-9);

        let from_tex = YarnCount::from_tex(NE_TEX_FACTOR / 80.0);
        assert!((from_tex.ne() - 80.0).abs() < 1e-9);
    }

    // Tests unusable counts fall back to the default Ne
    // Verified by returning zero from ne() for empty counts
    #[test]
    fn test_count_fallback() {
        let empty = YarnCount::default();

        assert!(!empty.is_specified());
        assert!((empty.ne() - FALLBACK_NE).abs() < f64::EPSILON);
        assert!((empty.tex() - NE_TEX_FACTOR / FALLBACK_NE).abs() < 1e-9);

        let negative = YarnCount {
            ne: Some(-5.0),
            tex: None,
        };
        assert!(!negative.is_specified());
    }

    // Tests builder attributes are reflected by the getters
    // Verified by dropping certifications in build
    #[test]
    fn test_builder_attributes() {
        let yarn = YarnSpec::builder("eco", "Eco", YarnCategory::Cotton)
            .organic_fiber(Fiber::Cotton, 100)
            .ne(60.0)
            .price_level(4)
            .certification(Certification::Gots)
            .special_property(SpecialProperty::QuickDry)
            .risk("lot variation")
            .brand_name("EcoSpin")
            .build()
            .unwrap();

        assert!(yarn.has_organic_fiber());
        assert!(yarn.contains_fiber(Fiber::Cotton));
        assert!(!yarn.contains_fiber(Fiber::Silk));
        assert!(yarn.certifications().contains(&Certification::Gots));
        assert!(yarn.has_property(SpecialProperty::QuickDry));
        assert_eq!(yarn.risks(), ["lot variation".to_string()]);
        assert_eq!(yarn.brand_name(), Some("EcoSpin"));
        assert_eq!(yarn.price_level(), 4);
    }

    // Tests deserialization applies the same validation as the builder
    // Verified by deriving Deserialize directly on YarnSpec
    #[test]
    fn test_deserialize_validates() {
        let valid = r#"{
            "id": "json_yarn",
            "name": "JSON Yarn",
            "category": "cotton",
            "composition": [{"fiber": "cotton", "percentage": 100}],
            "count": {"ne": 40.0},
            "certifications": ["OEKO-TEX"]
        }"#;
        let yarn: YarnSpec = serde_json::from_str(valid).unwrap();
        assert_eq!(yarn.id(), "json_yarn");
        assert_eq!(yarn.price_level(), 3);
        assert!(yarn.certifications().contains(&Certification::OekoTex));

        let invalid = r#"{
            "id": "bad",
            "name": "Bad",
            "category": "cotton",
            "composition": [{"fiber": "cotton", "percentage": 90}],
            "count": {"ne": 40.0}
        }"#;
        assert!(serde_json::from_str::<YarnSpec>(invalid).is_err());
    }

    // Tests fibre tables used by the selling point engine
    // Verified by giving hemp a keyword
    #[test]
    fn test_fiber_tables() {
        assert_eq!(Fiber::Silk.keyword(), Some("シルク"));
        assert_eq!(Fiber::Hemp.keyword(), None);
        assert!(Fiber::Cotton.copy_lead().is_some());
        assert!(Fiber::Polyester.copy_lead().is_none());
        assert!(Fiber::Lyocell.is_regenerated_cellulose());
        assert!(!Fiber::Cotton.is_regenerated_cellulose());
        assert!(YarnCategory::Linen.is_natural());
        assert!(!YarnCategory::Synthetic.is_natural());
    }
}
