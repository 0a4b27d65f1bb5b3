//! Tests for areal weight estimation and weight bands

#[cfg(test)]
mod tests {
    use weavelab::analysis::weight::{
        COVER_FACTOR, METRES_PER_INCH, WeightBand, base_gsm, estimate_weight, fabric_weight,
    };
    use weavelab::catalog::Catalog;
    use weavelab::catalog::yarn::NE_TEX_FACTOR;
    use weavelab::fabric::config::{FabricConfiguration, ResolvedFabric, YarnRef};

    fn configuration(weave: &str, warp: &str, epi: f64, ppi: f64) -> FabricConfiguration {
        FabricConfiguration {
            weave_id: weave.to_string(),
            warp_yarn: YarnRef::from(warp),
            epi,
            ppi,
            ..FabricConfiguration::default()
        }
    }

    // Tests plain cotton Ne40 at 110/90 lands at about 30 g/m²
    // Verified by dropping the cover factor
    #[test]
    fn test_plain_cotton_weight() {
        let catalog = Catalog::builtin();
        let config = configuration("plain", "cotton_combed_40", 110.0, 90.0);
        let weight = fabric_weight(&config, catalog).unwrap();

        let tex = NE_TEX_FACTOR / 40.0;
        let expected = 200.0 * tex * METRES_PER_INCH * COVER_FACTOR;
        assert!((weight.base_gsm - expected).abs() < 1e-9);
        assert_eq!(weight.gsm, 30);
        assert_eq!(weight.ounce_equivalent, 1);
        assert_eq!(weight.band, WeightBand::ExtraLight);
    }

    // Tests band boundaries fall on the lower edge of each band
    // Verified by using <= instead of <
    #[test]
    fn test_band_boundaries() {
        assert_eq!(WeightBand::from_gsm(0.0), WeightBand::ExtraLight);
        assert_eq!(WeightBand::from_gsm(99.9), WeightBand::ExtraLight);
        assert_eq!(WeightBand::from_gsm(100.0), WeightBand::Light);
        assert_eq!(WeightBand::from_gsm(150.0), WeightBand::LightMedium);
        assert_eq!(WeightBand::from_gsm(199.99), WeightBand::LightMedium);
        assert_eq!(WeightBand::from_gsm(200.0), WeightBand::Medium);
        assert_eq!(WeightBand::from_gsm(280.0), WeightBand::Heavy);
        assert_eq!(WeightBand::from_gsm(350.0), WeightBand::ExtraHeavy);
        assert_eq!(WeightBand::from_gsm(1_000.0), WeightBand::ExtraHeavy);
    }

    // Tests band labels carry the name and typical fabrics
    // Verified by displaying only the name
    #[test]
    fn test_band_display() {
        assert_eq!(WeightBand::Heavy.to_string(), "厚地 (デニム、キャンバス級)");
        assert_eq!(WeightBand::ExtraLight.name(), "極薄地");
    }

    // Tests the band is taken from the unrounded weight
    // Verified by classifying the rounded gsm
    #[test]
    fn test_band_uses_unrounded_weight() {
        let catalog = Catalog::builtin();
        let plain = catalog.weave("plain").unwrap();
        let tex = NE_TEX_FACTOR / 40.0;
        // Solve for a density putting the base just under 100
        let epi = 99.7 / (2.0 * tex * METRES_PER_INCH * COVER_FACTOR);
        let base = base_gsm(plain, epi, epi, tex, tex);
        assert!(base < 100.0 && base.round() >= 100.0);

        let config = configuration("plain", "cotton_combed_40", epi, epi);
        let weight = fabric_weight(&config, catalog).unwrap();
        assert_eq!(weight.gsm, 100);
        assert_eq!(weight.band, WeightBand::ExtraLight);
    }

    // Tests pile weaves apply their height factor on top of the base
    // Verified by skipping the pile multiplier
    #[test]
    fn test_pile_factors() {
        let catalog = Catalog::builtin();
        for (id, factor) in [("velvet", 1.3), ("corduroy", 1.5), ("terry", 1.4)] {
            let pile = catalog.weave(id).unwrap();
            let mut flat = pile.clone();
            flat.pile = None;

            let with_pile = base_gsm(pile, 100.0, 80.0, 15.0, 20.0);
            let without_pile = base_gsm(&flat, 100.0, 80.0, 15.0, 20.0);
            assert!((with_pile - without_pile * factor).abs() < 1e-9, "{id}");
        }
    }

    // Tests weight grows with every density and linear density input
    // Verified by swapping the warp and weft terms
    #[test]
    fn test_weight_monotonic() {
        let catalog = Catalog::builtin();
        let twill = catalog.weave("twill_2_1").unwrap();
        let reference = base_gsm(twill, 100.0, 80.0, 15.0, 15.0);

        assert!(base_gsm(twill, 120.0, 80.0, 15.0, 15.0) > reference);
        assert!(base_gsm(twill, 100.0, 90.0, 15.0, 15.0) > reference);
        assert!(base_gsm(twill, 100.0, 80.0, 20.0, 15.0) > reference);
        assert!(base_gsm(twill, 100.0, 80.0, 15.0, 20.0) > reference);
    }

    // Tests the weft falls back to the warp yarn when absent
    // Verified by using a zero weft tex when the weft is missing
    #[test]
    fn test_weft_defaults_to_warp() {
        let catalog = Catalog::builtin();
        let without_weft = configuration("plain", "cotton_combed_40", 110.0, 90.0);
        let mut with_weft = without_weft.clone();
        with_weft.weft_yarn = Some(YarnRef::from("cotton_combed_40"));

        assert_eq!(
            fabric_weight(&without_weft, catalog),
            fabric_weight(&with_weft, catalog)
        );

        let mut coarse_weft = without_weft.clone();
        coarse_weft.weft_yarn = Some(YarnRef::from("cotton_carded_20"));
        let heavier = fabric_weight(&coarse_weft, catalog).unwrap();
        let lighter = fabric_weight(&without_weft, catalog).unwrap();
        assert!(heavier.base_gsm > lighter.base_gsm);
    }

    // Tests zero densities give a zero weight rather than an error
    // Verified by rejecting zero densities
    #[test]
    fn test_zero_density() {
        let catalog = Catalog::builtin();
        let fabric = ResolvedFabric {
            weave: catalog.weave("plain").unwrap(),
            warp: catalog.yarn("cotton_combed_40").unwrap(),
            weft: None,
            epi: 0.0,
            ppi: 0.0,
        };
        let weight = estimate_weight(&fabric);

        assert_eq!(weight.gsm, 0);
        assert_eq!(weight.band, WeightBand::ExtraLight);
    }

    // Tests unknown weave or warp ids give no weight
    // Verified by substituting a default weave
    #[test]
    fn test_unknown_references() {
        let catalog = Catalog::builtin();
        let unknown_weave = configuration("no_such_weave", "cotton_combed_40", 110.0, 90.0);
        assert!(fabric_weight(&unknown_weave, catalog).is_none());

        let unknown_yarn = configuration("plain", "no_such_yarn", 110.0, 90.0);
        assert!(fabric_weight(&unknown_yarn, catalog).is_none());
    }
}
