//! Tests for hex color parsing, palettes and preset swatches

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use weavelab::fabric::color::{Palette, Rgb, SWATCHES};
    use weavelab::io::configuration::MAX_COLORS_PER_SIDE;

    // Tests long and short hex forms with and without the hash
    // Verified by dropping the short-form expansion
    #[test]
    fn test_parse_hex_forms() {
        assert_eq!("#1d3557".parse::<Rgb>().unwrap(), Rgb::new(0x1d, 0x35, 0x57));
        assert_eq!("e76f51".parse::<Rgb>().unwrap(), Rgb::new(0xe7, 0x6f, 0x51));
        assert_eq!("#fff".parse::<Rgb>().unwrap(), Rgb::new(255, 255, 255));
        assert_eq!(" #000 ".parse::<Rgb>().unwrap(), Rgb::new(0, 0, 0));
    }

    // Tests malformed colors are rejected
    // Verified by accepting any length
    #[test]
    fn test_parse_invalid() {
        assert!("#12345".parse::<Rgb>().is_err());
        assert!("#gggggg".parse::<Rgb>().is_err());
        assert!("".parse::<Rgb>().is_err());
    }

    // Tests signs and repeated hashes are not taken as hex digits
    // Verified by handing the digits straight to from_str_radix
    #[test]
    fn test_parse_rejects_non_hex_characters() {
        assert!("#+12345".parse::<Rgb>().is_err());
        assert!("+12345".parse::<Rgb>().is_err());
        assert!("#+ab".parse::<Rgb>().is_err());
        assert!("##123456".parse::<Rgb>().is_err());
        assert!("#12345é".parse::<Rgb>().is_err());
    }

    // Tests Display writes lowercase #rrggbb
    // Verified by omitting zero padding
    #[test]
    fn test_display() {
        assert_eq!(Rgb::new(1, 2, 255).to_string(), "#0102ff");
        assert_eq!(Rgb::new(0x1d, 0x35, 0x57).to_string(), "#1d3557");
    }

    // Tests opacity maps onto the alpha channel
    // Verified by truncating instead of rounding alpha
    #[test]
    fn test_with_opacity() {
        let color = Rgb::new(10, 20, 30);

        assert_eq!(color.opaque().0, [10, 20, 30, 255]);
        assert_eq!(color.with_opacity(0.1).0, [10, 20, 30, 26]);
        assert_eq!(color.with_opacity(2.0).0[3], 255);
    }

    // Tests empty palettes are rejected
    // Verified by removing the empty check in Palette::new
    #[test]
    fn test_palette_non_empty() {
        assert!(Palette::new(Vec::new()).is_err());
        let empty: [&str; 0] = [];
        assert!(Palette::from_hex(&empty).is_err());
        assert!(serde_json::from_str::<Palette>("[]").is_err());
    }

    // Tests stripe colors wrap around the palette
    // Verified by clamping instead of wrapping the index
    #[test]
    fn test_palette_cycle() {
        let palette = Palette::from_hex(&["#ff0000", "#00ff00", "#0000ff"]).unwrap();

        assert_eq!(palette.primary(), Rgb::new(255, 0, 0));
        assert_eq!(palette.cycle(1), Rgb::new(0, 255, 0));
        assert_eq!(palette.cycle(3), Rgb::new(255, 0, 0));
        assert_eq!(palette.cycle(5), Rgb::new(0, 0, 255));
    }

    // Tests random swatches come from the preset table and stop at the limit
    // Verified by removing the side limit
    #[test]
    fn test_push_random_swatch() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut palette = Palette::single(Rgb::new(0, 0, 0));

        while palette.push_random_swatch(&mut rng).is_some() {}

        assert_eq!(palette.len(), MAX_COLORS_PER_SIDE);
        let presets: Vec<Rgb> = SWATCHES.iter().map(|hex| hex.parse().unwrap()).collect();
        assert!(palette.colors().iter().skip(1).all(|c| presets.contains(c)));
    }

    // Tests the same seed draws the same swatches
    // Verified by seeding from entropy in the test helper
    #[test]
    fn test_random_swatch_reproducible() {
        let draw = |seed: u64| {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut palette = Palette::single(Rgb::new(0, 0, 0));
            for _ in 0..3 {
                palette.push_random_swatch(&mut rng);
            }
            palette
        };

        assert_eq!(draw(42), draw(42));
    }

    // Tests remove keeps the last color and set rejects bad indices
    // Verified by allowing removal down to zero colors
    #[test]
    fn test_palette_edit() {
        let mut palette = Palette::from_hex(&["#111111", "#222222"]).unwrap();

        assert_eq!(palette.remove(0), Some(Rgb::new(0x11, 0x11, 0x11)));
        assert_eq!(palette.remove(0), None);
        assert_eq!(palette.len(), 1);

        assert!(palette.set(0, Rgb::new(1, 1, 1)));
        assert!(!palette.set(3, Rgb::new(1, 1, 1)));
        assert_eq!(palette.primary(), Rgb::new(1, 1, 1));
    }

    // Tests palettes serialize as hex string arrays
    // Verified by serializing the channel array
    #[test]
    fn test_palette_serde() {
        let palette: Palette = serde_json::from_str(r##"["#1d3557", "#fff"]"##).unwrap();

        assert_eq!(palette.len(), 2);
        assert_eq!(
            serde_json::to_string(&palette).unwrap(),
            r##"["#1d3557","#ffffff"]"##
        );
    }
}
