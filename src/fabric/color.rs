//! RGB colors, palettes and the preset swatch table
//!
//! Colors travel as `#rrggbb` strings in configuration files and as packed
//! bytes everywhere else. A [`Palette`] is the ordered list of yarn colors on
//! one side of the colorway and is never empty.

use crate::io::configuration::MAX_COLORS_PER_SIDE;
use crate::io::error::{FabricError, Result, invalid_parameter};
use image::Rgba;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Preset swatches offered when a color is added without an explicit value
pub const SWATCHES: [&str; 30] = [
    "#000000", "#ffffff", "#c1121f", "#2a6f97", "#1d3557", "#457b9d", "#e9c46a", "#f4a261",
    "#e76f51", "#264653", "#4f772d", "#90a955", "#8a5a44", "#6a4c93", "#b5179e", "#7209b7",
    "#560bad", "#480ca8", "#3a0ca3", "#4361ee", "#4895ef", "#4cc9f0", "#118ab2", "#06d6a0",
    "#ffd166", "#ef476f", "#073b4c", "#f72585", "#3a5a40", "#bc6c25",
];

/// Opaque 24-bit color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb(pub [u8; 3]);

impl Rgb {
    /// Build a color from its channels
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    /// Red channel
    pub const fn r(self) -> u8 {
        self.0[0]
    }

    /// Green channel
    pub const fn g(self) -> u8 {
        self.0[1]
    }

    /// Blue channel
    pub const fn b(self) -> u8 {
        self.0[2]
    }

    /// Fully opaque RGBA pixel
    pub const fn opaque(self) -> Rgba<u8> {
        Rgba([self.0[0], self.0[1], self.0[2], 255])
    }

    /// RGBA pixel with the given opacity in `0.0..=1.0`
    pub fn with_opacity(self, opacity: f64) -> Rgba<u8> {
        let alpha = (opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
        Rgba([self.0[0], self.0[1], self.0[2], alpha])
    }
}

impl FromStr for Rgb {
    type Err = FabricError;

    /// Parse `#rgb` or `#rrggbb`, with or without the leading `#`
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid_parameter("color", &s, &"expected hex digits"));
        }
        let expanded: String = match digits.len() {
            3 => digits.chars().flat_map(|c| [c, c]).collect(),
            6 => digits.to_string(),
            _ => {
                return Err(invalid_parameter(
                    "color",
                    &s,
                    &"expected #rgb or #rrggbb",
                ));
            }
        };

        let packed = u32::from_str_radix(&expanded, 16)
            .map_err(|e| invalid_parameter("color", &s, &e))?;

        Ok(Self([
            ((packed >> 16) & 0xff) as u8,
            ((packed >> 8) & 0xff) as u8,
            (packed & 0xff) as u8,
        ]))
    }
}

impl TryFrom<String> for Rgb {
    type Error = FabricError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Rgb> for String {
    fn from(color: Rgb) -> Self {
        color.to_string()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0[0], self.0[1], self.0[2])
    }
}

/// Ordered yarn colors for one side of the colorway
///
/// Construction rejects empty lists. Lists longer than
/// [`MAX_COLORS_PER_SIDE`] are accepted; the limit belongs to the
/// presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Rgb>", into = "Vec<Rgb>")]
pub struct Palette(Vec<Rgb>);

impl Palette {
    /// Create a palette from a list of colors
    ///
    /// # Errors
    ///
    /// Returns an error if `colors` is empty
    pub fn new(colors: Vec<Rgb>) -> Result<Self> {
        if colors.is_empty() {
            return Err(invalid_parameter(
                "palette",
                &"[]",
                &"at least one color is required",
            ));
        }
        Ok(Self(colors))
    }

    /// Parse a palette from hex strings
    ///
    /// # Errors
    ///
    /// Returns an error if any entry is not a hex color or the list is empty
    pub fn from_hex<S: AsRef<str>>(colors: &[S]) -> Result<Self> {
        let parsed = colors
            .iter()
            .map(|c| c.as_ref().parse())
            .collect::<Result<Vec<Rgb>>>()?;
        Self::new(parsed)
    }

    /// Single-color palette
    pub fn single(color: Rgb) -> Self {
        Self(vec![color])
    }

    /// First color, used for solid weaves and the stripe weft
    pub fn primary(&self) -> Rgb {
        // Non-empty by construction
        self.0.first().copied().unwrap_or(Rgb::new(0, 0, 0))
    }

    /// Color of the stripe at `index`, wrapping around the palette
    pub fn cycle(&self, index: usize) -> Rgb {
        self.0
            .get(index % self.0.len().max(1))
            .copied()
            .unwrap_or_else(|| self.primary())
    }

    /// Number of colors
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; kept for API symmetry with collections
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Colors in stripe order
    pub fn colors(&self) -> &[Rgb] {
        &self.0
    }

    /// Append a random preset swatch unless the side is already full
    ///
    /// Returns the added color, or `None` when [`MAX_COLORS_PER_SIDE`] is reached.
    pub fn push_random_swatch<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Rgb> {
        if self.0.len() >= MAX_COLORS_PER_SIDE {
            return None;
        }
        let pick = rng.random_range(0..SWATCHES.len());
        let color = SWATCHES.get(pick).and_then(|hex| hex.parse().ok())?;
        self.0.push(color);
        Some(color)
    }

    /// Remove the color at `index`, keeping at least one color
    ///
    /// Returns the removed color when something was removed.
    pub fn remove(&mut self, index: usize) -> Option<Rgb> {
        if self.0.len() <= 1 || index >= self.0.len() {
            return None;
        }
        Some(self.0.remove(index))
    }

    /// Replace the color at `index`
    ///
    /// Returns false when `index` is out of range.
    pub fn set(&mut self, index: usize, color: Rgb) -> bool {
        self.0.get_mut(index).is_some_and(|slot| {
            *slot = color;
            true
        })
    }
}

impl TryFrom<Vec<Rgb>> for Palette {
    type Error = FabricError;

    fn try_from(value: Vec<Rgb>) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Palette> for Vec<Rgb> {
    fn from(palette: Palette) -> Self {
        palette.0
    }
}
