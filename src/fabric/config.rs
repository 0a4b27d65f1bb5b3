//! Fabric configuration and its resolution against a catalog
//!
//! A [`FabricConfiguration`] is a plain value describing one colorway. Every
//! engine takes it by reference and resolves the weave and yarns it names
//! through [`FabricConfiguration::resolve`]; nothing is cached between calls.

use crate::catalog::Catalog;
use crate::catalog::weave::WeaveDefinition;
use crate::catalog::yarn::YarnSpec;
use crate::fabric::color::{Palette, Rgb};
use crate::io::configuration::{
    DEFAULT_EPI, DEFAULT_PITCH, DEFAULT_PPI, DEFAULT_WARP_COLORS, DEFAULT_WEAVE_ID,
    DEFAULT_WEFT_COLORS, DEFAULT_YARN_ID, DEFAULT_ZOOM,
};
use crate::io::error::{Result, invalid_parameter};
use num_traits::Float;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How colors are laid out across the preview
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum PatternMode {
    /// First warp color against first weft color everywhere
    Solid,
    /// Warp colors cycle in vertical stripes; weft stays on its first color
    Stripe,
    /// Warp and weft colors both cycle, forming a plaid
    #[default]
    Check,
}

impl PatternMode {
    /// Stable identifier, also used in export file names
    pub const fn id(self) -> &'static str {
        match self {
            Self::Solid => "solid",
            Self::Stripe => "stripe",
            Self::Check => "check",
        }
    }
}

impl fmt::Display for PatternMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Yarn named by catalog id or given inline
///
/// An inline yarn shadows any catalog entry with the same id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum YarnRef {
    /// Catalog lookup by id
    Catalog(String),
    /// User-defined yarn, already validated
    Custom(Box<YarnSpec>),
}

impl YarnRef {
    /// Resolve the reference, returning `None` for unknown ids
    pub fn resolve<'a>(&'a self, catalog: &'a Catalog) -> Option<&'a YarnSpec> {
        match self {
            Self::Catalog(id) => catalog.yarn(id),
            Self::Custom(yarn) => Some(yarn),
        }
    }

    /// Id of the referenced yarn
    pub fn id(&self) -> &str {
        match self {
            Self::Catalog(id) => id,
            Self::Custom(yarn) => yarn.id(),
        }
    }
}

impl From<YarnSpec> for YarnRef {
    fn from(yarn: YarnSpec) -> Self {
        Self::Custom(Box::new(yarn))
    }
}

impl From<&str> for YarnRef {
    fn from(id: &str) -> Self {
        Self::Catalog(id.to_string())
    }
}

/// Complete description of one colorway
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FabricConfiguration {
    /// Color layout
    pub pattern: PatternMode,
    /// Stripe width in logical pixels at zoom 1
    pub pitch: f64,
    /// Magnification applied to the pitch
    pub zoom: f64,
    /// Warp yarn colors in stripe order
    pub warp_colors: Palette,
    /// Weft yarn colors in stripe order
    pub weft_colors: Palette,
    /// Warp ends per inch
    pub epi: f64,
    /// Weft picks per inch
    pub ppi: f64,
    /// Catalog id of the weave
    pub weave_id: String,
    /// Warp yarn
    pub warp_yarn: YarnRef,
    /// Weft yarn; the warp yarn stands in when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weft_yarn: Option<YarnRef>,
}

fn default_palette(colors: &[&str]) -> Palette {
    Palette::from_hex(colors).unwrap_or_else(|_| Palette::single(Rgb::new(0, 0, 0)))
}

impl Default for FabricConfiguration {
    fn default() -> Self {
        Self {
            pattern: PatternMode::default(),
            pitch: DEFAULT_PITCH,
            zoom: DEFAULT_ZOOM,
            warp_colors: default_palette(&DEFAULT_WARP_COLORS),
            weft_colors: default_palette(&DEFAULT_WEFT_COLORS),
            epi: DEFAULT_EPI,
            ppi: DEFAULT_PPI,
            weave_id: DEFAULT_WEAVE_ID.to_string(),
            warp_yarn: YarnRef::from(DEFAULT_YARN_ID),
            weft_yarn: None,
        }
    }
}

/// Reject values that are not strictly positive and finite
///
/// # Errors
///
/// Returns an invalid configuration error naming `parameter`
pub fn ensure_positive<T: Float + fmt::Display>(parameter: &'static str, value: T) -> Result<T> {
    if value.is_finite() && value > T::zero() {
        Ok(value)
    } else {
        Err(invalid_parameter(parameter, &value, &"must be a positive number"))
    }
}

/// Clamp densities that cannot describe a real cloth to zero
pub fn sanitize_density<T: Float>(value: T) -> T {
    if value.is_finite() && value > T::zero() {
        value
    } else {
        T::zero()
    }
}

impl FabricConfiguration {
    /// Parse a configuration from JSON; missing fields take their defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the document is malformed, a color is not hex, a
    /// palette is empty, an inline yarn is invalid, or [`Self::validate`] fails
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the few values the core cannot work with
    ///
    /// Densities and palette lengths are not range-checked here.
    ///
    /// # Errors
    ///
    /// Returns an error if pitch or zoom is not a positive finite number or a
    /// palette is empty
    pub fn validate(&self) -> Result<()> {
        ensure_positive("pitch", self.pitch)?;
        ensure_positive("zoom", self.zoom)?;
        if self.warp_colors.is_empty() {
            return Err(invalid_parameter("warp_colors", &"[]", &"at least one color is required"));
        }
        if self.weft_colors.is_empty() {
            return Err(invalid_parameter("weft_colors", &"[]", &"at least one color is required"));
        }
        Ok(())
    }

    /// Stripe width in pixels after zoom
    pub fn stripe_width(&self) -> f64 {
        self.pitch * self.zoom
    }

    /// Resolve the weave and yarns against `catalog`
    ///
    /// Returns `None` when the weave or the warp yarn is unknown. An unknown
    /// weft yarn resolves to `None` in [`ResolvedFabric::weft`].
    pub fn resolve<'a>(&'a self, catalog: &'a Catalog) -> Option<ResolvedFabric<'a>> {
        let Some(weave) = catalog.weave(&self.weave_id) else {
            tracing::debug!(weave_id = %self.weave_id, "weave not in catalog");
            return None;
        };
        let Some(warp) = self.warp_yarn.resolve(catalog) else {
            tracing::debug!(yarn_id = %self.warp_yarn.id(), "warp yarn not in catalog");
            return None;
        };
        let weft = self.weft_yarn.as_ref().and_then(|weft| {
            let resolved = weft.resolve(catalog);
            if resolved.is_none() {
                tracing::debug!(yarn_id = %weft.id(), "weft yarn not in catalog");
            }
            resolved
        });

        Some(ResolvedFabric {
            weave,
            warp,
            weft,
            epi: sanitize_density(self.epi),
            ppi: sanitize_density(self.ppi),
        })
    }
}

/// Weave, yarns and densities of a configuration after catalog lookup
#[derive(Debug, Clone, Copy)]
pub struct ResolvedFabric<'a> {
    /// Weave structure
    pub weave: &'a WeaveDefinition,
    /// Warp yarn
    pub warp: &'a YarnSpec,
    /// Weft yarn, when one was named and found
    pub weft: Option<&'a YarnSpec>,
    /// Warp density, zero when the configured value was unusable
    pub epi: f64,
    /// Weft density, zero when the configured value was unusable
    pub ppi: f64,
}

impl<'a> ResolvedFabric<'a> {
    /// Weft yarn, falling back to the warp yarn
    pub fn weft_or_warp(&self) -> &'a YarnSpec {
        self.weft.unwrap_or(self.warp)
    }

    /// Warp yarn followed by the weft yarn when present
    pub fn yarns(&self) -> impl Iterator<Item = &'a YarnSpec> {
        std::iter::once(self.warp).chain(self.weft)
    }
}
