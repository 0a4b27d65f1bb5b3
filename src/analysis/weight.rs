//! Areal weight estimation from thread densities and yarn counts
//!
//! The estimate sums the mass of warp and weft laid down per unit area,
//! scales it by a fixed cover factor and the weave's weight modifier, and
//! applies the pile multiplier for pile weaves:
//!
//! ```text
//! base = (epi·tex_warp·0.0254 + ppi·tex_weft·0.0254) · 0.4 · gsm_modifier · pile
//! ```

use crate::catalog::Catalog;
use crate::catalog::weave::WeaveDefinition;
use crate::fabric::config::{FabricConfiguration, ResolvedFabric};
use serde::Serialize;
use std::fmt;

/// Metres per inch
pub const METRES_PER_INCH: f64 = 0.0254;
/// Share of the cloth area actually covered by yarn
pub const COVER_FACTOR: f64 = 0.4;
/// Conversion from g/m² to oz/yd²
pub const OUNCES_PER_GSM: f64 = 0.0295;

/// Named weight class of a fabric
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightBand {
    /// Below 100 g/m²
    ExtraLight,
    /// 100 to 150 g/m²
    Light,
    /// 150 to 200 g/m²
    LightMedium,
    /// 200 to 280 g/m²
    Medium,
    /// 280 to 350 g/m²
    Heavy,
    /// 350 g/m² and above
    ExtraHeavy,
}

impl WeightBand {
    /// Band containing an unrounded weight
    pub fn from_gsm(gsm: f64) -> Self {
        if gsm < 100.0 {
            Self::ExtraLight
        } else if gsm < 150.0 {
            Self::Light
        } else if gsm < 200.0 {
            Self::LightMedium
        } else if gsm < 280.0 {
            Self::Medium
        } else if gsm < 350.0 {
            Self::Heavy
        } else {
            Self::ExtraHeavy
        }
    }

    /// Display name
    pub const fn name(self) -> &'static str {
        match self {
            Self::ExtraLight => "極薄地",
            Self::Light => "薄地",
            Self::LightMedium => "中薄地",
            Self::Medium => "中厚地",
            Self::Heavy => "厚地",
            Self::ExtraHeavy => "極厚地",
        }
    }

    /// Typical fabrics in the band
    pub const fn description(self) -> &'static str {
        match self {
            Self::ExtraLight => "ボイル、オーガンジー級",
            Self::Light => "ブロード、ローン級",
            Self::LightMedium => "一般シャツ地",
            Self::Medium => "オックス、ツイル級",
            Self::Heavy => "デニム、キャンバス級",
            Self::ExtraHeavy => "ヘビーツイル、コート地級",
        }
    }
}

impl fmt::Display for WeightBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.description())
    }
}

/// Estimated areal weight of a fabric
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FabricWeight {
    /// Grams per square metre, rounded
    pub gsm: u32,
    /// Ounces per square yard, rounded
    pub ounce_equivalent: u32,
    /// Unrounded grams per square metre
    pub base_gsm: f64,
    /// Weight class of the unrounded value
    pub band: WeightBand,
}

/// Unrounded weight for explicit densities and linear densities
pub fn base_gsm(weave: &WeaveDefinition, epi: f64, ppi: f64, warp_tex: f64, weft_tex: f64) -> f64 {
    let laid = (epi * warp_tex).mul_add(METRES_PER_INCH, ppi * weft_tex * METRES_PER_INCH);
    let base = laid * COVER_FACTOR * weave.gsm_modifier;
    weave
        .pile
        .map_or(base, |height| base * height.weight_factor())
}

/// Weight of a resolved fabric; the weft defaults to the warp yarn
pub fn estimate_weight(fabric: &ResolvedFabric<'_>) -> FabricWeight {
    let base = base_gsm(
        fabric.weave,
        fabric.epi,
        fabric.ppi,
        fabric.warp.count().tex(),
        fabric.weft_or_warp().count().tex(),
    );

    FabricWeight {
        gsm: base.round() as u32,
        ounce_equivalent: (base * OUNCES_PER_GSM).round() as u32,
        base_gsm: base,
        band: WeightBand::from_gsm(base),
    }
}

/// Weight of a configuration, or `None` when its weave or warp yarn is unknown
#[tracing::instrument(skip(config, catalog), fields(weave = %config.weave_id))]
pub fn fabric_weight(config: &FabricConfiguration, catalog: &Catalog) -> Option<FabricWeight> {
    config
        .resolve(catalog)
        .map(|fabric| estimate_weight(&fabric))
}
