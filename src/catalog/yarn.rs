//! Yarn specifications and their construction rules
//!
//! A [`YarnSpec`] can only be obtained through [`YarnSpecBuilder::build`],
//! [`YarnSpec::custom`] or deserialization, all of which enforce that the
//! fibre composition sums to exactly 100%.

use crate::catalog::weave::ColorRequirement;
use crate::io::error::{FabricError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Conversion constant between English cotton count and tex
pub const NE_TEX_FACTOR: f64 = 590.5;

/// Count assumed when a yarn carries no usable count at all
pub const FALLBACK_NE: f64 = 30.0;

/// Fibre class used to group yarns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum YarnCategory {
    /// Cotton yarns
    Cotton,
    /// Flax and other bast yarns
    Linen,
    /// Animal hair yarns
    Wool,
    /// Silk yarns
    Silk,
    /// Petrochemical filament and staple yarns
    Synthetic,
    /// Regenerated cellulose yarns
    Regenerated,
    /// Intimate blends of several fibres
    Blend,
    /// Branded performance yarns
    Functional,
}

impl YarnCategory {
    /// Every category in catalog order
    pub const ALL: [Self; 8] = [
        Self::Cotton,
        Self::Linen,
        Self::Wool,
        Self::Silk,
        Self::Synthetic,
        Self::Regenerated,
        Self::Blend,
        Self::Functional,
    ];

    /// Stable identifier
    pub const fn id(self) -> &'static str {
        match self {
            Self::Cotton => "cotton",
            Self::Linen => "linen",
            Self::Wool => "wool",
            Self::Silk => "silk",
            Self::Synthetic => "synthetic",
            Self::Regenerated => "regenerated",
            Self::Blend => "blend",
            Self::Functional => "functional",
        }
    }

    /// Look a category up by its identifier
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.id() == id)
    }

    /// Whether the class is a natural fibre
    pub const fn is_natural(self) -> bool {
        matches!(self, Self::Cotton | Self::Linen | Self::Wool | Self::Silk)
    }
}

impl fmt::Display for YarnCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Fibre appearing in a yarn composition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Fiber {
    /// Cotton
    Cotton,
    /// Flax linen
    Linen,
    /// Hemp
    Hemp,
    /// Sheep wool
    Wool,
    /// Merino wool
    MerinoWool,
    /// Cashmere
    Cashmere,
    /// Silk
    Silk,
    /// Polyester
    Polyester,
    /// Polyamide
    Nylon,
    /// Acrylic
    Acrylic,
    /// Viscose rayon
    Viscose,
    /// Modal
    Modal,
    /// Lyocell (Tencel)
    Lyocell,
    /// Cuprammonium rayon
    Cupro,
    /// Elastane
    Spandex,
}

impl Fiber {
    /// Stable identifier
    pub const fn id(self) -> &'static str {
        match self {
            Self::Cotton => "cotton",
            Self::Linen => "linen",
            Self::Hemp => "hemp",
            Self::Wool => "wool",
            Self::MerinoWool => "merino_wool",
            Self::Cashmere => "cashmere",
            Self::Silk => "silk",
            Self::Polyester => "polyester",
            Self::Nylon => "nylon",
            Self::Acrylic => "acrylic",
            Self::Viscose => "viscose",
            Self::Modal => "modal",
            Self::Lyocell => "lyocell",
            Self::Cupro => "cupro",
            Self::Spandex => "spandex",
        }
    }

    /// Marketing keyword for the fibre, when it has one
    pub const fn keyword(self) -> Option<&'static str> {
        match self {
            Self::Cotton => Some("コットン"),
            Self::Linen => Some("リネン"),
            Self::Wool => Some("ウール"),
            Self::Silk => Some("シルク"),
            Self::Polyester => Some("ポリエステル"),
            Self::Nylon => Some("ナイロン"),
            Self::Viscose => Some("レーヨン"),
            Self::Modal => Some("モダール"),
            Self::Lyocell => Some("テンセル"),
            Self::Cashmere => Some("カシミヤ"),
            Self::MerinoWool => Some("メリノウール"),
            Self::Spandex => Some("ストレッチ"),
            Self::Hemp | Self::Acrylic | Self::Cupro => None,
        }
    }

    /// Opening sentence of the marketing copy when this is the main fibre
    pub const fn copy_lead(self) -> Option<&'static str> {
        match self {
            Self::Silk => Some("贅沢なシルクの輝きをまとう"),
            Self::Cashmere => Some("極上のカシミヤに包まれる喜び"),
            Self::MerinoWool => Some("メリノウールの上質な柔らかさ"),
            Self::Cotton => Some("コットンの心地よさを日常に"),
            Self::Linen => Some("リネンの涼やかな風合い"),
            _ => None,
        }
    }

    /// Whether the fibre is a regenerated cellulose prone to wash shrinkage
    pub const fn is_regenerated_cellulose(self) -> bool {
        matches!(self, Self::Viscose | Self::Modal | Self::Lyocell | Self::Cupro)
    }
}

/// One fibre's share of a yarn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FiberShare {
    /// Fibre
    pub fiber: Fiber,
    /// Whole-number percentage of the blend
    pub percentage: u8,
    /// Certified organic origin
    #[serde(default)]
    pub organic: bool,
}

impl FiberShare {
    /// Conventional fibre share
    pub const fn new(fiber: Fiber, percentage: u8) -> Self {
        Self {
            fiber,
            percentage,
            organic: false,
        }
    }

    /// Organic fibre share
    pub const fn organic(fiber: Fiber, percentage: u8) -> Self {
        Self {
            fiber,
            percentage,
            organic: true,
        }
    }
}

/// Yarn count in English cotton count and/or tex
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct YarnCount {
    /// English cotton count
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ne: Option<f64>,
    /// Grams per kilometre
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tex: Option<f64>,
}

fn positive(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v > 0.0)
}

impl YarnCount {
    /// Count given in Ne, with tex derived
    pub fn from_ne(ne: f64) -> Self {
        Self {
            ne: Some(ne),
            tex: Some(NE_TEX_FACTOR / ne),
        }
    }

    /// Count given in tex only
    pub const fn from_tex(tex: f64) -> Self {
        Self {
            ne: None,
            tex: Some(tex),
        }
    }

    /// Whether at least one positive count is present
    pub fn is_specified(&self) -> bool {
        positive(self.ne).is_some() || positive(self.tex).is_some()
    }

    /// English cotton count, derived from tex when only tex is recorded
    pub fn ne(&self) -> f64 {
        positive(self.ne)
            .or_else(|| positive(self.tex).map(|tex| NE_TEX_FACTOR / tex))
            .unwrap_or(FALLBACK_NE)
    }

    /// Linear density in tex, derived from Ne when only Ne is recorded
    pub fn tex(&self) -> f64 {
        positive(self.tex)
            .or_else(|| positive(self.ne).map(|ne| NE_TEX_FACTOR / ne))
            .unwrap_or(NE_TEX_FACTOR / FALLBACK_NE)
    }
}

/// Qualitative traits of a yarn, each scored 0–5
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YarnCharacteristics {
    /// Tensile strength
    pub strength: u8,
    /// Hand feel
    pub softness: u8,
    /// Luster
    pub luster: u8,
    /// Stretch and recovery
    pub elasticity: u8,
    /// Moisture absorbency
    pub absorbency: u8,
    /// Abrasion resistance
    pub durability: u8,
}

impl Default for YarnCharacteristics {
    fn default() -> Self {
        Self {
            strength: 3,
            softness: 3,
            luster: 3,
            elasticity: 3,
            absorbency: 3,
            durability: 3,
        }
    }
}

/// Sustainability or safety certification held by a yarn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Certification {
    /// Global Organic Textile Standard
    #[serde(rename = "GOTS")]
    Gots,
    /// Organic Content Standard
    #[serde(rename = "OCS")]
    Ocs,
    /// Global Recycled Standard
    #[serde(rename = "GRS")]
    Grs,
    /// Forest Stewardship Council
    #[serde(rename = "FSC")]
    Fsc,
    /// OEKO-TEX Standard 100
    #[serde(rename = "OEKO-TEX")]
    OekoTex,
    /// Better Cotton Initiative
    #[serde(rename = "BCI")]
    Bci,
}

/// Performance property advertised by a yarn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecialProperty {
    /// Dries quickly after wetting
    QuickDry,
    /// Moves sweat away from the skin
    MoistureWicking,
    /// Thermal insulation
    Insulation,
    /// Buffers body temperature
    TemperatureRegulation,
    /// Suppresses bacterial growth
    Antibacterial,
    /// Blocks ultraviolet light
    UvProtection,
}

/// Immutable yarn specification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "YarnRecord", into = "YarnRecord")]
pub struct YarnSpec {
    id: String,
    name: String,
    category: YarnCategory,
    composition: Vec<FiberShare>,
    count: YarnCount,
    characteristics: YarnCharacteristics,
    price_level: u8,
    certifications: BTreeSet<Certification>,
    special_properties: BTreeSet<SpecialProperty>,
    risks: Vec<String>,
    brand_name: Option<String>,
    blend_advantages: Vec<String>,
    color_requirement: Option<ColorRequirement>,
}

impl YarnSpec {
    /// Start building a yarn
    pub fn builder(
        id: impl Into<String>,
        name: impl Into<String>,
        category: YarnCategory,
    ) -> YarnSpecBuilder {
        YarnSpecBuilder::new(id, name, category)
    }

    /// User-defined blend with neutral characteristics and price
    ///
    /// # Errors
    ///
    /// Returns an error if the name is blank, `ne` is not positive or the
    /// composition does not sum to 100%
    pub fn custom(
        id: impl Into<String>,
        name: impl Into<String>,
        ne: f64,
        composition: Vec<FiberShare>,
    ) -> Result<Self> {
        Self::builder(id, name, YarnCategory::Blend)
            .composition(composition)
            .count(YarnCount::from_ne(ne))
            .build()
    }

    /// Catalog id
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Fibre class
    pub const fn category(&self) -> YarnCategory {
        self.category
    }

    /// Fibre composition in declaration order
    pub fn composition(&self) -> &[FiberShare] {
        &self.composition
    }

    /// First declared fibre
    pub fn main_fiber(&self) -> Option<Fiber> {
        self.composition.first().map(|share| share.fiber)
    }

    /// Whether the composition contains `fiber`
    pub fn contains_fiber(&self, fiber: Fiber) -> bool {
        self.composition.iter().any(|share| share.fiber == fiber)
    }

    /// Whether any share is organic
    pub fn has_organic_fiber(&self) -> bool {
        self.composition.iter().any(|share| share.organic)
    }

    /// Yarn count
    pub const fn count(&self) -> YarnCount {
        self.count
    }

    /// Qualitative traits
    pub const fn characteristics(&self) -> YarnCharacteristics {
        self.characteristics
    }

    /// Relative price, 1 (commodity) and up
    pub const fn price_level(&self) -> u8 {
        self.price_level
    }

    /// Held certifications
    pub const fn certifications(&self) -> &BTreeSet<Certification> {
        &self.certifications
    }

    /// Advertised performance properties
    pub const fn special_properties(&self) -> &BTreeSet<SpecialProperty> {
        &self.special_properties
    }

    /// Whether the yarn advertises `property`
    pub fn has_property(&self, property: SpecialProperty) -> bool {
        self.special_properties.contains(&property)
    }

    /// Known production risks, as free text
    pub fn risks(&self) -> &[String] {
        &self.risks
    }

    /// Trade name of a branded yarn
    pub fn brand_name(&self) -> Option<&str> {
        self.brand_name.as_deref()
    }

    /// Selling arguments of a blend
    pub fn blend_advantages(&self) -> &[String] {
        &self.blend_advantages
    }

    /// Dyeing constraint
    pub const fn color_requirement(&self) -> Option<ColorRequirement> {
        self.color_requirement
    }

    /// Composition rendered as `"cotton 60% / polyester 40%"`
    pub fn composition_label(&self) -> String {
        self.composition
            .iter()
            .map(|share| format!("{} {}%", share.fiber.id(), share.percentage))
            .collect::<Vec<_>>()
            .join(" / ")
    }
}

/// Step-by-step construction of a [`YarnSpec`]
#[derive(Debug, Clone)]
pub struct YarnSpecBuilder {
    record: YarnRecord,
}

impl YarnSpecBuilder {
    /// Start with neutral characteristics, price level 3 and no count
    pub fn new(id: impl Into<String>, name: impl Into<String>, category: YarnCategory) -> Self {
        Self {
            record: YarnRecord {
                id: id.into(),
                name: name.into(),
                category,
                composition: Vec::new(),
                count: YarnCount::default(),
                characteristics: YarnCharacteristics::default(),
                price_level: 3,
                certifications: BTreeSet::new(),
                special_properties: BTreeSet::new(),
                risks: Vec::new(),
                brand_name: None,
                blend_advantages: Vec::new(),
                color_requirement: None,
            },
        }
    }

    /// Append a fibre share
    #[must_use]
    pub fn fiber(mut self, fiber: Fiber, percentage: u8) -> Self {
        self.record
            .composition
            .push(FiberShare::new(fiber, percentage));
        self
    }

    /// Append an organic fibre share
    #[must_use]
    pub fn organic_fiber(mut self, fiber: Fiber, percentage: u8) -> Self {
        self.record
            .composition
            .push(FiberShare::organic(fiber, percentage));
        self
    }

    /// Replace the whole composition
    #[must_use]
    pub fn composition(mut self, composition: Vec<FiberShare>) -> Self {
        self.record.composition = composition;
        self
    }

    /// Set the count
    #[must_use]
    pub const fn count(mut self, count: YarnCount) -> Self {
        self.record.count = count;
        self
    }

    /// Set the count from Ne
    #[must_use]
    pub fn ne(self, ne: f64) -> Self {
        self.count(YarnCount::from_ne(ne))
    }

    /// Set the qualitative traits
    #[must_use]
    pub const fn characteristics(mut self, characteristics: YarnCharacteristics) -> Self {
        self.record.characteristics = characteristics;
        self
    }

    /// Set the price level
    #[must_use]
    pub const fn price_level(mut self, level: u8) -> Self {
        self.record.price_level = level;
        self
    }

    /// Add a certification
    #[must_use]
    pub fn certification(mut self, certification: Certification) -> Self {
        self.record.certifications.insert(certification);
        self
    }

    /// Add a performance property
    #[must_use]
    pub fn special_property(mut self, property: SpecialProperty) -> Self {
        self.record.special_properties.insert(property);
        self
    }

    /// Add a free-text production risk
    #[must_use]
    pub fn risk(mut self, risk: impl Into<String>) -> Self {
        self.record.risks.push(risk.into());
        self
    }

    /// Set the trade name
    #[must_use]
    pub fn brand_name(mut self, brand: impl Into<String>) -> Self {
        self.record.brand_name = Some(brand.into());
        self
    }

    /// Add a blend selling argument
    #[must_use]
    pub fn blend_advantage(mut self, advantage: impl Into<String>) -> Self {
        self.record.blend_advantages.push(advantage.into());
        self
    }

    /// Set the dyeing constraint
    #[must_use]
    pub const fn color_requirement(mut self, requirement: ColorRequirement) -> Self {
        self.record.color_requirement = Some(requirement);
        self
    }

    /// Validate and freeze the yarn
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The id or name is blank
    /// - The composition does not sum to exactly 100%
    /// - No positive Ne or tex count is given
    /// - The price level is zero
    pub fn build(self) -> Result<YarnSpec> {
        YarnSpec::try_from(self.record)
    }
}

/// Wire form of a yarn; validated on conversion into [`YarnSpec`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YarnRecord {
    id: String,
    name: String,
    category: YarnCategory,
    composition: Vec<FiberShare>,
    count: YarnCount,
    #[serde(default)]
    characteristics: YarnCharacteristics,
    #[serde(default = "default_price_level")]
    price_level: u8,
    #[serde(default)]
    certifications: BTreeSet<Certification>,
    #[serde(default)]
    special_properties: BTreeSet<SpecialProperty>,
    #[serde(default)]
    risks: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    brand_name: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    blend_advantages: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    color_requirement: Option<ColorRequirement>,
}

const fn default_price_level() -> u8 {
    3
}

impl TryFrom<YarnRecord> for YarnSpec {
    type Error = FabricError;

    fn try_from(record: YarnRecord) -> Result<Self> {
        if record.id.trim().is_empty() {
            return Err(FabricError::InvalidYarn {
                yarn_id: record.id,
                reason: "id must not be blank".to_string(),
            });
        }
        if record.name.trim().is_empty() {
            return Err(FabricError::InvalidYarn {
                yarn_id: record.id,
                reason: "name must not be blank".to_string(),
            });
        }

        let total: u32 = record
            .composition
            .iter()
            .map(|share| u32::from(share.percentage))
            .sum();
        if total != 100 {
            return Err(FabricError::InvalidComposition {
                yarn_id: record.id,
                total,
            });
        }

        if !record.count.is_specified() {
            return Err(FabricError::InvalidYarn {
                yarn_id: record.id,
                reason: "a positive Ne or tex count is required".to_string(),
            });
        }
        if record.price_level == 0 {
            return Err(FabricError::InvalidYarn {
                yarn_id: record.id,
                reason: "price level starts at 1".to_string(),
            });
        }

        Ok(Self {
            id: record.id,
            name: record.name,
            category: record.category,
            composition: record.composition,
            count: record.count,
            characteristics: record.characteristics,
            price_level: record.price_level,
            certifications: record.certifications,
            special_properties: record.special_properties,
            risks: record.risks,
            brand_name: record.brand_name,
            blend_advantages: record.blend_advantages,
            color_requirement: record.color_requirement,
        })
    }
}

impl From<YarnSpec> for YarnRecord {
    fn from(yarn: YarnSpec) -> Self {
        Self {
            id: yarn.id,
            name: yarn.name,
            category: yarn.category,
            composition: yarn.composition,
            count: yarn.count,
            characteristics: yarn.characteristics,
            price_level: yarn.price_level,
            certifications: yarn.certifications,
            special_properties: yarn.special_properties,
            risks: yarn.risks,
            brand_name: yarn.brand_name,
            blend_advantages: yarn.blend_advantages,
            color_requirement: yarn.color_requirement,
        }
    }
}
