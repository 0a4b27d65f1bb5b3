//! Weave structure definitions
//!
//! A weave is described by its interlacement matrix: one boolean per crossing
//! of the repeat unit, `true` where the warp yarn is on the face. Rows run
//! along the weft (`repeat_y` rows) and columns along the warp (`repeat_x`
//! columns).

use crate::io::error::{FabricError, Result};
use ndarray::Array2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Structural family of a weave
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeaveCategory {
    /// One-over-one constructions and their derivatives
    Plain,
    /// Diagonal wale constructions
    Twill,
    /// Long-float constructions with a smooth face
    Satin,
    /// Small geometric figures from a dobby head
    Dobby,
    /// Large figured patterns from a jacquard head
    Jacquard,
    /// Raised loops or cut fibre ends
    Pile,
    /// Constructions that fit no other family
    Special,
}

impl WeaveCategory {
    /// Every category in catalog order
    pub const ALL: [Self; 7] = [
        Self::Plain,
        Self::Twill,
        Self::Satin,
        Self::Dobby,
        Self::Jacquard,
        Self::Pile,
        Self::Special,
    ];

    /// Stable identifier used in configuration files and on the command line
    pub const fn id(self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::Twill => "twill",
            Self::Satin => "satin",
            Self::Dobby => "dobby",
            Self::Jacquard => "jacquard",
            Self::Pile => "pile",
            Self::Special => "special",
        }
    }

    /// Display name of the family
    pub const fn label(self) -> &'static str {
        match self {
            Self::Plain => "平織系",
            Self::Twill => "綾織系",
            Self::Satin => "朱子織系",
            Self::Dobby => "ドビー織",
            Self::Jacquard => "ジャカード",
            Self::Pile => "パイル織",
            Self::Special => "特殊織",
        }
    }

    /// Short description of the family
    pub const fn description(self) -> &'static str {
        match self {
            Self::Plain => "最も基本的な織り構造。耐久性が高い。",
            Self::Twill => "斜めの畝が特徴。しなやかで光沢がある。",
            Self::Satin => "滑らかな表面。高級感のある光沢。",
            Self::Dobby => "小柄な幾何学模様。多様なテクスチャ。",
            Self::Jacquard => "複雑な大柄模様。高度な織り技術。",
            Self::Pile => "ループや毛羽立ち。厚みと保温性。",
            Self::Special => "独自の構造や効果を持つ織り。",
        }
    }

    /// Look a category up by its identifier
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.id() == id)
    }
}

impl fmt::Display for WeaveCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Qualitative traits of a weave, each scored 0–5
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WeaveCharacteristics {
    /// Abrasion and tear resistance
    pub durability: u8,
    /// How the cloth falls and folds
    pub drape: u8,
    /// Air permeability
    pub breathability: u8,
    /// Recovery from creasing
    pub wrinkle_resistance: u8,
    /// Surface luster produced by the structure
    pub shine: u8,
}

/// Named weave trait, used for threshold filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeaveTrait {
    /// See [`WeaveCharacteristics::durability`]
    Durability,
    /// See [`WeaveCharacteristics::drape`]
    Drape,
    /// See [`WeaveCharacteristics::breathability`]
    Breathability,
    /// See [`WeaveCharacteristics::wrinkle_resistance`]
    WrinkleResistance,
    /// See [`WeaveCharacteristics::shine`]
    Shine,
}

impl WeaveTrait {
    /// Every trait in display order
    pub const ALL: [Self; 5] = [
        Self::Durability,
        Self::Drape,
        Self::Breathability,
        Self::WrinkleResistance,
        Self::Shine,
    ];

    /// Stable identifier
    pub const fn id(self) -> &'static str {
        match self {
            Self::Durability => "durability",
            Self::Drape => "drape",
            Self::Breathability => "breathability",
            Self::WrinkleResistance => "wrinkle_resistance",
            Self::Shine => "shine",
        }
    }

    /// Look a trait up by its identifier
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.id() == id)
    }
}

impl WeaveCharacteristics {
    /// Score of a single trait
    pub const fn score(&self, trait_: WeaveTrait) -> u8 {
        match trait_ {
            WeaveTrait::Durability => self.durability,
            WeaveTrait::Drape => self.drape,
            WeaveTrait::Breathability => self.breathability,
            WeaveTrait::WrinkleResistance => self.wrinkle_resistance,
            WeaveTrait::Shine => self.shine,
        }
    }
}

/// Pile height class of a pile weave
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PileHeight {
    /// Short cut pile (velvet)
    Short,
    /// Medium cut pile (corduroy)
    Medium,
    /// Uncut loop pile (terry)
    Loop,
    /// Pile of unrecorded height
    Unspecified,
}

impl PileHeight {
    /// Weight multiplier applied on top of the base fabric weight
    pub const fn weight_factor(self) -> f64 {
        match self {
            Self::Short => 1.3,
            Self::Medium => 1.5,
            Self::Loop => 1.4,
            Self::Unspecified => 1.2,
        }
    }
}

/// Dyeing constraint a weave or yarn is designed around
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorRequirement {
    /// Contrasting warp and weft colors
    Bicolor,
    /// Indigo-dyed warp over an undyed weft
    IndigoDenim,
}

/// Yarn constraints recommended for a weave
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct YarnRequirement {
    /// Finest recommended count
    pub min_ne: Option<f64>,
    /// Coarsest recommended count
    pub max_ne: Option<f64>,
    /// A high-twist crepe yarn is required
    pub crepe_yarn: bool,
}

/// Immutable reference entry describing a weave structure
#[derive(Debug, Clone, PartialEq)]
pub struct WeaveDefinition {
    /// Catalog id
    pub id: String,
    /// Display name
    pub name: String,
    /// English name
    pub name_en: String,
    /// Structural family
    pub category: WeaveCategory,
    /// Interlacement matrix, `repeat_y` rows by `repeat_x` columns
    pub matrix: Array2<bool>,
    /// Number of warp ends in the repeat
    pub repeat_x: usize,
    /// Number of weft picks in the repeat
    pub repeat_y: usize,
    /// Qualitative traits
    pub characteristics: WeaveCharacteristics,
    /// Multiplier applied to the base areal weight
    pub gsm_modifier: f64,
    /// Production difficulty, 1 (easy) to 5 (specialist)
    pub production_difficulty: u8,
    /// Pile height; `Some` marks a pile weave
    pub pile: Option<PileHeight>,
    /// Dyeing constraint
    pub color_requirement: Option<ColorRequirement>,
    /// Recommended yarn constraints
    pub yarn_requirement: Option<YarnRequirement>,
    /// Angle of the twill line in degrees
    pub twill_angle: Option<i16>,
    /// Available wales per inch for corded piles
    pub wale_options: Vec<u8>,
    /// Free-text description
    pub description: String,
    /// Typical end uses
    pub applications: Vec<String>,
}

impl WeaveDefinition {
    /// Whether the warp is on the face at repeat cell `(mx, my)`
    ///
    /// Out-of-range cells fall back to warp-faced.
    pub fn is_warp_face(&self, mx: usize, my: usize) -> bool {
        self.matrix.get((my, mx)).copied().unwrap_or(true)
    }

    /// Whether this is a pile weave
    pub const fn is_pile(&self) -> bool {
        self.pile.is_some()
    }

    /// Whether the weave needs a high-twist crepe yarn
    pub fn requires_crepe_yarn(&self) -> bool {
        self.yarn_requirement.is_some_and(|r| r.crepe_yarn)
    }

    /// Share of crossings with the warp on the face
    pub fn warp_face_ratio(&self) -> f64 {
        let total = self.matrix.len();
        if total == 0 {
            return 0.0;
        }
        self.matrix.iter().filter(|&&cell| cell).count() as f64 / total as f64
    }

    /// Check structural invariants against the declared repeat size
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The matrix shape is not `repeat_y` × `repeat_x`
    /// - The matrix is empty
    /// - The weight modifier is not a positive finite number
    /// - The production difficulty is outside 1–5
    pub fn validate(&self) -> Result<()> {
        let (rows, cols) = self.matrix.dim();
        let (repeat_x, repeat_y) = (self.repeat_x, self.repeat_y);
        if rows != repeat_y || cols != repeat_x {
            return Err(FabricError::InvalidWeave {
                weave_id: self.id.clone(),
                reason: format!(
                    "matrix is {rows}x{cols}, declared repeat is {repeat_y}x{repeat_x}"
                ),
            });
        }
        if rows == 0 || cols == 0 {
            return Err(FabricError::InvalidWeave {
                weave_id: self.id.clone(),
                reason: "matrix is empty".to_string(),
            });
        }
        if !(self.gsm_modifier.is_finite() && self.gsm_modifier > 0.0) {
            return Err(FabricError::InvalidWeave {
                weave_id: self.id.clone(),
                reason: format!("gsm modifier {} must be positive", self.gsm_modifier),
            });
        }
        if !(1..=5).contains(&self.production_difficulty) {
            return Err(FabricError::InvalidWeave {
                weave_id: self.id.clone(),
                reason: format!(
                    "production difficulty {} outside 1-5",
                    self.production_difficulty
                ),
            });
        }
        Ok(())
    }
}

/// Compact, serializable view of a weave for listings and reports
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeaveSummary {
    /// Catalog id
    pub id: String,
    /// Display name
    pub name: String,
    /// English name
    pub name_en: String,
    /// Structural family
    pub category: WeaveCategory,
    /// Warp ends in the repeat
    pub repeat_x: usize,
    /// Weft picks in the repeat
    pub repeat_y: usize,
    /// Qualitative traits
    pub characteristics: WeaveCharacteristics,
    /// Weight multiplier
    pub gsm_modifier: f64,
    /// Production difficulty
    pub production_difficulty: u8,
    /// Pile height, for pile weaves
    pub pile: Option<PileHeight>,
    /// Share of crossings with the warp on the face
    pub warp_face_ratio: f64,
    /// Matrix rows rendered as `#` (warp) and `.` (weft)
    pub matrix: Vec<String>,
}

impl From<&WeaveDefinition> for WeaveSummary {
    fn from(weave: &WeaveDefinition) -> Self {
        let matrix = weave
            .matrix
            .rows()
            .into_iter()
            .map(|row| row.iter().map(|&w| if w { '#' } else { '.' }).collect())
            .collect();

        Self {
            id: weave.id.clone(),
            name: weave.name.clone(),
            name_en: weave.name_en.clone(),
            category: weave.category,
            repeat_x: weave.repeat_x,
            repeat_y: weave.repeat_y,
            characteristics: weave.characteristics,
            gsm_modifier: weave.gsm_modifier,
            production_difficulty: weave.production_difficulty,
            pile: weave.pile,
            warp_face_ratio: weave.warp_face_ratio(),
            matrix,
        }
    }
}
