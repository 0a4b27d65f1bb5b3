//! Heuristic production risk analysis
//!
//! Eight independent rule families inspect the resolved weave, yarns and
//! densities. Every family always runs and contributes zero or more findings
//! in a fixed order; a family that fails is logged and skipped without
//! affecting the others. The findings are then folded into one overall level.

use crate::catalog::Catalog;
use crate::catalog::weave::{ColorRequirement, WeaveCategory};
use crate::catalog::yarn::{Fiber, YarnCategory};
use crate::fabric::config::{FabricConfiguration, ResolvedFabric};
use crate::io::error::Result;
use serde::Serialize;
use std::fmt;

/// Severity of a finding, ordered by priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    /// No risk
    #[default]
    None,
    /// Minor, worth noting
    Low,
    /// Needs attention before production
    Medium,
    /// Likely to cause production problems
    High,
    /// Several serious problems at once
    Critical,
}

impl RiskLevel {
    /// Every level in priority order
    pub const ALL: [Self; 5] = [
        Self::None,
        Self::Low,
        Self::Medium,
        Self::High,
        Self::Critical,
    ];

    /// Numeric priority, 0 to 4
    pub const fn priority(self) -> u8 {
        match self {
            Self::None => 0,
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
            Self::Critical => 4,
        }
    }

    /// Stable identifier
    pub const fn id(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }

    /// Display label
    pub const fn label(self) -> &'static str {
        match self {
            Self::None => "なし",
            Self::Low => "低",
            Self::Medium => "中",
            Self::High => "高",
            Self::Critical => "要注意",
        }
    }

    /// Display color as `#rrggbb`
    pub const fn color(self) -> &'static str {
        match self {
            Self::None => "#10B981",
            Self::Low => "#84CC16",
            Self::Medium => "#F59E0B",
            Self::High => "#EF4444",
            Self::Critical => "#DC2626",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Production concern a finding belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskCategory {
    /// Warp or weft breaks on the loom
    YarnBreakage,
    /// Structure needs specialist skills or equipment
    WeavingDifficulty,
    /// Lot-to-lot or in-cloth unevenness
    QualityVariation,
    /// Dimensional change in washing
    Shrinkage,
    /// Wear and abrasion
    Durability,
    /// Color loss or change
    ColorFastness,
    /// Finishing and care constraints
    SpecialHandling,
    /// Material and processing cost
    Cost,
}

impl RiskCategory {
    /// Stable identifier
    pub const fn id(self) -> &'static str {
        match self {
            Self::YarnBreakage => "yarn_breakage",
            Self::WeavingDifficulty => "weaving_difficulty",
            Self::QualityVariation => "quality_variation",
            Self::Shrinkage => "shrinkage",
            Self::Durability => "durability",
            Self::ColorFastness => "color_fastness",
            Self::SpecialHandling => "special_handling",
            Self::Cost => "cost",
        }
    }

    /// Display name
    pub const fn name(self) -> &'static str {
        match self {
            Self::YarnBreakage => "糸切れ",
            Self::WeavingDifficulty => "織り難度",
            Self::QualityVariation => "品質ムラ",
            Self::Shrinkage => "収縮",
            Self::Durability => "耐久性",
            Self::ColorFastness => "堅牢度",
            Self::SpecialHandling => "特殊処理",
            Self::Cost => "コスト",
        }
    }

    /// Display icon
    pub const fn icon(self) -> &'static str {
        match self {
            Self::YarnBreakage => "🧵",
            Self::WeavingDifficulty => "🔧",
            Self::QualityVariation => "📊",
            Self::Shrinkage => "📐",
            Self::Durability => "💪",
            Self::ColorFastness => "🎨",
            Self::SpecialHandling => "⚠️",
            Self::Cost => "💰",
        }
    }
}

/// One production concern with advice
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RiskFinding {
    /// Concern
    pub category: RiskCategory,
    /// Severity
    pub level: RiskLevel,
    /// Headline
    pub title: String,
    /// Explanation
    pub description: String,
    /// Mitigations in suggested order
    pub recommendations: Vec<String>,
}

fn finding(
    category: RiskCategory,
    level: RiskLevel,
    title: &str,
    description: impl Into<String>,
    recommendations: &[&str],
) -> RiskFinding {
    RiskFinding {
        category,
        level,
        title: title.to_string(),
        description: description.into(),
        recommendations: recommendations.iter().map(|r| (*r).to_string()).collect(),
    }
}

/// A family of related risk checks
pub trait RiskRule: Send + Sync {
    /// Name used in diagnostics
    fn family(&self) -> &'static str;

    /// Findings for `fabric`, in rule order
    ///
    /// # Errors
    ///
    /// Returns an error if the family cannot evaluate this fabric; callers
    /// skip the family and keep going
    fn evaluate(&self, fabric: &ResolvedFabric<'_>) -> Result<Vec<RiskFinding>>;
}

/// Fine counts at high density, weak yarns, fine yarns in complex weaves
#[derive(Debug, Clone, Copy, Default)]
pub struct YarnBreakage;

impl RiskRule for YarnBreakage {
    fn family(&self) -> &'static str {
        RiskCategory::YarnBreakage.id()
    }

    fn evaluate(&self, fabric: &ResolvedFabric<'_>) -> Result<Vec<RiskFinding>> {
        let mut findings = Vec::new();
        let ne = fabric.warp.count().ne();
        let epi = fabric.epi;

        if ne > 60.0 && epi > 120.0 {
            findings.push(finding(
                RiskCategory::YarnBreakage,
                RiskLevel::High,
                "経糸切れリスク（高）",
                format!("細番手（{ne}Ne）と高密度（EPI {epi}）の組み合わせにより糸切れが発生しやすい"),
                &[
                    "織機速度を20-30%低下させる",
                    "経糸テンションを細かく調整",
                    "サイジング（糊付け）強度を上げる",
                    "湿度管理を60-65%に維持",
                ],
            ));
        } else if ne > 50.0 && epi > 100.0 {
            findings.push(finding(
                RiskCategory::YarnBreakage,
                RiskLevel::Medium,
                "経糸切れリスク（中）",
                "細番手糸のため通常より糸切れに注意が必要",
                &["織機速度を10-15%低下", "定期的なテンションチェック"],
            ));
        }

        if fabric.warp.characteristics().strength <= 2 {
            findings.push(finding(
                RiskCategory::YarnBreakage,
                RiskLevel::Medium,
                "経糸強度不足",
                "糸の引張強度が低いため織り中の糸切れに注意",
                &["サイジング強化", "低速織りを検討"],
            ));
        }

        if fabric.weave.production_difficulty >= 4 && ne > 50.0 {
            findings.push(finding(
                RiskCategory::YarnBreakage,
                RiskLevel::Medium,
                "組織-糸相性リスク",
                format!("複雑な織り組織（{}）と細番手糸の組み合わせ", fabric.weave.name),
                &["試織りで問題点を確認", "段階的に速度を上げる"],
            ));
        }

        Ok(findings)
    }
}

/// Specialist structures and pile control
#[derive(Debug, Clone, Copy, Default)]
pub struct WeavingDifficulty;

impl RiskRule for WeavingDifficulty {
    fn family(&self) -> &'static str {
        RiskCategory::WeavingDifficulty.id()
    }

    fn evaluate(&self, fabric: &ResolvedFabric<'_>) -> Result<Vec<RiskFinding>> {
        let mut findings = Vec::new();
        let weave = fabric.weave;

        // Only the highest matching tier fires
        if weave.production_difficulty >= 5 {
            findings.push(finding(
                RiskCategory::WeavingDifficulty,
                RiskLevel::High,
                "高難度織り組織",
                format!("{}は熟練オペレーターと専門機械が必要", weave.name),
                &[
                    "専門工場への外注を検討",
                    "十分なリードタイムを確保",
                    "試作でノウハウを蓄積",
                ],
            ));
        } else if weave.production_difficulty == 4 {
            findings.push(finding(
                RiskCategory::WeavingDifficulty,
                RiskLevel::Medium,
                "中難度織り組織",
                "一定の技術レベルが必要な織り組織",
                &["事前に工場と打ち合わせ", "少量試作を推奨"],
            ));
        }

        if weave.is_pile() {
            findings.push(finding(
                RiskCategory::WeavingDifficulty,
                RiskLevel::Medium,
                "パイル織特有の管理",
                "パイル高さの均一性確保が必要",
                &[
                    "パイルカッター/シャーリングの精度確認",
                    "パイル倒れ防止の仕上げ処理",
                ],
            ));
        }

        Ok(findings)
    }
}

/// Organic lot variation and bast-fibre slubs
#[derive(Debug, Clone, Copy, Default)]
pub struct QualityVariation;

impl RiskRule for QualityVariation {
    fn family(&self) -> &'static str {
        RiskCategory::QualityVariation.id()
    }

    fn evaluate(&self, fabric: &ResolvedFabric<'_>) -> Result<Vec<RiskFinding>> {
        let mut findings = Vec::new();

        if fabric.yarns().any(|yarn| yarn.has_organic_fiber()) {
            findings.push(finding(
                RiskCategory::QualityVariation,
                RiskLevel::Low,
                "オーガニック素材のロット差",
                "自然素材のため色調や風合いにロット間差が生じやすい",
                &["同一ロットでまとめ発注", "色調確認のための先行サンプル"],
            ));
        }

        if fabric
            .yarns()
            .any(|yarn| yarn.category() == YarnCategory::Linen)
        {
            findings.push(finding(
                RiskCategory::QualityVariation,
                RiskLevel::Low,
                "麻特有のネップ・節",
                "自然な風合いとして許容されるが、均一性を求める場合は注意",
                &["湿式紡績糸を選択", "仕様書でネップ許容範囲を明記"],
            ));
        }

        Ok(findings)
    }
}

/// Regenerated cellulose and wool felting
#[derive(Debug, Clone, Copy, Default)]
pub struct Shrinkage;

impl RiskRule for Shrinkage {
    fn family(&self) -> &'static str {
        RiskCategory::Shrinkage.id()
    }

    fn evaluate(&self, fabric: &ResolvedFabric<'_>) -> Result<Vec<RiskFinding>> {
        let mut findings = Vec::new();

        if fabric
            .warp
            .composition()
            .iter()
            .any(|share| share.fiber.is_regenerated_cellulose())
        {
            findings.push(finding(
                RiskCategory::Shrinkage,
                RiskLevel::Medium,
                "再生繊維の収縮リスク",
                "洗濯による収縮が発生しやすい",
                &[
                    "防縮加工を施す",
                    "製品仕様に収縮率を明記",
                    "大きめサイズでカットパターン作成",
                ],
            ));
        }

        if fabric
            .yarns()
            .any(|yarn| yarn.category() == YarnCategory::Wool)
        {
            findings.push(finding(
                RiskCategory::Shrinkage,
                RiskLevel::Medium,
                "ウールのフェルト化リスク",
                "不適切な洗濯でフェルト化・収縮が発生",
                &["防縮加工（スケールオフ等）", "ケアラベルに洗濯方法を明記"],
            ));
        }

        Ok(findings)
    }
}

/// Delicate structures or yarns, and satin floats
#[derive(Debug, Clone, Copy, Default)]
pub struct Durability;

impl RiskRule for Durability {
    fn family(&self) -> &'static str {
        RiskCategory::Durability.id()
    }

    fn evaluate(&self, fabric: &ResolvedFabric<'_>) -> Result<Vec<RiskFinding>> {
        let mut findings = Vec::new();

        if fabric.weave.characteristics.durability <= 2
            || fabric.warp.characteristics().durability <= 2
        {
            findings.push(finding(
                RiskCategory::Durability,
                RiskLevel::Medium,
                "耐久性への注意",
                "繊細な素材・組織のため取扱いに注意が必要",
                &[
                    "用途を限定（デリケート衣料等）",
                    "ケアラベルで注意喚起",
                    "補強が必要な箇所を検討",
                ],
            ));
        }

        if fabric.weave.category == WeaveCategory::Satin {
            findings.push(finding(
                RiskCategory::Durability,
                RiskLevel::Low,
                "朱子織の摩擦注意",
                "浮き糸が多いため引っかかりや摩擦に弱い",
                &["裏地使用を推奨", "摩擦の多い用途は避ける"],
            ));
        }

        Ok(findings)
    }
}

/// Indigo bleeding and silk discoloration
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorFastness;

impl RiskRule for ColorFastness {
    fn family(&self) -> &'static str {
        RiskCategory::ColorFastness.id()
    }

    fn evaluate(&self, fabric: &ResolvedFabric<'_>) -> Result<Vec<RiskFinding>> {
        let mut findings = Vec::new();

        if fabric.warp.id().contains("denim")
            || fabric.warp.color_requirement() == Some(ColorRequirement::IndigoDenim)
        {
            findings.push(finding(
                RiskCategory::ColorFastness,
                RiskLevel::Low,
                "インディゴの色落ち",
                "デニム特有の経年変化として意図的な場合もあるが、他衣料への色移りに注意",
                &[
                    "初回洗濯は単独で",
                    "色移り防止処理を検討",
                    "製品表示で注意喚起",
                ],
            ));
        }

        if fabric
            .yarns()
            .any(|yarn| yarn.category() == YarnCategory::Silk)
        {
            findings.push(finding(
                RiskCategory::ColorFastness,
                RiskLevel::Medium,
                "シルクの日光変色",
                "直射日光で変色・劣化しやすい",
                &["UV加工を検討", "保管・陳列時の紫外線対策"],
            ));
        }

        Ok(findings)
    }
}

/// Elastane care, branded yarn processing and crepe twist
#[derive(Debug, Clone, Copy, Default)]
pub struct SpecialHandling;

impl RiskRule for SpecialHandling {
    fn family(&self) -> &'static str {
        RiskCategory::SpecialHandling.id()
    }

    fn evaluate(&self, fabric: &ResolvedFabric<'_>) -> Result<Vec<RiskFinding>> {
        let mut findings = Vec::new();

        if fabric
            .yarns()
            .any(|yarn| yarn.contains_fiber(Fiber::Spandex))
        {
            findings.push(finding(
                RiskCategory::SpecialHandling,
                RiskLevel::Medium,
                "スパンデックスの熱・塩素劣化",
                "高温や塩素系漂白剤でストレッチ性能が低下",
                &[
                    "低温乾燥・アイロン",
                    "塩素系漂白剤不可の表示",
                    "縫製時の針熱にも注意",
                ],
            ));
        }

        if fabric.yarns().any(|yarn| yarn.brand_name().is_some()) {
            findings.push(finding(
                RiskCategory::SpecialHandling,
                RiskLevel::Low,
                "機能性糸の処理注意",
                "機能性を損なわない加工・仕上げが必要",
                &["メーカー推奨の加工条件を確認", "機能性テストを実施"],
            ));
        }

        if fabric.weave.requires_crepe_yarn() {
            findings.push(finding(
                RiskCategory::SpecialHandling,
                RiskLevel::Medium,
                "クレープ織の強撚糸",
                "シボを出すため強撚糸が必要",
                &["強撚糸を指定", "セット加工でシボを固定"],
            ));
        }

        Ok(findings)
    }
}

/// Expensive materials and processing surcharges
#[derive(Debug, Clone, Copy, Default)]
pub struct Cost;

impl RiskRule for Cost {
    fn family(&self) -> &'static str {
        RiskCategory::Cost.id()
    }

    fn evaluate(&self, fabric: &ResolvedFabric<'_>) -> Result<Vec<RiskFinding>> {
        let mut findings = Vec::new();
        let warp_price = f64::from(fabric.warp.price_level());
        let weft_price = f64::from(fabric.weft_or_warp().price_level());

        if (warp_price + weft_price) / 2.0 >= 6.0 {
            findings.push(finding(
                RiskCategory::Cost,
                RiskLevel::Medium,
                "高コスト素材",
                "高価な素材のため原価管理に注意",
                &[
                    "歩留まり向上策を検討",
                    "B品発生時の対策を事前に決定",
                    "価格転嫁の妥当性を確認",
                ],
            ));
        }

        if fabric.weave.production_difficulty >= 4 {
            findings.push(finding(
                RiskCategory::Cost,
                RiskLevel::Low,
                "工賃上昇リスク",
                "難度の高い織りのため加工賃が割高になる可能性",
                &["複数工場から見積もり取得", "ロットサイズによる単価交渉"],
            ));
        }

        Ok(findings)
    }
}

/// Standard rule families in evaluation order
pub static STANDARD_RULES: [&dyn RiskRule; 8] = [
    &YarnBreakage,
    &WeavingDifficulty,
    &QualityVariation,
    &Shrinkage,
    &Durability,
    &ColorFastness,
    &SpecialHandling,
    &Cost,
];

/// Findings, overall level and summary of one analysis pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RiskReport {
    /// Findings in family order, then rule order
    pub findings: Vec<RiskFinding>,
    /// Aggregate severity
    pub overall: RiskLevel,
    /// One-line summary
    pub summary: String,
}

impl RiskReport {
    /// Report with no findings
    pub fn clean() -> Self {
        Self::from_findings(Vec::new())
    }

    /// Aggregate a finding list into a report
    pub fn from_findings(findings: Vec<RiskFinding>) -> Self {
        let overall = overall_risk(&findings);
        let summary = risk_summary(&findings);
        Self {
            findings,
            overall,
            summary,
        }
    }
}

/// Fold finding severities into one level
///
/// Three or more findings at HIGH or above escalate to CRITICAL.
pub fn overall_risk(findings: &[RiskFinding]) -> RiskLevel {
    let max = findings
        .iter()
        .map(|f| f.level.priority())
        .max()
        .unwrap_or(0);
    let serious = findings.iter().filter(|f| f.level.priority() >= 3).count();

    if serious >= 3 || max >= 4 {
        RiskLevel::Critical
    } else if serious >= 1 || max >= 3 {
        RiskLevel::High
    } else if max >= 2 {
        RiskLevel::Medium
    } else if max >= 1 {
        RiskLevel::Low
    } else {
        RiskLevel::None
    }
}

/// One-line summary counting serious and medium findings
pub fn risk_summary(findings: &[RiskFinding]) -> String {
    let serious = findings.iter().filter(|f| f.level.priority() >= 3).count();
    let medium = findings
        .iter()
        .filter(|f| f.level == RiskLevel::Medium)
        .count();

    if serious == 0 && medium == 0 {
        return "特に問題なく生産可能と思われます。".to_string();
    }

    let mut parts = Vec::with_capacity(2);
    if serious > 0 {
        parts.push(format!("高リスク {serious}件"));
    }
    if medium > 0 {
        parts.push(format!("中リスク {medium}件"));
    }
    format!("{}の確認が必要です。詳細をご確認ください。", parts.join("、"))
}

/// Run `rules` against `fabric`, skipping families that fail
pub fn assess_with(rules: &[&dyn RiskRule], fabric: &ResolvedFabric<'_>) -> RiskReport {
    let mut findings = Vec::new();
    for rule in rules {
        match rule.evaluate(fabric) {
            Ok(found) => findings.extend(found),
            Err(error) => {
                tracing::warn!(family = rule.family(), %error, "risk rule family skipped");
            }
        }
    }
    RiskReport::from_findings(findings)
}

/// Run the standard rule families against `fabric`
pub fn assess_risks(fabric: &ResolvedFabric<'_>) -> RiskReport {
    assess_with(&STANDARD_RULES, fabric)
}

/// Analyze a configuration; unknown weave or warp yarn yields a clean report
#[tracing::instrument(skip(config, catalog), fields(weave = %config.weave_id))]
pub fn analyze_risks(config: &FabricConfiguration, catalog: &Catalog) -> RiskReport {
    config
        .resolve(catalog)
        .map_or_else(RiskReport::clean, |fabric| assess_risks(&fabric))
}
