//! Selling points, keywords and marketing copy derived from a fabric
//!
//! Four families run in a fixed order (material, weave, functional,
//! sustainability) and each appends points in rule order. Keywords and the
//! copy text are derived from the points and the resolved fabric.

use crate::catalog::Catalog;
use crate::catalog::weave::WeaveCategory;
use crate::catalog::yarn::{Certification, Fiber, SpecialProperty, YarnCategory};
use crate::fabric::config::{FabricConfiguration, ResolvedFabric};
use serde::Serialize;
use std::collections::BTreeSet;

/// Family a selling point comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PointFamily {
    /// Fibre and yarn quality
    Material,
    /// Weave structure
    Weave,
    /// Performance properties
    Functional,
    /// Certifications and low-impact fibres
    Sustainability,
}

impl PointFamily {
    /// Display label
    pub const fn label(self) -> &'static str {
        match self {
            Self::Material => "素材",
            Self::Weave => "織り",
            Self::Functional => "機能",
            Self::Sustainability => "サステナビリティ",
        }
    }
}

/// Kind of customer appeal a point makes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Appeal {
    /// Premium feel
    Luxury,
    /// Superior make
    Quality,
    /// Wearing comfort
    Comfort,
    /// Technical performance
    Functional,
    /// Visual beauty
    Aesthetic,
    /// Everyday ease
    Practical,
    /// Heritage
    Tradition,
    /// Environmental care
    Sustainability,
    /// Tested for harmful substances
    Safety,
}

impl Appeal {
    /// Keyword contributed to the keyword set, if any
    pub const fn keyword(self) -> Option<&'static str> {
        match self {
            Self::Luxury => Some("高級感"),
            Self::Comfort => Some("快適"),
            Self::Practical => Some("実用的"),
            Self::Sustainability => Some("サステナブル"),
            Self::Functional => Some("機能性"),
            Self::Quality | Self::Aesthetic | Self::Tradition | Self::Safety => None,
        }
    }
}

/// One marketing argument
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SellingPoint {
    /// Source family
    pub family: PointFamily,
    /// Headline
    pub title: String,
    /// Supporting sentence
    pub description: String,
    /// Appeal tag
    pub appeal: Appeal,
}

fn point(
    family: PointFamily,
    title: &str,
    description: impl Into<String>,
    appeal: Appeal,
) -> SellingPoint {
    SellingPoint {
        family,
        title: title.to_string(),
        description: description.into(),
        appeal,
    }
}

/// Points, keywords and copy of one generation pass
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct SellingReport {
    /// Points in family order, then rule order
    pub points: Vec<SellingPoint>,
    /// Deduplicated keywords
    pub keywords: BTreeSet<String>,
    /// Marketing copy
    pub copy: String,
}

impl SellingReport {
    /// Report with no points, no keywords and empty copy
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Fibre and yarn points, keyed on the warp yarn
pub fn material_points(fabric: &ResolvedFabric<'_>) -> Vec<SellingPoint> {
    use PointFamily::Material;
    let warp = fabric.warp;
    let mut points = Vec::new();

    if warp.category() == YarnCategory::Silk {
        points.push(point(
            Material,
            "シルクの上質な光沢",
            "天然シルクならではの美しい光沢と滑らかな肌触り",
            Appeal::Luxury,
        ));
    }
    if warp.contains_fiber(Fiber::Cashmere) {
        points.push(point(
            Material,
            "カシミヤの極上の柔らかさ",
            "「繊維の宝石」と呼ばれるカシミヤの贅沢な風合い",
            Appeal::Luxury,
        ));
    }
    if warp.contains_fiber(Fiber::MerinoWool) {
        points.push(point(
            Material,
            "メリノウールの上質感",
            "極細繊維のメリノウールによる柔らかくしなやかな着心地",
            Appeal::Quality,
        ));
    }
    if warp.category().is_natural() {
        points.push(point(
            Material,
            "天然素材の心地よさ",
            "天然繊維ならではの通気性と快適な着用感",
            Appeal::Comfort,
        ));
    }
    if warp.category() == YarnCategory::Blend && !warp.blend_advantages().is_empty() {
        points.push(point(
            Material,
            "素材のいいとこ取り",
            warp.blend_advantages().join("、"),
            Appeal::Functional,
        ));
    }
    if warp.id().contains("combed") {
        points.push(point(
            Material,
            "コーマ糸の滑らかさ",
            "短繊維を除去したコーマ糸による毛羽立ちの少ない上質な生地",
            Appeal::Quality,
        ));
    }
    if warp.id().contains("mercerized") {
        points.push(point(
            Material,
            "シルケット加工の光沢",
            "シルクのような美しい光沢と優れた染色性",
            Appeal::Aesthetic,
        ));
    }

    points
}

/// Structure points from trait thresholds and signature weaves
pub fn weave_points(fabric: &ResolvedFabric<'_>) -> Vec<SellingPoint> {
    use PointFamily::Weave;
    let weave = fabric.weave;
    let traits = weave.characteristics;
    let mut points = Vec::new();

    if traits.drape >= 4 {
        points.push(point(
            Weave,
            "優美なドレープ性",
            "美しく流れ落ちるドレープで上品なシルエットを演出",
            Appeal::Aesthetic,
        ));
    }
    if traits.durability >= 4 {
        points.push(point(
            Weave,
            "長く愛せる丈夫さ",
            "耐久性に優れた織り構造で長くご使用いただけます",
            Appeal::Practical,
        ));
    }
    if traits.breathability >= 4 {
        points.push(point(
            Weave,
            "通気性の良さ",
            "風通しの良い織り構造で快適な着心地",
            Appeal::Comfort,
        ));
    }
    if traits.shine >= 4 {
        points.push(point(
            Weave,
            "上品な光沢感",
            "織り構造が生み出す美しい光沢",
            Appeal::Aesthetic,
        ));
    }
    if traits.wrinkle_resistance >= 4 {
        points.push(point(
            Weave,
            "シワになりにくい",
            "お手入れ簡単、シワになりにくい織り構造",
            Appeal::Practical,
        ));
    }
    if weave.category == WeaveCategory::Jacquard {
        points.push(point(
            Weave,
            "ジャカード織の芸術性",
            "織りで表現される繊細で美しい模様",
            Appeal::Aesthetic,
        ));
    }
    if weave.id == "herringbone" {
        points.push(point(
            Weave,
            "ヘリンボーンの伝統美",
            "クラシックな魚の骨模様がエレガントな印象に",
            Appeal::Tradition,
        ));
    }
    if weave.id == "oxford" {
        points.push(point(
            Weave,
            "オックスフォードの信頼感",
            "名門大学の名を冠した上質カジュアルの定番",
            Appeal::Tradition,
        ));
    }

    points
}

/// Performance points from stretch fibres and warp yarn properties
pub fn functional_points(fabric: &ResolvedFabric<'_>) -> Vec<SellingPoint> {
    use PointFamily::Functional;
    let warp = fabric.warp;
    let mut points = Vec::new();

    if fabric.yarns().any(|yarn| yarn.contains_fiber(Fiber::Spandex)) {
        points.push(point(
            Functional,
            "快適なストレッチ性",
            "動きやすさを追求したストレッチ素材",
            Appeal::Comfort,
        ));
    }
    if warp.has_property(SpecialProperty::QuickDry)
        || warp.has_property(SpecialProperty::MoistureWicking)
    {
        points.push(point(
            Functional,
            "吸汗速乾",
            "汗を素早く吸収・発散して快適さをキープ",
            Appeal::Functional,
        ));
    }
    if warp.has_property(SpecialProperty::Insulation) {
        points.push(point(
            Functional,
            "軽くて暖かい",
            "軽量でありながら優れた保温性を発揮",
            Appeal::Functional,
        ));
    }
    if warp.has_property(SpecialProperty::TemperatureRegulation) {
        points.push(point(
            Functional,
            "温度調節機能",
            "体温に応じて温度を調整、オールシーズン快適",
            Appeal::Functional,
        ));
    }
    if warp.has_property(SpecialProperty::Antibacterial) {
        points.push(point(
            Functional,
            "抗菌・防臭",
            "菌の繁殖を抑え、いつでも清潔",
            Appeal::Functional,
        ));
    }
    if warp.characteristics().absorbency >= 4 {
        points.push(point(
            Functional,
            "優れた吸湿性",
            "汗をしっかり吸収してサラッと快適",
            Appeal::Comfort,
        ));
    }

    points
}

/// Certification points from both yarns and low-impact warp fibres
pub fn sustainability_points(fabric: &ResolvedFabric<'_>) -> Vec<SellingPoint> {
    use PointFamily::Sustainability;
    let certifications: BTreeSet<Certification> = fabric
        .yarns()
        .flat_map(|yarn| yarn.certifications().iter().copied())
        .collect();
    let mut points = Vec::new();

    if certifications.contains(&Certification::Gots) || certifications.contains(&Certification::Ocs)
    {
        points.push(point(
            Sustainability,
            "オーガニック認証取得",
            "環境に配慮したオーガニック素材を使用",
            Appeal::Sustainability,
        ));
    }
    if certifications.contains(&Certification::Fsc) {
        points.push(point(
            Sustainability,
            "FSC認証素材",
            "持続可能な森林資源から生まれた素材",
            Appeal::Sustainability,
        ));
    }
    if certifications.contains(&Certification::OekoTex) {
        points.push(point(
            Sustainability,
            "エコテックス認証",
            "有害物質テスト済みの安心素材",
            Appeal::Safety,
        ));
    }
    if fabric.warp.contains_fiber(Fiber::Lyocell) {
        points.push(point(
            Sustainability,
            "環境にやさしいテンセル",
            "持続可能な方法で生産されたセルロース繊維",
            Appeal::Sustainability,
        ));
    }
    if fabric.warp.contains_fiber(Fiber::Hemp) {
        points.push(point(
            Sustainability,
            "サステナブルなヘンプ",
            "農薬・化学肥料不要で環境負荷の低いヘンプ素材",
            Appeal::Sustainability,
        ));
    }

    points
}

/// Warp fibre labels, the weave name and appeal tags
pub fn extract_keywords(fabric: &ResolvedFabric<'_>, points: &[SellingPoint]) -> BTreeSet<String> {
    fabric
        .warp
        .composition()
        .iter()
        .filter_map(|share| share.fiber.keyword())
        .map(str::to_string)
        .chain(std::iter::once(fabric.weave.name.clone()))
        .chain(
            points
                .iter()
                .filter_map(|p| p.appeal.keyword())
                .map(str::to_string),
        )
        .collect()
}

/// Marketing copy: fibre lead, weave clause, and the first functional appeal
pub fn compose_copy(fabric: &ResolvedFabric<'_>, points: &[SellingPoint]) -> String {
    let weave = fabric.weave;
    let traits = weave.characteristics;
    let mut copy = String::new();

    if let Some(lead) = fabric.warp.main_fiber().and_then(Fiber::copy_lead) {
        copy.push_str(lead);
        copy.push('。');
    }

    copy.push_str(&weave.name);
    copy.push_str("ならではの");
    if traits.shine >= 4 {
        copy.push_str("美しい光沢と");
    }
    if traits.drape >= 4 {
        copy.push_str("優雅なドレープ感が");
    } else if traits.durability >= 4 {
        copy.push_str("確かな品質が");
    }
    copy.push_str("魅力。");

    if let Some(functional) = points.iter().find(|p| p.appeal == Appeal::Functional) {
        copy.push_str(&functional.description);
        copy.push('。');
    }

    copy
}

/// Run all four families against a resolved fabric
pub fn generate_selling_points(fabric: &ResolvedFabric<'_>) -> SellingReport {
    let mut points = material_points(fabric);
    points.extend(weave_points(fabric));
    points.extend(functional_points(fabric));
    points.extend(sustainability_points(fabric));

    let keywords = extract_keywords(fabric, &points);
    let copy = compose_copy(fabric, &points);

    SellingReport {
        points,
        keywords,
        copy,
    }
}

/// Selling report of a configuration; unknown weave or warp yields an empty report
#[tracing::instrument(skip(config, catalog), fields(weave = %config.weave_id))]
pub fn selling_points(config: &FabricConfiguration, catalog: &Catalog) -> SellingReport {
    config
        .resolve(catalog)
        .map_or_else(SellingReport::empty, |fabric| {
            generate_selling_points(&fabric)
        })
}
