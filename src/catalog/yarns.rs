//! Built-in yarn reference table

use crate::catalog::weave::ColorRequirement;
use crate::catalog::yarn::{
    Certification, Fiber, SpecialProperty, YarnCategory, YarnCharacteristics, YarnSpec,
    YarnSpecBuilder,
};
use crate::io::error::Result;

// [strength, softness, luster, elasticity, absorbency, durability]
const fn traits(values: [u8; 6]) -> YarnCharacteristics {
    let [strength, softness, luster, elasticity, absorbency, durability] = values;
    YarnCharacteristics {
        strength,
        softness,
        luster,
        elasticity,
        absorbency,
        durability,
    }
}

fn yarn(
    id: &str,
    name: &str,
    category: YarnCategory,
    ne: f64,
    characteristics: [u8; 6],
    price_level: u8,
) -> YarnSpecBuilder {
    YarnSpec::builder(id, name, category)
        .ne(ne)
        .characteristics(traits(characteristics))
        .price_level(price_level)
}

#[rustfmt::skip]
fn cotton_yarns() -> Vec<YarnSpecBuilder> {
    use YarnCategory::Cotton;
    vec![
        yarn("cotton_carded_20", "綿 カード糸 20番", Cotton, 20.0, [4, 2, 1, 1, 5, 4], 1)
            .fiber(Fiber::Cotton, 100)
            .risk("ネップが出やすい"),
        yarn("cotton_combed_40", "綿 コーマ糸 40番", Cotton, 40.0, [3, 4, 2, 1, 5, 3], 2)
            .fiber(Fiber::Cotton, 100),
        yarn("cotton_combed_60", "綿 コーマ糸 60番", Cotton, 60.0, [3, 4, 3, 1, 5, 3], 3)
            .fiber(Fiber::Cotton, 100)
            .risk("高密度では経糸切れに注意"),
        yarn("cotton_combed_80", "綿 コーマ糸 80番", Cotton, 80.0, [2, 5, 3, 1, 5, 2], 4)
            .fiber(Fiber::Cotton, 100)
            .risk("細番手のため糸切れしやすい"),
        yarn("cotton_mercerized_60", "綿 シルケット加工糸 60番", Cotton, 60.0, [4, 4, 4, 1, 4, 3], 4)
            .fiber(Fiber::Cotton, 100),
        yarn("cotton_organic_40", "オーガニックコットン 40番", Cotton, 40.0, [3, 4, 2, 1, 5, 3], 3)
            .organic_fiber(Fiber::Cotton, 100)
            .certification(Certification::Gots)
            .certification(Certification::OekoTex)
            .risk("ロット間で色味・太さにばらつきが出やすい"),
        yarn("cotton_supima_80", "スーピマコットン 80番", Cotton, 80.0, [3, 5, 4, 1, 5, 3], 5)
            .fiber(Fiber::Cotton, 100),
        yarn("cotton_denim_10", "デニム用ロープ染色糸 10番", Cotton, 10.0, [5, 2, 1, 1, 4, 5], 2)
            .fiber(Fiber::Cotton, 100)
            .color_requirement(ColorRequirement::IndigoDenim)
            .risk("インディゴの色落ち・色移り"),
    ]
}

#[rustfmt::skip]
fn bast_and_wool_yarns() -> Vec<YarnSpecBuilder> {
    vec![
        yarn("linen_25", "リネン 25番", YarnCategory::Linen, 25.0, [5, 2, 3, 0, 5, 4], 4)
            .fiber(Fiber::Linen, 100)
            .risk("スラブによる太さムラ"),
        yarn("linen_cotton_40", "リネン・コットン混 40番", YarnCategory::Blend, 40.0, [4, 3, 2, 1, 5, 4], 3)
            .fiber(Fiber::Linen, 55)
            .fiber(Fiber::Cotton, 45)
            .blend_advantage("リネンのシャリ感")
            .blend_advantage("コットンの柔らかさ"),
        yarn("hemp_20", "ヘンプ 20番", YarnCategory::Linen, 20.0, [5, 1, 2, 0, 4, 5], 4)
            .fiber(Fiber::Hemp, 100)
            .certification(Certification::OekoTex),
        yarn("wool_worsted_48", "ウール梳毛糸 1/48", YarnCategory::Wool, 32.0, [3, 4, 2, 4, 4, 3], 4)
            .fiber(Fiber::Wool, 100)
            .risk("縮絨・フェルト化"),
        yarn("merino_superfine_60", "スーパーファインメリノ 1/60", YarnCategory::Wool, 40.0, [2, 5, 3, 4, 4, 2], 5)
            .fiber(Fiber::MerinoWool, 100)
            .special_property(SpecialProperty::TemperatureRegulation)
            .risk("毛羽による糸切れ"),
        yarn("cashmere_2_60", "カシミヤ 2/60", YarnCategory::Wool, 30.0, [2, 5, 3, 3, 4, 2], 7)
            .fiber(Fiber::Cashmere, 100)
            .special_property(SpecialProperty::Insulation)
            .risk("強度が低く摩耗しやすい"),
    ]
}

#[rustfmt::skip]
fn silk_and_regenerated_yarns() -> Vec<YarnSpecBuilder> {
    vec![
        yarn("silk_21d", "生糸 21デニール", YarnCategory::Silk, 250.0, [3, 5, 5, 2, 4, 2], 7)
            .fiber(Fiber::Silk, 100)
            .risk("擦れによる白化")
            .risk("紫外線による黄変"),
        yarn("silk_spun_60", "絹紡糸 60番", YarnCategory::Silk, 60.0, [2, 5, 4, 2, 4, 2], 6)
            .fiber(Fiber::Silk, 100),
        yarn("viscose_40", "レーヨン 40番", YarnCategory::Regenerated, 40.0, [2, 5, 4, 1, 5, 2], 2)
            .fiber(Fiber::Viscose, 100)
            .risk("湿潤時の強度低下"),
        yarn("modal_50", "モダール 50番", YarnCategory::Regenerated, 50.0, [3, 5, 4, 1, 5, 3], 3)
            .fiber(Fiber::Modal, 100),
        yarn("lyocell_40", "テンセル™ リヨセル 40番", YarnCategory::Regenerated, 40.0, [4, 5, 4, 1, 5, 3], 4)
            .fiber(Fiber::Lyocell, 100)
            .certification(Certification::Fsc)
            .certification(Certification::OekoTex)
            .brand_name("TENCEL™")
            .risk("フィブリル化"),
        yarn("cupro_75d", "キュプラ 75デニール", YarnCategory::Regenerated, 70.0, [2, 5, 5, 1, 5, 2], 4)
            .fiber(Fiber::Cupro, 100),
    ]
}

#[rustfmt::skip]
fn synthetic_and_functional_yarns() -> Vec<YarnSpecBuilder> {
    vec![
        yarn("polyester_75d", "ポリエステル 75デニール", YarnCategory::Synthetic, 70.0, [5, 2, 3, 2, 1, 5], 1)
            .fiber(Fiber::Polyester, 100),
        yarn("polyester_recycled_150d", "リサイクルポリエステル 150デニール", YarnCategory::Synthetic, 35.0, [5, 2, 2, 2, 1, 5], 2)
            .fiber(Fiber::Polyester, 100)
            .certification(Certification::Grs),
        yarn("nylon_70d", "ナイロン 70デニール", YarnCategory::Synthetic, 76.0, [5, 3, 3, 3, 1, 5], 2)
            .fiber(Fiber::Nylon, 100),
        yarn("tc_65_35_45", "T/C 65/35 45番", YarnCategory::Blend, 45.0, [4, 3, 2, 1, 3, 4], 1)
            .fiber(Fiber::Polyester, 65)
            .fiber(Fiber::Cotton, 35)
            .blend_advantage("形態安定性")
            .blend_advantage("速乾性"),
        yarn("cotton_spandex_40", "コットン・ストレッチ 40番", YarnCategory::Blend, 40.0, [3, 4, 2, 5, 4, 3], 3)
            .fiber(Fiber::Cotton, 95)
            .fiber(Fiber::Spandex, 5)
            .blend_advantage("ストレッチ性")
            .risk("ポリウレタンの劣化"),
        yarn("coolmax_50", "COOLMAX® 50番", YarnCategory::Functional, 50.0, [4, 3, 2, 2, 2, 4], 4)
            .fiber(Fiber::Polyester, 100)
            .brand_name("COOLMAX®")
            .special_property(SpecialProperty::QuickDry)
            .special_property(SpecialProperty::MoistureWicking),
        yarn("thermolite_40", "THERMOLITE® 40番", YarnCategory::Functional, 40.0, [4, 4, 2, 2, 2, 4], 4)
            .fiber(Fiber::Polyester, 100)
            .brand_name("THERMOLITE®")
            .special_property(SpecialProperty::Insulation),
        yarn("silver_antibacterial_40", "銀イオン抗菌糸 40番", YarnCategory::Functional, 40.0, [4, 3, 2, 2, 3, 4], 5)
            .fiber(Fiber::Polyester, 80)
            .fiber(Fiber::Cotton, 20)
            .special_property(SpecialProperty::Antibacterial)
            .special_property(SpecialProperty::UvProtection),
        yarn("crepe_polyester_100d", "強撚ポリエステル 100デニール", YarnCategory::Synthetic, 53.0, [4, 3, 2, 4, 1, 4], 3)
            .fiber(Fiber::Polyester, 100)
            .risk("撚り戻りによるビリ"),
    ]
}

/// Every built-in yarn in catalog order
///
/// # Errors
///
/// Returns an error if an entry fails yarn validation
pub fn builtin_yarns() -> Result<Vec<YarnSpec>> {
    cotton_yarns()
        .into_iter()
        .chain(bast_and_wool_yarns())
        .chain(silk_and_regenerated_yarns())
        .chain(synthetic_and_functional_yarns())
        .map(YarnSpecBuilder::build)
        .collect()
}
