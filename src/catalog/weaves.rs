//! Built-in weave reference table

use crate::catalog::generators;
use crate::catalog::weave::{
    ColorRequirement, PileHeight, WeaveCategory, WeaveCharacteristics, WeaveDefinition,
    YarnRequirement,
};
use ndarray::Array2;

// Traits are listed as [durability, drape, breathability, wrinkle_resistance, shine]
fn entry(
    id: &str,
    name: &str,
    name_en: &str,
    category: WeaveCategory,
    (repeat_x, repeat_y, matrix): (usize, usize, Array2<bool>),
    [durability, drape, breathability, wrinkle_resistance, shine]: [u8; 5],
    gsm_modifier: f64,
    production_difficulty: u8,
    description: &str,
    applications: &[&str],
) -> WeaveDefinition {
    WeaveDefinition {
        id: id.to_string(),
        name: name.to_string(),
        name_en: name_en.to_string(),
        category,
        matrix,
        repeat_x,
        repeat_y,
        characteristics: WeaveCharacteristics {
            durability,
            drape,
            breathability,
            wrinkle_resistance,
            shine,
        },
        gsm_modifier,
        production_difficulty,
        pile: None,
        color_requirement: None,
        yarn_requirement: None,
        twill_angle: None,
        wale_options: Vec::new(),
        description: description.to_string(),
        applications: applications.iter().map(|a| (*a).to_string()).collect(),
    }
}

#[rustfmt::skip]
fn plain_weaves() -> Vec<WeaveDefinition> {
    use WeaveCategory::Plain;
    vec![
        entry(
            "plain", "平織", "Plain Weave", Plain,
            (2, 2, generators::plain()),
            [5, 2, 5, 2, 1], 1.0, 1,
            "経糸と緯糸が1本ずつ交互に交差する最も基本的な織り。",
            &["シャツ", "ブラウス", "ハンカチ", "裏地"],
        ),
        entry(
            "oxford", "オックスフォード", "Oxford", Plain,
            (4, 4, generators::basket(2)),
            [4, 3, 4, 3, 2], 1.15, 2,
            "2本ずつの糸を平織にしたバスケット織の一種。通気性が良く丈夫。",
            &["ボタンダウンシャツ", "カジュアルシャツ", "スポーツウェア"],
        ),
        entry(
            "broadcloth", "ブロード", "Broadcloth", Plain,
            (2, 2, generators::plain()),
            [4, 3, 4, 3, 3], 0.95, 2,
            "高密度平織。経糸密度を高くすることで滑らかで光沢のある表面。",
            &["ドレスシャツ", "ブラウス", "フォーマルウェア"],
        ),
        entry(
            "poplin", "ポプリン", "Poplin", Plain,
            (2, 2, generators::plain()),
            [4, 4, 4, 3, 3], 0.9, 2,
            "経糸を緯糸より細く密にした平織。軽くてなめらか。",
            &["スーツ", "コート", "ドレス", "シャツ"],
        ),
        WeaveDefinition {
            color_requirement: Some(ColorRequirement::Bicolor),
            ..entry(
                "chambray", "シャンブレー", "Chambray", Plain,
                (2, 2, generators::plain()),
                [4, 3, 4, 2, 2], 1.0, 2,
                "色経と白緯（または逆）を用いた平織。独特の霜降り調。",
                &["カジュアルシャツ", "ワークウェア", "サマードレス"],
            )
        },
        WeaveDefinition {
            yarn_requirement: Some(YarnRequirement {
                min_ne: Some(60.0),
                ..YarnRequirement::default()
            }),
            ..entry(
                "voile", "ボイル", "Voile", Plain,
                (2, 2, generators::plain()),
                [2, 5, 5, 1, 2], 0.5, 3,
                "細番手糸を使用した薄地平織。透け感がある軽やかな生地。",
                &["カーテン", "スカーフ", "サマーブラウス"],
            )
        },
        WeaveDefinition {
            yarn_requirement: Some(YarnRequirement {
                max_ne: Some(20.0),
                ..YarnRequirement::default()
            }),
            ..entry(
                "canvas", "帆布（キャンバス）", "Canvas", Plain,
                (2, 2, generators::plain()),
                [5, 1, 3, 4, 1], 2.0, 2,
                "太い糸を高密度で織った堅牢な平織。",
                &["バッグ", "テント", "スニーカー", "作業着"],
            )
        },
        entry(
            "ripstop", "リップストップ", "Ripstop", Plain,
            (8, 8, generators::ripstop(8)),
            [5, 3, 4, 4, 2], 1.1, 3,
            "一定間隔で補強糸を入れた平織。引き裂き強度が高い。",
            &["アウトドアウェア", "パラシュート", "バックパック"],
        ),
    ]
}

#[rustfmt::skip]
fn twill_weaves() -> Vec<WeaveDefinition> {
    use WeaveCategory::Twill;
    vec![
        WeaveDefinition {
            twill_angle: Some(63),
            ..entry(
                "twill_2_1", "2/1ツイル", "2/1 Twill", Twill,
                (3, 3, generators::twill(3, 2, 1, 1)),
                [4, 4, 3, 3, 3], 1.05, 2,
                "経糸2本・緯糸1本の比率で綾目を形成。",
                &["チノパン", "ジャケット", "ユニフォーム"],
            )
        },
        WeaveDefinition {
            twill_angle: Some(45),
            ..entry(
                "twill_2_2", "2/2ツイル", "2/2 Twill", Twill,
                (4, 4, generators::twill(4, 2, 1, 1)),
                [4, 4, 3, 4, 3], 1.1, 2,
                "均等な2/2綾。表裏同じ外観。",
                &["スーツ", "コート", "スカート"],
            )
        },
        WeaveDefinition {
            twill_angle: Some(63),
            ..entry(
                "twill_3_1", "3/1ツイル", "3/1 Twill", Twill,
                (4, 4, generators::twill(4, 3, 1, 1)),
                [4, 4, 3, 4, 4], 1.1, 2,
                "経糸3本・緯糸1本。表面に経糸が多く出る。",
                &["デニム", "チノ", "ワークウェア"],
            )
        },
        WeaveDefinition {
            twill_angle: Some(-63),
            color_requirement: Some(ColorRequirement::IndigoDenim),
            ..entry(
                "denim", "デニム（右綾）", "Denim (Right-hand Twill)", Twill,
                (4, 4, generators::right_hand_twill(4, 3)),
                [5, 2, 3, 3, 2], 1.4, 2,
                "インディゴ経糸と白緯糸を使った右上がり3/1綾織。",
                &["ジーンズ", "ジャケット", "バッグ"],
            )
        },
        WeaveDefinition {
            twill_angle: Some(63),
            color_requirement: Some(ColorRequirement::IndigoDenim),
            ..entry(
                "denim_left", "デニム（左綾）", "Denim (Left-hand Twill)", Twill,
                (4, 4, generators::twill(4, 3, 1, 1)),
                [5, 2, 3, 3, 2], 1.4, 2,
                "左上がりの綾織デニム。右綾よりソフトな風合い。",
                &["ジーンズ", "カジュアルウェア"],
            )
        },
        WeaveDefinition {
            twill_angle: Some(0),
            ..entry(
                "broken_twill", "ブロークンツイル", "Broken Twill", Twill,
                (8, 4, generators::broken_twill(4)),
                [5, 3, 3, 4, 2], 1.35, 3,
                "綾目が途中で反転するジグザグ模様。ねじれ防止効果。",
                &["ジーンズ", "ワークウェア"],
            )
        },
        entry(
            "herringbone", "ヘリンボーン", "Herringbone", Twill,
            (8, 8, generators::herringbone(4)),
            [4, 4, 3, 4, 3], 1.15, 3,
            "魚の骨のようなV字パターン。クラシックな印象。",
            &["スーツ", "コート", "ジャケット", "ブレザー"],
        ),
        WeaveDefinition {
            twill_angle: Some(63),
            ..entry(
                "gabardine", "ギャバジン", "Gabardine", Twill,
                (4, 4, generators::twill(4, 2, 1, 2)),
                [5, 3, 3, 5, 4], 1.2, 3,
                "急角度の綾目が特徴。耐久性が高く、シワになりにくい。",
                &["トレンチコート", "スーツ", "パンツ"],
            )
        },
        WeaveDefinition {
            twill_angle: Some(63),
            ..entry(
                "cavalry_twill", "カバルリーツイル", "Cavalry Twill", Twill,
                (6, 6, generators::twill(6, 4, 2, 1)),
                [5, 3, 3, 5, 3], 1.25, 4,
                "二重の斜め畝が特徴。乗馬服に由来。",
                &["乗馬パンツ", "ジャケット", "スラックス"],
            )
        },
        WeaveDefinition {
            twill_angle: Some(75),
            ..entry(
                "whipcord", "ウィップコード", "Whipcord", Twill,
                (4, 4, generators::twill(4, 3, 1, 2)),
                [5, 2, 3, 5, 3], 1.3, 4,
                "急勾配で明瞭な斜め畝。非常に丈夫。",
                &["ユニフォーム", "乗馬服", "アウトドアウェア"],
            )
        },
    ]
}

#[rustfmt::skip]
fn satin_weaves() -> Vec<WeaveDefinition> {
    use WeaveCategory::Satin;
    vec![
        entry(
            "satin_5", "5枚朱子", "5-Shaft Satin", Satin,
            (5, 5, generators::satin(5, 2)),
            [2, 5, 3, 2, 5], 1.0, 3,
            "5本飛びの朱子織。光沢があり滑らか。",
            &["ドレス", "スカーフ", "ネクタイ", "裏地"],
        ),
        entry(
            "satin_8", "8枚朱子", "8-Shaft Satin", Satin,
            (8, 8, generators::satin(8, 3)),
            [2, 5, 3, 2, 5], 1.05, 4,
            "8本飛びのより滑らかな朱子織。",
            &["イブニングドレス", "高級裏地", "リボン"],
        ),
        entry(
            "sateen", "サテン（緯朱子）", "Sateen", Satin,
            (5, 5, generators::sateen(5, 2)),
            [3, 5, 3, 2, 4], 1.0, 3,
            "緯糸が表面に多く出る朱子織。コットンでよく使用。",
            &["シーツ", "ピローケース", "カーテン"],
        ),
        entry(
            "crepe_back_satin", "クレープバックサテン", "Crepe Back Satin", Satin,
            (5, 5, generators::satin(5, 2)),
            [3, 5, 3, 3, 4], 1.1, 4,
            "表が光沢のサテン、裏がクレープ調のリバーシブル。",
            &["ドレス", "ブラウス", "スカーフ"],
        ),
    ]
}

#[rustfmt::skip]
fn dobby_weaves() -> Vec<WeaveDefinition> {
    use WeaveCategory::Dobby;
    vec![
        entry(
            "dobby_diamond", "ドビーダイヤ", "Dobby Diamond", Dobby,
            (8, 8, generators::diamond(8, 3.0)),
            [4, 3, 4, 3, 2], 1.05, 4,
            "ダイヤ柄の小紋ドビー。",
            &["シャツ", "ブラウス", "ネクタイ"],
        ),
        entry(
            "dobby_dot", "ドビードット", "Dobby Dot", Dobby,
            (6, 6, generators::dot(6, 2, 3)),
            [4, 3, 4, 3, 2], 1.0, 3,
            "規則的なドットパターン。",
            &["シャツ", "ブラウス", "ハンカチ"],
        ),
        entry(
            "pique", "ピケ", "Piqué", Dobby,
            (4, 4, generators::rows(4, 4)),
            [4, 2, 5, 4, 2], 1.15, 3,
            "畝のある立体的なテクスチャ。",
            &["ポロシャツ", "スポーツウェア", "子供服"],
        ),
        entry(
            "waffle", "ワッフル", "Waffle Weave", Dobby,
            (8, 8, generators::waffle(4)),
            [3, 3, 5, 2, 1], 1.3, 4,
            "ワッフル状の凹凸。吸水性が高い。",
            &["タオル", "バスローブ", "カジュアルウェア"],
        ),
        entry(
            "houndstooth", "千鳥格子", "Houndstooth", Dobby,
            (8, 8, generators::houndstooth(4)),
            [4, 3, 3, 4, 2], 1.1, 4,
            "犬の歯に似た特徴的なパターン。",
            &["ジャケット", "コート", "スカート", "パンツ"],
        ),
        entry(
            "birds_eye", "バーズアイ", "Bird's Eye", Dobby,
            (4, 4, generators::dot(4, 1, 2)),
            [4, 3, 4, 3, 2], 1.05, 3,
            "鳥の目のような小さな菱形模様。",
            &["タオル", "おむつ", "ドレスシャツ"],
        ),
        entry(
            "dobby_stripe", "ドビーストライプ", "Dobby Stripe", Dobby,
            (
                8,
                2,
                generators::stripe_mask(&[true, true, false, false, true, false, true, false], 2),
            ),
            [4, 3, 4, 3, 2], 1.0, 3,
            "ドビー機構で作られた変化のあるストライプ。",
            &["ドレスシャツ", "タイ", "スカーフ"],
        ),
    ]
}

#[rustfmt::skip]
fn jacquard_weaves() -> Vec<WeaveDefinition> {
    use WeaveCategory::Jacquard;
    vec![
        entry(
            "jacquard_damask", "ダマスク", "Damask", Jacquard,
            (16, 16, generators::damask(16, 6.0, 4)),
            [4, 4, 3, 3, 4], 1.2, 5,
            "対照的な織りで模様を表現する伝統的なジャカード織。",
            &["テーブルクロス", "ナプキン", "カーテン", "ドレス"],
        ),
        entry(
            "jacquard_paisley", "ペイズリー", "Paisley", Jacquard,
            (16, 16, generators::paisley(16, 5.0, 2.0)),
            [3, 4, 3, 3, 3], 1.15, 5,
            "ペイズリー模様のジャカード織。",
            &["ネクタイ", "スカーフ", "ドレス", "装飾品"],
        ),
        entry(
            "brocade", "ブロケード", "Brocade", Jacquard,
            (12, 12, generators::brocade(12)),
            [3, 3, 2, 4, 5], 1.4, 5,
            "浮き上がった装飾模様が特徴の豪華な織物。",
            &["フォーマルウェア", "カーテン", "家具", "民族衣装"],
        ),
    ]
}

#[rustfmt::skip]
fn pile_weaves() -> Vec<WeaveDefinition> {
    use WeaveCategory::Pile;
    vec![
        WeaveDefinition {
            pile: Some(PileHeight::Short),
            ..entry(
                "velvet", "ベルベット", "Velvet", Pile,
                (4, 4, generators::rows(4, 4)),
                [3, 4, 2, 2, 4], 1.8, 5,
                "短いパイルが密に立つ高級感のある生地。",
                &["ドレス", "ジャケット", "カーテン", "家具"],
            )
        },
        WeaveDefinition {
            pile: Some(PileHeight::Medium),
            wale_options: vec![8, 11, 14, 16, 21],
            ..entry(
                "corduroy", "コーデュロイ", "Corduroy", Pile,
                (8, 4, generators::cords(8, 4, 4)),
                [4, 3, 3, 3, 2], 1.6, 4,
                "縦畝のパイル織。カジュアルで暖かみがある。",
                &["パンツ", "ジャケット", "スカート", "子供服"],
            )
        },
        WeaveDefinition {
            pile: Some(PileHeight::Loop),
            ..entry(
                "terry", "テリー（タオル地）", "Terry Cloth", Pile,
                (4, 4, generators::solid(4, 4)),
                [4, 2, 5, 2, 1], 2.0, 3,
                "ループパイルで吸水性が高い。",
                &["タオル", "バスローブ", "スポーツウェア"],
            )
        },
    ]
}

#[rustfmt::skip]
fn special_weaves() -> Vec<WeaveDefinition> {
    use WeaveCategory::Special;
    vec![
        entry(
            "leno", "絡み織（レノ）", "Leno Weave", Special,
            (4, 4, generators::columns(4, 4)),
            [3, 4, 5, 2, 2], 0.7, 4,
            "経糸同士が絡み合う透かし織。",
            &["カーテン", "スカーフ", "夏物"],
        ),
        entry(
            "double_cloth", "二重織", "Double Cloth", Special,
            (8, 8, generators::double_cloth(8, 4)),
            [5, 2, 2, 4, 2], 2.0, 5,
            "2層の布を同時に織り上げる。リバーシブル可能。",
            &["コート", "ジャケット", "ブランケット"],
        ),
        WeaveDefinition {
            yarn_requirement: Some(YarnRequirement {
                crepe_yarn: true,
                ..YarnRequirement::default()
            }),
            ..entry(
                "crepe", "クレープ", "Crepe", Special,
                (4, 4, generators::crepe(4)),
                [3, 5, 4, 1, 2], 0.9, 4,
                "シボ（しわ）のある独特の風合い。",
                &["ドレス", "ブラウス", "スカーフ"],
            )
        },
        entry(
            "seersucker", "シアサッカー", "Seersucker", Special,
            (8, 4, generators::seersucker(4, 4)),
            [4, 3, 5, 4, 1], 1.0, 4,
            "交互に平坦部と波打つ部分がある。涼しげで夏向き。",
            &["夏物スーツ", "シャツ", "パジャマ"],
        ),
        entry(
            "ottoman", "オットマン", "Ottoman", Special,
            (2, 6, generators::ottoman(2, 6, 3)),
            [4, 2, 3, 4, 3], 1.3, 3,
            "太い横畝が特徴のしっかりした生地。",
            &["ジャケット", "コート", "インテリア"],
        ),
        entry(
            "honeycomb", "ハニカム", "Honeycomb", Special,
            (12, 12, generators::honeycomb(6)),
            [4, 3, 5, 3, 1], 1.2, 4,
            "蜂の巣状の立体構造。吸水性と保温性が高い。",
            &["タオル", "寝具", "スポーツウェア"],
        ),
        entry(
            "mock_leno", "モックレノ", "Mock Leno", Special,
            (6, 6, generators::mock_leno(6, 3)),
            [3, 4, 5, 2, 2], 0.8, 2,
            "レノ織に似た透かし効果を平織で実現。",
            &["夏物", "カーテン", "インテリア"],
        ),
    ]
}

/// Every built-in weave, grouped by category in catalog order
pub fn builtin_weaves() -> Vec<WeaveDefinition> {
    let mut weaves = plain_weaves();
    weaves.extend(twill_weaves());
    weaves.extend(satin_weaves());
    weaves.extend(dobby_weaves());
    weaves.extend(jacquard_weaves());
    weaves.extend(pile_weaves());
    weaves.extend(special_weaves());
    weaves
}
