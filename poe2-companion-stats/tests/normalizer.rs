use poe2_companion_stats::{RawModifier, StatCatalog, normalize};

const BLOB: &str = r#"{
    "stat_100": { "stat_100": { "text": "提高 #% 攻击速度" } },
    "stat_200": { "stat_200": { "text": "+# 最大生命" } },
    "stat_300": { "stat_300": { "text": "增加 # 至 # 火焰伤害" } }
}"#;

fn raw(tag: &str, stat_id: Option<&str>, content: &str) -> RawModifier {
    RawModifier {
        tag_text: tag.to_string(),
        stat_id: stat_id.map(str::to_string),
        content: content.to_string(),
    }
}

#[test]
fn full_pipeline_single_value() {
    let catalog = StatCatalog::from_json(BLOB);
    let modifier = normalize(
        &raw("S3 + [10—20]", Some("explicit.stat_100"), "提高 15% 攻击速度"),
        &catalog,
    );

    assert_eq!(modifier.is_prefix, Some(false));
    assert_eq!(modifier.tier, Some(3));
    assert!(modifier.ranges.is_empty());
    assert_eq!(modifier.stat_id.as_deref(), Some("explicit.stat_100"));
    assert_eq!(modifier.template.as_deref(), Some("提高 #% 攻击速度"));
    assert_eq!(modifier.raw_text, "提高 15% 攻击速度");
    assert_eq!(modifier.values, Some(vec![15.0]));

    let children = modifier.children.expect("two surviving fragments");
    assert_eq!(children.len(), 2);
    assert_eq!(children[1].ranges[0].min, 10.0);
    assert_eq!(children[1].ranges[0].max, 20.0);
}

#[test]
fn inverted_rendering_negates_value() {
    let catalog = StatCatalog::from_json(BLOB);
    let modifier = normalize(
        &raw("P2", Some("explicit.stat_100"), "降低 10% 攻击速度"),
        &catalog,
    );
    assert_eq!(modifier.values, Some(vec![-10.0]));
}

#[test]
fn plus_template_accepts_negative_roll() {
    let catalog = StatCatalog::from_json(BLOB);
    let modifier = normalize(
        &raw("S1", Some("explicit.stat_200"), "-5 最大生命"),
        &catalog,
    );
    assert_eq!(modifier.values, Some(vec![-5.0]));
}

#[test]
fn two_value_roll() {
    let catalog = StatCatalog::from_json(BLOB);
    let modifier = normalize(
        &raw(
            "P1 [3-5] 到 [6-9]",
            Some("explicit.stat_300"),
            "增加 4 至 8 火焰伤害",
        ),
        &catalog,
    );
    assert_eq!(modifier.values, Some(vec![4.0, 8.0]));
    assert_eq!(modifier.ranges.len(), 2);
}

#[test]
fn missing_dataset_entry_degrades_to_no_values() {
    let catalog = StatCatalog::from_json(BLOB);
    let modifier = normalize(
        &raw("P4", Some("explicit.stat_999"), "未知词缀文本"),
        &catalog,
    );
    assert_eq!(modifier.template, None);
    assert_eq!(modifier.values, None);
    assert_eq!(modifier.tier, Some(4));
    assert_eq!(modifier.raw_text, "未知词缀文本");
}

#[test]
fn missing_stat_id_degrades_to_no_values() {
    let catalog = StatCatalog::from_json(BLOB);
    let modifier = normalize(&raw("", None, "某种文本"), &catalog);
    assert_eq!(modifier.stat_id, None);
    assert_eq!(modifier.template, None);
    assert_eq!(modifier.values, None);
    // All-dropped tag still yields the sentinel fields, not an absent tag.
    assert_eq!(modifier.is_prefix, None);
    assert_eq!(modifier.tier, None);
    assert!(modifier.ranges.is_empty());
}

#[test]
fn content_mismatch_yields_no_values() {
    let catalog = StatCatalog::from_json(BLOB);
    let modifier = normalize(
        &raw("S2", Some("explicit.stat_100"), "完全无关的文本"),
        &catalog,
    );
    assert_eq!(modifier.template.as_deref(), Some("提高 #% 攻击速度"));
    assert_eq!(modifier.values, None);
}

#[test]
fn normalize_is_idempotent() {
    let catalog = StatCatalog::from_json(BLOB);
    let input = raw("S3 + [10—20]", Some("explicit.stat_100"), "提高 15% 攻击速度");
    assert_eq!(normalize(&input, &catalog), normalize(&input, &catalog));
}
