use viewer::data::{parse_stats, SAMPLE_STATS_STR};

#[test]
fn bundled_sample_parses_with_resolved_coordinates() {
    let points = parse_stats(SAMPLE_STATS_STR).expect("sample parses");
    assert!(points.len() >= 10);
    let resolved = points
        .iter()
        .filter(|p| p.latitude != 0.0 || p.longitude != 0.0)
        .count();
    assert!(resolved >= 10, "most sample countries resolve in the table");
    for p in &points {
        assert!((0.0..=100.0).contains(&p.percentage));
    }
}

#[test]
fn unknown_codes_survive_as_origin_points() {
    let points = parse_stats(r#"[{"country_code":"ZZ","count":3,"percentage":1.0}]"#)
        .expect("minimal record parses");
    assert_eq!(points.len(), 1);
    assert_eq!(points[0].latitude.to_bits(), 0.0f32.to_bits());
    assert_eq!(points[0].longitude.to_bits(), 0.0f32.to_bits());
    assert_eq!(points[0].count, 3);
}

#[test]
fn missing_optional_fields_default() {
    let points = parse_stats(r#"[{"country_code":"de"}]"#).expect("code-only record");
    assert_eq!(points[0].country_code, "DE");
    assert_eq!(points[0].count, 0);
    assert_eq!(points[0].percentage.to_bits(), 0.0f32.to_bits());
}

#[test]
fn malformed_json_is_an_error() {
    assert!(parse_stats("not json").is_err());
    assert!(parse_stats(r#"{"country_code":"US"}"#).is_err(), "must be an array");
}
