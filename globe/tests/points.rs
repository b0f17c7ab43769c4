use globe::points::{country_centroid, parse_table, GeoPoint, COUNTRY_TABLE_STR};

#[test]
fn embedded_table_parses_with_sane_coordinates() {
    let table = parse_table(COUNTRY_TABLE_STR).expect("parse countries.tbl");
    assert!(table.len() >= 100);
    for (code, (lat, lon)) in &table {
        assert_eq!(code.len(), 2, "code {code} not two letters");
        assert!((-90.0..=90.0).contains(lat));
        assert!((-180.0..=180.0).contains(lon));
    }
}

#[test]
fn lookup_is_case_insensitive() {
    let upper = country_centroid("DE").expect("DE in table");
    let lower = country_centroid("de").expect("de resolves too");
    assert_eq!(upper, lower);
    assert!(upper.0 > 45.0 && upper.0 < 56.0);
}

#[test]
fn unknown_code_falls_back_to_origin() {
    assert!(country_centroid("ZZ").is_none());
    let p = GeoPoint::for_country("ZZ", "somewhere", 7, 1.5);
    assert_eq!(p.latitude.to_bits(), 0.0f32.to_bits());
    assert_eq!(p.longitude.to_bits(), 0.0f32.to_bits());
    assert_eq!(p.count, 7);
}

#[test]
fn known_code_resolves_from_the_table() {
    let p = GeoPoint::for_country("jp", "Japan", 42, 3.3);
    assert!((p.latitude - 36.20).abs() < 1e-3);
    assert!((p.longitude - 138.25).abs() < 1e-3);
    assert_eq!(p.country_code, "JP", "code is normalized to uppercase");
}

#[test]
fn malformed_fields_are_sanitized_not_rejected() {
    let p = GeoPoint::at("xx", "junk", 1, f32::NAN, 200.0, 400.0);
    assert_eq!(p.percentage.to_bits(), 0.0f32.to_bits());
    assert!((p.latitude - 90.0).abs() < 1e-6);
    assert!((p.longitude - 40.0).abs() < 1e-6);

    let q = GeoPoint::at("yy", "hot", 1, 250.0, f32::NAN, f32::INFINITY);
    assert!((q.percentage - 100.0).abs() < 1e-6);
    assert_eq!(q.latitude.to_bits(), 0.0f32.to_bits());
    assert_eq!(q.longitude.to_bits(), 0.0f32.to_bits());
}

#[test]
fn table_parse_rejects_bad_rows() {
    assert!(parse_table("US 37.0").is_err());
    assert!(parse_table("US north west").is_err());
    assert!(parse_table("# only comments\n\n").is_err());
    let ok = parse_table("# c\nFR 46.23 2.21\n").expect("single row");
    assert_eq!(ok.len(), 1);
}
