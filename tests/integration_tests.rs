//! Integration tests for the mediatype library

use mediatype::*;
use std::collections::HashMap;

#[test]
fn test_vendor_tree_with_suffix_and_charset() {
    let header = "application/vnd.openxmlformats-officedocument.wordprocessingml.document+xml; charset=utf-8";
    let mt = ImmutableMediaType::parse(header).unwrap();

    assert_eq!(mt.main_type(), "application");
    assert_eq!(mt.trees(), ["vnd", "openxmlformats-officedocument", "wordprocessingml"]);
    assert_eq!(mt.prefix(), "vnd");
    assert_eq!(mt.sub_type(), "document");
    assert_eq!(mt.suffix(), "xml");
    assert_eq!(mt.charset(), Some("utf-8"));
    assert_eq!(mt.format().unwrap(), header);
}

#[test]
fn test_opendocument_scenario() {
    let mt = split_type("application/vnd.oasis.opendocument.text");
    assert_eq!(mt.main, "application");
    assert_eq!(mt.tree, ["vnd", "oasis", "opendocument"]);
    assert_eq!(mt.sub, "text");
    assert_eq!(mt.suffix, "");
}

#[test]
fn test_epub_scenario() {
    let mt = split_type("application/epub+zip");
    assert_eq!(mt.main, "application");
    assert!(mt.tree.is_empty());
    assert_eq!(mt.sub, "epub");
    assert_eq!(mt.suffix, "zip");
}

#[test]
fn test_html_charset_scenario() {
    let mt = MutableMediaType::parse("text/html; charset=UTF-8").unwrap();
    assert_eq!(mt.main_type(), "text");
    assert_eq!(mt.sub_type(), "html");

    let mut expected = HashMap::new();
    expected.insert("charset".to_string(), "UTF-8".to_string());
    assert_eq!(mt.parameters(), &expected);
    assert_eq!(mt.format().unwrap(), "text/html; charset=UTF-8");
}

#[test]
fn test_empty_scenario() {
    let mt = MutableMediaType::parse("").unwrap();
    assert_eq!(mt, MutableMediaType::new());
    assert_eq!(mt.full_type(), "");
    assert_eq!(mt.format().unwrap(), "");
}

#[test]
fn test_missing_slash_is_not_an_error() {
    let mt = ImmutableMediaType::parse("app").unwrap();
    assert_eq!(mt.main_type(), "app");
    assert_eq!(mt.sub_type(), "");
    assert!(mt.trees().is_empty());
    assert_eq!(mt.suffix(), "");
    assert_eq!(mt.full_type(), "app");
}

#[test]
fn test_build_then_parse_back() {
    let built = MutableMediaType::new()
        .with_main("application")
        .with_tree(["vnd", "example", "v2"])
        .with_sub("report")
        .with_suffix("json")
        .with_parameter("profile", "https://example.com/report schema")
        .with_parameter("charset", "utf-8");

    let header = built.format().unwrap();
    assert_eq!(
        header,
        "application/vnd.example.v2.report+json; charset=utf-8; profile=\"https://example.com/report schema\""
    );

    let parsed: MutableMediaType = header.parse().unwrap();
    assert_eq!(parsed, built);
}

#[test]
fn test_snapshot_survives_mutation() {
    let mut mt = MutableMediaType::parse("image/svg+xml; a=1").unwrap();
    let snapshot = mt.immutable();
    let before = snapshot.format().unwrap();

    mt.main.push_str("-changed");
    mt.tree = vec!["vnd".to_string()];
    mt.params.insert("b".to_string(), "2".to_string());

    assert_eq!(snapshot.format().unwrap(), before);
    assert_ne!(mt.format().unwrap(), before);
}

#[test]
fn test_decode_errors_are_surfaced() {
    let err = ImmutableMediaType::parse("text/plain; charset=\"utf-8").unwrap_err();
    assert!(matches!(err, Error::Decode(_)));

    let err = parse_media_type("text/plain; a=1; a=2").unwrap_err();
    assert!(matches!(err, Error::Decode(_)));
}

#[test]
fn test_encode_errors_are_surfaced() {
    let mt = MutableMediaType::new()
        .with_main("text")
        .with_sub("plain")
        .with_parameter("ok", "fine")
        .with_parameter("not;a;token", "x");
    assert!(matches!(mt.format(), Err(Error::Encode(_))));
}

#[test]
fn test_type_part_cannot_smuggle_header_text() {
    let mut mt = MutableMediaType::parse("text/html; charset=utf-8").unwrap();
    mt.sub = "html\r\nX-Injected: 1".to_string();
    assert!(matches!(mt.format(), Err(Error::Encode(_))));

    mt.sub = "plain;evil=1".to_string();
    assert!(matches!(mt.immutable().format(), Err(Error::Encode(_))));
}

#[test]
fn test_broken_continuations_reject_the_header() {
    for header in [
        "text/plain; a=1; title*1=foo; x*y=z",
        "text/plain; a*0=x; a*2=y",
        "text/plain; *=utf-8''x",
    ] {
        let err = MutableMediaType::parse(header).unwrap_err();
        assert!(matches!(err, Error::Decode(_)), "{header:?} gave {err:?}");
    }
}

#[test]
fn test_non_ascii_parameters_round_trip() {
    let mt = MutableMediaType::new()
        .with_main("text")
        .with_sub("plain")
        .with_parameter("title", "Grüße, 世界");
    let header = mt.format().unwrap();
    assert!(header.is_ascii());
    assert!(header.starts_with("text/plain; title*=utf-8''"));
    assert_eq!(MutableMediaType::parse(&header).unwrap(), mt);
}

#[test]
fn test_separator_constants() {
    assert_eq!(MAIN_SUB_SEPARATOR, '/');
    assert_eq!(TREE_SEPARATOR, '.');
    assert_eq!(SUFFIX_SEPARATOR, '+');
}

#[test]
fn test_generic_over_both_models() {
    fn describe(mt: &impl MediaType) -> String {
        format!("{} [{}] {}", mt.main_type(), mt.prefix(), mt.sub_type())
    }

    let mutable = MutableMediaType::parse("application/vnd.ms-excel").unwrap();
    let immutable = mutable.immutable();
    assert_eq!(describe(&mutable), describe(&immutable));
    assert_eq!(describe(&immutable), "application [vnd] ms-excel");
}
