use lectern_core::consts::DOI_NOT_FOUND;
use lectern_core::extract::{extract_identifier, extract_pages, extract_text, find_identifier};

mod common;

#[test]
fn test_extract_pages_one_entry_per_page() {
    let pages = extract_pages(&common::sample_pdf());
    assert_eq!(pages.len(), 3);
    assert_eq!(pages[0], "Quantum transport in layered materials");
    assert_eq!(pages[2], "References");
}

#[test]
fn test_extract_text_terminates_each_page() {
    let text = extract_text(&common::sample_pdf());
    assert_eq!(
        text,
        "Quantum transport in layered materials\n\
         Published as doi:10.1000/xyz123 in 2021\n\
         References\n"
    );
}

#[test]
fn test_extract_text_of_garbage_is_empty() {
    assert_eq!(extract_text(b"definitely not a pdf"), "");
    assert!(extract_pages(b"").is_empty());
}

#[test]
fn test_page_without_text_is_empty_string() {
    let pdf = common::build_pdf(&[&["cover"], &[]]);
    let pages = extract_pages(&pdf);
    assert_eq!(pages, vec!["cover".to_string(), String::new()]);
    assert_eq!(extract_text(&pdf), "cover\n\n");
}

#[test]
fn test_identifier_found_in_pdf() {
    let text = extract_text(&common::sample_pdf());
    assert_eq!(extract_identifier(&text), common::SAMPLE_DOI);
}

#[test]
fn test_identifier_in_prose() {
    assert_eq!(
        extract_identifier("see 10.1000/xyz123 for details"),
        "10.1000/xyz123"
    );
}

#[test]
fn test_first_identifier_wins() {
    let text = "10.1234/first and later 10.5678/second";
    assert_eq!(find_identifier(text), Some("10.1234/first"));
}

#[test]
fn test_identifier_keeps_allowed_punctuation() {
    assert_eq!(
        extract_identifier("doi 10.1002/(SICI)1097-4636:AID-JBM1;3.0.CO;2-C end"),
        "10.1002/(SICI)1097-4636:AID-JBM1;3.0.CO;2-C"
    );
}

#[test]
fn test_missing_identifier_is_sentinel() {
    assert_eq!(extract_identifier("no identifiers here"), DOI_NOT_FOUND);
    assert_eq!(extract_identifier(""), DOI_NOT_FOUND);
    assert_eq!(find_identifier("10.12/too-short-registrant"), None);
}

#[test]
fn test_identifier_is_ascii_only() {
    assert_eq!(find_identifier("10.\u{661}\u{662}\u{663}\u{664}/abc"), None);
    // Kelvin sign folds to 'k' under Unicode case folding.
    assert_eq!(find_identifier("10.1234/\u{212A}x"), None);
    assert_eq!(find_identifier("10.1234/ab\u{212A}x"), Some("10.1234/ab"));
    assert_eq!(find_identifier("10.1234/MixedCase"), Some("10.1234/MixedCase"));
}
