use lectern_core::consts::DIGEST_HEX_LEN;
use lectern_core::digest::{digest, digest_reader, try_digest_file};

mod common;

#[test]
fn test_digest_of_empty_input() {
    assert_eq!(
        digest(b""),
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );
}

#[test]
fn test_digest_known_vector() {
    assert_eq!(
        digest(b"abc"),
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
}

#[test]
fn test_digest_is_lowercase_hex_of_fixed_length() {
    let d = digest(&common::sample_pdf());
    assert_eq!(d.len(), DIGEST_HEX_LEN);
    assert!(d.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
}

#[test]
fn test_digest_is_deterministic() {
    let pdf = common::sample_pdf();
    assert_eq!(digest(&pdf), digest(&pdf));
    assert_ne!(digest(&pdf), digest(b"other bytes"));
}

#[test]
fn test_digest_reader_matches_in_memory() {
    let data: Vec<u8> = (0..200_000u32).map(|i| (i % 251) as u8).collect();
    let streamed = digest_reader(std::io::Cursor::new(&data)).unwrap();
    assert_eq!(streamed, digest(&data));
}

#[test]
fn test_try_digest_file() {
    let pdf = common::sample_pdf();
    let file = common::write_temp_pdf(&pdf);
    assert_eq!(try_digest_file(file.path()), Some(digest(&pdf)));
}

#[test]
fn test_try_digest_missing_file_is_none() {
    let dir = tempfile::tempdir().unwrap();
    assert_eq!(try_digest_file(&dir.path().join("missing.pdf")), None);
}
