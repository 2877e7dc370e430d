use std::sync::OnceLock;

use lopdf::Document;
use rayon::prelude::*;
use regex::Regex;
use tracing::{debug, warn};

use crate::consts::DOI_NOT_FOUND;

/// DOI-shaped token: "10.", 4-9 digit registrant, slash, suffix.
/// ASCII only: no Unicode digits and no case folding to non-ASCII letters.
const DOI_PATTERN: &str = r"(?i-u:10\.[0-9]{4,9}/[-._;()/:A-Z0-9]+)";

fn doi_regex() -> &'static Regex {
    static DOI_RE: OnceLock<Regex> = OnceLock::new();
    DOI_RE.get_or_init(|| Regex::new(DOI_PATTERN).expect("DOI pattern is valid"))
}

/// Text layer of every page, in page order.
///
/// Runs within a page are joined by a single space. A page whose content
/// cannot be decoded yields an empty string; an unparseable document yields
/// no pages at all.
pub fn extract_pages(bytes: &[u8]) -> Vec<String> {
    let doc = match Document::load_mem(bytes) {
        Ok(doc) => doc,
        Err(e) => {
            warn!(error = %e, "Could not parse PDF, no text extracted");
            return Vec::new();
        }
    };

    let page_numbers: Vec<u32> = doc.get_pages().keys().copied().collect();
    page_numbers
        .par_iter()
        .map(|&number| match doc.extract_text(&[number]) {
            Ok(raw) => join_runs(&raw),
            Err(e) => {
                debug!(page = number, error = %e, "Page has no extractable text");
                String::new()
            }
        })
        .collect()
}

/// Full text of the document: each page's text followed by a newline.
///
/// Never fails; unparseable input or a document without text produces an
/// empty string.
pub fn extract_text(bytes: &[u8]) -> String {
    join_pages(&extract_pages(bytes))
}

/// Concatenate page texts the way [`extract_text`] does.
pub fn join_pages(pages: &[String]) -> String {
    let mut full = String::with_capacity(pages.iter().map(|p| p.len() + 1).sum());
    for page in pages {
        full.push_str(page);
        full.push('\n');
    }
    full
}

/// First DOI-shaped substring in `text`, if any.
pub fn find_identifier(text: &str) -> Option<&str> {
    doi_regex().find(text).map(|m| m.as_str())
}

/// Like [`find_identifier`], but yields [`DOI_NOT_FOUND`] when nothing matches.
pub fn extract_identifier(text: &str) -> String {
    find_identifier(text).unwrap_or(DOI_NOT_FOUND).to_string()
}

fn join_runs(raw: &str) -> String {
    raw.lines()
        .map(str::trim)
        .filter(|run| !run.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
