#![allow(dead_code)]

use std::io::Write;

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

/// A DOI embedded in the second page of [`sample_pdf`].
pub const SAMPLE_DOI: &str = "10.1000/xyz123";

/// Build a PDF whose pages each show the given lines of text.
///
/// Every line is its own `BT ... ET` block so the extractor sees it as a
/// separate text run.
pub fn build_pdf(pages: &[&[&str]]) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut kids: Vec<Object> = Vec::with_capacity(pages.len());
    for lines in pages {
        let mut operations = Vec::new();
        for (i, line) in lines.iter().enumerate() {
            let y = 700 - 20 * i as i64;
            operations.push(Operation::new("BT", vec![]));
            operations.push(Operation::new("Tf", vec!["F1".into(), 12.into()]));
            operations.push(Operation::new("Td", vec![72.into(), y.into()]));
            operations.push(Operation::new("Tj", vec![Object::string_literal(*line)]));
            operations.push(Operation::new("ET", vec![]));
        }
        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(
            dictionary! {},
            content.encode().expect("encode content"),
        ));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
            "Resources" => resources_id,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut out = Vec::new();
    doc.save_to(&mut out).expect("serialize pdf");
    out
}

/// Three pages, DOI on page 2.
pub fn sample_pdf() -> Vec<u8> {
    build_pdf(&[
        &["Quantum transport", "in layered materials"],
        &["Published as doi:10.1000/xyz123 in 2021"],
        &["References"],
    ])
}

/// Write `data` to a temp file with a `.pdf` suffix.
///
/// The file stays alive as long as the returned `NamedTempFile` is not dropped.
pub fn write_temp_pdf(data: &[u8]) -> tempfile::NamedTempFile {
    let mut f = tempfile::Builder::new()
        .suffix(".pdf")
        .tempfile()
        .expect("create temp file");
    f.write_all(data).expect("write temp file");
    f.flush().expect("flush temp file");
    f
}

/// A response body that yields one scripted chunk per `read` call.
///
/// With `fail_at_end` set, the read after the last chunk returns an error
/// instead of end-of-stream.
pub struct ScriptedBody {
    chunks: std::collections::VecDeque<Vec<u8>>,
    fail_at_end: bool,
}

impl ScriptedBody {
    pub fn new(chunks: &[&[u8]], fail_at_end: bool) -> Self {
        Self {
            chunks: chunks.iter().map(|c| c.to_vec()).collect(),
            fail_at_end,
        }
    }
}

impl std::io::Read for ScriptedBody {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        match self.chunks.pop_front() {
            Some(chunk) => {
                assert!(chunk.len() <= buf.len(), "scripted chunk larger than read buffer");
                buf[..chunk.len()].copy_from_slice(&chunk);
                Ok(chunk.len())
            }
            None if self.fail_at_end => Err(std::io::Error::new(
                std::io::ErrorKind::ConnectionReset,
                "connection reset",
            )),
            None => Ok(0),
        }
    }
}
