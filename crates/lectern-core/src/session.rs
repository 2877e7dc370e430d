use std::path::Path;

use tracing::info;

use crate::digest::digest;
use crate::error::Result;
use crate::extract::{extract_identifier, extract_pages, join_pages};
use crate::source::FileHandle;

/// Everything derived from one opened document.
///
/// Built in one go and replaced wholesale on the next open; there are no
/// setters for individual fields.
#[derive(Clone, Debug, PartialEq)]
pub struct DocumentSession {
    handle: FileHandle,
    digest: String,
    pages: Vec<String>,
    extracted_text: String,
    doi: String,
}

impl DocumentSession {
    /// Derive digest, page texts, full text and identifier from `bytes`.
    pub fn derive(handle: FileHandle, bytes: &[u8]) -> Self {
        let digest = digest(bytes);
        let pages = extract_pages(bytes);
        let extracted_text = join_pages(&pages);
        let doi = extract_identifier(&extracted_text);

        info!(
            file = %handle.name,
            pages = pages.len(),
            chars = extracted_text.len(),
            doi = %doi,
            "Document loaded"
        );

        Self {
            handle,
            digest,
            pages,
            extracted_text,
            doi,
        }
    }

    /// Resolve `path`, read it and derive a session.
    pub fn open_path(path: &Path) -> Result<Self> {
        Self::load_path(path).map(|(session, _)| session)
    }

    /// Re-read the file behind `handle` and derive a fresh session.
    pub fn open_handle(handle: &FileHandle) -> Result<Self> {
        Self::load_handle(handle).map(|(session, _)| session)
    }

    /// Like [`open_path`](Self::open_path), also handing back the file bytes
    /// for consumers that need the document itself, such as a page renderer.
    pub fn load_path(path: &Path) -> Result<(Self, Vec<u8>)> {
        let handle = FileHandle::open(path)?;
        Self::load_handle(&handle)
    }

    pub fn load_handle(handle: &FileHandle) -> Result<(Self, Vec<u8>)> {
        let handle = handle.refreshed()?;
        let bytes = handle.reopen()?;
        let session = Self::derive(handle, &bytes);
        Ok((session, bytes))
    }

    pub fn handle(&self) -> &FileHandle {
        &self.handle
    }

    pub fn filename(&self) -> &str {
        &self.handle.name
    }

    pub fn digest(&self) -> &str {
        &self.digest
    }

    pub fn extracted_text(&self) -> &str {
        &self.extracted_text
    }

    pub fn doi(&self) -> &str {
        &self.doi
    }

    pub fn pages(&self) -> &[String] {
        &self.pages
    }

    pub fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    /// Text layer of a one-based page number.
    pub fn page_text(&self, page: u32) -> Option<&str> {
        let index = usize::try_from(page).ok()?.checked_sub(1)?;
        self.pages.get(index).map(String::as_str)
    }
}
