use std::path::PathBuf;

use lectern_core::config::{EndpointConfig, LecternConfig};
use lectern_core::exchange::{ExchangeEvent, ExchangeTicket};
use lectern_core::session::DocumentSession;
use lectern_core::source::FileHandle;
use lectern_core::view::Rotation;

/// Commands sent from UI thread to worker thread.
pub enum WorkerCommand {
    /// Read and derive a freshly picked file.
    OpenFile { path: PathBuf },

    /// Re-read a file from a stored handle.
    Reopen { handle: FileHandle },

    /// Run one translate/analyze exchange on its own thread.
    Exchange {
        ticket: ExchangeTicket,
        endpoint: EndpointConfig,
    },
}

/// Commands for the page render thread.
pub enum RenderCommand {
    /// Replace the document pages are rendered from.
    Load { doc: u64, bytes: Vec<u8> },

    Page(PageRequest),
}

/// One page rendered at one zoom and orientation.
///
/// `doc` numbers the documents opened in this run, so images of a document
/// that has since been replaced can be told apart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageRequest {
    pub doc: u64,
    pub page: u32,
    pub scale: f32,
    pub rotation: Rotation,
    pub pixels_per_point: f32,
}

/// Results sent from worker threads back to UI thread.
pub enum WorkerResult {
    /// The picker returned a file. The UI resets its state before opening it.
    FilePicked { path: PathBuf },

    /// The file was derived. `bytes` go on to the page renderer.
    DocumentLoaded {
        session: Box<DocumentSession>,
        bytes: Vec<u8>,
    },

    /// Opening failed; the previous document stays.
    OpenFailed { message: String },

    /// The stored handle no longer resolves to a readable file.
    StaleHandle { path: PathBuf },

    Exchange(ExchangeEvent),

    PageRendered {
        request: PageRequest,
        image: egui::ColorImage,
    },

    /// This page could not be rendered; its text layer is shown instead.
    RenderFailed { request: PageRequest, message: String },

    /// No PDF rendering library could be loaded. Pages show their text layer.
    RenderUnavailable { reason: String },

    ConfigImported { config: LecternConfig },

    Error { message: String },

    Log { message: String },
}
