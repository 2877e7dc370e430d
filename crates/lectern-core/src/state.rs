use tracing::debug;

use crate::config::LecternConfig;
use crate::exchange::{ExchangeEvent, ExchangeKind, ExchangeTicket};
use crate::selection::SelectionState;
use crate::session::DocumentSession;
use crate::view::ViewState;

/// All state of one reader window.
///
/// Owned by the front-end and mutated through `&mut self` on a single thread.
/// Workers never touch it; they report events that are applied here.
#[derive(Debug)]
pub struct AppState {
    pub config: LecternConfig,
    pub view: ViewState,
    pub selection: SelectionState,
    session: Option<DocumentSession>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(LecternConfig::default())
    }
}

impl AppState {
    pub fn new(config: LecternConfig) -> Self {
        let view = ViewState::new(&config.view);
        Self {
            config,
            view,
            selection: SelectionState::default(),
            session: None,
        }
    }

    pub fn session(&self) -> Option<&DocumentSession> {
        self.session.as_ref()
    }

    /// A file was picked: reset pagination and selection before derivation starts.
    ///
    /// The previous session stays visible until [`finish_open`](Self::finish_open)
    /// replaces it, so a failed open leaves the document state unchanged.
    pub fn begin_open(&mut self) {
        self.view.reset();
        self.selection.reset();
    }

    /// Install a freshly derived session.
    pub fn finish_open(&mut self, session: DocumentSession) {
        self.view.set_num_pages(session.page_count());
        self.view.set_current_page(1);
        self.session = Some(session);
    }

    /// Put back the page count of the document still on screen after a failed open.
    pub fn abort_open(&mut self) {
        let total = self.session.as_ref().map_or(0, DocumentSession::page_count);
        self.view.set_num_pages(total);
    }

    /// Trigger `kind` on the current editable text.
    pub fn trigger_exchange(&mut self, kind: ExchangeKind) -> Option<ExchangeTicket> {
        let text = self.selection.editable().to_string();
        self.selection.exchange_mut(kind).trigger(&text)
    }

    /// Route an exchange event to its state. Returns `false` if it was dropped.
    pub fn apply_exchange_event(&mut self, event: &ExchangeEvent) -> bool {
        let applied = self.selection.exchange_mut(event.kind).apply(event);
        if !applied {
            debug!(kind = %event.kind, generation = event.generation, "Dropped stale exchange event");
        }
        applied
    }

    pub fn current_page_text(&self) -> Option<&str> {
        self.session.as_ref()?.page_text(self.view.current_page())
    }
}
