use std::sync::mpsc;

use lectern_core::config::LecternConfig;
use lectern_core::exchange::{ExchangeEvent, ExchangeKind, ExchangeUpdate};
use lectern_core::source::{FileHandle, HandleStore};
use lectern_core::state::AppState;
use lectern_core::view::ViewState;
use tracing::{info, warn};

use crate::messages::{PageRequest, RenderCommand, WorkerCommand, WorkerResult};
use crate::panels;
use crate::states::{PageImage, UIState};
use crate::workers;

pub struct LecternApp {
    pub cmd_tx: Option<mpsc::Sender<WorkerCommand>>,
    pub render_tx: Option<mpsc::Sender<RenderCommand>>,
    pub result_tx: mpsc::Sender<WorkerResult>,
    pub result_rx: mpsc::Receiver<WorkerResult>,
    pub state: AppState,
    pub ui_state: UIState,
    pub page_image: PageImage,
    pub show_about: bool,
}

impl LecternApp {
    pub fn new(ctx: &egui::Context) -> Self {
        let (result_tx, result_rx) = mpsc::channel();
        let cmd_tx = match workers::spawn_worker(result_tx.clone(), ctx.clone()) {
            Ok(tx) => Some(tx),
            Err(e) => {
                warn!(error = %e, "Failed to spawn worker thread");
                None
            }
        };
        let render_tx = match workers::spawn_renderer(result_tx.clone(), ctx.clone()) {
            Ok(tx) => Some(tx),
            Err(e) => {
                warn!(error = %e, "Failed to spawn render thread");
                None
            }
        };

        let config = match LecternConfig::load_or_default(None) {
            Ok(config) => config,
            Err(e) => {
                warn!(error = %e, "Ignoring unreadable config file");
                LecternConfig::default()
            }
        };

        let mut app = Self {
            cmd_tx,
            render_tx,
            result_tx,
            result_rx,
            state: AppState::new(config),
            ui_state: UIState::default(),
            page_image: PageImage::default(),
            show_about: false,
        };
        if app.render_tx.is_none() {
            app.page_image.unavailable = Some("render thread not running".into());
        }
        if app.cmd_tx.is_none() {
            app.ui_state
                .add_log("ERROR: background worker unavailable, files cannot be opened".into());
        }
        app.reopen_last();
        app
    }

    /// Silently reopen the previously viewed file, if there is one.
    fn reopen_last(&mut self) {
        if !self.state.config.session.reopen_last {
            return;
        }
        let Some(handle) = HandleStore::at_default_location()
            .ok()
            .and_then(|store| store.load())
        else {
            return;
        };
        info!(path = %handle.path.display(), "Reopening last document");
        self.reopen(handle);
    }

    pub fn reopen(&mut self, handle: FileHandle) {
        self.state.begin_open();
        self.ui_state.pending_selection.clear();
        self.ui_state.opening = true;
        self.send_command(WorkerCommand::Reopen { handle });
    }

    /// Drain all pending results from the workers.
    fn poll_results(&mut self, ctx: &egui::Context) {
        while let Ok(result) = self.result_rx.try_recv() {
            match result {
                WorkerResult::FilePicked { path } => {
                    self.state.begin_open();
                    self.ui_state.pending_selection.clear();
                    self.ui_state.opening = true;
                    self.ui_state.add_log(format!("Opening {}", path.display()));
                    self.send_command(WorkerCommand::OpenFile { path });
                }
                WorkerResult::DocumentLoaded { session, bytes } => {
                    self.ui_state.opening = false;
                    self.ui_state.add_log(format!(
                        "Opened: {} ({} pages, DOI: {})",
                        session.filename(),
                        session.page_count(),
                        session.doi()
                    ));
                    self.state.finish_open(*session);
                    self.ui_state.jump_target = self.state.view.current_page();
                    let doc = self.page_image.next_document();
                    self.send_render(RenderCommand::Load { doc, bytes });
                }
                WorkerResult::OpenFailed { message } => {
                    self.ui_state.opening = false;
                    self.state.abort_open();
                    self.ui_state.add_log(format!("ERROR: {message}"));
                }
                WorkerResult::StaleHandle { path } => {
                    self.ui_state.opening = false;
                    self.state.abort_open();
                    self.ui_state.add_log(format!(
                        "{} is no longer accessible, please open it again",
                        path.display()
                    ));
                }
                WorkerResult::Exchange(event) => {
                    let kind = event.kind;
                    if !self.state.apply_exchange_event(&event) {
                        continue;
                    }
                    match event.update {
                        ExchangeUpdate::Completed => {
                            self.ui_state.add_log(format!("{kind} complete"));
                        }
                        ExchangeUpdate::Failed(reason) => {
                            self.ui_state.add_log(format!("{kind} failed: {reason}"));
                        }
                        ExchangeUpdate::Streaming | ExchangeUpdate::Chunk(_) => {}
                    }
                }
                WorkerResult::PageRendered { request, image } => {
                    if self.page_image.accepts(&request) {
                        let texture = ctx.load_texture(
                            format!("page-{}-{}", request.doc, request.page),
                            image,
                            egui::TextureOptions::LINEAR,
                        );
                        self.page_image.show(request, texture);
                    }
                }
                WorkerResult::RenderFailed { request, message } => {
                    self.page_image.fail(&request);
                    self.ui_state
                        .add_log(format!("Page {} shown as text: {message}", request.page));
                }
                WorkerResult::RenderUnavailable { reason } => {
                    self.disable_rendering(reason);
                }
                WorkerResult::ConfigImported { config } => {
                    self.apply_config(config);
                    self.ui_state.add_log("Config imported".into());
                }
                WorkerResult::Error { message } => {
                    warn!("{message}");
                }
                WorkerResult::Log { message } => {
                    self.ui_state.add_log(message);
                }
            }
        }
    }

    /// Replace the config. Zoom limits take effect immediately; the current
    /// page and rotation are kept.
    pub fn apply_config(&mut self, config: LecternConfig) {
        let mut view = ViewState::new(&config.view);
        view.set_num_pages(self.state.view.total_pages());
        view.set_current_page(self.state.view.current_page());
        view.set_rotation(self.state.view.rotation());
        self.state.view = view;
        self.state.config = config;
    }

    pub fn trigger_exchange(&mut self, kind: ExchangeKind) {
        if let Some(ticket) = self.state.trigger_exchange(kind) {
            let endpoint = self.state.config.endpoint.clone();
            self.send_command(WorkerCommand::Exchange { ticket, endpoint });
        }
    }

    pub fn send_command(&mut self, cmd: WorkerCommand) {
        let undelivered = match &self.cmd_tx {
            Some(tx) => tx.send(cmd).err().map(|mpsc::SendError(cmd)| cmd),
            None => Some(cmd),
        };
        if let Some(cmd) = undelivered {
            settle_undelivered(&mut self.state, &mut self.ui_state, cmd);
        }
    }

    /// Ask for the current page at the current zoom and rotation, unless it
    /// is already on screen or on its way.
    pub fn request_page_render(&mut self, pixels_per_point: f32) {
        let Some(request) = self.wanted_page(pixels_per_point) else {
            return;
        };
        if self.page_image.begin_request(request) {
            self.send_render(RenderCommand::Page(request));
        }
    }

    pub fn wanted_page(&self, pixels_per_point: f32) -> Option<PageRequest> {
        let view = &self.state.view;
        if self.state.session().is_none() || view.total_pages() == 0 {
            return None;
        }
        Some(PageRequest {
            doc: self.page_image.doc(),
            page: view.current_page(),
            scale: view.scale(),
            rotation: view.rotation(),
            pixels_per_point,
        })
    }

    fn send_render(&mut self, cmd: RenderCommand) {
        let sent = self
            .render_tx
            .as_ref()
            .is_some_and(|tx| tx.send(cmd).is_ok());
        if !sent && self.page_image.unavailable.is_none() {
            self.disable_rendering("render thread stopped".into());
        }
    }

    fn disable_rendering(&mut self, reason: String) {
        self.render_tx = None;
        self.ui_state
            .add_log(format!("Page images unavailable ({reason}), showing page text"));
        self.page_image.unavailable = Some(reason);
    }
}

/// Undo what was prepared for a command the worker never received.
fn settle_undelivered(state: &mut AppState, ui_state: &mut UIState, cmd: WorkerCommand) {
    ui_state.add_log("ERROR: background worker is not running".into());
    match cmd {
        WorkerCommand::OpenFile { .. } | WorkerCommand::Reopen { .. } => {
            ui_state.opening = false;
            state.abort_open();
        }
        WorkerCommand::Exchange { ticket, .. } => {
            state.apply_exchange_event(&ExchangeEvent {
                kind: ticket.kind,
                generation: ticket.generation,
                update: ExchangeUpdate::Failed("background worker is not running".into()),
            });
        }
    }
}

impl eframe::App for LecternApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_results(ctx);

        panels::menu_bar::show(ctx, self);
        panels::toolbar::show(ctx, self);
        panels::status::show(ctx, self);
        panels::document::show(ctx, self);
        panels::sidebar::show(ctx, self);
        panels::viewport::show(ctx, self);

        if self.show_about {
            egui::Window::new("About Lectern")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("Lectern");
                        ui.label("PDF reader with translation and analysis");
                        ui.add_space(8.0);
                        ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                        ui.add_space(8.0);
                        if ui.button("Close").clicked() {
                            self.show_about = false;
                        }
                    });
                });
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use lectern_core::exchange::ExchangePhase;
    use lectern_core::session::DocumentSession;
    use lopdf::{dictionary, Document, Object};

    use super::*;

    /// PDF with `count` empty pages.
    fn blank_pdf(count: usize) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let kids: Vec<Object> = (0..count)
            .map(|_| {
                doc.add_object(dictionary! {
                    "Type" => "Page",
                    "Parent" => pages_id,
                    "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
                })
                .into()
            })
            .collect();
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count as i64,
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);
        let mut out = Vec::new();
        doc.save_to(&mut out).unwrap();
        out
    }

    fn loaded_state(pages: usize) -> AppState {
        let handle = FileHandle {
            path: PathBuf::from("/papers/blank.pdf"),
            name: "blank.pdf".into(),
            len: 0,
            modified_secs: None,
        };
        let mut state = AppState::default();
        state.finish_open(DocumentSession::derive(handle, &blank_pdf(pages)));
        state
    }

    #[test]
    fn test_undelivered_open_restores_document() {
        let mut state = loaded_state(4);
        let mut ui = UIState::default();
        state.begin_open();
        ui.opening = true;

        let cmd = WorkerCommand::OpenFile {
            path: PathBuf::from("/papers/next.pdf"),
        };
        settle_undelivered(&mut state, &mut ui, cmd);

        assert!(!ui.opening);
        assert_eq!(state.view.total_pages(), 4);
        assert!(state.session().is_some());
    }

    #[test]
    fn test_undelivered_exchange_fails() {
        let mut state = AppState::default();
        let mut ui = UIState::default();
        state.selection.set_raw_selection("Guten Morgen");
        let ticket = state.trigger_exchange(ExchangeKind::Translate).unwrap();

        let cmd = WorkerCommand::Exchange {
            ticket,
            endpoint: state.config.endpoint.clone(),
        };
        settle_undelivered(&mut state, &mut ui, cmd);

        let exchange = state.selection.exchange(ExchangeKind::Translate);
        assert_eq!(exchange.phase(), ExchangePhase::Failed);
        assert_eq!(ui.log_messages.len(), 1);
    }
}
