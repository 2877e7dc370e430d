use std::path::Path;
use std::sync::mpsc;
use std::time::Instant;

use lectern_core::error::LecternError;
use lectern_core::session::DocumentSession;
use lectern_core::source::{FileHandle, HandleStore};
use tracing::warn;

use crate::messages::WorkerResult;

use super::{send, send_log};

pub(super) fn handle_open_file(
    path: &Path,
    store: Option<&HandleStore>,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    let start = Instant::now();
    match DocumentSession::load_path(path) {
        Ok((session, bytes)) => {
            remember(store, session.handle());
            send_log(
                tx,
                ctx,
                format!(
                    "Read {} in {:.0}ms",
                    session.filename(),
                    start.elapsed().as_secs_f32() * 1000.0
                ),
            );
            send(tx, ctx, WorkerResult::DocumentLoaded {
                session: Box::new(session),
                bytes,
            });
        }
        Err(e) => send(tx, ctx, WorkerResult::OpenFailed {
            message: format!("Failed to open {}: {e}", path.display()),
        }),
    }
}

pub(super) fn handle_reopen(
    handle: &FileHandle,
    store: Option<&HandleStore>,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    match DocumentSession::load_handle(handle) {
        Ok((session, bytes)) => {
            remember(store, session.handle());
            send(tx, ctx, WorkerResult::DocumentLoaded {
                session: Box::new(session),
                bytes,
            });
        }
        Err(LecternError::StaleHandle(path)) => {
            if let Some(store) = store {
                if let Err(e) = store.remove() {
                    warn!(error = %e, "Failed to drop stale handle record");
                }
            }
            send(tx, ctx, WorkerResult::StaleHandle { path });
        }
        Err(e) => send(tx, ctx, WorkerResult::OpenFailed {
            message: format!("Failed to reopen {}: {e}", handle.path.display()),
        }),
    }
}

fn remember(store: Option<&HandleStore>, handle: &FileHandle) {
    let Some(store) = store else {
        return;
    };
    if let Err(e) = store.save(handle) {
        warn!(path = %store.path().display(), error = %e, "Failed to store file handle");
    }
}
