use std::sync::mpsc;

use lectern_core::source::HandleStore;
use tracing::warn;

use crate::messages::{WorkerCommand, WorkerResult};

use super::{exchange, io};

/// Spawn the worker thread. Returns the command sender.
pub fn spawn_worker(
    result_tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) -> std::io::Result<mpsc::Sender<WorkerCommand>> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<WorkerCommand>();

    std::thread::Builder::new()
        .name("lectern-worker".into())
        .spawn(move || {
            worker_loop(cmd_rx, result_tx, ctx);
        })?;

    Ok(cmd_tx)
}

pub(crate) fn send(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, result: WorkerResult) {
    let _ = tx.send(result);
    ctx.request_repaint();
}

pub(crate) fn send_log(
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
    msg: impl Into<String>,
) {
    send(
        tx,
        ctx,
        WorkerResult::Log {
            message: msg.into(),
        },
    );
}

pub(crate) fn send_error(
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
    msg: impl Into<String>,
) {
    send(
        tx,
        ctx,
        WorkerResult::Error {
            message: msg.into(),
        },
    );
}

fn worker_loop(
    cmd_rx: mpsc::Receiver<WorkerCommand>,
    tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) {
    let store = match HandleStore::at_default_location() {
        Ok(store) => Some(store),
        Err(e) => {
            warn!(error = %e, "Last-opened file will not be remembered");
            None
        }
    };

    while let Ok(cmd) = cmd_rx.recv() {
        match cmd {
            WorkerCommand::OpenFile { path } => {
                io::handle_open_file(&path, store.as_ref(), &tx, &ctx);
            }
            WorkerCommand::Reopen { handle } => {
                io::handle_reopen(&handle, store.as_ref(), &tx, &ctx);
            }
            WorkerCommand::Exchange { ticket, endpoint } => {
                exchange::spawn_exchange(ticket, &endpoint, &tx, &ctx);
            }
        }
    }
}
