use std::sync::mpsc;

use lectern_core::config::EndpointConfig;
use lectern_core::exchange::{
    run_exchange, ExchangeEvent, ExchangeTicket, ExchangeUpdate, HttpTransport,
};

use crate::messages::WorkerResult;

use super::{send, send_error};

/// Stream one exchange on a dedicated thread so translate and analyze can
/// run side by side without blocking file work.
pub(super) fn spawn_exchange(
    ticket: ExchangeTicket,
    endpoint: &EndpointConfig,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    let transport = HttpTransport::new(endpoint);
    let thread_tx = tx.clone();
    let thread_ctx = ctx.clone();
    let (kind, generation) = (ticket.kind, ticket.generation);
    let name = format!("lectern-{}", kind.label().to_lowercase());

    let spawned = std::thread::Builder::new().name(name).spawn(move || {
        let outcome = run_exchange(&transport, &ticket, |event| {
            send(&thread_tx, &thread_ctx, WorkerResult::Exchange(event));
        });
        if let Err(e) = outcome {
            send_error(
                &thread_tx,
                &thread_ctx,
                format!("{} via {}: {e}", ticket.kind, transport.url()),
            );
        }
    });

    if let Err(e) = spawned {
        send(tx, ctx, WorkerResult::Exchange(ExchangeEvent {
            kind,
            generation,
            update: ExchangeUpdate::Failed(e.to_string()),
        }));
        send_error(tx, ctx, format!("Failed to start {kind} request: {e}"));
    }
}
