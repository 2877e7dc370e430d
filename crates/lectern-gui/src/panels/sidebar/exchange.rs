use lectern_core::exchange::{ExchangeKind, ExchangePhase};

use crate::app::LecternApp;
use crate::panels::section_header;
use crate::states::UIState;

pub(super) fn exchange_section(ui: &mut egui::Ui, app: &mut LecternApp, kind: ExchangeKind) {
    let exchange = app.state.selection.exchange(kind);
    let phase = exchange.phase();
    let status = match phase {
        ExchangePhase::Idle => None,
        ExchangePhase::Sending => Some("sending"),
        ExchangePhase::Streaming => Some("streaming"),
        ExchangePhase::Completed => Some("done"),
        ExchangePhase::Failed => Some("failed"),
    };
    let title = match kind {
        ExchangeKind::Translate => "Translation",
        ExchangeKind::Analyze => "Analysis",
    };
    section_header(ui, title, status);
    ui.add_space(4.0);

    let has_text = !app.state.selection.editable().is_empty();
    let button = egui::Button::new(kind.to_string()).min_size(egui::vec2(ui.available_width(), 24.0));
    if ui.add_enabled(has_text, button).clicked() {
        app.trigger_exchange(kind);
    }

    let exchange = app.state.selection.exchange(kind);
    ui.add_space(4.0);
    if exchange.phase() == ExchangePhase::Sending && exchange.result().is_empty() {
        ui.horizontal(|ui| {
            ui.spinner();
            ui.label(UIState::exchange_placeholder(kind));
        });
        return;
    }
    if exchange.result().is_empty() {
        return;
    }

    let mut result = exchange.result();
    egui::ScrollArea::vertical()
        .id_salt(("exchange_result", title))
        .max_height(260.0)
        .stick_to_bottom(exchange.phase() == ExchangePhase::Streaming)
        .show(ui, |ui| {
            ui.add(
                egui::TextEdit::multiline(&mut result)
                    .desired_width(f32::INFINITY),
            );
        });
}
