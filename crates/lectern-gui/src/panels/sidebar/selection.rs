use crate::app::LecternApp;
use crate::panels::section_header;

/// Selectable copy of the current page's text layer.
pub(super) fn page_text_section(ui: &mut egui::Ui, app: &mut LecternApp) {
    let status = (app.state.view.total_pages() > 0)
        .then(|| format!("page {}", app.state.view.current_page()));
    section_header(ui, "Page Text", status.as_deref());
    ui.add_space(4.0);

    let Some(page_text) = app.state.current_page_text() else {
        ui.small("Open a document to select text");
        return;
    };
    if page_text.is_empty() {
        ui.small("This page has no text layer");
        return;
    }

    let mut text = page_text;
    let output = egui::ScrollArea::vertical()
        .id_salt("page_text")
        .max_height(220.0)
        .show(ui, |ui| {
            egui::TextEdit::multiline(&mut text)
                .desired_width(f32::INFINITY)
                .show(ui)
        })
        .inner;

    if let Some(range) = output.cursor_range {
        let selected = range.slice_str(page_text);
        if !selected.trim().is_empty() {
            app.ui_state.pending_selection = selected.to_string();
        }
    }

    ui.add_space(4.0);
    let can_take = !app.ui_state.pending_selection.trim().is_empty();
    if ui
        .add_enabled(can_take, egui::Button::new("Use Selection"))
        .on_hover_text("Copy the highlighted text into the edit box")
        .clicked()
    {
        let pending = std::mem::take(&mut app.ui_state.pending_selection);
        app.state.selection.set_raw_selection(&pending);
    }
}

/// Editable copy of the selection that the exchanges are sent.
pub(super) fn editable_section(ui: &mut egui::Ui, app: &mut LecternApp) {
    section_header(ui, "Selected Text", None);
    ui.add_space(4.0);

    ui.add(
        egui::TextEdit::multiline(app.state.selection.editable_mut())
            .hint_text("Select text on the page, or type here")
            .desired_width(f32::INFINITY)
            .desired_rows(5),
    );

    let raw = app.state.selection.raw_selected().to_string();
    if !raw.is_empty()
        && raw != app.state.selection.editable()
        && ui.small_button("Revert to selection").clicked()
    {
        app.state.selection.set_raw_selection(&raw);
    }
}
