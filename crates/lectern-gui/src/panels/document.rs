use crate::app::LecternApp;

const LEFT_PANEL_WIDTH: f32 = 280.0;

pub fn show(ctx: &egui::Context, app: &mut LecternApp) {
    egui::SidePanel::left("document")
        .default_width(LEFT_PANEL_WIDTH)
        .resizable(true)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.set_min_width(LEFT_PANEL_WIDTH - 20.0);

                info_section(ui, app);
                ui.separator();
                text_section(ui, app);
            });
        });
}

fn info_section(ui: &mut egui::Ui, app: &mut LecternApp) {
    super::section_header(ui, "Document", None);
    ui.add_space(4.0);

    if ui
        .add_enabled(!app.ui_state.is_busy(), egui::Button::new("Open PDF..."))
        .clicked()
    {
        super::menu_bar::open_file(app);
    }

    let Some(session) = app.state.session() else {
        ui.small("No document loaded");
        return;
    };

    ui.add_space(4.0);
    ui.label(egui::RichText::new(session.filename()).strong());
    ui.small(format!(
        "{} pages, {} KiB",
        session.page_count(),
        session.handle().len / 1024
    ));

    ui.add_space(4.0);
    ui.horizontal(|ui| {
        ui.label("DOI:");
        ui.label(session.doi());
    });

    ui.label("SHA-256:");
    ui.add(
        egui::Label::new(egui::RichText::new(session.digest()).monospace().small())
            .wrap(),
    );
}

fn text_section(ui: &mut egui::Ui, app: &mut LecternApp) {
    let chars = app
        .state
        .session()
        .map(|s| s.extracted_text().chars().count());
    let status = chars.map(|n| format!("{n} chars"));
    super::section_header(ui, "Extracted Text", status.as_deref());
    ui.add_space(4.0);

    let Some(session) = app.state.session() else {
        return;
    };
    if session.extracted_text().is_empty() {
        ui.small("No text layer found");
        return;
    }

    egui::CollapsingHeader::new("Full text")
        .default_open(false)
        .show(ui, |ui| {
            let mut text = session.extracted_text();
            ui.add(
                egui::TextEdit::multiline(&mut text)
                    .desired_width(f32::INFINITY)
                    .desired_rows(16),
            );
        });
}
