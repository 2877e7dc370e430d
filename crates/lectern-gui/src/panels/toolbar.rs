use lectern_core::view::Rotate;

use crate::app::LecternApp;

pub fn show(ctx: &egui::Context, app: &mut LecternApp) {
    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            zoom_controls(ui, app);
            ui.separator();
            rotation_controls(ui, app);
            ui.separator();
            page_controls(ui, app);
        });
    });
}

fn zoom_controls(ui: &mut egui::Ui, app: &mut LecternApp) {
    let view = &mut app.state.view;
    if ui
        .add_enabled(view.scale() > view.min_scale(), egui::Button::new("-"))
        .on_hover_text("Zoom out")
        .clicked()
    {
        view.zoom_out();
    }
    ui.label(format!("{:.0}%", view.scale() * 100.0));
    if ui.button("+").on_hover_text("Zoom in").clicked() {
        view.zoom_in();
    }
}

fn rotation_controls(ui: &mut egui::Ui, app: &mut LecternApp) {
    let view = &mut app.state.view;
    if ui.button("\u{21ba}").on_hover_text("Rotate left").clicked() {
        view.rotate(Rotate::Left);
    }
    if ui.button("\u{21bb}").on_hover_text("Rotate right").clicked() {
        view.rotate(Rotate::Right);
    }
    ui.label(view.rotation().to_string());
}

fn page_controls(ui: &mut egui::Ui, app: &mut LecternApp) {
    let total = app.state.view.total_pages();
    if total == 0 {
        ui.add_enabled(false, egui::Button::new("<"));
        ui.label("Page - / -");
        ui.add_enabled(false, egui::Button::new(">"));
        return;
    }

    if ui
        .add_enabled(app.state.view.can_go_prev(), egui::Button::new("<"))
        .on_hover_text("Previous page")
        .clicked()
    {
        app.state.view.prev_page();
        app.ui_state.jump_target = app.state.view.current_page();
    }

    ui.label("Page");
    let response = ui.add(
        egui::DragValue::new(&mut app.ui_state.jump_target)
            .range(1..=total)
            .speed(0.1),
    );
    if response.changed() && !app.state.view.jump_to_page(app.ui_state.jump_target) {
        app.ui_state.jump_target = app.state.view.current_page();
    }
    ui.label(format!("/ {total}"));

    if ui
        .add_enabled(app.state.view.can_go_next(), egui::Button::new(">"))
        .on_hover_text("Next page")
        .clicked()
    {
        app.state.view.next_page();
        app.ui_state.jump_target = app.state.view.current_page();
    }
}
