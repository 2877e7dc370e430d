use lectern_core::exchange::ExchangeKind;

use crate::app::LecternApp;

pub fn show(ctx: &egui::Context, app: &mut LecternApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);

        if app.ui_state.is_busy() {
            ui.add(egui::ProgressBar::new(0.0).text("Opening...").animate(true));
        } else {
            // Invisible placeholder, same height
            ui.add(egui::ProgressBar::new(0.0).text(""));
        }

        // Log area, fixed height for 4 lines, scrollable.
        let line_height = ui.text_style_height(&egui::TextStyle::Body);
        let spacing = ui.spacing().item_spacing.y;
        let log_height = line_height * 4.0 + spacing * 3.0;

        egui::ScrollArea::vertical()
            .max_height(log_height)
            .min_scrolled_height(log_height)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                if app.ui_state.log_messages.is_empty() {
                    // Reserve space for 4 empty lines to prevent layout jump.
                    for _ in 0..4 {
                        ui.label("");
                    }
                } else {
                    for msg in &app.ui_state.log_messages {
                        ui.label(msg);
                    }
                }
            });

        ui.horizontal(|ui| {
            let view = &app.state.view;
            if view.total_pages() > 0 {
                ui.label(format!("Page {} of {}", view.current_page(), view.total_pages()));
                ui.separator();
            }
            ui.label(format!("Zoom: {:.0}%", view.scale() * 100.0));
            ui.separator();
            ui.label(format!("Rotation: {}", view.rotation()));
            ui.separator();
            for kind in [ExchangeKind::Translate, ExchangeKind::Analyze] {
                let phase = app.state.selection.exchange(kind).phase();
                ui.label(format!("{kind}: {phase}"));
            }
            ui.separator();
            ui.label(&app.state.config.endpoint.url);
        });

        ui.add_space(2.0);
    });
}
