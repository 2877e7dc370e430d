mod exchange;
mod selection;

use lectern_core::exchange::ExchangeKind;

const RIGHT_PANEL_WIDTH: f32 = 340.0;

pub fn show(ctx: &egui::Context, app: &mut crate::app::LecternApp) {
    egui::SidePanel::right("sidebar")
        .default_width(RIGHT_PANEL_WIDTH)
        .resizable(true)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.set_min_width(RIGHT_PANEL_WIDTH - 20.0);

                selection::page_text_section(ui, app);
                ui.separator();
                selection::editable_section(ui, app);
                ui.separator();
                exchange::exchange_section(ui, app, ExchangeKind::Translate);
                ui.separator();
                exchange::exchange_section(ui, app, ExchangeKind::Analyze);
            });
        });
}
