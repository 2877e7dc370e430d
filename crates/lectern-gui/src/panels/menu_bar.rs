use std::path::Path;

use lectern_core::config::LecternConfig;
use lectern_core::source::{FilePicker, HandleStore};

use crate::app::LecternApp;
use crate::messages::WorkerResult;
use crate::picker::RfdPicker;

pub fn show(ctx: &egui::Context, app: &mut LecternApp) {
    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                let open_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O);
                if ui
                    .add_enabled(
                        !app.ui_state.is_busy(),
                        egui::Button::new("Open...").shortcut_text(ctx.format_shortcut(&open_shortcut)),
                    )
                    .clicked()
                {
                    ui.close();
                    open_file(app);
                }

                if ui
                    .add_enabled(!app.ui_state.is_busy(), egui::Button::new("Reopen Last"))
                    .clicked()
                {
                    ui.close();
                    reopen_last(app);
                }

                ui.separator();

                if ui.button("Import Config...").clicked() {
                    ui.close();
                    import_config(app);
                }

                if ui.button("Export Config...").clicked() {
                    ui.close();
                    export_config(app);
                }

                ui.separator();

                let quit_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q);
                if ui.add(egui::Button::new("Quit").shortcut_text(ctx.format_shortcut(&quit_shortcut))).clicked() {
                    ui.close();
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("Edit", |ui| {
                if ui.button("Reset Defaults").clicked() {
                    ui.close();
                    app.apply_config(LecternConfig::default());
                    app.ui_state.add_log("Config reset to defaults".into());
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    ui.close();
                    app.show_about = true;
                }
            });
        });

        // Keyboard shortcuts (consumed outside menus)
        if ctx.input_mut(|i| i.consume_shortcut(&egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O)))
            && !app.ui_state.is_busy()
        {
            open_file(app);
        }
        if ctx.input_mut(|i| i.consume_shortcut(&egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q))) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    });
}

/// Ask for a PDF off the UI thread. A cancelled dialog sends nothing.
pub(crate) fn open_file(app: &mut LecternApp) {
    let result_tx = app.result_tx.clone();
    std::thread::spawn(move || {
        if let Some(path) = RfdPicker.pick_pdf() {
            let _ = result_tx.send(WorkerResult::FilePicked { path });
        }
    });
}

fn reopen_last(app: &mut LecternApp) {
    match HandleStore::at_default_location().map(|store| store.load()) {
        Ok(Some(handle)) => app.reopen(handle),
        Ok(None) => app.ui_state.add_log("No previously opened file".into()),
        Err(e) => app.ui_state.add_log(format!("ERROR: {e}")),
    }
}

fn import_config(app: &mut LecternApp) {
    let result_tx = app.result_tx.clone();
    std::thread::spawn(move || {
        let Some(path) = rfd::FileDialog::new().add_filter("TOML", &["toml"]).pick_file() else {
            return;
        };
        let message = match LecternConfig::load(&path) {
            Ok(config) => WorkerResult::ConfigImported { config },
            Err(e) => WorkerResult::Log {
                message: format!("ERROR: cannot import {}: {e}", path.display()),
            },
        };
        let _ = result_tx.send(message);
    });
}

fn export_config(app: &mut LecternApp) {
    let config = app.state.config.clone();
    let result_tx = app.result_tx.clone();

    std::thread::spawn(move || {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("TOML", &["toml"])
            .set_file_name("lectern_config.toml")
            .save_file()
        {
            let message = match write_config(&config, &path) {
                Ok(()) => format!("Config exported to {}", path.display()),
                Err(e) => format!("ERROR: {e:#}"),
            };
            let _ = result_tx.send(WorkerResult::Log { message });
        }
    });
}

fn write_config(config: &LecternConfig, path: &Path) -> anyhow::Result<()> {
    use anyhow::Context;
    config
        .save(path)
        .with_context(|| format!("cannot export config to {}", path.display()))
}
