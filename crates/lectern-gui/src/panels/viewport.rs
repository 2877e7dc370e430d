use egui::emath::Rot2;
use egui::epaint::TextShape;

use crate::app::LecternApp;
use crate::states::display_size;

/// Page size at 100% zoom while no rendered image is available, US Letter in points.
const PAGE_SIZE: egui::Vec2 = egui::vec2(612.0, 792.0);
const PAGE_MARGIN: f32 = 48.0;
const BASE_FONT_SIZE: f32 = 12.0;
const OUTER_PADDING: f32 = 16.0;

pub fn show(ctx: &egui::Context, app: &mut LecternApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let rect = ui.available_rect_before_wrap();
        paint_background(ui, rect);
        handle_keys(ctx, app);

        if app.state.view.total_pages() == 0 {
            show_placeholder(ui, app.ui_state.is_busy());
            return;
        }

        let pixels_per_point = ctx.pixels_per_point();
        app.request_page_render(pixels_per_point);

        let scale = app.state.view.scale();
        let rotation = app.state.view.rotation();
        let image = app.wanted_page(pixels_per_point).and_then(|wanted| {
            app.page_image
                .texture_for(&wanted)
                .map(|(rendered, texture)| {
                    (texture.id(), display_size(texture.size(), rendered, scale))
                })
        });
        let page_text = app.state.current_page_text().unwrap_or_default().to_owned();

        let page_size = PAGE_SIZE * scale;
        let display = match image {
            Some((_, size)) => size,
            None if rotation.is_sideways() => egui::vec2(page_size.y, page_size.x),
            None => page_size,
        };

        egui::ScrollArea::both()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                let outer = egui::vec2(
                    (display.x + 2.0 * OUTER_PADDING).max(ui.available_width()),
                    display.y + 2.0 * OUTER_PADDING,
                );
                let (area, _) = ui.allocate_exact_size(outer, egui::Sense::hover());
                let page_rect = egui::Rect::from_center_size(
                    egui::pos2(area.center().x, area.top() + OUTER_PADDING + display.y / 2.0),
                    display,
                );
                draw_page(ui, page_rect);
                match image {
                    Some((texture_id, _)) => {
                        let uv = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
                        ui.painter()
                            .image(texture_id, page_rect, uv, egui::Color32::WHITE);
                    }
                    None => {
                        draw_text_layer(ui, page_rect, page_size, scale, rotation.radians(), page_text);
                    }
                }
            });
    });
}

fn paint_background(ui: &egui::Ui, rect: egui::Rect) {
    ui.painter()
        .rect_filled(rect, 0.0, egui::Color32::from_gray(60));
}

fn draw_page(ui: &egui::Ui, page_rect: egui::Rect) {
    let painter = ui.painter();
    painter.rect_filled(page_rect.translate(egui::vec2(3.0, 3.0)), 0.0, egui::Color32::from_black_alpha(80));
    painter.rect_filled(page_rect, 0.0, egui::Color32::WHITE);
    painter.rect_stroke(
        page_rect,
        0.0,
        egui::Stroke::new(1.0, egui::Color32::from_gray(160)),
        egui::StrokeKind::Outside,
    );
}

/// Paint the page text as it sits on the unrotated page, then turn it with the page.
fn draw_text_layer(
    ui: &egui::Ui,
    page_rect: egui::Rect,
    page_size: egui::Vec2,
    scale: f32,
    angle: f32,
    text: String,
) {
    let margin = PAGE_MARGIN * scale;
    let (text, color) = if text.is_empty() {
        ("No text on this page".to_owned(), egui::Color32::from_gray(150))
    } else {
        (text, egui::Color32::from_gray(20))
    };

    let painter = ui.painter().with_clip_rect(page_rect);
    let galley = painter.layout(
        text,
        egui::FontId::proportional(BASE_FONT_SIZE * scale),
        color,
        (page_size.x - 2.0 * margin).max(1.0),
    );

    // Top-left text corner relative to the page center, before rotation.
    let corner = egui::vec2(-page_size.x / 2.0 + margin, -page_size.y / 2.0 + margin);
    let pos = page_rect.center() + Rot2::from_angle(angle) * corner;
    painter.add(TextShape::new(pos, galley, color).with_angle(angle));
}

fn handle_keys(ctx: &egui::Context, app: &mut LecternApp) {
    // Leave arrow keys to text edits that have focus.
    if ctx.memory(|m| m.focused().is_some()) {
        return;
    }
    let view = &mut app.state.view;
    let mut moved = false;
    ctx.input(|i| {
        if i.key_pressed(egui::Key::ArrowRight) || i.key_pressed(egui::Key::PageDown) {
            view.next_page();
            moved = true;
        }
        if i.key_pressed(egui::Key::ArrowLeft) || i.key_pressed(egui::Key::PageUp) {
            view.prev_page();
            moved = true;
        }
        if i.modifiers.command && (i.key_pressed(egui::Key::Plus) || i.key_pressed(egui::Key::Equals)) {
            view.zoom_in();
        }
        if i.modifiers.command && i.key_pressed(egui::Key::Minus) {
            view.zoom_out();
        }
    });
    if moved {
        app.ui_state.jump_target = app.state.view.current_page();
    }
}

fn show_placeholder(ui: &mut egui::Ui, opening: bool) {
    let text = if opening { "Opening..." } else { "Open a PDF to begin" };
    ui.centered_and_justified(|ui| {
        ui.label(
            egui::RichText::new(text)
                .size(18.0)
                .color(egui::Color32::from_gray(140)),
        );
    });
}
