use std::sync::mpsc;
use std::time::Instant;

use anyhow::{anyhow, Context, Result};
use lectern_core::view::Rotation;
use pdfium_render::prelude::*;
use tracing::{debug, info, warn};

use crate::messages::{PageRequest, RenderCommand, WorkerResult};

use super::{send, send_log};

/// Spawn the page render thread. Returns the command sender.
///
/// The thread binds PDFium itself; if no library can be found it reports
/// [`WorkerResult::RenderUnavailable`] and exits.
pub fn spawn_renderer(
    result_tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) -> std::io::Result<mpsc::Sender<RenderCommand>> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<RenderCommand>();

    std::thread::Builder::new()
        .name("lectern-render".into())
        .spawn(move || match bind_pdfium() {
            Ok(pdfium) => render_loop(&pdfium, &cmd_rx, &result_tx, &ctx),
            Err(e) => {
                warn!(error = %e, "PDF rendering disabled");
                send(&result_tx, &ctx, WorkerResult::RenderUnavailable {
                    reason: e.to_string(),
                });
            }
        })?;

    Ok(cmd_tx)
}

/// Look for PDFium next to the executable, then in the working directory,
/// then in the system library paths.
fn bind_pdfium() -> Result<Pdfium> {
    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()));

    if let Some(ref dir) = exe_dir {
        if let Ok(bindings) =
            Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path(dir))
        {
            return Ok(Pdfium::new(bindings));
        }
    }

    let bindings = Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path("./"))
        .or_else(|_| Pdfium::bind_to_system_library())
        .map_err(|e| anyhow!("PDFium library not found: {e}"))?;
    Ok(Pdfium::new(bindings))
}

fn render_loop(
    pdfium: &Pdfium,
    cmd_rx: &mpsc::Receiver<RenderCommand>,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    let mut current: Option<(u64, PdfDocument<'_>)> = None;
    let mut backlog: Option<RenderCommand> = None;

    loop {
        let cmd = match backlog.take() {
            Some(cmd) => cmd,
            None => match cmd_rx.recv() {
                Ok(cmd) => cmd,
                Err(_) => break,
            },
        };

        match cmd {
            RenderCommand::Load { doc, bytes } => {
                current = match pdfium.load_pdf_from_byte_vec(bytes, None) {
                    Ok(document) => {
                        info!(doc, pages = document.pages().len(), "Renderer loaded document");
                        Some((doc, document))
                    }
                    Err(e) => {
                        warn!(doc, error = %e, "Renderer could not load document");
                        send_log(tx, ctx, format!("Page images unavailable: {e}"));
                        None
                    }
                };
            }
            RenderCommand::Page(mut request) => {
                // Only the newest of a burst of page requests is worth rendering.
                while let Ok(next) = cmd_rx.try_recv() {
                    match next {
                        RenderCommand::Page(newer) => request = newer,
                        other => {
                            backlog = Some(other);
                            break;
                        }
                    }
                }

                let Some((_, document)) = current.as_ref().filter(|(doc, _)| *doc == request.doc)
                else {
                    debug!(doc = request.doc, "No document loaded for render request");
                    continue;
                };

                let start = Instant::now();
                match render_page(document, &request) {
                    Ok(image) => {
                        debug!(
                            page = request.page,
                            width = image.size[0],
                            height = image.size[1],
                            ms = start.elapsed().as_millis() as u64,
                            "Page rendered"
                        );
                        send(tx, ctx, WorkerResult::PageRendered { request, image });
                    }
                    Err(e) => {
                        warn!(page = request.page, error = %e, "Page render failed");
                        send(tx, ctx, WorkerResult::RenderFailed {
                            request,
                            message: format!("{e:#}"),
                        });
                    }
                }
            }
        }
    }
}

fn render_page(document: &PdfDocument<'_>, request: &PageRequest) -> Result<egui::ColorImage> {
    let index = request
        .page
        .checked_sub(1)
        .and_then(|i| u16::try_from(i).ok())
        .with_context(|| format!("page {} is out of range", request.page))?;
    let page = document
        .pages()
        .get(index)
        .map_err(|e| anyhow!("page {}: {e}", request.page))?;

    let config = PdfRenderConfig::new()
        .scale_page_by_factor(request.scale * request.pixels_per_point)
        .rotate(render_rotation(request.rotation), true);
    let bitmap = page
        .render_with_config(&config)
        .map_err(|e| anyhow!("PDFium could not render page {}: {e}", request.page))?;

    let size = [bitmap.width() as usize, bitmap.height() as usize];
    Ok(egui::ColorImage::from_rgba_unmultiplied(
        size,
        &bitmap.as_rgba_bytes(),
    ))
}

fn render_rotation(rotation: Rotation) -> PdfPageRenderRotation {
    match rotation {
        Rotation::Deg0 => PdfPageRenderRotation::None,
        Rotation::Deg90 => PdfPageRenderRotation::Degrees90,
        Rotation::Deg180 => PdfPageRenderRotation::Degrees180,
        Rotation::Deg270 => PdfPageRenderRotation::Degrees270,
    }
}
