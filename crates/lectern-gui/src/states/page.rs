use crate::messages::PageRequest;

/// Rendered page image of the current document and the request in flight.
#[derive(Default)]
pub struct PageImage {
    /// Number of the document on screen. Bumped on every successful open.
    doc: u64,
    requested: Option<PageRequest>,
    shown: Option<(PageRequest, egui::TextureHandle)>,
    /// Set once rendering turned out to be impossible in this run.
    pub unavailable: Option<String>,
}

impl PageImage {
    pub fn doc(&self) -> u64 {
        self.doc
    }

    /// A new document replaced the old one. Returns its number.
    pub fn next_document(&mut self) -> u64 {
        self.doc += 1;
        self.requested = None;
        self.shown = None;
        self.doc
    }

    /// Record `request` as sent. Returns `false` if it was already asked for
    /// or is already on screen.
    pub fn begin_request(&mut self, request: PageRequest) -> bool {
        if self.unavailable.is_some() || request.doc != self.doc {
            return false;
        }
        let on_screen = self.shown.as_ref().is_some_and(|(r, _)| *r == request);
        if on_screen || self.requested == Some(request) {
            return false;
        }
        self.requested = Some(request);
        true
    }

    /// Whether a rendered image for `request` should be kept.
    pub fn accepts(&self, request: &PageRequest) -> bool {
        request.doc == self.doc
    }

    pub fn show(&mut self, request: PageRequest, texture: egui::TextureHandle) {
        if self.accepts(&request) {
            self.shown = Some((request, texture));
        }
    }

    /// The last request failed. Leave it recorded so it is not retried every frame.
    pub fn fail(&mut self, request: &PageRequest) {
        if self.accepts(request) {
            self.shown = None;
        }
    }

    /// Image for `page` in `rotation`, possibly rendered at another zoom.
    pub fn texture_for(&self, wanted: &PageRequest) -> Option<(&PageRequest, &egui::TextureHandle)> {
        self.shown
            .as_ref()
            .filter(|(r, _)| {
                r.doc == wanted.doc && r.page == wanted.page && r.rotation == wanted.rotation
            })
            .map(|(r, t)| (r, t))
    }
}

/// On-screen size in points of an image rendered for `rendered`, shown at `scale`.
pub fn display_size(image_px: [usize; 2], rendered: &PageRequest, scale: f32) -> egui::Vec2 {
    let px_per_unit_scale = (rendered.scale * rendered.pixels_per_point).max(f32::EPSILON);
    egui::vec2(image_px[0] as f32, image_px[1] as f32) / px_per_unit_scale * scale
}
