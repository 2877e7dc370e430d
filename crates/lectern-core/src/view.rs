use serde::{Deserialize, Serialize};

use crate::config::ViewConfig;

/// Page orientation in quarter turns.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rotation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    pub fn degrees(self) -> u16 {
        match self {
            Self::Deg0 => 0,
            Self::Deg90 => 90,
            Self::Deg180 => 180,
            Self::Deg270 => 270,
        }
    }

    /// Map any multiple of 90 (negative included) onto the four orientations.
    pub fn from_degrees(degrees: i32) -> Self {
        match degrees.rem_euclid(360) {
            90 => Self::Deg90,
            180 => Self::Deg180,
            270 => Self::Deg270,
            _ => Self::Deg0,
        }
    }

    pub fn radians(self) -> f32 {
        f32::from(self.degrees()).to_radians()
    }

    /// True when the page's width and height are swapped on screen.
    pub fn is_sideways(self) -> bool {
        matches!(self, Self::Deg90 | Self::Deg270)
    }
}

impl std::fmt::Display for Rotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\u{b0}", self.degrees())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rotate {
    Left,
    Right,
}

/// Page, zoom and rotation of the displayed document.
///
/// `current_page` always lies in `[1, total_pages]` once pages are known;
/// every setter enforces this.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewState {
    current_page: u32,
    total_pages: u32,
    scale: f32,
    rotation: Rotation,
    min_scale: f32,
    zoom_in_step: f32,
    zoom_out_step: f32,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(&ViewConfig::default())
    }
}

impl ViewState {
    pub fn new(config: &ViewConfig) -> Self {
        let min_scale = if config.min_scale.is_finite() && config.min_scale > 0.0 {
            config.min_scale
        } else {
            crate::consts::DEFAULT_MIN_SCALE
        };
        Self {
            current_page: 1,
            total_pages: 0,
            scale: config.initial_scale.max(min_scale),
            rotation: Rotation::Deg0,
            min_scale,
            zoom_in_step: config.zoom_in_step,
            zoom_out_step: config.zoom_out_step,
        }
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    pub fn min_scale(&self) -> f32 {
        self.min_scale
    }

    /// Zero-based index of the current page, if the document has pages.
    pub fn page_index(&self) -> Option<usize> {
        (self.total_pages > 0).then(|| (self.current_page - 1) as usize)
    }

    /// Set the zoom scale. Values below the minimum are raised to it; there is
    /// no upper bound. Non-finite values are ignored.
    pub fn set_scale(&mut self, scale: f32) {
        if scale.is_finite() {
            self.scale = scale.max(self.min_scale);
        }
    }

    pub fn zoom_in(&mut self) {
        self.set_scale(self.scale + self.zoom_in_step);
    }

    pub fn zoom_out(&mut self) {
        self.set_scale(self.scale - self.zoom_out_step);
    }

    /// Move to an absolute page, clamped into the valid range.
    pub fn set_current_page(&mut self, page: u32) {
        self.current_page = self.clamp_page(page);
    }

    /// Move to a page computed from the current one, clamped into the valid range.
    pub fn update_current_page(&mut self, update: impl FnOnce(u32) -> u32) {
        let next = update(self.current_page);
        self.set_current_page(next);
    }

    pub fn next_page(&mut self) {
        self.update_current_page(|prev| prev.saturating_add(1));
    }

    pub fn prev_page(&mut self) {
        self.update_current_page(|prev| prev.saturating_sub(1));
    }

    /// Jump to `page` only if it exists. Out-of-range targets are ignored and
    /// return `false`.
    pub fn jump_to_page(&mut self, page: u32) -> bool {
        if page >= 1 && page <= self.total_pages {
            self.current_page = page;
            true
        } else {
            false
        }
    }

    pub fn can_go_prev(&self) -> bool {
        self.current_page > 1
    }

    pub fn can_go_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Set the page count and pull the current page back into range.
    pub fn set_num_pages(&mut self, total: u32) {
        self.total_pages = total;
        self.current_page = self.clamp_page(self.current_page);
    }

    pub fn set_rotation(&mut self, rotation: Rotation) {
        self.rotation = rotation;
    }

    pub fn rotate(&mut self, direction: Rotate) {
        let delta = match direction {
            Rotate::Left => -90,
            Rotate::Right => 90,
        };
        self.rotation = Rotation::from_degrees(i32::from(self.rotation.degrees()) + delta);
    }

    /// Back to page 1 of an unloaded document. Zoom and rotation are kept.
    pub fn reset(&mut self) {
        self.current_page = 1;
        self.total_pages = 0;
    }

    fn clamp_page(&self, page: u32) -> u32 {
        page.clamp(1, self.total_pages.max(1))
    }
}
