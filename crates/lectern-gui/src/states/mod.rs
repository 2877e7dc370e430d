mod page;
mod ui;

pub use page::{display_size, PageImage};
pub use ui::UIState;
