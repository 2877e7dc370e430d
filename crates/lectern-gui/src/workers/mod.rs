mod dispatch;
mod exchange;
mod io;
mod render;

pub use dispatch::spawn_worker;
pub use render::spawn_renderer;
pub(crate) use dispatch::{send, send_error, send_log};
