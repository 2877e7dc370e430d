pub mod consts;
pub mod config;
pub mod digest;
pub mod error;
pub mod exchange;
pub mod extract;
pub mod selection;
pub mod session;
pub mod source;
pub mod state;
pub mod view;
