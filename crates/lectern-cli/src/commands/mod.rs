pub mod config;
pub mod doi;
pub mod exchange;
pub mod info;
pub mod text;
