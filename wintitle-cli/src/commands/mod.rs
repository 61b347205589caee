pub mod config;
pub mod preview;
pub mod render;
pub mod sanitize;
