pub mod app;
pub mod config;
pub mod render;

pub use app::*;
pub use config::*;
pub use render::*;
