pub mod cli;
pub mod commands;
mod context;
mod project;

pub use context::AppContext;
pub use project::{Project, config_path};
