pub mod document;
pub mod paths;
pub mod settings;

pub use document::Configuration;
pub use settings::{DeploySettings, Provider, Settings};
