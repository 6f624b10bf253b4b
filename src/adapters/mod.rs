pub mod assets;
pub mod filesystem;
pub mod minijinja_renderer;
pub mod playbook_command;
pub mod provider_assets;

pub use assets::{EXAMPLE_CONFIG, EmbeddedSkeleton, EmbeddedTemplateSource};
pub use filesystem::{DeployDirectory, DirectorySkeleton, DirectoryTemplateSource};
pub use minijinja_renderer::MinijinjaTemplateRenderer;
pub use playbook_command::PlaybookCommandAdapter;
pub use provider_assets::{ProviderSkeleton, ProviderTemplates};
