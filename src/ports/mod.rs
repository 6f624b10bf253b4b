mod playbook_runner;
mod skeleton_source;
mod template_renderer;
mod template_source;

pub use playbook_runner::PlaybookRunner;
pub use skeleton_source::SkeletonSource;
pub use template_renderer::TemplateRenderer;
pub use template_source::ServiceTemplateSource;
