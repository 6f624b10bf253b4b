use serde_yaml::Mapping;

use crate::domain::{AppError, ServiceTemplate};

/// Port for the template engine.
pub trait TemplateRenderer {
    fn render(&self, template: &ServiceTemplate, context: &Mapping) -> Result<String, AppError>;
}
