use minijinja::{Environment, UndefinedBehavior};
use serde_yaml::Mapping;

use crate::domain::{AppError, ServiceTemplate};
use crate::ports::TemplateRenderer;

/// Template renderer using Minijinja.
///
/// Undefined variables are errors and trailing newlines are kept, so a
/// rendered playbook ends exactly like its template.
pub struct MinijinjaTemplateRenderer {
    env: Environment<'static>,
}

impl MinijinjaTemplateRenderer {
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_keep_trailing_newline(true);
        Self { env }
    }
}

impl Default for MinijinjaTemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for MinijinjaTemplateRenderer {
    fn render(&self, template: &ServiceTemplate, context: &Mapping) -> Result<String, AppError> {
        self.env
            .render_named_str(&template.name, &template.source, context)
            .map_err(|err| template_render_error(&template.name, err))
    }
}

fn template_render_error(template_name: &str, err: impl std::fmt::Display) -> AppError {
    AppError::TemplateRender { template: template_name.to_string(), reason: err.to_string() }
}
