use std::fs;
use std::path::Path;

use crate::domain::{AppError, ServiceTemplate};
use crate::ports::{ServiceTemplateSource, SkeletonSource};

/// Skeleton made of in-memory files.
#[derive(Debug, Clone, Default)]
pub struct StaticSkeleton {
    files: Vec<(String, String)>,
}

impl StaticSkeleton {
    pub fn new(files: &[(&str, &str)]) -> Self {
        Self { files: files.iter().map(|(p, c)| (p.to_string(), c.to_string())).collect() }
    }
}

impl SkeletonSource for StaticSkeleton {
    fn copy_into(&self, destination: &Path) -> Result<(), AppError> {
        fs::create_dir_all(destination)?;
        for (path, content) in &self.files {
            let target = destination.join(path);
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(target, content)?;
        }
        Ok(())
    }

    fn describe(&self) -> String {
        "static test skeleton".to_string()
    }
}

/// Fixed template set.
#[derive(Debug, Clone, Default)]
pub struct StaticTemplateSource {
    templates: Vec<ServiceTemplate>,
}

impl StaticTemplateSource {
    pub fn new(templates: &[(&str, &str)]) -> Self {
        Self {
            templates: templates
                .iter()
                .map(|(name, source)| ServiceTemplate {
                    name: name.to_string(),
                    source: source.to_string(),
                })
                .collect(),
        }
    }
}

impl ServiceTemplateSource for StaticTemplateSource {
    fn service_templates(&self) -> Result<Vec<ServiceTemplate>, AppError> {
        Ok(self.templates.clone())
    }
}
