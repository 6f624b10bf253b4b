//! Provider skeletons, service templates and the example configuration
//! compiled into the binary.

use std::fs;
use std::path::Path;

use include_dir::{Dir, DirEntry, include_dir};

use crate::domain::{AppError, Provider, ServiceTemplate};
use crate::ports::{ServiceTemplateSource, SkeletonSource};

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/static");
static TEMPLATES_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/templates");

/// Example `deploy.yml` written by `init`.
pub static EXAMPLE_CONFIG: &str = include_str!("../../assets/deploy.yml");

fn missing_asset(what: &str, provider: Provider) -> AppError {
    AppError::config_error(format!("No embedded {what} for provider '{provider}'"))
}

/// Skeleton shipped inside the binary.
#[derive(Debug, Clone, Copy)]
pub struct EmbeddedSkeleton {
    provider: Provider,
}

impl EmbeddedSkeleton {
    pub fn new(provider: Provider) -> Self {
        Self { provider }
    }
}

impl SkeletonSource for EmbeddedSkeleton {
    fn copy_into(&self, destination: &Path) -> Result<(), AppError> {
        let root = STATIC_DIR
            .get_dir(self.provider.name())
            .ok_or_else(|| missing_asset("skeleton", self.provider))?;

        fs::create_dir_all(destination)?;
        write_tree(root, root.path(), destination)
    }

    fn describe(&self) -> String {
        format!("embedded {} skeleton", self.provider)
    }
}

fn write_tree(dir: &Dir, base: &Path, destination: &Path) -> Result<(), AppError> {
    for entry in dir.entries() {
        let relative = entry.path().strip_prefix(base).unwrap_or(entry.path());
        let target = destination.join(relative);
        match entry {
            DirEntry::Dir(subdir) => {
                fs::create_dir_all(&target)?;
                write_tree(subdir, base, destination)?;
            }
            DirEntry::File(file) => {
                if let Some(parent) = target.parent() {
                    fs::create_dir_all(parent)?;
                }
                fs::write(&target, file.contents())?;
            }
        }
    }
    Ok(())
}

/// Service templates shipped inside the binary.
#[derive(Debug, Clone, Copy)]
pub struct EmbeddedTemplateSource {
    provider: Provider,
}

impl EmbeddedTemplateSource {
    pub fn new(provider: Provider) -> Self {
        Self { provider }
    }
}

impl ServiceTemplateSource for EmbeddedTemplateSource {
    fn service_templates(&self) -> Result<Vec<ServiceTemplate>, AppError> {
        let path = Path::new(self.provider.name()).join(self.provider.service_templates_path());
        let dir = TEMPLATES_DIR
            .get_dir(&path)
            .ok_or_else(|| missing_asset("service templates", self.provider))?;

        let mut templates = Vec::new();
        for file in dir.files() {
            let (Some(name), Some(source)) = (file.path().file_name(), file.contents_utf8()) else {
                continue;
            };
            templates.push(ServiceTemplate {
                name: name.to_string_lossy().to_string(),
                source: source.to_string(),
            });
        }

        templates.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(templates)
    }
}
