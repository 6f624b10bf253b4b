//! Selection between user-provided and embedded provider assets.

use std::path::Path;

use crate::adapters::assets::{EmbeddedSkeleton, EmbeddedTemplateSource};
use crate::adapters::filesystem::{DirectorySkeleton, DirectoryTemplateSource};
use crate::domain::{AppError, DeploySettings, ServiceTemplate};
use crate::ports::{ServiceTemplateSource, SkeletonSource};

/// `static_dir` when configured, the embedded skeleton otherwise.
#[derive(Debug, Clone)]
pub enum ProviderSkeleton {
    Directory(DirectorySkeleton),
    Embedded(EmbeddedSkeleton),
}

impl ProviderSkeleton {
    pub fn from_settings(settings: &DeploySettings) -> Self {
        match &settings.static_dir {
            Some(dir) => Self::Directory(DirectorySkeleton::new(dir, settings.provider)),
            None => Self::Embedded(EmbeddedSkeleton::new(settings.provider)),
        }
    }
}

impl SkeletonSource for ProviderSkeleton {
    fn copy_into(&self, destination: &Path) -> Result<(), AppError> {
        match self {
            Self::Directory(skeleton) => skeleton.copy_into(destination),
            Self::Embedded(skeleton) => skeleton.copy_into(destination),
        }
    }

    fn describe(&self) -> String {
        match self {
            Self::Directory(skeleton) => skeleton.describe(),
            Self::Embedded(skeleton) => skeleton.describe(),
        }
    }
}

/// `templates_dir` when configured, the embedded templates otherwise.
#[derive(Debug, Clone)]
pub enum ProviderTemplates {
    Directory(DirectoryTemplateSource),
    Embedded(EmbeddedTemplateSource),
}

impl ProviderTemplates {
    pub fn from_settings(settings: &DeploySettings) -> Self {
        match &settings.templates_dir {
            Some(dir) => Self::Directory(DirectoryTemplateSource::new(dir, settings.provider)),
            None => Self::Embedded(EmbeddedTemplateSource::new(settings.provider)),
        }
    }
}

impl ServiceTemplateSource for ProviderTemplates {
    fn service_templates(&self) -> Result<Vec<ServiceTemplate>, AppError> {
        match self {
            Self::Directory(source) => source.service_templates(),
            Self::Embedded(source) => source.service_templates(),
        }
    }
}
