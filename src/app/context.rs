use crate::adapters::DeployDirectory;
use crate::ports::{ServiceTemplateSource, SkeletonSource, TemplateRenderer};

/// Application context holding dependencies for generation.
pub struct AppContext<K: SkeletonSource, T: ServiceTemplateSource, R: TemplateRenderer> {
    deploy_dir: DeployDirectory,
    skeleton: K,
    templates: T,
    renderer: R,
}

impl<K: SkeletonSource, T: ServiceTemplateSource, R: TemplateRenderer> AppContext<K, T, R> {
    /// Create a new application context.
    pub fn new(deploy_dir: DeployDirectory, skeleton: K, templates: T, renderer: R) -> Self {
        Self { deploy_dir, skeleton, templates, renderer }
    }

    /// The output directory.
    pub fn deploy_dir(&self) -> &DeployDirectory {
        &self.deploy_dir
    }

    /// Get a reference to the skeleton source.
    pub fn skeleton(&self) -> &K {
        &self.skeleton
    }

    /// Get a reference to the service template source.
    pub fn templates(&self) -> &T {
        &self.templates
    }

    /// Get a reference to the template renderer.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }
}
