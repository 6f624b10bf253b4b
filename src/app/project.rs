//! Configuration loaded for one invocation, plus the adapters it selects.

use std::path::{Path, PathBuf};

use crate::adapters::{
    DeployDirectory, MinijinjaTemplateRenderer, PlaybookCommandAdapter, ProviderSkeleton,
    ProviderTemplates,
};
use crate::app::AppContext;
use crate::domain::config::paths::DEFAULT_CONFIG_FILE;
use crate::domain::{AppError, Configuration, DeploySettings};

/// `--config` when given, `<working_dir>/deploy.yml` otherwise.
pub fn config_path(working_dir: &Path, config: Option<&Path>) -> PathBuf {
    match config {
        Some(path) => working_dir.join(path),
        None => working_dir.join(DEFAULT_CONFIG_FILE),
    }
}

/// A parsed `deploy.yml` with its settings resolved.
#[derive(Debug, Clone)]
pub struct Project {
    pub config: Configuration,
    pub settings: DeploySettings,
}

impl Project {
    pub fn load(working_dir: &Path, config: Option<&Path>) -> Result<Self, AppError> {
        let path = config_path(working_dir, config);
        tracing::debug!(config = %path.display(), "loading configuration");

        let config = Configuration::load(&path)?;
        let settings = config.settings()?.resolve(working_dir)?;
        Ok(Self { config, settings })
    }

    pub fn deploy_directory(&self) -> DeployDirectory {
        DeployDirectory::new(self.settings.deploy_dir.clone())
    }

    /// Generation context wired with the provider's assets.
    pub fn generate_context(
        &self,
    ) -> AppContext<ProviderSkeleton, ProviderTemplates, MinijinjaTemplateRenderer> {
        AppContext::new(
            self.deploy_directory(),
            ProviderSkeleton::from_settings(&self.settings),
            ProviderTemplates::from_settings(&self.settings),
            MinijinjaTemplateRenderer::new(),
        )
    }

    pub fn playbook_runner(&self) -> PlaybookCommandAdapter {
        PlaybookCommandAdapter::new(
            self.settings.playbook_command.clone(),
            self.settings.deploy_dir.clone(),
        )
    }
}
