//! Recognized options of the `settings` section.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_yaml::{Mapping, Value};

use super::paths::DEFAULT_DEPLOY_DIR;
use crate::domain::AppError;
use crate::domain::yaml::scalar_text;

const KNOWN_SETTINGS: [&str; 5] =
    ["deploy_dir", "static_dir", "templates_dir", "deploy_provider", "playbook_command"];

/// Raw `settings` section. Unknown options are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub deploy_dir: Option<String>,
    #[serde(default)]
    pub static_dir: Option<String>,
    #[serde(default)]
    pub templates_dir: Option<String>,
    #[serde(default)]
    pub deploy_provider: Option<String>,
    #[serde(default)]
    pub playbook_command: Option<String>,
}

impl Settings {
    pub(crate) fn from_section(section: &Mapping, source: &Path) -> Result<Self, AppError> {
        for key in section.keys() {
            let name = scalar_text(key).unwrap_or_default();
            if !KNOWN_SETTINGS.contains(&name.as_str()) {
                tracing::debug!(setting = %name, "ignoring unknown setting");
            }
        }

        serde_yaml::from_value(Value::Mapping(section.clone())).map_err(|e| {
            AppError::config_error(format!("Invalid settings in \"{}\": {}", source.display(), e))
        })
    }

    /// Apply defaults and resolve relative paths against `working_dir`.
    pub fn resolve(&self, working_dir: &Path) -> Result<DeploySettings, AppError> {
        let provider = match non_empty(&self.deploy_provider) {
            Some(name) => Provider::from_name(name).ok_or_else(|| AppError::UnknownProvider {
                name: name.to_string(),
                available: Provider::ALL.map(|p| p.name()).join(", "),
            })?,
            None => Provider::default(),
        };

        let resolve_path = |value: &Option<String>| non_empty(value).map(|p| working_dir.join(p));

        Ok(DeploySettings {
            deploy_dir: resolve_path(&self.deploy_dir)
                .unwrap_or_else(|| working_dir.join(DEFAULT_DEPLOY_DIR)),
            static_dir: resolve_path(&self.static_dir),
            templates_dir: resolve_path(&self.templates_dir),
            playbook_command: non_empty(&self.playbook_command)
                .unwrap_or(provider.playbook_program())
                .to_string(),
            provider,
        })
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Settings with every default applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploySettings {
    pub deploy_dir: PathBuf,
    /// Root of provider skeletons; `None` selects the embedded skeleton.
    pub static_dir: Option<PathBuf>,
    /// Root of provider templates; `None` selects the embedded templates.
    pub templates_dir: Option<PathBuf>,
    pub provider: Provider,
    pub playbook_command: String,
}

/// Orchestration tool the generated artifacts target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Provider {
    #[default]
    Ansible,
}

impl Provider {
    pub const ALL: [Provider; 1] = [Provider::Ansible];

    /// Name used in `deploy_provider` and as the asset directory name.
    pub fn name(&self) -> &'static str {
        match self {
            Provider::Ansible => "ansible",
        }
    }

    pub fn from_name(name: &str) -> Option<Provider> {
        Provider::ALL.into_iter().find(|p| p.name() == name.to_lowercase())
    }

    /// Executable invoked for playbook actions.
    pub fn playbook_program(&self) -> &'static str {
        match self {
            Provider::Ansible => "ansible-playbook",
        }
    }

    /// Extension of the generated group variables file.
    pub fn group_vars_extension(&self) -> &'static str {
        match self {
            Provider::Ansible => "yml",
        }
    }

    /// Template directory relative to the provider root.
    pub fn service_templates_path(&self) -> &'static str {
        match self {
            Provider::Ansible => "playbooks/service",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(yaml: &str) -> Settings {
        let section: Mapping = serde_yaml::from_str(yaml).unwrap();
        Settings::from_section(&section, Path::new("deploy.yml")).unwrap()
    }

    #[test]
    fn defaults_apply_when_settings_are_empty() {
        let resolved = settings("{}").resolve(Path::new("/work")).unwrap();

        assert_eq!(resolved.deploy_dir, PathBuf::from("/work/deploy"));
        assert_eq!(resolved.static_dir, None);
        assert_eq!(resolved.templates_dir, None);
        assert_eq!(resolved.provider, Provider::Ansible);
        assert_eq!(resolved.playbook_command, "ansible-playbook");
    }

    #[test]
    fn relative_paths_resolve_against_working_dir() {
        let resolved = settings("deploy_dir: out\nstatic_dir: /abs/static\ntemplates_dir: tpl\n")
            .resolve(Path::new("/work"))
            .unwrap();

        assert_eq!(resolved.deploy_dir, PathBuf::from("/work/out"));
        assert_eq!(resolved.static_dir, Some(PathBuf::from("/abs/static")));
        assert_eq!(resolved.templates_dir, Some(PathBuf::from("/work/tpl")));
    }

    #[test]
    fn null_and_empty_values_fall_back_to_defaults() {
        let resolved =
            settings("deploy_dir: ''\ndeploy_provider:\n").resolve(Path::new("/work")).unwrap();

        assert_eq!(resolved.deploy_dir, PathBuf::from("/work/deploy"));
        assert_eq!(resolved.provider, Provider::Ansible);
    }

    #[test]
    fn unknown_options_are_ignored() {
        let parsed = settings("colour: blue\nplaybook_command: echo\n");

        assert_eq!(parsed.playbook_command.as_deref(), Some("echo"));
    }

    #[test]
    fn unknown_provider_is_rejected() {
        let err = settings("deploy_provider: chef\n").resolve(Path::new("/work")).unwrap_err();

        assert!(matches!(err, AppError::UnknownProvider { ref name, .. } if name == "chef"));
    }

    #[test]
    fn non_string_setting_is_a_configuration_error() {
        let section: Mapping = serde_yaml::from_str("deploy_dir: [a, b]\n").unwrap();

        let err = Settings::from_section(&section, Path::new("deploy.yml")).unwrap_err();

        assert!(matches!(err, AppError::Configuration(_)));
    }

    #[test]
    fn provider_names_roundtrip() {
        for provider in Provider::ALL {
            assert_eq!(Provider::from_name(provider.name()), Some(provider));
        }
    }
}
