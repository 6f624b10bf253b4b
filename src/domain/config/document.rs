//! The `deploy.yml` document and its four top-level sections.

use std::path::{Path, PathBuf};

use serde_yaml::{Mapping, Value};

use super::settings::Settings;
use crate::domain::AppError;

pub const SETTINGS_SECTION: &str = "settings";
pub const SERVICES_SECTION: &str = "services";
pub const ENVIRONMENTS_SECTION: &str = "environments";
pub const GROUPS_SECTION: &str = "groups";

const MAPPING_TYPE: &str = "a mapping";

/// Parsed configuration document.
///
/// Sections are kept as `serde_yaml::Mapping`, which preserves key order
/// from the source document.
#[derive(Debug, Clone)]
pub struct Configuration {
    source: PathBuf,
    root: Mapping,
}

impl Configuration {
    /// Read and parse the configuration document at `path`.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Err(AppError::ConfigNotFound(path.to_path_buf()));
            }
            Err(err) => return Err(err.into()),
        };
        Self::parse(&content, path)
    }

    /// Parse configuration content; `source` is only used in error messages.
    pub fn parse(content: &str, source: impl Into<PathBuf>) -> Result<Self, AppError> {
        let source = source.into();
        let parse_error =
            |e: serde_yaml::Error| AppError::ConfigParse { path: source.clone(), details: e.to_string() };

        let mut value: Value = serde_yaml::from_str(content).map_err(parse_error)?;
        value.apply_merge().map_err(parse_error)?;

        let root = match value {
            Value::Mapping(map) => map,
            Value::Null => Mapping::new(),
            _ => {
                return Err(AppError::config_error(format!(
                    "Root of \"{}\" must be a mapping",
                    source.display()
                )));
            }
        };

        Ok(Self { source, root })
    }

    /// Path the document was read from.
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Check that every section is present and is a mapping.
    pub fn validate(&self) -> Result<(), AppError> {
        for name in [SETTINGS_SECTION, SERVICES_SECTION, ENVIRONMENTS_SECTION, GROUPS_SECTION] {
            self.section(name)?;
        }
        Ok(())
    }

    pub fn settings_section(&self) -> Result<&Mapping, AppError> {
        self.section(SETTINGS_SECTION)
    }

    /// Recognized settings, deserialized from the `settings` section.
    pub fn settings(&self) -> Result<Settings, AppError> {
        Settings::from_section(self.settings_section()?, &self.source)
    }

    /// Service name -> parameter mapping.
    pub fn services(&self) -> Result<&Mapping, AppError> {
        self.section(SERVICES_SECTION)
    }

    /// Environment name -> host-group mapping.
    pub fn environments(&self) -> Result<&Mapping, AppError> {
        self.section(ENVIRONMENTS_SECTION)
    }

    /// Group name -> child group list.
    pub fn groups(&self) -> Result<&Mapping, AppError> {
        self.section(GROUPS_SECTION)
    }

    fn section(&self, name: &str) -> Result<&Mapping, AppError> {
        match self.root.get(name) {
            Some(Value::Mapping(map)) => Ok(map),
            _ => Err(AppError::ConfigSectionType {
                section: name.to_string(),
                source_path: self.source.clone(),
                expected: MAPPING_TYPE,
            }),
        }
    }
}

/// Treat a nested entry (one service, one environment) as a mapping.
///
/// `null` counts as an empty mapping so `web:` with no parameters is allowed.
pub fn nested_mapping<'a>(
    section: &str,
    name: &str,
    value: &'a Value,
    source: &Path,
) -> Result<Option<&'a Mapping>, AppError> {
    match value {
        Value::Mapping(map) => Ok(Some(map)),
        Value::Null => Ok(None),
        _ => Err(AppError::ConfigSectionType {
            section: format!("{section}.{name}"),
            source_path: source.to_path_buf(),
            expected: MAPPING_TYPE,
        }),
    }
}
