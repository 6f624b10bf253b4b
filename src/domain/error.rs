use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for deploy-generator operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration document is missing.
    #[error("Configuration file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    /// Configuration document already exists (init).
    #[error("Configuration file already exists: {}", .0.display())]
    ConfigExists(PathBuf),

    /// Configuration document is not valid YAML.
    #[error("Failed to parse {}: {details}", .path.display())]
    ConfigParse { path: PathBuf, details: String },

    /// A top-level section is missing or has the wrong shape.
    #[error("Section `{section}` in \"{}\" must be {expected}", .source_path.display())]
    ConfigSectionType { section: String, source_path: PathBuf, expected: &'static str },

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// The configured deploy provider is not supported.
    #[error("Unknown deploy provider '{name}'. Available: {available}")]
    UnknownProvider { name: String, available: String },

    /// Generation produced a duplicate key or group.
    #[error("Improperly configured: {0}")]
    ImproperlyConfigured(String),

    /// No inventory file exists for the requested environment.
    #[error("Inventory file for environment '{environment}' not found: {}", .path.display())]
    InventoryFileNotFound { environment: String, path: PathBuf },

    /// None of the candidate playbooks exist in the deploy directory.
    #[error(
        "Playbook for command '{command}' not found in {}. Tried: {}",
        .deploy_dir.display(),
        .candidates.join(", ")
    )]
    PlaybookFileNotFound { command: String, candidates: Vec<String>, deploy_dir: PathBuf },

    /// Service template directory is missing.
    #[error("Service templates directory not found: {}", .0.display())]
    TemplatesNotFound(PathBuf),

    /// Template rendering failed.
    #[error("Failed to render template '{template}': {reason}")]
    TemplateRender { template: String, reason: String },

    /// The external playbook executable could not be started.
    #[error("Failed to launch '{program}': {source}")]
    PlaybookLaunch {
        program: String,
        #[source]
        source: io::Error,
    },

    /// The external playbook executable exited unsuccessfully.
    #[error("'{program}' exited with {}", exit_description(.code))]
    PlaybookFailed { program: String, code: Option<i32> },

    /// A generated file name would land outside the deploy directory.
    #[error("Path escapes the deploy directory: {0}")]
    PathTraversal(String),

    /// Command name is not part of the command set.
    #[error("Unknown command '{0}'")]
    UnknownCommand(String),
}

fn exit_description(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {code}"),
        None => "a signal".to_string(),
    }
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub fn improperly_configured<S: Into<String>>(message: S) -> Self {
        AppError::ImproperlyConfigured(message.into())
    }
}
