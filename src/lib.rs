//! deploy-generator: generate Ansible inventories, group variables and
//! service playbooks from a single `deploy.yml`, and run them.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

use std::path::{Path, PathBuf};

use app::Project;
use app::commands::{action, generate, init as init_command, list as list_command};

pub use app::commands::action::{ActionRequest, ResolvedAction};
pub use app::commands::generate::GenerateOutcome;
pub use app::commands::list::{ListOutcome, ServiceActions};
pub use domain::{AppError, Command};

fn working_dir() -> Result<PathBuf, AppError> {
    Ok(std::env::current_dir()?)
}

/// Write an example `deploy.yml` to the configuration path.
///
/// Returns the path written.
pub fn init(config: Option<&Path>) -> Result<PathBuf, AppError> {
    let path = app::config_path(&working_dir()?, config);
    init_command::execute(&path)?;
    Ok(path)
}

/// Regenerate the deploy directory from the configuration.
pub fn generate(config: Option<&Path>) -> Result<GenerateOutcome, AppError> {
    let project = Project::load(&working_dir()?, config)?;
    let ctx = project.generate_context();
    generate::execute(&ctx, &project.config, project.settings.provider)
}

/// List services and the playbook actions available for them.
pub fn list(config: Option<&Path>) -> Result<ListOutcome, AppError> {
    let project = Project::load(&working_dir()?, config)?;
    list_command::execute(&project.config, &project.deploy_directory())
}

/// Run a playbook action against a generated environment.
///
/// Resolves `inventory-<environment>.ini` and the most specific playbook,
/// then blocks until the orchestration tool exits.
pub fn run_action(
    config: Option<&Path>,
    command: Command,
    environment: &str,
    service: Option<&str>,
) -> Result<ResolvedAction, AppError> {
    let project = Project::load(&working_dir()?, config)?;
    let request = ActionRequest {
        command,
        environment: environment.to_string(),
        service: service.map(str::to_string),
    };
    action::execute(&project.deploy_directory(), &project.playbook_runner(), &request)
}
