//! List command - services and the playbook actions they can run.

use std::collections::HashSet;

use crate::adapters::DeployDirectory;
use crate::domain::group_vars::entry_name;
use crate::domain::{AppError, Command, Configuration};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceActions {
    pub service: String,
    pub actions: Vec<Command>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListOutcome {
    pub services: Vec<ServiceActions>,
    pub environments: Vec<String>,
    /// False when the deploy directory has not been generated yet.
    pub generated: bool,
}

/// An action is available for a service when any playbook it could
/// resolve to exists for at least one configured environment.
pub fn execute(config: &Configuration, deploy_dir: &DeployDirectory) -> Result<ListOutcome, AppError> {
    let environments = config
        .environments()?
        .keys()
        .map(|key| entry_name(key, "environments"))
        .collect::<Result<Vec<_>, _>>()?;
    let files: HashSet<String> = deploy_dir.file_names()?.into_iter().collect();

    let mut services = Vec::new();
    for key in config.services()?.keys() {
        let service = entry_name(key, "services")?;
        let actions = Command::PLAYBOOK_ACTIONS
            .into_iter()
            .filter(|command| {
                environments.iter().any(|environment| {
                    command
                        .playbook_candidates(environment, Some(&service))
                        .iter()
                        .any(|name| files.contains(name))
                })
            })
            .collect();
        services.push(ServiceActions { service, actions });
    }

    Ok(ListOutcome { services, environments, generated: deploy_dir.exists() })
}
