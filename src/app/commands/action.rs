//! Playbook actions (`start`, `stop`, ...) - resolve artifacts and run the tool.

use std::path::PathBuf;

use crate::adapters::DeployDirectory;
use crate::domain::config::paths::inventory_file_name;
use crate::domain::{AppError, Command};
use crate::ports::PlaybookRunner;

/// What the user asked to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionRequest {
    pub command: Command,
    pub environment: String,
    pub service: Option<String>,
}

/// Artifacts an action runs against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAction {
    pub inventory: PathBuf,
    pub playbook: PathBuf,
}

/// Find the inventory and the most specific playbook for `request`.
pub fn resolve(
    deploy_dir: &DeployDirectory,
    request: &ActionRequest,
) -> Result<ResolvedAction, AppError> {
    let inventory_name = inventory_file_name(&request.environment);
    let inventory = deploy_dir.existing_file(&inventory_name).ok_or_else(|| {
        AppError::InventoryFileNotFound {
            environment: request.environment.clone(),
            path: deploy_dir.path().join(&inventory_name),
        }
    })?;

    let candidates =
        request.command.playbook_candidates(&request.environment, request.service.as_deref());
    let playbook = candidates
        .iter()
        .find_map(|name| deploy_dir.existing_file(name))
        .ok_or_else(|| AppError::PlaybookFileNotFound {
            command: request.command.name().to_string(),
            candidates: candidates.clone(),
            deploy_dir: deploy_dir.path().to_path_buf(),
        })?;

    Ok(ResolvedAction { inventory, playbook })
}

/// Resolve the artifacts, then hand them to the orchestration tool.
pub fn execute<P: PlaybookRunner>(
    deploy_dir: &DeployDirectory,
    runner: &P,
    request: &ActionRequest,
) -> Result<ResolvedAction, AppError> {
    if !request.command.is_playbook_action() {
        return Err(AppError::UnknownCommand(request.command.name().to_string()));
    }

    let resolved = resolve(deploy_dir, request)?;
    runner.run(&resolved.inventory, &resolved.playbook)?;
    Ok(resolved)
}
