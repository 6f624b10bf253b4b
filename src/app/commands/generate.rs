//! Generate command - rebuilds the deploy directory from `deploy.yml`.

use std::path::{Path, PathBuf};

use crate::app::AppContext;
use crate::domain::config::paths::{GROUP_VARS_DIR, group_vars_file_name};
use crate::domain::{AppError, Configuration, GroupVars, Provider, build_inventories, playbook_jobs};
use crate::ports::{ServiceTemplateSource, SkeletonSource, TemplateRenderer};

/// Files written by one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOutcome {
    pub deploy_dir: PathBuf,
    pub group_vars: PathBuf,
    pub inventories: Vec<PathBuf>,
    pub playbooks: Vec<PathBuf>,
}

/// Execute the generate command.
///
/// Order: validate sections, discover templates, reset the deploy
/// directory, then write group variables, inventories and playbooks.
/// A failure after the reset leaves the directory partially populated.
pub fn execute<K, T, R>(
    ctx: &AppContext<K, T, R>,
    config: &Configuration,
    provider: Provider,
) -> Result<GenerateOutcome, AppError>
where
    K: SkeletonSource,
    T: ServiceTemplateSource,
    R: TemplateRenderer,
{
    config.validate()?;
    let templates = ctx.templates().service_templates()?;
    tracing::debug!(count = templates.len(), "discovered service templates");

    let deploy_dir = ctx.deploy_dir();
    tracing::info!(path = %deploy_dir.path().display(), "resetting deploy directory");
    deploy_dir.reset(ctx.skeleton())?;

    let group_vars = GroupVars::merge(config.services()?, config.source())?;
    let group_vars_path = deploy_dir.write(
        Path::new(GROUP_VARS_DIR).join(group_vars_file_name(provider.group_vars_extension())),
        &group_vars.to_yaml()?,
    )?;
    tracing::info!(vars = group_vars.len(), "wrote group variables");

    let mut inventories = Vec::new();
    for inventory in build_inventories(config.environments()?, config.groups()?, config.source())? {
        let path = deploy_dir.write(inventory.file_name(), &inventory.to_ini())?;
        tracing::info!(environment = %inventory.environment, "wrote inventory");
        inventories.push(path);
    }

    let mut playbooks = Vec::new();
    for job in playbook_jobs(config.services()?, &templates, config.source())? {
        let rendered = ctx.renderer().render(job.template, &job.context)?;
        let path = deploy_dir.write(job.file_name(), &rendered)?;
        tracing::debug!(service = %job.service, template = %job.template.name, "rendered playbook");
        playbooks.push(path);
    }
    tracing::info!(count = playbooks.len(), "rendered service playbooks");

    Ok(GenerateOutcome {
        deploy_dir: deploy_dir.path().to_path_buf(),
        group_vars: group_vars_path,
        inventories,
        playbooks,
    })
}
