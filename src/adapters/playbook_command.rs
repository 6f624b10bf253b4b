use std::path::{Path, PathBuf};
use std::process::Command;

use crate::domain::AppError;
use crate::ports::PlaybookRunner;

/// Runs playbooks through an external executable (`ansible-playbook` by default).
///
/// The child inherits stdout/stderr and runs inside the deploy directory.
#[derive(Debug, Clone)]
pub struct PlaybookCommandAdapter {
    program: String,
    working_dir: PathBuf,
}

impl PlaybookCommandAdapter {
    pub fn new(program: impl Into<String>, working_dir: PathBuf) -> Self {
        Self { program: program.into(), working_dir }
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl PlaybookRunner for PlaybookCommandAdapter {
    fn run(&self, inventory: &Path, playbook: &Path) -> Result<(), AppError> {
        let mut command = Command::new(&self.program);
        command.arg("-i").arg(inventory).arg(playbook);
        command.current_dir(&self.working_dir);

        tracing::info!(
            program = %self.program,
            inventory = %inventory.display(),
            playbook = %playbook.display(),
            "running playbook"
        );

        let status = command.status().map_err(|source| AppError::PlaybookLaunch {
            program: self.program.clone(),
            source,
        })?;

        if !status.success() {
            return Err(AppError::PlaybookFailed { program: self.program.clone(), code: status.code() });
        }

        Ok(())
    }
}
