use std::path::Path;

use crate::domain::AppError;

/// Port for the external orchestration tool.
pub trait PlaybookRunner {
    /// Run `playbook` against `inventory`, blocking until the tool exits.
    fn run(&self, inventory: &Path, playbook: &Path) -> Result<(), AppError>;
}
