use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::PlaybookRunner;

/// Records every run instead of spawning a process.
#[derive(Default)]
pub struct FakePlaybookRunner {
    pub runs: Mutex<Vec<(PathBuf, PathBuf)>>,
    pub exit_code: Option<i32>,
}

impl FakePlaybookRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// A runner whose tool always exits with `code`.
    pub fn failing(code: i32) -> Self {
        Self { runs: Mutex::new(Vec::new()), exit_code: Some(code) }
    }

    pub fn runs(&self) -> Vec<(PathBuf, PathBuf)> {
        self.runs.lock().unwrap().clone()
    }
}

impl PlaybookRunner for FakePlaybookRunner {
    fn run(&self, inventory: &Path, playbook: &Path) -> Result<(), AppError> {
        self.runs.lock().unwrap().push((inventory.to_path_buf(), playbook.to_path_buf()));
        match self.exit_code {
            Some(code) => Err(AppError::PlaybookFailed { program: "fake".to_string(), code: Some(code) }),
            None => Ok(()),
        }
    }
}
