//! Lifecycle of the deploy directory: wipe, reseed, write artifacts.

use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::domain::AppError;
use crate::ports::SkeletonSource;

/// The output tree regenerated on every `generate`.
#[derive(Debug, Clone)]
pub struct DeployDirectory {
    root: PathBuf,
}

impl DeployDirectory {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn path(&self) -> &Path {
        &self.root
    }

    pub fn exists(&self) -> bool {
        self.root.is_dir()
    }

    /// Remove the directory if present, then copy the skeleton into its place.
    pub fn reset(&self, skeleton: &dyn SkeletonSource) -> Result<(), AppError> {
        if self.root.exists() {
            tracing::debug!(path = %self.root.display(), "removing deploy directory");
            fs::remove_dir_all(&self.root)?;
        }
        if let Some(parent) = self.root.parent() {
            fs::create_dir_all(parent)?;
        }

        tracing::debug!(skeleton = %skeleton.describe(), "seeding deploy directory");
        skeleton.copy_into(&self.root)
    }

    /// Write `content` to `relative`, creating parent directories.
    pub fn write(&self, relative: impl AsRef<Path>, content: &str) -> Result<PathBuf, AppError> {
        let path = self.resolve(relative.as_ref())?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, content)?;
        Ok(path)
    }

    /// Absolute path of a top-level file, if it exists.
    pub fn existing_file(&self, name: &str) -> Option<PathBuf> {
        let path = self.resolve(Path::new(name)).ok()?;
        path.is_file().then_some(path)
    }

    /// Names of the regular files directly inside the directory.
    pub fn file_names(&self) -> Result<Vec<String>, AppError> {
        if !self.exists() {
            return Ok(Vec::new());
        }

        let mut names = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            if entry.path().is_file() {
                names.push(entry.file_name().to_string_lossy().to_string());
            }
        }
        names.sort();
        Ok(names)
    }

    fn resolve(&self, relative: &Path) -> Result<PathBuf, AppError> {
        let escapes = relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
        if escapes || relative.as_os_str().is_empty() {
            return Err(AppError::PathTraversal(relative.display().to_string()));
        }
        Ok(self.root.join(relative))
    }
}
