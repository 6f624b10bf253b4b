//! Filesystem adapters: user-provided asset directories and the deploy directory.

mod deploy_directory;

pub use deploy_directory::DeployDirectory;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::domain::{AppError, Provider, ServiceTemplate};
use crate::ports::{ServiceTemplateSource, SkeletonSource};

/// Skeleton read from `<static_dir>/<provider>/`.
#[derive(Debug, Clone)]
pub struct DirectorySkeleton {
    root: PathBuf,
}

impl DirectorySkeleton {
    pub fn new(static_dir: &Path, provider: Provider) -> Self {
        Self { root: static_dir.join(provider.name()) }
    }
}

impl SkeletonSource for DirectorySkeleton {
    fn copy_into(&self, destination: &Path) -> Result<(), AppError> {
        if !self.root.is_dir() {
            return Err(AppError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                format!("Static skeleton directory not found: {}", self.root.display()),
            )));
        }

        for entry in WalkDir::new(&self.root).follow_links(true).sort_by_file_name() {
            let entry = entry.map_err(io::Error::from)?;
            let relative = entry.path().strip_prefix(&self.root).unwrap_or(entry.path());
            let target = destination.join(relative);

            if entry.file_type().is_dir() {
                fs::create_dir_all(&target)?;
            } else {
                fs::copy(entry.path(), &target)?;
            }
        }
        Ok(())
    }

    fn describe(&self) -> String {
        self.root.display().to_string()
    }
}

/// Service templates read from `<templates_dir>/<provider>/playbooks/service/`.
#[derive(Debug, Clone)]
pub struct DirectoryTemplateSource {
    dir: PathBuf,
}

impl DirectoryTemplateSource {
    pub fn new(templates_dir: &Path, provider: Provider) -> Self {
        Self { dir: templates_dir.join(provider.name()).join(provider.service_templates_path()) }
    }
}

impl ServiceTemplateSource for DirectoryTemplateSource {
    fn service_templates(&self) -> Result<Vec<ServiceTemplate>, AppError> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(AppError::TemplatesNotFound(self.dir.clone()));
            }
            Err(err) => return Err(err.into()),
        };

        let mut templates = Vec::new();
        for entry in entries {
            let entry = entry?;
            if !entry.path().is_file() {
                continue;
            }
            templates.push(ServiceTemplate {
                name: entry.file_name().to_string_lossy().to_string(),
                source: fs::read_to_string(entry.path())?,
            });
        }

        templates.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(templates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skeleton_copies_nested_tree_verbatim() {
        let temp = tempfile::tempdir().unwrap();
        let provider_root = temp.path().join("static/ansible");
        fs::create_dir_all(provider_root.join("roles/common")).unwrap();
        fs::write(provider_root.join("ansible.cfg"), "[defaults]\n").unwrap();
        fs::write(provider_root.join("roles/common/main.yml"), "- debug: msg=hi\n").unwrap();
        let destination = temp.path().join("deploy");

        DirectorySkeleton::new(&temp.path().join("static"), Provider::Ansible)
            .copy_into(&destination)
            .unwrap();

        assert_eq!(fs::read_to_string(destination.join("ansible.cfg")).unwrap(), "[defaults]\n");
        assert!(destination.join("roles/common/main.yml").is_file());
    }

    #[test]
    fn missing_skeleton_is_an_io_error() {
        let temp = tempfile::tempdir().unwrap();

        let err = DirectorySkeleton::new(temp.path(), Provider::Ansible)
            .copy_into(&temp.path().join("deploy"))
            .unwrap_err();

        assert!(matches!(err, AppError::Io(ref e) if e.kind() == io::ErrorKind::NotFound));
    }

    #[test]
    fn templates_are_regular_files_sorted_by_name() {
        let temp = tempfile::tempdir().unwrap();
        let dir = temp.path().join("ansible/playbooks/service");
        fs::create_dir_all(dir.join("nested")).unwrap();
        fs::write(dir.join("stop.yml"), "stop {{ service }}").unwrap();
        fs::write(dir.join("start.yml"), "start {{ service }}").unwrap();

        let templates =
            DirectoryTemplateSource::new(temp.path(), Provider::Ansible).service_templates().unwrap();

        let names: Vec<_> = templates.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["start.yml", "stop.yml"]);
        assert_eq!(templates[0].source, "start {{ service }}");
    }

    #[test]
    fn missing_template_directory_is_reported() {
        let temp = tempfile::tempdir().unwrap();

        let err =
            DirectoryTemplateSource::new(temp.path(), Provider::Ansible).service_templates().unwrap_err();

        assert!(matches!(err, AppError::TemplatesNotFound(_)));
    }
}
