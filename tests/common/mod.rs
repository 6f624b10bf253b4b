//! Shared testing utilities for deploy CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const SERVICE_TEMPLATES_DIR: &str = "assets/templates/ansible/playbooks/service";

/// Testing harness providing an isolated working directory for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        Self { root, work_dir }
    }

    /// Path to the working directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `deploy` binary within the work directory.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("deploy").expect("Failed to locate deploy binary");
        cmd.current_dir(self.work_dir()).env_remove("RUST_LOG");
        cmd
    }

    /// Path to the default deploy directory.
    pub fn deploy_path(&self) -> PathBuf {
        self.work_dir.join("deploy")
    }

    /// Write `deploy.yml` in the work directory.
    pub fn write_config(&self, content: &str) {
        self.write_file("deploy.yml", content);
    }

    /// Write a file relative to the work directory, creating parents.
    pub fn write_file(&self, relative: &str, content: &str) {
        let path = self.work_dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(path, content).expect("Failed to write test file");
    }

    /// Read a file from the deploy directory.
    pub fn read_deploy_file(&self, name: &str) -> String {
        let path = self.deploy_path().join(name);
        fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e))
    }

    /// Create provider assets under `assets/` with the given service templates.
    pub fn write_provider_assets(&self, templates: &[(&str, &str)]) {
        self.write_file("assets/static/ansible/ansible.cfg", "[defaults]\n");
        fs::create_dir_all(self.work_dir.join(SERVICE_TEMPLATES_DIR))
            .expect("Failed to create service templates directory");
        for (name, content) in templates {
            self.write_file(&format!("{SERVICE_TEMPLATES_DIR}/{name}"), content);
        }
    }

    /// Install a stand-in for `ansible-playbook` that echoes its arguments.
    ///
    /// Returns the absolute path to use as `playbook_command`.
    #[cfg(unix)]
    pub fn install_fake_tool(&self, exit_code: i32) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = self.root.path().join("fake-ansible-playbook");
        fs::write(&path, format!("#!/bin/sh\necho \"fake-ansible $*\"\nexit {exit_code}\n"))
            .expect("Failed to write fake tool");
        let mut perms = fs::metadata(&path).expect("Failed to stat fake tool").permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&path, perms).expect("Failed to chmod fake tool");
        path
    }
}
