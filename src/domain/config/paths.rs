//! File names inside the working directory and the deploy directory.

/// Configuration document looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "deploy.yml";

/// Deploy directory relative to the working directory.
pub const DEFAULT_DEPLOY_DIR: &str = "deploy";

/// Directory holding the generated group variables.
pub const GROUP_VARS_DIR: &str = "group_vars";

/// `inventory-<environment>.ini`
pub fn inventory_file_name(environment: &str) -> String {
    format!("inventory-{environment}.ini")
}

/// `<service>-<template>`
pub fn playbook_file_name(service: &str, template: &str) -> String {
    format!("{service}-{template}")
}

/// `group_vars/all.<ext>`
pub fn group_vars_file_name(extension: &str) -> String {
    format!("all.{extension}")
}
