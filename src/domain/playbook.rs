//! Service playbooks: template inputs and per-service render jobs.

use std::path::Path;

use serde_yaml::{Mapping, Value};

use crate::domain::AppError;
use crate::domain::config::document::{SERVICES_SECTION, nested_mapping};
use crate::domain::config::paths::playbook_file_name;
use crate::domain::group_vars::entry_name;

/// Context key bound to the service name during rendering.
pub const SERVICE_KEY: &str = "service";

/// A template from the service-playbook template set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceTemplate {
    /// File name of the template, reused as the output suffix.
    pub name: String,
    pub source: String,
}

/// One playbook to render: a service paired with a template.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybookJob<'a> {
    pub service: String,
    pub template: &'a ServiceTemplate,
    pub context: Mapping,
}

impl PlaybookJob<'_> {
    /// `<service>-<template>`
    pub fn file_name(&self) -> String {
        playbook_file_name(&self.service, &self.template.name)
    }
}

/// Template context for a service: its parameters plus `service: <name>`.
pub fn service_context(service: &str, params: Option<&Mapping>) -> Result<Mapping, AppError> {
    let mut context = params.cloned().unwrap_or_default();

    if context.contains_key(SERVICE_KEY) {
        return Err(AppError::improperly_configured(format!(
            "service `{service}` defines parameter `{SERVICE_KEY}`, which is reserved for the service name"
        )));
    }

    context.insert(Value::from(SERVICE_KEY), Value::from(service));
    Ok(context)
}

/// Every (service, template) pair in service order, then template order.
pub fn playbook_jobs<'a>(
    services: &Mapping,
    templates: &'a [ServiceTemplate],
    source: &Path,
) -> Result<Vec<PlaybookJob<'a>>, AppError> {
    let mut jobs = Vec::with_capacity(services.len() * templates.len());

    for (service, params) in services {
        let service = entry_name(service, SERVICES_SECTION)?;
        let params = nested_mapping(SERVICES_SECTION, &service, params, source)?;
        let context = service_context(&service, params)?;

        for template in templates {
            jobs.push(PlaybookJob { service: service.clone(), template, context: context.clone() });
        }
    }

    Ok(jobs)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use proptest::prelude::*;

    use super::*;

    fn template(name: &str) -> ServiceTemplate {
        ServiceTemplate { name: name.to_string(), source: String::new() }
    }

    #[test]
    fn context_adds_service_name_after_parameters() {
        let params: Mapping = serde_yaml::from_str("port: 80\n").unwrap();

        let context = service_context("web", Some(&params)).unwrap();

        let keys: Vec<_> = context.keys().filter_map(Value::as_str).collect();
        assert_eq!(keys, vec!["port", "service"]);
        assert_eq!(context.get("service"), Some(&Value::from("web")));
    }

    #[test]
    fn service_parameter_named_service_is_rejected() {
        let params: Mapping = serde_yaml::from_str("service: other\n").unwrap();

        let err = service_context("web", Some(&params)).unwrap_err();

        assert!(matches!(err, AppError::ImproperlyConfigured(_)));
    }

    #[test]
    fn jobs_follow_service_then_template_order() {
        let services: Mapping = serde_yaml::from_str("web: {port: 80}\ndb:\n").unwrap();
        let templates = vec![template("start.yml"), template("stop.yml")];

        let jobs = playbook_jobs(&services, &templates, Path::new("deploy.yml")).unwrap();

        let names: Vec<_> = jobs.iter().map(PlaybookJob::file_name).collect();
        assert_eq!(names, vec!["web-start.yml", "web-stop.yml", "db-start.yml", "db-stop.yml"]);
    }

    proptest! {
        #[test]
        fn file_names_are_the_cartesian_product(
            services in prop::collection::btree_set("[a-z]{1,8}", 0..6),
            templates in prop::collection::btree_set("[a-z]{1,8}\\.yml", 0..6),
        ) {
            let mut section = Mapping::new();
            for service in &services {
                section.insert(Value::from(service.as_str()), Value::Null);
            }
            let templates: Vec<_> = templates.iter().map(|name| template(name)).collect();

            let jobs = playbook_jobs(&section, &templates, Path::new("deploy.yml")).unwrap();
            let names: HashSet<_> = jobs.iter().map(PlaybookJob::file_name).collect();

            prop_assert_eq!(jobs.len(), services.len() * templates.len());
            prop_assert_eq!(names.len(), jobs.len());
            for service in &services {
                for template in &templates {
                    let expected = format!("{service}-{}", template.name);
                    prop_assert!(names.contains(&expected));
                }
            }
        }
    }
}
