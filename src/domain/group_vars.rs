//! Flattening of the `services` section into `group_vars/all`.

use std::path::Path;

use serde_yaml::{Mapping, Value};

use crate::domain::AppError;
use crate::domain::config::document::{SERVICES_SECTION, nested_mapping};
use crate::domain::yaml::{scalar_text, to_block_yaml};

/// Group variables keyed `<service>_<param>`, in service then parameter order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupVars {
    vars: Mapping,
}

impl GroupVars {
    /// Merge every service's parameters into one namespace.
    ///
    /// Fails on the first synthesized key that is already taken.
    pub fn merge(services: &Mapping, source: &Path) -> Result<Self, AppError> {
        let mut vars = Mapping::new();

        for (service, params) in services {
            let service = entry_name(service, SERVICES_SECTION)?;
            let Some(params) = nested_mapping(SERVICES_SECTION, &service, params, source)? else {
                continue;
            };

            for (param, value) in params {
                let param = entry_name(param, &service)?;
                let key = format!("{service}_{param}");

                if vars.contains_key(key.as_str()) {
                    return Err(AppError::improperly_configured(format!(
                        "group variable `{key}` (service `{service}`, parameter `{param}`) is defined more than once"
                    )));
                }

                vars.insert(Value::String(key), value.clone());
            }
        }

        Ok(Self { vars })
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.vars.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.vars.keys().filter_map(Value::as_str)
    }

    /// Render as the `group_vars/all.yml` document.
    pub fn to_yaml(&self) -> Result<String, AppError> {
        if self.vars.is_empty() {
            return Ok("{}\n".to_string());
        }
        to_block_yaml(&self.vars)
    }
}

pub(crate) fn entry_name(key: &Value, context: &str) -> Result<String, AppError> {
    scalar_text(key).ok_or_else(|| {
        AppError::config_error(format!("Keys under `{context}` must be strings, found {key:?}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn merge(yaml: &str) -> Result<GroupVars, AppError> {
        let services: Mapping = serde_yaml::from_str(yaml).unwrap();
        GroupVars::merge(&services, Path::new("deploy.yml"))
    }

    #[test]
    fn keys_are_prefixed_with_the_service_name() {
        let vars = merge("web:\n  port: 80\n  image: nginx\n").unwrap();

        assert_eq!(vars.get("web_port"), Some(&Value::from(80)));
        assert_eq!(vars.get("web_image"), Some(&Value::from("nginx")));
    }

    #[test]
    fn shared_parameter_names_stay_distinct_per_service() {
        let vars = merge("web:\n  port: 80\napi:\n  port: 8080\n").unwrap();

        assert_eq!(vars.keys().collect::<Vec<_>>(), vec!["web_port", "api_port"]);
    }

    #[test]
    fn document_order_is_preserved() {
        let vars = merge("zeta:\n  b: 1\n  a: 2\nalpha:\n  z: 3\n").unwrap();

        assert_eq!(vars.keys().collect::<Vec<_>>(), vec!["zeta_b", "zeta_a", "alpha_z"]);
    }

    #[test]
    fn concatenation_collision_is_improperly_configured() {
        let err = merge("a_b:\n  c: 1\na:\n  b_c: 2\n").unwrap_err();

        match err {
            AppError::ImproperlyConfigured(message) => assert!(message.contains("a_b_c")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn service_without_parameters_contributes_nothing() {
        let vars = merge("web:\napi:\n  port: 1\n").unwrap();

        assert_eq!(vars.len(), 1);
    }

    #[test]
    fn service_that_is_not_a_mapping_is_rejected() {
        let err = merge("web: [80]\n").unwrap_err();

        assert!(matches!(err, AppError::ConfigSectionType { .. }));
    }

    #[test]
    fn string_restart_policy_is_quoted() {
        let vars = merge("web:\n  restart: \"no\"\n  tty: false\n").unwrap();

        assert_eq!(vars.to_yaml().unwrap(), "web_restart: 'no'\nweb_tty: false\n");
    }

    #[test]
    fn renders_yaml_in_insertion_order() {
        let vars = merge("web:\n  port: 80\n  hosts: [a, b]\n").unwrap();

        assert_eq!(vars.to_yaml().unwrap(), "web_port: 80\nweb_hosts:\n  - a\n  - b\n");
    }

    #[test]
    fn empty_vars_render_as_empty_mapping() {
        let vars = merge("{}").unwrap();

        assert!(vars.is_empty());
        assert_eq!(vars.to_yaml().unwrap(), "{}\n");
    }
}
