//! Per-environment inventories built from `environments` and `groups`.

use std::collections::HashSet;
use std::path::Path;

use serde_yaml::{Mapping, Value};

use crate::domain::AppError;
use crate::domain::config::document::{ENVIRONMENTS_SECTION, nested_mapping};
use crate::domain::config::paths::inventory_file_name;
use crate::domain::group_vars::entry_name;
use crate::domain::yaml::scalar_text;

const CHILDREN_SUFFIX: &str = ":children";

/// One line of an inventory section: a host or child group, optionally valued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryEntry {
    pub name: String,
    pub value: Option<String>,
}

/// One `[section]` of an inventory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryGroup {
    pub name: String,
    pub entries: Vec<InventoryEntry>,
}

impl InventoryGroup {
    fn new(name: String) -> Self {
        Self { name, entries: Vec::new() }
    }

    /// Add an entry; a repeated name keeps its position and takes the new value.
    fn push(&mut self, entry: InventoryEntry) {
        match self.entries.iter_mut().find(|e| e.name == entry.name) {
            Some(existing) => existing.value = entry.value,
            None => self.entries.push(entry),
        }
    }
}

/// Inventory document for a single environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inventory {
    pub environment: String,
    pub groups: Vec<InventoryGroup>,
}

impl Inventory {
    /// `inventory-<environment>.ini`
    pub fn file_name(&self) -> String {
        inventory_file_name(&self.environment)
    }

    pub fn group(&self, name: &str) -> Option<&InventoryGroup> {
        self.groups.iter().find(|g| g.name == name)
    }

    /// INI rendering: one section per group, bare keys for unvalued entries,
    /// and a blank line after every section. Multi-line values continue on
    /// tab-indented lines.
    pub fn to_ini(&self) -> String {
        let mut out = String::new();
        for group in &self.groups {
            out.push_str(&format!("[{}]\n", group.name));
            for entry in &group.entries {
                let line = match &entry.value {
                    Some(value) => format!("{} = {}\n", entry.name, value.replace('\n', "\n\t")),
                    None => format!("{}\n", entry.name),
                };
                out.push_str(&line);
            }
            out.push('\n');
        }
        out
    }
}

/// Builds one inventory per environment, registering group names as it goes.
struct InventoryBuilder {
    inventory: Inventory,
    registered: HashSet<String>,
}

impl InventoryBuilder {
    fn new(environment: String) -> Self {
        Self {
            inventory: Inventory { environment, groups: Vec::new() },
            registered: HashSet::new(),
        }
    }

    fn register(&mut self, name: String, items: &Value) -> Result<(), AppError> {
        ensure_single_line("group", &name)?;
        if !self.registered.insert(name.clone()) {
            return Err(AppError::improperly_configured(format!(
                "inventory group `{}` is defined more than once in environment `{}`",
                name, self.inventory.environment
            )));
        }

        let mut group = InventoryGroup::new(name);
        for entry in group_entries(&group.name, items)? {
            group.push(entry);
        }
        self.inventory.groups.push(group);
        Ok(())
    }
}

/// Build the inventory of every environment, in document order.
///
/// Each environment gets its own host groups followed by a `<group>:children`
/// section for every entry of `groups`.
pub fn build_inventories(
    environments: &Mapping,
    groups: &Mapping,
    source: &Path,
) -> Result<Vec<Inventory>, AppError> {
    let mut common = Vec::with_capacity(groups.len());
    for (group, children) in groups {
        let group = entry_name(group, "groups")?;
        common.push((format!("{group}{CHILDREN_SUFFIX}"), children));
    }

    let mut inventories = Vec::with_capacity(environments.len());
    for (environment, host_groups) in environments {
        let environment = entry_name(environment, ENVIRONMENTS_SECTION)?;
        let host_groups = nested_mapping(ENVIRONMENTS_SECTION, &environment, host_groups, source)?;

        let mut builder = InventoryBuilder::new(environment.clone());
        for (group, items) in host_groups.into_iter().flatten() {
            builder.register(entry_name(group, &environment)?, items)?;
        }
        for (group, children) in &common {
            builder.register(group.clone(), children)?;
        }

        inventories.push(builder.inventory);
    }

    Ok(inventories)
}

fn group_entries(group: &str, items: &Value) -> Result<Vec<InventoryEntry>, AppError> {
    match items {
        Value::Null => Ok(Vec::new()),
        Value::Sequence(seq) => seq.iter().map(|item| sequence_entry(group, item)).collect(),
        Value::Mapping(map) => map.iter().map(|(name, value)| valued_entry(group, name, value)).collect(),
        other => Err(invalid_entry(group, other)),
    }
}

fn sequence_entry(group: &str, item: &Value) -> Result<InventoryEntry, AppError> {
    match item {
        Value::Mapping(map) if map.len() == 1 => {
            let (name, value) = map.iter().next().ok_or_else(|| invalid_entry(group, item))?;
            valued_entry(group, name, value)
        }
        _ => {
            let name = scalar_text(item).ok_or_else(|| invalid_entry(group, item))?;
            ensure_single_line("host", &name)?;
            Ok(InventoryEntry { name, value: None })
        }
    }
}

fn valued_entry(group: &str, name: &Value, value: &Value) -> Result<InventoryEntry, AppError> {
    let name = scalar_text(name).ok_or_else(|| invalid_entry(group, name))?;
    ensure_single_line("host", &name)?;
    let value = match value {
        Value::Null => None,
        other => Some(scalar_text(other).ok_or_else(|| invalid_entry(group, other))?),
    };
    Ok(InventoryEntry { name, value })
}

/// Section headers and keys must fit on one INI line.
fn ensure_single_line(kind: &str, name: &str) -> Result<(), AppError> {
    if name.contains(['\n', '\r']) {
        return Err(AppError::config_error(format!(
            "Inventory {kind} name {name:?} must not contain line breaks"
        )));
    }
    Ok(())
}

fn invalid_entry(group: &str, value: &Value) -> AppError {
    AppError::config_error(format!(
        "Inventory group `{group}` must list host names or `host: value` pairs, found {value:?}"
    ))
}
