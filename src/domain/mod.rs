pub mod command;
pub mod config;
pub mod error;
pub mod group_vars;
pub mod inventory;
pub mod playbook;
pub mod yaml;

pub use command::Command;
pub use config::{Configuration, DeploySettings, Provider, Settings};
pub use error::AppError;
pub use group_vars::GroupVars;
pub use inventory::{Inventory, InventoryEntry, InventoryGroup, build_inventories};
pub use playbook::{PlaybookJob, ServiceTemplate, playbook_jobs, service_context};
