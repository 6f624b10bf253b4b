use crate::domain::{AppError, ServiceTemplate};

/// Port for discovering the service-playbook template set.
pub trait ServiceTemplateSource {
    /// All service templates, in discovery order.
    fn service_templates(&self) -> Result<Vec<ServiceTemplate>, AppError>;
}
