use std::path::Path;

use crate::domain::AppError;

/// Port for the provider's static deploy-directory skeleton.
pub trait SkeletonSource {
    /// Copy the skeleton tree into `destination`, which does not exist yet.
    fn copy_into(&self, destination: &Path) -> Result<(), AppError>;

    /// Where the skeleton comes from, for log output.
    fn describe(&self) -> String;
}
