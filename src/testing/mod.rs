mod fake_playbook_runner;
mod static_assets;

pub use fake_playbook_runner::FakePlaybookRunner;
pub use static_assets::{StaticSkeleton, StaticTemplateSource};
