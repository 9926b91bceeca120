pub mod engine;
pub mod project;
pub mod selector;
pub mod stripper;
pub mod sweep;

pub use crate::utils::error::Result;
pub use engine::{FixEngine, RunSummary};
pub use project::{fix_project_file, fix_project_source, FixReport};
pub use selector::ElementSelector;
pub use stripper::{strip_first_match, StripOutcome};
pub use sweep::sweep_legacy_files;
