pub mod config;
pub mod core;
pub mod utils;

pub use config::CliConfig;
pub use core::{ElementSelector, FixEngine, FixReport, RunSummary};
pub use utils::error::{FixError, Result};
