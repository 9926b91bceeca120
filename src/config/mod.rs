use crate::utils::error::Result;
use crate::utils::validation::{validate_file_extension, validate_path, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "nuget-restore-fix")]
#[command(about = "Migrates a solution from NuGet.exe-based package restore to automatic restore")]
pub struct CliConfig {
    /// Root of the directory tree to migrate
    #[arg(long, default_value = ".")]
    pub root: String,

    /// Fix a single project file instead of walking the root directory
    #[arg(long)]
    pub project: Option<String>,

    #[arg(long, help = "List intended changes without writing anything")]
    pub dry_run: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("root", &self.root)?;

        if let Some(project) = &self.project {
            validate_path("project", project)?;
            validate_file_extension("project", project, "csproj")?;
        }

        Ok(())
    }
}
