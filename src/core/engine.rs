use crate::config::CliConfig;
use crate::core::project::fix_project_file;
use crate::core::sweep::sweep_legacy_files;
use crate::utils::error::{FixError, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Aggregated outcome of one migration run.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub legacy_files_deleted: Vec<PathBuf>,
    pub projects_fixed: usize,
    pub projects_unchanged: usize,
    pub failures: Vec<(PathBuf, FixError)>,
}

impl RunSummary {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

pub struct FixEngine {
    config: CliConfig,
}

impl FixEngine {
    pub fn new(config: CliConfig) -> Self {
        Self { config }
    }

    /// Sweeps legacy restore files, then fixes every project file under the
    /// root. Each project file is processed independently: a failure is
    /// recorded against its path and the run moves on to the next file.
    pub fn run(&self) -> Result<RunSummary> {
        let mut summary = RunSummary::default();

        if let Some(project) = &self.config.project {
            // Single-file mode skips the sweep and the directory walk.
            self.fix_one(Path::new(project).to_path_buf(), &mut summary);
            return Ok(summary);
        }

        let root = Path::new(&self.config.root);

        tracing::info!("Sweeping legacy NuGet files under {}", root.display());
        summary.legacy_files_deleted = sweep_legacy_files(root, self.config.dry_run)?;
        tracing::info!(
            "Swept {} legacy file(s)",
            summary.legacy_files_deleted.len()
        );

        let projects = find_project_files(root)?;
        tracing::info!("Found {} project file(s)", projects.len());

        for path in projects {
            self.fix_one(path, &mut summary);
        }

        Ok(summary)
    }

    fn fix_one(&self, path: PathBuf, summary: &mut RunSummary) {
        tracing::debug!("Processing {}", path.display());
        match fix_project_file(&path, self.config.dry_run) {
            Ok(report) if report.changed() => {
                tracing::info!("Fixed {}", path.display());
                summary.projects_fixed += 1;
            }
            Ok(_) => {
                tracing::debug!("No legacy elements in {}", path.display());
                summary.projects_unchanged += 1;
            }
            Err(e) => {
                tracing::error!("Failed to fix {}: {}", path.display(), e);
                summary.failures.push((path, e));
            }
        }
    }
}

/// Collects every `*.csproj` file under `root`, in a stable walk order.
pub fn find_project_files(root: &Path) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(FixError::DirectoryNotFound {
            path: root.to_path_buf(),
        });
    }

    let mut projects = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let is_project = entry
            .path()
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csproj"));
        if is_project {
            projects.push(entry.path().to_path_buf());
        }
    }

    Ok(projects)
}
