use crate::utils::error::{FixError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// On-disk artifacts of the old restore workflow, matched by exact filename.
pub const LEGACY_FILE_NAMES: [&str; 2] = ["NuGet.exe", "NuGet.targets"];

/// Deletes every regular file under `root` whose name is one of
/// [`LEGACY_FILE_NAMES`]. Returns the paths that were (or, in dry-run mode,
/// would be) deleted. Deletion is final; there is no backup.
pub fn sweep_legacy_files(root: &Path, dry_run: bool) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(FixError::DirectoryNotFound {
            path: root.to_path_buf(),
        });
    }

    let mut deleted = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let is_legacy = entry
            .file_name()
            .to_str()
            .is_some_and(|name| LEGACY_FILE_NAMES.contains(&name));
        if !is_legacy {
            continue;
        }

        if dry_run {
            tracing::info!("Would delete {}", entry.path().display());
        } else {
            fs::remove_file(entry.path())?;
            tracing::info!("Deleted {}", entry.path().display());
        }
        deleted.push(entry.path().to_path_buf());
    }

    Ok(deleted)
}
