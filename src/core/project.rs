use crate::core::selector::ElementSelector;
use crate::core::stripper::strip_first_match;
use crate::utils::error::{FixError, Result};
use std::fs;
use std::path::Path;

/// What one pass over a project file removed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FixReport {
    pub removed_import: bool,
    pub removed_target: bool,
}

impl FixReport {
    pub fn changed(&self) -> bool {
        self.removed_import || self.removed_target
    }
}

/// Applies both legacy selectors to the document text. Pure, so tests can run
/// it without touching the filesystem.
pub fn fix_project_source(xml: &str) -> Result<(String, FixReport)> {
    let [import, target] = ElementSelector::legacy_selectors();

    let outcome = strip_first_match(xml, &import)?;
    let removed_import = outcome.removed;
    let outcome = strip_first_match(&outcome.xml, &target)?;

    let report = FixReport {
        removed_import,
        removed_target: outcome.removed,
    };
    Ok((outcome.xml, report))
}

/// Load -> strip -> save for a single project file. The file is rewritten even
/// when nothing matched; only `dry_run` suppresses the write.
pub fn fix_project_file(path: &Path, dry_run: bool) -> Result<FixReport> {
    let original = fs::read_to_string(path)?;

    let (fixed, report) = fix_project_source(&original).map_err(|e| match e {
        FixError::XmlError(source) => FixError::ParseError {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    })?;

    if report.removed_import {
        tracing::debug!("Removed NuGet.targets import from {}", path.display());
    }
    if report.removed_target {
        tracing::debug!("Removed EnsureNuGetPackageBuildImports target from {}", path.display());
    }

    if dry_run {
        if report.changed() {
            tracing::info!("Would fix {}", path.display());
        }
        return Ok(report);
    }

    fs::write(path, fixed)?;
    Ok(report)
}
