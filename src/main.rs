use clap::Parser;
use nuget_restore_fix::utils::{logger, validation::Validate};
use nuget_restore_fix::{CliConfig, FixEngine};

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting nuget-restore-fix");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    if config.dry_run {
        tracing::info!("🔍 Dry run: no files will be modified");
    }

    let engine = FixEngine::new(config);
    match engine.run() {
        Ok(summary) => {
            tracing::info!("✅ Migration completed");
            println!(
                "✅ Swept {} legacy file(s), fixed {} project(s), {} unchanged",
                summary.legacy_files_deleted.len(),
                summary.projects_fixed,
                summary.projects_unchanged
            );

            if !summary.is_success() {
                for (path, error) in &summary.failures {
                    eprintln!("❌ {}: {}", path.display(), error);
                }
                eprintln!("❌ {} project file(s) could not be fixed", summary.failures.len());
                std::process::exit(2);
            }
        }
        Err(e) => {
            tracing::error!("❌ Migration failed: {}", e);
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    }
}
