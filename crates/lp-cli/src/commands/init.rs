use std::path::{Path, PathBuf};

use anyhow::Context;
use lp_config::LaunchpadConfig;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::InitArgs;
use crate::context::PROJECT_MARKER;
use crate::output::output;

#[derive(Debug, Serialize)]
struct InitReport {
    project_root: String,
    data_dir: String,
    created: bool,
}

/// Handle `lpad init`.
pub fn handle(args: &InitArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let root = match (&args.path, &flags.project) {
        (Some(path), _) => path.clone(),
        (None, Some(project)) => PathBuf::from(project),
        (None, None) => std::env::current_dir().context("failed to read current directory")?,
    };
    let report = init_project(&root)?;
    output(&report, flags.format)
}

fn init_project(root: &Path) -> anyhow::Result<InitReport> {
    let config = LaunchpadConfig::load_with_dotenv(Some(root))
        .context("failed to load launchpad configuration")?;
    let marker = root.join(PROJECT_MARKER);
    let data_dir = config.storage.data_path(root);
    let created = !data_dir.is_dir() || !marker.is_dir();

    for dir in [&marker, &data_dir] {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create {}", dir.display()))?;
    }
    tracing::info!(data_dir = %data_dir.display(), created, "project initialized");

    Ok(InitReport {
        project_root: root.display().to_string(),
        data_dir: data_dir.display().to_string(),
        created,
    })
}
