use std::path::{Path, PathBuf};

use anyhow::Context;
use lp_store::export::{IDEA_EXPORT_FIELDS, LINK_EXPORT_FIELDS, export_csv};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{ExportArgs, ExportTarget};
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ExportReport {
    kind: &'static str,
    path: String,
    rows: usize,
}

/// Handle `lpad export`.
pub fn handle(args: &ExportArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let (ideas_path, links_path) = export_paths(ctx, args.target, args.out.as_deref());

    let mut reports = Vec::new();
    if let Some(path) = ideas_path {
        let rows = export_csv(ctx.ideas.records(), IDEA_EXPORT_FIELDS, &path)
            .with_context(|| format!("failed to export ideas to {}", path.display()))?;
        reports.push(ExportReport {
            kind: "ideas",
            path: path.display().to_string(),
            rows,
        });
    }
    if let Some(path) = links_path {
        let rows = export_csv(ctx.links.records(), LINK_EXPORT_FIELDS, &path)
            .with_context(|| format!("failed to export links to {}", path.display()))?;
        reports.push(ExportReport {
            kind: "links",
            path: path.display().to_string(),
            rows,
        });
    }
    output(&reports, flags.format)
}

/// `--out` names the file for a single export and the directory for `all`.
fn export_paths(
    ctx: &AppContext,
    target: ExportTarget,
    out: Option<&Path>,
) -> (Option<PathBuf>, Option<PathBuf>) {
    let storage = &ctx.config.storage;
    let root = &ctx.project_root;
    let ideas_default = || storage.ideas_export_path(root);
    let links_default = || storage.links_export_path(root);

    match (target, out) {
        (ExportTarget::Ideas, Some(out)) => (Some(out.to_path_buf()), None),
        (ExportTarget::Ideas, None) => (Some(ideas_default()), None),
        (ExportTarget::Links, Some(out)) => (None, Some(out.to_path_buf())),
        (ExportTarget::Links, None) => (None, Some(links_default())),
        (ExportTarget::All, Some(dir)) => (
            Some(dir.join(&storage.ideas_export)),
            Some(dir.join(&storage.links_export)),
        ),
        (ExportTarget::All, None) => (Some(ideas_default()), Some(links_default())),
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use lp_config::LaunchpadConfig;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::export_paths;
    use crate::cli::root_commands::ExportTarget;
    use crate::context::AppContext;

    fn ctx(temp: &TempDir) -> AppContext {
        AppContext::init(temp.path().to_path_buf(), LaunchpadConfig::default())
            .expect("context should init")
    }

    #[test]
    fn defaults_live_in_the_data_dir() {
        let temp = TempDir::new().unwrap();
        let ctx = ctx(&temp);
        let (ideas, links) = export_paths(&ctx, ExportTarget::All, None);
        assert_eq!(ideas, Some(temp.path().join(".launchpad/ideas_export.csv")));
        assert_eq!(links, Some(temp.path().join(".launchpad/links_export.csv")));
    }

    #[test]
    fn out_is_a_file_for_single_exports() {
        let temp = TempDir::new().unwrap();
        let ctx = ctx(&temp);
        let (ideas, links) = export_paths(&ctx, ExportTarget::Ideas, Some(Path::new("out.csv")));
        assert_eq!(ideas.as_deref(), Some(Path::new("out.csv")));
        assert_eq!(links, None);
    }

    #[test]
    fn out_is_a_directory_for_all() {
        let temp = TempDir::new().unwrap();
        let ctx = ctx(&temp);
        let (ideas, links) = export_paths(&ctx, ExportTarget::All, Some(Path::new("exports")));
        assert_eq!(ideas.as_deref(), Some(Path::new("exports/ideas_export.csv")));
        assert_eq!(links.as_deref(), Some(Path::new("exports/links_export.csv")));
    }
}
