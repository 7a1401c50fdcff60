use std::path::{Path, PathBuf};

use anyhow::Context;
use lp_config::LaunchpadConfig;
use lp_core::tracker::PhaseChecklist;
use lp_store::{IdeaManager, LinkManager, TestingNoteLog, UploadManager};
use lp_summarize::Summarizer;

/// Shared application state for one `lpad` invocation (or one `lpad shell`
/// session).
pub struct AppContext {
    pub ideas: IdeaManager,
    pub links: LinkManager,
    pub uploads: UploadManager,
    pub notes: TestingNoteLog,
    pub phases: PhaseChecklist,
    pub summarizer: Summarizer,
    pub config: LaunchpadConfig,
    pub project_root: PathBuf,
}

impl AppContext {
    /// Open every collection under the configured data directory.
    pub fn init(project_root: PathBuf, config: LaunchpadConfig) -> anyhow::Result<Self> {
        let (ideas, links, uploads) = open_collections(&project_root, &config)?;
        let summarizer = Summarizer::new(config.summarizer.clone())
            .context("failed to build the link summarizer")?;

        tracing::debug!(
            project_root = %project_root.display(),
            ideas = ideas.len(),
            links = links.len(),
            uploads = uploads.len(),
            "application context ready"
        );

        Ok(Self {
            ideas,
            links,
            uploads,
            notes: TestingNoteLog::session_only(),
            phases: PhaseChecklist::new(),
            summarizer,
            config,
            project_root,
        })
    }

    /// Re-read the persisted collections, keeping session state.
    ///
    /// The shell calls this before each line so it sees writes made by
    /// other `lpad` processes since the previous line.
    pub fn reload_collections(&mut self) -> anyhow::Result<()> {
        let (ideas, links, uploads) = open_collections(&self.project_root, &self.config)?;
        self.ideas = ideas;
        self.links = links;
        self.uploads = uploads;
        Ok(())
    }
}

fn open_collections(
    project_root: &Path,
    config: &LaunchpadConfig,
) -> anyhow::Result<(IdeaManager, LinkManager, UploadManager)> {
    let storage = &config.storage;

    let ideas =
        IdeaManager::open(storage.ideas_path(project_root)).context("failed to open ideas")?;
    let links =
        LinkManager::open(storage.links_path(project_root)).context("failed to open links")?;
    let uploads = UploadManager::open(
        storage.uploads_metadata_path(project_root),
        storage.uploads_dir_path(project_root),
    )
    .context("failed to open uploaded files")?;
    Ok((ideas, links, uploads))
}
