//! Cross-process write lock for a project's data directory.
//!
//! Each mutating command holds the lock from loading the collections until
//! its final save. `lpad shell` takes it per line, so a long session does not
//! block other `lpad` writes between commands.

use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant, SystemTime};

use anyhow::Context;

use crate::cli::Commands;
use crate::cli::subcommands::{FileCommands, IdeaCommands, LinkCommands};

const LOCK_FILE: &str = "launchpad.write.lock";
const LOCK_WAIT_TIMEOUT: Duration = Duration::from_secs(30);
const LOCK_RETRY_DELAY: Duration = Duration::from_millis(200);
/// No single command runs this long; an older lock was left by a crash.
const LOCK_STALE_AFTER: Duration = Duration::from_secs(120);

/// Held while a command mutates the project; the lock file goes with it.
#[derive(Debug)]
pub struct WriteLock {
    path: PathBuf,
}

impl Drop for WriteLock {
    fn drop(&mut self) {
        if let Err(error) = fs::remove_file(&self.path) {
            tracing::warn!(%error, path = %self.path.display(), "could not release write lock");
        }
    }
}

/// Whether `command` writes to the project's persisted collections.
pub fn requires_write_lock(command: &Commands) -> bool {
    match command {
        Commands::Idea { action } => !matches!(
            action,
            IdeaCommands::List { .. } | IdeaCommands::Get { .. }
        ),
        Commands::Link { action } => !matches!(
            action,
            LinkCommands::List { .. } | LinkCommands::Get { .. } | LinkCommands::Summarize { .. }
        ),
        Commands::File { action } => !matches!(action, FileCommands::List { .. }),
        Commands::Export(_) => true,
        Commands::Note { .. }
        | Commands::Init(_)
        | Commands::Phase { .. }
        | Commands::Roadmap
        | Commands::Shell => false,
    }
}

/// Take the write lock in `data_dir`, waiting up to
/// [`LOCK_WAIT_TIMEOUT`] for another `lpad` to finish.
///
/// # Errors
///
/// Fails if the lock is still held after the timeout or the lock file
/// cannot be created.
pub async fn acquire(data_dir: &Path) -> anyhow::Result<WriteLock> {
    fs::create_dir_all(data_dir)
        .with_context(|| format!("failed to create {}", data_dir.display()))?;
    let path = data_dir.join(LOCK_FILE);
    let started = Instant::now();

    loop {
        match create_lock_file(&path) {
            Ok(mut file) => {
                // The holder's pid is only a hint for whoever finds the file.
                let _ = writeln!(file, "{}", std::process::id());
                return Ok(WriteLock { path });
            }
            Err(error) if error.kind() == ErrorKind::AlreadyExists => {
                if is_stale(&path) {
                    tracing::warn!(path = %path.display(), "removing abandoned write lock");
                    let _ = fs::remove_file(&path);
                    continue;
                }
                if started.elapsed() >= LOCK_WAIT_TIMEOUT {
                    anyhow::bail!(
                        "another lpad command is writing to {}; try again when it finishes",
                        data_dir.display()
                    );
                }
                tracing::debug!(path = %path.display(), "waiting for write lock");
                tokio::time::sleep(LOCK_RETRY_DELAY).await;
            }
            Err(error) => {
                return Err(error)
                    .with_context(|| format!("failed to create {}", path.display()));
            }
        }
    }
}

fn create_lock_file(path: &Path) -> std::io::Result<File> {
    OpenOptions::new().write(true).create_new(true).open(path)
}

fn is_stale(path: &Path) -> bool {
    fs::metadata(path)
        .and_then(|meta| meta.modified())
        .ok()
        .and_then(|modified| SystemTime::now().duration_since(modified).ok())
        .is_some_and(|age| age >= LOCK_STALE_AFTER)
}
