use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;

mod cli;
mod commands;
mod context;
mod output;
mod progress;
mod ui;
mod write_lock;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("lpad error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let flags = cli.global_flags();
    ui::init(&flags);

    if let cli::Commands::Init(args) = &cli.command {
        return commands::init::handle(args, &flags);
    }

    let project_root = resolve_project_root(flags.project.as_deref())?;
    let config = lp_config::LaunchpadConfig::load_with_dotenv(Some(&project_root))
        .context("failed to load launchpad configuration")?;

    let command = cli.command;
    let write_lock = if write_lock::requires_write_lock(&command) {
        let data_dir = config.storage.data_path(&project_root);
        Some(write_lock::acquire(&data_dir).await?)
    } else {
        None
    };

    let mut ctx = context::AppContext::init(project_root, config)
        .context("failed to initialize launchpad application context")?;

    let result = match command {
        cli::Commands::Shell => commands::shell::run(&mut ctx, &flags).await,
        command => commands::dispatch::dispatch(command, &mut ctx, &flags).await,
    };
    drop(write_lock);
    result
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("LAUNCHPAD_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

/// `--project` wins; otherwise the nearest ancestor holding `.launchpad`,
/// else the current directory.
fn resolve_project_root(project_override: Option<&str>) -> anyhow::Result<PathBuf> {
    if let Some(path) = project_override {
        let explicit = PathBuf::from(path);

        if explicit
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name == context::PROJECT_MARKER)
        {
            return explicit
                .parent()
                .map(Path::to_path_buf)
                .context("invalid --project path: '.launchpad' directory has no parent");
        }

        if explicit.is_dir() {
            return Ok(explicit);
        }

        anyhow::bail!(
            "invalid --project '{}': directory does not exist",
            explicit.display()
        );
    }

    let start = std::env::current_dir().context("failed to read current directory")?;
    Ok(context::find_project_root(&start).unwrap_or(start))
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::resolve_project_root;

    #[test]
    fn explicit_project_marker_resolves_to_parent() {
        let temp = TempDir::new().expect("tempdir should create");
        let marker = temp.path().join(".launchpad");
        std::fs::create_dir(&marker).expect(".launchpad should create");

        let root = resolve_project_root(marker.to_str()).expect("root should resolve");
        assert_eq!(root, temp.path());
    }

    #[test]
    fn explicit_missing_project_is_rejected() {
        let temp = TempDir::new().expect("tempdir should create");
        let missing = temp.path().join("missing");
        assert!(resolve_project_root(missing.to_str()).is_err());
    }
}
