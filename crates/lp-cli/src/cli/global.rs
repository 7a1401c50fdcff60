use clap::ValueEnum;

/// How command results are printed on stdout.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON.
    Json,
    /// Aligned columns, `position` and `id` first; objects print as field/value rows.
    Table,
    /// Compact JSON on one line, for scripts and the shell.
    Raw,
}

/// The parts of the global flags that command handlers read.
///
/// `--verbose` and `--quiet` also pick the log level in `main`, before any
/// handler runs.
#[derive(Clone, Debug)]
pub struct GlobalFlags {
    pub format: OutputFormat,
    /// Overrides `general.default_limit` for list commands.
    pub limit: Option<u32>,
    /// Suppresses the spinner and table colour.
    pub quiet: bool,
    /// Directory given by `--project`, before root resolution.
    pub project: Option<String>,
}
