use clap::Subcommand;

/// Phase checklist commands. Completion lasts for the current session.
#[derive(Clone, Debug, Subcommand)]
pub enum PhaseCommands {
    /// List phases with their completion state.
    List,
    /// Mark a phase (1-based) as completed.
    Check { position: usize },
    /// Clear a phase's completed mark.
    Uncheck { position: usize },
}
