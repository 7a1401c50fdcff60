use lp_core::tracker::ROADMAP;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::output::output;

#[derive(Debug, Serialize)]
struct Milestone {
    position: usize,
    milestone: &'static str,
}

/// Handle `lpad roadmap`.
pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&milestones(), flags.format)
}

fn milestones() -> Vec<Milestone> {
    ROADMAP
        .iter()
        .enumerate()
        .map(|(index, milestone)| Milestone {
            position: index + 1,
            milestone,
        })
        .collect()
}
