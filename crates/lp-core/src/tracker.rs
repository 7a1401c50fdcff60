//! Static phase tracker and roadmap content.
//!
//! Phase completion is a per-session checklist: it starts empty every
//! session and is never persisted.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::errors::CoreError;

/// Startup phases, in order.
pub const PHASES: [&str; 7] = [
    "Ideation & Learning (0-1 month)",
    "Market Research & Validation (1-2.5 months)",
    "Build MVP (2.5–4 months)",
    "Register Startup (4–5 months)",
    "Join Incubator / Apply Grants (5–7 months)",
    "First Customers & Feedback (6–9 months)",
    "Scale & Fundraise (9–12 months)",
];

/// Roadmap overview, one line per milestone.
pub const ROADMAP: [&str; 7] = [
    "Month 0-1: Learn and Ideate",
    "Month 1-2.5: Market Research",
    "Month 2.5–4: Build MVP",
    "Month 4–5: Register Startup",
    "Month 5–7: Apply for Grants",
    "Month 6–9: Get Customers",
    "Month 9–12: Scale & Raise Funds",
];

/// A phase as shown in the checklist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhaseItem {
    pub position: usize,
    pub phase: &'static str,
    pub completed: bool,
}

/// Session-scoped completion state for [`PHASES`].
#[derive(Debug, Clone, Default)]
pub struct PhaseChecklist {
    completed: BTreeSet<usize>,
}

impl PhaseChecklist {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the phase at 1-based `position` as completed.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` if `position` is not a phase.
    pub fn check(&mut self, position: usize) -> Result<&'static str, CoreError> {
        let phase = phase_at(position)?;
        self.completed.insert(position);
        Ok(phase)
    }

    /// Clear the completed mark at 1-based `position`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` if `position` is not a phase.
    pub fn uncheck(&mut self, position: usize) -> Result<&'static str, CoreError> {
        let phase = phase_at(position)?;
        self.completed.remove(&position);
        Ok(phase)
    }

    #[must_use]
    pub fn items(&self) -> Vec<PhaseItem> {
        PHASES
            .iter()
            .copied()
            .enumerate()
            .map(|(i, phase)| PhaseItem {
                position: i + 1,
                phase,
                completed: self.completed.contains(&(i + 1)),
            })
            .collect()
    }
}

fn phase_at(position: usize) -> Result<&'static str, CoreError> {
    position
        .checked_sub(1)
        .and_then(|index| PHASES.get(index).copied())
        .ok_or_else(|| CoreError::NotFound {
            entity_type: "phase".into(),
            id: position.to_string(),
        })
}
