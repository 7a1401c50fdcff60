//! # lp-core
//!
//! Core types, ID generation, and error types for Launchpad.
//!
//! This crate provides the foundational types shared across all Launchpad crates:
//! - Record structs for every tracked collection (ideas, links, uploads, testing notes)
//! - The `RecordKind` enum and ID prefix constants
//! - Fixed-format creation timestamps
//! - Static phase tracker and roadmap content
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod timestamp;
pub mod tracker;
