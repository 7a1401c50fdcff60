//! Update builder types for record edits.
//!
//! Each builder produces an update struct with `Option` fields. Only `Some`
//! fields overwrite the stored record; the rest keep their values.

pub mod idea;
pub mod link;
