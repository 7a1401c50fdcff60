//! The `Record` trait shared by every collection, and `RecordRef` targets.

use std::fmt;
use std::str::FromStr;

use lp_core::entities::{Idea, Link, TestingNote, UploadedFile};
use lp_core::enums::RecordKind;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// A record that can live in a [`RecordManager`](crate::RecordManager).
pub trait Record: Clone + Serialize + DeserializeOwned {
    const KIND: RecordKind;

    fn id(&self) -> &str;

    fn set_id(&mut self, id: String);
}

macro_rules! impl_record {
    ($ty:ty, $kind:expr) => {
        impl Record for $ty {
            const KIND: RecordKind = $kind;

            fn id(&self) -> &str {
                &self.id
            }

            fn set_id(&mut self, id: String) {
                self.id = id;
            }
        }
    };
}

impl_record!(Idea, RecordKind::Idea);
impl_record!(Link, RecordKind::Link);
impl_record!(UploadedFile, RecordKind::UploadedFile);
impl_record!(TestingNote, RecordKind::TestingNote);

/// How a user points at a record: a 1-based position in the current listing
/// or a stable record id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordRef {
    Position(i64),
    Id(String),
}

impl FromStr for RecordRef {
    type Err = std::convert::Infallible;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let raw = raw.trim();
        Ok(raw
            .parse::<i64>()
            .map_or_else(|_| Self::Id(raw.to_string()), Self::Position))
    }
}

impl fmt::Display for RecordRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Position(position) => write!(f, "#{position}"),
            Self::Id(id) => f.write_str(id),
        }
    }
}
