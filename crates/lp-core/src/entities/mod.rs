//! Record structs for all Launchpad collections.
//!
//! Every persisted collection is a JSON array of these flat objects. All
//! structs derive `Serialize` and `Deserialize`; `Idea` additionally accepts
//! the legacy `{ text, timestamp }` shape on read.

mod idea;
mod link;
mod testing_note;
mod uploaded_file;

pub use idea::Idea;
pub use link::Link;
pub use testing_note::TestingNote;
pub use uploaded_file::UploadedFile;
