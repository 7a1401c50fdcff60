//! Per-kind create/update rules on top of [`RecordManager`](crate::RecordManager).

mod idea;
mod link;
mod testing_note;
mod upload;

pub use idea::IdeaManager;
pub use link::LinkManager;
pub use testing_note::TestingNoteLog;
pub use upload::UploadManager;
