mod file;
mod idea;
mod link;
mod note;
mod phase;

pub use file::FileCommands;
pub use idea::IdeaCommands;
pub use link::LinkCommands;
pub use note::NoteCommands;
pub use phase::PhaseCommands;
