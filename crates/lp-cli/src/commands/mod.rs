pub mod dispatch;
pub mod export;
pub mod file;
pub mod idea;
pub mod init;
pub mod link;
pub mod note;
pub mod phase;
pub mod roadmap;
pub mod shared;
pub mod shell;
