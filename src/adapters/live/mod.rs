//! Live adapters backed by the real operating system and network.

pub mod filesystem;
pub mod users;

pub use filesystem::{OsFile, OsFileSystem};
pub use users::HttpUserStore;
