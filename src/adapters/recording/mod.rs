//! Recording test doubles that log operations instead of performing them.

pub mod fake_file;
pub mod filesystem;

pub use fake_file::FakeFile;
pub use filesystem::RecordingFileSystem;
