//! Filesystem abstraction with swappable backends and test doubles.
//!
//! The [`ports::FileSystem`] trait describes file and filesystem
//! operations. [`adapters::live::OsFileSystem`] forwards every call
//! unchanged to the operating system, while
//! [`adapters::recording::RecordingFileSystem`] logs each operation into an
//! ordered action log and serves in-memory [`adapters::recording::FakeFile`]
//! handles, and [`adapters::failing::FailingFileSystem`] additionally
//! simulates missing-file errors. A small user-lookup surface in [`api`]
//! follows the same port/adapter split.
//!
//! ```
//! use std::path::Path;
//! use scrim::adapters::recording::RecordingFileSystem;
//! use scrim::ports::FileSystem;
//!
//! let fs = RecordingFileSystem::new();
//! fs.create(Path::new("/tmp/file.txt")).unwrap();
//! assert!(fs.has_action("create /tmp/file.txt"));
//! assert!(!fs.has_action("create /tmp/other.txt"));
//! ```

pub mod adapters;
pub mod api;
pub mod ports;
