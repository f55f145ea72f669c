//! Failure-injecting test double for the `FileSystem` port.

use std::fs::Metadata;
use std::io;
use std::path::Path;

use crate::adapters::recording::RecordingFileSystem;
use crate::ports::filesystem::{File, FileSystem, OpenFlags};

fn no_such_entry(name: &Path) -> io::Error {
    io::Error::new(
        io::ErrorKind::NotFound,
        format!("{}: no such file or directory", name.display()),
    )
}

/// Like [`RecordingFileSystem`], except that `open`, `open_file`, and
/// `remove` fail with a "no such file or directory" error.
///
/// The failing operations still record their action first, so tests can
/// assert both that an operation was attempted and that it failed.
#[derive(Debug, Default)]
pub struct FailingFileSystem {
    inner: RecordingFileSystem,
}

impl FailingFileSystem {
    /// Creates a failing filesystem whose surviving files start out empty.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a failing filesystem whose surviving files start out with
    /// the given content.
    #[must_use]
    pub fn with_content(content: impl Into<String>) -> Self {
        Self { inner: RecordingFileSystem::with_content(content) }
    }

    /// Checks if a given action was executed on the filesystem.
    #[must_use]
    pub fn has_action(&self, action: &str) -> bool {
        self.inner.has_action(action)
    }

    /// Returns a snapshot of the action log in invocation order.
    #[must_use]
    pub fn actions(&self) -> Vec<String> {
        self.inner.actions()
    }
}

impl FileSystem for FailingFileSystem {
    fn create(&self, name: &Path) -> io::Result<Box<dyn File>> {
        self.inner.create(name)
    }

    fn mkdir(&self, name: &Path, mode: u32) -> io::Result<()> {
        self.inner.mkdir(name, mode)
    }

    fn mkdir_all(&self, path: &Path, mode: u32) -> io::Result<()> {
        self.inner.mkdir_all(path, mode)
    }

    /// Records the attempt, then simulates a missing file.
    fn open(&self, name: &Path) -> io::Result<Box<dyn File>> {
        let _ = self.inner.open(name);
        Err(no_such_entry(name))
    }

    /// Records the attempt through the recording filesystem, then fails via
    /// [`FailingFileSystem::open`].
    fn open_file(&self, name: &Path, flags: OpenFlags, mode: u32) -> io::Result<Box<dyn File>> {
        let _ = self.inner.open_file(name, flags, mode);
        self.open(name)
    }

    /// Records the attempt, then simulates a missing file.
    fn remove(&self, name: &Path) -> io::Result<()> {
        let _ = self.inner.remove(name);
        Err(no_such_entry(name))
    }

    fn remove_all(&self, path: &Path) -> io::Result<()> {
        self.inner.remove_all(path)
    }

    fn stat(&self, name: &Path) -> io::Result<Option<Metadata>> {
        self.inner.stat(name)
    }
}
