//! Filesystem port for file and filesystem operations.

use std::fs::Metadata;
use std::io::{self, Read, Seek, Write};
use std::path::Path;

/// Flags controlling how [`FileSystem::open_file`] opens its target.
///
/// Live adapters map these onto `std::fs::OpenOptions`; test doubles only
/// record them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OpenFlags {
    /// Open for reading.
    pub read: bool,
    /// Open for writing.
    pub write: bool,
    /// Append writes to the end of the file instead of overwriting.
    pub append: bool,
    /// Create the file if it does not exist.
    pub create: bool,
    /// Truncate the file to zero length on open.
    pub truncate: bool,
}

impl OpenFlags {
    /// Flags for read-only access.
    #[must_use]
    pub fn read_only() -> Self {
        Self { read: true, ..Self::default() }
    }

    /// Flags for read-write access, creating the file when missing.
    #[must_use]
    pub fn read_write() -> Self {
        Self { read: true, write: true, create: true, ..Self::default() }
    }
}

/// An open file handle.
///
/// Extends the standard I/O traits with the handle operations needed to
/// stand in for `std::fs::File` behind the [`FileSystem`] port.
pub trait File: Read + Write + Seek + Send {
    /// Closes the handle.
    ///
    /// Live handles release the descriptor and fail further operations;
    /// in-memory handles rewind their write position.
    ///
    /// # Errors
    ///
    /// Returns an error if the handle cannot be closed.
    fn close(&mut self) -> io::Result<()>;

    /// Reads from an explicit byte offset without consuming the sequential
    /// read position.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying read fails.
    fn read_at(&mut self, buf: &mut [u8], offset: u64) -> io::Result<usize>;

    /// Writes a string to the file, returning the number of bytes written.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying write fails.
    fn write_str(&mut self, s: &str) -> io::Result<usize>;

    /// Returns metadata for the file, or `None` when the backend has none
    /// to offer.
    ///
    /// # Errors
    ///
    /// Returns an error if the metadata cannot be queried.
    fn stat(&self) -> io::Result<Option<Metadata>>;
}

/// Filesystem operations behind a swappable backend.
///
/// Any simulated or real filesystem should implement this trait. Abstracting
/// the filesystem lets tests observe, fake, or fail operations without
/// touching the real disk.
pub trait FileSystem: Send + Sync {
    /// Creates a file, truncating it if it already exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created.
    fn create(&self, name: &Path) -> io::Result<Box<dyn File>>;

    /// Creates a directory with the given unix permission bits.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    fn mkdir(&self, name: &Path, mode: u32) -> io::Result<()>;

    /// Creates a directory path and all parents that do not exist yet.
    ///
    /// # Errors
    ///
    /// Returns an error if any component cannot be created.
    fn mkdir_all(&self, path: &Path, mode: u32) -> io::Result<()>;

    /// Opens a file for reading.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened.
    fn open(&self, name: &Path) -> io::Result<Box<dyn File>>;

    /// Opens a file using the given flags and unix permission bits.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened.
    fn open_file(&self, name: &Path, flags: OpenFlags, mode: u32) -> io::Result<Box<dyn File>>;

    /// Removes the file or empty directory identified by `name`.
    ///
    /// # Errors
    ///
    /// Returns an error if the entry cannot be removed.
    fn remove(&self, name: &Path) -> io::Result<()>;

    /// Removes a path and any children it contains. Does not fail if the
    /// path does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing entry cannot be removed.
    fn remove_all(&self, path: &Path) -> io::Result<()>;

    /// Returns metadata describing the named entry, or `None` when the
    /// backend has none to offer.
    ///
    /// # Errors
    ///
    /// Returns an error if the entry cannot be queried.
    fn stat(&self, name: &Path) -> io::Result<Option<Metadata>>;
}
