//! Recording test double for the `FileSystem` port.

use std::collections::HashMap;
use std::fs::Metadata;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use super::fake_file::FakeFile;
use crate::ports::filesystem::{File, FileSystem, OpenFlags};

/// A filesystem that does not execute any action, just records them.
///
/// Every operation appends a description string to an ordered action log
/// and serves file handles from an in-memory cache of [`FakeFile`]s. No
/// operation ever fails.
///
/// ```
/// use std::path::Path;
/// use scrim::adapters::recording::RecordingFileSystem;
/// use scrim::ports::FileSystem;
///
/// let fs = RecordingFileSystem::new();
/// fs.open(Path::new("/tmp/file.txt")).unwrap();
/// assert!(fs.has_action("open /tmp/file.txt"));
/// ```
#[derive(Debug, Default)]
pub struct RecordingFileSystem {
    actions: Mutex<Vec<String>>,
    files: Mutex<HashMap<PathBuf, FakeFile>>,
    file_content: String,
}

impl RecordingFileSystem {
    /// Creates a recording filesystem whose files start out empty.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a recording filesystem whose files start out with the given
    /// content.
    #[must_use]
    pub fn with_content(content: impl Into<String>) -> Self {
        Self { file_content: content.into(), ..Self::default() }
    }

    /// Checks if a given action was executed on the filesystem.
    ///
    /// The lookup is an exact string match against entries of the form
    /// `<verb> <path>` or `<verb> <path> with mode <octal-mode>`, in any
    /// position of the log.
    #[must_use]
    pub fn has_action(&self, action: &str) -> bool {
        self.actions.lock().expect("action log lock poisoned").iter().any(|a| a == action)
    }

    /// Returns a snapshot of the action log in invocation order.
    #[must_use]
    pub fn actions(&self) -> Vec<String> {
        self.actions.lock().expect("action log lock poisoned").clone()
    }

    fn record(&self, action: String) {
        self.actions.lock().expect("action log lock poisoned").push(action);
    }

    /// Returns the cached fake for `name`, creating it on first access.
    /// A cache hit resets only the file's read view.
    fn fake_open(&self, name: &Path) -> FakeFile {
        let mut files = self.files.lock().expect("file map lock poisoned");
        if let Some(file) = files.get(name) {
            file.reset_read_view();
            return file.clone();
        }
        let file = FakeFile::new(self.file_content.clone());
        files.insert(name.to_path_buf(), file.clone());
        file
    }

    fn drop_file(&self, name: &Path) {
        self.files.lock().expect("file map lock poisoned").remove(name);
    }
}

impl FileSystem for RecordingFileSystem {
    fn create(&self, name: &Path) -> io::Result<Box<dyn File>> {
        self.record(format!("create {}", name.display()));
        Ok(Box::new(self.fake_open(name)))
    }

    fn mkdir(&self, name: &Path, mode: u32) -> io::Result<()> {
        self.record(format!("mkdir {} with mode {mode:#o}", name.display()));
        Ok(())
    }

    fn mkdir_all(&self, path: &Path, mode: u32) -> io::Result<()> {
        self.record(format!("mkdirall {} with mode {mode:#o}", path.display()));
        Ok(())
    }

    fn open(&self, name: &Path) -> io::Result<Box<dyn File>> {
        self.record(format!("open {}", name.display()));
        Ok(Box::new(self.fake_open(name)))
    }

    fn open_file(&self, name: &Path, _flags: OpenFlags, mode: u32) -> io::Result<Box<dyn File>> {
        self.record(format!("openfile {} with mode {mode:#o}", name.display()));
        Ok(Box::new(self.fake_open(name)))
    }

    fn remove(&self, name: &Path) -> io::Result<()> {
        self.record(format!("remove {}", name.display()));
        self.drop_file(name);
        Ok(())
    }

    fn remove_all(&self, path: &Path) -> io::Result<()> {
        self.record(format!("removeall {}", path.display()));
        self.drop_file(path);
        Ok(())
    }

    fn stat(&self, name: &Path) -> io::Result<Option<Metadata>> {
        self.record(format!("stat {}", name.display()));
        Ok(None)
    }
}
