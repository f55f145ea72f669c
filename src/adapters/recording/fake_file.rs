//! In-memory file handle returned by the recording filesystem.

use std::fs::Metadata;
use std::io::{self, Cursor, Read, Seek, SeekFrom, Write};
use std::sync::{Arc, Mutex};

use crate::ports::filesystem::File;

#[derive(Debug, Default)]
struct FakeFileState {
    content: Vec<u8>,
    cursor: u64,
    // Snapshot of `content` taken at the first sequential read; discarded
    // only when the file is reopened through the filesystem.
    reader: Option<Cursor<Vec<u8>>>,
}

impl FakeFileState {
    fn reader(&mut self) -> &mut Cursor<Vec<u8>> {
        let content = &self.content;
        self.reader.get_or_insert_with(|| Cursor::new(content.clone()))
    }
}

/// In-memory stand-in for a file handle, backed by a shared buffer.
///
/// Methods behave like their `std::fs::File` counterparts but operate on an
/// internal buffer instead of a real file. Cloning yields another handle
/// over the same buffer and cursor, which is how the recording filesystem
/// hands out the same file for repeated opens of one path.
#[derive(Debug, Clone, Default)]
pub struct FakeFile {
    state: Arc<Mutex<FakeFileState>>,
}

impl FakeFile {
    /// Creates a fake file holding the given content.
    #[must_use]
    pub fn new(content: impl Into<Vec<u8>>) -> Self {
        Self {
            state: Arc::new(Mutex::new(FakeFileState {
                content: content.into(),
                cursor: 0,
                reader: None,
            })),
        }
    }

    /// Returns a copy of the current buffer, for test assertions.
    #[must_use]
    pub fn contents(&self) -> Vec<u8> {
        self.state.lock().expect("fake file lock poisoned").content.clone()
    }

    /// Discards the snapshot reader so the next sequential read observes
    /// the current buffer from the start.
    pub(crate) fn reset_read_view(&self) {
        self.state.lock().expect("fake file lock poisoned").reader = None;
    }
}

impl Read for FakeFile {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let mut state = self.state.lock().expect("fake file lock poisoned");
        let n = state.reader().read(buf)?;
        state.cursor += n as u64;
        Ok(n)
    }
}

impl Write for FakeFile {
    /// Replaces the buffer from the cursor position onward with `buf`,
    /// dropping anything previously beyond the cursor.
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut state = self.state.lock().expect("fake file lock poisoned");
        let keep = state.content.len().min(usize::try_from(state.cursor).unwrap_or(usize::MAX));
        state.content.truncate(keep);
        state.content.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Seek for FakeFile {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        let mut state = self.state.lock().expect("fake file lock poisoned");
        let new_pos = state.reader().seek(pos)?;
        state.cursor = new_pos;
        Ok(new_pos)
    }
}

impl File for FakeFile {
    fn close(&mut self) -> io::Result<()> {
        self.state.lock().expect("fake file lock poisoned").cursor = 0;
        Ok(())
    }

    fn read_at(&mut self, buf: &mut [u8], offset: u64) -> io::Result<usize> {
        let mut state = self.state.lock().expect("fake file lock poisoned");
        let n = {
            let snapshot = state.reader().get_ref();
            let Ok(start) = usize::try_from(offset) else {
                return Ok(0);
            };
            if start >= snapshot.len() {
                0
            } else {
                let end = snapshot.len().min(start.saturating_add(buf.len()));
                buf[..end - start].copy_from_slice(&snapshot[start..end]);
                end - start
            }
        };
        state.cursor = state.cursor.saturating_add(offset).saturating_add(n as u64);
        Ok(n)
    }

    fn write_str(&mut self, s: &str) -> io::Result<usize> {
        let mut state = self.state.lock().expect("fake file lock poisoned");
        state.content = s.as_bytes().to_vec();
        Ok(s.len())
    }

    fn stat(&self) -> io::Result<Option<Metadata>> {
        Ok(None)
    }
}
