use super::Target;
use std::io;

/// In-memory target for exercising the overwrite engine without a
/// filesystem.
///
/// Behaves like a file opened for writing: a cursor, extend-on-write
/// semantics, and a durability barrier. On top of that it offers what the
/// engine's tests need: any call can be made to fail (or a write to come
/// up short) at a chosen point, and the contents as of each successful
/// sync are snapshotted so tests can assert exactly what each pass made
/// durable.
///
/// Call counters count attempts, including calls that fail.
#[derive(Default)]
pub struct MemTarget {
    buf: Vec<u8>,
    pos: usize,
    rewinds: usize,
    writes: usize,
    syncs: usize,
    fail_rewind_on: Option<usize>,
    fail_write_on: Option<usize>,
    short_write_on: Option<(usize, usize)>,
    fail_sync_on: Option<usize>,
    synced_images: Vec<Vec<u8>>,
}

impl MemTarget {
    pub fn with_contents(contents: impl Into<Vec<u8>>) -> Self {
        Self {
            buf: contents.into(),
            ..Self::default()
        }
    }

    /// Fail the nth rewind call (1-based) with an injected error.
    pub fn fail_rewind_on(mut self, call: usize) -> Self {
        self.fail_rewind_on = Some(call);
        self
    }

    /// Fail the nth write call (1-based) with an injected error.
    pub fn fail_write_on(mut self, call: usize) -> Self {
        self.fail_write_on = Some(call);
        self
    }

    /// Make the nth write call (1-based) accept only `accepted` bytes.
    pub fn short_write_on(mut self, call: usize, accepted: usize) -> Self {
        self.short_write_on = Some((call, accepted));
        self
    }

    /// Fail the nth sync call (1-based) with an injected error.
    pub fn fail_sync_on(mut self, call: usize) -> Self {
        self.fail_sync_on = Some(call);
        self
    }

    pub fn contents(&self) -> &[u8] {
        &self.buf
    }

    /// Snapshots taken after each successful sync, oldest first.
    pub fn synced_images(&self) -> &[Vec<u8>] {
        &self.synced_images
    }

    pub fn rewind_count(&self) -> usize {
        self.rewinds
    }

    pub fn write_count(&self) -> usize {
        self.writes
    }

    pub fn sync_count(&self) -> usize {
        self.syncs
    }

    fn injected() -> io::Error {
        io::Error::other("injected failure")
    }
}

impl Target for MemTarget {
    fn rewind(&mut self) -> io::Result<()> {
        self.rewinds += 1;
        if self.fail_rewind_on == Some(self.rewinds) {
            return Err(Self::injected());
        }
        self.pos = 0;
        Ok(())
    }

    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writes += 1;
        if self.fail_write_on == Some(self.writes) {
            return Err(Self::injected());
        }
        let mut accepted = buf.len();
        if let Some((call, limit)) = self.short_write_on {
            if call == self.writes {
                accepted = accepted.min(limit);
            }
        }
        let end = self.pos + accepted;
        if end > self.buf.len() {
            self.buf.resize(end, 0);
        }
        self.buf[self.pos..end].copy_from_slice(&buf[..accepted]);
        self.pos = end;
        Ok(accepted)
    }

    fn sync(&mut self) -> io::Result<()> {
        self.syncs += 1;
        if self.fail_sync_on == Some(self.syncs) {
            return Err(Self::injected());
        }
        self.synced_images.push(self.buf.clone());
        Ok(())
    }
}
