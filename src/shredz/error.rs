use std::collections::TryReserveError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong while destroying a file.
///
/// Each variant names the step that failed. Pass-scoped variants carry the
/// 1-based ordinal of the pass, so a user can tell a failure on the first
/// overwrite apart from one on the last. `Unlink` is special: by the time
/// it is raised the contents are already gone, only the name remains.
#[derive(Error, Debug)]
pub enum ShredError {
    #[error("failed to open '{}': {}", .path.display(), .source)]
    Open { path: PathBuf, source: io::Error },

    #[error("cannot shred '{}': not a regular file", .path.display())]
    NotRegular { path: PathBuf },

    #[error("failed to read the size of '{}': {}", .path.display(), .source)]
    Stat { path: PathBuf, source: io::Error },

    #[error("failed to allocate a {bytes}-byte fill buffer: {source}")]
    Allocation {
        bytes: usize,
        source: TryReserveError,
    },

    #[error("seek failed on pass {pass}: {source}")]
    Seek { pass: u32, source: io::Error },

    #[error("write failed on pass {pass}: {source}")]
    Write { pass: u32, source: io::Error },

    #[error("short write on pass {pass}: wrote {written} of {expected} bytes")]
    ShortWrite {
        pass: u32,
        expected: u64,
        written: u64,
    },

    #[error("sync to stable storage failed on pass {pass}: {source}")]
    Sync { pass: u32, source: io::Error },

    #[error("contents destroyed, but removing '{}' failed: {}", .path.display(), .source)]
    Unlink { path: PathBuf, source: io::Error },
}

pub type Result<T> = std::result::Result<T, ShredError>;
