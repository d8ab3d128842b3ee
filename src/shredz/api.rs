//! High-level entry point: resolve the target, run the overwrite passes,
//! then remove the directory entry.
//!
//! The CLI binary is a thin shell around [`shred`]; embedding callers can
//! use it directly and receive the same messages through their own sink.

use crate::engine;
use crate::error::{Result, ShredError};
use crate::pattern::{FillPattern, PatternSource};
use crate::target::fs::FileTarget;
use crate::target::Target;
use std::fs;
use std::path::{Path, PathBuf};

pub use crate::report::{CmdMessage, MessageLevel, PassReport};

/// One shred invocation: which file, how many passes, which pattern.
#[derive(Debug, Clone)]
pub struct ShredRequest {
    pub path: PathBuf,
    pub passes: u32,
    pub pattern: FillPattern,
}

/// What a completed run actually did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShredOutcome {
    /// Bytes each pass covered (the size captured at open time).
    pub bytes: u64,
    /// Overwrite passes performed; zero when the file was already empty.
    pub passes: u32,
}

/// Destroy the file named by `request`.
///
/// Messages are delivered through `emit` as the run progresses rather
/// than batched at the end; durability barriers can be slow and the pass
/// log is the only sign of life on a large file. A zero-length file has
/// no contents to destroy, so it skips the passes entirely and is only
/// removed.
///
/// Errors abort the run at the failing step. [`ShredError::Unlink`] is
/// the one partial outcome: the contents were already overwritten and
/// synced, but the directory entry could not be removed.
pub fn shred(
    request: &ShredRequest,
    source: &mut PatternSource,
    emit: impl FnMut(CmdMessage),
) -> Result<ShredOutcome> {
    let target = FileTarget::open(&request.path)?;
    let size = target.size();
    destroy(target, size, &request.path, request.passes, source, emit)
}

/// The engine run plus the finalizer, over an already opened target.
/// Generic over [`Target`] so the abort paths can be exercised with an
/// in-memory target against a real directory entry.
fn destroy<T: Target>(
    mut target: T,
    size: u64,
    path: &Path,
    passes: u32,
    source: &mut PatternSource,
    mut emit: impl FnMut(CmdMessage),
) -> Result<ShredOutcome> {
    if size == 0 {
        emit(CmdMessage::info("File is empty, nothing to shred."));
        drop(target);
        remove_entry(path)?;
        return Ok(ShredOutcome { bytes: 0, passes: 0 });
    }

    engine::overwrite(&mut target, size, source, passes, |report| {
        emit(CmdMessage::info(format!(
            "Pass {}/{} completed with pattern '{}'.",
            report.pass, report.total, report.pattern
        )));
    })?;

    // Close before unlinking; removing an open file is not portable.
    drop(target);
    remove_entry(path)?;

    emit(CmdMessage::success(format!(
        "File '{}' securely shredded and deleted.",
        path.display()
    )));

    Ok(ShredOutcome {
        bytes: size,
        passes,
    })
}

fn remove_entry(path: &Path) -> Result<()> {
    fs::remove_file(path).map_err(|source| ShredError::Unlink {
        path: path.to_path_buf(),
        source,
    })
}
