//! # Target Layer
//!
//! This module defines the overwrite abstraction for shredz. The [`Target`]
//! trait is the engine's only view of the file being destroyed.
//!
//! ## Design Rationale
//!
//! The destructive I/O is abstracted behind a trait to:
//! - Enable **testing** of the pass loop with `MemTarget` (no filesystem,
//!   injectable failures)
//! - Keep the pass ordering and failure semantics **decoupled** from how a
//!   particular platform opens, writes, and syncs files
//!
//! ## Implementations
//!
//! - [`fs::FileTarget`]: Production target over a real file handle
//!   - Validates the path names a regular file before opening
//!   - Captures the byte length once, at open time
//!   - `sync` maps to `File::sync_all`, the real durability barrier
//!
//! - [`memory::MemTarget`]: In-memory target for tests
//!   - Records a snapshot of its contents at every successful sync
//!   - Can fail or shorten any individual call on demand
//!
//! ## Failure Semantics
//!
//! `write` is a single attempt. It reports how many bytes the target
//! accepted and is never retried: the engine treats a short count as a
//! failed overwrite, because retrying could paper over a file that was
//! only partially destroyed.

use std::io;

pub mod fs;
pub mod memory;

/// Abstract interface for the file under destruction.
///
/// Implementations must make `sync` a genuine durability barrier: when it
/// returns `Ok`, every byte written so far is on stable storage, not
/// merely in an OS buffer.
pub trait Target {
    /// Reposition the write cursor to the first byte
    fn rewind(&mut self) -> io::Result<()>;

    /// Write the front of `buf` at the cursor, one attempt, returning the
    /// number of bytes accepted
    fn write(&mut self, buf: &[u8]) -> io::Result<usize>;

    /// Block until all previously written bytes are durable
    fn sync(&mut self) -> io::Result<()>;
}
