//! # Shredz Architecture
//!
//! Shredz is a **destruction library with a CLI client**, not a CLI that
//! happens to export a function. One run destroys one file: every byte of
//! its extent is overwritten N times, each pass is forced to stable
//! storage before the next begins, and only then is the directory entry
//! removed.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (args.rs, wired by main.rs)                      │
//! │  - Parses arguments, colors output, owns exit codes         │
//! │  - The ONLY place that knows about stdout/stderr            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Resolves the path into an open target                    │
//! │  - Runs the passes, then removes the entry                  │
//! │  - Streams progress through a caller-supplied sink          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Engine (engine.rs)                                         │
//! │  - The pass loop: fill, rewind, write, sync, in that order  │
//! │  - Fails fast; never retries a short or failed write        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Target Layer (target/)                                     │
//! │  - Abstract Target trait                                    │
//! │  - FileTarget (production), MemTarget (testing)             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: Destruction Is Ordered
//!
//! The contract callers rely on is ordering, not speed. A pass is only
//! "done" once its bytes are durable, a later pass never starts before an
//! earlier one is done, and the file's name only disappears after its
//! contents already have. An interrupted or failed run therefore leaves
//! the file in a state that is honest about how destroyed it is. The one
//! error raised after the point of no return, `Unlink`, says exactly
//! that: the contents are gone even though the name is not.
//!
//! ## Testing Strategy
//!
//! 1. **Engine** (`engine.rs`): the lion's share. `MemTarget` injects
//!    failures at any call and snapshots contents at every sync, so pass
//!    ordering and abort behavior are tested without a filesystem.
//! 2. **Targets** (`target/`): `FileTarget` against real temp files.
//! 3. **CLI** (`tests/`): end-to-end runs of the installed binary,
//!    asserting output, exit codes, and what is left on disk.
//!
//! ## Module Overview
//!
//! - [`api`]: The entry point; one call destroys one file
//! - [`engine`]: The overwrite pass loop
//! - [`target`]: Target abstraction and implementations
//! - [`pattern`]: Fill patterns and the owned random source
//! - [`report`]: Progress and message types
//! - [`error`]: Error types

pub mod api;
pub mod engine;
pub mod error;
pub mod pattern;
pub mod report;
pub mod target;
