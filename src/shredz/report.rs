use crate::pattern::FillPattern;

/// Progress for one completed overwrite pass.
///
/// Emitted only after the pass's durability barrier, so a report always
/// refers to content that has reached stable storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassReport {
    /// 1-based ordinal of the completed pass.
    pub pass: u32,
    /// Total passes requested for the run.
    pub total: u32,
    /// Pattern the pass was filled with.
    pub pattern: FillPattern,
}

/// Severity vocabulary for rendering. A run emits `Info` progress and a
/// `Success` confirmation; failures propagate as
/// [`ShredError`](crate::error::ShredError), not as messages.
#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// A user-facing line of output, produced as the run progresses.
#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }
}
