//! Clipboard request types.
//!
//! Clipboard access belongs to the host: reads are asynchronous and
//! permission-gated, writes are fire-and-forget. The session therefore
//! never touches a clipboard itself ("humble object" at the platform
//! seam) — it hands the host a [`ClipboardRequest`] and, for reads, the
//! host later calls back with the text or a failure.
//!
//! Because the host delivers the completion through the same single
//! event queue as every other input, the buffer mutation it triggers is
//! atomic with respect to other events: nothing can interleave with it.

/// A clipboard operation for the host to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipboardRequest {
    /// Read the clipboard; deliver the result via
    /// `EditorSession::clipboard_read_complete` or
    /// `EditorSession::clipboard_read_failed`.
    Read,
    /// Write the given text to the clipboard.
    Write(String),
}
