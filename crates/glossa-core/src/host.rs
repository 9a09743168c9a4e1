use glossa_types::{RichText, Selection};
use kanal::AsyncReceiver;

use crate::error::HostError;

/// Notification that the editor selection may have changed.
/// Carries no payload: listeners pull the current selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionChanged;

/// Capabilities the widget consumes from the note-taking host
#[async_trait::async_trait]
pub trait SelectionHost: Send + Sync {
    /// Register a listener for selection changes
    fn subscribe(&self) -> AsyncReceiver<SelectionChanged>;

    /// Current editor selection, `None` when nothing is selected
    async fn selection(&self) -> Result<Option<Selection>, HostError>;

    /// Convert host rich text to a plain string
    async fn rich_text_to_string(&self, rich_text: &RichText) -> Result<String, HostError> {
        Ok(rich_text.to_plain_string())
    }
}
