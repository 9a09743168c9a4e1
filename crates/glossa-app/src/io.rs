use glossa_core::{HostError, SelectionChanged, SelectionHost};
use glossa_types::Selection;
use kanal::{AsyncReceiver, AsyncSender};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::RwLock;

/// Terminal stand-in for an editor: every input line replaces the selection.
///
/// - an empty line clears the selection
/// - `@kind` selects something that is not text (e.g. `@rem`)
/// - a line starting with `{` is read as a JSON [`Selection`]
/// - anything else is selected as plain text
pub struct StdinHost {
    current: RwLock<Option<Selection>>,
    changes: (AsyncSender<SelectionChanged>, AsyncReceiver<SelectionChanged>),
}

impl StdinHost {
    pub fn new() -> Self {
        Self {
            current: RwLock::new(None),
            changes: kanal::unbounded_async(),
        }
    }

    pub fn parse_line(line: &str) -> Option<Selection> {
        let line = line.trim_end_matches(['\r', '\n']);

        if line.trim().is_empty() {
            return None;
        }

        if let Some(kind) = line.strip_prefix('@') {
            return Some(Selection::Other {
                kind: kind.trim().to_string(),
            });
        }

        if line.trim_start().starts_with('{') {
            match serde_json::from_str::<Selection>(line) {
                Ok(selection) => return Some(selection),
                Err(e) => tracing::debug!("Line is not a JSON selection ({}), using it as text", e),
            }
        }

        Some(Selection::plain(line))
    }

    pub async fn set_selection(&self, selection: Option<Selection>) {
        *self.current.write().await = selection;

        if let Err(e) = self.changes.0.try_send(SelectionChanged) {
            tracing::warn!("Failed to notify selection change: {}", e);
        }
    }

    /// Feed selections from `reader` line by line until EOF
    pub async fn watch_lines<R>(&self, reader: R) -> anyhow::Result<()>
    where
        R: AsyncBufRead + Unpin,
    {
        let mut lines = reader.lines();

        while let Some(line) = lines.next_line().await? {
            let selection = Self::parse_line(&line);
            tracing::debug!("Selection from input: {:?}", selection);
            self.set_selection(selection).await;
        }

        Ok(())
    }
}

impl Default for StdinHost {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl SelectionHost for StdinHost {
    fn subscribe(&self) -> AsyncReceiver<SelectionChanged> {
        self.changes.1.clone()
    }

    async fn selection(&self) -> Result<Option<Selection>, HostError> {
        Ok(self.current.read().await.clone())
    }
}
