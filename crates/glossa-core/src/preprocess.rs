use crate::host::SelectionHost;

/// Reduce selected text to a dictionary lookup key: the first
/// whitespace-delimited word with everything except ASCII letters removed.
pub fn clean_selected_text(text: &str) -> Option<String> {
    let first = text.split_whitespace().next()?;

    let cleaned: String = first.chars().filter(char::is_ascii_alphabetic).collect();

    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned)
    }
}

/// Read the host selection and normalize it to a search term.
///
/// Missing or non-text selections yield `None`, as do host failures, which are
/// only logged: an unreadable selection is treated the same as no selection.
pub async fn read_search_term(host: &dyn SelectionHost) -> Option<String> {
    let selection = match host.selection().await {
        Ok(selection) => selection?,
        Err(e) => {
            tracing::warn!("Failed to read selection: {}", e);
            return None;
        }
    };

    let Some(rich_text) = selection.rich_text() else {
        tracing::debug!("Ignoring non-text selection");
        return None;
    };

    let text = match host.rich_text_to_string(rich_text).await {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!("Failed to stringify selection: {}", e);
            return None;
        }
    };

    let term = clean_selected_text(&text);
    tracing::debug!("Selection '{}' -> term {:?}", text, term);
    term
}
