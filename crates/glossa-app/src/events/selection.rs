use std::sync::Arc;

use glossa_core::SelectionHost;
use glossa_core::preprocess::read_search_term;
use kanal::AsyncSender;
use tokio_util::sync::CancellationToken;

use crate::state::AppState;

/// Follow host selection changes and publish normalized search terms.
///
/// The selection present at mount counts as the first observation. Reads run
/// concurrently and may finish out of order; only the latest one publishes.
pub async fn selection_loop(
    state: Arc<AppState>,
    host: Arc<dyn SelectionHost>,
    term_tx: AsyncSender<Option<String>>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let changes = host.subscribe();

    spawn_selection_read(&state, &host, &term_tx, &cancel);

    loop {
        tokio::select! {
            _ = cancel.cancelled() => break,
            change = changes.recv() => {
                if change.is_err() {
                    // Keep the pipeline alive so the last term can still settle
                    tracing::info!("[SELECTION] Host stopped sending selection changes");
                    cancel.cancelled().await;
                    break;
                }
                spawn_selection_read(&state, &host, &term_tx, &cancel);
            }
        }
    }

    tracing::debug!("[SELECTION] Tracking stopped");
    Ok(())
}

fn spawn_selection_read(
    state: &Arc<AppState>,
    host: &Arc<dyn SelectionHost>,
    term_tx: &AsyncSender<Option<String>>,
    cancel: &CancellationToken,
) {
    let generation = state.selection_generation.next();

    let tasks = state.tasks.clone();
    let state = state.clone();
    let host = host.clone();
    let term_tx = term_tx.clone();
    let cancel = cancel.clone();

    tasks.spawn(async move {
        let term = tokio::select! {
            _ = cancel.cancelled() => return,
            term = read_search_term(host.as_ref()) => term,
        };
        publish_term(&state, generation, term, &term_tx).await;
    });
}

/// Forward `term` unless a newer selection read has been issued since
/// `generation`
pub async fn publish_term(
    state: &AppState,
    generation: u64,
    term: Option<String>,
    term_tx: &AsyncSender<Option<String>>,
) -> bool {
    let _publishing = state.term_publish.lock().await;

    if !state.selection_generation.is_current(generation) {
        tracing::debug!("[SELECTION] Dropping stale read #{}: {:?}", generation, term);
        return false;
    }

    tracing::debug!("[SELECTION] Read #{} -> {:?}", generation, term);
    if let Err(e) = term_tx.send(term).await {
        tracing::debug!("[SELECTION] Term channel closed: {}", e);
        return false;
    }
    true
}
