use glossa_config::FailurePolicy;
use glossa_core::FetchError;
use glossa_types::{AppEvent, WordEntry};
use kanal::AsyncReceiver;
use tokio_util::sync::CancellationToken;

use crate::lookup_context::LookupContext;

/// Start a dictionary lookup for every settled search term
pub async fn lookup_loop(
    ctx: LookupContext,
    settled_rx: AsyncReceiver<Option<String>>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    loop {
        let term = tokio::select! {
            _ = cancel.cancelled() => break,
            term = settled_rx.recv() => match term {
                Ok(term) => term,
                Err(_) => break,
            },
        };

        handle_settled_term(&ctx, term, &cancel).await;
    }

    tracing::debug!("[LOOKUP] Loop stopped");
    Ok(())
}

pub async fn handle_settled_term(
    ctx: &LookupContext,
    term: Option<String>,
    cancel: &CancellationToken,
) {
    let Some(term) = term.filter(|t| !t.is_empty()) else {
        tracing::debug!("[LOOKUP] No search term");
        return;
    };

    let sequence = ctx.state.fetch_generation.next();
    let token = cancel.child_token();

    if let Some(previous) = ctx.state.inflight_lookup.lock().await.replace(token.clone()) {
        previous.cancel();
    }

    tracing::info!("[LOOKUP] #{} '{}'", sequence, term);

    let tasks = ctx.state.tasks.clone();
    let ctx = ctx.clone();
    tasks.spawn(async move {
        tokio::select! {
            _ = token.cancelled() => {
                tracing::debug!("[LOOKUP] #{} '{}' cancelled", sequence, term);
            }
            result = ctx.client.lookup(&term) => {
                apply_lookup(&ctx, sequence, &term, result).await;
            }
        }
    });
}

/// Publish the outcome of lookup `sequence` if it is still the latest one.
/// Returns whether the shown entry changed.
pub async fn apply_lookup(
    ctx: &LookupContext,
    sequence: u64,
    term: &str,
    result: Result<Option<WordEntry>, FetchError>,
) -> bool {
    // Checked under the entry lock so an older lookup can never land after a
    // newer one
    let mut shown = ctx.state.entry.write().await;

    if !ctx.state.fetch_generation.is_current(sequence) {
        tracing::debug!("[LOOKUP] Discarding stale result #{} for '{}'", sequence, term);
        return false;
    }

    let entry = match result {
        Ok(entry) => {
            if entry.is_none() {
                tracing::info!("[LOOKUP] No definitions for '{}'", term);
            }
            entry
        }
        Err(e) => {
            tracing::warn!("[LOOKUP] Error getting dictionary info for '{}': {}", term, e);
            match ctx.failure_policy {
                FailurePolicy::Retain => return false,
                FailurePolicy::Clear => None,
            }
        }
    };

    *shown = entry.clone();

    if let Err(e) = ctx.event_tx.send(AppEvent::ShowEntry(entry)).await {
        tracing::debug!("[LOOKUP] UI channel closed: {}", e);
    }
    true
}
