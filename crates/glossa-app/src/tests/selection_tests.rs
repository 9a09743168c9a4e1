use std::sync::Arc;
use std::time::Duration;

use kanal::AsyncReceiver;
use tokio::time;
use tokio_util::sync::CancellationToken;

use super::fakes::FakeHost;
use crate::events::{publish_term, selection_loop};
use crate::state::AppState;

fn spawn_tracking(
    host: &Arc<FakeHost>,
) -> (Arc<AppState>, AsyncReceiver<Option<String>>, CancellationToken) {
    let state = Arc::new(AppState::new());
    let (term_tx, term_rx) = kanal::unbounded_async();
    let cancel = CancellationToken::new();

    tokio::spawn(selection_loop(
        state.clone(),
        host.clone(),
        term_tx,
        cancel.clone(),
    ));

    (state, term_rx, cancel)
}

async fn next_term(rx: &AsyncReceiver<Option<String>>) -> Option<Option<String>> {
    time::timeout(Duration::from_secs(2), rx.recv())
        .await
        .ok()
        .and_then(Result::ok)
}

#[tokio::test(start_paused = true)]
async fn test_initial_selection_is_read_on_mount() {
    let host = FakeHost::new(Some("  Lorem ipsum"));
    let (_state, terms, cancel) = spawn_tracking(&host);

    assert_eq!(next_term(&terms).await, Some(Some("Lorem".to_string())));

    cancel.cancel();
}

#[tokio::test(start_paused = true)]
async fn test_slow_stale_read_is_dropped() {
    let host = FakeHost::new(None);
    // initial read is immediate, the read for "slow" takes 300ms
    host.delay_reads(&[Duration::ZERO, Duration::from_millis(300)])
        .await;
    let (_state, terms, cancel) = spawn_tracking(&host);

    assert_eq!(next_term(&terms).await, Some(None));

    host.select_text("slow").await;
    time::sleep(Duration::from_millis(10)).await;
    host.select_text("fast").await;

    assert_eq!(next_term(&terms).await, Some(Some("fast".to_string())));
    assert_eq!(next_term(&terms).await, None, "stale read was published");

    cancel.cancel();
}

#[tokio::test]
async fn test_publish_term_checks_generation() {
    let state = AppState::new();
    let (tx, rx) = kanal::unbounded_async();

    let stale = state.selection_generation.next();
    let current = state.selection_generation.next();

    assert!(!publish_term(&state, stale, Some("old".to_string()), &tx).await);
    assert!(publish_term(&state, current, Some("new".to_string()), &tx).await);

    assert_eq!(rx.try_recv().unwrap(), Some(Some("new".to_string())));
    assert_eq!(rx.try_recv().unwrap(), None);
}
