use std::sync::Arc;

use glossa_config::FailurePolicy;
use glossa_core::FetchError;
use glossa_types::{AppEvent, WordEntry};
use kanal::AsyncReceiver;
use tokio_util::sync::CancellationToken;

use super::fakes::{FakeDictionary, entry_json};
use crate::events::{apply_lookup, handle_settled_term};
use crate::lookup_context::LookupContext;
use crate::state::AppState;

fn context(policy: FailurePolicy) -> (LookupContext, AsyncReceiver<AppEvent>) {
    let (tx, rx) = kanal::unbounded_async();
    let state = Arc::new(AppState::new());
    let ctx = LookupContext::new(state, Arc::new(FakeDictionary::new()), tx, policy);
    (ctx, rx)
}

fn entry(word: &str) -> WordEntry {
    WordEntry::from_value(entry_json(word)).unwrap()
}

fn failure() -> FetchError {
    FetchError::InvalidUrl("unreachable".to_string())
}

fn shown_words(rx: &AsyncReceiver<AppEvent>) -> Vec<Option<String>> {
    let mut words = Vec::new();
    while let Ok(Some(event)) = rx.try_recv() {
        if let AppEvent::ShowEntry(entry) = event {
            words.push(entry.map(|e| e.word().to_string()));
        }
    }
    words
}

#[tokio::test]
async fn test_stale_result_is_discarded() {
    let (ctx, rx) = context(FailurePolicy::Retain);

    let old = ctx.state.fetch_generation.next();
    let new = ctx.state.fetch_generation.next();

    // The newer lookup finishes first, the older one arrives late
    assert!(apply_lookup(&ctx, new, "new", Ok(Some(entry("new")))).await);
    assert!(!apply_lookup(&ctx, old, "old", Ok(Some(entry("old")))).await);

    assert_eq!(shown_words(&rx), vec![Some("new".to_string())]);
    assert_eq!(
        ctx.state.entry.read().await.as_ref().map(|e| e.word().to_string()),
        Some("new".to_string())
    );
}

#[tokio::test]
async fn test_retain_keeps_entry_on_failure() {
    let (ctx, rx) = context(FailurePolicy::Retain);

    let first = ctx.state.fetch_generation.next();
    apply_lookup(&ctx, first, "hello", Ok(Some(entry("hello")))).await;

    let second = ctx.state.fetch_generation.next();
    assert!(!apply_lookup(&ctx, second, "broken", Err(failure())).await);

    assert_eq!(shown_words(&rx), vec![Some("hello".to_string())]);
    assert_eq!(*ctx.state.entry.read().await, Some(entry("hello")));
}

#[tokio::test]
async fn test_clear_empties_entry_on_failure() {
    let (ctx, rx) = context(FailurePolicy::Clear);

    let first = ctx.state.fetch_generation.next();
    apply_lookup(&ctx, first, "hello", Ok(Some(entry("hello")))).await;

    let second = ctx.state.fetch_generation.next();
    assert!(apply_lookup(&ctx, second, "broken", Err(failure())).await);

    assert_eq!(shown_words(&rx), vec![Some("hello".to_string()), None]);
    assert!(ctx.state.entry.read().await.is_none());
}

#[tokio::test]
async fn test_absent_term_issues_no_lookup() {
    let (ctx, rx) = context(FailurePolicy::Retain);
    let cancel = CancellationToken::new();

    handle_settled_term(&ctx, None, &cancel).await;
    handle_settled_term(&ctx, Some(String::new()), &cancel).await;

    assert_eq!(ctx.state.fetch_generation.current(), 0);
    assert!(ctx.state.inflight_lookup.lock().await.is_none());
    assert!(shown_words(&rx).is_empty());
}

#[tokio::test]
async fn test_new_term_cancels_inflight_lookup() {
    let (ctx, _rx) = context(FailurePolicy::Retain);
    let cancel = CancellationToken::new();

    handle_settled_term(&ctx, Some("first".to_string()), &cancel).await;
    let first_token = ctx.state.inflight_lookup.lock().await.clone().unwrap();

    handle_settled_term(&ctx, Some("second".to_string()), &cancel).await;

    assert!(first_token.is_cancelled());
    assert_eq!(ctx.state.fetch_generation.current(), 2);

    cancel.cancel();
    let second_token = ctx.state.inflight_lookup.lock().await.clone().unwrap();
    assert!(second_token.is_cancelled());
}
