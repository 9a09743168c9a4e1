use std::sync::Arc;

use glossa_config::Config;
use glossa_core::{Debouncer, DictionaryClient, SelectionHost};
use glossa_types::{AppEvent, DefinitionRef, UiEvent, WordEntry};
use glossa_ui::Renderer;
use kanal::{AsyncReceiver, AsyncSender};
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::events::{lookup_loop, selection_loop};
use crate::lookup_context::LookupContext;
use crate::state::AppState;

/// Centralized channel management
pub struct ChannelSet {
    /// Normalized terms, one per selection read
    pub terms: (AsyncSender<Option<String>>, AsyncReceiver<Option<String>>),
    /// Terms that survived the debounce
    pub settled: (AsyncSender<Option<String>>, AsyncReceiver<Option<String>>),
    pub app_to_ui: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
}

impl ChannelSet {
    pub fn new() -> Self {
        Self {
            terms: kanal::bounded_async(64),
            settled: kanal::bounded_async(16),
            app_to_ui: kanal::bounded_async(32),
        }
    }
}

impl Default for ChannelSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Composition root wiring selection tracking, debounce, lookup and rendering.
///
/// Mounting spawns the pipeline tasks on the current tokio runtime;
/// unmounting cancels them and waits for them to finish.
pub struct Widget {
    state: Arc<AppState>,
    app_to_ui_tx: AsyncSender<AppEvent>,
    cancel_token: CancellationToken,
    tasks: JoinSet<anyhow::Result<()>>,
}

impl Widget {
    pub fn mount(
        config: Config,
        host: Arc<dyn SelectionHost>,
        client: Arc<dyn DictionaryClient>,
        renderer: Box<dyn Renderer>,
    ) -> Self {
        let channels = ChannelSet::new();
        let cancel_token = CancellationToken::new();
        let debouncer = Debouncer::new(config.debounce());
        let failure_policy = config.failure_policy;
        let state = Arc::new(AppState::new());

        tracing::info!(
            "Mounting widget (debounce {:?}, failure policy {})",
            debouncer.delay(),
            failure_policy
        );

        let mut tasks = JoinSet::new();

        // Selection tracking
        tasks.spawn(selection_loop(
            state.clone(),
            host,
            channels.terms.0.clone(),
            cancel_token.child_token(),
        ));

        // Debounce
        {
            let terms_rx = channels.terms.1.clone();
            let settled_tx = channels.settled.0.clone();
            let cancel = cancel_token.child_token();
            tasks.spawn(async move { debouncer.run(None, terms_rx, settled_tx, cancel).await });
        }

        // Lookup
        let ctx = LookupContext::new(
            state.clone(),
            client,
            channels.app_to_ui.0.clone(),
            failure_policy,
        );
        tasks.spawn(lookup_loop(
            ctx,
            channels.settled.1.clone(),
            cancel_token.child_token(),
        ));

        // Rendering
        tasks.spawn(glossa_ui::ui_loop(
            channels.app_to_ui.1.clone(),
            renderer,
            cancel_token.child_token(),
        ));

        Self {
            state,
            app_to_ui_tx: channels.app_to_ui.0,
            cancel_token,
            tasks,
        }
    }

    #[cfg(test)]
    pub(crate) fn task_tracker(&self) -> tokio_util::task::TaskTracker {
        self.state.tasks.clone()
    }

    /// Entry currently shown, if any
    pub async fn current_entry(&self) -> Option<WordEntry> {
        self.state.entry.read().await.clone()
    }

    /// Forward a definition pick to the renderer's hook
    pub async fn select_definition(&self, at: DefinitionRef) -> anyhow::Result<()> {
        self.app_to_ui_tx
            .send(AppEvent::UiEvent(UiEvent::SelectDefinition(at)))
            .await?;
        Ok(())
    }

    pub async fn unmount(mut self) -> anyhow::Result<()> {
        tracing::info!("Unmounting widget");
        self.cancel_token.cancel();

        while let Some(result) = self.tasks.join_next().await {
            match result {
                Ok(Ok(())) => {}
                Ok(Err(e)) => tracing::warn!("Widget task exited with error: {}", e),
                Err(e) => tracing::error!("Widget task panicked: {}", e),
            }
        }

        // Reads and lookups spawned by the loops above
        self.state.tasks.close();
        self.state.tasks.wait().await;

        Ok(())
    }
}

impl Drop for Widget {
    fn drop(&mut self) {
        self.cancel_token.cancel();
    }
}
