use std::sync::Arc;

use glossa_config::FailurePolicy;
use glossa_core::DictionaryClient;
use glossa_types::AppEvent;
use kanal::AsyncSender;

use crate::AppState;

/// Dependencies shared by lookup tasks
#[derive(Clone)]
pub struct LookupContext {
    pub state: Arc<AppState>,
    pub client: Arc<dyn DictionaryClient>,
    pub event_tx: AsyncSender<AppEvent>,
    pub failure_policy: FailurePolicy,
}

impl LookupContext {
    pub fn new(
        state: Arc<AppState>,
        client: Arc<dyn DictionaryClient>,
        event_tx: AsyncSender<AppEvent>,
        failure_policy: FailurePolicy,
    ) -> Self {
        Self {
            state,
            client,
            event_tx,
            failure_policy,
        }
    }
}
