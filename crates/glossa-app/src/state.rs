use glossa_core::Generation;
use glossa_types::WordEntry;
use tokio::sync::{Mutex, RwLock};
use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;

pub struct AppState {
    /// Entry currently shown, written only by lookup completion
    pub entry: RwLock<Option<WordEntry>>,
    /// Tags host selection reads
    pub selection_generation: Generation,
    /// Tags dictionary lookups
    pub fetch_generation: Generation,
    /// Held while checking a selection read is current and publishing its term
    pub term_publish: Mutex<()>,
    /// Cancels the lookup still in flight when a newer term settles
    pub inflight_lookup: Mutex<Option<CancellationToken>>,
    /// Per-read and per-lookup tasks, awaited on unmount
    pub tasks: TaskTracker,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            entry: RwLock::new(None),
            selection_generation: Generation::new(),
            fetch_generation: Generation::new(),
            term_publish: Mutex::new(()),
            inflight_lookup: Mutex::new(None),
            tasks: TaskTracker::new(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
