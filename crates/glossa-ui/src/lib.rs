use glossa_types::{AppEvent, EntryView};
use kanal::AsyncReceiver;
use tokio_util::sync::CancellationToken;

pub mod events;
pub mod render;

pub use render::{Renderer, TextRenderer, format_entry};

use events::handle_events;

/// Drive `renderer` with the events the app sends until closed or cancelled
pub async fn ui_loop(
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    mut renderer: Box<dyn Renderer>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    // View of the entry currently on screen, for definition selection
    let mut shown: Option<EntryView> = None;

    loop {
        let event = tokio::select! {
            _ = cancel.cancelled() => break,
            event = app_to_ui_rx.recv() => match event {
                Ok(event) => event,
                Err(_) => break,
            },
        };

        handle_events(event, renderer.as_mut(), &mut shown);
    }

    tracing::debug!("[UI] Render loop stopped");
    Ok(())
}
