use glossa_types::{AppEvent, EntryView, UiEvent};

use crate::render::Renderer;

pub fn handle_events(
    event: AppEvent,
    renderer: &mut dyn Renderer,
    shown: &mut Option<EntryView>,
) {
    match event {
        AppEvent::ShowEntry(entry) => {
            match &entry {
                Some(entry) => tracing::debug!("[UI] Showing entry '{}'", entry.word()),
                None => tracing::debug!("[UI] Clearing entry"),
            }

            *shown = entry.as_ref().map(EntryView::from);
            if let Err(e) = renderer.render(entry.as_ref()) {
                tracing::error!("[UI] Render failed: {}", e);
            }
        }
        AppEvent::UiEvent(UiEvent::SelectDefinition(at)) => {
            match shown.as_ref().and_then(|view| view.definition(at)) {
                Some(definition) => renderer.on_select_definition(definition, at),
                None => tracing::debug!("[UI] No definition at {:?}", at),
            }
        }
    }
}
