use std::fmt::Write as _;
use std::io::Write;

use glossa_config::RenderMode;
use glossa_config::ui::UiConfig;
use glossa_types::{DefinitionRef, DefinitionView, EntryView, WordEntry};

/// Presentation of the current dictionary entry
pub trait Renderer: Send {
    /// Show `entry`; `None` means no definition is available
    fn render(&mut self, entry: Option<&WordEntry>) -> anyhow::Result<()>;

    /// Called when the user picks a definition of the shown entry
    fn on_select_definition(&mut self, _definition: &DefinitionView, _at: DefinitionRef) {}
}

/// Structured output when there is no entry to show
pub const NO_ENTRY: &str = "(no entry)";

/// Renders entries as text into any writer (stdout for the terminal widget)
pub struct TextRenderer<W> {
    writer: W,
    mode: RenderMode,
    max_definitions: usize,
}

impl<W: Write + Send> TextRenderer<W> {
    pub fn new(writer: W, config: &UiConfig) -> Self {
        Self {
            writer,
            mode: config.render_mode,
            max_definitions: config.max_definitions,
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send> Renderer for TextRenderer<W> {
    fn render(&mut self, entry: Option<&WordEntry>) -> anyhow::Result<()> {
        let text = match (self.mode, entry) {
            (RenderMode::Structured, Some(entry)) => {
                format_entry(&EntryView::from(entry), self.max_definitions)
            }
            (RenderMode::Structured, None) => NO_ENTRY.to_string(),
            (RenderMode::Json, Some(entry)) => serde_json::to_string_pretty(entry.raw())?,
            (RenderMode::Json, None) => "null".to_string(),
        };

        writeln!(self.writer, "{text}")?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Plain-text layout: headword and phonetic, then each part of speech with
/// numbered definitions and their examples
pub fn format_entry(view: &EntryView, max_definitions: usize) -> String {
    let mut out = String::new();

    out.push_str(&view.headword);
    if let Some(phonetic) = &view.phonetic {
        let _ = write!(out, "  {phonetic}");
    }
    out.push('\n');

    for sense in &view.senses {
        let _ = writeln!(out, "{}", sense.part_of_speech);

        for (i, definition) in sense.definitions.iter().take(max_definitions).enumerate() {
            let _ = writeln!(out, "  {}. {}", i + 1, definition.text);
            if let Some(example) = &definition.example {
                let _ = writeln!(out, "     \"{example}\"");
            }
        }

        let hidden = sense.definitions.len().saturating_sub(max_definitions);
        if hidden > 0 {
            let _ = writeln!(out, "  (+{hidden} more)");
        }
    }

    out
}
