pub mod entry;
pub mod selection;
pub mod types;

pub use entry::{Definition, EntryData, Meaning, Phonetic, WordEntry};
pub use selection::{RichText, RichTextElement, Selection};
pub use types::{AppEvent, DefinitionRef, DefinitionView, EntryView, SenseView, UiEvent};
