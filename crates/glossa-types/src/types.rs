use crate::entry::WordEntry;

#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Replace the rendered entry; `None` clears the view
    ShowEntry(Option<WordEntry>),
    UiEvent(UiEvent),
}

#[derive(Debug, Clone)]
pub enum UiEvent {
    SelectDefinition(DefinitionRef),
}

/// Position of a definition inside an entry's meanings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefinitionRef {
    pub meaning: usize,
    pub definition: usize,
}

/// Presentation model of a dictionary entry
#[derive(Debug, Clone, PartialEq)]
pub struct EntryView {
    pub headword: String,
    pub phonetic: Option<String>,
    pub senses: Vec<SenseView>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SenseView {
    pub part_of_speech: String,
    pub definitions: Vec<DefinitionView>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DefinitionView {
    pub text: String,
    pub example: Option<String>,
}

impl From<&WordEntry> for EntryView {
    fn from(entry: &WordEntry) -> Self {
        let senses = entry
            .data()
            .meanings
            .iter()
            .map(|meaning| SenseView {
                part_of_speech: meaning.part_of_speech.clone(),
                definitions: meaning
                    .definitions
                    .iter()
                    .map(|d| DefinitionView {
                        text: d.definition.clone(),
                        example: d.example.clone().filter(|e| !e.is_empty()),
                    })
                    .collect(),
            })
            .collect();

        EntryView {
            headword: entry.word().to_string(),
            phonetic: entry.phonetic().map(str::to_string),
            senses,
        }
    }
}

impl EntryView {
    pub fn definition(&self, at: DefinitionRef) -> Option<&DefinitionView> {
        self.senses.get(at.meaning)?.definitions.get(at.definition)
    }
}
