use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One record of the dictionary API response.
///
/// The typed view covers the fields the renderer needs; the original JSON
/// element is kept as-is so serializing an entry gives back exactly what the
/// API returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Value", into = "Value")]
pub struct WordEntry {
    data: EntryData,
    raw: Value,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EntryData {
    pub word: String,
    pub phonetic: Option<String>,
    pub phonetics: Vec<Phonetic>,
    pub origin: Option<String>,
    pub meanings: Vec<Meaning>,
    pub source_urls: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Phonetic {
    pub text: Option<String>,
    pub audio: Option<String>,
    pub source_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Meaning {
    pub part_of_speech: String,
    pub definitions: Vec<Definition>,
    pub synonyms: Vec<String>,
    pub antonyms: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Definition {
    pub definition: String,
    pub example: Option<String>,
    pub synonyms: Vec<String>,
    pub antonyms: Vec<String>,
}

impl WordEntry {
    pub fn from_value(raw: Value) -> Result<Self, serde_json::Error> {
        let data = EntryData::deserialize(&raw)?;
        Ok(Self { data, raw })
    }

    pub fn word(&self) -> &str {
        &self.data.word
    }

    pub fn data(&self) -> &EntryData {
        &self.data
    }

    /// The JSON element exactly as received
    pub fn raw(&self) -> &Value {
        &self.raw
    }

    /// Phonetic spelling, falling back to the first phonetic variant with text
    pub fn phonetic(&self) -> Option<&str> {
        self.data.phonetic.as_deref().or_else(|| {
            self.data
                .phonetics
                .iter()
                .find_map(|p| p.text.as_deref())
        })
    }
}

impl TryFrom<Value> for WordEntry {
    type Error = serde_json::Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        WordEntry::from_value(value)
    }
}

impl From<WordEntry> for Value {
    fn from(entry: WordEntry) -> Self {
        entry.raw
    }
}
