use serde::{Deserialize, Serialize};

/// Editor selection as reported by the host
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Selection {
    Text { rich_text: RichText },
    /// Any non-text selection (rems, blocks, images...)
    Other { kind: String },
}

impl Selection {
    /// Text selection made of a single plain element
    pub fn plain(text: impl Into<String>) -> Self {
        Selection::Text {
            rich_text: RichText::plain(text),
        }
    }

    pub fn rich_text(&self) -> Option<&RichText> {
        match self {
            Selection::Text { rich_text } => Some(rich_text),
            Selection::Other { .. } => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RichText(pub Vec<RichTextElement>);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RichTextElement {
    Text(String),
    Formatted {
        text: String,
        #[serde(default)]
        styles: Vec<String>,
    },
    Reference {
        id: String,
    },
}

impl RichText {
    pub fn plain(text: impl Into<String>) -> Self {
        RichText(vec![RichTextElement::Text(text.into())])
    }

    /// Concatenate the textual elements; references carry no text of their own
    /// and are skipped. Hosts that can resolve references should stringify
    /// through their own API instead.
    pub fn to_plain_string(&self) -> String {
        self.0
            .iter()
            .filter_map(|element| match element {
                RichTextElement::Text(text) => Some(text.as_str()),
                RichTextElement::Formatted { text, .. } => Some(text.as_str()),
                RichTextElement::Reference { .. } => None,
            })
            .collect()
    }
}
