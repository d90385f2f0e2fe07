use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Human readable text from the survey.
///
/// Single-language forms carry a plain string; multi-language forms carry a
/// map from language name to text. Either form is copied to the output as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Label {
    Text(String),
    Translations(BTreeMap<String, String>),
}

impl Label {
    /// The plain text, when the label is not translated.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Label::Text(text) => Some(text),
            Label::Translations(_) => None,
        }
    }
}

impl From<&str> for Label {
    fn from(text: &str) -> Self {
        Label::Text(text.to_string())
    }
}

impl From<String> for Label {
    fn from(text: String) -> Self {
        Label::Text(text)
    }
}

impl PartialEq<str> for Label {
    fn eq(&self, other: &str) -> bool {
        self.as_text() == Some(other)
    }
}

impl PartialEq<&str> for Label {
    fn eq(&self, other: &&str) -> bool {
        self.as_text() == Some(*other)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Text(text) => f.write_str(text),
            Label::Translations(translations) => {
                let joined = translations
                    .iter()
                    .map(|(language, text)| format!("{language}: {text}"))
                    .collect::<Vec<_>>()
                    .join(" / ");
                f.write_str(&joined)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn plain_and_translated_labels_deserialize() {
        let plain: Label = serde_json::from_value(json!("Name?")).expect("plain");
        assert_eq!(plain, "Name?");

        let translated: Label =
            serde_json::from_value(json!({ "English": "Name?", "French": "Nom?" }))
                .expect("translated");
        assert_eq!(translated.as_text(), None);
        assert_eq!(translated.to_string(), "English: Name? / French: Nom?");
        assert_eq!(
            serde_json::to_value(&translated).expect("serialize"),
            json!({ "English": "Name?", "French": "Nom?" })
        );
    }
}
