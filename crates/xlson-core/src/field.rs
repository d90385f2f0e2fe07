use std::fmt;

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

use crate::label::Label;

/// A single native form field.
///
/// The linkage placeholders and `key` are shared by every widget; the
/// widget contributes `type` plus its own keys through `#[serde(flatten)]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NativeField {
    pub key: String,
    pub openmrs_entity: String,
    pub openmrs_entity_id: String,
    pub openmrs_entity_parent: String,
    #[serde(flatten)]
    pub widget: Widget,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub v_required: Option<BindRule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub v_regex: Option<BindRule>,
}

/// Widget-specific part of a field, tagged by its output `type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Widget {
    /// Shared by `text` and `integer` questions.
    EditText { edit_type: EditType, hint: Label },
    ChooseImage {
        #[serde(rename = "uploadButtonText")]
        upload_button_text: Label,
    },
    Gps { openmrs_data_type: String },
    Barcode {
        barcode_type: String,
        hint: Label,
        #[serde(rename = "scanButtonText")]
        scan_button_text: Option<Label>,
    },
    NativeRadio {
        label: Label,
        options: Vec<RadioOption>,
    },
    Spinner {
        hint: Label,
        keys: Vec<String>,
        values: Vec<Label>,
        openmrs_choice_ids: ChoiceIds,
    },
}

impl Widget {
    /// Output `type` tag of the widget.
    pub fn type_tag(&self) -> &'static str {
        match self {
            Widget::EditText { .. } => "edit_text",
            Widget::ChooseImage { .. } => "choose_image",
            Widget::Gps { .. } => "gps",
            Widget::Barcode { .. } => "barcode",
            Widget::NativeRadio { .. } => "native_radio",
            Widget::Spinner { .. } => "spinner",
        }
    }
}

/// Keyboard mode of an `edit_text` widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditType {
    Name,
    Number,
}

/// One entry of a `native_radio` widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RadioOption {
    pub key: String,
    pub text: Label,
    pub openmrs_entity: String,
    pub openmrs_entity_id: String,
    pub openmrs_entity_parent: String,
}

/// A translated bind clause: `{ "value": ..., "err": ... }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BindRule {
    pub value: String,
    pub err: Option<Label>,
}

/// Choice name to concept id, kept in the order the choices were listed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChoiceIds(Vec<(String, String)>);

impl ChoiceIds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the id of a choice; a repeated choice name replaces its id in place.
    pub fn insert(&mut self, choice: impl Into<String>, entity_id: impl Into<String>) {
        let choice = choice.into();
        let entity_id = entity_id.into();
        match self.0.iter_mut().find(|(name, _)| *name == choice) {
            Some(entry) => entry.1 = entity_id,
            None => self.0.push((choice, entity_id)),
        }
    }

    pub fn get(&self, choice: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(name, _)| name == choice)
            .map(|(_, entity_id)| entity_id.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0
            .iter()
            .map(|(choice, entity_id)| (choice.as_str(), entity_id.as_str()))
    }
}

impl Serialize for ChoiceIds {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (choice, entity_id) in &self.0 {
            map.serialize_entry(choice, entity_id)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ChoiceIds {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ChoiceIdsVisitor;

        impl<'de> Visitor<'de> for ChoiceIdsVisitor {
            type Value = ChoiceIds;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of choice names to concept ids")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<ChoiceIds, A::Error> {
                let mut ids = ChoiceIds::new();
                while let Some((choice, entity_id)) = access.next_entry::<String, String>()? {
                    ids.insert(choice, entity_id);
                }
                Ok(ids)
            }
        }

        deserializer.deserialize_map(ChoiceIdsVisitor)
    }
}
