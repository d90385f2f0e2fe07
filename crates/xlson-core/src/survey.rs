use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ConvertError, Result};
use crate::label::Label;

const UNNAMED: &str = "<unnamed>";

/// One node of the parsed XLSForm survey tree.
///
/// All attributes are optional at the serde layer; encoders check the ones
/// they need and report a [`ConvertError::MissingAttribute`] naming the node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SurveyNode {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<Label>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<Label>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<Label>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<SurveyNode>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bind: Option<Bind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance: Option<Instance>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub openmrs_entity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub openmrs_entity_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub openmrs_entity_parent: Option<String>,
    /// Attributes the converter does not read (`control`, `media`, ...).
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// Validation directives attached to a question.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Bind {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constraint: Option<String>,
    #[serde(
        rename = "jr:requiredMsg",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub required_msg: Option<Label>,
    #[serde(
        rename = "jr:constraintMsg",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub constraint_msg: Option<Label>,
    #[serde(flatten)]
    pub other: BTreeMap<String, Value>,
}

/// External linkage ids carried by a node (`instance::*` columns).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Instance {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub openmrs_entity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub openmrs_entity_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub openmrs_entity_parent: Option<String>,
    #[serde(flatten)]
    pub other: BTreeMap<String, Value>,
}

impl SurveyNode {
    /// Name used in error messages; falls back to a placeholder.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(UNNAMED)
    }

    pub fn require_name(&self) -> Result<&str> {
        self.name.as_deref().ok_or_else(|| self.missing("name"))
    }

    pub fn require_label(&self) -> Result<&Label> {
        self.label.as_ref().ok_or_else(|| self.missing("label"))
    }

    pub fn require_title(&self) -> Result<&Label> {
        self.title.as_ref().ok_or_else(|| self.missing("title"))
    }

    pub fn require_kind(&self) -> Result<&str> {
        self.kind.as_deref().ok_or_else(|| self.missing("type"))
    }

    /// Children of a node that needs at least one of them.
    pub fn require_children(&self) -> Result<&[SurveyNode]> {
        let children = self
            .children
            .as_deref()
            .ok_or_else(|| self.missing("children"))?;
        if children.is_empty() {
            return Err(ConvertError::EmptyChildren {
                node: self.display_name().to_string(),
            });
        }
        Ok(children)
    }

    /// `instance::openmrs_entity_id`, if the node carries one.
    pub fn instance_entity_id(&self) -> Option<&str> {
        self.instance
            .as_ref()
            .and_then(|instance| instance.openmrs_entity_id.as_deref())
    }

    /// True when the node carries no attribute at all, known or not.
    pub fn is_empty(&self) -> bool {
        *self == SurveyNode::default()
    }

    fn missing(&self, attribute: &'static str) -> ConvertError {
        ConvertError::MissingAttribute {
            node: self.display_name().to_string(),
            attribute,
        }
    }
}
