use std::collections::HashSet;

use serde::ser::{Serialize, SerializeMap, Serializer};
use tracing::{debug, info};

use crate::encode::{Encoded, build_field};
use crate::error::{ConvertError, Result};
use crate::label::Label;
use crate::question::QuestionType;
use crate::step::Step;
use crate::survey::SurveyNode;

/// Name of the metadata group the parser appends to every survey.
pub const META_GROUP: &str = "meta";

/// The native form document: an encounter type plus one step per group.
///
/// Serializes as a flat object, `encounter_type` first and steps in survey
/// order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativeForm {
    pub encounter_type: Label,
    pub steps: Vec<(String, Step)>,
}

impl NativeForm {
    pub fn step(&self, name: &str) -> Option<&Step> {
        self.steps
            .iter()
            .find(|(step_name, _)| step_name == name)
            .map(|(_, step)| step)
    }
}

impl Serialize for NativeForm {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.steps.len() + 1))?;
        map.serialize_entry("encounter_type", &self.encounter_type)?;
        for (name, step) in &self.steps {
            map.serialize_entry(name, step)?;
        }
        map.end()
    }
}

/// Convert a parsed survey into a native form.
pub fn create_native_form(survey: &SurveyNode) -> Result<NativeForm> {
    survey.require_name()?;
    let title = survey.require_title()?;
    survey.require_kind()?;
    let children = survey
        .children
        .as_deref()
        .ok_or_else(|| ConvertError::MissingAttribute {
            node: survey.display_name().to_string(),
            attribute: "children",
        })?;
    if children.len() <= 1 {
        return Err(ConvertError::SurveyTooShort {
            found: children.len(),
        });
    }
    if children[0].is_empty() {
        return Err(ConvertError::EmptyFirstChild);
    }

    let mut seen = HashSet::new();
    let mut steps = Vec::new();
    for child in children {
        let is_group = child.kind.as_deref() == Some(QuestionType::Group.as_str());
        if !is_group || child.name.as_deref() == Some(META_GROUP) {
            continue;
        }
        if let Some(Encoded::Step { name, step }) = build_field(child)? {
            if !seen.insert(name.clone()) {
                return Err(ConvertError::DuplicateStep { name });
            }
            debug!(step = %name, fields = step.fields.len(), "assembled step");
            steps.push((name, step));
        }
    }

    info!(
        encounter_type = %title,
        steps = steps.len(),
        "native form assembled"
    );
    Ok(NativeForm {
        encounter_type: title.clone(),
        steps,
    })
}
