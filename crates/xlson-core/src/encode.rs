use tracing::debug;

use crate::bind::{BindRules, translate_bind};
use crate::error::{ConvertError, Result};
use crate::field::{ChoiceIds, EditType, NativeField, RadioOption, Widget};
use crate::question::QuestionType;
use crate::step::{Step, build_step};
use crate::survey::SurveyNode;

const BARCODE_TYPE: &str = "qrcode";
const GPS_DATA_TYPE: &str = "text";

/// Result of dispatching a single survey node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Encoded {
    Field(NativeField),
    /// A group becomes a named step.
    Step { name: String, step: Step },
}

/// Encode a survey node according to its `type`.
///
/// Returns `Ok(None)` for types outside the supported set.
pub fn build_field(node: &SurveyNode) -> Result<Option<Encoded>> {
    let tag = node.require_kind()?;
    let Some(kind) = QuestionType::from_tag(tag) else {
        debug!(node = node.display_name(), tag, "unsupported question type dropped");
        return Ok(None);
    };

    let key = node.require_name()?;
    let widget = match kind {
        QuestionType::Group => {
            return Ok(Some(Encoded::Step {
                name: key.to_string(),
                step: build_step(node)?,
            }));
        }
        QuestionType::Text => edit_text(node, EditType::Name)?,
        QuestionType::Integer => edit_text(node, EditType::Number)?,
        QuestionType::Photo => choose_image(node)?,
        QuestionType::Geopoint => gps(node)?,
        QuestionType::Barcode => barcode(node)?,
        QuestionType::SelectOne => native_radio(node)?,
        QuestionType::SelectMultiple => spinner(node)?,
    };

    let rules = if kind.takes_bind() {
        translate_bind(key, node.bind.as_ref())
    } else {
        BindRules::default()
    };

    Ok(Some(Encoded::Field(NativeField {
        key: key.to_string(),
        openmrs_entity: placeholder(node.openmrs_entity.as_deref()),
        openmrs_entity_id: placeholder(node.openmrs_entity_id.as_deref()),
        openmrs_entity_parent: placeholder(node.openmrs_entity_parent.as_deref()),
        widget,
        v_required: rules.required,
        v_regex: rules.regex,
    })))
}

/// Linkage placeholder from the node's own attribute. A question's `instance`
/// mapping is never consulted here; only choices read theirs.
fn placeholder(own: Option<&str>) -> String {
    own.unwrap_or_default().to_string()
}

fn edit_text(node: &SurveyNode, edit_type: EditType) -> Result<Widget> {
    Ok(Widget::EditText {
        edit_type,
        hint: node.require_label()?.clone(),
    })
}

fn choose_image(node: &SurveyNode) -> Result<Widget> {
    Ok(Widget::ChooseImage {
        upload_button_text: node.require_label()?.clone(),
    })
}

fn gps(node: &SurveyNode) -> Result<Widget> {
    node.require_label()?;
    Ok(Widget::Gps {
        openmrs_data_type: GPS_DATA_TYPE.to_string(),
    })
}

fn barcode(node: &SurveyNode) -> Result<Widget> {
    Ok(Widget::Barcode {
        barcode_type: BARCODE_TYPE.to_string(),
        hint: node.require_label()?.clone(),
        scan_button_text: node.hint.clone(),
    })
}

fn native_radio(node: &SurveyNode) -> Result<Widget> {
    let label = node.require_label()?;
    let question = node.display_name();
    let options = node
        .require_children()?
        .iter()
        .map(|choice| {
            let entity_id =
                choice
                    .instance_entity_id()
                    .ok_or_else(|| ConvertError::MissingChoiceId {
                        question: question.to_string(),
                        choice: choice.display_name().to_string(),
                    })?;
            Ok(RadioOption {
                key: choice.require_name()?.to_string(),
                text: choice.require_label()?.clone(),
                openmrs_entity: String::new(),
                openmrs_entity_id: entity_id.to_string(),
                openmrs_entity_parent: String::new(),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Widget::NativeRadio {
        label: label.clone(),
        options,
    })
}

fn spinner(node: &SurveyNode) -> Result<Widget> {
    let hint = node.require_label()?.clone();
    let choices = node.require_children()?;

    let mut keys = Vec::with_capacity(choices.len());
    let mut values = Vec::with_capacity(choices.len());
    let mut openmrs_choice_ids = ChoiceIds::new();
    for choice in choices {
        let key = choice.require_name()?;
        keys.push(key.to_string());
        values.push(choice.require_label()?.clone());
        // Ids follow their own choice; choices without one are left out.
        if let Some(entity_id) = choice.instance_entity_id() {
            openmrs_choice_ids.insert(key, entity_id);
        }
    }

    Ok(Widget::Spinner {
        hint,
        keys,
        values,
        openmrs_choice_ids,
    })
}
