use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::encode::{Encoded, build_field};
use crate::error::Result;
use crate::field::NativeField;
use crate::label::Label;
use crate::question::QuestionType;
use crate::survey::SurveyNode;

/// A titled section of the native form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub title: Label,
    pub fields: Vec<NativeField>,
}

/// Build a step from a group node, keeping supported leaf questions in order.
pub fn build_step(group: &SurveyNode) -> Result<Step> {
    let title = group.require_label()?.clone();
    let children = group.require_children()?;

    let mut fields = Vec::with_capacity(children.len());
    for child in children {
        let supported = child
            .kind
            .as_deref()
            .and_then(QuestionType::from_tag)
            .is_some_and(|kind| kind.is_leaf());
        if !supported {
            debug!(
                group = group.display_name(),
                child = child.display_name(),
                tag = child.kind.as_deref().unwrap_or_default(),
                "skipping child that is not a supported field"
            );
            continue;
        }
        if let Some(Encoded::Field(field)) = build_field(child)? {
            fields.push(field);
        }
    }

    Ok(Step { title, fields })
}
