use thiserror::Error;

/// Precondition violations raised while converting a survey tree.
///
/// Every variant aborts the whole conversion; nothing is partially emitted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    #[error("'{attribute}' is a required field (node '{node}')")]
    MissingAttribute {
        node: String,
        attribute: &'static str,
    },
    #[error("'{node}' must have at least one child")]
    EmptyChildren { node: String },
    #[error("choice '{choice}' of '{question}' is missing instance::openmrs_entity_id")]
    MissingChoiceId { question: String, choice: String },
    #[error("survey must contain more than one top-level element, found {found}")]
    SurveyTooShort { found: usize },
    #[error("the first top-level element of the survey is empty")]
    EmptyFirstChild,
    #[error("duplicate group name '{name}'")]
    DuplicateStep { name: String },
}

pub type Result<T> = std::result::Result<T, ConvertError>;
