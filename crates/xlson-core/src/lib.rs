#![allow(missing_docs)]

pub mod bind;
pub mod encode;
pub mod error;
pub mod field;
pub mod form;
pub mod label;
pub mod question;
pub mod step;
pub mod survey;

pub use bind::{BindRules, translate_bind};
pub use encode::{Encoded, build_field};
pub use error::{ConvertError, Result};
pub use field::{BindRule, ChoiceIds, EditType, NativeField, RadioOption, Widget};
pub use form::{META_GROUP, NativeForm, create_native_form};
pub use label::Label;
pub use question::QuestionType;
pub use step::{Step, build_step};
pub use survey::{Bind, Instance, SurveyNode};
