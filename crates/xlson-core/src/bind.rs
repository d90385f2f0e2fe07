use regex::Regex;
use tracing::warn;

use crate::field::BindRule;
use crate::survey::Bind;

const REGEX_PREFIX: &str = "regex";

/// `v_required` and `v_regex` derived from a question's bind clause.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BindRules {
    pub required: Option<BindRule>,
    pub regex: Option<BindRule>,
}

/// Translate the `required` and `constraint` directives of a bind clause.
///
/// Unrecognized `required` literals and constraints that are not written as
/// `regex(., '<pattern>')` produce no rule.
pub fn translate_bind(question: &str, bind: Option<&Bind>) -> BindRules {
    let Some(bind) = bind else {
        return BindRules::default();
    };

    let required = bind
        .required
        .as_deref()
        .and_then(required_literal)
        .map(|value| BindRule {
            value: value.to_string(),
            err: bind.required_msg.clone(),
        });

    let regex = bind
        .constraint
        .as_deref()
        .and_then(|constraint| regex_pattern(question, constraint))
        .map(|pattern| BindRule {
            value: pattern.to_string(),
            err: bind.constraint_msg.clone(),
        });

    BindRules { required, regex }
}

fn required_literal(value: &str) -> Option<&'static str> {
    match value {
        "yes" | "Yes" => Some("true"),
        "no" | "No" => Some("false"),
        _ => None,
    }
}

/// Text between the first pair of single quotes of a `regex(...)` constraint.
fn regex_pattern<'a>(question: &str, constraint: &'a str) -> Option<&'a str> {
    if !constraint.starts_with(REGEX_PREFIX) {
        warn!(
            question,
            constraint, "constraint is not a regex() expression; no v_regex emitted"
        );
        return None;
    }

    let Some(pattern) = constraint.split('\'').nth(1) else {
        warn!(
            question,
            constraint, "regex constraint has no quoted pattern; no v_regex emitted"
        );
        return None;
    };

    if let Err(err) = Regex::new(pattern) {
        warn!(question, pattern, %err, "regex constraint pattern does not compile");
    }

    Some(pattern)
}
