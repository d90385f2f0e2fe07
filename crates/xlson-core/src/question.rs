use std::fmt;

/// XLSForm question types understood by the converter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuestionType {
    Barcode,
    Geopoint,
    Group,
    Integer,
    Photo,
    SelectOne,
    SelectMultiple,
    Text,
}

impl QuestionType {
    pub const ALL: [QuestionType; 8] = [
        QuestionType::Barcode,
        QuestionType::Geopoint,
        QuestionType::Group,
        QuestionType::Integer,
        QuestionType::Photo,
        QuestionType::Text,
        QuestionType::SelectOne,
        QuestionType::SelectMultiple,
    ];

    /// Resolve an XLSForm type tag. Unknown tags yield `None`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "barcode" => Some(QuestionType::Barcode),
            "geopoint" => Some(QuestionType::Geopoint),
            "group" => Some(QuestionType::Group),
            "integer" => Some(QuestionType::Integer),
            "photo" => Some(QuestionType::Photo),
            "select one" => Some(QuestionType::SelectOne),
            "select all that apply" => Some(QuestionType::SelectMultiple),
            "text" => Some(QuestionType::Text),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionType::Barcode => "barcode",
            QuestionType::Geopoint => "geopoint",
            QuestionType::Group => "group",
            QuestionType::Integer => "integer",
            QuestionType::Photo => "photo",
            QuestionType::SelectOne => "select one",
            QuestionType::SelectMultiple => "select all that apply",
            QuestionType::Text => "text",
        }
    }

    /// Types that may appear as fields of a step.
    pub fn is_leaf(&self) -> bool {
        !matches!(self, QuestionType::Group)
    }

    /// Scalar types get their bind clauses translated.
    pub fn takes_bind(&self) -> bool {
        !matches!(
            self,
            QuestionType::Group | QuestionType::SelectOne | QuestionType::SelectMultiple
        )
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_round_trip_through_the_table() {
        for kind in QuestionType::ALL {
            assert_eq!(QuestionType::from_tag(kind.as_str()), Some(kind));
        }
    }

    #[test]
    fn unknown_and_near_miss_tags_are_rejected() {
        assert_eq!(QuestionType::from_tag("note"), None);
        assert_eq!(QuestionType::from_tag("Text"), None);
        assert_eq!(QuestionType::from_tag("select_one"), None);
        assert_eq!(QuestionType::from_tag(""), None);
    }

    #[test]
    fn groups_are_not_leaves() {
        assert!(!QuestionType::Group.is_leaf());
        assert!(QuestionType::SelectOne.is_leaf());
        assert!(!QuestionType::SelectMultiple.takes_bind());
        assert!(QuestionType::Barcode.takes_bind());
    }
}
