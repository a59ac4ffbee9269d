//! Validation rules for a draft attribute filter.
//!
//! Rules:
//! - The attribute key must not be empty
//! - The attribute key must not already be used by an active filter
//! - The value must not be empty
//!
//! Validators are pure: they look at the draft and the active set and return
//! a [`Validation`]. Where the outcome is shown (inline slot, notification)
//! is decided by the form.

use crate::filters::ActiveFilterSet;
use crate::model::AttributeDraft;
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Specify a attribute key")]
    EmptyName,

    #[error("Attribute key already in use")]
    DuplicateName,

    #[error("Specify a attribute value")]
    EmptyValue,
}

impl ValidationError {
    /// Short machine-readable kind, `"empty"` or `"conflict"`.
    pub fn kind(&self) -> &'static str {
        match self {
            ValidationError::EmptyName | ValidationError::EmptyValue => "empty",
            ValidationError::DuplicateName => "conflict",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validation {
    Valid,
    Invalid(ValidationError),
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        matches!(self, Validation::Valid)
    }

    pub fn error(&self) -> Option<ValidationError> {
        match self {
            Validation::Valid => None,
            Validation::Invalid(err) => Some(*err),
        }
    }
}

pub fn validate_name(draft: &AttributeDraft, filters: &ActiveFilterSet) -> Validation {
    if draft.name.is_empty() {
        Validation::Invalid(ValidationError::EmptyName)
    } else if filters.contains_name(&draft.name) {
        Validation::Invalid(ValidationError::DuplicateName)
    } else {
        Validation::Valid
    }
}

pub fn validate_value(draft: &AttributeDraft) -> Validation {
    if draft.value.is_empty() {
        Validation::Invalid(ValidationError::EmptyValue)
    } else {
        Validation::Valid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AttributeFilter;

    fn draft(name: &str, value: &str) -> AttributeDraft {
        AttributeDraft::new(name, value)
    }

    fn active(names: &[&str]) -> ActiveFilterSet {
        let mut set = ActiveFilterSet::new();
        for name in names {
            set.try_push(AttributeFilter::new(*name, "v")).unwrap();
        }
        set
    }

    #[test]
    fn empty_name_wins_regardless_of_value_or_filters() {
        for filters in [active(&[]), active(&["email", "dept"])] {
            for value in ["", "x"] {
                assert_eq!(
                    validate_name(&draft("", value), &filters),
                    Validation::Invalid(ValidationError::EmptyName)
                );
            }
        }
    }

    #[test]
    fn name_already_active_is_a_conflict() {
        let filters = active(&["email", "dept"]);
        let result = validate_name(&draft("dept", "x"), &filters);
        assert_eq!(result, Validation::Invalid(ValidationError::DuplicateName));
        assert_eq!(result.error().unwrap().kind(), "conflict");
    }

    #[test]
    fn name_match_is_case_sensitive() {
        let filters = active(&["email"]);
        assert!(validate_name(&draft("Email", "x"), &filters).is_valid());
    }

    #[test]
    fn fresh_name_is_valid() {
        assert!(validate_name(&draft("email", ""), &active(&["dept"])).is_valid());
    }

    #[test]
    fn value_must_not_be_empty() {
        assert_eq!(
            validate_value(&draft("email", "")),
            Validation::Invalid(ValidationError::EmptyValue)
        );
        assert!(validate_value(&draft("", "a@b.com")).is_valid());
    }

    #[test]
    fn messages_match_the_console_wording() {
        assert_eq!(ValidationError::EmptyName.to_string(), "Specify a attribute key");
        assert_eq!(
            ValidationError::DuplicateName.to_string(),
            "Attribute key already in use"
        );
        assert_eq!(ValidationError::EmptyValue.to_string(), "Specify a attribute value");
        assert_eq!(ValidationError::EmptyValue.kind(), "empty");
    }
}
