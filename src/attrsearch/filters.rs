//! The active filter set.
//!
//! An ordered list of committed [`AttributeFilter`]s. Insertion order is the
//! chip order and the order pairs are sent in the search query. The set owns
//! its invariants: every filter has a non-empty name and value, and no two
//! filters share a name.

use crate::model::AttributeFilter;
use crate::validation::ValidationError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<AttributeFilter>", into = "Vec<AttributeFilter>")]
pub struct ActiveFilterSet {
    filters: Vec<AttributeFilter>,
}

impl ActiveFilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AttributeFilter> {
        self.filters.iter()
    }

    pub fn as_slice(&self) -> &[AttributeFilter] {
        &self.filters
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.filters.iter().any(|f| f.name == name)
    }

    pub fn get(&self, name: &str) -> Option<&AttributeFilter> {
        self.filters.iter().find(|f| f.name == name)
    }

    /// Appends `filter`, leaving the set untouched if it would break an invariant.
    pub fn try_push(&mut self, filter: AttributeFilter) -> Result<(), ValidationError> {
        if filter.name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if self.contains_name(&filter.name) {
            return Err(ValidationError::DuplicateName);
        }
        if filter.value.is_empty() {
            return Err(ValidationError::EmptyValue);
        }
        self.filters.push(filter);
        Ok(())
    }

    /// Removes the filter keyed by `name`, keeping the order of the rest.
    pub fn remove(&mut self, name: &str) -> Option<AttributeFilter> {
        let pos = self.filters.iter().position(|f| f.name == name)?;
        Some(self.filters.remove(pos))
    }

    pub fn clear(&mut self) {
        self.filters.clear();
    }

    /// Renders the set as the users endpoint `q` parameter: `name:value`
    /// pairs separated by a single space.
    pub fn query(&self) -> String {
        self.filters
            .iter()
            .map(|f| format!("{}:{}", f.name, f.value))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl TryFrom<Vec<AttributeFilter>> for ActiveFilterSet {
    type Error = ValidationError;

    fn try_from(filters: Vec<AttributeFilter>) -> Result<Self, Self::Error> {
        let mut set = ActiveFilterSet::new();
        for filter in filters {
            set.try_push(filter)?;
        }
        Ok(set)
    }
}

impl From<ActiveFilterSet> for Vec<AttributeFilter> {
    fn from(set: ActiveFilterSet) -> Self {
        set.filters
    }
}

impl<'a> IntoIterator for &'a ActiveFilterSet {
    type Item = &'a AttributeFilter;
    type IntoIter = std::slice::Iter<'a, AttributeFilter>;

    fn into_iter(self) -> Self::IntoIter {
        self.filters.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set_of(pairs: &[(&str, &str)]) -> ActiveFilterSet {
        let filters = pairs
            .iter()
            .map(|(n, v)| AttributeFilter::new(*n, *v))
            .collect::<Vec<_>>();
        ActiveFilterSet::try_from(filters).unwrap()
    }

    #[test]
    fn push_keeps_insertion_order() {
        let set = set_of(&[("email", "a@b.com"), ("dept", "eng"), ("badge", "7")]);
        let names: Vec<_> = set.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["email", "dept", "badge"]);
    }

    #[test]
    fn push_rejects_duplicates_without_mutating() {
        let mut set = set_of(&[("email", "a@b.com")]);
        let err = set.try_push(AttributeFilter::new("email", "x@y.com"));
        assert_eq!(err, Err(ValidationError::DuplicateName));
        assert_eq!(set, set_of(&[("email", "a@b.com")]));
    }

    #[test]
    fn push_rejects_empty_fields() {
        let mut set = ActiveFilterSet::new();
        assert_eq!(
            set.try_push(AttributeFilter::new("", "x")),
            Err(ValidationError::EmptyName)
        );
        assert_eq!(
            set.try_push(AttributeFilter::new("email", "")),
            Err(ValidationError::EmptyValue)
        );
        assert!(set.is_empty());
    }

    #[test]
    fn remove_drops_one_chip() {
        let mut set = set_of(&[("email", "a@b.com"), ("dept", "eng"), ("badge", "7")]);
        let removed = set.remove("dept").unwrap();
        assert_eq!(removed.value, "eng");
        assert_eq!(set.query(), "email:a@b.com badge:7");
        assert!(set.remove("dept").is_none());
    }

    #[test]
    fn clear_empties_any_set() {
        let mut set = set_of(&[("email", "a@b.com"), ("dept", "eng")]);
        set.clear();
        assert!(set.is_empty());

        set.clear();
        assert!(set.is_empty());
    }

    #[test]
    fn query_joins_pairs_with_spaces() {
        assert_eq!(ActiveFilterSet::new().query(), "");
        let set = set_of(&[("email", "a@b.com"), ("dept", "r&d")]);
        assert_eq!(set.query(), "email:a@b.com dept:r&d");
    }

    #[test]
    fn deserializing_enforces_invariants() {
        let ok: ActiveFilterSet =
            serde_json::from_str(r#"[{"name":"email","value":"a@b.com"}]"#).unwrap();
        assert_eq!(ok.len(), 1);

        let dup = serde_json::from_str::<ActiveFilterSet>(
            r#"[{"name":"email","value":"a"},{"name":"email","value":"b"}]"#,
        );
        assert!(dup.is_err());
    }
}
