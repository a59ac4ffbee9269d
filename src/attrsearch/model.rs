use crate::error::Result;
use crate::labels::{resolve_label, LabelResolver};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A committed name/value pair narrowing a user search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeFilter {
    pub name: String,
    #[serde(default)]
    pub display_name: String,
    pub value: String,
}

impl AttributeFilter {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            display_name: String::new(),
            value: value.into(),
        }
    }

    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = display_name.into();
        self
    }

    /// Label shown on the filter chip.
    pub fn label(&self) -> &str {
        if self.display_name.is_empty() {
            &self.name
        } else {
            &self.display_name
        }
    }
}

/// The not-yet-validated candidate filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeDraft {
    pub name: String,
    pub display_name: String,
    pub value: String,
}

impl AttributeDraft {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            display_name: String::new(),
            value: value.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.display_name.is_empty() && self.value.is_empty()
    }

    pub(crate) fn to_filter(&self) -> AttributeFilter {
        AttributeFilter {
            name: self.name.clone(),
            display_name: self.display_name.clone(),
            value: self.value.clone(),
        }
    }
}

/// One attribute declared by the user profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeDefinition {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

impl AttributeDefinition {
    pub fn new(name: impl Into<String>, display_name: Option<&str>) -> Self {
        Self {
            name: name.into(),
            display_name: display_name.map(str::to_string),
        }
    }
}

/// Catalog of known attributes, read from a user-profile document.
///
/// Only the `attributes` array is read; everything else in the profile
/// (groups, validations, permissions) is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeSchema {
    #[serde(default)]
    pub attributes: Vec<AttributeDefinition>,
}

impl AttributeSchema {
    pub fn new(attributes: Vec<AttributeDefinition>) -> Self {
        Self { attributes }
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let schema: AttributeSchema = serde_json::from_str(&content)?;
        Ok(schema)
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Looks an entry up by attribute name, then by its resolved label.
    pub fn find(&self, key: &str, resolver: &dyn LabelResolver) -> Option<&AttributeDefinition> {
        self.attributes
            .iter()
            .find(|def| def.name == key)
            .or_else(|| {
                self.attributes
                    .iter()
                    .find(|def| resolve_label(def, resolver) == key)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::labels::{MessageCatalog, PassthroughResolver};

    const PROFILE: &str = r#"{
        "attributes": [
            { "name": "username", "displayName": "${username}", "validations": {} },
            { "name": "email", "displayName": "${email}" },
            { "name": "department", "displayName": "Department" },
            { "name": "badge" }
        ],
        "groups": [{ "name": "user-metadata" }]
    }"#;

    #[test]
    fn parses_profile_and_ignores_unknown_fields() {
        let schema: AttributeSchema = serde_json::from_str(PROFILE).unwrap();
        assert_eq!(schema.attributes.len(), 4);
        assert_eq!(schema.attributes[0].display_name.as_deref(), Some("${username}"));
        assert_eq!(schema.attributes[3].display_name, None);
    }

    #[test]
    fn profile_without_attributes_is_empty() {
        let schema: AttributeSchema = serde_json::from_str("{}").unwrap();
        assert!(schema.is_empty());
    }

    #[test]
    fn find_prefers_name_then_label() {
        let schema: AttributeSchema = serde_json::from_str(PROFILE).unwrap();
        let catalog = MessageCatalog::from_pairs([("email", "Email address")]);

        assert_eq!(schema.find("email", &catalog).unwrap().name, "email");
        assert_eq!(schema.find("Email address", &catalog).unwrap().name, "email");
        assert_eq!(schema.find("Department", &PassthroughResolver).unwrap().name, "department");
        assert!(schema.find("phone", &PassthroughResolver).is_none());
    }

    #[test]
    fn filter_label_falls_back_to_name() {
        let plain = AttributeFilter::new("email", "a@b.com");
        assert_eq!(plain.label(), "email");

        let labeled = plain.with_display_name("Email");
        assert_eq!(labeled.label(), "Email");
    }

    #[test]
    fn draft_commits_as_filter() {
        let mut draft = AttributeDraft::new("email", "a@b.com");
        assert!(!draft.is_empty());
        draft.display_name = "Email".into();
        assert_eq!(
            draft.to_filter(),
            AttributeFilter::new("email", "a@b.com").with_display_name("Email")
        );
        assert!(AttributeDraft::default().is_empty());
    }

    #[test]
    fn filter_uses_camel_case_on_the_wire() {
        let filter = AttributeFilter::new("email", "a@b.com").with_display_name("Email");
        let json = serde_json::to_string(&filter).unwrap();
        assert!(json.contains("\"displayName\":\"Email\""));

        let parsed: AttributeFilter =
            serde_json::from_str(r#"{"name":"email","value":"a@b.com"}"#).unwrap();
        assert_eq!(parsed, AttributeFilter::new("email", "a@b.com"));
    }
}
