//! Display labels for profile attributes.
//!
//! Profiles may declare a label either as plain text (`"Department"`) or as a
//! message bundle key wrapped in `${...}` (`"${email}"`). Bundle keys are
//! handed to a [`LabelResolver`]; which translations exist is the resolver's
//! business, not ours.

use crate::error::Result;
use crate::model::AttributeDefinition;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

pub trait LabelResolver {
    fn resolve(&self, key: &str) -> String;
}

/// Resolves every key to itself.
#[derive(Debug, Default, Clone, Copy)]
pub struct PassthroughResolver;

impl LabelResolver for PassthroughResolver {
    fn resolve(&self, key: &str) -> String {
        key.to_string()
    }
}

/// Key -> text lookup loaded from a flat JSON object. Missing keys resolve to
/// the key itself.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MessageCatalog {
    messages: HashMap<String, String>,
}

impl MessageCatalog {
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            messages: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let messages: HashMap<String, String> = serde_json::from_str(&content)?;
        Ok(Self { messages })
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl LabelResolver for MessageCatalog {
    fn resolve(&self, key: &str) -> String {
        self.messages
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }
}

pub fn is_bundle_key(label: &str) -> bool {
    label.len() > 3 && label.starts_with("${") && label.ends_with('}')
}

/// Strips the `${` `}` wrapper. Labels that are not bundle keys pass through.
pub fn unwrap_key(label: &str) -> &str {
    if is_bundle_key(label) {
        &label[2..label.len() - 1]
    } else {
        label
    }
}

/// Label shown for a profile attribute, falling back to its name.
pub fn resolve_label(definition: &AttributeDefinition, resolver: &dyn LabelResolver) -> String {
    let raw = definition.display_name.as_deref().unwrap_or_default();
    let label = if is_bundle_key(raw) {
        resolver.resolve(unwrap_key(raw))
    } else {
        raw.to_string()
    };

    if label.is_empty() {
        definition.name.clone()
    } else {
        label
    }
}
