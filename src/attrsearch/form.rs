//! # Attribute Search Form
//!
//! State machine behind the "search users by attribute" form.
//!
//! The form owns only transient state: the draft being typed, one error slot
//! per field, and whether the schema selection list is open. The committed
//! [`ActiveFilterSet`] belongs to whoever embeds the form; the form only
//! proposes additions to it.
//!
//! ## Validation Flow
//!
//! - Editing a field (`set_name`, `set_value`, `select_schema_attribute`)
//!   re-validates that field into its error slot. Nothing is announced yet.
//! - `add_filter` validates both fields, never stopping at the first
//!   failure, so every problem is reported at once. On failure each message
//!   is sent to the [`Notifier`] and the filter set is left untouched. On
//!   success the draft is appended and cleared.
//! - Enter and the add button both go through `submit`, which is just
//!   `add_filter`.

use crate::commands::CmdMessage;
use crate::filters::ActiveFilterSet;
use crate::labels::{resolve_label, LabelResolver};
use crate::model::{AttributeDefinition, AttributeDraft, AttributeSchema};
use crate::ports::{Notifier, SearchPort};
use crate::validation::{validate_name, validate_value, ValidationError};
use std::fmt;

/// Inline error slots, one per field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<ValidationError>,
    pub value: Option<ValidationError>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.value.is_none()
    }

    /// Outstanding errors, name first.
    pub fn to_vec(&self) -> Vec<ValidationError> {
        self.name.into_iter().chain(self.value).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitVia {
    EnterKey,
    Button,
}

/// A failed add: every validation error that was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddRejected {
    pub errors: Vec<ValidationError>,
}

impl fmt::Display for AddRejected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self.errors.iter().map(|e| e.to_string()).collect();
        write!(f, "{}", messages.join("; "))
    }
}

impl std::error::Error for AddRejected {}

#[derive(Debug, Clone, Default)]
pub struct AttributeSearchForm {
    draft: AttributeDraft,
    errors: FieldErrors,
    select_open: bool,
    schema: Option<AttributeSchema>,
}

impl AttributeSearchForm {
    /// A free-text form: attribute keys are typed, not picked.
    pub fn new() -> Self {
        Self::default()
    }

    /// A form whose keys are picked from `schema`.
    pub fn with_schema(schema: AttributeSchema) -> Self {
        Self {
            schema: Some(schema),
            ..Self::default()
        }
    }

    pub fn draft(&self) -> &AttributeDraft {
        &self.draft
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn schema(&self) -> Option<&AttributeSchema> {
        self.schema.as_ref()
    }

    pub fn is_select_open(&self) -> bool {
        self.select_open
    }

    pub fn set_select_open(&mut self, open: bool) {
        self.select_open = open;
    }

    /// Free-text key entry.
    pub fn set_name(&mut self, name: impl Into<String>, filters: &ActiveFilterSet) {
        self.draft.name = name.into();
        self.draft.display_name.clear();
        self.errors.name = validate_name(&self.draft, filters).error();
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.draft.value = value.into();
        self.errors.value = validate_value(&self.draft).error();
    }

    /// Picks a schema entry as the draft key and closes the selection list.
    ///
    /// A conflicting pick only marks the name slot; the notification waits
    /// until the user actually tries to add the filter.
    pub fn select_schema_attribute(
        &mut self,
        entry: &AttributeDefinition,
        resolver: &dyn LabelResolver,
        filters: &ActiveFilterSet,
    ) {
        self.draft.name = entry.name.clone();
        self.draft.display_name = resolve_label(entry, resolver);
        self.select_open = false;
        self.errors.name = validate_name(&self.draft, filters).error();
        tracing::debug!(
            name = %self.draft.name,
            label = %self.draft.display_name,
            conflict = self.errors.name.is_some(),
            "schema attribute selected"
        );
    }

    /// Validates the draft and, if it passes, appends it to `filters`.
    ///
    /// `filters` is only touched on success.
    pub fn add_filter(
        &mut self,
        filters: &mut ActiveFilterSet,
        notifier: &mut dyn Notifier,
    ) -> Result<(), AddRejected> {
        self.errors.name = validate_name(&self.draft, filters).error();
        self.errors.value = validate_value(&self.draft).error();

        if !self.errors.is_empty() {
            let errors = self.errors.to_vec();
            tracing::warn!(name = %self.draft.name, ?errors, "attribute filter rejected");
            for err in &errors {
                notifier.notify(CmdMessage::error(err.to_string()));
            }
            return Err(AddRejected { errors });
        }

        let filter = self.draft.to_filter();
        if let Err(err) = filters.try_push(filter) {
            // validated above; only reachable if the set changed underneath us
            notifier.notify(CmdMessage::error(err.to_string()));
            return Err(AddRejected { errors: vec![err] });
        }
        tracing::debug!(name = %self.draft.name, total = filters.len(), "attribute filter added");
        self.reset();
        Ok(())
    }

    pub fn submit(
        &mut self,
        via: SubmitVia,
        filters: &mut ActiveFilterSet,
        notifier: &mut dyn Notifier,
    ) -> Result<(), AddRejected> {
        tracing::trace!(?via, "submit");
        self.add_filter(filters, notifier)
    }

    /// Draft and error slots back to their empty defaults.
    pub fn reset(&mut self) {
        self.draft = AttributeDraft::default();
        self.errors = FieldErrors::default();
    }

    pub fn clear_filters(&self, filters: &mut ActiveFilterSet) {
        tracing::debug!(removed = filters.len(), "clearing attribute filters");
        filters.clear();
    }

    /// The reset button: empties both the draft and the active filters.
    pub fn reset_all(&mut self, filters: &mut ActiveFilterSet) {
        self.reset();
        self.clear_filters(filters);
    }

    pub fn can_search(&self, filters: &ActiveFilterSet) -> bool {
        !filters.is_empty()
    }

    /// Runs `port` unless there is nothing to search for.
    pub fn trigger_search<P: SearchPort>(
        &self,
        filters: &ActiveFilterSet,
        port: &mut P,
    ) -> Option<P::Output> {
        if !self.can_search(filters) {
            tracing::debug!("search disabled without filters");
            return None;
        }
        Some(port.search(filters))
    }
}
