use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::form::{AttributeSearchForm, SubmitVia};
use crate::labels::LabelResolver;
use crate::model::AttributeSchema;
use crate::store::FilterStore;

/// Adds one filter to the stored set.
///
/// With a schema, `key` must name a profile attribute (by name or by its
/// resolved label); without one it is taken as free text. Rejections are
/// reported as error messages and leave the store untouched.
pub fn run<S: FilterStore>(
    store: &mut S,
    key: &str,
    value: &str,
    schema: Option<&AttributeSchema>,
    resolver: &dyn LabelResolver,
) -> Result<CmdResult> {
    let mut filters = store.load_filters()?;
    let mut result = CmdResult::default();

    let mut form = match schema {
        Some(schema) if !key.is_empty() => {
            let Some(entry) = schema.find(key, resolver).cloned() else {
                result.add_message(CmdMessage::error(format!(
                    "Unknown attribute: {} (see `attrsearch attributes`)",
                    key
                )));
                return Ok(result.with_filters(&filters));
            };
            let mut form = AttributeSearchForm::with_schema(schema.clone());
            form.select_schema_attribute(&entry, resolver, &filters);
            form
        }
        _ => {
            let mut form = AttributeSearchForm::new();
            form.set_name(key, &filters);
            form
        }
    };
    form.set_value(value);

    if form
        .submit(SubmitVia::Button, &mut filters, &mut result)
        .is_ok()
    {
        store.save_filters(&filters)?;
        if let Some(added) = filters.iter().last() {
            result.add_message(CmdMessage::success(format!(
                "Filter added: {} = {}",
                added.label(),
                added.value
            )));
        }
    }

    Ok(result.with_filters(&filters))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::labels::{MessageCatalog, PassthroughResolver};
    use crate::model::AttributeDefinition;
    use crate::store::memory::InMemoryStore;

    fn schema() -> AttributeSchema {
        AttributeSchema::new(vec![
            AttributeDefinition::new("email", Some("${email}")),
            AttributeDefinition::new("department", Some("Department")),
        ])
    }

    #[test]
    fn adds_free_text_filter_and_saves() {
        let mut store = InMemoryStore::new();

        let result = run(&mut store, "email", "a@b.com", None, &PassthroughResolver).unwrap();

        assert_eq!(result.filters.len(), 1);
        assert_eq!(result.filters[0].name, "email");
        assert_eq!(result.filters[0].value, "a@b.com");
        assert_eq!(store.saves(), 1);
        assert_eq!(store.load_filters().unwrap().len(), 1);
        assert!(matches!(result.messages[0].level, MessageLevel::Success));
    }

    #[test]
    fn rejection_does_not_touch_the_store() {
        let mut store = InMemoryStore::new();
        run(&mut store, "email", "a@b.com", None, &PassthroughResolver).unwrap();

        let result = run(&mut store, "email", "x@y.com", None, &PassthroughResolver).unwrap();

        assert!(result.has_errors());
        assert_eq!(result.messages[0].content, "Attribute key already in use");
        assert_eq!(store.saves(), 1);
        assert_eq!(store.load_filters().unwrap().query(), "email:a@b.com");
    }

    #[test]
    fn empty_key_and_value_report_both() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store, "", "", Some(&schema()), &PassthroughResolver).unwrap();

        let contents: Vec<_> = result.messages.iter().map(|m| m.content.as_str()).collect();
        assert_eq!(
            contents,
            vec!["Specify a attribute key", "Specify a attribute value"]
        );
        assert_eq!(store.saves(), 0);
    }

    #[test]
    fn schema_key_is_resolved_to_entry() {
        let mut store = InMemoryStore::new();
        let catalog = MessageCatalog::from_pairs([("email", "Email")]);

        let result = run(&mut store, "Email", "a@b.com", Some(&schema()), &catalog).unwrap();

        assert!(!result.has_errors());
        assert_eq!(result.filters[0].name, "email");
        assert_eq!(result.filters[0].display_name, "Email");
        assert_eq!(result.messages[0].content, "Filter added: Email = a@b.com");
    }

    #[test]
    fn unknown_schema_key_is_an_error() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store, "phone", "123", Some(&schema()), &PassthroughResolver).unwrap();

        assert!(result.has_errors());
        assert!(result.messages[0].content.starts_with("Unknown attribute: phone"));
        assert!(result.filters.is_empty());
        assert_eq!(store.saves(), 0);
    }
}
