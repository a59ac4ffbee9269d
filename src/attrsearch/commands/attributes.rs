use crate::commands::{CmdMessage, CmdResult, SchemaRow};
use crate::error::Result;
use crate::labels::{resolve_label, LabelResolver};
use crate::model::AttributeSchema;
use crate::store::FilterStore;

/// Lists the selectable profile attributes, flagging keys already filtered on.
pub fn run<S: FilterStore>(
    store: &S,
    schema: Option<&AttributeSchema>,
    resolver: &dyn LabelResolver,
) -> Result<CmdResult> {
    let filters = store.load_filters()?;

    let Some(schema) = schema else {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info(
            "No user profile configured; attribute keys are free text",
        ));
        return Ok(result);
    };

    let rows = schema
        .attributes
        .iter()
        .map(|def| SchemaRow {
            name: def.name.clone(),
            label: resolve_label(def, resolver),
            in_use: filters.contains_name(&def.name),
        })
        .collect();

    Ok(CmdResult::default().with_schema_rows(rows))
}
