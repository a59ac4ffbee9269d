use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::form::AttributeSearchForm;
use crate::store::FilterStore;

/// The form's reset button: drops every active filter.
pub fn run<S: FilterStore>(store: &mut S) -> Result<CmdResult> {
    let mut filters = store.load_filters()?;
    let removed = filters.len();

    let mut form = AttributeSearchForm::new();
    form.reset_all(&mut filters);
    store.save_filters(&filters)?;

    let message = match removed {
        0 => CmdMessage::info("No active filters"),
        1 => CmdMessage::success("1 filter cleared"),
        n => CmdMessage::success(format!("{} filters cleared", n)),
    };
    let mut result = CmdResult::default().with_filters(&filters);
    result.add_message(message);
    Ok(result)
}
