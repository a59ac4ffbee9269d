use crate::commands::{CmdMessage, CmdResult};
use crate::endpoint::SearchRequest;
use crate::error::Result;
use crate::form::AttributeSearchForm;
use crate::ports::SearchPort;
use crate::store::FilterStore;

pub fn run<S, P>(store: &S, port: &mut P) -> Result<CmdResult>
where
    S: FilterStore,
    P: SearchPort<Output = SearchRequest>,
{
    let filters = store.load_filters()?;
    let form = AttributeSearchForm::new();
    let result = CmdResult::default().with_filters(&filters);

    match form.trigger_search(&filters, port) {
        Some(request) => Ok(result.with_search(request)),
        None => {
            let mut result = result;
            result.add_message(CmdMessage::warning(
                "Add at least one attribute filter before searching",
            ));
            Ok(result)
        }
    }
}
