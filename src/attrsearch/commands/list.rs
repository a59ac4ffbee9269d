use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::FilterStore;

pub fn run<S: FilterStore>(store: &S) -> Result<CmdResult> {
    let filters = store.load_filters()?;
    Ok(CmdResult::default().with_filters(&filters))
}
