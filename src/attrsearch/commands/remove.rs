use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::FilterStore;

/// Removes the filters keyed by `names`, like closing their chips.
pub fn run<S: FilterStore, N: AsRef<str>>(store: &mut S, names: &[N]) -> Result<CmdResult> {
    let mut filters = store.load_filters()?;
    let mut result = CmdResult::default();
    let mut changed = false;

    for name in names {
        let name = name.as_ref();
        match filters.remove(name) {
            Some(removed) => {
                changed = true;
                result.add_message(CmdMessage::success(format!(
                    "Filter removed: {} = {}",
                    removed.label(),
                    removed.value
                )));
            }
            None => result.add_message(CmdMessage::warning(format!(
                "No active filter for key: {}",
                name
            ))),
        }
    }

    if changed {
        store.save_filters(&filters)?;
    }
    Ok(result.with_filters(&filters))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::filters::ActiveFilterSet;
    use crate::model::AttributeFilter;
    use crate::store::memory::InMemoryStore;

    fn store_with(names: &[&str]) -> InMemoryStore {
        let mut set = ActiveFilterSet::new();
        for name in names {
            set.try_push(AttributeFilter::new(*name, "v")).unwrap();
        }
        InMemoryStore::with_filters(set)
    }

    #[test]
    fn removes_named_filters_keeping_order() {
        let mut store = store_with(&["email", "dept", "badge"]);

        let result = run(&mut store, &["dept"]).unwrap();

        let names: Vec<_> = result.filters.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["email", "badge"]);
        assert_eq!(store.saves(), 1);
    }

    #[test]
    fn unknown_key_warns_without_saving() {
        let mut store = store_with(&["email"]);

        let result = run(&mut store, &["phone"]).unwrap();

        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert_eq!(store.saves(), 0);
        assert_eq!(result.filters.len(), 1);
    }
}
