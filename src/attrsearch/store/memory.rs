use super::FilterStore;
use crate::error::Result;
use crate::filters::ActiveFilterSet;

#[derive(Debug, Default)]
pub struct InMemoryStore {
    filters: ActiveFilterSet,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_filters(filters: ActiveFilterSet) -> Self {
        Self { filters, saves: 0 }
    }

    /// Number of `save_filters` calls so far.
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl FilterStore for InMemoryStore {
    fn load_filters(&self) -> Result<ActiveFilterSet> {
        Ok(self.filters.clone())
    }

    fn save_filters(&mut self, filters: &ActiveFilterSet) -> Result<()> {
        self.filters = filters.clone();
        self.saves += 1;
        Ok(())
    }
}
