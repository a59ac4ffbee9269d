use super::FilterStore;
use crate::error::{Result, SearchError};
use crate::filters::ActiveFilterSet;
use crate::model::AttributeFilter;
use std::fs;
use std::path::{Path, PathBuf};

const FILTERS_FILENAME: &str = "filters.json";

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn filters_path(&self) -> PathBuf {
        self.root.join(FILTERS_FILENAME)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root)?;
        }
        Ok(())
    }
}

impl FilterStore for FileStore {
    fn load_filters(&self) -> Result<ActiveFilterSet> {
        let path = self.filters_path();
        if !path.exists() {
            return Ok(ActiveFilterSet::new());
        }

        let content = fs::read_to_string(&path)?;
        let raw: Vec<AttributeFilter> = serde_json::from_str(&content)?;
        ActiveFilterSet::try_from(raw).map_err(|err| {
            SearchError::Store(format!("{} is inconsistent: {}", path.display(), err))
        })
    }

    fn save_filters(&mut self, filters: &ActiveFilterSet) -> Result<()> {
        self.ensure_dir()?;
        let content = serde_json::to_string_pretty(filters)?;
        fs::write(self.filters_path(), content)?;
        tracing::debug!(path = %self.filters_path().display(), count = filters.len(), "filters saved");
        Ok(())
    }
}
