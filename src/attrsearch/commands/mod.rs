use crate::config::SearchConfig;
use crate::endpoint::SearchRequest;
use crate::filters::ActiveFilterSet;
use crate::model::AttributeFilter;
use crate::ports::Notifier;
use std::path::PathBuf;

pub mod add;
pub mod attributes;
pub mod config;
pub mod list;
pub mod remove;
pub mod reset;
pub mod search;

#[derive(Debug, Clone)]
pub struct SearchPaths {
    pub state_dir: PathBuf,
}

impl SearchPaths {
    pub fn new(state_dir: impl Into<PathBuf>) -> Self {
        Self {
            state_dir: state_dir.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// One row of the schema listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaRow {
    pub name: String,
    pub label: String,
    pub in_use: bool,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub filters: Vec<AttributeFilter>,
    pub schema_rows: Vec<SchemaRow>,
    pub search: Option<SearchRequest>,
    pub config: Option<SearchConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn has_errors(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Error)
    }

    pub fn with_filters(mut self, filters: &ActiveFilterSet) -> Self {
        self.filters = filters.as_slice().to_vec();
        self
    }

    pub fn with_schema_rows(mut self, rows: Vec<SchemaRow>) -> Self {
        self.schema_rows = rows;
        self
    }

    pub fn with_search(mut self, request: SearchRequest) -> Self {
        self.search = Some(request);
        self
    }

    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = Some(config);
        self
    }
}

impl Notifier for CmdResult {
    fn notify(&mut self, message: CmdMessage) {
        self.add_message(message);
    }
}
