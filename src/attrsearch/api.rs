//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every attrsearch operation, whatever the UI.
//!
//! The facade:
//! - **Dispatches** to the command functions
//! - **Carries the collaborators** a command needs (schema, label catalog,
//!   search endpoint settings) so callers don't thread them through
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no validation of its own and never prints.
//!
//! `SearchApi<S: FilterStore>` is generic over storage:
//! - Production: `SearchApi<FileStore>`
//! - Testing: `SearchApi<InMemoryStore>`

use crate::commands;
use crate::config::SearchConfig;
use crate::endpoint::UsersEndpoint;
use crate::error::Result;
use crate::labels::MessageCatalog;
use crate::model::AttributeSchema;
use crate::store::FilterStore;

pub struct SearchApi<S: FilterStore> {
    store: S,
    paths: commands::SearchPaths,
    config: SearchConfig,
    schema: Option<AttributeSchema>,
    catalog: MessageCatalog,
}

impl<S: FilterStore> SearchApi<S> {
    pub fn new(store: S, paths: commands::SearchPaths) -> Self {
        Self {
            store,
            paths,
            config: SearchConfig::default(),
            schema: None,
            catalog: MessageCatalog::default(),
        }
    }

    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_schema(mut self, schema: AttributeSchema) -> Self {
        self.schema = Some(schema);
        self
    }

    pub fn with_catalog(mut self, catalog: MessageCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn add_filter(&mut self, key: &str, value: &str) -> Result<commands::CmdResult> {
        commands::add::run(
            &mut self.store,
            key,
            value,
            self.schema.as_ref(),
            &self.catalog,
        )
    }

    pub fn remove_filters<N: AsRef<str>>(&mut self, names: &[N]) -> Result<commands::CmdResult> {
        commands::remove::run(&mut self.store, names)
    }

    pub fn list_filters(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn reset_filters(&mut self) -> Result<commands::CmdResult> {
        commands::reset::run(&mut self.store)
    }

    pub fn search(&self) -> Result<commands::CmdResult> {
        let mut endpoint = UsersEndpoint::from_config(&self.config)?;
        commands::search::run(&self.store, &mut endpoint)
    }

    pub fn attributes(&self) -> Result<commands::CmdResult> {
        commands::attributes::run(&self.store, self.schema.as_ref(), &self.catalog)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel, SchemaRow, SearchPaths};
