//! # Storage Layer
//!
//! The active filter set is owned by the view that embeds the search form.
//! For the CLI, that view lives across invocations, so the set is persisted
//! through the [`FilterStore`] trait.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, one JSON file in the state
//!   directory
//! - [`memory::InMemoryStore`]: no persistence, for tests
//!
//! ## Storage Format
//!
//! ```text
//! $ATTRSEARCH_HOME/
//! ├── filters.json        # Active filters, in chip order (JSON array)
//! └── config.json         # SearchConfig
//! ```
//!
//! A file that breaks the set's invariants (duplicate keys, empty fields) is
//! reported as an error rather than silently repaired.

use crate::error::Result;
use crate::filters::ActiveFilterSet;

pub mod fs;
pub mod memory;

pub trait FilterStore {
    /// Load the active filters; an absent store is an empty set.
    fn load_filters(&self) -> Result<ActiveFilterSet>;

    /// Replace the stored filters with `filters`.
    fn save_filters(&mut self, filters: &ActiveFilterSet) -> Result<()>;
}
