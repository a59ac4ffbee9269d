//! # Attrsearch Architecture
//!
//! Attrsearch is the **attribute search form** of an identity admin console,
//! as a library. An operator builds up a set of `name:value` filters, each
//! checked before it is accepted, and hands the set to a user search. The
//! CLI in this crate is one client of that library; a web console would be
//! another.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders chips and messages             │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, holds schema/catalog/config   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Load filters, drive the form, save, report CmdResult     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (form, filters, validation, labels, endpoint)         │
//! │  - Pure state and rules, collaborators injected via ports   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - FilterStore trait: FileStore, InMemoryStore              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No I/O in the Core
//!
//! The form never prints, never blocks and never calls the admin API. User
//! feedback goes through a [`ports::Notifier`], searches through a
//! [`ports::SearchPort`]. Validation failures are values
//! ([`validation::ValidationError`]), not errors: the user fixes the draft
//! and tries again.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: One module per operation
//! - [`form`]: Draft, error slots and the add/reset/search transitions
//! - [`filters`]: The ordered, duplicate-free active filter set
//! - [`validation`]: Key and value rules
//! - [`labels`]: `${key}` label resolution
//! - [`model`]: Filters and the attribute schema
//! - [`endpoint`]: Users search request building
//! - [`ports`]: Notifier and search collaborators
//! - [`store`]: Persistence of the active set
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod filters;
pub mod form;
pub mod labels;
pub mod model;
pub mod ports;
pub mod store;
pub mod validation;
