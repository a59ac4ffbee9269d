//! # Attrsearch CLI
//!
//! The binary is intentionally thin: the CLI lives in `cli/`, while this file
//! only invokes `cli::run()` and handles process termination.
//!
//! The CLI plays the part of the view that owns the active filter set. Since
//! a shell session has no long-lived component, the set is persisted between
//! invocations in `$ATTRSEARCH_HOME/filters.json` (or the platform data dir),
//! and each command loads it, drives the form once, and saves it back.
//!
//! ```text
//! attrsearch add email a@b.com       # validate + append a filter
//! attrsearch add Department eng      # with a profile: pick by name or label
//! attrsearch list                    # show chips
//! attrsearch rm email                # drop one chip
//! attrsearch search                  # build the users search request
//! attrsearch reset                   # clear every filter
//! attrsearch attributes              # selectable keys from the profile
//! attrsearch config realm acme       # settings
//! ```

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
