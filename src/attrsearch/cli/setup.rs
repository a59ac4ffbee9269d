use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "attrsearch", version)]
#[command(about = "Build attribute filters for identity user search", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// User-profile document to pick attributes from (overrides config)
    #[arg(long, global = true, value_name = "FILE")]
    pub profile: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Add an attribute filter
    #[command(alias = "a")]
    Add {
        /// Attribute key (or its label, when a profile is configured)
        key: String,

        /// Value to match
        value: String,
    },

    /// List active filters
    #[command(alias = "ls")]
    List,

    /// Remove filters by attribute key
    #[command(alias = "rm")]
    Remove {
        /// Attribute keys (e.g. email department)
        #[arg(required = true, num_args = 1..)]
        keys: Vec<String>,
    },

    /// Clear every active filter
    Reset,

    /// Build the users search request for the active filters
    Search,

    /// List the attributes declared by the user profile
    Attributes,

    /// Get or set configuration
    Config {
        /// Configuration key (server-url, realm, page-size, profile, messages)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
