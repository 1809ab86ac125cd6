//! CLI argument definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Manage user records in a SQLite database.
#[derive(Parser, Debug)]
#[command(name = "userdb")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Database file
    #[arg(long, global = true, env = "USERDB_PATH", default_value = "users.db")]
    pub db: PathBuf,

    /// Use a private in-memory database instead of `--db`
    #[arg(long, global = true)]
    pub memory: bool,

    /// Log level (trace|debug|info|warn|error)
    #[arg(long, global = true, env = "USERDB_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Absolute directory for rolling log files; logging is off when unset
    #[arg(long, global = true, env = "USERDB_LOG_DIR")]
    pub log_dir: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a user and print the service response
    Create {
        #[arg(long)]
        name: String,
        #[arg(long, allow_negative_numbers = true)]
        age: i64,
    },
    /// Look up a user and print the service response
    Get {
        #[arg(long)]
        id: i64,
    },
    /// Change the name and/or age of a user
    Update {
        #[arg(long)]
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long, allow_negative_numbers = true)]
        age: Option<i64>,
    },
    /// Delete a user
    Delete {
        #[arg(long)]
        id: i64,
    },
    /// Print core health and version
    Ping,
}
