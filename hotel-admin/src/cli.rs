//! Command-line definition

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use hotel_client::config::{DEFAULT_BASE_URL, DEFAULT_SESSION_DIR, DEFAULT_TIMEOUT_SECS};

#[derive(Debug, Parser)]
#[command(name = "hotel-admin", version, about = "Manage restaurant, spa and staff records")]
pub struct Cli {
    /// Backend base URL
    #[arg(long, env = "HOTEL_API_URL", default_value = DEFAULT_BASE_URL, global = true)]
    pub api_url: String,

    /// Bearer token; overrides the stored session's token
    #[arg(long, env = "HOTEL_API_TOKEN", hide_env_values = true, global = true)]
    pub token: Option<String>,

    /// Request timeout in seconds
    #[arg(long, env = "HOTEL_API_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS, global = true)]
    pub timeout: u64,

    /// Where the signed-in session is kept
    #[arg(long, env = "HOTEL_SESSION_DIR", default_value = DEFAULT_SESSION_DIR, global = true)]
    pub session_dir: PathBuf,

    #[arg(long, env = "HOTEL_LOG_LEVEL", default_value = "warn", global = true)]
    pub log_level: String,

    /// Write logs to daily files in this directory instead of stderr
    #[arg(long, env = "HOTEL_LOG_DIR", global = true)]
    pub log_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Sign in and store the session
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "HOTEL_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Sign out and forget the stored session
    Logout,
    /// Show the signed-in user and what they may do
    Whoami,
    /// List a collection as a table
    List {
        resource: ResourceKind,
        /// Case-insensitive text filter
        #[arg(long)]
        search: Option<String>,
        /// Status filter (e.g. available, active)
        #[arg(long)]
        status: Option<String>,
    },
    /// Print one record as JSON
    Show { resource: ResourceKind, id: String },
    /// Create a record from a JSON draft
    Create {
        resource: ResourceKind,
        #[arg(long)]
        file: PathBuf,
        /// Image to upload (repeatable)
        #[arg(long = "image")]
        images: Vec<PathBuf>,
    },
    /// Replace a record with a JSON draft
    Update {
        resource: ResourceKind,
        id: String,
        #[arg(long)]
        file: PathBuf,
        #[arg(long = "image")]
        images: Vec<PathBuf>,
        /// Stored image to keep; without any, all stored images are kept
        #[arg(long = "keep-image")]
        keep_images: Vec<String>,
    },
    /// Delete a record after confirmation
    Delete {
        resource: ResourceKind,
        id: String,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Flip the active / available flag of a record
    Toggle { resource: ToggleKind, id: String },
    /// Set a table's status, or move it to the next one
    TableStatus { id: String, status: Option<String> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ResourceKind {
    MenuItems,
    MenuCategories,
    Tables,
    SpaServices,
    Specialists,
    SpaCategories,
    Staff,
    Departments,
    Roles,
    AccessLevels,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ToggleKind {
    MenuItems,
    MenuCategories,
    Specialists,
    SpaCategories,
    Staff,
}
