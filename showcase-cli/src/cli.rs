//! CLI argument parsing definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "showcase", author, version, about = "Command-line front-end for the showcase platform", long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Set the log level (trace, debug, info, warn, error)
    #[arg(long, value_name = "LEVEL", global = true)]
    pub log_level: Option<String>,

    /// Output format
    #[arg(long, value_enum, value_name = "FORMAT", default_value = "text", global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Browse and manage projects
    Project {
        #[command(subcommand)]
        project_cmd: ProjectCommands,
    },

    /// Look up and manage users
    User {
        #[command(subcommand)]
        user_cmd: UserCommands,
    },

    /// Print a session token (diagnostic)
    Token,
}

#[derive(Subcommand)]
pub enum ProjectCommands {
    /// List one page of the project feed
    List {
        /// Restrict the feed to a category
        #[arg(long, value_name = "CATEGORY")]
        category: Option<String>,

        /// Continue forward from this end cursor
        #[arg(long, value_name = "CURSOR")]
        cursor: Option<String>,
    },

    /// Show one project with its author
    Show {
        /// Project id
        id: String,
    },

    /// Create a project
    Create {
        #[arg(long, value_name = "STRING")]
        title: String,

        #[arg(long, value_name = "STRING")]
        description: String,

        /// Hosted URL or inline data:image/...;base64 payload
        #[arg(long, value_name = "IMAGE")]
        image: String,

        #[arg(long, value_name = "URL")]
        live_site_url: String,

        #[arg(long, value_name = "URL")]
        github_url: String,

        #[arg(long, value_name = "CATEGORY")]
        category: String,

        /// Id of the creating user
        #[arg(long, value_name = "ID")]
        creator: String,
    },

    /// Update a project (unset flags keep their current value)
    Update {
        /// Project id
        id: String,

        #[arg(long, value_name = "STRING")]
        title: Option<String>,

        #[arg(long, value_name = "STRING")]
        description: Option<String>,

        /// Hosted URL or inline data:image/...;base64 payload
        #[arg(long, value_name = "IMAGE")]
        image: Option<String>,

        #[arg(long, value_name = "URL")]
        live_site_url: Option<String>,

        #[arg(long, value_name = "URL")]
        github_url: Option<String>,

        #[arg(long, value_name = "CATEGORY")]
        category: Option<String>,
    },

    /// Delete a project
    Delete {
        /// Project id
        id: String,
    },
}

#[derive(Subcommand)]
pub enum UserCommands {
    /// Look up a user by email
    Show {
        /// Account email
        email: String,
    },

    /// Create a user (first sign-in)
    Create {
        #[arg(long, value_name = "STRING")]
        name: String,

        #[arg(long, value_name = "EMAIL")]
        email: String,

        #[arg(long, value_name = "URL")]
        avatar_url: String,
    },

    /// List a user's most recent projects
    Projects {
        /// User id
        id: String,

        /// How many projects to fetch
        #[arg(long, value_name = "N")]
        last: Option<u32>,
    },
}
