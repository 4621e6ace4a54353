//! Command definitions for the CLI.

use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::auth::{Credentials, Registration};
use crate::render::OutputFormat;
use crate::view::View;

/// List command arguments.
#[derive(Debug, Args)]
pub struct ListCommand {
    /// View to list (defaults to `console.default_view`)
    #[arg(value_enum)]
    pub view: Option<View>,

    /// Case-insensitive search over the view's search fields
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Output format (defaults to `console.format`)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

/// Show command arguments.
#[derive(Debug, Args)]
pub struct ShowCommand {
    /// View the record belongs to
    #[arg(value_enum)]
    pub view: View,

    /// Record id, e.g. T001
    pub id: String,

    /// Output format (defaults to `console.format`)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

/// Summary command arguments.
#[derive(Debug, Args)]
pub struct SummaryCommand {
    /// View to summarise (defaults to `console.default_view`)
    #[arg(value_enum)]
    pub view: Option<View>,

    /// Output format (defaults to `console.format`)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

/// Timeline command arguments.
#[derive(Debug, Args)]
pub struct TimelineCommand {
    /// Case-insensitive search over stage name, aircraft and id
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Output format (defaults to `console.format`)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

/// Classify command arguments.
#[derive(Debug, Args)]
pub struct ClassifyCommand {
    /// View whose status vocabulary applies
    #[arg(value_enum)]
    pub view: View,

    /// Literal status or result string, e.g. "Em Andamento"
    pub status: String,

    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Login command arguments.
#[derive(Debug, Args)]
pub struct LoginCommand {
    /// E-mail address
    #[arg(long, default_value = "")]
    pub email: String,

    /// Password
    #[arg(long, default_value = "")]
    pub password: String,

    /// Keep me signed in
    #[arg(long)]
    pub remember_me: bool,
}

impl From<LoginCommand> for Credentials {
    fn from(cmd: LoginCommand) -> Self {
        Self {
            email: cmd.email,
            password: cmd.password,
            remember_me: cmd.remember_me,
        }
    }
}

/// Register command arguments.
#[derive(Debug, Args)]
pub struct RegisterCommand {
    /// Full name
    #[arg(long, default_value = "")]
    pub name: String,

    /// Company name
    #[arg(long, default_value = "")]
    pub company: String,

    /// E-mail address
    #[arg(long, default_value = "")]
    pub email: String,

    /// Password
    #[arg(long, default_value = "")]
    pub password: String,

    /// Password again
    #[arg(long, default_value = "")]
    pub confirm_password: String,

    /// Accept the terms of use
    #[arg(long)]
    pub accept_terms: bool,
}

impl From<RegisterCommand> for Registration {
    fn from(cmd: RegisterCommand) -> Self {
        Self {
            name: cmd.name,
            company: cmd.company,
            email: cmd.email,
            password: cmd.password,
            confirm_password: cmd.confirm_password,
            accept_terms: cmd.accept_terms,
        }
    }
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}
