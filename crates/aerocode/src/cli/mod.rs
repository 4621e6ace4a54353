//! Command-line interface for aerocode.
//!
//! This module provides the CLI structure for the `aerocode` binary.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::logging::Verbosity;

pub use commands::{
    ClassifyCommand, ConfigCommand, ListCommand, LoginCommand, RegisterCommand, ShowCommand,
    SummaryCommand, TimelineCommand,
};

/// aerocode - Aircraft production console
///
/// Browse aircraft, employees, parts, production stages and tests; filter
/// them, tally their statuses and follow each aircraft's stage timeline.
#[derive(Debug, Parser)]
#[command(name = "aerocode")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the console views
    Views,

    /// List a view's records, optionally filtered
    List(ListCommand),

    /// Show every field of one record
    Show(ShowCommand),

    /// Show a view's status tiles
    Summary(SummaryCommand),

    /// Show production stages grouped by aircraft
    Timeline(TimelineCommand),

    /// Classify a status string
    Classify(ClassifyCommand),

    /// Report stages that reference unknown aircraft
    Check,

    /// Sign in
    Login(LoginCommand),

    /// Create an account
    Register(RegisterCommand),

    /// View or validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else {
            match self.verbose {
                0 => Verbosity::Normal,
                1 => Verbosity::Verbose,
                2 => Verbosity::Debug,
                _ => Verbosity::Trace,
            }
        }
    }
}
