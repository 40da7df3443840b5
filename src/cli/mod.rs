//! CLI module - Command-line interface for the series tracker
//!
//! This module provides a structured CLI using clap for argument parsing.

mod commands;

use clap::{Parser, Subcommand};

/// Series Tracker - track watch progress and scores for TV series
#[derive(Parser)]
#[command(name = "series-tracker")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the REST API server (default)
    #[command(alias = "daemon")]
    Serve,

    /// Create default config file
    #[command(alias = "--init")]
    Init,

    /// List all tracked series
    #[command(alias = "ls", alias = "l")]
    List,

    /// Apply database migrations and exit
    Migrate,
}

pub use commands::*;
