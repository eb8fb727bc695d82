//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --color, --debug) are inherited by all subcommands
//! - `deploy` without a target prompts for one when run interactively

use clap::{Parser, Subcommand, ValueEnum};

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// mddbl - deploy helper for the Moddable SDK
#[derive(Parser, Debug)]
#[command(name = "mddbl")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'mddbl init' to create mddbl.json in the current folder.")]
pub struct Cli {
    /// Output format for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Output extra information during operation
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create mddbl.json in the current folder
    Init {
        /// Replace an existing configuration file
        #[arg(short, long)]
        force: bool,
    },

    /// Build and run a module, optionally on a target
    Deploy {
        /// Module name
        module: String,

        /// Target name (prompted for when omitted on a terminal)
        target: Option<String>,
    },

    /// Erase a target device using its wipe command
    Wipe {
        /// Target name
        target: String,
    },

    /// Manage modules
    Module {
        #[command(subcommand)]
        action: EntityAction,
    },

    /// Manage targets
    Target {
        #[command(subcommand)]
        action: EntityAction,
    },

    /// Show, sort or edit the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// List modules or targets
    #[command(alias = "ls")]
    List {
        #[arg(value_enum)]
        kind: ListKind,
    },

    /// Toggle the configuration's debug flag
    Debug,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum EntityAction {
    /// Add an entry with default settings and open the editor
    Add {
        name: String,

        /// Don't open the editor afterwards
        #[arg(long)]
        no_edit: bool,
    },

    /// Remove an entry
    #[command(alias = "remove")]
    Rm { name: String },

    /// Print an entry as JSON
    Show { name: String },
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigAction {
    /// Print the configuration
    Show,
    /// Sort modules and targets by name
    Sort,
    /// Open the configuration file in the editor
    Edit,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Modules,
    Targets,
}
