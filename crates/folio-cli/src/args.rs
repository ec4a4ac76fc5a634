use crate::types::{LogLevel, OutputFormat, SectionArg};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Browse a portfolio project catalog", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Data directory holding config.toml (defaults to FOLIO_PATH or the XDG data dir)
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    /// Catalog file (.json or .toml); overrides the configured catalog
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Whether this invocation will hand the terminal to the TUI
    pub fn is_interactive(&self, stdout_is_terminal: bool) -> bool {
        stdout_is_terminal
            && self.format == OutputFormat::Plain
            && self
                .command
                .as_ref()
                .is_none_or(Commands::is_interactive)
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive gallery
    Browse {
        /// Initial gallery tab: all, visualization, analysis, dashboard
        #[arg(long)]
        filter: Option<String>,
    },

    /// Print the gallery for one filter tab
    List {
        /// Gallery tab: all, visualization, analysis, dashboard
        #[arg(long)]
        filter: Option<String>,
    },

    /// Print the detail view of one project
    Show {
        /// Project id (unknown ids show the default project)
        id: String,

        #[arg(long, default_value = "overview")]
        section: SectionArg,
    },

    /// Load and validate the catalog
    Check,

    /// Write config.toml into the data directory
    Init {
        /// Also write the bundled catalog as catalog.json and use it
        #[arg(long)]
        with_sample: bool,
    },
}

impl Commands {
    /// Whether the command takes over the terminal
    pub fn is_interactive(&self) -> bool {
        matches!(self, Commands::Browse { .. })
    }
}
