use crate::types::{ColorMode, LayoutOpt, OutputFormat, ThemeOpt};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Build and preview a portfolio from your terminal", long_about = None)]
#[command(version)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Data directory holding the session flag and config
    /// (default: FOLIO_PATH, then the platform data dir)
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Sign in and persist the session flag (demo gate: format checks only)
    Login {
        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,
    },

    /// Clear the session flag
    Logout,

    /// Show gate state and resolved paths
    Status,

    /// Open the interactive editor with a live preview pane
    Edit {
        /// Portfolio file to seed the session from (default: the starter record)
        file: Option<PathBuf>,
    },

    /// Render a portfolio to stdout
    Preview {
        /// Portfolio file to render (default: the starter record)
        file: Option<PathBuf>,

        /// Render under this layout instead of the record's own
        #[arg(long)]
        layout: Option<LayoutOpt>,

        /// Render under this theme instead of the record's own
        #[arg(long)]
        theme: Option<ThemeOpt>,

        #[arg(long, default_value = "auto")]
        color: ColorMode,

        #[arg(long, default_value = "plain")]
        format: OutputFormat,
    },

    /// Write a timestamped portfolio file
    Export {
        /// Portfolio file to re-export (default: the starter record)
        file: Option<PathBuf>,

        /// Destination directory (default: configured export dir, then ".")
        #[arg(long)]
        output_dir: Option<PathBuf>,
    },

    /// Validate a portfolio file and print a one-line summary
    Check { file: PathBuf },
}
