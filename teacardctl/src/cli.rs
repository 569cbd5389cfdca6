use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::script::Step;

#[derive(Parser, Debug)]
#[command(name = "teacardctl", version, about = "Inspect and drive teacard carousels")]
pub struct Cli {
    /// Site configuration file (TOML or JSON)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    /// Record store file; overrides the configured store path
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the carousel HTML for the stored records
    Render {
        /// Viewport width in px; defaults to the configured width
        #[arg(long)]
        width: Option<u32>,
    },
    /// Run a navigation script and print the state after each step
    Navigate {
        /// Comma separated steps: next, prev, goto:N, settle, resize:PX, frame
        #[arg(long, value_delimiter = ',', required = true)]
        steps: Vec<Step>,
        #[arg(long)]
        width: Option<u32>,
    },
    /// Store a record unless an identical one exists
    Add {
        /// KEY=VALUE; separate list entries with '|'
        #[arg(long = "field", value_name = "KEY=VALUE", required = true)]
        fields: Vec<String>,
    },
    /// Delete the record at a storage index
    Delete {
        #[arg(long)]
        index: usize,
    },
    /// Load and validate the configuration, then print what was resolved
    Check,
}
