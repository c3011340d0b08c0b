//! Command-line front end standing in for the add form and the list.

mod commands;
mod terminal;

pub use commands::run;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Wishlist - keep track of things you would like, with links and photos
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Directory holding the persisted list (default: ~/.wishlist/data)
    #[arg(long, env = "WISHLIST_DATA_DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Config file to use instead of ~/.wishlist/config.toml
    #[arg(long, env = "WISHLIST_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Enable JSON log format
    #[arg(long, env = "WISHLIST_LOG_JSON", default_value = "false", global = true)]
    pub log_json: bool,

    /// Log rotation period: daily, hourly, or never
    #[arg(long, env = "WISHLIST_LOG_ROTATION", default_value = "daily", global = true)]
    pub log_rotation: String,

    /// Custom log directory (default: ~/.wishlist/logs)
    #[arg(long, env = "WISHLIST_LOG_DIR", global = true)]
    pub log_dir: Option<PathBuf>,

    /// Also print log lines to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add a wish to the top of the list
    Add {
        /// Name of the wish
        name: String,
        /// Link to the item (any text is accepted)
        #[arg(short, long, default_value = "")]
        link: String,
        /// Photo to attach; downscaled and stored inline
        #[arg(short, long)]
        image: Option<PathBuf>,
    },
    /// Show the list
    List,
    /// Open the link of a wish in the browser
    Open {
        id: String,
    },
    /// Remove a wish after confirmation
    Remove {
        id: String,
        /// Do not ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },
    /// Encode a photo as it would be stored and print the inline image
    Preview {
        image: PathBuf,
        /// Write the inline image to a file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Export the list as a standalone HTML page
    Export {
        /// Output file (default: stdout)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}
