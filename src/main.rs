// Allow panic/unwrap/expect in tests (denied globally via Cargo.toml lints)
#![cfg_attr(
    test,
    allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic_in_result_fn,
        clippy::unwrap_in_result,
        clippy::indexing_slicing
    )
)]

mod cli;

use clap::Parser;
use cli::Args;
use color_eyre::eyre::Result;
use tracing::warn;
use wishlist::logging::{init_logging, parse_rotation, LogConfig, LOG_FILENAME};
use wishlist::user_config::{load_user_config, load_user_config_from, UserConfig};
use wishlist::utils::default_log_dir;

#[tokio::main]
async fn main() -> Result<()> {
    // Install color-eyre error hooks for colored error output
    color_eyre::install()?;

    // Parse CLI arguments first (before logging, so we can use log config)
    let args = Args::parse();

    let log_dir = args.log_dir.clone().unwrap_or_else(default_log_dir);
    let log_file = log_dir.join(LOG_FILENAME);
    let log_config = LogConfig {
        log_dir,
        json_format: args.log_json,
        rotation: parse_rotation(&args.log_rotation),
        stderr: args.verbose,
        ..Default::default()
    };

    if let Err(e) = init_logging(&log_config) {
        eprintln!();
        eprintln!("Error: Failed to initialize logging: {e}");
        eprintln!("Logs: {}", log_file.display());
        eprintln!();
        return Err(e);
    }

    // The config file is optional; a broken one falls back to defaults.
    let loaded = match &args.config {
        Some(path) => load_user_config_from(path),
        None => load_user_config(),
    };
    let user_cfg = loaded.unwrap_or_else(|e| {
        warn!("Failed to load user config, using defaults: {e}");
        UserConfig::default()
    });

    cli::run(args, &user_cfg).await
}
