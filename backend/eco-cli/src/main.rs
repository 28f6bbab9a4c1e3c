//! eco - storefront account CLI
//!
//! Signs users up, logs them in and out, and reports what a protected page
//! would show for the current session.
//!
//! # Examples
//!
//! ```bash
//! eco signup --username alice --password secret123 --confirm-password secret123
//! eco whoami
//! eco guard
//! eco logout
//! ```

use eco_cli::{Cli, Outcome, Result, execute, logger, open_store};
use eco_config::Config;

use std::process::ExitCode;

use clap::Parser;
use log::info;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(outcome) => outcome.into(),
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<Outcome> {
    // Explicit flag > ECO_CONFIG_DIR > ./.eco
    let config_dir = match cli.config_dir {
        Some(dir) => dir,
        None => Config::config_dir()?,
    };

    let config = Config::load_from(&config_dir)?;
    config.validate()?;

    // Initialize logger (before any other logging)
    logger::initialize(
        config.logging.level,
        config.log_file_path(&config_dir),
        config.logging.colored,
    )?;

    info!("Starting eco v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let mut store = open_store(&config, &config_dir);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute(&mut store, cli.command, &mut out)
}
