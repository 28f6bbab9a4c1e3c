use crate::commands::Commands;

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "eco")]
#[command(about = "Storefront account and session management")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config directory (defaults to ECO_CONFIG_DIR, then ./.eco)
    #[arg(long, global = true)]
    pub config_dir: Option<PathBuf>,
}
