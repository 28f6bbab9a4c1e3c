pub mod app;
pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod outcome;

pub use app::{bypass_credential, open_store};
pub use cli::Cli;
pub use commands::{Commands, execute};
pub use error::{CliError, Result};
pub use outcome::Outcome;

#[cfg(test)]
mod tests;
