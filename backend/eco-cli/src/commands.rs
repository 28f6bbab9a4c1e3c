use crate::{Outcome, Result};

use eco_session::route_guard::{LOGIN_PROMPT_MESSAGE, LOGIN_PROMPT_TITLE};
use eco_session::{Access, AuthFailure, KeyValueStore, RouteGuard, SessionStore, SignupForm};

use std::io::Write;

use clap::Subcommand;

const NOT_LOGGED_IN: &str = "Not logged in.";

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Create an account and log in as it
    Signup {
        #[arg(long)]
        username: String,

        #[arg(long)]
        password: String,

        #[arg(long)]
        confirm_password: String,

        /// Optional contact email
        #[arg(long)]
        email: Option<String>,
    },

    /// Log in with a username and password
    Login {
        #[arg(long)]
        username: String,

        #[arg(long)]
        password: String,
    },

    /// End the current session
    Logout,

    /// Show who is logged in
    Whoami,

    /// Check access to a protected page
    Guard,
}

/// Run one command against the store, writing user-facing text to `out`.
pub fn execute<S: KeyValueStore, W: Write>(
    store: &mut SessionStore<S>,
    command: Commands,
    out: &mut W,
) -> Result<Outcome> {
    match command {
        Commands::Signup {
            username,
            password,
            confirm_password,
            email,
        } => {
            let form = SignupForm::new(username, email, password, confirm_password);
            if let Err(e) = form.validate() {
                writeln!(out, "{e}")?;
                return Ok(Outcome::Rejected);
            }

            if !store.signup(&form.username, &form.password, form.email.as_deref())? {
                writeln!(out, "{}", AuthFailure::UsernameTaken)?;
                return Ok(Outcome::Rejected);
            }

            write_greeting(store, out)?;
            Ok(Outcome::Success)
        }

        Commands::Login { username, password } => {
            if !store.login(&username, &password)? {
                writeln!(out, "{}", AuthFailure::InvalidCredentials)?;
                return Ok(Outcome::Rejected);
            }

            write_greeting(store, out)?;
            Ok(Outcome::Success)
        }

        Commands::Logout => {
            store.logout()?;
            writeln!(out, "Logged out.")?;
            Ok(Outcome::Success)
        }

        Commands::Whoami => {
            write_greeting(store, out)?;
            Ok(Outcome::Success)
        }

        Commands::Guard => match RouteGuard::check(store.current_session()) {
            Access::Granted(user) => {
                writeln!(out, "Access granted for {}.", user.username)?;
                Ok(Outcome::Success)
            }
            Access::LoginRequired => {
                writeln!(out, "{LOGIN_PROMPT_TITLE}")?;
                writeln!(out, "{LOGIN_PROMPT_MESSAGE}")?;
                Ok(Outcome::LoginRequired)
            }
        },
    }
}

fn write_greeting<S: KeyValueStore, W: Write>(store: &SessionStore<S>, out: &mut W) -> Result<()> {
    let session = store.current_session();
    match session.greeting() {
        Some(greeting) => {
            writeln!(out, "{greeting}")?;
            if let Some(email) = session.user().and_then(|user| user.email.as_deref()) {
                writeln!(out, "Email: {email}")?;
            }
        }
        None => writeln!(out, "{NOT_LOGGED_IN}")?,
    }
    Ok(())
}
