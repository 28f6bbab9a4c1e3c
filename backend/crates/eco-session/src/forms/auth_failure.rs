use thiserror::Error;

/// Message shown when the store answers `false`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthFailure {
    #[error("Invalid credentials. Please check your username and password.")]
    InvalidCredentials,

    #[error("Username already exists. Please choose a different username.")]
    UsernameTaken,
}
