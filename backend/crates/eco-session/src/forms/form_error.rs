use thiserror::Error;

/// Signup form problems caught before the store is called.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormError {
    #[error("Passwords don't match.")]
    PasswordMismatch,

    #[error("Password must be at least {min} characters long.")]
    PasswordTooShort { min: usize },
}
