use crate::{Session, SessionUser};

pub const LOGIN_PROMPT_TITLE: &str = "Authentication Required";
pub const LOGIN_PROMPT_MESSAGE: &str =
    "Please log in to access this page and view your sustainable shopping data.";

/// Outcome of guarding a protected page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access<'a> {
    Granted(&'a SessionUser),
    LoginRequired,
}

/// Decides between protected content and the login prompt.
pub struct RouteGuard;

impl RouteGuard {
    /// Grants access exactly when the session is authenticated.
    pub fn check(session: &Session) -> Access<'_> {
        match session.user() {
            Some(user) => Access::Granted(user),
            None => Access::LoginRequired,
        }
    }
}
