use crate::{PersistedSession, SessionUser};

/// Current authentication state of the process.
///
/// `is_authenticated()` is true exactly when `user()` is `Some`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Session {
    #[default]
    LoggedOut,
    LoggedIn(SessionUser),
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::LoggedIn(_))
    }

    pub fn user(&self) -> Option<&SessionUser> {
        match self {
            Self::LoggedIn(user) => Some(user),
            Self::LoggedOut => None,
        }
    }

    /// Navigation bar greeting for the signed-in user.
    pub fn greeting(&self) -> Option<String> {
        self.user().map(|user| format!("Welcome, {}", user.username))
    }

    /// Rebuild a session from its persisted form.
    ///
    /// Returns `None` when the flag and the user disagree.
    pub fn from_persisted(persisted: PersistedSession) -> Option<Self> {
        match (persisted.is_authenticated, persisted.user) {
            (true, Some(user)) => Some(Self::LoggedIn(user)),
            (false, None) => Some(Self::LoggedOut),
            _ => None,
        }
    }
}
