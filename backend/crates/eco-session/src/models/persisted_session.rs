use crate::{Session, SessionUser};

use serde::{Deserialize, Serialize};

/// On-disk shape of the `auth` key:
/// `{ "isAuthenticated": bool, "user": { "username", "email"? } | null }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedSession {
    pub is_authenticated: bool,
    pub user: Option<SessionUser>,
}

impl From<&Session> for PersistedSession {
    fn from(session: &Session) -> Self {
        Self {
            is_authenticated: session.is_authenticated(),
            user: session.user().cloned(),
        }
    }
}
