use crate::SessionUser;

use std::fmt;

use serde::{Deserialize, Serialize};

/// One entry of the registered-user registry.
///
/// The password is kept and compared as plaintext.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisteredUser {
    pub username: String,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl RegisteredUser {
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        email: Option<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            email,
        }
    }

    /// Exact, case-sensitive match on both fields.
    pub fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }

    pub fn to_session_user(&self) -> SessionUser {
        SessionUser::new(self.username.clone(), self.email.clone())
    }
}

impl fmt::Debug for RegisteredUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisteredUser")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("email", &self.email)
            .finish()
    }
}
