use std::fmt;

const DEFAULT_USERNAME: &str = "johndoe";
const DEFAULT_PASSWORD: &str = "johndoe";

/// Reserved username/password pair accepted by `login` regardless of the
/// registry contents. Never offered by any form.
#[derive(Clone, PartialEq, Eq)]
pub struct BypassCredential {
    username: String,
    password: String,
}

impl BypassCredential {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}

impl Default for BypassCredential {
    fn default() -> Self {
        Self::new(DEFAULT_USERNAME, DEFAULT_PASSWORD)
    }
}

impl fmt::Debug for BypassCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BypassCredential")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
