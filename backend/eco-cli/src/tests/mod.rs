
use crate::{Commands, Outcome, execute};

use eco_session::{BypassCredential, MemoryKeyValueStore, SessionStore};

pub(crate) fn memory_store() -> SessionStore<MemoryKeyValueStore> {
    SessionStore::open(MemoryKeyValueStore::new(), Some(BypassCredential::default()))
}

/// Run a command and capture what it printed.
pub(crate) fn run(
    store: &mut SessionStore<MemoryKeyValueStore>,
    command: Commands,
) -> (Outcome, String) {
    let mut out = Vec::new();
    let outcome = execute(store, command, &mut out).unwrap();
    (outcome, String::from_utf8(out).unwrap())
}

pub(crate) fn signup(username: &str, password: &str, confirm: &str, email: Option<&str>) -> Commands {
    Commands::Signup {
        username: username.to_string(),
        password: password.to_string(),
        confirm_password: confirm.to_string(),
        email: email.map(str::to_string),
    }
}

pub(crate) fn login(username: &str, password: &str) -> Commands {
    Commands::Login {
        username: username.to_string(),
        password: password.to_string(),
    }
}
