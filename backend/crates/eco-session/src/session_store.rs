use crate::{
    AUTH_KEY, BypassCredential, KeyValueStore, PersistedSession, REGISTERED_USERS_KEY,
    RegisteredUser, Result, Session, SessionError, SessionUser,
};

use log::{debug, info, warn};

/// Single authority for who is logged in and who may log in.
///
/// Mutating operations take `&mut self`, so a shared store must sit behind a
/// lock for the registry check-then-append in [`SessionStore::signup`] to
/// keep usernames unique.
#[derive(Debug)]
pub struct SessionStore<S: KeyValueStore> {
    storage: S,
    bypass: Option<BypassCredential>,
    session: Session,
}

impl<S: KeyValueStore> SessionStore<S> {
    /// Build a logged-out store without reading storage.
    pub fn new(storage: S, bypass: Option<BypassCredential>) -> Self {
        Self {
            storage,
            bypass,
            session: Session::LoggedOut,
        }
    }

    /// Build a store and rehydrate the persisted session.
    pub fn open(storage: S, bypass: Option<BypassCredential>) -> Self {
        let mut store = Self::new(storage, bypass);
        store.initialize();
        store
    }

    /// Rehydrate the session from the `auth` key.
    ///
    /// A missing, unreadable or malformed blob leaves the store logged out.
    pub fn initialize(&mut self) {
        self.session = match self.storage.get(AUTH_KEY) {
            Ok(Some(blob)) => Self::parse_session(&blob),
            Ok(None) => {
                debug!("No persisted session");
                Session::LoggedOut
            }
            Err(e) => {
                warn!("Could not read persisted session, starting logged out: {e}");
                Session::LoggedOut
            }
        };

        if let Some(user) = self.session.user() {
            debug!("Rehydrated session for '{}'", user.username);
        }
    }

    fn parse_session(blob: &str) -> Session {
        let persisted = match serde_json::from_str::<PersistedSession>(blob) {
            Ok(persisted) => persisted,
            Err(e) => {
                warn!("Ignoring malformed persisted session: {e}");
                return Session::LoggedOut;
            }
        };

        Session::from_persisted(persisted).unwrap_or_else(|| {
            warn!("Ignoring persisted session whose user does not match isAuthenticated");
            Session::LoggedOut
        })
    }

    /// Authenticate against the bypass credential, then the registry.
    ///
    /// `Ok(false)` leaves the session untouched. `Err` only when the session
    /// write fails.
    pub fn login(&mut self, username: &str, password: &str) -> Result<bool> {
        let is_bypass = self
            .bypass
            .as_ref()
            .is_some_and(|bypass| bypass.matches(username, password));

        if is_bypass {
            self.establish(SessionUser::new(username, None))?;
            info!("Logged in '{username}' with the bypass credential");
            return Ok(true);
        }

        // Unreadable registry reads as empty here; signup still propagates so
        // it never overwrites records it could not see.
        let registry = self.registered_users().unwrap_or_else(|e| {
            warn!("Could not read registry, rejecting login: {e}");
            Vec::new()
        });
        let Some(found) = registry.iter().find(|user| user.matches(username, password)) else {
            debug!("Login rejected for '{username}'");
            return Ok(false);
        };

        self.establish(found.to_session_user())?;
        info!("Logged in '{username}'");
        Ok(true)
    }

    /// Register a new user and log them in.
    ///
    /// `Ok(false)` when the username is already registered; nothing changes.
    /// Password strength is not checked here, see [`crate::SignupForm`].
    pub fn signup(&mut self, username: &str, password: &str, email: Option<&str>) -> Result<bool> {
        let mut registry = self.registered_users()?;

        if registry.iter().any(|user| user.username == username) {
            debug!("Signup rejected, '{username}' already exists");
            return Ok(false);
        }

        let user = RegisteredUser::new(username, password, email.map(str::to_string));
        let session_user = user.to_session_user();
        registry.push(user);

        let blob = serde_json::to_string(&registry)
            .map_err(|e| SessionError::serialization("registered users", e))?;
        self.storage.set(REGISTERED_USERS_KEY, &blob)?;

        // Registry is durable from here on; a failed session write still
        // leaves an account the user can log in to.
        self.establish(session_user)?;
        info!("Registered and logged in '{username}'");
        Ok(true)
    }

    /// Clear the session and its persisted blob. Never touches the registry.
    pub fn logout(&mut self) -> Result<()> {
        if let Some(user) = self.session.user() {
            info!("Logged out '{}'", user.username);
        }

        self.session = Session::LoggedOut;
        self.storage.remove(AUTH_KEY)
    }

    pub fn current_session(&self) -> &Session {
        &self.session
    }

    /// Registry contents in insertion order.
    ///
    /// A malformed blob reads as empty and malformed records are skipped.
    pub fn registered_users(&self) -> Result<Vec<RegisteredUser>> {
        let Some(blob) = self.storage.get(REGISTERED_USERS_KEY)? else {
            return Ok(Vec::new());
        };

        let records = match serde_json::from_str::<Vec<serde_json::Value>>(&blob) {
            Ok(records) => records,
            Err(e) => {
                warn!("Ignoring malformed registry: {e}");
                return Ok(Vec::new());
            }
        };

        let users: Vec<RegisteredUser> = records
            .into_iter()
            .filter_map(|record| match serde_json::from_value::<RegisteredUser>(record) {
                Ok(user) => Some(user),
                Err(e) => {
                    warn!("Skipping malformed registry record: {e}");
                    None
                }
            })
            .collect();

        Ok(users)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Give the storage back, e.g. to reopen it as a fresh process would.
    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Persist then adopt a logged-in session. Overwrites the blob wholesale.
    fn establish(&mut self, user: SessionUser) -> Result<()> {
        let session = Session::LoggedIn(user);
        let blob = serde_json::to_string(&PersistedSession::from(&session))
            .map_err(|e| SessionError::serialization("session", e))?;

        self.storage.set(AUTH_KEY, &blob)?;
        self.session = session;
        Ok(())
    }
}
