//! Client-side authentication for the storefront.
//!
//! [`SessionStore`] owns the registered-user registry and the current session,
//! persisting both through a [`KeyValueStore`] under two independent keys.

pub mod bypass_credential;
pub mod error;
pub mod forms;
pub mod models;
pub mod route_guard;
pub mod session_store;
pub mod storage;

pub use bypass_credential::BypassCredential;
pub use error::{Result, SessionError};
pub use forms::{auth_failure::AuthFailure, form_error::FormError, signup_form::SignupForm};
pub use models::persisted_session::PersistedSession;
pub use models::registered_user::RegisteredUser;
pub use models::session::Session;
pub use models::session_user::SessionUser;
pub use route_guard::{Access, RouteGuard};
pub use session_store::SessionStore;
pub use storage::{
    KeyValueStore, file_key_value_store::FileKeyValueStore,
    memory_key_value_store::MemoryKeyValueStore,
};

/// Storage key of the current session blob.
pub const AUTH_KEY: &str = "auth";
/// Storage key of the registered-user registry blob.
pub const REGISTERED_USERS_KEY: &str = "registeredUsers";

#[cfg(test)]
mod tests;
