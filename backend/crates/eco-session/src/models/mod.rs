pub mod persisted_session;
pub mod registered_user;
pub mod session;
pub mod session_user;
