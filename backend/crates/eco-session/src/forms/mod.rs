//! Checks the login and signup forms run before calling the session store.

pub mod auth_failure;
pub mod form_error;
pub mod signup_form;
