use crate::FormError;

pub const MIN_PASSWORD_LENGTH: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupForm {
    pub username: String,
    /// Blank input is stored as `None`.
    pub email: Option<String>,
    pub password: String,
    pub confirm_password: String,
}

impl SignupForm {
    pub fn new(
        username: impl Into<String>,
        email: Option<String>,
        password: impl Into<String>,
        confirm_password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.filter(|email| !email.trim().is_empty()),
            password: password.into(),
            confirm_password: confirm_password.into(),
        }
    }

    /// Confirmation is checked before length. Length counts UTF-16 code units,
    /// so a character outside the BMP counts twice.
    pub fn validate(&self) -> Result<(), FormError> {
        if self.password != self.confirm_password {
            return Err(FormError::PasswordMismatch);
        }

        if self.password.encode_utf16().count() < MIN_PASSWORD_LENGTH {
            return Err(FormError::PasswordTooShort {
                min: MIN_PASSWORD_LENGTH,
            });
        }

        Ok(())
    }
}
