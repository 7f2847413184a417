//! Credentials and Registration
//!
//! Validated inputs handed to the identity provider.

use crate::domain::value_object::{DisplayName, Email, Password};
use crate::error::{AuthError, AuthResult};

/// Sign-in input
#[derive(Debug)]
pub struct Credentials {
    pub email: Email,
    pub password: Password,
}

impl Credentials {
    /// Both fields are required; the email must look like one
    pub fn parse(email: &str, password: &str) -> AuthResult<Self> {
        let password = match Password::new(password) {
            Some(password) if !email.trim().is_empty() => password,
            _ => return Err(AuthError::MissingCredentials),
        };
        let email = Email::new(email)?;
        Ok(Self { email, password })
    }
}

/// Sign-up input
#[derive(Debug)]
pub struct Registration {
    pub email: Email,
    pub password: Password,
    pub name: DisplayName,
}

impl Registration {
    pub fn parse(email: &str, password: &str, name: &str) -> AuthResult<Self> {
        if name.trim().is_empty() || email.trim().is_empty() || password.is_empty() {
            return Err(AuthError::MissingRegistrationFields);
        }
        let name = DisplayName::new(name)?;
        let Credentials { email, password } = Credentials::parse(email, password)?;
        Ok(Self {
            email,
            password,
            name,
        })
    }
}
