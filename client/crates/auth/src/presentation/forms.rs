//! Form Submit Flows
//!
//! What the login, register and forgot-password pages do on submit, and
//! the logout action from the sidebar and header menu.

use zeroize::Zeroizing;

use kernel::AppError;

use crate::application::SessionStore;
use crate::error::AuthError;
use crate::domain::repository::{IdentityProvider, IdentityRepository};
use crate::presentation::layout::{MenuAction, MenuItem};
use crate::presentation::navigator::Navigator;
use crate::presentation::routes::Route;

const LOGIN_FAILED: &str = "Failed to login";
const REGISTER_FAILED: &str = "Failed to register";
const RESET_FAILED: &str = "Failed to send reset instructions. Please try again.";

fn failure_message(err: &AppError, fallback: &str) -> String {
    if err.reason().is_empty() {
        fallback.to_string()
    } else {
        err.reason().to_string()
    }
}

#[derive(Default)]
pub struct LoginForm {
    pub email: String,
    pub password: Zeroizing<String>,
    pub error: Option<String>,
}

impl LoginForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: Zeroizing::new(password.into()),
            error: None,
        }
    }

    /// Sign in; lands on the dashboard on success
    pub async fn submit<P, R>(&mut self, store: &SessionStore<P, R>, navigator: &mut Navigator) -> bool
    where
        P: IdentityProvider + Sync + 'static,
        R: IdentityRepository + 'static,
    {
        self.error = None;
        match store.login(&self.email, &self.password).await {
            Ok(_) => {
                navigator.push(Route::HOME.path());
                true
            }
            Err(e) => {
                self.error = Some(failure_message(&e, LOGIN_FAILED));
                false
            }
        }
    }
}

#[derive(Default)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub password: Zeroizing<String>,
    pub confirm_password: Zeroizing<String>,
    pub error: Option<String>,
}

impl RegistrationForm {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        confirm_password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: Zeroizing::new(password.into()),
            confirm_password: Zeroizing::new(confirm_password.into()),
            error: None,
        }
    }

    /// Check the confirmation and length locally, then register
    pub async fn submit<P, R>(&mut self, store: &SessionStore<P, R>, navigator: &mut Navigator) -> bool
    where
        P: IdentityProvider + Sync + 'static,
        R: IdentityRepository + 'static,
    {
        self.error = None;

        if *self.password != *self.confirm_password {
            self.error = Some(AuthError::PasswordMismatch.to_string());
            return false;
        }

        let min = store.config().min_password_length;
        if self.password.chars().count() < min {
            self.error = Some(AuthError::PasswordTooShort { min }.to_string());
            return false;
        }

        match store.register(&self.email, &self.password, &self.name).await {
            Ok(_) => {
                navigator.push(Route::HOME.path());
                true
            }
            Err(e) => {
                self.error = Some(failure_message(&e, REGISTER_FAILED));
                false
            }
        }
    }
}

#[derive(Debug, Default)]
pub struct ResetPasswordForm {
    pub email: String,
    pub error: Option<String>,
    /// "Check your email" state
    pub sent: bool,
}

impl ResetPasswordForm {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            ..Default::default()
        }
    }

    pub async fn submit<P, R>(&mut self, store: &SessionStore<P, R>) -> bool
    where
        P: IdentityProvider + Sync + 'static,
        R: IdentityRepository + 'static,
    {
        self.error = None;
        match store.reset_password(&self.email).await {
            Ok(()) => self.sent = true,
            Err(_) => self.error = Some(RESET_FAILED.to_string()),
        }
        self.sent
    }
}

/// Logout from the sidebar or header menu
pub fn logout<P, R>(store: &SessionStore<P, R>, navigator: &mut Navigator)
where
    P: IdentityProvider + Sync + 'static,
    R: IdentityRepository + 'static,
{
    store.logout();
    navigator.push(Route::SIGN_IN.path());
}

/// Follow a header menu item
pub fn activate<P, R>(item: &MenuItem, store: &SessionStore<P, R>, navigator: &mut Navigator)
where
    P: IdentityProvider + Sync + 'static,
    R: IdentityRepository + 'static,
{
    match item.action {
        MenuAction::Navigate(path) => navigator.push(path),
        MenuAction::Logout => logout(store, navigator),
    }
}
