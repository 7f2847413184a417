//! Route Guard
//!
//! Decides, for the current session and a requested route, whether to
//! show the waiting indicator, redirect to sign-in, or render the page
//! inside the layout shell. Evaluated fresh on every render.

use crate::domain::entity::Session;
use crate::presentation::layout::LayoutShell;
use crate::presentation::routes::Route;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Waiting indicator only; no content, no redirect
    Wait,
    /// Replace the current history entry with this route
    Redirect(Route),
    Render { route: Route, shell: LayoutShell },
}

/// Apply the guard to a protected route
///
/// Any identity grants every protected route.
pub fn check(session: &Session, route: Route) -> GuardDecision {
    if session.loading() {
        tracing::debug!(path = route.path(), "Guard: waiting for session");
        return GuardDecision::Wait;
    }

    match session.identity() {
        None => {
            tracing::debug!(path = route.path(), "Guard: not signed in, redirecting");
            GuardDecision::Redirect(Route::SIGN_IN)
        }
        Some(identity) => {
            tracing::debug!(path = route.path(), user_id = %identity.id, "Guard: render");
            GuardDecision::Render {
                route,
                shell: LayoutShell::new(identity, route),
            }
        }
    }
}
