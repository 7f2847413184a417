//! Navigator
//!
//! History of visited paths and the render loop that resolves the
//! current path into a [`Screen`], following redirects.

use crate::domain::entity::Session;
use crate::presentation::guard::{self, GuardDecision};
use crate::presentation::layout::LayoutShell;
use crate::presentation::routes::{self, Resolution, Route};

/// What the client shows for the current path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    /// Waiting indicator
    Loading,
    /// Auth page, no shell
    Public(Route),
    Protected { route: Route, shell: LayoutShell },
}

impl Screen {
    pub fn route(&self) -> Option<Route> {
        match self {
            Screen::Loading => None,
            Screen::Public(route) | Screen::Protected { route, .. } => Some(*route),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    history: Vec<String>,
}

impl Navigator {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            history: vec![path.into()],
        }
    }

    pub fn current(&self) -> &str {
        self.history.last().map(String::as_str).unwrap_or("/")
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn push(&mut self, path: impl Into<String>) {
        self.history.push(path.into());
    }

    pub fn replace(&mut self, path: impl Into<String>) {
        let path = path.into();
        match self.history.last_mut() {
            Some(current) => *current = path,
            None => self.history.push(path),
        }
    }

    /// Resolve the current path against `session`
    ///
    /// Redirects rewrite the current history entry. At most two redirects
    /// happen: unknown path to home, then home to sign-in.
    pub fn render(&mut self, session: &Session) -> Screen {
        loop {
            let route = match routes::resolve(self.current()) {
                Resolution::Matched(route) => route,
                Resolution::Redirect(to) => {
                    tracing::debug!(from = self.current(), to = to.path(), "Redirect");
                    self.replace(to.path());
                    continue;
                }
            };

            if route.is_auth_page() {
                return Screen::Public(route);
            }

            match guard::check(session, route) {
                GuardDecision::Wait => return Screen::Loading,
                GuardDecision::Redirect(to) => self.replace(to.path()),
                GuardDecision::Render { route, shell } => {
                    return Screen::Protected { route, shell };
                }
            }
        }
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new("/")
    }
}
