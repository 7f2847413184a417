//! Route Table
//!
//! Every path the client knows about. Three public auth pages; everything
//! else sits behind the route guard. `/` and unknown paths redirect to
//! the dashboard.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    // Auth pages
    Login,
    Register,
    ForgotPassword,

    // Protected
    Dashboard,
    Courses,
    LearningPaths,
    Mentors,
    Enterprise,
    HelpCenter,
    Faq,
    Contact,
    Feedback,
    PrivacyPolicy,
    TermsOfService,
    CookiePolicy,
    Security,
    Sitemap,
    Accessibility,
    Community,
    Settings,
}

impl Route {
    pub const ALL: [Route; 20] = [
        Route::Login,
        Route::Register,
        Route::ForgotPassword,
        Route::Dashboard,
        Route::Courses,
        Route::LearningPaths,
        Route::Mentors,
        Route::Enterprise,
        Route::HelpCenter,
        Route::Faq,
        Route::Contact,
        Route::Feedback,
        Route::PrivacyPolicy,
        Route::TermsOfService,
        Route::CookiePolicy,
        Route::Security,
        Route::Sitemap,
        Route::Accessibility,
        Route::Community,
        Route::Settings,
    ];

    /// Where unauthenticated visitors are sent
    pub const SIGN_IN: Route = Route::Login;

    /// Where `/`, unknown paths and successful sign-ins land
    pub const HOME: Route = Route::Dashboard;

    pub const fn path(self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Register => "/register",
            Route::ForgotPassword => "/forgot-password",
            Route::Dashboard => "/dashboard",
            Route::Courses => "/courses",
            Route::LearningPaths => "/learning-paths",
            Route::Mentors => "/mentors",
            Route::Enterprise => "/enterprise",
            Route::HelpCenter => "/help-center",
            Route::Faq => "/faq",
            Route::Contact => "/contact",
            Route::Feedback => "/feedback",
            Route::PrivacyPolicy => "/privacy-policy",
            Route::TermsOfService => "/terms-of-service",
            Route::CookiePolicy => "/cookie-policy",
            Route::Security => "/security",
            Route::Sitemap => "/sitemap",
            Route::Accessibility => "/accessibility",
            Route::Community => "/community",
            Route::Settings => "/settings",
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Route::Login => "Login",
            Route::Register => "Register",
            Route::ForgotPassword => "Forgot Password",
            Route::Dashboard => "Dashboard",
            Route::Courses => "Courses",
            Route::LearningPaths => "Learning Paths",
            Route::Mentors => "Mentors",
            Route::Enterprise => "Enterprise",
            Route::HelpCenter => "Help Center",
            Route::Faq => "FAQ",
            Route::Contact => "Contact Us",
            Route::Feedback => "Feedback",
            Route::PrivacyPolicy => "Privacy Policy",
            Route::TermsOfService => "Terms of Service",
            Route::CookiePolicy => "Cookie Policy",
            Route::Security => "Security",
            Route::Sitemap => "Sitemap",
            Route::Accessibility => "Accessibility",
            Route::Community => "Community",
            Route::Settings => "Settings",
        }
    }

    pub const fn is_auth_page(self) -> bool {
        matches!(self, Route::Login | Route::Register | Route::ForgotPassword)
    }

    pub const fn is_protected(self) -> bool {
        !self.is_auth_page()
    }

    /// Exact match, ignoring a trailing slash
    pub fn from_path(path: &str) -> Option<Route> {
        let path = normalize(path);
        Route::ALL.into_iter().find(|route| route.path() == path)
    }

    pub fn protected() -> impl Iterator<Item = Route> {
        Route::ALL.into_iter().filter(|route| route.is_protected())
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

fn normalize(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}

/// Outcome of looking a path up in the route table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Matched(Route),
    /// Replace the current history entry with this route
    Redirect(Route),
}

pub fn resolve(path: &str) -> Resolution {
    match Route::from_path(path) {
        Some(route) => Resolution::Matched(route),
        None => Resolution::Redirect(Route::HOME),
    }
}

// ============================================================================
// Link lists
// ============================================================================

/// A labelled link to a path
///
/// Paths are plain strings: some links point at pages that are not in the
/// route table and fall through to the dashboard redirect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub path: &'static str,
}

impl NavLink {
    pub const fn new(label: &'static str, path: &'static str) -> Self {
        Self { label, path }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkGroup {
    pub title: &'static str,
    pub links: &'static [NavLink],
}

pub const SITEMAP: &[LinkGroup] = &[
    LinkGroup {
        title: "Main Pages",
        links: &[
            NavLink::new("Dashboard", "/dashboard"),
            NavLink::new("Courses", "/courses"),
            NavLink::new("Learning Paths", "/learning-paths"),
            NavLink::new("Progress", "/progress"),
            NavLink::new("Community", "/community"),
        ],
    },
    LinkGroup {
        title: "Account & Profile",
        links: &[
            NavLink::new("Login", "/login"),
            NavLink::new("Register", "/register"),
            NavLink::new("Forgot Password", "/forgot-password"),
        ],
    },
    LinkGroup {
        title: "Support",
        links: &[
            NavLink::new("Help Center", "/help-center"),
            NavLink::new("FAQ", "/faq"),
            NavLink::new("Contact Us", "/contact"),
            NavLink::new("Feedback", "/feedback"),
        ],
    },
    LinkGroup {
        title: "Legal & Privacy",
        links: &[
            NavLink::new("Privacy Policy", "/privacy-policy"),
            NavLink::new("Terms of Service", "/terms-of-service"),
            NavLink::new("Cookie Policy", "/cookie-policy"),
            NavLink::new("Security", "/security"),
        ],
    },
    LinkGroup {
        title: "Additional Resources",
        links: &[
            NavLink::new("Accessibility", "/accessibility"),
            NavLink::new("Enterprise", "/enterprise"),
            NavLink::new("Mentors", "/mentors"),
        ],
    },
];
