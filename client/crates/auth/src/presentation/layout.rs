//! Layout Shell
//!
//! The frame every protected view renders inside, as data: brand, the
//! signed-in user, sidebar, header menu and footer.

use crate::domain::entity::Identity;
use crate::presentation::routes::{LinkGroup, NavLink, Route};

pub const BRAND: &str = "Learning Hub";

pub const SIDEBAR: &[NavLink] = &[
    NavLink::new("Dashboard", "/dashboard"),
    NavLink::new("Courses", "/courses"),
    NavLink::new("Learning Paths", "/learning-paths"),
    NavLink::new("Mentors", "/mentors"),
    NavLink::new("Community", "/community"),
    NavLink::new("Help Center", "/help-center"),
];

pub const HEADER_MENU: &[MenuItem] = &[
    MenuItem::link("My Profile", "/profile"),
    MenuItem::link("Settings", "/settings"),
    MenuItem::logout(),
];

pub const FOOTER_COLUMNS: &[LinkGroup] = &[
    LinkGroup {
        title: "Platform",
        links: &[
            NavLink::new("Courses", "/courses"),
            NavLink::new("Learning Paths", "/learning-paths"),
            NavLink::new("Mentors", "/mentors"),
            NavLink::new("Enterprise", "/enterprise"),
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
        title: "Legal",
        links: &[
            NavLink::new("Privacy Policy", "/privacy-policy"),
            NavLink::new("Terms of Service", "/terms-of-service"),
            NavLink::new("Cookie Policy", "/cookie-policy"),
            NavLink::new("Security", "/security"),
        ],
    },
];

pub const FOOTER_BOTTOM: &[NavLink] = &[
    NavLink::new("Sitemap", "/sitemap"),
    NavLink::new("Accessibility", "/accessibility"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Navigate(&'static str),
    Logout,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub label: &'static str,
    pub action: MenuAction,
}

impl MenuItem {
    const fn link(label: &'static str, path: &'static str) -> Self {
        Self {
            label,
            action: MenuAction::Navigate(path),
        }
    }

    const fn logout() -> Self {
        Self {
            label: "Logout",
            action: MenuAction::Logout,
        }
    }
}

/// Who is shown as signed in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSection {
    pub name: String,
    pub email: String,
    pub avatar_url: String,
}

impl From<&Identity> for UserSection {
    fn from(identity: &Identity) -> Self {
        Self {
            name: identity.name.to_string(),
            email: identity.email.to_string(),
            avatar_url: identity.avatar_url.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SidebarEntry {
    pub link: NavLink,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutShell {
    pub brand: &'static str,
    pub user: UserSection,
    pub sidebar: Vec<SidebarEntry>,
    pub header_menu: &'static [MenuItem],
    pub footer_columns: &'static [LinkGroup],
    pub footer_bottom: &'static [NavLink],
}

impl LayoutShell {
    /// Shell for `identity` viewing `current`
    pub fn new(identity: &Identity, current: Route) -> Self {
        let sidebar = SIDEBAR
            .iter()
            .map(|&link| SidebarEntry {
                link,
                active: link.path == current.path(),
            })
            .collect();

        Self {
            brand: BRAND,
            user: UserSection::from(identity),
            sidebar,
            header_menu: HEADER_MENU,
            footer_columns: FOOTER_COLUMNS,
            footer_bottom: FOOTER_BOTTOM,
        }
    }

    /// The highlighted sidebar entry; `None` for pages not in the sidebar
    pub fn active_entry(&self) -> Option<&SidebarEntry> {
        self.sidebar.iter().find(|entry| entry.active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::{DisplayName, Email};

    fn identity() -> Identity {
        Identity::new(
            Email::new("a@x.com").unwrap(),
            DisplayName::new("Test User").unwrap(),
            "https://ui-avatars.com/api/",
        )
    }

    #[test]
    fn test_user_section() {
        let shell = LayoutShell::new(&identity(), Route::Dashboard);
        assert_eq!(shell.brand, "Learning Hub");
        assert_eq!(shell.user.name, "Test User");
        assert_eq!(shell.user.email, "a@x.com");
        assert_eq!(
            shell.user.avatar_url,
            "https://ui-avatars.com/api/?name=Test%20User"
        );
    }

    #[test]
    fn test_sidebar_order_and_active() {
        let shell = LayoutShell::new(&identity(), Route::Mentors);

        let labels: Vec<_> = shell.sidebar.iter().map(|e| e.link.label).collect();
        assert_eq!(
            labels,
            [
                "Dashboard",
                "Courses",
                "Learning Paths",
                "Mentors",
                "Community",
                "Help Center"
            ]
        );
        assert_eq!(shell.active_entry().unwrap().link.label, "Mentors");
        assert_eq!(shell.sidebar.iter().filter(|e| e.active).count(), 1);
    }

    #[test]
    fn test_no_active_entry_off_sidebar() {
        let shell = LayoutShell::new(&identity(), Route::Settings);
        assert!(shell.active_entry().is_none());
    }

    #[test]
    fn test_header_menu_ends_with_logout() {
        let labels: Vec<_> = HEADER_MENU.iter().map(|item| item.label).collect();
        assert_eq!(labels, ["My Profile", "Settings", "Logout"]);
        assert_eq!(HEADER_MENU[2].action, MenuAction::Logout);
    }

    #[test]
    fn test_footer() {
        let titles: Vec<_> = FOOTER_COLUMNS.iter().map(|c| c.title).collect();
        assert_eq!(titles, ["Platform", "Support", "Legal"]);
        assert!(FOOTER_COLUMNS.iter().all(|c| c.links.len() == 4));
        assert_eq!(FOOTER_BOTTOM[0].path, "/sitemap");
    }
}
