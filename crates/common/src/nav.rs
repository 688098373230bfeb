//! # Navigation State
//!
//! Navbar links and the two pieces of transient navbar state: whether the
//! page has scrolled past the threshold, and whether the mobile menu is open.

/// An in-page anchor link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_LINKS: [NavLink; 3] = [
    NavLink {
        label: "Ecosystem",
        href: "#ecosystem",
    },
    NavLink {
        label: "Technology",
        href: "#technology",
    },
    NavLink {
        label: "Contact",
        href: "#footer",
    },
];

/// Pixels of scroll before the navbar turns opaque.
pub const DEFAULT_SCROLL_THRESHOLD: f64 = 20.0;

/// Navbar UI state owned by one mounted navbar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavState {
    scroll_threshold: f64,
    scrolled: bool,
    menu_open: bool,
}

impl NavState {
    pub fn new(scroll_threshold: f64) -> Self {
        Self {
            scroll_threshold,
            scrolled: false,
            menu_open: false,
        }
    }

    pub fn scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    /// Apply a scroll position. Returns `true` when `scrolled` flipped.
    pub fn on_scroll(&mut self, scroll_y: f64) -> bool {
        let scrolled = scroll_y > self.scroll_threshold;
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Follow a link: closes the mobile menu and hands back the anchor so
    /// the browser still navigates to it.
    pub fn activate(&mut self, link: &NavLink) -> &'static str {
        self.close_menu();
        link.href
    }

    /// Accessible label for the mobile toggle.
    pub fn toggle_label(&self) -> &'static str {
        if self.menu_open {
            "Close menu"
        } else {
            "Open menu"
        }
    }

    pub fn bar_class(&self) -> &'static str {
        if self.scrolled {
            "navbar navbar-scrolled"
        } else {
            "navbar"
        }
    }
}

impl Default for NavState {
    fn default() -> Self {
        Self::new(DEFAULT_SCROLL_THRESHOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_then_link_closes() {
        let mut nav = NavState::default();
        assert!(!nav.menu_open());
        nav.toggle_menu();
        assert!(nav.menu_open());
        assert_eq!(nav.toggle_label(), "Close menu");

        let href = nav.activate(&NAV_LINKS[1]);
        assert_eq!(href, "#technology");
        assert!(!nav.menu_open());
        assert_eq!(nav.toggle_label(), "Open menu");
    }

    #[test]
    fn test_every_link_closes_menu() {
        for link in &NAV_LINKS {
            let mut nav = NavState::default();
            nav.toggle_menu();
            assert_eq!(nav.activate(link), link.href);
            assert!(!nav.menu_open());
        }
    }

    #[test]
    fn test_scroll_threshold() {
        let mut nav = NavState::new(20.0);
        assert!(!nav.on_scroll(0.0));
        assert!(!nav.on_scroll(20.0));
        assert!(nav.on_scroll(20.5));
        assert!(nav.scrolled());
        assert_eq!(nav.bar_class(), "navbar navbar-scrolled");
        assert!(!nav.on_scroll(400.0));
        assert!(nav.on_scroll(3.0));
        assert!(!nav.scrolled());
    }

    #[test]
    fn test_scroll_and_menu_are_independent() {
        let mut nav = NavState::default();
        nav.toggle_menu();
        nav.on_scroll(100.0);
        assert!(nav.menu_open());
        nav.toggle_menu();
        assert!(nav.scrolled());
    }

    #[test]
    fn test_anchor_targets() {
        let hrefs: Vec<&str> = NAV_LINKS.iter().map(|l| l.href).collect();
        assert_eq!(hrefs, ["#ecosystem", "#technology", "#footer"]);
    }
}
