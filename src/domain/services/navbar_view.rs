use crate::config::NavbarConfig;
use crate::domain::models::{NavLink, NavbarState};

/// Theme toggle glyph. Shows the theme a click switches to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeIcon {
    Sun,
    Moon,
}

impl ThemeIcon {
    pub fn for_dark_mode(dark_mode: bool) -> Self {
        if dark_mode { ThemeIcon::Sun } else { ThemeIcon::Moon }
    }

    /// SVG path data (24x24 outline).
    pub fn path(&self) -> &'static str {
        match self {
            ThemeIcon::Sun => "M12 3v1m0 16v1m9-9h-1M4 12H3m15.364 6.364l-.707-.707M6.343 6.343l-.707-.707m12.728 0l-.707.707M6.343 17.657l-.707.707M16 12a4 4 0 11-8 0 4 4 0 018 0z",
            ThemeIcon::Moon => "M20.354 15.354A9 9 0 018.646 3.646 9.003 9.003 0 0012 21a9.003 9.003 0 008.354-5.646z",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ThemeIcon::Sun => "Switch to light theme",
            ThemeIcon::Moon => "Switch to dark theme",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinkView {
    pub id: u32,
    pub label: &'static str,
    pub href: &'static str,
    pub active: bool,
    pub class: String,
}

impl LinkView {
    fn new(link: &NavLink, current_path: &str, base_class: &str) -> Self {
        let active = link.is_active(current_path);
        let class = if active {
            format!("{base_class} is-active")
        } else {
            base_class.to_string()
        };
        Self { id: link.id, label: link.name, href: link.href, active, class }
    }
}

/// Everything the navbar shows when it is not suppressed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VisibleNavbar {
    pub root_class: String,
    pub logo_src: String,
    pub desktop_links: Vec<LinkView>,
    pub theme_icon: ThemeIcon,
    /// Raw count, present only when the cart is not empty.
    pub cart_badge: Option<u32>,
    pub hamburger_open: bool,
    /// One class per bar, top to bottom.
    pub hamburger_bars: [&'static str; 3],
    pub mobile_panel_class: &'static str,
    pub mobile_links: Vec<LinkView>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavbarView {
    /// Checkout pages: no content, root marked hidden.
    Hidden,
    Visible(VisibleNavbar),
}

impl NavbarView {
    pub const HIDDEN_CLASS: &'static str = "c-navbar hidden";

    /// Full rebuild from the current state; there is no incremental diffing.
    pub fn build(
        state: &NavbarState,
        links: &[NavLink],
        current_path: &str,
        config: &NavbarConfig,
    ) -> Self {
        if state.is_checkout_path(current_path) {
            return NavbarView::Hidden;
        }

        let mut root_class = String::from("c-navbar");
        root_class.push_str(if state.scrolled { " c-navbar--scrolled" } else { " c-navbar--top" });
        if state.dark_mode {
            root_class.push_str(" dark");
        }

        let open = state.mobile_menu_open;
        let hamburger_bars = if open {
            [
                "c-hamburger__bar c-hamburger__bar--top-open",
                "c-hamburger__bar c-hamburger__bar--middle-open",
                "c-hamburger__bar c-hamburger__bar--bottom-open",
            ]
        } else {
            ["c-hamburger__bar", "c-hamburger__bar", "c-hamburger__bar"]
        };

        NavbarView::Visible(VisibleNavbar {
            root_class,
            logo_src: config.logo_for(state.dark_mode).to_string(),
            desktop_links: links
                .iter()
                .map(|link| LinkView::new(link, current_path, "c-navbar__link"))
                .collect(),
            theme_icon: ThemeIcon::for_dark_mode(state.dark_mode),
            cart_badge: (state.cart_amount > 0).then_some(state.cart_amount),
            hamburger_open: open,
            hamburger_bars,
            mobile_panel_class: if open {
                "c-navbar__mobile c-navbar__mobile--open"
            } else {
                "c-navbar__mobile c-navbar__mobile--closed"
            },
            mobile_links: links
                .iter()
                .map(|link| LinkView::new(link, current_path, "c-navbar__mobile-link"))
                .collect(),
        })
    }

    pub fn is_hidden(&self) -> bool {
        matches!(self, NavbarView::Hidden)
    }

    pub fn visible(&self) -> Option<&VisibleNavbar> {
        match self {
            NavbarView::Visible(view) => Some(view),
            NavbarView::Hidden => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{default_links, NavAction};

    fn make_state() -> NavbarState {
        NavbarState::new(&NavbarConfig::default(), false)
    }

    fn build(state: &NavbarState, path: &str) -> NavbarView {
        NavbarView::build(state, &default_links(), path, &NavbarConfig::default())
    }

    fn visible(state: &NavbarState, path: &str) -> VisibleNavbar {
        build(state, path).visible().cloned().expect("navbar should be visible")
    }

    #[test]
    fn test_badge_shows_exact_count() {
        let mut state = make_state();
        for amount in [1, 2, 9, 99, 100, 12_345] {
            state.set_cart_amount(amount);
            assert_eq!(visible(&state, "/").cart_badge, Some(amount));
        }
    }

    #[test]
    fn test_no_badge_for_empty_cart() {
        let state = make_state();
        assert_eq!(visible(&state, "/").cart_badge, None);
    }

    #[test]
    fn test_hidden_on_checkout_regardless_of_state() {
        let mut state = make_state();
        state.set_cart_amount(4);
        state.apply(NavAction::ToggleMobileMenu);
        state.apply(NavAction::ToggleDarkMode);
        state.observe_scroll(300.0, 50.0);

        for path in ["/checkout", "/checkout/step1", "/shop/checkout"] {
            assert!(build(&state, path).is_hidden(), "expected hidden on {path}");
        }
    }

    #[test]
    fn test_new_checkout_prefix_hides_next_render() {
        let mut state = make_state();
        assert!(!build(&state, "/new-checkout/step1").is_hidden());

        state.set_checkout_path_prefix("/new-checkout".to_string());

        assert!(build(&state, "/new-checkout/step1").is_hidden());
    }

    #[test]
    fn test_only_current_link_is_active() {
        let view = visible(&make_state(), "/shop");

        for links in [&view.desktop_links, &view.mobile_links] {
            let active: Vec<&str> = links.iter().filter(|l| l.active).map(|l| l.label).collect();
            assert_eq!(active, vec!["Shop"]);
        }
        assert_eq!(view.desktop_links[1].class, "c-navbar__link is-active");
        assert_eq!(view.desktop_links[0].class, "c-navbar__link");
        assert_eq!(view.mobile_links[1].class, "c-navbar__mobile-link is-active");
    }

    #[test]
    fn test_root_class_tracks_scroll_and_theme() {
        let mut state = make_state();
        assert_eq!(visible(&state, "/").root_class, "c-navbar c-navbar--top");

        state.observe_scroll(51.0, 50.0);
        state.apply(NavAction::ToggleDarkMode);

        assert_eq!(visible(&state, "/").root_class, "c-navbar c-navbar--scrolled dark");
    }

    #[test]
    fn test_theme_icon_and_logo_follow_dark_mode() {
        let mut state = make_state();
        let light = visible(&state, "/");
        assert_eq!(light.theme_icon, ThemeIcon::Moon);
        assert_eq!(light.logo_src, NavbarConfig::default().logo_light);

        state.apply(NavAction::ToggleDarkMode);
        let dark = visible(&state, "/");
        assert_eq!(dark.theme_icon, ThemeIcon::Sun);
        assert_eq!(dark.logo_src, NavbarConfig::default().logo_dark);
    }

    #[test]
    fn test_menu_open_then_link_click_collapses_panel() {
        let mut state = make_state();

        state.apply(NavAction::ToggleMobileMenu);
        let open = visible(&state, "/");
        assert!(open.hamburger_open);
        assert_eq!(open.mobile_panel_class, "c-navbar__mobile c-navbar__mobile--open");
        assert!(open.hamburger_bars[0].ends_with("--top-open"));

        state.apply(NavAction::CloseMobileMenu);
        let closed = visible(&state, "/about");
        assert!(!state.mobile_menu_open);
        assert_eq!(closed.mobile_panel_class, "c-navbar__mobile c-navbar__mobile--closed");
        assert_eq!(closed.hamburger_bars, ["c-hamburger__bar"; 3]);
    }

    #[test]
    fn test_build_is_idempotent() {
        let mut state = make_state();
        state.set_cart_amount(3);
        assert_eq!(build(&state, "/contact"), build(&state, "/contact"));
    }
}
