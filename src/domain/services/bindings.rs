//! Declarative event table: which action each interactive element triggers.
//!
//! The navbar component looks up its handlers here after every render
//! instead of querying the rendered markup.

use crate::domain::models::NavAction;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElementRole {
    Hamburger,
    ThemeToggle,
    MobileThemeToggle,
    CartButton,
    Logo,
    DesktopLink,
    MobileLink,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UiEvent {
    /// Click or tap.
    Activate,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Binding {
    pub role: ElementRole,
    pub event: UiEvent,
    pub action: NavAction,
}

const fn bind(role: ElementRole, action: NavAction) -> Binding {
    Binding { role, event: UiEvent::Activate, action }
}

// Link navigation itself belongs to the router; the binding only closes the menu.
pub const BINDINGS: [Binding; 7] = [
    bind(ElementRole::Hamburger, NavAction::ToggleMobileMenu),
    bind(ElementRole::ThemeToggle, NavAction::ToggleDarkMode),
    bind(ElementRole::MobileThemeToggle, NavAction::ToggleDarkMode),
    bind(ElementRole::CartButton, NavAction::OpenCart),
    bind(ElementRole::Logo, NavAction::CloseMobileMenu),
    bind(ElementRole::DesktopLink, NavAction::CloseMobileMenu),
    bind(ElementRole::MobileLink, NavAction::CloseMobileMenu),
];

/// `None` when the role has no binding for the event.
pub fn action_for(role: ElementRole, event: UiEvent) -> Option<NavAction> {
    BINDINGS
        .iter()
        .find(|binding| binding.role == role && binding.event == event)
        .map(|binding| binding.action)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_one_binding_per_role() {
        let roles: HashSet<ElementRole> = BINDINGS.iter().map(|b| b.role).collect();
        assert_eq!(roles.len(), BINDINGS.len());
    }

    #[test]
    fn test_both_theme_toggles_share_action() {
        assert_eq!(
            action_for(ElementRole::ThemeToggle, UiEvent::Activate),
            Some(NavAction::ToggleDarkMode)
        );
        assert_eq!(
            action_for(ElementRole::MobileThemeToggle, UiEvent::Activate),
            Some(NavAction::ToggleDarkMode)
        );
    }

    #[test]
    fn test_links_close_mobile_menu() {
        for role in [ElementRole::Logo, ElementRole::DesktopLink, ElementRole::MobileLink] {
            assert_eq!(action_for(role, UiEvent::Activate), Some(NavAction::CloseMobileMenu));
        }
    }

    #[test]
    fn test_cart_and_hamburger() {
        assert_eq!(action_for(ElementRole::CartButton, UiEvent::Activate), Some(NavAction::OpenCart));
        assert_eq!(
            action_for(ElementRole::Hamburger, UiEvent::Activate),
            Some(NavAction::ToggleMobileMenu)
        );
    }
}
