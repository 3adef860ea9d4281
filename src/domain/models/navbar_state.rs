use crate::config::NavbarConfig;
use serde::Serialize;

/// User-triggered actions the navbar reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum NavAction {
    ToggleMobileMenu,
    ToggleDarkMode,
    OpenCart,
    CloseMobileMenu,
}

impl NavAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            NavAction::ToggleMobileMenu => "toggle_mobile_menu",
            NavAction::ToggleDarkMode => "toggle_dark_mode",
            NavAction::OpenCart => "open_cart",
            NavAction::CloseMobileMenu => "close_mobile_menu",
        }
    }
}

/// Side effects a transition asks the environment to perform.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Add or remove the `dark` marker on the document root.
    ApplyThemeMarker(bool),
    /// Write the dark-mode preference to durable storage.
    PersistDarkMode(bool),
    /// Hand the click to the cart collaborator.
    OpenCart,
}

/// Outcome of one state transition.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Transition {
    pub rerender: bool,
    pub effects: Vec<Effect>,
}

impl Transition {
    fn rerender() -> Self {
        Self { rerender: true, effects: Vec::new() }
    }

    fn unchanged() -> Self {
        Self::default()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavbarState {
    pub cart_amount: u32,
    pub checkout_path_prefix: String,
    pub dark_mode: bool,
    pub mobile_menu_open: bool,
    pub scrolled: bool,
}

impl NavbarState {
    pub fn new(config: &NavbarConfig, dark_mode: bool) -> Self {
        Self {
            cart_amount: config.initial_cart_amount,
            checkout_path_prefix: config.checkout_path_prefix.clone(),
            dark_mode,
            mobile_menu_open: false,
            scrolled: false,
        }
    }

    pub fn apply(&mut self, action: NavAction) -> Transition {
        match action {
            NavAction::ToggleMobileMenu => {
                self.mobile_menu_open = !self.mobile_menu_open;
                Transition::rerender()
            }
            NavAction::ToggleDarkMode => {
                self.dark_mode = !self.dark_mode;
                Transition {
                    rerender: true,
                    effects: vec![
                        Effect::ApplyThemeMarker(self.dark_mode),
                        Effect::PersistDarkMode(self.dark_mode),
                    ],
                }
            }
            NavAction::OpenCart => Transition {
                rerender: false,
                effects: vec![Effect::OpenCart],
            },
            NavAction::CloseMobileMenu => {
                self.mobile_menu_open = false;
                Transition::rerender()
            }
        }
    }

    /// Only a flip of the scrolled flag re-renders.
    pub fn observe_scroll(&mut self, offset: f64, threshold: f64) -> Transition {
        let scrolled = offset > threshold;
        if scrolled == self.scrolled {
            return Transition::unchanged();
        }
        self.scrolled = scrolled;
        Transition::rerender()
    }

    pub fn set_cart_amount(&mut self, amount: u32) -> Transition {
        self.cart_amount = amount;
        Transition::rerender()
    }

    pub fn set_checkout_path_prefix(&mut self, prefix: String) -> Transition {
        self.checkout_path_prefix = prefix;
        Transition::rerender()
    }

    /// An empty prefix never matches.
    pub fn is_checkout_path(&self, current_path: &str) -> bool {
        !self.checkout_path_prefix.is_empty() && current_path.contains(&self.checkout_path_prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_state() -> NavbarState {
        NavbarState::new(&NavbarConfig::default(), false)
    }

    #[test]
    fn test_new_state_uses_config_defaults() {
        let state = make_state();

        assert_eq!(state.cart_amount, 0);
        assert_eq!(state.checkout_path_prefix, "/checkout");
        assert!(!state.dark_mode);
        assert!(!state.mobile_menu_open);
        assert!(!state.scrolled);
    }

    #[test]
    fn test_hamburger_then_link_closes_menu() {
        let mut state = make_state();

        assert!(state.apply(NavAction::ToggleMobileMenu).rerender);
        assert!(state.mobile_menu_open);

        assert!(state.apply(NavAction::CloseMobileMenu).rerender);
        assert!(!state.mobile_menu_open);
    }

    #[test]
    fn test_toggle_dark_mode_emits_marker_and_persist_effects() {
        let mut state = make_state();

        let transition = state.apply(NavAction::ToggleDarkMode);

        assert!(state.dark_mode);
        assert!(transition.rerender);
        assert_eq!(
            transition.effects,
            vec![Effect::ApplyThemeMarker(true), Effect::PersistDarkMode(true)]
        );
    }

    #[test]
    fn test_open_cart_leaves_state_untouched() {
        let mut state = make_state();
        let before = state.clone();

        let transition = state.apply(NavAction::OpenCart);

        assert_eq!(state, before);
        assert!(!transition.rerender);
        assert_eq!(transition.effects, vec![Effect::OpenCart]);
    }

    #[test]
    fn test_scroll_crossing_threshold_rerenders_twice() {
        let mut state = make_state();
        let offsets = [0.0, 10.0, 49.0, 50.0, 51.0, 120.0, 300.0, 80.0, 50.0, 20.0, 0.0];

        let rerenders = offsets
            .iter()
            .filter(|offset| state.observe_scroll(**offset, 50.0).rerender)
            .count();

        assert_eq!(rerenders, 2);
        assert!(!state.scrolled);
    }

    #[test]
    fn test_scroll_threshold_is_exclusive() {
        let mut state = make_state();

        assert!(!state.observe_scroll(50.0, 50.0).rerender);
        assert!(state.observe_scroll(50.5, 50.0).rerender);
        assert!(state.scrolled);
    }

    #[test]
    fn test_external_mutators_always_rerender() {
        let mut state = make_state();

        assert!(state.set_cart_amount(7).rerender);
        assert_eq!(state.cart_amount, 7);

        assert!(state.set_checkout_path_prefix("/new-checkout".to_string()).rerender);
        assert!(state.is_checkout_path("/new-checkout/step1"));
        assert!(!state.is_checkout_path("/checkout"));
    }

    #[test]
    fn test_empty_prefix_never_hides() {
        let mut state = make_state();
        state.set_checkout_path_prefix(String::new());

        assert!(!state.is_checkout_path("/"));
        assert!(!state.is_checkout_path("/checkout"));
    }
}
