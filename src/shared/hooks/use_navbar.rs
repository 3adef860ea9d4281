use crate::config::NavbarConfig;
use crate::domain::models::{Effect, NavAction, NavbarState, Transition};
use crate::domain::services::{action_for, ElementRole, UiEvent};
use crate::shared::logging;
use crate::shared::services::NavbarEnv;
use dioxus::prelude::*;

/// Handle to the navbar widget, shared through the Dioxus context.
///
/// Every mutation goes through a [`NavbarState`] transition; the state signal
/// is written (and the navbar re-rendered) only when the transition asks for it.
#[derive(Clone, Copy)]
pub struct NavbarController {
    state: Signal<NavbarState>,
    env: Signal<NavbarEnv>,
    config: Signal<NavbarConfig>,
}

impl NavbarController {
    /// Current state snapshot. Subscribes the calling component.
    pub fn state(&self) -> NavbarState {
        NavbarState::clone(&self.state.read())
    }

    pub fn config(&self) -> NavbarConfig {
        NavbarConfig::clone(&self.config.read())
    }

    pub fn cart_amount(&self) -> u32 {
        self.state.read().cart_amount
    }

    pub fn is_dark_mode(&self) -> bool {
        self.state.read().dark_mode
    }

    /// Run one bound action. Returns effects meant for external collaborators.
    pub fn dispatch(&mut self, action: NavAction) -> Vec<Effect> {
        let mut next = NavbarState::clone(&self.state.peek());
        let transition = next.apply(action);
        logging::log_action(action, transition.rerender);
        self.commit(next, transition)
    }

    /// Look up and run the action bound to `role`. Unbound roles are a no-op.
    pub fn activate(&mut self, role: ElementRole) -> Vec<Effect> {
        match action_for(role, UiEvent::Activate) {
            Some(action) => self.dispatch(action),
            None => Vec::new(),
        }
    }

    pub fn on_scroll(&mut self, offset: f64) {
        let threshold = self.config.peek().scroll_threshold;
        let mut next = NavbarState::clone(&self.state.peek());
        let transition = next.observe_scroll(offset, threshold);
        if transition.rerender {
            logging::log_scroll_crossing(offset, next.scrolled);
        }
        self.commit(next, transition);
    }

    pub fn set_cart_amount(&mut self, amount: u32) {
        let mut next = NavbarState::clone(&self.state.peek());
        let transition = next.set_cart_amount(amount);
        logging::log_cart_amount(amount);
        self.commit(next, transition);
    }

    pub fn set_checkout_path_prefix(&mut self, prefix: impl Into<String>) {
        let mut next = NavbarState::clone(&self.state.peek());
        let transition = next.set_checkout_path_prefix(prefix.into());
        logging::log_checkout_prefix(&next.checkout_path_prefix);
        self.commit(next, transition);
    }

    fn commit(&mut self, next: NavbarState, transition: Transition) -> Vec<Effect> {
        if transition.rerender {
            self.state.set(next);
        }
        self.env.peek().run(transition.effects)
    }
}

/// Create the navbar widget from the bundled configuration.
pub fn use_navbar() -> NavbarController {
    use_navbar_with(NavbarConfig::load)
}

/// Create the navbar widget and provide it to descendants.
///
/// Resolves the initial theme and marks the document before the first render.
pub fn use_navbar_with(init: impl FnOnce() -> NavbarConfig) -> NavbarController {
    use_context_provider(move || {
        let config = init();
        let env = NavbarEnv::platform(&config);
        let dark_mode = env.initialize_theme();
        NavbarController {
            state: Signal::new(NavbarState::new(&config, dark_mode)),
            env: Signal::new(env),
            config: Signal::new(config),
        }
    })
}

/// Access the widget from a descendant (cart subsystem, router glue).
pub fn use_navbar_handle() -> NavbarController {
    use_context::<NavbarController>()
}
