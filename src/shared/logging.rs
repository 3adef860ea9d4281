//! Structured logging module for the storefront navbar
//!
//! Provides consistent, contextual logging across the widget.
//! Uses tracing structured fields keyed by operation.

use crate::config::NavbarConfig;
use crate::domain::models::NavAction;
use crate::shared::errors::AppError;

/// Operations that emit log events
#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    Theme,
    Render,
    Scroll,
    Cart,
    Navigation,
    Config,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::Theme => "theme",
            LogOperation::Render => "render",
            LogOperation::Scroll => "scroll",
            LogOperation::Cart => "cart",
            LogOperation::Navigation => "navigation",
            LogOperation::Config => "config",
        }
    }
}

/// Log the resolved initial theme
pub fn log_initial_theme(dark_mode: bool, from_storage: bool) {
    tracing::info!(
        operation = LogOperation::Theme.as_str(),
        dark_mode = dark_mode,
        from_storage = from_storage,
        "Resolved initial theme"
    );
}

/// Log a theme toggle
pub fn log_theme_toggled(dark_mode: bool) {
    tracing::debug!(
        operation = LogOperation::Theme.as_str(),
        dark_mode = dark_mode,
        "Theme toggled"
    );
}

/// Log a failed preference read or write
pub fn log_preference_error(key: &str, error: &AppError) {
    tracing::warn!(
        operation = LogOperation::Theme.as_str(),
        storage_key = key,
        error = %error,
        "Preference storage unavailable"
    );
}

/// Log a dispatched user action
pub fn log_action(action: NavAction, rerender: bool) {
    tracing::debug!(
        operation = LogOperation::Render.as_str(),
        action = action.as_str(),
        rerender = rerender,
        "Navbar action dispatched"
    );
}

/// Log a scroll boundary crossing
pub fn log_scroll_crossing(offset: f64, scrolled: bool) {
    tracing::trace!(
        operation = LogOperation::Scroll.as_str(),
        offset = offset,
        scrolled = scrolled,
        "Scroll threshold crossed"
    );
}

/// Log cart amount updates pushed by the cart subsystem
pub fn log_cart_amount(amount: u32) {
    tracing::debug!(
        operation = LogOperation::Cart.as_str(),
        cart_amount = amount,
        "Cart amount updated"
    );
}

/// Log a cart click with no collaborator attached
pub fn log_cart_unhandled() {
    tracing::info!(
        operation = LogOperation::Cart.as_str(),
        "Cart clicked - no cart handler attached"
    );
}

/// Log checkout path prefix changes pushed by the router
pub fn log_checkout_prefix(prefix: &str) {
    tracing::debug!(
        operation = LogOperation::Navigation.as_str(),
        checkout_path_prefix = prefix,
        "Checkout path prefix updated"
    );
}

/// Log the navbar hiding itself on a checkout page
pub fn log_hidden_on_checkout(path: &str, prefix: &str) {
    tracing::trace!(
        operation = LogOperation::Navigation.as_str(),
        path = path,
        checkout_path_prefix = prefix,
        "Navbar hidden on checkout path"
    );
}

/// Log successful configuration load
pub fn log_config_loaded(config: &NavbarConfig) {
    tracing::debug!(
        operation = LogOperation::Config.as_str(),
        storage_key = %config.storage_key,
        scroll_threshold = config.scroll_threshold,
        checkout_path_prefix = %config.checkout_path_prefix,
        "Navbar configuration loaded"
    );
}

/// Log configuration fallback to defaults
pub fn log_config_fallback(error: &AppError) {
    tracing::warn!(
        operation = LogOperation::Config.as_str(),
        error = %error,
        "Invalid navbar configuration, using defaults"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_operation_as_str() {
        assert_eq!(LogOperation::Theme.as_str(), "theme");
        assert_eq!(LogOperation::Render.as_str(), "render");
        assert_eq!(LogOperation::Scroll.as_str(), "scroll");
        assert_eq!(LogOperation::Cart.as_str(), "cart");
        assert_eq!(LogOperation::Navigation.as_str(), "navigation");
        assert_eq!(LogOperation::Config.as_str(), "config");
    }
}
