//! Navbar configuration
//!
//! Defaults are compiled in; `assets/navbar.json` may override any subset of
//! fields. A malformed bundle falls back to the defaults.

use crate::shared::errors::{AppError, Result};
use crate::shared::logging;
use serde::{Deserialize, Serialize};

const BUNDLED_CONFIG: &str = include_str!("../assets/navbar.json");

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavbarConfig {
    /// localStorage key holding `"true"` / `"false"`.
    pub storage_key: String,
    /// Vertical offset past which the navbar switches to its scrolled style.
    pub scroll_threshold: f64,
    pub checkout_path_prefix: String,
    pub initial_cart_amount: u32,
    pub logo_light: String,
    pub logo_dark: String,
}

impl Default for NavbarConfig {
    fn default() -> Self {
        Self {
            storage_key: "darkMode".to_string(),
            scroll_threshold: 50.0,
            checkout_path_prefix: "/checkout".to_string(),
            initial_cart_amount: 0,
            logo_light: "https://i.imgur.com/zjmEKVY.png".to_string(),
            logo_dark: "https://i.imgur.com/URPUqbe.png".to_string(),
        }
    }
}

impl NavbarConfig {
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: NavbarConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Load the bundled configuration, falling back to defaults.
    pub fn load() -> Self {
        match Self::from_json(BUNDLED_CONFIG) {
            Ok(config) => {
                logging::log_config_loaded(&config);
                config
            }
            Err(e) => {
                logging::log_config_fallback(&e);
                Self::default()
            }
        }
    }

    pub fn logo_for(&self, dark_mode: bool) -> &str {
        if dark_mode {
            &self.logo_dark
        } else {
            &self.logo_light
        }
    }

    fn validate(&self) -> Result<()> {
        if self.storage_key.trim().is_empty() {
            return Err(AppError::ConfigError("storage_key must not be empty".to_string()));
        }
        if !self.scroll_threshold.is_finite() || self.scroll_threshold < 0.0 {
            return Err(AppError::ConfigError(format!(
                "scroll_threshold must be a non-negative number, got {}",
                self.scroll_threshold
            )));
        }
        Ok(())
    }
}
