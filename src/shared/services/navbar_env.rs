use crate::config::NavbarConfig;
use crate::domain::models::Effect;
use crate::shared::errors::AppError;
use crate::shared::logging;
use crate::shared::services::preferences::{load_dark_mode, save_dark_mode, PreferenceStore};
use crate::shared::services::theme_env::ThemeEnvironment;
use std::rc::Rc;

/// Ambient browser state the navbar reads and writes: persisted preference
/// storage and the document theme marker.
pub struct NavbarEnv {
    store: Rc<dyn PreferenceStore>,
    theme: Rc<dyn ThemeEnvironment>,
    storage_key: String,
}

impl NavbarEnv {
    pub fn new(
        store: Rc<dyn PreferenceStore>,
        theme: Rc<dyn ThemeEnvironment>,
        storage_key: impl Into<String>,
    ) -> Self {
        Self { store, theme, storage_key: storage_key.into() }
    }

    /// `localStorage` and the live document in the browser, in-memory elsewhere.
    #[cfg(target_arch = "wasm32")]
    pub fn platform(config: &NavbarConfig) -> Self {
        use crate::shared::services::{BrowserTheme, LocalStorage};
        Self::new(Rc::new(LocalStorage), Rc::new(BrowserTheme), config.storage_key.clone())
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn platform(config: &NavbarConfig) -> Self {
        use crate::shared::services::{HeadlessTheme, MemoryStore};
        Self::new(
            Rc::new(MemoryStore::default()),
            Rc::new(HeadlessTheme::default()),
            config.storage_key.clone(),
        )
    }

    /// A persisted choice wins; otherwise follow the OS preference.
    /// A persisted value other than `"true"` counts as light.
    pub fn resolve_dark_mode(&self) -> bool {
        match load_dark_mode(self.store.as_ref(), &self.storage_key) {
            Ok(Some(dark_mode)) => {
                logging::log_initial_theme(dark_mode, true);
                dark_mode
            }
            Ok(None) => {
                let dark_mode = self.prefers_dark();
                logging::log_initial_theme(dark_mode, false);
                dark_mode
            }
            Err(e @ AppError::InvalidPreference { .. }) => {
                logging::log_preference_error(&self.storage_key, &e);
                logging::log_initial_theme(false, true);
                false
            }
            Err(e) => {
                logging::log_preference_error(&self.storage_key, &e);
                let dark_mode = self.prefers_dark();
                logging::log_initial_theme(dark_mode, false);
                dark_mode
            }
        }
    }

    /// Resolve the initial theme and mark the document with it.
    pub fn initialize_theme(&self) -> bool {
        let dark_mode = self.resolve_dark_mode();
        self.apply_marker(dark_mode);
        dark_mode
    }

    /// Perform the effects this environment owns and return the rest
    /// for the caller's collaborators.
    pub fn run(&self, effects: Vec<Effect>) -> Vec<Effect> {
        let mut external = Vec::new();
        for effect in effects {
            match effect {
                Effect::ApplyThemeMarker(dark_mode) => {
                    logging::log_theme_toggled(dark_mode);
                    self.apply_marker(dark_mode);
                }
                Effect::PersistDarkMode(dark_mode) => {
                    if let Err(e) = save_dark_mode(self.store.as_ref(), &self.storage_key, dark_mode) {
                        logging::log_preference_error(&self.storage_key, &e);
                    }
                }
                other => external.push(other),
            }
        }
        external
    }

    fn prefers_dark(&self) -> bool {
        self.theme.prefers_dark_scheme().unwrap_or_else(|e| {
            logging::log_preference_error(&self.storage_key, &e);
            false
        })
    }

    fn apply_marker(&self, dark_mode: bool) {
        if let Err(e) = self.theme.apply_dark_marker(dark_mode) {
            logging::log_preference_error(&self.storage_key, &e);
        }
    }
}
