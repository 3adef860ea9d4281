use crate::shared::errors::Result;
#[cfg(target_arch = "wasm32")]
use crate::shared::errors::AppError;
use std::cell::Cell;

/// Class added to the document root while dark mode is on.
pub const DARK_MARKER: &str = "dark";

pub trait ThemeEnvironment {
    /// OS/browser `prefers-color-scheme: dark`.
    fn prefers_dark_scheme(&self) -> Result<bool>;
    fn apply_dark_marker(&self, dark_mode: bool) -> Result<()>;
}

#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserTheme;

#[cfg(target_arch = "wasm32")]
impl ThemeEnvironment for BrowserTheme {
    fn prefers_dark_scheme(&self) -> Result<bool> {
        let window = web_sys::window()
            .ok_or_else(|| AppError::EnvironmentError("no window available".to_string()))?;
        Ok(window
            .match_media("(prefers-color-scheme: dark)")?
            .map(|query| query.matches())
            .unwrap_or(false))
    }

    fn apply_dark_marker(&self, dark_mode: bool) -> Result<()> {
        let root = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
            .ok_or_else(|| AppError::EnvironmentError("no document root".to_string()))?;
        root.class_list().toggle_with_force(DARK_MARKER, dark_mode)?;
        Ok(())
    }
}

/// Theme environment without a document, for native builds and tests.
#[derive(Debug, Default)]
pub struct HeadlessTheme {
    prefers_dark: bool,
    marked: Cell<bool>,
}

impl HeadlessTheme {
    pub fn new(prefers_dark: bool) -> Self {
        Self { prefers_dark, marked: Cell::new(false) }
    }

    pub fn is_marked_dark(&self) -> bool {
        self.marked.get()
    }
}

impl ThemeEnvironment for HeadlessTheme {
    fn prefers_dark_scheme(&self) -> Result<bool> {
        Ok(self.prefers_dark)
    }

    fn apply_dark_marker(&self, dark_mode: bool) -> Result<()> {
        self.marked.set(dark_mode);
        Ok(())
    }
}
