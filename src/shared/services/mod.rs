// Browser-facing services behind traits so the widget runs headless in tests
pub mod navbar_env;
pub mod preferences;
pub mod theme_env;

pub use navbar_env::NavbarEnv;
pub use preferences::{load_dark_mode, save_dark_mode, MemoryStore, PreferenceStore};
#[cfg(target_arch = "wasm32")]
pub use preferences::LocalStorage;
pub use theme_env::{HeadlessTheme, ThemeEnvironment};
#[cfg(target_arch = "wasm32")]
pub use theme_env::BrowserTheme;
