use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Invalid preference value for '{key}': {value}")]
    InvalidPreference { key: String, value: String },

    #[error("Browser environment error: {0}")]
    EnvironmentError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for AppError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        AppError::EnvironmentError(format!("{:?}", value))
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
