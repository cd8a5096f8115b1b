//! Error type shared by every theme-toggle module.

/// Failures surfaced by storage, DOM, and configuration access.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    #[error("local storage is unavailable")]
    StorageUnavailable,
    #[error("storage access failed: {0}")]
    Storage(String),
    #[error("dom mutation failed: {0}")]
    Dom(String),
    #[error("unknown theme: {0:?}")]
    InvalidTheme(String),
    #[error("config parse error: {0}")]
    Config(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}
