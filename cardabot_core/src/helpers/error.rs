use thiserror::Error;

/// Typed rejections that map to a specific user-facing reply. Everything
/// else (store failures, upstream HTTP errors, bad upstream data) travels
/// through `anyhow` to the per-command error boundary.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CardaBotError {
    #[error("unsupported language code: {0}")]
    UnsupportedLanguage(String),
}
