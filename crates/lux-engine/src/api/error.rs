use thiserror::Error;

/// Errors raised for genuine programmer mistakes.
///
/// Missing optional host elements are not errors: mounting code returns
/// `Ok(None)` for those and the page keeps running without the effect.
#[derive(Debug, Error)]
pub enum LuxError {
    /// A color string that is neither empty, hex, `rgb()` nor `rgba()`.
    #[error("invalid color string: {0:?}")]
    InvalidColor(String),
    /// A theme name that is not one of `light`, `dark`, `blue`.
    #[error("unknown theme: {0:?}")]
    UnknownTheme(String),
    /// Site configuration JSON that failed to parse.
    #[error("invalid site config: {0}")]
    Config(#[from] serde_json::Error),
    /// A scroll trigger position that is not `"<edge> <viewport>"`.
    #[error("invalid scroll trigger position: {0:?}")]
    InvalidTrigger(String),
    /// The preference store refused a read or write.
    #[error("preference storage failed: {0}")]
    Storage(String),
    /// The host drawing surface rejected an operation.
    #[error("surface error: {0}")]
    Surface(String),
}

pub type Result<T> = std::result::Result<T, LuxError>;
