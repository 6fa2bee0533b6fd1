#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Validate(#[from] validator::ValidationErrors),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("empty catalog: {0}")]
    EmptyCatalog(String),

    #[error("invalid record: {0}")]
    InvalidRecord(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }

    pub fn is_empty_catalog(&self) -> bool {
        matches!(self, Self::EmptyCatalog(_))
    }
}

/// Returns early with the given [`Error`] variant and a formatted message.
///
/// ```
/// fn check(kcal: f64) -> vitaplan_shared::Result<()> {
///     if kcal <= 0.0 {
///         vitaplan_shared::bail!(InvalidInput, "target_kcal must be > 0 (got {kcal})");
///     }
///     Ok(())
/// }
///
/// assert!(check(0.0).unwrap_err().is_invalid_input());
/// ```
#[macro_export]
macro_rules! bail {
    ($kind:ident, $msg:literal $(,)?) => {
        return Err($crate::Error::$kind(format!($msg)))
    };
    ($kind:ident, $fmt:expr, $($arg:tt)*) => {
        return Err($crate::Error::$kind(format!($fmt, $($arg)*)))
    };
}
