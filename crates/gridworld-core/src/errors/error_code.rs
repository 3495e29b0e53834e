//! GridworldErrorCode trait for structured error reporting.

/// Every error enum implements this to expose a stable code string
/// alongside its human-readable message.
pub trait GridworldErrorCode {
    /// Returns the error code string (e.g., "CONFIG_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const INVALID_TRANSITION: &str = "INVALID_TRANSITION";
pub const GRID_ERROR: &str = "GRID_ERROR";
pub const NOT_CONVERGED: &str = "NOT_CONVERGED";
