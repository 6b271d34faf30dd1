//! Generic error handling utilities
//!
//! Provides unified error reporting across the crate's error types while
//! keeping user-fixable problems distinguishable from internal failures.

/// Trait for errors that can distinguish between user-actionable and system errors
///
/// When `is_user_actionable()` returns `true`, `user_message()` must return
/// `Some(message)` with a helpful, actionable message. When it returns `false`,
/// `user_message()` returns `None`.
pub trait ContextualError: std::error::Error {
    /// Returns true if this error carries a message the user can act on,
    /// such as a missing or malformed configuration file
    fn is_user_actionable(&self) -> bool;

    /// Returns the specific user message if this is a user-actionable error
    fn user_message(&self) -> Option<&str>;
}

/// Pick the line shown to the user for a failed operation
pub fn fatal_message<'a, E: ContextualError>(error: &'a E, operation_context: &'a str) -> &'a str {
    if error.is_user_actionable() {
        error.user_message().unwrap_or(operation_context)
    } else {
        operation_context
    }
}

/// Log errors with appropriate detail level based on error specificity
///
/// User-actionable errors show their own message; everything else shows the
/// operation context. Full details are always available at debug level.
///
/// ```rust,no_run
/// # use buildinfo::app::error::ConfigError;
/// # use buildinfo::core::error_handling::log_error_with_context;
/// let err = ConfigError::invalid_value("name", "a string");
/// log_error_with_context(&err, "Configuration loading");
/// // Logs: "FATAL: Configuration key 'name' must be a string"
/// ```
pub fn log_error_with_context<E: ContextualError + std::fmt::Debug>(
    error: &E,
    operation_context: &str,
) {
    log::error!("FATAL: {}", fatal_message(error, operation_context));
    log::debug!("DETAIL: {}", error);
    log::debug!("DEBUG_DETAILS: {:?}", error);
}
