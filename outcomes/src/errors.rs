//! Error types for the `outcome` library.
//!
//! The outcome value types themselves never fail: blank diagnostics are
//! filtered, pagination inputs are clamped, and every mutator is total.
//! The only fallible operations in this crate are the two query-source
//! capabilities that may touch a remote backend, `count` and
//! `materialize`, and their failures are represented here.
//!
//! The pagination helpers propagate these errors unwrapped (see
//! [`crate::paginate`]): a source failure surfaces as an `Err`, never as a
//! populated outcome carrying error messages.

use thiserror::Error;

/// Errors raised by a query source while counting or materializing.
///
/// These represent hard failures of the underlying execution engine
/// (connectivity, query execution, timeouts). They are distinct from the
/// soft diagnostics accumulated on an [`crate::Outcome`], which are never
/// thrown and are inspected through `success()`.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The connection to the backing store failed.
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// The backend rejected or failed to execute the query.
    #[error("Query execution failed: {0}")]
    QueryFailed(String),

    /// The operation did not complete in time.
    #[error("Operation timed out after {0:?}")]
    Timeout(std::time::Duration),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for query-source operations.
pub type SourceResult<T> = Result<T, SourceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_name_the_failure() {
        let err = SourceError::ConnectionFailed("refused".to_string());
        assert_eq!(err.to_string(), "Connection failed: refused");

        let err = SourceError::QueryFailed("syntax error".to_string());
        assert_eq!(err.to_string(), "Query execution failed: syntax error");
    }

    #[test]
    fn io_errors_convert_via_from() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err = SourceError::from(io);
        assert!(matches!(err, SourceError::Io(_)));
    }
}
