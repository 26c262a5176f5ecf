//! Base outcome value types.
//!
//! An [`Outcome`] is the standardized result object application code returns
//! to report how an operation went: ordered informational messages, ordered
//! error messages, a creation timestamp, and a success flag derived from the
//! error list. A [`DataOutcome`] extends it with an optional typed payload.
//!
//! Neither type can fail. Blank or whitespace-only diagnostics are silently
//! dropped at insertion time, and `success()` is always recomputed from the
//! current error list rather than stored independently.
//!
//! Fluent mutation across the hierarchy goes through the [`Diagnostics`]
//! trait, whose provided methods return `Self` so a chain started on a
//! `DataOutcome<T>` (or a [`crate::PagedOutcome`]) keeps its concrete type:
//!
//! ```
//! use outcomes::{DataOutcome, Diagnostics};
//!
//! let result = DataOutcome::new()
//!     .with_message("user loaded from cache")
//!     .with_data(42u32);
//!
//! assert!(result.success());
//! assert_eq!(result.data(), Some(&42));
//! ```

use crate::types::Timestamp;
use serde::ser::{Serialize, SerializeStruct, Serializer};

/// The outcome of an operation: ordered diagnostics plus a derived
/// success flag.
///
/// Messages and errors preserve insertion order and allow duplicates.
/// The timestamp is set at construction and never changes.
#[derive(Debug, Clone)]
pub struct Outcome {
    messages: Vec<String>,
    errors: Vec<String>,
    timestamp: Timestamp,
}

impl Outcome {
    /// Creates a new empty outcome, timestamped now.
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
            errors: Vec::new(),
            timestamp: Timestamp::now(),
        }
    }

    /// The informational messages recorded so far, in insertion order.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// The error messages recorded so far, in insertion order.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// When this outcome was created.
    pub const fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    /// Whether the operation succeeded.
    ///
    /// Always exactly the negation of "errors non-empty", recomputed at
    /// every read.
    pub fn success(&self) -> bool {
        self.errors.is_empty()
    }

    // Blank and whitespace-only entries are dropped here, so every
    // insertion path shares the same filter.
    pub(crate) fn record_message(&mut self, message: String) {
        if message.trim().is_empty() {
            return;
        }

        self.messages.push(message);
    }

    pub(crate) fn record_error(&mut self, error: String) {
        if error.trim().is_empty() {
            return;
        }

        self.errors.push(error);
    }
}

impl Default for Outcome {
    fn default() -> Self {
        Self::new()
    }
}

impl Serialize for Outcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Outcome", 4)?;
        state.serialize_field("messages", &self.messages)?;
        state.serialize_field("errors", &self.errors)?;
        state.serialize_field("timestamp", &self.timestamp)?;
        state.serialize_field("success", &self.success())?;
        state.end()
    }
}

/// Fluent diagnostic accumulation for outcome types.
///
/// Any type that exposes its underlying [`Outcome`] gets the full mutator
/// family, with the `with_*` variants returning `Self` so fluent chains
/// preserve the concrete type all the way down the hierarchy.
///
/// All mutators are total: blank or whitespace-only input is silently
/// dropped, never rejected.
pub trait Diagnostics: Sized {
    /// Borrows the underlying outcome.
    fn outcome(&self) -> &Outcome;

    /// Mutably borrows the underlying outcome.
    fn outcome_mut(&mut self) -> &mut Outcome;

    /// Records an informational message, ignoring blank input.
    fn add_message(&mut self, message: impl Into<String>) {
        self.outcome_mut().record_message(message.into());
    }

    /// Records several informational messages, ignoring blank entries.
    fn add_messages<I, M>(&mut self, messages: I)
    where
        I: IntoIterator<Item = M>,
        M: Into<String>,
    {
        for message in messages {
            self.add_message(message);
        }
    }

    /// Records an error message, ignoring blank input.
    fn add_error(&mut self, error: impl Into<String>) {
        self.outcome_mut().record_error(error.into());
    }

    /// Records several error messages, ignoring blank entries.
    fn add_errors<I, E>(&mut self, errors: I)
    where
        I: IntoIterator<Item = E>,
        E: Into<String>,
    {
        for error in errors {
            self.add_error(error);
        }
    }

    /// Records an informational message and returns the receiver.
    #[must_use]
    fn with_message(mut self, message: impl Into<String>) -> Self {
        self.add_message(message);
        self
    }

    /// Records several informational messages and returns the receiver.
    #[must_use]
    fn with_messages<I, M>(mut self, messages: I) -> Self
    where
        I: IntoIterator<Item = M>,
        M: Into<String>,
    {
        self.add_messages(messages);
        self
    }

    /// Records an error message and returns the receiver.
    #[must_use]
    fn with_error(mut self, error: impl Into<String>) -> Self {
        self.add_error(error);
        self
    }

    /// Records several error messages and returns the receiver.
    #[must_use]
    fn with_errors<I, E>(mut self, errors: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<String>,
    {
        self.add_errors(errors);
        self
    }

    /// Whether the operation succeeded (no errors recorded).
    fn success(&self) -> bool {
        self.outcome().success()
    }
}

impl Diagnostics for Outcome {
    fn outcome(&self) -> &Outcome {
        self
    }

    fn outcome_mut(&mut self) -> &mut Outcome {
        self
    }
}

/// An outcome carrying an optional typed payload.
///
/// Absence of the payload is a valid, distinct state from a
/// present-but-default-valued payload, and nothing ties payload presence
/// to success: a failed outcome may carry data and a successful one may
/// carry none.
#[derive(Debug, Clone)]
pub struct DataOutcome<T> {
    outcome: Outcome,
    data: Option<T>,
}

impl<T> DataOutcome<T> {
    /// Creates a new empty data outcome with no payload, timestamped now.
    pub fn new() -> Self {
        Self {
            outcome: Outcome::new(),
            data: None,
        }
    }

    /// Sets or replaces the payload unconditionally.
    pub fn set_data(&mut self, data: T) {
        self.data = Some(data);
    }

    /// Sets or replaces the payload and returns the receiver.
    #[must_use]
    pub fn with_data(mut self, data: T) -> Self {
        self.set_data(data);
        self
    }

    /// Borrows the payload, if present.
    pub const fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    /// Mutably borrows the payload, if present.
    pub fn data_mut(&mut self) -> Option<&mut T> {
        self.data.as_mut()
    }

    /// Removes and returns the payload, leaving the outcome without one.
    pub fn take_data(&mut self) -> Option<T> {
        self.data.take()
    }

    /// Consumes the outcome and returns the payload, if present.
    pub fn into_data(self) -> Option<T> {
        self.data
    }
}

impl<T> Default for DataOutcome<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Diagnostics for DataOutcome<T> {
    fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    fn outcome_mut(&mut self) -> &mut Outcome {
        &mut self.outcome
    }
}

impl<T: Serialize> Serialize for DataOutcome<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("DataOutcome", 5)?;
        state.serialize_field("messages", &self.outcome.messages)?;
        state.serialize_field("errors", &self.outcome.errors)?;
        state.serialize_field("timestamp", &self.outcome.timestamp)?;
        state.serialize_field("success", &self.outcome.success())?;
        state.serialize_field("data", &self.data)?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_outcome_is_successful_and_empty() {
        let outcome = Outcome::new();

        assert!(outcome.success());
        assert!(outcome.messages().is_empty());
        assert!(outcome.errors().is_empty());
    }

    #[test]
    fn blank_messages_are_silently_dropped() {
        let mut outcome = Outcome::new();
        outcome.add_message("first");
        outcome.add_message("");
        outcome.add_message("   ");
        outcome.add_message("\t\n");
        outcome.add_message("second");

        assert_eq!(outcome.messages(), ["first", "second"]);
    }

    #[test]
    fn blank_errors_are_silently_dropped() {
        let mut outcome = Outcome::new();
        outcome.add_errors(vec!["boom", " ", "", "crash"]);

        assert_eq!(outcome.errors(), ["boom", "crash"]);
    }

    #[test]
    fn duplicates_are_preserved_in_order() {
        let outcome = Outcome::new()
            .with_message("again")
            .with_message("again")
            .with_message("done");

        assert_eq!(outcome.messages(), ["again", "again", "done"]);
    }

    #[test]
    fn success_reflects_error_list_at_read_time() {
        let mut outcome = Outcome::new();
        assert!(outcome.success());

        outcome.add_error("it broke");
        assert!(!outcome.success());

        // Blank errors are filtered, so success does not change.
        outcome.add_error("  ");
        assert_eq!(outcome.errors().len(), 1);
    }

    #[test]
    fn fluent_chain_preserves_typed_payload_accessor() {
        let result = DataOutcome::new()
            .with_message("loaded")
            .with_error("partial failure")
            .with_data(vec![1, 2, 3]);

        assert!(!result.success());
        assert_eq!(result.data(), Some(&vec![1, 2, 3]));
    }

    #[test]
    fn payload_absence_is_distinct_from_default_value() {
        let absent: DataOutcome<u32> = DataOutcome::new();
        let present = DataOutcome::new().with_data(0u32);

        assert_eq!(absent.data(), None);
        assert_eq!(present.data(), Some(&0));
    }

    #[test]
    fn set_data_replaces_unconditionally() {
        let mut result = DataOutcome::new().with_data("old");
        result.set_data("new");

        assert_eq!(result.data(), Some(&"new"));
    }

    #[test]
    fn take_data_leaves_outcome_without_payload() {
        let mut result = DataOutcome::new().with_data(7);

        assert_eq!(result.take_data(), Some(7));
        assert_eq!(result.data(), None);
    }

    #[test]
    fn payload_presence_is_independent_of_success() {
        let failed_with_data = DataOutcome::new().with_error("denied").with_data(1);

        assert!(!failed_with_data.success());
        assert_eq!(failed_with_data.data(), Some(&1));
    }
}
