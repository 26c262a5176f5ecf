//! Query source abstraction.
//!
//! A query source is the ordered, countable, windowable collection the
//! pagination helpers consume. The execution duality (in-memory data that
//! evaluates inline versus deferred data behind a network or database
//! round-trip) is modelled as two traits rather than a runtime check:
//!
//! - [`QuerySource`] for sources whose `count` and `materialize` complete
//!   synchronously, and
//! - [`DeferredSource`] for sources where those two operations may suspend.
//!
//! `order_by` and `window` are shape transforms on both traits: they build
//! up the query without executing anything, so they are synchronous even on
//! a deferred source. The key selector passed to `order_by` is statically
//! generic over the key type, so ordering semantics are resolved at compile
//! time at every call site.
//!
//! Implementations report hard failures (connectivity, query execution)
//! through [`SourceResult`]; the pagination layer propagates them unwrapped.

use crate::errors::SourceResult;
use async_trait::async_trait;

/// An ordered, countable, windowable data source that executes inline.
///
/// Combinators consume and return `Self`, so a windowed or reordered
/// source has the same shape as the original and can keep being refined
/// before it is materialized.
pub trait QuerySource: Sized {
    /// The element type produced when the source is materialized.
    type Item;

    /// Reorders the source ascending by the given key selector.
    ///
    /// Reordering is stable: elements with equal keys keep their relative
    /// order.
    #[must_use]
    fn order_by<K, F>(self, key: F) -> Self
    where
        K: Ord,
        F: FnMut(&Self::Item) -> K;

    /// Counts the total number of elements in the source.
    fn count(&self) -> SourceResult<u64>;

    /// Restricts the source to the window `[skip, skip + take)`.
    #[must_use]
    fn window(self, skip: u64, take: u64) -> Self;

    /// Executes the source and returns its elements in order.
    fn materialize(self) -> SourceResult<Vec<Self::Item>>;
}

/// An ordered, countable, windowable data source whose execution is
/// deferred.
///
/// `count` and `materialize` are the only suspension points; they may
/// involve a network or database round-trip. Cancellation follows the
/// usual Rust model: dropping the future aborts the in-flight operation,
/// and no partial result is ever observable.
///
/// Implementors must be `Send + Sync`: the futures returned by the async
/// methods borrow the source and have to stay sendable across executor
/// threads.
#[async_trait]
pub trait DeferredSource: Sized + Send + Sync {
    /// The element type produced when the source is materialized.
    type Item: Send;

    /// Reorders the source ascending by the given key selector.
    ///
    /// This is a shape transform on the deferred query; nothing executes
    /// until `materialize` is awaited.
    #[must_use]
    fn order_by<K, F>(self, key: F) -> Self
    where
        K: Ord,
        F: FnMut(&Self::Item) -> K + Send;

    /// Counts the total number of elements in the source.
    async fn count(&self) -> SourceResult<u64>;

    /// Restricts the source to the window `[skip, skip + take)`.
    #[must_use]
    fn window(self, skip: u64, take: u64) -> Self;

    /// Executes the source and returns its elements in order.
    async fn materialize(self) -> SourceResult<Vec<Self::Item>>;
}
