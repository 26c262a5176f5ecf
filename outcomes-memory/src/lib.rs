//! In-memory query source for the `outcomes` pagination helpers
//!
//! This crate provides a `Vec`-backed implementation of the `QuerySource`
//! trait from the outcomes crate, useful for testing and for callers whose
//! data is already resident in memory.
//!
//! It also implements `DeferredSource`, executing inline without
//! suspension, so the same data can be fed through the asynchronous
//! pagination entry point when calling code is generic over source kinds.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use async_trait::async_trait;
use outcomes::errors::SourceResult;
use outcomes::source::{DeferredSource, QuerySource};

/// A query source over an owned, in-memory `Vec`.
///
/// All capabilities are infallible and evaluate eagerly: `order_by` is a
/// stable sort, `window` is skip/take, and `count`/`materialize` never
/// touch anything outside the owned vector.
#[derive(Debug, Clone)]
pub struct InMemorySource<T> {
    items: Vec<T>,
}

// Manual impl so the empty source stays available without a `T: Default`
// bound.
impl<T> Default for InMemorySource<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T> InMemorySource<T> {
    /// Create a source over the given items, preserving their order.
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    /// The number of items currently in the source.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the source holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> From<Vec<T>> for InMemorySource<T> {
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}

impl<T> FromIterator<T> for InMemorySource<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<T> QuerySource for InMemorySource<T> {
    type Item = T;

    fn order_by<K, F>(mut self, key: F) -> Self
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        self.items.sort_by_key(key);
        self
    }

    fn count(&self) -> SourceResult<u64> {
        Ok(self.items.len() as u64)
    }

    fn window(mut self, skip: u64, take: u64) -> Self {
        let skip = usize::try_from(skip).unwrap_or(usize::MAX);
        let take = usize::try_from(take).unwrap_or(usize::MAX);
        self.items = self.items.into_iter().skip(skip).take(take).collect();
        self
    }

    fn materialize(self) -> SourceResult<Vec<T>> {
        Ok(self.items)
    }
}

// The deferred capabilities delegate to the inline ones: an in-memory
// source never suspends, it just satisfies the asynchronous contract.
#[async_trait]
impl<T> DeferredSource for InMemorySource<T>
where
    T: Send + Sync + 'static,
{
    type Item = T;

    fn order_by<K, F>(self, key: F) -> Self
    where
        K: Ord,
        F: FnMut(&T) -> K + Send,
    {
        QuerySource::order_by(self, key)
    }

    async fn count(&self) -> SourceResult<u64> {
        QuerySource::count(self)
    }

    fn window(self, skip: u64, take: u64) -> Self {
        QuerySource::window(self, skip, take)
    }

    async fn materialize(self) -> SourceResult<Vec<T>> {
        QuerySource::materialize(self)
    }
}
