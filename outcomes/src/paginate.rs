//! Pagination helpers over query sources.
//!
//! [`Paginate`] and [`PaginateDeferred`] are blanket extension traits over
//! the two source traits: any [`QuerySource`] can be paginated inline, any
//! [`DeferredSource`] can be paginated with two suspension points (count
//! and materialize). Both share one contract:
//!
//! 1. Inputs are normalized, never rejected: [`PageRequest`] clamps
//!    non-positive page numbers and sizes to 1 at construction.
//! 2. An optional key selector reorders the source before windowing.
//! 3. The total count is the caller-supplied value when present, otherwise
//!    the source is counted.
//! 4. A zero total short-circuits to an empty page without touching the
//!    source's window or materialize capabilities.
//! 5. Otherwise the window `[skip, skip + page_size)` is materialized.
//! 6. The items and metadata are wrapped into a [`PagedOutcome`].
//!
//! Source failures from count or materialize propagate unwrapped: a broken
//! backend surfaces as `Err`, never as a populated outcome carrying error
//! messages.
//!
//! ```
//! use outcomes::{PageRequest, Paginate};
//! use outcomes_memory::InMemorySource;
//!
//! # fn main() -> outcomes::SourceResult<()> {
//! let source = InMemorySource::new(vec![3, 1, 2]);
//! let page = source.paginate_by(&PageRequest::new(1, 2), |n| *n)?;
//!
//! assert_eq!(page.data(), Some(&[1, 2][..]));
//! assert_eq!(page.total_items(), 3);
//! assert_eq!(page.total_pages(), 2);
//! # Ok(())
//! # }
//! ```

use crate::errors::SourceResult;
use crate::paged::PagedOutcome;
use crate::source::{DeferredSource, QuerySource};
use crate::types::{PageNumber, PageSize};
use async_trait::async_trait;

/// A normalized pagination request.
///
/// Page number and size are clamped to >= 1 when the request is built, so
/// an invalid request cannot exist: asking for page -3 of size 0 paginates
/// as page 1 of size 1. An optional precomputed total count lets callers
/// skip the counting round-trip when they already know it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// The 1-based page to fetch.
    pub page_number: PageNumber,
    /// The number of items per page.
    pub page_size: PageSize,
    /// Precomputed total item count, if the caller already has one.
    pub total_count: Option<u64>,
}

impl PageRequest {
    /// Creates a request for the given page and size, clamping both to
    /// >= 1.
    pub fn new(page_number: i64, page_size: i64) -> Self {
        Self {
            page_number: PageNumber::new(page_number),
            page_size: PageSize::new(page_size),
            total_count: None,
        }
    }

    /// Supplies a precomputed total count, skipping the counting step.
    #[must_use]
    pub const fn with_total_count(mut self, total_count: u64) -> Self {
        self.total_count = Some(total_count);
        self
    }

    /// The number of elements to skip: `(page_number - 1) * page_size`.
    pub fn skip(&self) -> u64 {
        let page_number = self.page_number.into_inner().unsigned_abs();
        let page_size = self.page_size.into_inner().unsigned_abs();

        (page_number - 1).saturating_mul(page_size)
    }

    /// The number of elements in the window: the page size.
    pub fn take(&self) -> u64 {
        self.page_size.into_inner().unsigned_abs()
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

/// Pagination over sources that execute inline.
///
/// Blanket-implemented for every [`QuerySource`].
pub trait Paginate: QuerySource {
    /// Fetches one page of the source as a [`PagedOutcome`].
    fn paginate(self, request: &PageRequest) -> SourceResult<PagedOutcome<Self::Item>> {
        let total_items = match request.total_count {
            Some(total) => total,
            None => self.count()?,
        };

        let items = if total_items == 0 {
            tracing::debug!(
                page = %request.page_number,
                "source is empty, skipping windowed fetch"
            );
            Vec::new()
        } else {
            let skip = request.skip();
            tracing::debug!(
                page = %request.page_number,
                size = %request.page_size,
                skip,
                total_items,
                "materializing page window"
            );
            self.window(skip, request.take()).materialize()?
        };

        Ok(PagedOutcome::new()
            .with_data(items)
            .with_pagination(request.page_number, total_items))
    }

    /// Reorders the source ascending by `key`, then fetches one page.
    fn paginate_by<K, F>(
        self,
        request: &PageRequest,
        key: F,
    ) -> SourceResult<PagedOutcome<Self::Item>>
    where
        K: Ord,
        F: FnMut(&Self::Item) -> K,
    {
        self.order_by(key).paginate(request)
    }
}

impl<S: QuerySource> Paginate for S {}

/// Pagination over deferred sources.
///
/// Blanket-implemented for every [`DeferredSource`]. The two awaits,
/// counting and materializing, are the only suspension points, and the
/// [`PagedOutcome`] is constructed only after both complete, so dropping
/// the future mid-flight never yields a partially populated outcome.
#[async_trait]
pub trait PaginateDeferred: DeferredSource {
    /// Fetches one page of the deferred source as a [`PagedOutcome`].
    async fn paginate_deferred(
        self,
        request: &PageRequest,
    ) -> SourceResult<PagedOutcome<Self::Item>> {
        let total_items = match request.total_count {
            Some(total) => total,
            None => self.count().await?,
        };

        let items = if total_items == 0 {
            tracing::debug!(
                page = %request.page_number,
                "source is empty, skipping windowed fetch"
            );
            Vec::new()
        } else {
            let skip = request.skip();
            tracing::debug!(
                page = %request.page_number,
                size = %request.page_size,
                skip,
                total_items,
                "materializing page window"
            );
            self.window(skip, request.take()).materialize().await?
        };

        Ok(PagedOutcome::new()
            .with_data(items)
            .with_pagination(request.page_number, total_items))
    }

    /// Reorders the deferred source ascending by `key`, then fetches one
    /// page.
    async fn paginate_deferred_by<K, F>(
        self,
        request: &PageRequest,
        key: F,
    ) -> SourceResult<PagedOutcome<Self::Item>>
    where
        K: Ord + Send,
        F: FnMut(&Self::Item) -> K + Send,
    {
        self.order_by(key).paginate_deferred(request).await
    }
}

#[async_trait]
impl<S: DeferredSource> PaginateDeferred for S {}
