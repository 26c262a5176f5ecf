//! Paginated outcome value type.
//!
//! A [`PagedOutcome`] is an outcome whose payload is one page of an ordered
//! sequence, plus the metadata a caller needs to render pagination: the
//! 1-based page number, the total item count across all pages, and the
//! derived page size and total page count.
//!
//! Like the rest of the outcome hierarchy it is a pure data carrier: every
//! operation is total, performs no I/O, and cannot fail. It is normally
//! populated by the pagination helpers in [`crate::paginate`], but can also
//! be built standalone:
//!
//! ```
//! use outcomes::{PagedOutcome, PageNumber};
//!
//! let page = PagedOutcome::new()
//!     .with_data(vec!["a", "b"])
//!     .with_pagination(PageNumber::new(1), 3);
//!
//! assert_eq!(page.page_size(), 2);
//! assert_eq!(page.total_pages(), 2);
//! ```

use crate::outcome::{Diagnostics, Outcome};
use crate::types::PageNumber;
use serde::ser::{Serialize, SerializeStruct, Serializer};

/// An outcome carrying one page of items plus pagination metadata.
///
/// The payload is optional, like any other outcome payload: an absent
/// payload (no page fetched) is distinct from a present-but-empty page.
/// `page_size()` and `total_pages()` are derived from the current payload
/// at read time and are never stored.
#[derive(Debug, Clone)]
pub struct PagedOutcome<T> {
    outcome: Outcome,
    data: Option<Vec<T>>,
    page_number: PageNumber,
    total_items: u64,
}

impl<T> PagedOutcome<T> {
    /// Creates a new empty paged outcome: no payload, page 1, zero total.
    pub fn new() -> Self {
        Self {
            outcome: Outcome::new(),
            data: None,
            page_number: PageNumber::first(),
            total_items: 0,
        }
    }

    /// Sets the pagination metadata and returns the receiver.
    ///
    /// [`PageNumber`] clamps to >= 1 at construction, so standalone-built
    /// outcomes carry a well-formed page number without any check here.
    #[must_use]
    pub fn with_pagination(mut self, page_number: PageNumber, total_items: u64) -> Self {
        self.page_number = page_number;
        self.total_items = total_items;
        self
    }

    /// Appends one item to the page, initializing an empty page if the
    /// payload is absent.
    pub fn add_item(&mut self, item: T) {
        self.data.get_or_insert_with(Vec::new).push(item);
    }

    /// Appends several items to the page, initializing an empty page if
    /// the payload is absent.
    pub fn add_items<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.data.get_or_insert_with(Vec::new).extend(items);
    }

    /// Replaces the page contents entirely and returns the receiver.
    #[must_use]
    pub fn with_data(mut self, data: Vec<T>) -> Self {
        self.data = Some(data);
        self
    }

    /// Appends one item and returns the receiver.
    #[must_use]
    pub fn with_item(mut self, item: T) -> Self {
        self.add_item(item);
        self
    }

    /// Sets the payload to an empty page: present, with zero items.
    #[must_use]
    pub fn with_empty_data(mut self) -> Self {
        self.data = Some(Vec::new());
        self
    }

    /// Borrows the page contents, if a page is present.
    pub fn data(&self) -> Option<&[T]> {
        self.data.as_deref()
    }

    /// Consumes the outcome and returns the page contents, if present.
    pub fn into_data(self) -> Option<Vec<T>> {
        self.data
    }

    /// The 1-based page number.
    pub const fn page_number(&self) -> PageNumber {
        self.page_number
    }

    /// The total number of items across all pages.
    pub const fn total_items(&self) -> u64 {
        self.total_items
    }

    /// The number of items in the current page (0 if the payload is
    /// absent).
    pub fn page_size(&self) -> u64 {
        self.data.as_ref().map_or(0, |data| data.len() as u64)
    }

    /// The total number of pages, computed from `total_items` and the
    /// current page size.
    ///
    /// Returns 0 when the page size is 0 (absent or empty payload). The
    /// quotient is undefined in that state, and 0 makes the emptiness
    /// visible to callers instead of panicking.
    pub fn total_pages(&self) -> u64 {
        let page_size = self.page_size();

        if page_size == 0 {
            0
        } else {
            self.total_items.div_ceil(page_size)
        }
    }
}

impl<T> Default for PagedOutcome<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Diagnostics for PagedOutcome<T> {
    fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    fn outcome_mut(&mut self) -> &mut Outcome {
        &mut self.outcome
    }
}

impl<T: Serialize> Serialize for PagedOutcome<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("PagedOutcome", 9)?;
        state.serialize_field("messages", self.outcome.messages())?;
        state.serialize_field("errors", self.outcome.errors())?;
        state.serialize_field("timestamp", &self.outcome.timestamp())?;
        state.serialize_field("success", &self.outcome.success())?;
        state.serialize_field("data", &self.data)?;
        state.serialize_field("page_number", &self.page_number)?;
        state.serialize_field("page_size", &self.page_size())?;
        state.serialize_field("total_items", &self.total_items)?;
        state.serialize_field("total_pages", &self.total_pages())?;
        state.end()
    }
}
