//! `Outcome` - standardized operation outcomes with pagination support
//!
//! This library provides the result value types application code returns to
//! report success or failure: a base [`Outcome`] accumulating ordered
//! diagnostics, a [`DataOutcome`] carrying an optional typed payload, and a
//! [`PagedOutcome`] carrying one page of a collection plus pagination
//! metadata. A pair of pagination helpers turns any ordered, countable,
//! windowable query source, in-memory or deferred behind a database, into
//! a populated `PagedOutcome`.
//!
//! The value types never fail: blank diagnostics are filtered, pagination
//! inputs are clamped, success is derived from the error list. Hard
//! failures exist only at the query-source boundary and propagate as
//! [`SourceError`].

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod errors;
pub mod outcome;
pub mod paged;
pub mod paginate;
pub mod source;
pub mod types;

pub use errors::{SourceError, SourceResult};
pub use outcome::{DataOutcome, Diagnostics, Outcome};
pub use paged::PagedOutcome;
pub use paginate::{PageRequest, Paginate, PaginateDeferred};
pub use source::{DeferredSource, QuerySource};
pub use types::{PageNumber, PageSize, Timestamp};
