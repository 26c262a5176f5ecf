//! Core types for the `outcome` library.
//!
//! This module defines the fundamental types used throughout the library.
//! Pagination inputs use sanitizing smart constructors: invalid values are
//! clamped at construction time rather than rejected, so a `PageNumber` or
//! `PageSize` in hand is always valid and no call site needs to re-check.

use chrono::{DateTime, Utc};
use nutype::nutype;
use serde::{Deserialize, Serialize};

/// A 1-based page number.
///
/// Construction clamps any value below 1 up to 1, so requests for page 0 or
/// a negative page are silently corrected instead of failing. This encodes
/// the pagination normalization rule in the type itself.
#[nutype(
    sanitize(with = |n: i64| n.max(1)),
    derive(
        Debug,
        Clone,
        Copy,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        Hash,
        Display,
        Into,
        Serialize,
        Deserialize
    )
)]
pub struct PageNumber(i64);

impl PageNumber {
    /// The first page.
    pub fn first() -> Self {
        Self::new(1)
    }
}

impl Default for PageNumber {
    fn default() -> Self {
        Self::first()
    }
}

/// The requested number of items per page.
///
/// Like [`PageNumber`], construction clamps any value below 1 up to 1:
/// a non-positive page size is corrected, never rejected.
#[nutype(
    sanitize(with = |n: i64| n.max(1)),
    derive(
        Debug,
        Clone,
        Copy,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        Hash,
        Display,
        Into,
        Serialize,
        Deserialize
    )
)]
pub struct PageSize(i64);

impl Default for PageSize {
    fn default() -> Self {
        Self::new(1)
    }
}

/// The moment an outcome was created.
///
/// This wrapper ensures consistent timestamp handling throughout the system
/// and keeps the creation instant immutable after construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a new timestamp from a UTC `DateTime`.
    pub const fn new(datetime: DateTime<Utc>) -> Self {
        Self(datetime)
    }

    /// Creates a timestamp representing the current moment.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Returns the underlying `DateTime`.
    pub const fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Converts the timestamp into the underlying `DateTime`.
    pub const fn into_datetime(self) -> DateTime<Utc> {
        self.0
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(datetime: DateTime<Utc>) -> Self {
        Self::new(datetime)
    }
}

impl From<Timestamp> for DateTime<Utc> {
    fn from(timestamp: Timestamp) -> Self {
        timestamp.into_datetime()
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
