//! Provenance wrapper for analytics results.
//!
//! The engine follows an "always answer" policy: when the input data is
//! insufficient it returns a documented default instead of failing, so a
//! dashboard tile is never broken. `Analysis<T>` makes that distinction
//! visible to callers without changing the serialized payload.

use serde::Serialize;

/// An analytics result that is either computed from real data or a
/// documented placeholder for insufficient data.
///
/// Both variants carry a complete, well-formed payload; `Insufficient`
/// carries the fixed default that the dashboard contract prescribes for the
/// missing-data case. Serialization is transparent (the wire shape is the
/// payload's, whichever variant), so existing consumers are unaffected
/// while new ones can branch on [`Analysis::is_computed`].
///
/// # Example
///
/// ```rust
/// use quantile_core::Analysis;
///
/// let real = Analysis::Computed(0.042);
/// let placeholder = Analysis::Insufficient(0.15);
///
/// assert!(real.is_computed());
/// assert!(!placeholder.is_computed());
/// assert_eq!(*placeholder.value(), 0.15);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Analysis<T> {
    /// The result was computed from the supplied data.
    Computed(T),
    /// The data was insufficient; the payload is the documented default.
    Insufficient(T),
}

impl<T> Analysis<T> {
    /// Returns true if the payload was computed from real data.
    #[must_use]
    pub fn is_computed(&self) -> bool {
        matches!(self, Self::Computed(_))
    }

    /// Returns true if the payload is a documented fallback.
    #[must_use]
    pub fn is_insufficient(&self) -> bool {
        matches!(self, Self::Insufficient(_))
    }

    /// Borrows the payload, whichever variant.
    #[must_use]
    pub fn value(&self) -> &T {
        match self {
            Self::Computed(v) | Self::Insufficient(v) => v,
        }
    }

    /// Consumes the wrapper and returns the payload, whichever variant.
    #[must_use]
    pub fn into_inner(self) -> T {
        match self {
            Self::Computed(v) | Self::Insufficient(v) => v,
        }
    }

    /// Maps the payload while preserving provenance.
    #[must_use]
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Analysis<U> {
        match self {
            Self::Computed(v) => Analysis::Computed(f(v)),
            Self::Insufficient(v) => Analysis::Insufficient(f(v)),
        }
    }
}
