//! Error types for the any-of combinator.
//!
//! There is exactly one error: [`AggregateError`], produced when every
//! raced operation has failed. Individual failures are never surfaced on
//! their own; they are only visible in aggregate, and only once the race
//! can no longer be won.

use core::fmt;

/// Aggregate failure: every raced operation failed.
///
/// Carries one failure reason per input operation, positioned by original
/// input index regardless of the order in which the failures actually
/// arrived. Racing zero operations yields an aggregate with an empty
/// reason list; that is a well-defined value of this type, not a distinct
/// error class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateError<E> {
    reasons: Vec<E>,
}

impl<E> AggregateError<E> {
    /// Creates an aggregate from failure reasons in input-index order.
    #[must_use]
    pub fn new(reasons: Vec<E>) -> Self {
        Self { reasons }
    }

    /// The aggregate produced by racing zero operations.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            reasons: Vec::new(),
        }
    }

    /// Number of failure reasons. Equals the number of raced operations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.reasons.len()
    }

    /// Returns true if zero operations were raced.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reasons.is_empty()
    }

    /// The failure reasons, indexed by original input position.
    #[must_use]
    pub fn reasons(&self) -> &[E] {
        &self.reasons
    }

    /// Consumes the aggregate, yielding the reasons in input order.
    #[must_use]
    pub fn into_reasons(self) -> Vec<E> {
        self.reasons
    }

    /// Iterates the reasons in input order.
    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.reasons.iter()
    }
}

impl<E> Default for AggregateError<E> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<'a, E> IntoIterator for &'a AggregateError<E> {
    type Item = &'a E;
    type IntoIter = std::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.reasons.iter()
    }
}

impl<E> IntoIterator for AggregateError<E> {
    type Item = E;
    type IntoIter = std::vec::IntoIter<E>;

    fn into_iter(self) -> Self::IntoIter {
        self.reasons.into_iter()
    }
}

impl<E> fmt::Display for AggregateError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reasons.len() {
            0 => write!(f, "no operations were supplied"),
            1 => write!(f, "the operation failed"),
            n => write!(f, "all {n} operations failed"),
        }
    }
}

impl<E: fmt::Debug + fmt::Display> std::error::Error for AggregateError<E> {}
