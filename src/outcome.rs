//! Pure aggregation over already-settled results.
//!
//! The poll-driven [`AnyOf`](crate::any::AnyOf) combinator decides the
//! race as futures settle. When every operation has already settled, the
//! same decision is a pure function over the results; this module provides
//! that function so the race semantics can be applied (and tested) without
//! an executor.
//!
//! For a settled collection there is no arrival order left to observe, so
//! "first success" degenerates to the lowest successful input index.

use core::fmt;

use crate::error::AggregateError;

/// Result of aggregating N settled operations.
///
/// Keeps enough structure to inspect the decision before collapsing it
/// into a `Result` via [`AnyOfResult::into_result`].
pub struct AnyOfResult<T, E> {
    /// Winning input index and value, if any operation succeeded.
    pub success: Option<(usize, T)>,
    /// Failure reasons from operations that failed, in input-index order.
    /// When `success` is `None` this holds one reason per operation.
    pub failures: Vec<E>,
    /// Total number of operations aggregated.
    pub total_count: usize,
}

impl<T, E> AnyOfResult<T, E> {
    /// Returns true if some operation succeeded.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.success.is_some()
    }

    /// Input index of the winning operation, if any.
    #[must_use]
    pub fn winning_index(&self) -> Option<usize> {
        self.success.as_ref().map(|(i, _)| *i)
    }

    /// Number of operations that failed.
    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.failures.len()
    }

    /// Collapses the aggregation into the combinator's result form.
    ///
    /// A win yields `Ok(value)`; no win yields the aggregate failure with
    /// one reason per operation in input order.
    pub fn into_result(self) -> Result<T, AggregateError<E>> {
        match self.success {
            Some((_, value)) => Ok(value),
            None => Err(AggregateError::new(self.failures)),
        }
    }
}

impl<T: fmt::Debug, E: fmt::Debug> fmt::Debug for AnyOfResult<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnyOfResult")
            .field("success", &self.success)
            .field("failures", &self.failures)
            .field("total_count", &self.total_count)
            .finish()
    }
}

/// Constructs an [`AnyOfResult`] from settled results in input order.
///
/// The first `Ok` by index wins; later successes are ignored. Failure
/// reasons are collected in input-index order whether or not a winner
/// exists.
#[must_use]
pub fn make_any_of_result<T, E>(results: Vec<Result<T, E>>) -> AnyOfResult<T, E> {
    let total_count = results.len();
    let mut success = None;
    let mut failures = Vec::new();

    for (i, result) in results.into_iter().enumerate() {
        match result {
            Ok(value) => {
                if success.is_none() {
                    success = Some((i, value));
                }
            }
            Err(reason) => failures.push(reason),
        }
    }

    AnyOfResult {
        success,
        failures,
        total_count,
    }
}

/// Applies any-of semantics to settled results.
///
/// Equivalent to racing the operations after they have all settled: the
/// first `Ok` by input index wins, all-`Err` yields the index-ordered
/// aggregate, and an empty input yields the empty aggregate.
///
/// # Errors
///
/// Returns [`AggregateError`] when no result is `Ok`.
pub fn any_of_results<T, E>(results: Vec<Result<T, E>>) -> Result<T, AggregateError<E>> {
    make_any_of_result(results).into_result()
}
