//! Race fallible futures: first success wins, all failures aggregate.
//!
//! This crate provides one concurrency primitive, the any-of race:
//!
//! - [`any_of`]: drive a fixed set of fallible futures, resolving to the
//!   value of the first one to succeed, or to an [`AggregateError`]
//!   carrying every failure reason (in input-index order) when all fail.
//! - [`any_of_results`]: the same decision as a pure function over
//!   results that have already settled.
//! - [`laws`]: the machine-readable catalog of properties the race
//!   guarantees.
//!
//! # Contract
//!
//! - **Race, not fallback chain**: "first success" means first to settle
//!   in real time. If the third future succeeds before the first, the
//!   third one's value wins.
//! - **Stable failure order**: the aggregate's reasons are reassembled in
//!   input-index order regardless of arrival order. This asymmetry with
//!   the success path is contractual.
//! - **Failures are absorbed**: an individual failure never surfaces
//!   while the race can still be won; it is only visible in aggregate,
//!   and only when every future has failed.
//! - **Empty input rejects immediately** with an empty aggregate instead
//!   of pending forever.
//! - **No cancellation, no retries, no timeouts**: the combinator only
//!   observes the futures it is given. Losers stop being polled and are
//!   dropped with the combinator.
//!
//! # Example
//!
//! ```
//! use any_of::any_of_results;
//!
//! let fastest = any_of_results(vec![Err("dns timeout"), Ok("10.0.0.7")]);
//! assert_eq!(fastest, Ok("10.0.0.7"));
//! ```

pub mod any;
pub mod error;
pub mod laws;
pub mod outcome;
pub mod test_logging;

pub use any::{any_of, AnyOf};
pub use error::AggregateError;
pub use outcome::{any_of_results, make_any_of_result, AnyOfResult};
