//! Any-of combinator: race fallible futures, first success wins.
//!
//! [`AnyOf`] drives a fixed collection of fallible futures and settles as
//! soon as one of them succeeds. If every future fails, it settles with an
//! [`AggregateError`] carrying each failure reason in input-index order.
//!
//! # Semantics
//!
//! `any_of(vec![f0, f1, ..., fn])`:
//! 1. Empty input settles immediately with an empty aggregate failure.
//! 2. Each poll sweeps the still-pending futures in input order.
//! 3. The first `Ok` to arrive wins the race; the combinator resolves to
//!    that value even while other futures are still pending.
//! 4. An `Err` retires that future's slot: its reason is recorded at the
//!    original input index and it is never polled again.
//! 5. Only when every slot has been retired does the aggregate failure
//!    settle, reasons ordered by input index rather than arrival order.
//!
//! # Tie-break policy
//!
//! "First success" means first to settle in real time, not first by input
//! index. When several futures become ready within the same poll sweep,
//! the lowest index wins (poll-order bias).
//!
//! # Cancellation
//!
//! None. Losing futures are not signalled; they simply stop being polled
//! and are dropped together with the combinator. Callers wanting retry,
//! timeout, or cooperative cancellation wrap the individual futures before
//! racing them.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use smallvec::SmallVec;

use crate::error::AggregateError;

/// Inline capacity for failure slots before spilling to the heap.
const INLINE_SLOTS: usize = 4;

/// Future for the [`any_of`] combinator.
///
/// Holds one slot per input future plus a pending counter. A slot is
/// retired the moment its future fails; retired slots are never polled
/// again, so each future settles at most once from the combinator's point
/// of view.
#[must_use = "futures do nothing unless polled"]
pub struct AnyOf<F, E> {
    futures: Vec<Option<F>>,
    reasons: SmallVec<[Option<E>; INLINE_SLOTS]>,
    pending: usize,
}

// The reason slots are only ever touched through `&mut`; pinning is only
// required of the raced futures themselves.
impl<F: Unpin, E> Unpin for AnyOf<F, E> {}

impl<F, E> AnyOf<F, E> {
    /// Creates a new any-of combinator over the given futures.
    ///
    /// Nothing is polled here; the race starts on the first poll of the
    /// returned combinator.
    pub fn new<T>(futures: Vec<F>) -> Self
    where
        F: Future<Output = Result<T, E>>,
    {
        let pending = futures.len();
        Self {
            futures: futures.into_iter().map(Some).collect(),
            reasons: (0..pending).map(|_| None).collect(),
            pending,
        }
    }

    /// Number of futures that have neither succeeded nor failed yet.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.pending
    }

    /// Total number of futures in the race.
    #[must_use]
    pub fn total(&self) -> usize {
        self.futures.len()
    }
}

impl<F, E> std::fmt::Debug for AnyOf<F, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnyOf")
            .field("total", &self.futures.len())
            .field("pending", &self.pending)
            .finish_non_exhaustive()
    }
}

impl<F, T, E> Future for AnyOf<F, E>
where
    F: Future<Output = Result<T, E>> + Unpin,
{
    type Output = Result<T, AggregateError<E>>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = &mut *self;

        for i in 0..this.futures.len() {
            let Some(fut) = this.futures[i].as_mut() else {
                continue;
            };
            match Pin::new(fut).poll(cx) {
                Poll::Ready(Ok(value)) => return Poll::Ready(Ok(value)),
                Poll::Ready(Err(reason)) => {
                    // Retire the slot: a settled future is never polled again.
                    this.futures[i] = None;
                    this.reasons[i] = Some(reason);
                    this.pending -= 1;
                }
                Poll::Pending => {}
            }
        }

        if this.pending == 0 {
            // Every slot holds Some(reason) here, so `flatten` preserves
            // both length and input-index order. Also covers the empty
            // input on the very first poll.
            let reasons = std::mem::take(&mut this.reasons)
                .into_iter()
                .flatten()
                .collect();
            return Poll::Ready(Err(AggregateError::new(reasons)));
        }

        Poll::Pending
    }
}

/// Races `futures`, resolving to the value of the first one to succeed.
///
/// If every future fails, resolves to an [`AggregateError`] carrying each
/// failure reason in input-index order. An empty input resolves to the
/// empty aggregate failure on the first poll rather than pending forever.
///
/// Futures that are not `Unpin` can be boxed first: `Pin<Box<F>>`
/// satisfies the bound.
pub fn any_of<F, T, E>(futures: Vec<F>) -> AnyOf<F, E>
where
    F: Future<Output = Result<T, E>> + Unpin,
{
    AnyOf::new(futures)
}
