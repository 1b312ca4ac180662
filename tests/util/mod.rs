//! Controllable futures for driving races from test threads.

use parking_lot::Mutex;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll, Waker};

struct Shared<T, E> {
    value: Option<Result<T, E>>,
    waker: Option<Waker>,
}

/// A future that settles when its [`CompletableHandle`] is triggered,
/// possibly from another thread.
pub struct Completable<T, E> {
    shared: Arc<Mutex<Shared<T, E>>>,
}

/// Settles the paired [`Completable`].
pub struct CompletableHandle<T, E> {
    shared: Arc<Mutex<Shared<T, E>>>,
}

/// Creates a future/handle pair.
pub fn completable<T, E>() -> (Completable<T, E>, CompletableHandle<T, E>) {
    let shared = Arc::new(Mutex::new(Shared {
        value: None,
        waker: None,
    }));
    (
        Completable {
            shared: Arc::clone(&shared),
        },
        CompletableHandle { shared },
    )
}

impl<T, E> CompletableHandle<T, E> {
    /// Settles the future. Harmless if the future was already dropped;
    /// there is simply no one left to wake.
    pub fn complete(&self, result: Result<T, E>) {
        let waker = {
            let mut shared = self.shared.lock();
            shared.value = Some(result);
            shared.waker.take()
        };
        if let Some(waker) = waker {
            waker.wake();
        }
    }
}

impl<T, E> Future for Completable<T, E> {
    type Output = Result<T, E>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let mut shared = self.shared.lock();
        if let Some(value) = shared.value.take() {
            Poll::Ready(value)
        } else {
            shared.waker = Some(cx.waker().clone());
            Poll::Pending
        }
    }
}
