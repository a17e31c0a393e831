//! Async result future for builder operations
//!
//! Each builder call hands its work to a spawned task and returns an
//! [`AsyncJwtResult`]. Awaiting it is the single suspension point of the call.

use crate::error::{JwtError, JwtResult};
use std::{
    convert,
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};
use tokio::sync::oneshot;

/// Pending result of a builder operation.
///
/// Errors pass through `E` before they reach the caller; the default handler
/// leaves them unchanged. A task that ends without reporting resolves to
/// [`JwtError::TaskFailed`].
#[must_use = "futures do nothing unless awaited"]
pub struct AsyncJwtResult<T, E = fn(JwtError) -> JwtError> {
    receiver: oneshot::Receiver<JwtResult<T>>,
    error_handler: E,
}

/// [`AsyncJwtResult`] with a caller-supplied error handler.
pub type AsyncJwtResultWithError<T, E> = AsyncJwtResult<T, E>;

impl<T: Send + 'static> AsyncJwtResult<T> {
    /// Run `job` on a spawned task, errors unchanged.
    ///
    /// Must be called from within a Tokio runtime.
    pub(crate) fn spawn<F>(job: F) -> Self
    where
        F: FnOnce() -> JwtResult<T> + Send + 'static,
    {
        Self::spawn_with(job, convert::identity)
    }
}

impl<T, E> AsyncJwtResult<T, E>
where
    T: Send + 'static,
    E: Fn(JwtError) -> JwtError,
{
    /// Run `job` on a spawned task and map its errors through `error_handler`.
    pub(crate) fn spawn_with<F>(job: F, error_handler: E) -> Self
    where
        F: FnOnce() -> JwtResult<T> + Send + 'static,
    {
        let (tx, receiver) = oneshot::channel();

        tokio::spawn(async move {
            tokio::task::yield_now().await;
            let _ = tx.send(job());
        });

        Self {
            receiver,
            error_handler,
        }
    }
}

impl<T, E> Future for AsyncJwtResult<T, E>
where
    E: Fn(JwtError) -> JwtError + Unpin,
{
    type Output = JwtResult<T>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.get_mut();
        let result = match Pin::new(&mut this.receiver).poll(cx) {
            Poll::Ready(Ok(result)) => result,
            Poll::Ready(Err(_)) => Err(JwtError::TaskFailed),
            Poll::Pending => return Poll::Pending,
        };
        Poll::Ready(result.map_err(&this.error_handler))
    }
}
