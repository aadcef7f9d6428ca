//! Cancellation-aware waiting.
//!
//! [`wait_cancellable`] races a future against a [`CancellationToken`]. If
//! the token is already cancelled when the wait is created, the future is
//! never polled; otherwise whichever of the two completes first decides the
//! outcome. When both are ready in the same poll, cancellation wins.

use std::future::{Future, IntoFuture};
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use futures::future::{BoxFuture, FutureExt};
use pin_project_lite::pin_project;
use tokio::sync::watch;

/// Returned by a cancellable wait when cancellation was observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[error("operation was cancelled")]
pub struct Cancelled;

// =============================================================================
// CancellationToken
// =============================================================================

/// A clonable cancellation signal.
///
/// All clones observe the same signal. Once cancelled, a token stays
/// cancelled.
///
/// # Examples
///
/// ```rust
/// use outcomes::effect::CancellationToken;
///
/// let token = CancellationToken::new();
/// let observer = token.clone();
/// assert!(!observer.is_cancelled());
///
/// token.cancel();
/// assert!(observer.is_cancelled());
/// ```
#[derive(Debug, Clone)]
pub struct CancellationToken {
    sender: Arc<watch::Sender<bool>>,
}

impl CancellationToken {
    /// Creates a token that is not cancelled.
    #[must_use]
    pub fn new() -> Self {
        let (sender, _receiver) = watch::channel(false);
        Self {
            sender: Arc::new(sender),
        }
    }

    /// Signals cancellation to every clone of this token.
    pub fn cancel(&self) {
        let was_cancelled = self.sender.send_replace(true);
        if !was_cancelled {
            tracing::debug!("cancellation requested");
        }
    }

    /// Returns `true` once [`cancel`](Self::cancel) has been called on any
    /// clone.
    pub fn is_cancelled(&self) -> bool {
        *self.sender.borrow()
    }

    /// Resolves once the token is cancelled.
    pub async fn cancelled(&self) {
        let mut receiver = self.sender.subscribe();
        // The sender lives as long as `self`, so the channel cannot close here.
        let _ = receiver.wait_for(|cancelled| *cancelled).await;
    }

    fn cancelled_owned(self) -> BoxFuture<'static, ()> {
        async move { self.cancelled().await }.boxed()
    }
}

impl Default for CancellationToken {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Cancellable
// =============================================================================

pin_project! {
    /// Future returned by [`wait_cancellable`].
    ///
    /// Resolves to `Ok(output)` if the inner future completes first, or to
    /// `Err(Cancelled)` if cancellation is observed first.
    #[must_use = "futures do nothing unless you `.await` or poll them"]
    pub struct Cancellable<F> {
        #[pin]
        future: F,
        // `None` when the token was already cancelled at creation.
        signal: Option<BoxFuture<'static, ()>>,
    }
}

impl<F: Future> Future for Cancellable<F> {
    type Output = Result<F::Output, Cancelled>;

    fn poll(self: Pin<&mut Self>, context: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();

        let Some(signal) = this.signal.as_mut() else {
            return Poll::Ready(Err(Cancelled));
        };

        if signal.as_mut().poll(context).is_ready() {
            tracing::debug!("wait abandoned after cancellation");
            return Poll::Ready(Err(Cancelled));
        }

        this.future.poll(context).map(Ok)
    }
}

/// Waits for `future` unless `token` is cancelled first.
///
/// # Examples
///
/// ```rust
/// use outcomes::effect::{Cancelled, CancellationToken, wait_cancellable};
///
/// # tokio::runtime::Builder::new_current_thread().enable_time().build().unwrap().block_on(async {
/// let token = CancellationToken::new();
/// assert_eq!(wait_cancellable(async { 7 }, &token).await, Ok(7));
///
/// token.cancel();
/// assert_eq!(wait_cancellable(async { 7 }, &token).await, Err(Cancelled));
/// # });
/// ```
pub fn wait_cancellable<F>(future: F, token: &CancellationToken) -> Cancellable<F::IntoFuture>
where
    F: IntoFuture,
{
    let signal = if token.is_cancelled() {
        tracing::debug!("token already cancelled; inner future will not be polled");
        None
    } else {
        Some(token.clone().cancelled_owned())
    };

    Cancellable {
        future: future.into_future(),
        signal,
    }
}

/// Method form of [`wait_cancellable`] for any awaitable.
pub trait CancellableExt: IntoFuture + Sized {
    /// Waits for `self` unless `token` is cancelled first.
    fn with_cancellation(self, token: &CancellationToken) -> Cancellable<Self::IntoFuture> {
        wait_cancellable(self, token)
    }
}

impl<F: IntoFuture> CancellableExt for F {}
