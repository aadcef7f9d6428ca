//! Awaitable counterparts of `fold`, `map` and `and_then`.
//!
//! Every combinator inspects the container's tag synchronously, then awaits
//! only the future returned by the handler it selected. The container itself
//! never suspends, and a handler that is not selected is never called.

use std::future::Future;

use crate::control::ResultOption;

// =============================================================================
// Option
// =============================================================================

/// Async combinators for `Option<T>`.
///
/// # Examples
///
/// ```rust
/// use outcomes::effect::OptionAsyncExt;
///
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// let doubled = Some(21).map_async(|x| async move { x * 2 }).await;
/// assert_eq!(doubled, Some(42));
/// # });
/// ```
pub trait OptionAsyncExt<T>: Sized {
    /// Awaits the handler selected by the tag.
    fn fold_async<R, S, N, SomeFuture, NoneFuture>(
        self,
        on_some: S,
        on_none: N,
    ) -> impl Future<Output = R>
    where
        S: FnOnce(T) -> SomeFuture,
        N: FnOnce() -> NoneFuture,
        SomeFuture: Future<Output = R>,
        NoneFuture: Future<Output = R>;

    /// Maps the value with an async function; `None` resolves immediately.
    fn map_async<U, F, Fut>(self, function: F) -> impl Future<Output = Option<U>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>;

    /// Chains an async lookup; `None` resolves immediately.
    fn and_then_async<U, F, Fut>(self, function: F) -> impl Future<Output = Option<U>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Option<U>>;
}

impl<T> OptionAsyncExt<T> for Option<T> {
    async fn fold_async<R, S, N, SomeFuture, NoneFuture>(self, on_some: S, on_none: N) -> R
    where
        S: FnOnce(T) -> SomeFuture,
        N: FnOnce() -> NoneFuture,
        SomeFuture: Future<Output = R>,
        NoneFuture: Future<Output = R>,
    {
        match self {
            Some(value) => on_some(value).await,
            None => on_none().await,
        }
    }

    async fn map_async<U, F, Fut>(self, function: F) -> Option<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        match self {
            Some(value) => Some(function(value).await),
            None => None,
        }
    }

    async fn and_then_async<U, F, Fut>(self, function: F) -> Option<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Option<U>>,
    {
        match self {
            Some(value) => function(value).await,
            None => None,
        }
    }
}

// =============================================================================
// Result
// =============================================================================

/// Async combinators for `Result<T, E>`.
///
/// # Examples
///
/// ```rust
/// use outcomes::effect::ResultAsyncExt;
///
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// let parsed: Result<i32, String> = Ok(20);
/// let chained = parsed
///     .and_then_async(|x| async move { if x > 0 { Ok(x + 1) } else { Err("negative".to_string()) } })
///     .await;
/// assert_eq!(chained, Ok(21));
/// # });
/// ```
pub trait ResultAsyncExt<T, E>: Sized {
    /// Awaits the handler selected by the tag.
    fn fold_async<R, O, F, OkFuture, ErrorFuture>(
        self,
        on_ok: O,
        on_error: F,
    ) -> impl Future<Output = R>
    where
        O: FnOnce(T) -> OkFuture,
        F: FnOnce(E) -> ErrorFuture,
        OkFuture: Future<Output = R>,
        ErrorFuture: Future<Output = R>;

    /// Maps the success value with an async function; errors resolve
    /// immediately.
    fn map_async<U, F, Fut>(self, function: F) -> impl Future<Output = Result<U, E>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>;

    /// Maps the error with an async function; successes resolve immediately.
    fn map_err_async<G, F, Fut>(self, function: F) -> impl Future<Output = Result<T, G>>
    where
        F: FnOnce(E) -> Fut,
        Fut: Future<Output = G>;

    /// Chains an async fallible computation; errors resolve immediately.
    fn and_then_async<U, F, Fut>(self, function: F) -> impl Future<Output = Result<U, E>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Result<U, E>>;
}

impl<T, E> ResultAsyncExt<T, E> for Result<T, E> {
    async fn fold_async<R, O, F, OkFuture, ErrorFuture>(self, on_ok: O, on_error: F) -> R
    where
        O: FnOnce(T) -> OkFuture,
        F: FnOnce(E) -> ErrorFuture,
        OkFuture: Future<Output = R>,
        ErrorFuture: Future<Output = R>,
    {
        match self {
            Ok(value) => on_ok(value).await,
            Err(error) => on_error(error).await,
        }
    }

    async fn map_async<U, F, Fut>(self, function: F) -> Result<U, E>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        match self {
            Ok(value) => Ok(function(value).await),
            Err(error) => Err(error),
        }
    }

    async fn map_err_async<G, F, Fut>(self, function: F) -> Result<T, G>
    where
        F: FnOnce(E) -> Fut,
        Fut: Future<Output = G>,
    {
        match self {
            Ok(value) => Ok(value),
            Err(error) => Err(function(error).await),
        }
    }

    async fn and_then_async<U, F, Fut>(self, function: F) -> Result<U, E>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Result<U, E>>,
    {
        match self {
            Ok(value) => function(value).await,
            Err(error) => Err(error),
        }
    }
}

// =============================================================================
// ResultOption
// =============================================================================

impl<T, E> ResultOption<T, E> {
    /// Awaits the handler selected by the tag.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::control::ResultOption;
    ///
    /// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
    /// let found: ResultOption<i32, String> = ResultOption::None;
    /// let label = found
    ///     .fold_async(
    ///         |x| async move { x.to_string() },
    ///         || async { "none".to_string() },
    ///         |e| async move { e },
    ///     )
    ///     .await;
    /// assert_eq!(label, "none");
    /// # });
    /// ```
    pub async fn fold_async<R, O, N, F, OkFuture, NoneFuture, ErrorFuture>(
        self,
        on_ok: O,
        on_none: N,
        on_error: F,
    ) -> R
    where
        O: FnOnce(T) -> OkFuture,
        N: FnOnce() -> NoneFuture,
        F: FnOnce(E) -> ErrorFuture,
        OkFuture: Future<Output = R>,
        NoneFuture: Future<Output = R>,
        ErrorFuture: Future<Output = R>,
    {
        match self {
            Self::Ok(value) => on_ok(value).await,
            Self::None => on_none().await,
            Self::Error(error) => on_error(error).await,
        }
    }

    /// Maps the `Ok` value with an async function.
    pub async fn map_async<U, F, Fut>(self, function: F) -> ResultOption<U, E>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        match self {
            Self::Ok(value) => ResultOption::Ok(function(value).await),
            Self::None => ResultOption::None,
            Self::Error(error) => ResultOption::Error(error),
        }
    }

    /// Chains an async lookup on the `Ok` value.
    pub async fn and_then_async<U, F, Fut>(self, function: F) -> ResultOption<U, E>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = ResultOption<U, E>>,
    {
        match self {
            Self::Ok(value) => function(value).await,
            Self::None => ResultOption::None,
            Self::Error(error) => ResultOption::Error(error),
        }
    }
}
