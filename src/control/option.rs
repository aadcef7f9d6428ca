//! Combinators for `Option<T>`.
//!
//! `Option<T>` is the presence/absence container. The standard library
//! already supplies mapping (`map`), chaining (`and_then`), fallbacks
//! (`unwrap_or`, `unwrap_or_else`) and tag inspection (`is_some`,
//! `is_none`), as well as the ordering in which `None` sorts before any
//! `Some`. [`OptionExt`] adds the exhaustive two-handler extraction and the
//! conversions into the other containers of this crate.
//!
//! # Examples
//!
//! ```rust
//! use outcomes::control::OptionExt;
//!
//! let greeting = Some("Ada").fold(|name| format!("Hello, {name}"), || "Hello".to_string());
//! assert_eq!(greeting, "Hello, Ada");
//! ```

use crate::control::ResultOption;
use crate::error::ErrorAggregate;

/// Extension methods for `Option<T>`.
pub trait OptionExt<T>: Sized {
    /// Extracts a value by requiring a handler for both variants.
    ///
    /// `on_some` receives the wrapped value; `on_none` runs when the option
    /// is empty. Exactly one handler is invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::control::OptionExt;
    ///
    /// assert_eq!(Some(3).fold(|x| x * 2, || 0), 6);
    /// assert_eq!(None::<i32>.fold(|x| x * 2, || 0), 0);
    /// ```
    fn fold<R, S, N>(self, on_some: S, on_none: N) -> R
    where
        S: FnOnce(T) -> R,
        N: FnOnce() -> R;

    /// Runs `inspect` on the wrapped value, if any, and returns the option
    /// unchanged.
    #[must_use]
    fn tap<F>(self, inspect: F) -> Self
    where
        F: FnOnce(&T);

    /// Converts into a [`ResultOption`], mapping `Some` to `Ok` and `None`
    /// to `None`.
    fn into_result_option<E>(self) -> ResultOption<T, E>;

    /// Converts into the default [`crate::Result`], attaching a single
    /// `(key, message)` error when the option is empty.
    ///
    /// # Errors
    ///
    /// Returns an [`ErrorAggregate`] holding `(key, message)` when `self` is
    /// `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::control::OptionExt;
    /// use outcomes::error::ErrorAggregate;
    ///
    /// let missing: Option<u32> = None;
    /// assert_eq!(
    ///     missing.ok_or_error("Id", "not found"),
    ///     Err(ErrorAggregate::new("Id", "not found"))
    /// );
    /// ```
    fn ok_or_error(
        self,
        key: impl Into<String>,
        message: impl Into<String>,
    ) -> crate::Result<T, ErrorAggregate>;
}

impl<T> OptionExt<T> for Option<T> {
    #[inline]
    fn fold<R, S, N>(self, on_some: S, on_none: N) -> R
    where
        S: FnOnce(T) -> R,
        N: FnOnce() -> R,
    {
        match self {
            Some(value) => on_some(value),
            None => on_none(),
        }
    }

    #[inline]
    fn tap<F>(self, inspect: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Some(value) = &self {
            inspect(value);
        }
        self
    }

    #[inline]
    fn into_result_option<E>(self) -> ResultOption<T, E> {
        ResultOption::from(self)
    }

    fn ok_or_error(
        self,
        key: impl Into<String>,
        message: impl Into<String>,
    ) -> crate::Result<T, ErrorAggregate> {
        self.ok_or_else(|| ErrorAggregate::new(key, message))
    }
}
