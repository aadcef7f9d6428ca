//! `ResultOption` - a lookup that can succeed with data, succeed with
//! nothing, or fail.
//!
//! `ResultOption<T, E>` has three variants:
//!
//! - `Ok(T)`: the operation succeeded and produced a value
//! - `None`: the operation succeeded and produced nothing
//! - `Error(E)`: the operation failed
//!
//! It carries the same information as `Result<Option<T>, E>`, but has its
//! own combinators so call sites do not have to unwrap an option nested in
//! a result. Combinators act on the `Ok` arm only; `None` and `Error` pass
//! through unchanged.
//!
//! # Examples
//!
//! ```rust
//! use outcomes::control::ResultOption;
//!
//! fn find_user(id: u32) -> ResultOption<String> {
//!     match id {
//!         0 => ResultOption::Error("invalid id".into()),
//!         1 => ResultOption::Ok("ada".to_string()),
//!         _ => ResultOption::None,
//!     }
//! }
//!
//! let label = find_user(1).map(|name| name.to_uppercase()).fold(
//!     |name| name,
//!     || "nobody".to_string(),
//!     |error| format!("error: {error}"),
//! );
//! assert_eq!(label, "ADA");
//! ```

use crate::error::ErrorAggregate;

/// A three-state container: a value, no value, or a typed failure.
///
/// # Type Parameters
///
/// * `T` - The type of the value in the `Ok` arm
/// * `E` - The error type, defaulting to [`ErrorAggregate`]
///
/// # Examples
///
/// ```rust
/// use outcomes::control::ResultOption;
///
/// let found: ResultOption<i32, String> = ResultOption::Ok(21);
/// assert_eq!(found.map(|x| x * 2), ResultOption::Ok(42));
///
/// let missing: ResultOption<i32, String> = ResultOption::None;
/// assert_eq!(missing.map(|x| x * 2), ResultOption::None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ResultOption<T, E = ErrorAggregate> {
    /// Success with a value.
    Ok(T),
    /// Success without a value.
    None,
    /// Failure.
    Error(E),
}

impl<T, E> ResultOption<T, E> {
    // =========================================================================
    // Tag Inspection
    // =========================================================================

    /// Returns `true` if this is `Ok`.
    #[inline]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Returns `true` if this is `None`.
    #[inline]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Returns `true` if this is `Error`.
    #[inline]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Returns a reference to the error without consuming `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::control::ResultOption;
    ///
    /// let failed: ResultOption<i32, &str> = ResultOption::Error("boom");
    /// assert_eq!(failed.try_get_error(), Some(&"boom"));
    /// assert_eq!(ResultOption::<i32, &str>::None.try_get_error(), None);
    /// ```
    #[inline]
    pub const fn try_get_error(&self) -> Option<&E> {
        match self {
            Self::Error(error) => Some(error),
            Self::Ok(_) | Self::None => None,
        }
    }

    /// Converts from `&ResultOption<T, E>` to `ResultOption<&T, &E>`.
    #[inline]
    pub const fn as_ref(&self) -> ResultOption<&T, &E> {
        match self {
            Self::Ok(value) => ResultOption::Ok(value),
            Self::None => ResultOption::None,
            Self::Error(error) => ResultOption::Error(error),
        }
    }

    // =========================================================================
    // Terminal Extraction
    // =========================================================================

    /// Extracts a value by requiring a handler for each of the three arms.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::control::ResultOption;
    ///
    /// let describe = |value: ResultOption<i32, String>| {
    ///     value.fold(|x| format!("got {x}"), || "empty".to_string(), |e| e)
    /// };
    /// assert_eq!(describe(ResultOption::Ok(1)), "got 1");
    /// assert_eq!(describe(ResultOption::None), "empty");
    /// assert_eq!(describe(ResultOption::Error("bad".to_string())), "bad");
    /// ```
    #[inline]
    pub fn fold<R, O, N, F>(self, on_ok: O, on_none: N, on_error: F) -> R
    where
        O: FnOnce(T) -> R,
        N: FnOnce() -> R,
        F: FnOnce(E) -> R,
    {
        match self {
            Self::Ok(value) => on_ok(value),
            Self::None => on_none(),
            Self::Error(error) => on_error(error),
        }
    }

    /// Returns the value, or `fallback` for both `None` and `Error`.
    #[inline]
    pub fn default_value(self, fallback: T) -> T {
        match self {
            Self::Ok(value) => value,
            Self::None | Self::Error(_) => fallback,
        }
    }

    /// Returns the value, or evaluates `fallback` for both `None` and
    /// `Error`. The fallback is not evaluated on `Ok`.
    #[inline]
    pub fn default_with<F>(self, fallback: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Ok(value) => value,
            Self::None | Self::Error(_) => fallback(),
        }
    }

    // =========================================================================
    // Combinators
    // =========================================================================

    /// Applies `function` to the `Ok` value.
    #[inline]
    pub fn map<U, F>(self, function: F) -> ResultOption<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Ok(value) => ResultOption::Ok(function(value)),
            Self::None => ResultOption::None,
            Self::Error(error) => ResultOption::Error(error),
        }
    }

    /// Applies `function` to the error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::control::ResultOption;
    ///
    /// let failed: ResultOption<i32, &str> = ResultOption::Error("boom");
    /// assert_eq!(failed.map_error(str::len), ResultOption::Error(4));
    /// ```
    #[inline]
    pub fn map_error<G, F>(self, function: F) -> ResultOption<T, G>
    where
        F: FnOnce(E) -> G,
    {
        match self {
            Self::Ok(value) => ResultOption::Ok(value),
            Self::None => ResultOption::None,
            Self::Error(error) => ResultOption::Error(function(error)),
        }
    }

    /// Chains a dependent lookup on the `Ok` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::control::ResultOption;
    ///
    /// let half = |x: i32| {
    ///     if x % 2 == 0 {
    ///         ResultOption::Ok(x / 2)
    ///     } else {
    ///         ResultOption::None
    ///     }
    /// };
    /// assert_eq!(ResultOption::<i32, String>::Ok(8).and_then(half), ResultOption::Ok(4));
    /// assert_eq!(ResultOption::<i32, String>::Ok(3).and_then(half), ResultOption::None);
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, function: F) -> ResultOption<U, E>
    where
        F: FnOnce(T) -> ResultOption<U, E>,
    {
        match self {
            Self::Ok(value) => function(value),
            Self::None => ResultOption::None,
            Self::Error(error) => ResultOption::Error(error),
        }
    }

    /// Turns an `Ok` whose value fails `predicate` into `None`.
    #[inline]
    #[must_use]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Ok(value) => {
                if predicate(&value) {
                    Self::Ok(value)
                } else {
                    Self::None
                }
            }
            Self::None => Self::None,
            Self::Error(error) => Self::Error(error),
        }
    }

    /// Replaces the `None` arm with the result of `fallback`.
    ///
    /// `Ok` and `Error` are returned unchanged and `fallback` is not called.
    #[inline]
    #[must_use]
    pub fn or_else_none<F>(self, fallback: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::None => fallback(),
            other => other,
        }
    }

    // =========================================================================
    // Conversions
    // =========================================================================

    /// Converts into a `Result`, materializing the `None` arm with the error
    /// produced by `when_none`.
    ///
    /// # Errors
    ///
    /// Returns the original error, or `when_none()` for the `None` arm.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::control::ResultOption;
    ///
    /// let missing: ResultOption<i32, String> = ResultOption::None;
    /// assert_eq!(missing.ok_or_else(|| "not found".to_string()), Err("not found".to_string()));
    /// ```
    #[inline]
    pub fn ok_or_else<F>(self, when_none: F) -> Result<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Self::Ok(value) => Ok(value),
            Self::None => Err(when_none()),
            Self::Error(error) => Err(error),
        }
    }

    /// Converts into an `Option`, **dropping the error**.
    ///
    /// Both `None` and `Error` become `None`. The failure is no longer
    /// observable afterwards; use [`into_nested`](Self::into_nested) to keep
    /// it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::control::ResultOption;
    ///
    /// assert_eq!(ResultOption::<i32, &str>::Ok(1).discard_error(), Some(1));
    /// assert_eq!(ResultOption::<i32, &str>::Error("boom").discard_error(), None);
    /// ```
    #[inline]
    pub fn discard_error(self) -> Option<T> {
        match self {
            Self::Ok(value) => Some(value),
            Self::None | Self::Error(_) => None,
        }
    }

    /// Converts into `Result<Option<T>, E>` without losing information.
    ///
    /// # Errors
    ///
    /// Returns the original error for the `Error` arm.
    #[inline]
    pub fn into_nested(self) -> Result<Option<T>, E> {
        match self {
            Self::Ok(value) => Ok(Some(value)),
            Self::None => Ok(None),
            Self::Error(error) => Err(error),
        }
    }

    /// Builds a `ResultOption` from `Result<Option<T>, E>` without losing
    /// information.
    #[inline]
    pub fn from_nested(result: Result<Option<T>, E>) -> Self {
        match result {
            Ok(Some(value)) => Self::Ok(value),
            Ok(None) => Self::None,
            Err(error) => Self::Error(error),
        }
    }
}

impl<T, E> ResultOption<Option<T>, E> {
    /// Collapses an `Ok(None)` into `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::control::ResultOption;
    ///
    /// let nested: ResultOption<Option<i32>, String> = ResultOption::Ok(None);
    /// assert_eq!(nested.flatten(), ResultOption::None);
    /// ```
    #[inline]
    pub fn flatten(self) -> ResultOption<T, E> {
        match self {
            Self::Ok(Some(value)) => ResultOption::Ok(value),
            Self::Ok(None) | Self::None => ResultOption::None,
            Self::Error(error) => ResultOption::Error(error),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T, E> From<Option<T>> for ResultOption<T, E> {
    #[inline]
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Self::Ok(value),
            None => Self::None,
        }
    }
}

impl<T, E> From<Result<T, E>> for ResultOption<T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Ok(value),
            Err(error) => Self::Error(error),
        }
    }
}

impl<T, E> From<ResultOption<T, E>> for Result<Option<T>, E> {
    #[inline]
    fn from(value: ResultOption<T, E>) -> Self {
        value.into_nested()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    type Lookup = ResultOption<i32, String>;

    #[rstest]
    #[case(Lookup::Ok(1), Ok(Some(1)))]
    #[case(Lookup::None, Ok(None))]
    #[case(Lookup::Error("e".to_string()), Err("e".to_string()))]
    fn nested_conversion_is_lossless(
        #[case] value: Lookup,
        #[case] expected: Result<Option<i32>, String>,
    ) {
        let nested: Result<Option<i32>, String> = value.clone().into();
        assert_eq!(nested, expected);
        assert_eq!(Lookup::from_nested(nested), value);
    }

    #[rstest]
    fn filter_turns_rejected_value_into_none() {
        assert_eq!(Lookup::Ok(3).filter(|x| *x > 5), Lookup::None);
        assert_eq!(Lookup::Ok(7).filter(|x| *x > 5), Lookup::Ok(7));
        assert_eq!(
            Lookup::Error("e".to_string()).filter(|_| false),
            Lookup::Error("e".to_string())
        );
    }

    #[rstest]
    fn or_else_none_only_replaces_none() {
        assert_eq!(Lookup::None.or_else_none(|| Lookup::Ok(9)), Lookup::Ok(9));
        assert_eq!(Lookup::Ok(1).or_else_none(|| Lookup::Ok(9)), Lookup::Ok(1));
    }

    #[rstest]
    fn default_with_is_lazy_on_ok() {
        let mut calls = 0;
        let value = Lookup::Ok(4).default_with(|| {
            calls += 1;
            0
        });
        assert_eq!(value, 4);
        assert_eq!(calls, 0);
        assert_eq!(Lookup::Error("e".to_string()).default_value(-1), -1);
    }

    #[rstest]
    fn as_ref_keeps_original() {
        let value = Lookup::Error("e".to_string());
        assert!(value.as_ref().is_error());
        assert_eq!(value.try_get_error().map(String::as_str), Some("e"));
    }
}
