//! Combinators for `Result<T, E>` and error-accumulating aggregation.
//!
//! `Result<T, E>` is the success/typed-failure container. Mapping
//! (`map`, `map_err`), chaining (`and_then`) and the eager fallback
//! (`unwrap_or`) come from the standard library. [`ResultExt`] adds
//! exhaustive extraction, non-consuming error inspection, a lazy fallback
//! that does not need the error, and a two-value combination that keeps
//! both errors.
//!
//! [`combine_all`] is the multi-field-validation entry point: it collects
//! *every* failure, in input order, instead of stopping at the first one.
//!
//! # Examples
//!
//! ```rust
//! use outcomes::control::combine_all;
//! use outcomes::error::ErrorAggregate;
//!
//! let results: Vec<outcomes::Result<i32>> = vec![
//!     Ok(1),
//!     Err(ErrorAggregate::new("A", "first")),
//!     Ok(2),
//!     Err(ErrorAggregate::new("B", "second")),
//! ];
//!
//! let combined = combine_all(results);
//! assert_eq!(
//!     combined,
//!     Err(ErrorAggregate::new("A", "first").with_error("B", "second"))
//! );
//! ```

use crate::control::Unit;
use crate::error::ErrorAggregate;
use crate::typeclass::Semigroup;

// =============================================================================
// ResultExt
// =============================================================================

/// Extension methods for `Result<T, E>`.
pub trait ResultExt<T, E>: Sized {
    /// Extracts a value by requiring a handler for both variants.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::control::ResultExt;
    ///
    /// let ok: Result<i32, String> = Ok(2);
    /// assert_eq!(ok.fold(|x| x * 10, |e| e.len() as i32), 20);
    ///
    /// let failed: Result<i32, String> = Err("boom".to_string());
    /// assert_eq!(failed.fold(|x| x * 10, |e| e.len() as i32), 4);
    /// ```
    fn fold<R, O, F>(self, on_ok: O, on_error: F) -> R
    where
        O: FnOnce(T) -> R,
        F: FnOnce(E) -> R;

    /// Returns the error without consuming the result, or `None` on success.
    ///
    /// Meant for boundary code that has to branch before handing the
    /// result on.
    fn try_get_error(&self) -> Option<&E>;

    /// Returns the success value, or the result of `fallback` on failure.
    ///
    /// Unlike `unwrap_or_else`, the fallback does not receive the error and
    /// is only evaluated when needed.
    fn default_with<F>(self, fallback: F) -> T
    where
        F: FnOnce() -> T;

    /// Runs `inspect` on the success value, if any, and returns the result
    /// unchanged.
    #[must_use]
    fn tap<F>(self, inspect: F) -> Self
    where
        F: FnOnce(&T);

    /// Runs `inspect` on the error, if any, and returns the result unchanged.
    #[must_use]
    fn tap_error<F>(self, inspect: F) -> Self
    where
        F: FnOnce(&E);

    /// Turns a success whose value fails `predicate` into a failure.
    ///
    /// # Errors
    ///
    /// Returns the original error, or the error built by `on_rejected` when
    /// the predicate does not hold.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::control::ResultExt;
    /// use outcomes::error::ErrorAggregate;
    ///
    /// let age: outcomes::Result<i32> = Ok(-3);
    /// let checked = age.ensure(|x| *x >= 0, || ErrorAggregate::new("Age", "must be positive"));
    /// assert_eq!(checked, Err(ErrorAggregate::new("Age", "must be positive")));
    /// ```
    fn ensure<P, F>(self, predicate: P, on_rejected: F) -> Result<T, E>
    where
        P: FnOnce(&T) -> bool,
        F: FnOnce() -> E;

    /// Combines two results, keeping both errors when both fail.
    ///
    /// # Errors
    ///
    /// Returns `Err` if either input failed; when both failed the errors are
    /// concatenated with `self`'s error first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::control::ResultExt;
    /// use outcomes::error::ErrorAggregate;
    ///
    /// let name: outcomes::Result<&str> = Err(ErrorAggregate::new("Name", "required"));
    /// let age: outcomes::Result<u8> = Err(ErrorAggregate::new("Age", "must be positive"));
    ///
    /// let person = name.zip_with(age, |name, age| (name, age));
    /// assert_eq!(person.unwrap_err().group_count(), 2);
    /// ```
    fn zip_with<U, R, F>(self, other: Result<U, E>, combine: F) -> Result<R, E>
    where
        E: Semigroup,
        F: FnOnce(T, U) -> R;

    /// Replaces the success value with [`Unit`].
    ///
    /// # Errors
    ///
    /// Propagates the original error unchanged.
    fn discard_value(self) -> Result<Unit, E>;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    #[inline]
    fn fold<R, O, F>(self, on_ok: O, on_error: F) -> R
    where
        O: FnOnce(T) -> R,
        F: FnOnce(E) -> R,
    {
        match self {
            Ok(value) => on_ok(value),
            Err(error) => on_error(error),
        }
    }

    #[inline]
    fn try_get_error(&self) -> Option<&E> {
        self.as_ref().err()
    }

    #[inline]
    fn default_with<F>(self, fallback: F) -> T
    where
        F: FnOnce() -> T,
    {
        self.unwrap_or_else(|_| fallback())
    }

    #[inline]
    fn tap<F>(self, inspect: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Ok(value) = &self {
            inspect(value);
        }
        self
    }

    #[inline]
    fn tap_error<F>(self, inspect: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Err(error) = &self {
            inspect(error);
        }
        self
    }

    fn ensure<P, F>(self, predicate: P, on_rejected: F) -> Result<T, E>
    where
        P: FnOnce(&T) -> bool,
        F: FnOnce() -> E,
    {
        self.and_then(|value| {
            if predicate(&value) {
                Ok(value)
            } else {
                Err(on_rejected())
            }
        })
    }

    fn zip_with<U, R, F>(self, other: Result<U, E>, combine: F) -> Result<R, E>
    where
        E: Semigroup,
        F: FnOnce(T, U) -> R,
    {
        match (self, other) {
            (Ok(left), Ok(right)) => Ok(combine(left, right)),
            (Err(left), Err(right)) => Err(left.combine(right)),
            (Err(error), Ok(_)) | (Ok(_), Err(error)) => Err(error),
        }
    }

    #[inline]
    fn discard_value(self) -> Result<Unit, E> {
        self.map(|_| Unit)
    }
}

// =============================================================================
// Aggregation
// =============================================================================

/// Collects a sequence of results without short-circuiting.
///
/// Returns `Ok` with every value, in input order, when all inputs succeed.
/// Otherwise returns `Err` with the concatenation of every failing input's
/// error, in input order. Every input is consumed even after the first
/// failure.
///
/// # Errors
///
/// Returns the combined errors of all failing inputs.
///
/// # Examples
///
/// ```rust
/// use outcomes::control::combine_all;
///
/// let all_ok: Vec<Result<i32, Vec<String>>> = vec![Ok(1), Ok(2), Ok(3)];
/// assert_eq!(combine_all(all_ok), Ok(vec![1, 2, 3]));
///
/// let mixed: Vec<Result<i32, Vec<String>>> = vec![
///     Err(vec!["a".to_string()]),
///     Ok(2),
///     Err(vec!["b".to_string()]),
/// ];
/// assert_eq!(combine_all(mixed), Err(vec!["a".to_string(), "b".to_string()]));
/// ```
pub fn combine_all<T, E, I>(results: I) -> Result<Vec<T>, E>
where
    I: IntoIterator<Item = Result<T, E>>,
    E: Semigroup,
{
    let iterator = results.into_iter();
    let mut values = Vec::with_capacity(iterator.size_hint().0);
    let mut errors: Option<E> = None;
    let mut failures = 0_usize;

    for result in iterator {
        match result {
            Ok(value) => values.push(value),
            Err(error) => {
                failures += 1;
                errors = Some(match errors {
                    Some(accumulated) => accumulated.combine(error),
                    None => error,
                });
            }
        }
    }

    match errors {
        Some(error) => {
            tracing::debug!(
                failures,
                successes = values.len(),
                "combined results contain failures"
            );
            Err(error)
        }
        None => Ok(values),
    }
}

// =============================================================================
// Single-error Constructors
// =============================================================================

/// Builds a failed [`crate::Result`] holding a single message under the
/// implicit key.
///
/// # Errors
///
/// Always returns `Err`.
///
/// # Examples
///
/// ```rust
/// use outcomes::control::fail;
///
/// let result: outcomes::Result<i32> = fail("database unavailable");
/// assert_eq!(result.unwrap_err().to_string(), "database unavailable");
/// ```
pub fn fail<T>(message: impl Into<String>) -> crate::Result<T> {
    Err(ErrorAggregate::from_message(message))
}

/// Builds a failed [`crate::Result`] holding a single `(key, message)` pair.
///
/// # Errors
///
/// Always returns `Err`.
pub fn fail_with<T>(key: impl Into<String>, message: impl Into<String>) -> crate::Result<T> {
    Err(ErrorAggregate::new(key, message))
}
