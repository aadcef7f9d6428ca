//! The container types and their combinators.
//!
//! - [`OptionExt`]: Exhaustive extraction and conversions for `Option<T>`
//! - [`ResultExt`]: Exhaustive extraction, inspection and error-accumulating
//!   combination for `Result<T, E>`
//! - [`ResultOption`]: Three-state container (value, no value, failure)
//! - [`Unit`]: The zero-information success value
//! - [`combine_all`]: Collects many results, keeping every failure
//!
//! `Option` and `Result` are the standard library's own sum types; this
//! module extends them rather than replacing them, so `?`, pattern matching
//! and the rest of the ecosystem keep working.
//!
//! # Examples
//!
//! ## Extracting with a handler per variant
//!
//! ```rust
//! use outcomes::control::{OptionExt, ResultExt};
//!
//! let present = Some(2).fold(|x| x * 10, || 0);
//! assert_eq!(present, 20);
//!
//! let parsed: Result<i32, String> = "41".parse::<i32>().map_err(|e| e.to_string());
//! let next = parsed.fold(|x| x + 1, |_| -1);
//! assert_eq!(next, 42);
//! ```
//!
//! ## Validating several fields at once
//!
//! ```rust
//! use outcomes::control::{combine_all, fail_with};
//!
//! let fields: Vec<outcomes::Result<&str>> = vec![
//!     fail_with("Name", "required"),
//!     Ok("ada@example.com"),
//!     fail_with("Age", "must be positive"),
//! ];
//!
//! let errors = combine_all(fields).unwrap_err();
//! assert_eq!(errors.keys().collect::<Vec<_>>(), vec!["Name", "Age"]);
//! ```

mod option;
mod result;
mod result_option;
mod unit;

pub use option::OptionExt;
pub use result::{ResultExt, combine_all, fail, fail_with};
pub use result_option::ResultOption;
pub use unit::Unit;
