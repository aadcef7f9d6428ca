//! # outcomes
//!
//! Containers for "value may be absent" and "computation may fail with typed
//! errors", without null references and without panics for control flow.
//!
//! ## Overview
//!
//! - **Option**: `std::option::Option<T>`, extended by [`control::OptionExt`]
//! - **Result**: `std::result::Result<T, E>`, extended by
//!   [`control::ResultExt`]; [`Result`] defaults the error to
//!   [`error::ErrorAggregate`]
//! - **ResultOption**: [`control::ResultOption`], a first-class three-state
//!   container for lookups that can find something, find nothing, or fail
//! - **Unit**: [`control::Unit`], the value of operations with nothing to
//!   return
//! - **Error aggregate**: [`error::ErrorAggregate`], an ordered multimap of
//!   keyed messages that concatenates instead of overwriting
//! - **Validation bridge**: [`validation`], turning a rule engine's
//!   violations into a `Result`
//! - **Async layer**: [`effect`], awaitable combinators and cancellation-aware
//!   waiting
//!
//! Values are consumed by combinators and produced anew; nothing is mutated in
//! place and there is no global state, so every container is as thread-safe
//! as its contents.
//!
//! ## Feature Flags
//!
//! - `async` (default): Async combinators and cancellation (tokio, futures)
//! - `serde`: `Serialize`/`Deserialize` for the crate's types
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use outcomes::prelude::*;
//!
//! fn parse_age(input: &str) -> outcomes::Result<u8> {
//!     input
//!         .parse::<u8>()
//!         .map_err(|_| ErrorAggregate::new("Age", "must be a number"))
//! }
//!
//! let fields = vec![parse_age("42"), parse_age("old"), parse_age("-1")];
//! let summary = combine_all(fields).fold(
//!     |ages| format!("{} ages", ages.len()),
//!     |errors| format!("{} errors", errors.message_count()),
//! );
//! assert_eq!(summary, "2 errors");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use outcomes::prelude::*;
/// ```
pub mod prelude {
    pub use crate::control::*;
    pub use crate::error::*;
    pub use crate::typeclass::*;
    pub use crate::validation::*;

    #[cfg(feature = "async")]
    pub use crate::effect::*;
}

pub mod control;
pub mod error;
pub mod typeclass;
pub mod validation;

#[cfg(feature = "async")]
pub mod effect;

/// `Result` with the error type defaulting to [`error::ErrorAggregate`].
///
/// # Examples
///
/// ```rust
/// use outcomes::error::ErrorAggregate;
///
/// let saved: outcomes::Result<u32> = Err(ErrorAggregate::new("Id", "duplicate"));
/// assert!(saved.is_err());
///
/// let custom: outcomes::Result<u32, String> = Err("plain".to_string());
/// assert!(custom.is_err());
/// ```
pub type Result<T, E = error::ErrorAggregate> = std::result::Result<T, E>;
