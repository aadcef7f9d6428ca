//! Type class traits shared by the containers.
//!
//! - [`Semigroup`]: Associative binary operation, used to concatenate error
//!   payloads when several fallible values are combined.
//!
//! # Examples
//!
//! ```rust
//! use outcomes::typeclass::Semigroup;
//!
//! let hello = String::from("Hello, ");
//! let world = String::from("World!");
//! assert_eq!(hello.combine(world), "Hello, World!");
//! ```

mod semigroup;

pub use semigroup::Semigroup;
