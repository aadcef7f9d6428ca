//! Error payloads and contract violations.
//!
//! - [`ErrorAggregate`]: Ordered collection of keyed error groups, the
//!   default error type of [`crate::Result`]
//! - [`ErrorGroup`]: A key with one or more messages
//! - [`ErrorSink`]: Consumer that registers messages one pair at a time
//! - [`ContractViolation`]: Programmer errors reported by fallible constructors
//!
//! # Examples
//!
//! ```rust
//! use outcomes::error::ErrorAggregate;
//!
//! let errors = ErrorAggregate::try_from_groups(vec![
//!     ("K1", vec!["E1"]),
//!     ("K2", vec!["E2", "E3"]),
//! ])
//! .unwrap();
//!
//! let mut registered: Vec<(String, String)> = Vec::new();
//! errors.report_to(&mut registered);
//! assert_eq!(
//!     registered,
//!     vec![
//!         ("K1".to_string(), "E1".to_string()),
//!         ("K2".to_string(), "E2".to_string()),
//!         ("K2".to_string(), "E3".to_string()),
//!     ]
//! );
//! ```

mod aggregate;
mod sink;
mod violation;

pub use aggregate::{ErrorAggregate, ErrorGroup};
pub use sink::ErrorSink;
pub use violation::ContractViolation;
