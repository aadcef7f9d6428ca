//! Bridge from rule-engine outcomes to [`crate::Result`].
//!
//! A rule engine reports a value plus an ordered list of field-keyed
//! violations. This module turns that report into `Ok(value)` when nothing
//! was violated, or into an [`ErrorAggregate`](crate::error::ErrorAggregate)
//! grouped by field otherwise. Validation runs once, synchronously, and is
//! never retried or partially applied.
//!
//! - [`RuleViolation`]: The only shape the bridge reads from an engine
//! - [`Violation`]: An owned violation
//! - [`ValidationOutcome`]: Value plus violations, convertible to a `Result`
//! - [`Validator`] / [`ValidatorExt`]: Seam for engines and its bridging methods

mod bridge;
mod violation;

pub use bridge::{ValidationOutcome, Validator, ValidatorExt};
pub use violation::{RuleViolation, Violation};
