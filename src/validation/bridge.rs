//! Converts a rule engine's outcome into a `Result`.

use std::collections::HashMap;

use smallvec::SmallVec;

use super::{RuleViolation, Violation};
use crate::error::ErrorAggregate;

// =============================================================================
// ValidationOutcome
// =============================================================================

/// A validated value together with every violation the engine reported.
///
/// # Examples
///
/// ```rust
/// use outcomes::error::ErrorAggregate;
/// use outcomes::validation::ValidationOutcome;
///
/// let outcome = ValidationOutcome::new(
///     "",
///     vec![("Name", "required"), ("Name", "too long"), ("Age", "must be positive")],
/// );
///
/// let expected = ErrorAggregate::try_from_groups(vec![
///     ("Name", vec!["required", "too long"]),
///     ("Age", vec!["must be positive"]),
/// ])
/// .unwrap();
/// assert_eq!(outcome.into_result(), Err(expected));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationOutcome<T, V = Violation> {
    value: T,
    violations: Vec<V>,
}

impl<T, V> ValidationOutcome<T, V> {
    /// Pairs `value` with the violations reported for it.
    pub const fn new(value: T, violations: Vec<V>) -> Self {
        Self { value, violations }
    }

    /// Creates an outcome without violations.
    pub const fn valid(value: T) -> Self {
        Self::new(value, Vec::new())
    }

    /// Returns `true` if no rule was violated.
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// Returns the violations in reporting order.
    pub fn violations(&self) -> &[V] {
        &self.violations
    }
}

impl<T, V: RuleViolation> ValidationOutcome<T, V> {
    /// Converts into the default [`crate::Result`].
    ///
    /// Without violations the value is returned as `Ok`. Otherwise the
    /// violations are grouped by field, in order of each field's first
    /// appearance, with messages in reporting order, and the value is
    /// dropped.
    ///
    /// # Errors
    ///
    /// Returns the grouped violations as an [`ErrorAggregate`].
    pub fn into_result(self) -> crate::Result<T> {
        match group_by_field(&self.violations) {
            Some(errors) => {
                tracing::debug!(
                    violations = self.violations.len(),
                    fields = errors.group_count(),
                    "validation failed"
                );
                Err(errors)
            }
            None => Ok(self.value),
        }
    }
}

fn group_by_field<V: RuleViolation>(violations: &[V]) -> Option<ErrorAggregate> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(&str, SmallVec<[&str; 1]>)> = Vec::new();

    for violation in violations {
        let field = violation.field();
        let position = *positions.entry(field).or_insert_with(|| {
            groups.push((field, SmallVec::new()));
            groups.len() - 1
        });
        groups[position].1.push(violation.message());
    }

    ErrorAggregate::try_from_groups(groups).ok()
}

// =============================================================================
// Validator
// =============================================================================

/// The seam a rule engine implements.
///
/// The bridge never looks at how rules are declared; it only needs the
/// violations a validator reports for a value.
///
/// # Examples
///
/// ```rust
/// use outcomes::validation::{Validator, ValidatorExt, Violation};
///
/// struct NonEmpty;
///
/// impl Validator<String> for NonEmpty {
///     type Violation = Violation;
///
///     fn validate(&self, value: &String) -> Vec<Violation> {
///         if value.is_empty() {
///             vec![Violation::new("Name", "required")]
///         } else {
///             Vec::new()
///         }
///     }
/// }
///
/// assert_eq!(NonEmpty.validate_into_result("ada".to_string()), Ok("ada".to_string()));
/// assert!(NonEmpty.validate_into_result(String::new()).is_err());
/// ```
pub trait Validator<T> {
    /// The violation type this validator reports.
    type Violation: RuleViolation;

    /// Checks every rule against `value`, returning all violations in
    /// reporting order.
    fn validate(&self, value: &T) -> Vec<Self::Violation>;
}

/// Bridging methods for every [`Validator`].
pub trait ValidatorExt<T>: Validator<T> {
    /// Validates `value` and pairs it with the reported violations.
    fn outcome(&self, value: T) -> ValidationOutcome<T, Self::Violation> {
        let violations = self.validate(&value);
        ValidationOutcome::new(value, violations)
    }

    /// Validates `value` and converts the outcome into a `Result`.
    ///
    /// # Errors
    ///
    /// Returns the grouped violations if any rule failed.
    fn validate_into_result(&self, value: T) -> crate::Result<T> {
        self.outcome(value).into_result()
    }
}

impl<T, V> ValidatorExt<T> for V where V: Validator<T> + ?Sized {}
