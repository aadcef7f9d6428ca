//! Field-keyed rule violations.

/// The shape of a single violation reported by a rule engine.
///
/// The bridge only ever reads the field key and the message, so any engine
/// can plug in by implementing this trait for its own violation type.
pub trait RuleViolation {
    /// The field (or property path) the rule was attached to.
    fn field(&self) -> &str;

    /// The human-readable failure message.
    fn message(&self) -> &str;
}

/// A rule violation with an owned field key and message.
///
/// # Examples
///
/// ```rust
/// use outcomes::validation::Violation;
///
/// let violation = Violation::new("Name", "required");
/// assert_eq!(violation.to_string(), "Name: required");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[error("{field}: {message}")]
pub struct Violation {
    /// The field the rule was attached to.
    pub field: String,
    /// The failure message.
    pub message: String,
}

impl Violation {
    /// Creates a new violation.
    #[must_use]
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl RuleViolation for Violation {
    fn field(&self) -> &str {
        &self.field
    }

    fn message(&self) -> &str {
        &self.message
    }
}

impl<K, M> RuleViolation for (K, M)
where
    K: AsRef<str>,
    M: AsRef<str>,
{
    fn field(&self) -> &str {
        self.0.as_ref()
    }

    fn message(&self) -> &str {
        self.1.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn tuple_violation_exposes_parts() {
        let violation = ("Age", "must be positive".to_string());
        assert_eq!(violation.field(), "Age");
        assert_eq!(violation.message(), "must be positive");
    }

    #[rstest]
    fn violation_is_an_error() {
        let violation = Violation::new("Email", "invalid");
        let _: &dyn std::error::Error = &violation;
    }
}
