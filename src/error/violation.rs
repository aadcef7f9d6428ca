//! Contract violations raised by fallible constructors.

/// A programmer error detected at the construction site.
///
/// Error aggregates are never empty and neither are their groups. The
/// constructors that accept arbitrary input report a violation of that rule
/// immediately instead of producing a value that would fail later.
///
/// # Examples
///
/// ```rust
/// use outcomes::error::{ContractViolation, ErrorAggregate};
///
/// let result = ErrorAggregate::try_from_messages(Vec::<String>::new());
/// assert_eq!(result, Err(ContractViolation::EmptyAggregate));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContractViolation {
    /// An aggregate was built from zero groups.
    #[error("an error aggregate requires at least one error group")]
    EmptyAggregate,
    /// A group was built from zero messages.
    #[error("error group `{key}` requires at least one message")]
    EmptyGroup {
        /// The key of the offending group.
        key: String,
    },
}
