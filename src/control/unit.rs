//! The zero-information value.

use std::fmt;

/// A value that carries no information.
///
/// `Unit` stands in for "no meaningful return value" where a combinator
/// still has to produce something on the success branch, for example
/// `Result<Unit>` for a save operation. Every instance is equal to every
/// other, and its string form is the empty tuple literal.
///
/// # Examples
///
/// ```rust
/// use outcomes::control::Unit;
///
/// assert_eq!(Unit, Unit::from(()));
/// assert_eq!(Unit.to_string(), "()");
/// assert_eq!(Unit.cmp(&Unit), std::cmp::Ordering::Equal);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Unit;

impl fmt::Display for Unit {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("()")
    }
}

impl From<()> for Unit {
    #[inline]
    fn from((): ()) -> Self {
        Self
    }
}

impl From<Unit> for () {
    #[inline]
    fn from(_: Unit) -> Self {}
}
