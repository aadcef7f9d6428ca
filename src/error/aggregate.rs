//! Ordered, keyed collection of error messages.
//!
//! An [`ErrorAggregate`] is an ordered multimap: a sequence of
//! [`ErrorGroup`]s, each pairing a key with one or more messages. Keys are not
//! unique. Concatenating two aggregates appends groups rather than merging
//! them, so that the order in which errors were produced survives every
//! combination.
//!
//! # Examples
//!
//! ```rust
//! use outcomes::error::ErrorAggregate;
//!
//! let errors = ErrorAggregate::new("Name", "required")
//!     .with_error("Age", "must be positive");
//!
//! let entries: Vec<(&str, &str)> = errors.entries().collect();
//! assert_eq!(entries, vec![("Name", "required"), ("Age", "must be positive")]);
//! ```

use std::fmt;

use smallvec::{SmallVec, smallvec};

use super::{ContractViolation, ErrorSink};

type Messages = SmallVec<[String; 1]>;

// =============================================================================
// ErrorGroup
// =============================================================================

/// A key with its non-empty, ordered list of messages.
///
/// # Examples
///
/// ```rust
/// use outcomes::error::ErrorGroup;
///
/// let group = ErrorGroup::try_new("Name", ["required", "too long"]).unwrap();
/// assert_eq!(group.key(), "Name");
/// assert_eq!(group.messages(), &["required", "too long"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "GroupRepresentation", into = "GroupRepresentation")
)]
pub struct ErrorGroup {
    key: String,
    messages: Messages,
}

impl ErrorGroup {
    /// Creates a group holding a single message.
    #[must_use]
    pub fn new(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            messages: smallvec![message.into()],
        }
    }

    /// Creates a group from a sequence of messages.
    ///
    /// # Errors
    ///
    /// Returns [`ContractViolation::EmptyGroup`] if `messages` yields nothing.
    pub fn try_new<K, I, M>(key: K, messages: I) -> Result<Self, ContractViolation>
    where
        K: Into<String>,
        I: IntoIterator<Item = M>,
        M: Into<String>,
    {
        let key = key.into();
        let messages: Messages = messages.into_iter().map(Into::into).collect();
        if messages.is_empty() {
            return Err(ContractViolation::EmptyGroup { key });
        }
        Ok(Self { key, messages })
    }

    /// Returns the key this group is registered under.
    #[inline]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the messages in insertion order.
    #[inline]
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Returns the number of messages. Always at least one.
    #[inline]
    pub fn message_count(&self) -> usize {
        self.messages.len()
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct GroupRepresentation {
    key: String,
    messages: Vec<String>,
}

#[cfg(feature = "serde")]
impl From<ErrorGroup> for GroupRepresentation {
    fn from(group: ErrorGroup) -> Self {
        Self {
            key: group.key,
            messages: group.messages.into_vec(),
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<GroupRepresentation> for ErrorGroup {
    type Error = ContractViolation;

    fn try_from(representation: GroupRepresentation) -> Result<Self, Self::Error> {
        Self::try_new(representation.key, representation.messages)
    }
}

// =============================================================================
// ErrorAggregate
// =============================================================================

/// A non-empty, ordered sequence of keyed error groups.
///
/// This is the default error payload of [`crate::Result`]. Every constructor
/// either takes at least one message by signature or validates its input and
/// reports a [`ContractViolation`], so an `ErrorAggregate` value always
/// carries at least one message.
///
/// Iteration order is stable: groups in insertion order, then messages in
/// insertion order within each group.
///
/// # Examples
///
/// ```rust
/// use outcomes::error::ErrorAggregate;
///
/// let left = ErrorAggregate::new("Name", "required");
/// let right = ErrorAggregate::new("Name", "too long");
/// let merged = left.concat(right);
///
/// // Duplicate keys are kept as separate groups.
/// assert_eq!(merged.group_count(), 2);
/// assert_eq!(
///     merged.messages_for("Name").collect::<Vec<_>>(),
///     vec!["required", "too long"]
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<ErrorGroup>", into = "Vec<ErrorGroup>")
)]
pub struct ErrorAggregate {
    groups: Vec<ErrorGroup>,
}

impl ErrorAggregate {
    /// Key used for messages that are not attached to a specific field.
    pub const IMPLICIT_KEY: &'static str = "";

    /// Creates an aggregate holding a single `(key, message)` pair.
    #[must_use]
    pub fn new(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            groups: vec![ErrorGroup::new(key, message)],
        }
    }

    /// Creates an aggregate holding a single message under
    /// [`IMPLICIT_KEY`](Self::IMPLICIT_KEY).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::error::ErrorAggregate;
    ///
    /// let errors = ErrorAggregate::from_message("connection refused");
    /// assert_eq!(errors.to_string(), "connection refused");
    /// ```
    #[must_use]
    pub fn from_message(message: impl Into<String>) -> Self {
        Self::new(Self::IMPLICIT_KEY, message)
    }

    /// Creates an aggregate holding every message under
    /// [`IMPLICIT_KEY`](Self::IMPLICIT_KEY), as one group.
    ///
    /// # Errors
    ///
    /// Returns [`ContractViolation::EmptyAggregate`] if `messages` yields
    /// nothing.
    pub fn try_from_messages<I, M>(messages: I) -> Result<Self, ContractViolation>
    where
        I: IntoIterator<Item = M>,
        M: Into<String>,
    {
        ErrorGroup::try_new(Self::IMPLICIT_KEY, messages)
            .map(Self::from)
            .map_err(|_| ContractViolation::EmptyAggregate)
    }

    /// Creates an aggregate from a mapping of key to messages.
    ///
    /// Groups keep the iteration order of `groups`; pass an ordered source
    /// (a `Vec` of pairs or a `BTreeMap`) when the order matters.
    ///
    /// # Errors
    ///
    /// Returns [`ContractViolation::EmptyAggregate`] if `groups` yields no
    /// entries, or [`ContractViolation::EmptyGroup`] for the first entry
    /// whose message list is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::error::ErrorAggregate;
    ///
    /// let errors = ErrorAggregate::try_from_groups(vec![
    ///     ("K1", vec!["E1"]),
    ///     ("K2", vec!["E2", "E3"]),
    /// ])
    /// .unwrap();
    /// assert_eq!(errors.message_count(), 3);
    /// ```
    pub fn try_from_groups<I, K, G, M>(groups: I) -> Result<Self, ContractViolation>
    where
        I: IntoIterator<Item = (K, G)>,
        K: Into<String>,
        G: IntoIterator<Item = M>,
        M: Into<String>,
    {
        let groups = groups
            .into_iter()
            .map(|(key, messages)| ErrorGroup::try_new(key, messages))
            .collect::<Result<Vec<_>, _>>()?;
        Self::try_from(groups)
    }

    /// Appends a `(key, message)` pair as a new group.
    #[must_use]
    pub fn with_error(mut self, key: impl Into<String>, message: impl Into<String>) -> Self {
        self.groups.push(ErrorGroup::new(key, message));
        self
    }

    /// Concatenates two aggregates, keeping `self`'s groups first.
    #[must_use]
    pub fn concat(mut self, mut other: Self) -> Self {
        self.groups.append(&mut other.groups);
        self
    }

    /// Returns an iterator over the groups.
    pub fn iter(&self) -> std::slice::Iter<'_, ErrorGroup> {
        self.groups.iter()
    }

    /// Returns the groups as a slice.
    #[inline]
    pub fn groups(&self) -> &[ErrorGroup] {
        &self.groups
    }

    /// Returns every `(key, message)` pair, flattened in stable order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.groups.iter().flat_map(|group| {
            group
                .messages
                .iter()
                .map(move |message| (group.key.as_str(), message.as_str()))
        })
    }

    /// Returns the key of every group, duplicates included.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(ErrorGroup::key)
    }

    /// Returns the messages of every group registered under `key`.
    pub fn messages_for<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a str> {
        self.groups
            .iter()
            .filter(move |group| group.key == key)
            .flat_map(|group| group.messages.iter().map(String::as_str))
    }

    /// Returns the number of groups. Always at least one.
    #[inline]
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Returns the total number of messages across all groups.
    pub fn message_count(&self) -> usize {
        self.groups.iter().map(ErrorGroup::message_count).sum()
    }

    /// Consumes the aggregate, returning its groups.
    pub fn into_groups(self) -> Vec<ErrorGroup> {
        self.groups
    }

    /// Registers every `(key, message)` pair with `sink`, one call per pair.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::error::ErrorAggregate;
    ///
    /// let errors = ErrorAggregate::new("K1", "E1").with_error("K2", "E2");
    /// let mut registered: Vec<(String, String)> = Vec::new();
    /// errors.report_to(&mut registered);
    /// assert_eq!(registered.len(), 2);
    /// ```
    pub fn report_to<S>(&self, sink: &mut S)
    where
        S: ErrorSink + ?Sized,
    {
        tracing::trace!(
            groups = self.groups.len(),
            messages = self.message_count(),
            "reporting error aggregate"
        );
        for (key, message) in self.entries() {
            sink.add_error(key, message);
        }
    }

    /// Calls `register` once per `(key, message)` pair, in stable order.
    pub fn report_with<F>(&self, mut register: F)
    where
        F: FnMut(&str, &str),
    {
        for (key, message) in self.entries() {
            register(key, message);
        }
    }
}

impl fmt::Display for ErrorAggregate {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, (key, message)) in self.entries().enumerate() {
            if index > 0 {
                formatter.write_str("; ")?;
            }
            if key.is_empty() {
                write!(formatter, "{message}")?;
            } else {
                write!(formatter, "{key}: {message}")?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for ErrorAggregate {}

// =============================================================================
// Conversions
// =============================================================================

impl From<ErrorGroup> for ErrorAggregate {
    fn from(group: ErrorGroup) -> Self {
        Self {
            groups: vec![group],
        }
    }
}

impl From<&str> for ErrorAggregate {
    fn from(message: &str) -> Self {
        Self::from_message(message)
    }
}

impl From<String> for ErrorAggregate {
    fn from(message: String) -> Self {
        Self::from_message(message)
    }
}

impl<K, M> From<(K, M)> for ErrorAggregate
where
    K: Into<String>,
    M: Into<String>,
{
    fn from((key, message): (K, M)) -> Self {
        Self::new(key, message)
    }
}

impl TryFrom<Vec<ErrorGroup>> for ErrorAggregate {
    type Error = ContractViolation;

    fn try_from(groups: Vec<ErrorGroup>) -> Result<Self, Self::Error> {
        if groups.is_empty() {
            return Err(ContractViolation::EmptyAggregate);
        }
        Ok(Self { groups })
    }
}

impl From<ErrorAggregate> for Vec<ErrorGroup> {
    fn from(aggregate: ErrorAggregate) -> Self {
        aggregate.groups
    }
}

impl IntoIterator for ErrorAggregate {
    type Item = ErrorGroup;
    type IntoIter = std::vec::IntoIter<ErrorGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

impl<'a> IntoIterator for &'a ErrorAggregate {
    type Item = &'a ErrorGroup;
    type IntoIter = std::slice::Iter<'a, ErrorGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}
