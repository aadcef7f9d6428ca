//! Destination for individually registered error messages.
//!
//! Model-state containers, form error bags and problem-detail builders all
//! want errors one `(key, message)` pair at a time. [`ErrorSink`] is the seam
//! they implement; [`ErrorAggregate::report_to`](super::ErrorAggregate::report_to)
//! drives it in stable order.

/// Receives `(key, message)` registrations.
///
/// # Examples
///
/// ```rust
/// use outcomes::error::{ErrorAggregate, ErrorSink};
///
/// #[derive(Default)]
/// struct ModelState {
///     lines: Vec<String>,
/// }
///
/// impl ErrorSink for ModelState {
///     fn add_error(&mut self, key: &str, message: &str) {
///         self.lines.push(format!("{key}: {message}"));
///     }
/// }
///
/// let mut state = ModelState::default();
/// ErrorAggregate::new("Email", "invalid").report_to(&mut state);
/// assert_eq!(state.lines, vec!["Email: invalid"]);
/// ```
pub trait ErrorSink {
    /// Registers a single message under `key`.
    fn add_error(&mut self, key: &str, message: &str);
}

impl ErrorSink for Vec<(String, String)> {
    fn add_error(&mut self, key: &str, message: &str) {
        self.push((key.to_owned(), message.to_owned()));
    }
}

impl<S: ErrorSink + ?Sized> ErrorSink for &mut S {
    fn add_error(&mut self, key: &str, message: &str) {
        (**self).add_error(key, message);
    }
}
