//! Unit tests for `ErrorAggregate` and its reporting sink.
//!
//! The aggregate is an ordered multimap: keys may repeat, groups keep their
//! insertion order, and concatenation never overwrites.

use outcomes::error::{ContractViolation, ErrorAggregate, ErrorGroup, ErrorSink};
use rstest::{fixture, rstest};

/// Collects registrations the way a UI error list would.
#[derive(Debug, Default)]
struct RecordingSink {
    registered: Vec<String>,
}

impl ErrorSink for RecordingSink {
    fn add_error(&mut self, key: &str, message: &str) {
        self.registered.push(format!("{key}={message}"));
    }
}

#[fixture]
fn form_errors() -> ErrorAggregate {
    ErrorAggregate::try_from_groups(vec![("K1", vec!["E1"]), ("K2", vec!["E2", "E3"])]).unwrap()
}

// =============================================================================
// Construction Contracts
// =============================================================================

#[rstest]
fn empty_group_list_is_rejected() {
    let groups: Vec<(&str, Vec<&str>)> = Vec::new();
    assert_eq!(
        ErrorAggregate::try_from_groups(groups),
        Err(ContractViolation::EmptyAggregate)
    );
}

#[rstest]
fn group_without_messages_is_rejected() {
    let result = ErrorAggregate::try_from_groups(vec![("K1", vec!["E1"]), ("K2", vec![])]);
    assert_eq!(
        result,
        Err(ContractViolation::EmptyGroup {
            key: "K2".to_string()
        })
    );
}

#[rstest]
fn empty_message_sequence_is_rejected() {
    let messages: Vec<String> = Vec::new();
    assert_eq!(
        ErrorAggregate::try_from_messages(messages),
        Err(ContractViolation::EmptyAggregate)
    );
}

#[rstest]
fn contract_violations_render_readable_messages() {
    assert_eq!(
        ContractViolation::EmptyGroup {
            key: "Age".to_string()
        }
        .to_string(),
        "error group `Age` requires at least one message"
    );
}

// =============================================================================
// Ordering and Concatenation
// =============================================================================

#[rstest]
fn concat_keeps_left_groups_first(form_errors: ErrorAggregate) {
    let combined = ErrorAggregate::new("K0", "E0").concat(form_errors);
    assert_eq!(combined.keys().collect::<Vec<_>>(), vec!["K0", "K1", "K2"]);
}

#[rstest]
fn duplicate_keys_are_preserved_not_merged() {
    let errors = ErrorAggregate::new("Name", "required").with_error("Name", "too short");
    assert_eq!(errors.group_count(), 2);
    assert_eq!(
        errors.messages_for("Name").collect::<Vec<_>>(),
        vec!["required", "too short"]
    );
}

#[rstest]
fn entries_flatten_in_stable_order(form_errors: ErrorAggregate) {
    assert_eq!(
        form_errors.entries().collect::<Vec<_>>(),
        vec![("K1", "E1"), ("K2", "E2"), ("K2", "E3")]
    );
}

#[rstest]
fn counts_track_groups_and_messages(form_errors: ErrorAggregate) {
    assert_eq!(form_errors.group_count(), 2);
    assert_eq!(form_errors.message_count(), 3);
}

// =============================================================================
// Reporting
// =============================================================================

#[rstest]
fn sink_receives_one_registration_per_message(form_errors: ErrorAggregate) {
    let mut sink = RecordingSink::default();
    form_errors.report_to(&mut sink);
    assert_eq!(sink.registered, vec!["K1=E1", "K2=E2", "K2=E3"]);
}

#[rstest]
fn sink_can_be_passed_as_trait_object(form_errors: ErrorAggregate) {
    let mut sink = RecordingSink::default();
    let dynamic: &mut dyn ErrorSink = &mut sink;
    form_errors.report_to(dynamic);
    assert_eq!(sink.registered.len(), 3);
}

#[rstest]
fn report_with_closure_matches_sink(form_errors: ErrorAggregate) {
    let mut pairs = Vec::new();
    form_errors.report_with(|key, message| pairs.push((key.to_string(), message.to_string())));

    let mut sink: Vec<(String, String)> = Vec::new();
    form_errors.report_to(&mut sink);

    assert_eq!(pairs, sink);
}

// =============================================================================
// Display and Iteration
// =============================================================================

#[rstest]
fn display_joins_pairs_and_omits_implicit_key() {
    let errors = ErrorAggregate::from_message("timeout").with_error("Id", "duplicate");
    assert_eq!(errors.to_string(), "timeout; Id: duplicate");
}

#[rstest]
fn borrowed_iteration_visits_groups(form_errors: ErrorAggregate) {
    let keys: Vec<&str> = (&form_errors).into_iter().map(ErrorGroup::key).collect();
    assert_eq!(keys, vec!["K1", "K2"]);
}

#[rstest]
fn aggregate_round_trips_through_group_vector(form_errors: ErrorAggregate) {
    let groups: Vec<ErrorGroup> = form_errors.clone().into();
    assert_eq!(ErrorAggregate::try_from(groups), Ok(form_errors));
}

#[rstest]
fn aggregate_is_a_standard_error() {
    fn boxed(error: ErrorAggregate) -> Box<dyn std::error::Error + Send + Sync> {
        Box::new(error)
    }
    assert_eq!(boxed(ErrorAggregate::new("K", "M")).to_string(), "K: M");
}
