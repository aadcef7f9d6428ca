//! Unit tests for `ResultOption<T, E>`.
//!
//! ResultOption has three arms:
//! - `Ok(T)`: a value was found
//! - `None`: nothing was found, without failure
//! - `Error(E)`: the lookup failed

use outcomes::control::{ResultOption, Unit};
use outcomes::error::ErrorAggregate;
use rstest::rstest;

type Lookup = ResultOption<i32, String>;

// =============================================================================
// Three-armed Extraction
// =============================================================================

#[rstest]
#[case(Lookup::Ok(2), "ok:2")]
#[case(Lookup::None, "none")]
#[case(Lookup::Error("db down".to_string()), "error:db down")]
fn fold_selects_handler_by_tag(#[case] value: Lookup, #[case] expected: &str) {
    let rendered = value.fold(
        |x| format!("ok:{x}"),
        || "none".to_string(),
        |error| format!("error:{error}"),
    );
    assert_eq!(rendered, expected);
}

#[rstest]
#[case(Lookup::Ok(1), true, false, false)]
#[case(Lookup::None, false, true, false)]
#[case(Lookup::Error(String::new()), false, false, true)]
fn exactly_one_tag_is_active(
    #[case] value: Lookup,
    #[case] ok: bool,
    #[case] none: bool,
    #[case] error: bool,
) {
    assert_eq!(value.is_ok(), ok);
    assert_eq!(value.is_none(), none);
    assert_eq!(value.is_error(), error);
}

// =============================================================================
// Combinators
// =============================================================================

#[rstest]
fn map_and_and_then_leave_none_and_error_untouched() {
    assert_eq!(Lookup::None.map(|x| x + 1), Lookup::None);
    assert_eq!(
        Lookup::Error("e".to_string()).and_then(|x| Lookup::Ok(x + 1)),
        Lookup::Error("e".to_string())
    );
}

#[rstest]
fn map_error_substitutes_error_type() {
    let failed = Lookup::Error("db down".to_string());
    let mapped: ResultOption<i32> = failed.map_error(ErrorAggregate::from);
    assert_eq!(mapped, ResultOption::Error(ErrorAggregate::from_message("db down")));
}

#[rstest]
fn and_then_can_turn_ok_into_none() {
    let found = Lookup::Ok(0).and_then(|x| if x > 0 { Lookup::Ok(x) } else { Lookup::None });
    assert!(found.is_none());
}

#[rstest]
fn flatten_collapses_inner_none() {
    let nested: ResultOption<Option<i32>, String> = ResultOption::Ok(Some(3));
    assert_eq!(nested.flatten(), Lookup::Ok(3));
}

// =============================================================================
// Conversions
// =============================================================================

#[rstest]
#[case(Lookup::Ok(5), Some(5))]
#[case(Lookup::None, None)]
#[case(Lookup::Error("lost".to_string()), None)]
fn discard_error_collapses_error_into_none(#[case] value: Lookup, #[case] expected: Option<i32>) {
    assert_eq!(value.discard_error(), expected);
}

#[rstest]
fn ok_or_else_materializes_none_with_supplied_error() {
    assert_eq!(
        Lookup::None.ok_or_else(|| "missing".to_string()),
        Err("missing".to_string())
    );
}

#[rstest]
fn ok_or_else_does_not_call_producer_for_ok_or_error() {
    let mut calls = 0;
    let mut producer = || {
        calls += 1;
        "missing".to_string()
    };
    assert_eq!(Lookup::Ok(1).ok_or_else(&mut producer), Ok(1));
    assert_eq!(
        Lookup::Error("db".to_string()).ok_or_else(&mut producer),
        Err("db".to_string())
    );
    assert_eq!(calls, 0);
}

#[rstest]
fn from_result_and_option() {
    let from_ok = Lookup::from(Ok::<i32, String>(1));
    let from_err = Lookup::from(Err::<i32, String>("e".to_string()));
    let from_none = Lookup::from(None::<i32>);
    assert_eq!(from_ok, Lookup::Ok(1));
    assert_eq!(from_err, Lookup::Error("e".to_string()));
    assert_eq!(from_none, Lookup::None);
}

#[rstest]
fn unit_payload_models_found_without_data() {
    let deleted: ResultOption<Unit> = ResultOption::Ok(Unit);
    assert_eq!(deleted.default_value(Unit), Unit);
}
