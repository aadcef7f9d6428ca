//! Property-based tests for the mapping laws of every container.
//!
//! ## Laws
//!
//! 1. **Identity**: `c.map(|x| x) == c`
//! 2. **Composition**: `c.map(f).map(g) == c.map(|x| g(f(x)))`
//! 3. **Absence and failure pass through**: mapping never turns `None` or
//!    an error into a value

use outcomes::control::{OptionExt, ResultOption};
use proptest::prelude::*;
use rstest::rstest;

fn add_one(x: i32) -> i32 {
    x.wrapping_add(1)
}

fn triple(x: i32) -> i32 {
    x.wrapping_mul(3)
}

fn result_option_strategy() -> impl Strategy<Value = ResultOption<i32, String>> {
    prop_oneof![
        any::<i32>().prop_map(ResultOption::Ok),
        Just(ResultOption::None),
        "[a-z]{1,8}".prop_map(ResultOption::Error),
    ]
}

proptest! {
    // =========================================================================
    // Option
    // =========================================================================

    #[test]
    fn prop_option_identity(value in any::<Option<i32>>()) {
        prop_assert_eq!(value.map(|x| x), value);
    }

    #[test]
    fn prop_option_composition(value in any::<Option<i32>>()) {
        prop_assert_eq!(value.map(add_one).map(triple), value.map(|x| triple(add_one(x))));
    }

    #[test]
    fn prop_option_fold_matches_tag(value in any::<Option<i32>>()) {
        let folded = value.fold(i64::from, || i64::MIN);
        let expected = match value {
            Some(x) => i64::from(x),
            None => i64::MIN,
        };
        prop_assert_eq!(folded, expected);
    }

    // =========================================================================
    // Result
    // =========================================================================

    #[test]
    fn prop_result_identity(value in any::<Result<i32, String>>()) {
        prop_assert_eq!(value.clone().map(|x| x), value);
    }

    #[test]
    fn prop_result_composition(value in any::<Result<i32, String>>()) {
        prop_assert_eq!(
            value.clone().map(add_one).map(triple),
            value.map(|x| triple(add_one(x)))
        );
    }

    #[test]
    fn prop_result_error_passes_through_map(error in "[a-z]{1,8}") {
        let failed: Result<i32, String> = Err(error.clone());
        prop_assert_eq!(failed.map(add_one), Err(error));
    }

    // =========================================================================
    // ResultOption
    // =========================================================================

    #[test]
    fn prop_result_option_identity(value in result_option_strategy()) {
        prop_assert_eq!(value.clone().map(|x| x), value);
    }

    #[test]
    fn prop_result_option_composition(value in result_option_strategy()) {
        prop_assert_eq!(
            value.clone().map(add_one).map(triple),
            value.map(|x| triple(add_one(x)))
        );
    }

    #[test]
    fn prop_result_option_map_preserves_tag(value in result_option_strategy()) {
        let mapped = value.clone().map(add_one);
        prop_assert_eq!(mapped.is_ok(), value.is_ok());
        prop_assert_eq!(mapped.is_none(), value.is_none());
        prop_assert_eq!(mapped.is_error(), value.is_error());
    }

    #[test]
    fn prop_result_option_and_then_left_identity(x in any::<i32>()) {
        let lookup = |value: i32| {
            if value % 2 == 0 {
                ResultOption::Ok(value)
            } else {
                ResultOption::<i32, String>::None
            }
        };
        prop_assert_eq!(ResultOption::Ok(x).and_then(lookup), lookup(x));
    }

    #[test]
    fn prop_result_option_and_then_right_identity(value in result_option_strategy()) {
        prop_assert_eq!(value.clone().and_then(ResultOption::Ok), value);
    }
}

#[rstest]
fn option_identity_on_none() {
    let none: Option<i32> = None;
    assert_eq!(none.map(|x| x), None);
}
