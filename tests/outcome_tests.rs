//! Integration tests for `Outcome`.

use rstest::rstest;
use rusty_results::container::{Flatten, Optional, Outcome};
use std::collections::HashSet;

// =============================================================================
// Inspection
// =============================================================================

#[rstest]
fn truthiness_depends_only_on_the_variant() {
    assert!(Outcome::<i32, i32>::Success(0).is_truthy());
    assert!(Outcome::<bool, i32>::Success(false).is_truthy());
    assert!(!Outcome::<i32, i32>::Failure(1).is_truthy());
    assert!(!Outcome::<i32, bool>::Failure(true).is_truthy());
}

#[rstest]
fn contains_checks_the_matching_channel() {
    let success: Outcome<i32, i32> = Outcome::Success(1);
    let failure: Outcome<i32, i32> = Outcome::Failure(1);

    assert!(success.contains(&1));
    assert!(!success.contains_error(&1));
    assert!(!failure.contains(&1));
    assert!(failure.contains_error(&1));
}

#[rstest]
fn success_and_failure_with_equal_payloads_differ() {
    assert_ne!(Outcome::<i32, i32>::Success(0), Outcome::Failure(0));
}

#[rstest]
fn hashing_distinguishes_variants() {
    let set: HashSet<Outcome<i32, i32>> =
        [Outcome::Success(0), Outcome::Failure(0)].into_iter().collect();
    assert_eq!(set.len(), 2);

    let set: HashSet<Outcome<i32, i32>> =
        [Outcome::Failure(0), Outcome::Failure(0)].into_iter().collect();
    assert_eq!(set.len(), 1);
}

#[rstest]
fn debug_names_the_variant() {
    assert_eq!(format!("{:?}", Outcome::<i32, &str>::Success(1)), "Success(1)");
    assert_eq!(format!("{:?}", Outcome::<i32, &str>::Failure("e")), "Failure(\"e\")");
}

// =============================================================================
// Extraction
// =============================================================================

#[rstest]
fn get_renders_the_error() {
    let error = Outcome::<i32, &str>::Failure("boom").get().unwrap_err();
    assert_eq!(error.operation, "Outcome::get");
    assert_eq!(error.to_string(), "Outcome::get: \"boom\"");
}

#[rstest]
fn get_error_is_the_mirror_of_get() {
    assert_eq!(Outcome::<i32, &str>::Failure("boom").get_error(), Ok("boom"));
    let error = Outcome::<i32, &str>::Success(7).get_error().unwrap_err();
    assert_eq!(error.detail.as_deref(), Some("7"));
}

#[rstest]
fn get_or_fail_and_expect_error_carry_messages() {
    let error = Outcome::<i32, i32>::Failure(0).get_or_fail("no value").unwrap_err();
    assert_eq!(error.detail.as_deref(), Some("no value"));

    assert_eq!(Outcome::<i32, i32>::Failure(3).expect_error("no error"), Ok(3));
    let error = Outcome::<i32, i32>::Success(3).expect_error("no error").unwrap_err();
    assert_eq!(error.to_string(), "Outcome::expect_error: no error");
}

#[rstest]
fn get_or_family() {
    assert_eq!(Outcome::<i32, i32>::Success(0).get_or(10), 0);
    assert_eq!(Outcome::<i32, i32>::Failure(0).get_or(10), 10);
    assert_eq!(Outcome::<i32, i32>::Failure(0).get_or_else(|| 10), 10);
}

// =============================================================================
// Combinators
// =============================================================================

#[rstest]
fn map_touches_only_the_success_channel() {
    assert_eq!(Outcome::<i32, i32>::Success(1).map(|x| x + 1), Outcome::Success(2));
    assert_eq!(Outcome::<i32, i32>::Failure(1).map(|x| x + 1), Outcome::Failure(1));
}

#[rstest]
fn map_error_touches_only_the_failure_channel() {
    assert_eq!(
        Outcome::<i32, i32>::Failure(1).map_error(|e| e.to_string()),
        Outcome::Failure("1".to_string())
    );
    assert_eq!(
        Outcome::<i32, i32>::Success(1).map_error(|e| e.to_string()),
        Outcome::Success(1)
    );
}

#[rstest]
fn map_or_else_receives_the_error() {
    let render = |outcome: Outcome<i32, i32>| outcome.map_or_else(|e| e * 100, |x| x + 1);
    assert_eq!(render(Outcome::Success(1)), 2);
    assert_eq!(render(Outcome::Failure(2)), 200);
    assert_eq!(Outcome::<i32, i32>::Failure(2).map_or(0, |x| x + 1), 0);
}

#[rstest]
fn and_then_matches_the_chaining_scenarios() {
    assert_eq!(
        Outcome::<i32, i32>::Success(0).and_then(|x| Outcome::Success(x + 1)),
        Outcome::Success(1)
    );
    assert_eq!(
        Outcome::<i32, i32>::Failure(0).and_then(|x| Outcome::Success(x + 1)),
        Outcome::Failure(0)
    );
}

#[rstest]
fn or_else_recovers_from_failure() {
    let retry = |e: i32| Outcome::<i32, i32>::Success(e + 10);
    assert_eq!(Outcome::Failure(0).or_else(retry), Outcome::Success(10));
    assert_eq!(Outcome::Success(0).or_else(retry), Outcome::Success(0));
}

#[rstest]
#[case(Outcome::Success(1), Outcome::Success(2), Outcome::Success(2), Outcome::Success(1))]
#[case(Outcome::Success(1), Outcome::Failure(20), Outcome::Failure(20), Outcome::Success(1))]
#[case(Outcome::Failure(10), Outcome::Success(2), Outcome::Failure(10), Outcome::Success(2))]
#[case(Outcome::Failure(10), Outcome::Failure(20), Outcome::Failure(10), Outcome::Failure(20))]
fn logical_and_or_truth_table(
    #[case] left: Outcome<i32, i32>,
    #[case] right: Outcome<i32, i32>,
    #[case] expected_and: Outcome<i32, i32>,
    #[case] expected_or: Outcome<i32, i32>,
) {
    assert_eq!(left.logical_and(right), expected_and);
    assert_eq!(left.logical_or(right), expected_or);
}

#[rstest]
fn iteration_skips_failures() {
    let outcomes: Vec<Outcome<i32, &str>> =
        vec![Outcome::Success(1), Outcome::Failure("x"), Outcome::Success(2)];
    let values: Vec<i32> = outcomes.into_iter().flatten().collect();
    assert_eq!(values, vec![1, 2]);

    assert_eq!(Outcome::<i32, &str>::Failure("x").to_sequence(), Vec::<i32>::new());
}

// =============================================================================
// Flattening and Transposition
// =============================================================================

#[rstest]
fn flatten_keeps_the_outermost_failure() {
    let nested: Outcome<Outcome<Outcome<i32, &str>, &str>, &str> =
        Outcome::Success(Outcome::Failure("middle"));
    assert_eq!(nested.flatten(), Outcome::Failure("middle"));

    let deep: Outcome<Outcome<Outcome<i32, &str>, &str>, &str> =
        Outcome::Success(Outcome::Success(Outcome::Success(1)));
    assert_eq!(deep.flatten(), Outcome::Success(1));
}

#[rstest]
fn flatten_is_idempotent() {
    let nested: Outcome<Outcome<i32, &str>, &str> = Outcome::Success(Outcome::Success(1));
    let once = nested.flatten();
    assert_eq!(once.flatten(), once);
}

#[rstest]
fn transpose_follows_the_variant_table() {
    let present: Outcome<Optional<i32>, &str> = Outcome::Success(Optional::Present(1));
    assert_eq!(present.to_optional_transpose(), Optional::Present(Outcome::Success(1)));

    let absent: Outcome<Optional<i32>, &str> = Outcome::Success(Optional::Absent);
    assert_eq!(absent.to_optional_transpose(), Optional::Absent);

    let failed: Outcome<Optional<i32>, &str> = Outcome::Failure("boom");
    assert_eq!(failed.to_optional_transpose(), Optional::Present(Outcome::Failure("boom")));
}

// =============================================================================
// Conversions
// =============================================================================

#[rstest]
fn optional_projections() {
    assert_eq!(Outcome::<i32, &str>::Success(1).to_optional_success(), Optional::Present(1));
    assert_eq!(Outcome::<i32, &str>::Success(1).to_optional_failure(), Optional::Absent);
    assert_eq!(Outcome::<i32, &str>::Failure("e").to_optional_failure(), Optional::Present("e"));
}

#[rstest]
fn converts_to_and_from_std_result() {
    let parsed: Outcome<i32, _> = "12".parse::<i32>().into();
    assert_eq!(parsed, Outcome::Success(12));

    let back: Result<i32, &str> = Outcome::Failure("bad").into();
    assert_eq!(back, Err("bad"));
}

#[rstest]
fn question_mark_interop_through_std_result() {
    use std::num::ParseIntError;

    fn double(raw: &str) -> Result<i32, ParseIntError> {
        let outcome: Outcome<i32, ParseIntError> = raw.parse::<i32>().into();
        let value = Result::<i32, ParseIntError>::from(outcome.map(|x| x * 2))?;
        Ok(value)
    }

    assert_eq!(double("21"), Ok(42));
    assert!(double("x").is_err());
}
