//! Property-based tests for the container laws.
//!
//! - **Map identity**: `x.map(|v| v) == x`
//! - **Map composition**: `x.map(f).map(g) == x.map(|v| g(f(v)))`
//! - **Chaining**: `and_then` with a lifting function is `map`
//! - **Flatten idempotence**: `x.flatten().flatten() == x.flatten()`
//! - **Transpose**: swapping twice returns the original value
//! - **Equality and hashing** agree with the variant and payload

use proptest::prelude::*;
use rusty_results::container::{Flatten, Optional, Outcome};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

fn optional_strategy() -> impl Strategy<Value = Optional<i32>> {
    any::<Option<i32>>().prop_map(Optional::from)
}

fn outcome_strategy() -> impl Strategy<Value = Outcome<i32, String>> {
    any::<Result<i32, String>>().prop_map(Outcome::from)
}

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

// =============================================================================
// Optional
// =============================================================================

proptest! {
    #[test]
    fn prop_optional_map_identity(value in optional_strategy()) {
        prop_assert_eq!(value.map(|x| x), value);
    }

    #[test]
    fn prop_optional_map_composition(value in optional_strategy()) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(2);

        let left = value.map(function1).map(function2);
        let right = value.map(|x| function2(function1(x)));

        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_optional_and_then_with_lift_is_map(value in optional_strategy()) {
        let function = |n: i32| n.wrapping_sub(3);
        prop_assert_eq!(value.and_then(|x| Optional::Present(function(x))), value.map(function));
    }

    #[test]
    fn prop_optional_and_then_associativity(value in optional_strategy()) {
        let half = |n: i32| if n % 2 == 0 { Optional::Present(n / 2) } else { Optional::Absent };
        let positive = |n: i32| if n > 0 { Optional::Present(n) } else { Optional::Absent };

        let left = value.and_then(half).and_then(positive);
        let right = value.and_then(|x| half(x).and_then(positive));

        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_optional_flatten_idempotent(value in optional_strategy(), depth in 0usize..3) {
        let nested = match depth {
            0 => Optional::Present(Optional::Present(value)),
            1 => Optional::Present(Optional::Absent),
            _ => Optional::Absent,
        };
        let once = nested.flatten();
        prop_assert_eq!(once.flatten(), once);
    }

    #[test]
    fn prop_optional_get_or_agrees_with_std(value in any::<Option<i32>>(), default in any::<i32>()) {
        prop_assert_eq!(Optional::from(value).get_or(default), value.unwrap_or(default));
    }

    #[test]
    fn prop_optional_xor_agrees_with_std(left in any::<Option<i32>>(), right in any::<Option<i32>>()) {
        let expected = Optional::from(left.xor(right));
        prop_assert_eq!(Optional::from(left).xor(Optional::from(right)), expected);
    }

    #[test]
    fn prop_optional_equal_values_hash_equally(value in optional_strategy()) {
        let as_std: Option<i32> = value.into();
        let rebuilt = Optional::from(as_std);
        prop_assert_eq!(rebuilt, value);
        prop_assert_eq!(hash_of(&rebuilt), hash_of(&value));
    }

    #[test]
    fn prop_optional_transpose_round_trip(value in any::<Option<Result<i32, String>>>()) {
        let optional: Optional<Outcome<i32, String>> = Optional::from(value.map(Outcome::from));
        let round_trip = optional.clone().to_result_transpose().to_optional_transpose();
        prop_assert_eq!(round_trip, optional);
    }
}

// =============================================================================
// Outcome
// =============================================================================

proptest! {
    #[test]
    fn prop_outcome_map_identity(value in outcome_strategy()) {
        prop_assert_eq!(value.clone().map(|x| x), value);
    }

    #[test]
    fn prop_outcome_map_composition(value in outcome_strategy()) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(2);

        let left = value.clone().map(function1).map(function2);
        let right = value.map(|x| function2(function1(x)));

        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_outcome_map_error_identity(value in outcome_strategy()) {
        prop_assert_eq!(value.clone().map_error(|e| e), value);
    }

    #[test]
    fn prop_outcome_and_then_with_lift_is_map(value in outcome_strategy()) {
        let function = |n: i32| n.wrapping_sub(3);
        prop_assert_eq!(
            value.clone().and_then(|x| Outcome::Success(function(x))),
            value.map(function)
        );
    }

    #[test]
    fn prop_outcome_or_else_with_failure_is_map_error(value in outcome_strategy()) {
        prop_assert_eq!(
            value.clone().or_else(|e| Outcome::<i32, usize>::Failure(e.len())),
            value.map_error(|e| e.len())
        );
    }

    #[test]
    fn prop_outcome_flatten_idempotent(value in outcome_strategy()) {
        let nested: Outcome<Outcome<i32, String>, String> = Outcome::Success(value);
        let once = nested.flatten();
        prop_assert_eq!(once.clone().flatten(), once);
    }

    #[test]
    fn prop_outcome_truthiness_matches_variant(value in outcome_strategy()) {
        prop_assert_eq!(value.is_truthy(), value.is_success());
        prop_assert_eq!(value.is_success(), !value.is_failure());
    }

    #[test]
    fn prop_outcome_std_round_trip(value in any::<Result<i32, String>>()) {
        let outcome = Outcome::from(value.clone());
        let back: Result<i32, String> = outcome.into();
        prop_assert_eq!(back, value);
    }

    #[test]
    fn prop_outcome_transpose_round_trip(value in any::<Result<Option<i32>, String>>()) {
        let outcome: Outcome<Optional<i32>, String> = Outcome::from(value.map(Optional::from));
        let round_trip = outcome.clone().to_optional_transpose().to_result_transpose();
        prop_assert_eq!(round_trip, outcome);
    }
}
