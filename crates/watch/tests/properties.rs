//! Property-based tests for nebula-watch.

use nebula_watch::prelude::*;
use proptest::prelude::*;

fn scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        proptest::strategy::Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        (-1.0e6..1.0e6f64).prop_map(Value::from),
        ".{0,8}".prop_map(Value::from),
    ]
}

fn value() -> impl Strategy<Value = Value> {
    scalar().prop_recursive(2, 16, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::List),
            prop::collection::vec(inner, 0..4).prop_map(Value::Tuple),
        ]
    })
}

/// A handful of leaf validators, picked by index.
fn leaf(index: usize) -> Validator {
    match index % 6 {
        0 => instance_of(Kind::Int).boxed(),
        1 => instance_of(Kind::Str).boxed(),
        2 => greater_than(0).boxed(),
        3 => always_true().boxed(),
        4 => null().boxed(),
        _ => container(instance_of(Kind::Number)).boxed(),
    }
}

// ============================================================================
// IDEMPOTENCY: single-child And / Or behave like the child
// ============================================================================

proptest! {
    #[test]
    fn single_child_and_is_identity(v in value(), i in 0usize..6) {
        let and = And::new([leaf(i)]).unwrap();
        prop_assert_eq!(and.test(&v), leaf(i).test(&v));
    }

    #[test]
    fn single_child_or_is_identity(v in value(), i in 0usize..6) {
        let or = Or::new([leaf(i)]).unwrap();
        prop_assert_eq!(or.test(&v), leaf(i).test(&v));
    }

    #[test]
    fn test_is_repeatable(v in value(), i in 0usize..6) {
        let validator = leaf(i);
        prop_assert_eq!(validator.test(&v), validator.test(&v));
    }
}

// ============================================================================
// COMBINATOR LAWS
// ============================================================================

proptest! {
    #[test]
    fn double_negation(v in value(), i in 0usize..6) {
        prop_assert_eq!(negate(negate(leaf(i))).test(&v), leaf(i).test(&v));
    }

    #[test]
    fn and_holds_iff_both_hold(v in value(), a in 0usize..6, b in 0usize..6) {
        prop_assert_eq!((leaf(a) & leaf(b)).test(&v), leaf(a).test(&v) && leaf(b).test(&v));
    }

    #[test]
    fn or_holds_iff_either_holds(v in value(), a in 0usize..6, b in 0usize..6) {
        prop_assert_eq!((leaf(a) | leaf(b)).test(&v), leaf(a).test(&v) || leaf(b).test(&v));
    }

    #[test]
    fn xor_is_parity(v in value(), picks in prop::collection::vec(0usize..6, 1..6)) {
        let xor = Xor::new(picks.iter().map(|&i| leaf(i))).unwrap();
        let passing = picks.iter().filter(|&&i| leaf(i).test(&v)).count();
        prop_assert_eq!(xor.test(&v), passing % 2 == 1);
    }

    #[test]
    fn nullable_adds_exactly_null(v in value(), i in 0usize..6) {
        let expected = v.is_null() || leaf(i).test(&v);
        prop_assert_eq!(leaf(i).nullable().test(&v), expected);
    }
}

// ============================================================================
// STRUCTURE
// ============================================================================

proptest! {
    #[test]
    fn container_holds_iff_every_item_holds(items in prop::collection::vec(scalar(), 0..8), i in 0usize..6) {
        let expected = items.iter().all(|item| leaf(i).test(item));
        prop_assert_eq!(container(leaf(i)).test(&Value::List(items)), expected);
    }

    #[test]
    fn container_rejects_non_iterables(n in any::<i64>(), i in 0usize..6) {
        prop_assert!(!container(leaf(i)).test(&Value::from(n)));
        prop_assert!(!container(leaf(i)).test(&Value::Null));
    }

    #[test]
    fn mapping_checks_keys_and_values_independently(
        pairs in prop::collection::vec((any::<i64>(), scalar()), 0..6),
        k in 0usize..6,
        v in 0usize..6,
    ) {
        let map: Map = pairs.iter().cloned().collect();
        let expected = map.iter().all(|(key, value)| leaf(k).test(key) && leaf(v).test(value));
        prop_assert_eq!(mapping_of(leaf(k), leaf(v)).test(&Value::Map(map)), expected);
    }

    #[test]
    fn mapping_rejects_non_maps(items in prop::collection::vec(scalar(), 0..4)) {
        prop_assert!(!mapping_of(always_true(), always_true()).test(&Value::List(items)));
    }
}
