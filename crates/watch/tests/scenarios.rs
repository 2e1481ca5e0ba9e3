//! End-to-end scenarios for nebula-watch.
//!
//! These tests never touch the global toggle; see `toggle.rs` for those.

use nebula_watch::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

fn positive() -> Predicate {
    Predicate::new("positive", |value: &Value| value > &Value::from(0))
}

// ============================================================================
// VALIDATOR TREES
// ============================================================================

#[test]
fn instance_of_int() {
    let validator = instance_of(Kind::Int);
    assert!(validator.test(&Value::from(5)));
    assert!(!validator.test(&Value::from("5")));
}

#[test]
fn positive_integers() {
    let validator = And::new([instance_of(Kind::Int).boxed(), greater_than(0).boxed()]).unwrap();
    assert!(!validator.test(&Value::from(-3)));
    assert!(validator.test(&Value::from(3)));
}

#[test]
fn container_of_ints() {
    let validator = container(instance_of(Kind::Int));
    assert!(!validator.test(&Value::list([Value::from(1), Value::from(2), Value::from("3")])));
    assert!(validator.test(&Value::list([1, 2, 3])));
}

#[test]
fn mapping_from_shorthand() {
    let validator = instance_of(Kind::Int) >> instance_of(Kind::Bool);
    assert!(validator.test(&Value::map([(1, true), (2, false)])));
    assert!(!validator.test(&Value::map([(1, 2)])));
}

#[rstest]
#[case::predicate(positive().boxed(), Value::from(1), true)]
#[case::predicate_negative(positive().boxed(), Value::from(-1), false)]
#[case::negation(negate(positive()).boxed(), Value::from(1), false)]
#[case::negation_negative(negate(positive()).boxed(), Value::from(-1), true)]
#[case::double_negation(negate(negate(positive())).boxed(), Value::from(1), true)]
#[case::double_negation_negative(negate(negate(positive())).boxed(), Value::from(-1), false)]
fn predicate_and_negation(#[case] validator: Validator, #[case] value: Value, #[case] expected: bool) {
    assert_eq!(validator.test(&value), expected);
}

#[rstest]
#[case(Value::from(1), true)]
#[case(Value::from(1.0), false)]
#[case(Value::from("hello"), true)]
fn ints_or_strings(#[case] value: Value, #[case] expected: bool) {
    let validator = AnyOf::new([text().boxed(), integer().boxed()]).unwrap();
    assert_eq!(validator.test(&value), expected);
}

#[rstest]
#[case(Value::from("kayak"), true)]
#[case(Value::from("anna"), true)]
#[case(Value::from(""), false)]
#[case(Value::from("hello world"), false)]
#[case(Value::list([1, 0, 1]), false)]
#[case(Value::from(10), false)]
fn non_empty_palindromes(#[case] value: Value, #[case] expected: bool) {
    let palindrome = Predicate::new("palindrome", |value: &Value| {
        value
            .as_str()
            .is_some_and(|s| s.chars().eq(s.chars().rev()))
    });
    let non_empty = Predicate::new("non_empty", |value: &Value| value.len().is_some_and(|n| n > 0));
    let validator = all_of![text(), non_empty, palindrome];
    assert_eq!(validator.test(&value), expected);
}

#[rstest]
#[case(Value::tuple([1, 2, 3]), true)]
#[case(Value::map([(1, "hello")]), true)]
#[case(Value::stream((0..10).map(Value::from)), false)]
#[case(Value::stream((1..10).map(Value::from)), true)]
fn iterable_container(#[case] value: Value, #[case] expected: bool) {
    let validator = container(positive()).with_kind(Kind::Iterable).unwrap();
    assert_eq!(validator.test(&value), expected);
}

#[rstest]
#[case(Value::list([Value::tuple([1, 2, 3])]), true)]
#[case(Value::list([Value::tuple([1, 2, 3]), Value::tuple([4, 5, 6])]), true)]
#[case(Value::list([Value::tuple([1, 2, 3]), Value::tuple([Value::from(4), Value::from(5), Value::from("hello")])]), false)]
#[case(Value::list([Value::tuple([1, 2, 3]), Value::list([4, 5, 6])]), false)]
#[case(Value::list([1, 2, 3, 4]), false)]
fn list_of_int_tuples(#[case] value: Value, #[case] expected: bool) {
    let tuples = container(instance_of(Kind::Int)).with_kind(Kind::Tuple).unwrap();
    let validator = container(tuples).with_kind(Kind::List).unwrap();
    assert_eq!(validator.test(&value), expected);
}

#[test]
fn stream_is_consumed_up_to_first_failure() {
    let value = Value::stream([1, 2, -3, 4, 5].map(Value::from));
    assert!(!container(positive()).test(&value));

    let Value::Stream(stream) = &value else {
        unreachable!()
    };
    assert_eq!(stream.drain(), vec![Value::from(4), Value::from(5)]);
}

// ============================================================================
// BUILT-INS
// ============================================================================

#[test]
fn builtin_checks() {
    assert!(instance_of(Kind::Str).test(&Value::from("Hello")));
    assert!(!instance_of(Kind::Str).test(&Value::from(10)));
    assert!(InstanceOf::from_value(&Value::from(10)).is_err());

    assert!(SubclassOf::new(Kind::Any).test(&Value::Type(Kind::Int)));
    assert!(!SubclassOf::new(Kind::Any).test(&Value::from(10)));
    assert!(SubclassOf::from_value(&Value::from(10)).is_err());

    assert!(HasAttr::new("add").unwrap().test(&Value::from(10)));
    assert!(!HasAttr::new("some").unwrap().test(&Value::from(10)));
    assert!(HasAttr::new("").is_err());

    assert!(equals_to(10).test(&Value::from(10)));
    assert!(!equals_to(10).test(&Value::from(11)));
    assert!(!negate(equals_to(10)).test(&Value::from(10)));
    assert!(negate(equals_to(10)).test(&Value::from("hello")));

    assert!(always_true().test(&Value::from(10)));
    assert!(!always_false().test(&Value::from(10)));
}

#[test]
fn operators_and_builders_build_the_same_tree() {
    let built = or_of([
        and_of([instance_of(Kind::Int).boxed(), greater_than(0).boxed()]).unwrap().boxed(),
        negate(text()).boxed(),
    ])
    .unwrap();
    let sugared = (instance_of(Kind::Int) & greater_than(0)) | !text();
    assert_eq!(format!("{built:?}"), format!("{sugared:?}"));
    assert_eq!(built.to_string(), "((instance_of(int) & greater_than(0)) | !text)");
}

#[test]
fn validate_reports_the_failing_tree() {
    let error = (instance_of(Kind::Int) & greater_than(0))
        .validate(&Value::from(-3))
        .unwrap_err();
    insta::assert_snapshot!(error, @r#"and: -3 does not satisfy (instance_of(int) & greater_than(0)) (params: [validator=(instance_of(int) & greater_than(0)), actual=-3])"#);
}

// ============================================================================
// FIELDS
// ============================================================================

#[test]
fn bound_field_rejects_and_keeps_value() {
    let host = HostType::builder("Foo").field("foo", instance_of(Kind::Int)).build();
    let mut object = host.instantiate();

    object.set("foo", 10).unwrap();
    assert_eq!(object.get("foo").unwrap(), &Value::from(10));

    let error = object.set("foo", "x").unwrap_err();
    assert_eq!(error.field, "foo");
    assert_eq!(error.value, Value::from("x"));
    assert_eq!(object.get("foo").unwrap(), &Value::from(10));
    insta::assert_snapshot!(error, @r#"cannot set 'foo' of 'Foo' to "x": value does not satisfy instance_of(int)"#);
}

#[test]
fn unset_field_read_fails() {
    let host = HostType::builder("SomeClass").field("foo", always_true()).build();
    let error = host.instantiate().get("foo").unwrap_err();
    insta::assert_snapshot!(error, @"object of type 'SomeClass' has no attribute 'foo'");
}

#[rstest]
#[case::interceptor_first(true)]
#[case::interceptor_on_parent(false)]
fn interceptors_fire_before_rejection(#[case] on_same_type: bool) {
    let mark = |attrs: &mut Attributes, _: &str, _: &Value| {
        attrs.insert("checkpoint", true);
    };
    let host = if on_same_type {
        HostType::builder("Mixed").interceptor(mark).field("foo", always_false()).build()
    } else {
        let base = HostType::builder("Mixin").interceptor(mark).build();
        base.subtype("Mixed").field("foo", always_false()).build()
    };

    let mut object = host.instantiate();
    assert!(object.set("foo", "hello").is_err());
    assert_eq!(object.get("checkpoint").unwrap(), &Value::from(true));
    assert!(!object.is_set("foo"));
}

#[test]
fn rejection_handler_replaces_the_default_complaint() {
    let host = HostType::builder("Counter")
        .field("n", instance_of(Kind::Int))
        .on_rejection(|error: ValidationRejectedError| {
            if error.value.is_null() { Ok(()) } else { Err(error) }
        })
        .build();

    let mut counter = host.instantiate();
    counter.set("n", 1).unwrap();
    counter.set("n", Value::Null).unwrap();
    assert_eq!(counter.get("n").unwrap(), &Value::from(1));
    assert!(counter.set("n", "two").is_err());
}

#[test]
fn sibling_subtypes_do_not_share_bindings() {
    let base = HostType::builder("Base").field("n", instance_of(Kind::Int)).build();
    let strict = base.subtype("Strict").build();
    let loose = base.subtype("Loose").build();
    strict.bind("n", instance_of(Kind::Int) & greater_than(0));

    let mut a = strict.instantiate();
    let mut b = loose.instantiate();
    assert!(a.set("n", 0).is_err());
    assert!(b.set("n", 0).is_ok());
}

#[test]
fn factory_specs_build_fresh_validators_per_binding() {
    let spec = ValidatorSpec::factory(|| SubclassOf::new(Kind::Number));
    let first = FieldBinding::new("a", spec.clone());
    let second = FieldBinding::new("b", spec);

    assert!(first.accepts(&Value::Type(Kind::Int)));
    let last = |binding: &FieldBinding| {
        binding
            .validator()
            .downcast_ref::<SubclassOf>()
            .and_then(SubclassOf::last_checked)
    };
    assert_eq!(last(&first), Some(Kind::Int));
    assert_eq!(last(&second), None);
}

#[test]
fn watched_cell() {
    let mut port: Watched<i64> = Watched::new("port", instance_of(Kind::Int) & greater_than(0));
    assert!(port.get().is_err());
    port.set(8080).unwrap();
    assert!(port.set(-1).is_err());
    assert_eq!(port.get().unwrap(), &8080);
}

#[test]
fn json_payloads_validate() {
    let order = instance_of(Kind::Str)
        >> (container(instance_of(Kind::Int) & greater_than(0)) | instance_of(Kind::Str));

    assert!(order.test(&Value::from(serde_json::json!({ "id": "a1", "items": [1, 2] }))));
    assert!(!order.test(&Value::from(serde_json::json!({ "id": "a1", "items": [1, -2] }))));
}

#[test]
fn errors_aggregate_into_watch_error() {
    fn run() -> Result<(), WatchError> {
        let host = HostType::builder("T").field("x", InstanceOf::any_of(Vec::new())?).build();
        host.instantiate().set("x", 1)?;
        Ok(())
    }
    assert!(matches!(run(), Err(WatchError::Configuration(_))));
}
