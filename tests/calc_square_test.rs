//! Validation scenarios for the public calc_square operation.
//!
//! Mirrors the bundled acceptance scenarios: numeric inputs produce the
//! self-power, non-numeric inputs fail with a type mismatch.

#![allow(clippy::unwrap_used)]

use calc_square::{calc_square, Error, Number, Value};

#[test]
fn correct_input_returns_self_power() {
    assert_eq!(calc_square(Value::from(4)).unwrap(), Number::Int(256));
    assert_eq!(calc_square(Value::from(2)).unwrap(), Number::Int(4));
    assert_eq!(calc_square(Value::from(2.0)).unwrap(), Number::Float(4.0));
}

#[test]
fn invalid_input_raises_type_mismatch() {
    let cases = [
        Value::from("5"),
        Value::Sequence(vec![Value::Int(5)]),
        Value::set([Value::Int(5)]),
    ];

    for input in cases {
        let result = calc_square(input.clone());
        assert_eq!(result, Err(Error::type_mismatch(input)));
    }
}

#[test]
fn rejection_reports_offending_value() {
    let err = calc_square(Value::from("5")).unwrap_err();
    assert_eq!(err.to_string(), "5 must be an integer or a float.");
    assert_eq!(err.value(), &Value::from("5"));
}
