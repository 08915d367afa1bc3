// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#![cfg(test)]

use std::collections::BTreeMap;

use anyhow::Result;
use dynval::{Number, Type, TypeError, Value, ValueKind};

#[test]
fn primitive_construction() -> Result<()> {
    assert_eq!(Value::bool(true).as_bool()?, true);
    assert_eq!(Value::string("hello").as_str()?, "hello");
    assert_eq!(Value::number(42i64).as_number()?, &Number::from(42i64));

    assert_eq!(Value::bool(true).ty(), &Type::Bool);
    assert_eq!(Value::string("hello").ty(), &Type::String);
    assert_eq!(Value::number(42i64).ty(), &Type::Number);
    Ok(())
}

#[test]
fn primitive_mismatch() {
    assert!(Value::new(Type::Bool, ValueKind::String("true".into())).is_err());
    assert!(Value::new(Type::Number, ValueKind::Bool(false)).is_err());
    assert!(Value::new(Type::String, ValueKind::Number(Number::from(1i64))).is_err());
}

#[test]
fn dynamic_type_rejects_concrete_representations() {
    // A still-dynamic type can only hold the null or unknown markers.
    assert!(Value::new(Type::Dynamic, ValueKind::Bool(true)).is_err());
    assert!(Value::new(Type::Dynamic, ValueKind::Null).is_ok());
    assert!(Value::new(Type::Dynamic, ValueKind::Unknown).is_ok());
}

#[test]
fn list_element_types_are_enforced() -> Result<()> {
    let ok = Value::list(
        Type::String,
        vec![Value::string("hello"), Value::string("world")],
    )?;
    assert_eq!(ok.as_seq()?.len(), 2);

    let err = Value::list(Type::String, vec![Value::string("hello"), Value::bool(true)]);
    assert!(matches!(err, Err(TypeError::Element { index: 1, .. })));

    // A dynamic element type admits heterogeneous elements.
    let mixed = Value::list(Type::Dynamic, vec![Value::string("hello"), Value::bool(true)]);
    assert!(mixed.is_ok());
    Ok(())
}

#[test]
fn tuple_arity_and_element_types() -> Result<()> {
    let ok = Value::tuple(
        vec![Type::String, Type::Number],
        vec![Value::string("a"), Value::number(1i64)],
    )?;
    assert_eq!(ok.as_seq()?.len(), 2);

    let short = Value::tuple(vec![Type::String, Type::Number], vec![Value::string("a")]);
    assert!(matches!(
        short,
        Err(TypeError::TupleLength {
            expected: 2,
            actual: 1
        })
    ));

    let wrong = Value::tuple(
        vec![Type::String, Type::Number],
        vec![Value::number(1i64), Value::string("a")],
    );
    assert!(matches!(wrong, Err(TypeError::Element { index: 0, .. })));
    Ok(())
}

#[test]
fn object_keys_must_match_attribute_names() -> Result<()> {
    let types: BTreeMap<_, _> =
        BTreeMap::from([("foo".into(), Type::Bool), ("bar".into(), Type::Number)]);

    let ok = Value::object(
        types.clone(),
        BTreeMap::from([
            ("foo".into(), Value::bool(true)),
            ("bar".into(), Value::number(1234i64)),
        ]),
    )?;
    assert_eq!(ok.as_mapping()?.len(), 2);

    let missing = Value::object(
        types.clone(),
        BTreeMap::from([("foo".into(), Value::bool(true))]),
    );
    assert!(matches!(missing, Err(TypeError::MissingAttribute { .. })));

    let extra = Value::object(
        types.clone(),
        BTreeMap::from([
            ("foo".into(), Value::bool(true)),
            ("bar".into(), Value::number(1234i64)),
            ("baz".into(), Value::string("nope")),
        ]),
    );
    assert!(matches!(extra, Err(TypeError::UndefinedAttribute { .. })));

    let wrong_type = Value::object(
        types,
        BTreeMap::from([
            ("foo".into(), Value::string("true")),
            ("bar".into(), Value::number(1234i64)),
        ]),
    );
    assert!(matches!(wrong_type, Err(TypeError::Attribute { .. })));
    Ok(())
}

#[test]
fn map_value_types_are_enforced() -> Result<()> {
    let ok = Value::map(
        Type::Number,
        BTreeMap::from([
            ("a".into(), Value::number(1i64)),
            ("b".into(), Value::number(2i64)),
        ]),
    )?;
    assert_eq!(ok.as_mapping()?.len(), 2);

    let err = Value::map(
        Type::Number,
        BTreeMap::from([("a".into(), Value::bool(true))]),
    );
    assert!(matches!(err, Err(TypeError::Attribute { .. })));
    Ok(())
}

#[test]
fn null_and_unknown_markers() -> Result<()> {
    let null = Value::null(Type::list(Type::String));
    assert!(null.is_null());
    assert!(null.is_known());

    let unknown = Value::unknown(Type::Bool);
    assert!(!unknown.is_known());
    assert!(!unknown.is_null());

    // Markers are valid for aggregate types too.
    assert!(Value::new(Type::object([("a", Type::Bool)]), ValueKind::Null).is_ok());
    Ok(())
}

#[test]
fn fully_known_is_recursive() -> Result<()> {
    let known = Value::list(Type::String, vec![Value::string("a")])?;
    assert!(known.is_fully_known());

    let nested_unknown = Value::list(
        Type::String,
        vec![Value::string("a"), Value::unknown(Type::String)],
    )?;
    assert!(nested_unknown.is_known());
    assert!(!nested_unknown.is_fully_known());
    Ok(())
}

#[test]
fn numeric_equality_is_mathematical() -> Result<()> {
    assert_eq!(
        Value::number("1".parse::<Number>()?),
        Value::number("1.0".parse::<Number>()?)
    );
    assert_ne!(
        Value::number("1".parse::<Number>()?),
        Value::number("2".parse::<Number>()?)
    );
    Ok(())
}

#[test]
fn deep_structural_equality() -> Result<()> {
    let make = || -> Result<Value> {
        Ok(Value::object(
            BTreeMap::from([
                ("words".into(), Type::list(Type::String)),
                ("count".into(), Type::Number),
            ]),
            BTreeMap::from([
                (
                    "words".into(),
                    Value::list(Type::String, vec![Value::string("hello")])?,
                ),
                ("count".into(), Value::number(1.0)),
            ]),
        )?)
    };

    assert_eq!(make()?, make()?);

    // Same content under a structurally different type is not equal.
    let list = Value::list(Type::String, vec![Value::string("hello")])?;
    let dynamic_list = Value::list(Type::Dynamic, vec![Value::string("hello")])?;
    assert_ne!(list, dynamic_list);

    // Incompatible types are "not equal", never an error.
    assert_ne!(Value::string("1"), Value::number(1i64));
    assert_ne!(Value::bool(true), Value::string("true"));
    assert_ne!(Value::null(Type::Bool), Value::bool(true));
    assert_ne!(Value::unknown(Type::Bool), Value::null(Type::Bool));
    Ok(())
}

#[test]
fn display_renders_json() -> Result<()> {
    let object = Value::object(
        BTreeMap::from([("bar".into(), Type::Number), ("foo".into(), Type::Bool)]),
        BTreeMap::from([
            ("bar".into(), Value::number(1234i64)),
            ("foo".into(), Value::bool(true)),
        ]),
    )?;
    assert_eq!(object.to_string(), r#"{"bar":1234,"foo":true}"#);

    assert_eq!(Value::null(Type::Bool).to_string(), "null");
    assert_eq!(Value::unknown(Type::Bool).to_string(), r#""<unknown>""#);
    assert_eq!(
        Value::list(Type::String, vec![Value::string("a")])?.to_string(),
        r#"["a"]"#
    );
    Ok(())
}

#[test]
fn construction_error_names_the_location() {
    let err = Value::object(
        BTreeMap::from([("inner".into(), Type::list(Type::Number))]),
        BTreeMap::from([(
            "inner".into(),
            Value::list(Type::Dynamic, vec![Value::string("oops")]).unwrap(),
        )]),
    )
    .unwrap_err();

    // The message carries the offending attribute.
    assert!(err.to_string().contains("inner"));
}
