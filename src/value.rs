// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Typed dynamic values.
//!
//! A [`Value`] pairs a structural [`Type`] with a representation and is
//! validated at construction: an object value's keys are exactly its type's
//! attribute names, sequence elements conform to the declared element
//! types, and so on. Every downstream equality and resolution rule assumes
//! those invariants hold, so there is no way to build a value that violates
//! them and no mutation API to break them afterwards.

use core::fmt;
use std::collections::BTreeMap;

use anyhow::{anyhow, Result};
use serde::ser::{SerializeMap, SerializeSeq, Serializer};
use serde::Serialize;

use crate::error::TypeError;
use crate::number::Number;
use crate::typing::Type;
use crate::Rc;

/// The underlying representation of a [`Value`].
///
/// `Seq` backs List, Set and Tuple values; `Mapping` backs Map and Object
/// values. `Null` and `Unknown` are valid for every type: `Null` means
/// explicitly absent, `Unknown` means not yet known.
#[derive(Debug, Clone)]
pub enum ValueKind {
    Null,
    Unknown,
    Bool(bool),
    Number(Number),
    String(Rc<str>),
    Seq(Rc<Vec<Value>>),
    Mapping(Rc<BTreeMap<Rc<str>, Value>>),
}

impl ValueKind {
    /// Short description of the representation, for error messages.
    fn describe(&self) -> &'static str {
        match self {
            ValueKind::Null => "null",
            ValueKind::Unknown => "an unknown marker",
            ValueKind::Bool(_) => "a boolean",
            ValueKind::Number(_) => "a number",
            ValueKind::String(_) => "a string",
            ValueKind::Seq(_) => "a sequence",
            ValueKind::Mapping(_) => "a mapping",
        }
    }
}

/// A value whose shape is described by a structural [`Type`].
///
/// Values are immutable once constructed. Equality is deep and structural;
/// numbers compare by mathematical value, so a value holding `1` equals one
/// holding `1.0`. Values of structurally different types are simply not
/// equal, never an error.
#[derive(Debug, Clone)]
pub struct Value {
    typ: Type,
    kind: ValueKind,
}

impl Value {
    /// Construct a value, validating that `kind` is shape-compatible with
    /// `typ`.
    pub fn new(typ: Type, kind: ValueKind) -> Result<Value, TypeError> {
        validate(&typ, &kind)?;
        Ok(Value { typ, kind })
    }

    /// A null value of the given type.
    pub fn null(typ: Type) -> Value {
        Value {
            typ,
            kind: ValueKind::Null,
        }
    }

    /// An unknown value of the given type.
    pub fn unknown(typ: Type) -> Value {
        Value {
            typ,
            kind: ValueKind::Unknown,
        }
    }

    pub fn bool(b: bool) -> Value {
        Value {
            typ: Type::Bool,
            kind: ValueKind::Bool(b),
        }
    }

    pub fn number(n: impl Into<Number>) -> Value {
        Value {
            typ: Type::Number,
            kind: ValueKind::Number(n.into()),
        }
    }

    pub fn string(s: impl Into<Rc<str>>) -> Value {
        Value {
            typ: Type::String,
            kind: ValueKind::String(s.into()),
        }
    }

    pub fn list(element_type: Type, elements: Vec<Value>) -> Result<Value, TypeError> {
        Value::new(
            Type::list(element_type),
            ValueKind::Seq(Rc::new(elements)),
        )
    }

    pub fn set(element_type: Type, elements: Vec<Value>) -> Result<Value, TypeError> {
        Value::new(Type::set(element_type), ValueKind::Seq(Rc::new(elements)))
    }

    pub fn map(
        element_type: Type,
        entries: BTreeMap<Rc<str>, Value>,
    ) -> Result<Value, TypeError> {
        Value::new(
            Type::map(element_type),
            ValueKind::Mapping(Rc::new(entries)),
        )
    }

    pub fn tuple(
        element_types: Vec<Type>,
        elements: Vec<Value>,
    ) -> Result<Value, TypeError> {
        Value::new(
            Type::tuple(element_types),
            ValueKind::Seq(Rc::new(elements)),
        )
    }

    pub fn object(
        attribute_types: BTreeMap<Rc<str>, Type>,
        attributes: BTreeMap<Rc<str>, Value>,
    ) -> Result<Value, TypeError> {
        Value::new(
            Type::Object {
                attribute_types: Rc::new(attribute_types),
            },
            ValueKind::Mapping(Rc::new(attributes)),
        )
    }

    /// The value's declared type.
    pub fn ty(&self) -> &Type {
        &self.typ
    }

    pub fn kind(&self) -> &ValueKind {
        &self.kind
    }

    pub fn is_null(&self) -> bool {
        matches!(self.kind, ValueKind::Null)
    }

    /// False if this value itself is the unknown marker.
    pub fn is_known(&self) -> bool {
        !matches!(self.kind, ValueKind::Unknown)
    }

    /// True if no unknown marker appears anywhere in the value tree.
    pub fn is_fully_known(&self) -> bool {
        match &self.kind {
            ValueKind::Unknown => false,
            ValueKind::Seq(elements) => elements.iter().all(Value::is_fully_known),
            ValueKind::Mapping(entries) => entries.values().all(Value::is_fully_known),
            _ => true,
        }
    }

    pub fn as_bool(&self) -> Result<bool> {
        match &self.kind {
            ValueKind::Bool(b) => Ok(*b),
            _ => Err(anyhow!("not a bool")),
        }
    }

    pub fn as_number(&self) -> Result<&Number> {
        match &self.kind {
            ValueKind::Number(n) => Ok(n),
            _ => Err(anyhow!("not a number")),
        }
    }

    pub fn as_str(&self) -> Result<&str> {
        match &self.kind {
            ValueKind::String(s) => Ok(s),
            _ => Err(anyhow!("not a string")),
        }
    }

    pub fn as_seq(&self) -> Result<&Vec<Value>> {
        match &self.kind {
            ValueKind::Seq(elements) => Ok(elements),
            _ => Err(anyhow!("not a sequence")),
        }
    }

    pub fn as_mapping(&self) -> Result<&BTreeMap<Rc<str>, Value>> {
        match &self.kind {
            ValueKind::Mapping(entries) => Ok(entries),
            _ => Err(anyhow!("not a mapping")),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        if self.typ != other.typ {
            return false;
        }
        match (&self.kind, &other.kind) {
            (ValueKind::Null, ValueKind::Null) => true,
            (ValueKind::Unknown, ValueKind::Unknown) => true,
            (ValueKind::Bool(a), ValueKind::Bool(b)) => a == b,
            (ValueKind::Number(a), ValueKind::Number(b)) => a == b,
            (ValueKind::String(a), ValueKind::String(b)) => a == b,
            (ValueKind::Seq(a), ValueKind::Seq(b)) => a == b,
            (ValueKind::Mapping(a), ValueKind::Mapping(b)) => a == b,
            _ => false,
        }
    }
}

fn mismatch(typ: &Type, kind: &ValueKind) -> TypeError {
    TypeError::Mismatch {
        expected: typ.to_string().into(),
        actual: kind.describe().into(),
    }
}

/// Shape-compatibility check behind [`Value::new`].
fn validate(typ: &Type, kind: &ValueKind) -> Result<(), TypeError> {
    match kind {
        // Null and unknown markers are valid for every type.
        ValueKind::Null | ValueKind::Unknown => Ok(()),
        ValueKind::Bool(_) if *typ == Type::Bool => Ok(()),
        ValueKind::Number(_) if *typ == Type::Number => Ok(()),
        ValueKind::String(_) if *typ == Type::String => Ok(()),
        ValueKind::Seq(elements) => match typ {
            Type::List { element_type } | Type::Set { element_type } => {
                for (index, element) in elements.iter().enumerate() {
                    if !element.typ.conforms_to(element_type) {
                        return Err(mismatch(element_type, &element.kind).in_element(index));
                    }
                }
                Ok(())
            }
            Type::Tuple { element_types } => {
                if element_types.len() != elements.len() {
                    return Err(TypeError::TupleLength {
                        expected: element_types.len(),
                        actual: elements.len(),
                    });
                }
                for (index, (element, expected)) in
                    elements.iter().zip(element_types.iter()).enumerate()
                {
                    if !element.typ.conforms_to(expected) {
                        return Err(mismatch(expected, &element.kind).in_element(index));
                    }
                }
                Ok(())
            }
            _ => Err(mismatch(typ, kind)),
        },
        ValueKind::Mapping(entries) => match typ {
            Type::Map { element_type } => {
                for (key, value) in entries.iter() {
                    if !value.typ.conforms_to(element_type) {
                        return Err(mismatch(element_type, &value.kind).in_attribute(key));
                    }
                }
                Ok(())
            }
            Type::Object { attribute_types } => {
                for name in entries.keys() {
                    if !attribute_types.contains_key(name) {
                        return Err(TypeError::UndefinedAttribute {
                            name: name.clone(),
                            typ: typ.to_string().into(),
                        });
                    }
                }
                for (name, expected) in attribute_types.iter() {
                    let Some(value) = entries.get(name) else {
                        return Err(TypeError::MissingAttribute {
                            name: name.clone(),
                            typ: typ.to_string().into(),
                        });
                    };
                    if !value.typ.conforms_to(expected) {
                        return Err(mismatch(expected, &value.kind).in_attribute(name));
                    }
                }
                Ok(())
            }
            _ => Err(mismatch(typ, kind)),
        },
        // A concrete representation under a still-dynamic type, or a
        // primitive under the wrong primitive type.
        _ => Err(mismatch(typ, kind)),
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match &self.kind {
            ValueKind::Null => serializer.serialize_none(),
            ValueKind::Unknown => serializer.serialize_str("<unknown>"),
            ValueKind::Bool(b) => serializer.serialize_bool(*b),
            ValueKind::Number(n) => n.serialize(serializer),
            ValueKind::String(s) => serializer.serialize_str(s),
            ValueKind::Seq(elements) => {
                let mut seq = serializer.serialize_seq(Some(elements.len()))?;
                for element in elements.iter() {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            ValueKind::Mapping(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries.iter() {
                    map.serialize_entry(key.as_ref(), value)?;
                }
                map.end()
            }
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match serde_json::to_string(self) {
            Ok(s) => f.write_str(&s),
            Err(_) => Err(fmt::Error),
        }
    }
}
