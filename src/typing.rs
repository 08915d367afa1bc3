// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Structural type descriptors for dynamic values.
//!
//! A [`Type`] describes the shape of a [`Value`](crate::Value) without
//! pinning down a Rust type. Types are immutable and compared structurally,
//! never by identity.

use core::fmt;
use std::collections::BTreeMap;

use crate::Rc;

/// The closed set of shapes a dynamic value can take.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Type {
    Bool,
    Number,
    String,
    /// Ordered sequence of elements that all share one type.
    List { element_type: Rc<Type> },
    /// Unordered collection of distinct elements sharing one type.
    Set { element_type: Rc<Type> },
    /// String-keyed mapping whose values all share one type.
    Map { element_type: Rc<Type> },
    /// Fixed set of named attributes, each with its own type.
    Object {
        attribute_types: Rc<BTreeMap<Rc<str>, Type>>,
    },
    /// Fixed-length sequence with one type per position.
    Tuple { element_types: Rc<Vec<Type>> },
    /// Type not yet known; resolved at the value level.
    Dynamic,
}

impl Type {
    pub fn list(element_type: Type) -> Type {
        Type::List {
            element_type: Rc::new(element_type),
        }
    }

    pub fn set(element_type: Type) -> Type {
        Type::Set {
            element_type: Rc::new(element_type),
        }
    }

    pub fn map(element_type: Type) -> Type {
        Type::Map {
            element_type: Rc::new(element_type),
        }
    }

    pub fn object<N: Into<Rc<str>>>(attribute_types: impl IntoIterator<Item = (N, Type)>) -> Type {
        Type::Object {
            attribute_types: Rc::new(
                attribute_types
                    .into_iter()
                    .map(|(name, typ)| (name.into(), typ))
                    .collect(),
            ),
        }
    }

    pub fn tuple(element_types: impl IntoIterator<Item = Type>) -> Type {
        Type::Tuple {
            element_types: Rc::new(element_types.into_iter().collect()),
        }
    }

    pub fn is_dynamic(&self) -> bool {
        matches!(self, Type::Dynamic)
    }

    /// Whether a value of this type can be used where `other` is expected.
    ///
    /// `Dynamic` on the right-hand side is a wildcard; aggregate types
    /// conform when their element or attribute types conform recursively.
    pub fn conforms_to(&self, other: &Type) -> bool {
        match (self, other) {
            (_, Type::Dynamic) => true,
            (Type::Bool, Type::Bool) => true,
            (Type::Number, Type::Number) => true,
            (Type::String, Type::String) => true,
            (Type::List { element_type: a }, Type::List { element_type: b })
            | (Type::Set { element_type: a }, Type::Set { element_type: b })
            | (Type::Map { element_type: a }, Type::Map { element_type: b }) => a.conforms_to(b),
            (Type::Object { attribute_types: a }, Type::Object { attribute_types: b }) => {
                a.len() == b.len()
                    && a.iter().all(|(name, typ)| {
                        b.get(name).is_some_and(|expected| typ.conforms_to(expected))
                    })
            }
            (Type::Tuple { element_types: a }, Type::Tuple { element_types: b }) => {
                a.len() == b.len() && a.iter().zip(b.iter()).all(|(x, y)| x.conforms_to(y))
            }
            (Type::Dynamic, _) => false,
            _ => false,
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Bool => f.write_str("bool"),
            Type::Number => f.write_str("number"),
            Type::String => f.write_str("string"),
            Type::List { element_type } => write!(f, "list[{element_type}]"),
            Type::Set { element_type } => write!(f, "set[{element_type}]"),
            Type::Map { element_type } => write!(f, "map[{element_type}]"),
            Type::Object { attribute_types } => {
                f.write_str("object[")?;
                for (i, (name, typ)) in attribute_types.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{name}: {typ}")?;
                }
                f.write_str("]")
            }
            Type::Tuple { element_types } => {
                f.write_str("tuple[")?;
                for (i, typ) in element_types.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{typ}")?;
                }
                f.write_str("]")
            }
            Type::Dynamic => f.write_str("dynamic"),
        }
    }
}
