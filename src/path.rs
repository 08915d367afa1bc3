// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Attribute paths: ordered step sequences addressing a location inside a
//! nested value.
//!
//! Paths are immutable. The `with_*` builders never touch the receiver;
//! each returns a new path whose step sequence is the receiver's steps plus
//! one, so existing path values are never observed to change.

use core::fmt;

use crate::value::Value;
use crate::Rc;

/// One hop of an attribute path.
///
/// Two steps are equal iff they are the same variant and carry equal
/// payloads. Different variants are never equal, even when their payloads
/// would print identically: `AttributeName("x")` is not
/// `ElementKeyString("x")`.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributePathStep {
    /// Selects a named attribute of an object-like value.
    AttributeName(Rc<str>),
    /// Selects an entry of a string-keyed mapping.
    ElementKeyString(Rc<str>),
    /// Selects the Nth element of an ordered sequence, 0-based.
    ElementKeyInt(i64),
    /// Selects the set element structurally equal to the given value.
    ElementKeyValue(Value),
}

impl AttributePathStep {
    /// Variant name, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            AttributePathStep::AttributeName(_) => "AttributeName",
            AttributePathStep::ElementKeyString(_) => "ElementKeyString",
            AttributePathStep::ElementKeyInt(_) => "ElementKeyInt",
            AttributePathStep::ElementKeyValue(_) => "ElementKeyValue",
        }
    }
}

impl fmt::Display for AttributePathStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributePathStep::AttributeName(name) => write!(f, ".{name}"),
            AttributePathStep::ElementKeyString(key) => write!(f, "[{key:?}]"),
            AttributePathStep::ElementKeyInt(index) => write!(f, "[{index}]"),
            AttributePathStep::ElementKeyValue(value) => write!(f, "[{value}]"),
        }
    }
}

/// An ordered, immutable sequence of [`AttributePathStep`].
///
/// The empty path addresses the whole value; an absent path is represented
/// by the empty path and the two compare equal. The step list is shared, so
/// cloning a path and appending to it are both cheap.
#[derive(Debug, Clone, Default)]
pub struct AttributePath {
    steps: Rc<Vec<AttributePathStep>>,
}

impl AttributePath {
    /// The empty path, addressing the whole value.
    pub fn new() -> AttributePath {
        AttributePath::default()
    }

    pub fn from_steps(steps: Vec<AttributePathStep>) -> AttributePath {
        AttributePath {
            steps: Rc::new(steps),
        }
    }

    pub fn steps(&self) -> &[AttributePathStep] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The final step, if the path has one.
    pub fn last_step(&self) -> Option<&AttributePathStep> {
        self.steps.last()
    }

    /// The path with its final step removed; the empty path stays empty.
    pub fn without_last_step(&self) -> AttributePath {
        let mut steps = (*self.steps).clone();
        steps.pop();
        AttributePath::from_steps(steps)
    }

    fn with_step(&self, step: AttributePathStep) -> AttributePath {
        let mut steps = (*self.steps).clone();
        steps.push(step);
        AttributePath::from_steps(steps)
    }

    pub fn with_attribute_name(&self, name: impl Into<Rc<str>>) -> AttributePath {
        self.with_step(AttributePathStep::AttributeName(name.into()))
    }

    pub fn with_element_key_string(&self, key: impl Into<Rc<str>>) -> AttributePath {
        self.with_step(AttributePathStep::ElementKeyString(key.into()))
    }

    pub fn with_element_key_int(&self, index: i64) -> AttributePath {
        self.with_step(AttributePathStep::ElementKeyInt(index))
    }

    pub fn with_element_key_value(&self, value: Value) -> AttributePath {
        self.with_step(AttributePathStep::ElementKeyValue(value))
    }
}

impl PartialEq for AttributePath {
    fn eq(&self, other: &Self) -> bool {
        self.steps == other.steps
    }
}

impl fmt::Display for AttributePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.steps.is_empty() {
            return f.write_str("<root>");
        }
        for step in self.steps.iter() {
            write!(f, "{step}")?;
        }
        Ok(())
    }
}

impl FromIterator<AttributePathStep> for AttributePath {
    fn from_iter<I: IntoIterator<Item = AttributePathStep>>(iter: I) -> Self {
        AttributePath::from_steps(iter.into_iter().collect())
    }
}
