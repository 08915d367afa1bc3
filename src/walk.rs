// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Path walking over arbitrary nested data.
//!
//! The walker resolves an [`AttributePath`] one step at a time against a
//! [`Walkable`] node. Plain sequences and mappings are resolved natively,
//! [`Value`] trees recurse through their own representation, and any other
//! aggregate participates by implementing [`Stepper`]. A failed walk
//! reports the exact unresolved suffix of the path together with the cause;
//! it never panics and never aborts early on behalf of the caller.

use core::fmt;
use std::collections::BTreeMap;

use crate::error::{StepError, WalkError};
use crate::number::Number;
use crate::path::{AttributePath, AttributePathStep};
use crate::typing::Type;
use crate::value::{Value, ValueKind};
use crate::Rc;

/// The stepping capability: resolve one path step against `self`.
///
/// Implementations must be pure functions of `(self, step)` and must not
/// retain or mutate shared state. A step the implementation does not
/// understand should fail with `StepError::unsupported::<Self>(step)` so
/// diagnostics name both the step variant and the concrete type.
pub trait Stepper: fmt::Debug {
    fn apply_step(&self, step: &AttributePathStep) -> Result<Walkable, StepError>;
}

/// A node the walker can visit.
///
/// Leaves (`Bool`, `Number`, `String`) terminate a walk: any step applied
/// to them fails. `Seq` and `Map` are the built-in containers, `Value` is
/// the crate's own typed value, and `Custom` is any user aggregate that
/// implements [`Stepper`].
#[derive(Debug, Clone)]
pub enum Walkable {
    Bool(bool),
    Number(Number),
    String(Rc<str>),
    Seq(Rc<Vec<Walkable>>),
    Map(Rc<BTreeMap<Rc<str>, Walkable>>),
    Value(Value),
    Custom(Rc<dyn Stepper>),
}

impl Walkable {
    pub fn custom(stepper: impl Stepper + 'static) -> Walkable {
        Walkable::Custom(Rc::new(stepper))
    }

    /// Node kind, for diagnostics.
    fn describe(&self) -> &'static str {
        match self {
            Walkable::Bool(_) => "a boolean",
            Walkable::Number(_) => "a number",
            Walkable::String(_) => "a string",
            Walkable::Seq(_) => "a sequence",
            Walkable::Map(_) => "a mapping",
            Walkable::Value(_) => "a value",
            Walkable::Custom(_) => "a custom stepper",
        }
    }
}

impl Stepper for Walkable {
    fn apply_step(&self, step: &AttributePathStep) -> Result<Walkable, StepError> {
        match self {
            Walkable::Map(entries) => match step {
                AttributePathStep::AttributeName(name)
                | AttributePathStep::ElementKeyString(name) => entries
                    .get(name.as_ref())
                    .cloned()
                    .ok_or_else(|| StepError::KeyNotFound { key: name.clone() }),
                _ => Err(StepError::unsupported_on(step, self.describe())),
            },
            Walkable::Seq(elements) => match step {
                AttributePathStep::ElementKeyInt(index) => usize::try_from(*index)
                    .ok()
                    .and_then(|i| elements.get(i))
                    .cloned()
                    .ok_or(StepError::IndexOutOfRange {
                        index: *index,
                        len: elements.len(),
                    }),
                _ => Err(StepError::unsupported_on(step, self.describe())),
            },
            Walkable::Value(value) => value.apply_step(step),
            Walkable::Custom(stepper) => stepper.apply_step(step),
            _ => Err(StepError::unsupported_on(step, self.describe())),
        }
    }
}

impl Stepper for Value {
    fn apply_step(&self, step: &AttributePathStep) -> Result<Walkable, StepError> {
        let target = || -> Rc<str> {
            match self.kind() {
                ValueKind::Null => format!("a null value of type {}", self.ty()).into(),
                ValueKind::Unknown => format!("an unknown value of type {}", self.ty()).into(),
                _ => format!("a value of type {}", self.ty()).into(),
            }
        };

        match (self.ty(), self.kind()) {
            (Type::Object { .. } | Type::Map { .. }, ValueKind::Mapping(entries)) => match step {
                AttributePathStep::AttributeName(name)
                | AttributePathStep::ElementKeyString(name) => entries
                    .get(name.as_ref())
                    .cloned()
                    .map(Walkable::Value)
                    .ok_or_else(|| StepError::KeyNotFound { key: name.clone() }),
                _ => Err(StepError::UnsupportedStep {
                    step: step.kind(),
                    target: target(),
                }),
            },
            (Type::List { .. } | Type::Tuple { .. }, ValueKind::Seq(elements)) => match step {
                AttributePathStep::ElementKeyInt(index) => usize::try_from(*index)
                    .ok()
                    .and_then(|i| elements.get(i))
                    .cloned()
                    .map(Walkable::Value)
                    .ok_or(StepError::IndexOutOfRange {
                        index: *index,
                        len: elements.len(),
                    }),
                _ => Err(StepError::UnsupportedStep {
                    step: step.kind(),
                    target: target(),
                }),
            },
            (Type::Set { .. }, ValueKind::Seq(elements)) => match step {
                // Linear scan; first structurally-equal element wins.
                AttributePathStep::ElementKeyValue(wanted) => elements
                    .iter()
                    .find(|element| *element == wanted)
                    .cloned()
                    .map(Walkable::Value)
                    .ok_or_else(|| StepError::ElementNotFound {
                        target: wanted.to_string().into(),
                    }),
                _ => Err(StepError::UnsupportedStep {
                    step: step.kind(),
                    target: target(),
                }),
            },
            _ => Err(StepError::UnsupportedStep {
                step: step.kind(),
                target: target(),
            }),
        }
    }
}

/// Resolve `path` against `root`, strictly left to right.
///
/// An empty path trivially succeeds and returns the root unchanged. On the
/// first step that cannot be resolved, the returned [`WalkError`] carries
/// the path suffix starting at that step plus the cause.
pub fn walk(root: &Walkable, path: &AttributePath) -> Result<Walkable, WalkError> {
    let mut current = root.clone();
    for (position, step) in path.steps().iter().enumerate() {
        match current.apply_step(step) {
            Ok(next) => current = next,
            Err(source) => {
                return Err(WalkError {
                    remaining: AttributePath::from_steps(path.steps()[position..].to_vec()),
                    source,
                })
            }
        }
    }
    Ok(current)
}

impl From<bool> for Walkable {
    fn from(b: bool) -> Self {
        Walkable::Bool(b)
    }
}

impl From<i64> for Walkable {
    fn from(n: i64) -> Self {
        Walkable::Number(Number::from(n))
    }
}

impl From<u64> for Walkable {
    fn from(n: u64) -> Self {
        Walkable::Number(Number::from(n))
    }
}

impl From<f64> for Walkable {
    fn from(n: f64) -> Self {
        Walkable::Number(Number::from(n))
    }
}

impl From<Number> for Walkable {
    fn from(n: Number) -> Self {
        Walkable::Number(n)
    }
}

impl From<&str> for Walkable {
    fn from(s: &str) -> Self {
        Walkable::String(s.into())
    }
}

impl From<Rc<str>> for Walkable {
    fn from(s: Rc<str>) -> Self {
        Walkable::String(s)
    }
}

impl From<Vec<Walkable>> for Walkable {
    fn from(elements: Vec<Walkable>) -> Self {
        Walkable::Seq(Rc::new(elements))
    }
}

impl From<BTreeMap<Rc<str>, Walkable>> for Walkable {
    fn from(entries: BTreeMap<Rc<str>, Walkable>) -> Self {
        Walkable::Map(Rc::new(entries))
    }
}

impl From<Value> for Walkable {
    fn from(value: Value) -> Self {
        Walkable::Value(value)
    }
}

impl PartialEq for Walkable {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Walkable::Bool(a), Walkable::Bool(b)) => a == b,
            (Walkable::Number(a), Walkable::Number(b)) => a == b,
            (Walkable::String(a), Walkable::String(b)) => a == b,
            (Walkable::Seq(a), Walkable::Seq(b)) => a == b,
            (Walkable::Map(a), Walkable::Map(b)) => a == b,
            (Walkable::Value(a), Walkable::Value(b)) => a == b,
            // Trait objects have no structural equality; identity is the
            // best available notion.
            (Walkable::Custom(a), Walkable::Custom(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}
