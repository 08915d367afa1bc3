// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use thiserror::Error;

use crate::path::AttributePath;
use crate::Rc;

type String = Rc<str>;

/// Error type for value construction.
///
/// Raised when a representation is not shape-compatible with the declared
/// type. Nested failures are wrapped with the offending attribute name or
/// element index so the full location is visible in the error chain.
#[derive(Debug, Clone, Error)]
pub enum TypeError {
    /// Representation does not match the declared type at all
    #[error("cannot create a value of type {expected} from {actual}")]
    Mismatch { expected: String, actual: String },
    /// Value carries an attribute the object type does not define
    #[error("attribute {name:?} is not defined by object type {typ}")]
    UndefinedAttribute { name: String, typ: String },
    /// Object type defines an attribute the value does not carry
    #[error("object type {typ} requires attribute {name:?}")]
    MissingAttribute { name: String, typ: String },
    /// Tuple value has the wrong number of elements
    #[error("tuple type expects {expected} elements, value has {actual}")]
    TupleLength { expected: usize, actual: usize },
    /// Failure inside a named attribute
    #[error("attribute {name:?}: {source}")]
    Attribute {
        name: String,
        source: Box<TypeError>,
    },
    /// Failure inside a sequence element
    #[error("element {index}: {source}")]
    Element { index: usize, source: Box<TypeError> },
}

impl TypeError {
    pub(crate) fn in_attribute(self, name: &str) -> TypeError {
        TypeError::Attribute {
            name: name.into(),
            source: Box::new(self),
        }
    }

    pub(crate) fn in_element(self, index: usize) -> TypeError {
        TypeError::Element {
            index,
            source: Box::new(self),
        }
    }
}

/// Error type for resolving a single attribute path step.
#[derive(Debug, Clone, Error)]
pub enum StepError {
    /// The current value cannot resolve this step variant at all
    #[error("unsupported attribute path step {step} on {target}")]
    UnsupportedStep {
        step: &'static str,
        target: String,
    },
    /// Step addresses a mapping key that does not exist
    #[error("key {key:?} not found")]
    KeyNotFound { key: String },
    /// Step addresses a sequence index outside `[0, len)`
    #[error("index {index} out of range for sequence of length {len}")]
    IndexOutOfRange { index: i64, len: usize },
    /// No set element is structurally equal to the step's target value
    #[error("no set element matches {target}")]
    ElementNotFound { target: String },
    /// Type error propagated from an intermediate value
    #[error(transparent)]
    Type(#[from] TypeError),
}

impl StepError {
    /// Unsupported-step error naming the concrete type of the stepped value.
    ///
    /// Intended for [`Stepper`](crate::Stepper) implementations:
    /// `StepError::unsupported::<Self>(step)`.
    pub fn unsupported<T>(step: &crate::AttributePathStep) -> StepError {
        StepError::UnsupportedStep {
            step: step.kind(),
            target: core::any::type_name::<T>().into(),
        }
    }

    pub(crate) fn unsupported_on(step: &crate::AttributePathStep, target: &str) -> StepError {
        StepError::UnsupportedStep {
            step: step.kind(),
            target: target.into(),
        }
    }
}

/// Error type for a failed walk.
///
/// Carries the unresolved suffix of the path, starting at the step that
/// failed, so callers can report exactly how far resolution got.
#[derive(Debug, Clone, Error)]
#[error("cannot resolve {remaining}: {source}")]
pub struct WalkError {
    /// Path suffix beginning with the failing step.
    pub remaining: AttributePath,
    /// Why that step could not be resolved.
    pub source: StepError,
}
