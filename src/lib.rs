// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

// Use README.md as crate documentation.
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]

mod error;
mod number;
mod path;
mod typing;
mod value;
mod walk;

#[cfg(feature = "arc")]
pub use std::sync::Arc as Rc;

#[cfg(not(feature = "arc"))]
pub use std::rc::Rc;

pub use error::{StepError, TypeError, WalkError};
pub use number::{Number, ParseNumberError};
pub use path::{AttributePath, AttributePathStep};
pub use typing::Type;
pub use value::{Value, ValueKind};
pub use walk::{walk, Stepper, Walkable};
