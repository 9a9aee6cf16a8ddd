//! Parameter descriptors handed to signature reflection.

use crate::prelude::*;
use serde::{Deserialize, Serialize};

/// Opaque reference to a parameter's declared type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, From, Into, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeRef(String);

/// One parameter of a function or method: its name, declared type, and
/// whether the declaration supplies a default value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{of} {name}")]
pub struct Param {
    name: String,
    of:   TypeRef,
    mask: u32,
}

impl Param {
    /// Mask bit set when a default value is provided
    pub const HAS_DEFAULT: u32 = 0x01;

    pub fn new(name: impl Into<String>, of: impl Into<TypeRef>, mask: u32) -> Self {
        Self {
            name: name.into(),
            of: of.into(),
            mask,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub const fn of(&self) -> &TypeRef {
        &self.of
    }

    pub const fn has_default(&self) -> bool {
        self.mask & Self::HAS_DEFAULT != 0
    }
}
