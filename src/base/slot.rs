use std::fmt;

use smol_str::SmolStr;

use super::TypeName;

/// The relation by which a parent component references a nested component.
///
/// A slot is the field holding the reference together with the field's
/// declared type. The declared type is what STRUCTURE grouping keys on.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Slot {
    field: SmolStr,
    declared_type: TypeName,
}

impl Slot {
    pub fn new(field: impl Into<SmolStr>, declared_type: TypeName) -> Self {
        Self {
            field: field.into(),
            declared_type,
        }
    }

    /// A slot whose declared type is `T`.
    pub fn of<T: ?Sized>(field: impl Into<SmolStr>) -> Self {
        Self::new(field, TypeName::of::<T>())
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn declared_type(&self) -> &TypeName {
        &self.declared_type
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.declared_type)
    }
}
