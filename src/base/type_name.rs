use std::fmt;

use smol_str::SmolStr;

/// Declared type of a nested-component slot.
///
/// Stores the full path (`clustering::lingo::Lingo`); grouping and display use
/// the simple name (`Lingo`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeName {
    path: SmolStr,
}

impl TypeName {
    pub fn new(path: impl Into<SmolStr>) -> Self {
        Self { path: path.into() }
    }

    /// The type name of `T` as reported by the compiler.
    pub fn of<T: ?Sized>() -> Self {
        Self::new(std::any::type_name::<T>())
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Last path segment with generic arguments stripped.
    ///
    /// `alloc::vec::Vec<core::primitive::u8>` becomes `Vec`.
    pub fn simple_name(&self) -> &str {
        let base = match self.path.find('<') {
            Some(idx) => &self.path[..idx],
            None => &self.path,
        };
        base.rsplit("::").next().unwrap_or(base)
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.simple_name())
    }
}

impl From<&str> for TypeName {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for TypeName {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.path)
    }
}
