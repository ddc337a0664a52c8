use std::borrow::Borrow;
use std::fmt;

use smol_str::SmolStr;

/// Stable identifier of one attribute.
///
/// Keys are dot-separated identifier segments, conventionally
/// `<DeclaringType>.<field>` (e.g. `Lingo.desiredClusterCount`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct AttributeKey(SmolStr);

impl AttributeKey {
    pub fn new(key: impl Into<SmolStr>) -> Self {
        Self(key.into())
    }

    /// Build the conventional `<Type>.<field>` key.
    pub fn qualified(type_simple_name: &str, field: &str) -> Self {
        Self(SmolStr::from(format!("{}.{}", type_simple_name, field)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The last dot-separated segment (the field part of a qualified key).
    pub fn field(&self) -> &str {
        self.0.rsplit('.').next().unwrap_or(&self.0)
    }

    /// Check every dot-separated segment is a Unicode identifier.
    pub fn is_well_formed(&self) -> bool {
        !self.0.is_empty() && self.0.split('.').all(is_identifier)
    }
}

fn is_identifier(segment: &str) -> bool {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) if first == '_' || unicode_ident::is_xid_start(first) => {
            chars.all(unicode_ident::is_xid_continue)
        }
        _ => false,
    }
}

impl fmt::Display for AttributeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AttributeKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for AttributeKey {
    fn from(key: String) -> Self {
        Self::new(key)
    }
}

impl Borrow<str> for AttributeKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for AttributeKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
