//! Error types for descriptor construction.

use thiserror::Error;

/// Errors that can occur while building or configuring descriptors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DescriptorError {
    /// A grouping method name that is not one of the supported methods.
    #[error("Unknown grouping method: {0}")]
    UnknownGroupingMethod(String),

    /// A component was reached again while it was still being described.
    #[error("Cyclic nesting: {component} is reachable from itself via {path}")]
    Cycle { component: String, path: String },

    /// Nesting exceeded the configured depth limit.
    #[error("Nesting deeper than {max_depth} levels at {path}")]
    TooDeep { max_depth: usize, path: String },

    /// An attribute key that is not a dot-separated identifier.
    #[error("Malformed attribute key '{key}' in {component}")]
    MalformedKey { key: String, component: String },

    /// Two nested components registered under the same slot.
    #[error("Duplicate slot '{slot}' in {component}")]
    DuplicateSlot { slot: String, component: String },
}

impl DescriptorError {
    /// Create an unknown grouping method error.
    pub fn unknown_grouping(name: impl Into<String>) -> Self {
        Self::UnknownGroupingMethod(name.into())
    }

    /// Create a cycle error.
    pub fn cycle(component: impl Into<String>, path: impl Into<String>) -> Self {
        Self::Cycle {
            component: component.into(),
            path: path.into(),
        }
    }

    /// Create a depth limit error.
    pub fn too_deep(max_depth: usize, path: impl Into<String>) -> Self {
        Self::TooDeep {
            max_depth,
            path: path.into(),
        }
    }

    /// Create a malformed key error.
    pub fn malformed_key(key: impl Into<String>, component: impl Into<String>) -> Self {
        Self::MalformedKey {
            key: key.into(),
            component: component.into(),
        }
    }

    /// Create a duplicate slot error.
    pub fn duplicate_slot(slot: impl Into<String>, component: impl Into<String>) -> Self {
        Self::DuplicateSlot {
            slot: slot.into(),
            component: component.into(),
        }
    }
}
