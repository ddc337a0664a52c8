//! Structural filtering of descriptor trees.
//!
//! [`BindableDescriptor::only`] rebuilds the whole tree keeping, at every
//! nesting level, only the attributes a predicate accepts. Nested components
//! are never dropped, even when nothing in them survives.
//!
//! The free functions in this module build the predicates configuration
//! views ask for most often.

use std::sync::Arc;

use tracing::debug;

use super::{AttributeMap, BindableDescriptor, NestedMap};
use crate::attribute::{AttributeDescriptor, AttributeLevel, Marker};

impl BindableDescriptor {
    /// Keep only the attributes for which `predicate` returns `true`.
    ///
    /// The result keeps the receiver's metadata and grouping method and the
    /// full slot structure of the tree.
    pub fn only<P>(&self, predicate: P) -> Self
    where
        P: Fn(&AttributeDescriptor) -> bool,
    {
        let filtered = self.only_dyn(&predicate);
        debug!(
            "[FILTER] {}: kept {} of {} attribute(s)",
            self.metadata().name,
            filtered.len(),
            self.len()
        );
        filtered
    }

    /// Keep only the attributes that carry every listed marker.
    ///
    /// With no markers the receiver is returned unchanged.
    pub fn only_marked(&self, markers: &[Marker]) -> Self {
        if markers.is_empty() {
            return self.clone();
        }
        self.only(|attribute| attribute.has_markers(markers))
    }

    fn only_dyn(&self, predicate: &dyn Fn(&AttributeDescriptor) -> bool) -> Self {
        let attributes: AttributeMap = self
            .direct_attributes()
            .iter()
            .filter(|(_, attribute)| predicate(*attribute))
            .map(|(key, attribute)| (key.clone(), attribute.clone()))
            .collect();

        let nested: NestedMap = self
            .nested()
            .iter()
            .map(|(slot, child)| (slot.clone(), child.only_dyn(predicate)))
            .collect();

        Self::from_parts(
            Arc::clone(self.shared_metadata()),
            Arc::new(attributes),
            Arc::new(nested),
            self.grouping(),
        )
    }
}

/// Accepts attributes carrying every marker in `markers`.
pub fn marked(markers: &[Marker]) -> impl Fn(&AttributeDescriptor) -> bool + '_ {
    move |attribute| attribute.has_markers(markers)
}

/// Accepts attributes not tagged [`Marker::Internal`].
pub fn public() -> impl Fn(&AttributeDescriptor) -> bool {
    |attribute| !attribute.has_marker(Marker::Internal)
}

/// Accepts attributes whose level is at most `level`.
///
/// Attributes without a level count as [`AttributeLevel::Basic`].
pub fn up_to_level(level: AttributeLevel) -> impl Fn(&AttributeDescriptor) -> bool {
    move |attribute| {
        attribute
            .metadata()
            .and_then(|m| m.level())
            .unwrap_or(AttributeLevel::Basic)
            <= level
    }
}

/// Accepts attributes in the semantic group `group`.
pub fn in_group(group: &str) -> impl Fn(&AttributeDescriptor) -> bool + '_ {
    move |attribute| attribute.metadata().and_then(|m| m.group()) == Some(group)
}
