use std::sync::Arc;

use smol_str::SmolStr;

use super::{AttributeMetadata, Marker, MarkerSet};
use crate::base::AttributeKey;

/// Full description of one configurable attribute.
///
/// Descriptors are immutable once built and cheap to clone; the metadata is
/// shared behind an `Arc` between every view that lists the attribute.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AttributeDescriptor {
    key: AttributeKey,
    /// Declared value type (e.g. `usize`, `Option<String>`).
    value_type: SmolStr,
    /// Default value rendered for display, if the component declares one.
    default_value: Option<SmolStr>,
    metadata: Option<Arc<AttributeMetadata>>,
    markers: MarkerSet,
}

impl AttributeDescriptor {
    pub fn new(key: impl Into<AttributeKey>, value_type: impl Into<SmolStr>) -> Self {
        Self {
            key: key.into(),
            value_type: value_type.into(),
            default_value: None,
            metadata: None,
            markers: MarkerSet::empty(),
        }
    }

    pub fn with_metadata(mut self, metadata: AttributeMetadata) -> Self {
        self.metadata = Some(Arc::new(metadata));
        self
    }

    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.markers.insert(marker);
        self
    }

    pub fn with_markers(mut self, markers: impl IntoIterator<Item = Marker>) -> Self {
        for marker in markers {
            self.markers.insert(marker);
        }
        self
    }

    pub fn with_default(mut self, value: impl Into<SmolStr>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    pub fn key(&self) -> &AttributeKey {
        &self.key
    }

    pub fn value_type(&self) -> &str {
        &self.value_type
    }

    pub fn default_value(&self) -> Option<&str> {
        self.default_value.as_deref()
    }

    pub fn metadata(&self) -> Option<&AttributeMetadata> {
        self.metadata.as_deref()
    }

    pub fn markers(&self) -> MarkerSet {
        self.markers
    }

    pub fn has_marker(&self, marker: Marker) -> bool {
        self.markers.contains(marker)
    }

    /// True when the attribute carries every listed marker.
    pub fn has_markers(&self, markers: &[Marker]) -> bool {
        self.markers.contains_all(markers)
    }

    /// Label from the metadata, falling back to the key.
    pub fn label(&self) -> &str {
        match self.metadata() {
            Some(meta) if !meta.label.is_empty() => &meta.label,
            _ => self.key.as_str(),
        }
    }
}
