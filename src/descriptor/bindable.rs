use std::sync::Arc;

use tracing::debug;

use super::grouping::{ViewCollector, Views};
use super::{AttributeGroups, AttributeMap, GroupingMethod, NestedMap};
use crate::attribute::{AttributeDescriptor, BindableMetadata};
use crate::base::Slot;

/// Full description of a configurable component and everything nested in it.
///
/// A descriptor wraps two internal maps, the attributes declared directly on
/// the component and the nested component descriptors keyed by slot, and
/// derives two public views from them:
///
/// - [`attribute_descriptors`](Self::attribute_descriptors): attributes that
///   fall into no group under the active [`GroupingMethod`]
/// - [`attribute_groups`](Self::attribute_groups): grouped attributes, groups
///   sorted by the method's key order
///
/// Descriptors are immutable. [`group`](Self::group), [`flatten`](Self::flatten)
/// and [`only`](Self::only) return new descriptors; the internal maps are
/// shared with the receiver where possible, so these are cheap.
#[derive(Debug, Clone)]
pub struct BindableDescriptor {
    metadata: Arc<BindableMetadata>,
    /// Attributes declared directly on this component.
    attributes: Arc<AttributeMap>,
    /// Nested components, keyed by the slot that holds them.
    nested: Arc<NestedMap>,
    grouping: GroupingMethod,
    views: Arc<Views>,
}

impl BindableDescriptor {
    /// Create a descriptor grouped by [`GroupingMethod::Structure`].
    ///
    /// Attributes sharing a key are merged last-writer-wins.
    pub fn new(
        metadata: BindableMetadata,
        nested: impl IntoIterator<Item = (Slot, BindableDescriptor)>,
        attributes: impl IntoIterator<Item = AttributeDescriptor>,
    ) -> Self {
        Self::with_grouping(metadata, nested, attributes, GroupingMethod::Structure)
    }

    /// Create a descriptor with an explicit grouping method.
    pub fn with_grouping(
        metadata: BindableMetadata,
        nested: impl IntoIterator<Item = (Slot, BindableDescriptor)>,
        attributes: impl IntoIterator<Item = AttributeDescriptor>,
        grouping: GroupingMethod,
    ) -> Self {
        let attributes: AttributeMap = attributes
            .into_iter()
            .map(|a| (a.key().clone(), a))
            .collect();
        let nested: NestedMap = nested.into_iter().collect();

        Self::from_parts(
            Arc::new(metadata),
            Arc::new(attributes),
            Arc::new(nested),
            grouping,
        )
    }

    /// A component with attributes and no nested components.
    pub fn leaf(
        metadata: BindableMetadata,
        attributes: impl IntoIterator<Item = AttributeDescriptor>,
    ) -> Self {
        Self::new(metadata, std::iter::empty(), attributes)
    }

    pub(crate) fn from_parts(
        metadata: Arc<BindableMetadata>,
        attributes: Arc<AttributeMap>,
        nested: Arc<NestedMap>,
        grouping: GroupingMethod,
    ) -> Self {
        let mut descriptor = Self {
            metadata,
            attributes,
            nested,
            grouping,
            views: Arc::default(),
        };

        let mut collector = ViewCollector::new(grouping);
        collector.visit(&descriptor, None);
        let views = collector.finish();

        debug!(
            "[GROUPING] {} by {}: {} ungrouped, {} group(s)",
            descriptor.metadata.name,
            grouping,
            views.ungrouped.len(),
            views.groups.len()
        );

        descriptor.views = Arc::new(views);
        descriptor
    }

    // ============================================================
    // Views
    // ============================================================

    /// Attributes that did not resolve to a group, in visitation order.
    pub fn attribute_descriptors(&self) -> &AttributeMap {
        &self.views.ungrouped
    }

    /// Grouped attributes, groups ordered by the grouping method.
    pub fn attribute_groups(&self) -> &AttributeGroups {
        &self.views.groups
    }

    /// Look up an attribute in either view.
    pub fn get(&self, key: &str) -> Option<&AttributeDescriptor> {
        self.views
            .ungrouped
            .get(key)
            .or_else(|| self.views.groups.values().find_map(|g| g.get(key)))
    }

    /// Every attribute in the views: ungrouped first, then group by group.
    pub fn iter(&self) -> impl Iterator<Item = &AttributeDescriptor> + '_ {
        self.views
            .ungrouped
            .values()
            .chain(self.views.groups.values().flat_map(|g| g.values()))
    }

    /// Number of attributes across both views.
    pub fn len(&self) -> usize {
        self.views.ungrouped.len() + self.views.groups.values().map(|g| g.len()).sum::<usize>()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // ============================================================
    // Structure
    // ============================================================

    pub fn metadata(&self) -> &BindableMetadata {
        &self.metadata
    }

    pub fn grouping(&self) -> GroupingMethod {
        self.grouping
    }

    /// Attributes declared directly on this component.
    pub fn direct_attributes(&self) -> &AttributeMap {
        &self.attributes
    }

    /// Nested component descriptors keyed by slot.
    pub fn nested(&self) -> &NestedMap {
        &self.nested
    }

    /// Find a nested descriptor by following slot field names.
    pub fn descendant<'a>(&self, fields: impl IntoIterator<Item = &'a str>) -> Option<&BindableDescriptor> {
        let mut current = self;
        for field in fields {
            current = current
                .nested
                .iter()
                .find(|(slot, _)| slot.field() == field)
                .map(|(_, child)| child)?;
        }
        Some(current)
    }

    // ============================================================
    // Transformations
    // ============================================================

    /// Regroup the same attributes with another method.
    pub fn group(&self, grouping: GroupingMethod) -> Self {
        Self::from_parts(
            Arc::clone(&self.metadata),
            Arc::clone(&self.attributes),
            Arc::clone(&self.nested),
            grouping,
        )
    }

    /// All attributes in [`attribute_descriptors`](Self::attribute_descriptors),
    /// no groups. Same as `group(GroupingMethod::None)`.
    pub fn flatten(&self) -> Self {
        self.group(GroupingMethod::None)
    }

    pub(crate) fn shared_metadata(&self) -> &Arc<BindableMetadata> {
        &self.metadata
    }
}

/// Value equality over metadata, grouping and the internal maps.
///
/// The views are derived from those, so they need no separate comparison.
impl PartialEq for BindableDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.grouping == other.grouping
            && self.metadata == other.metadata
            && *self.attributes == *other.attributes
            && self.attributes.keys().eq(other.attributes.keys())
            && *self.nested == *other.nested
            && self.nested.keys().eq(other.nested.keys())
    }
}

impl Eq for BindableDescriptor {}
