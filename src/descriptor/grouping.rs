//! Grouping strategies and the single-pass view collector.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use smol_str::SmolStr;
use tracing::{trace, warn};

use super::{AttributeGroups, AttributeMap, BindableDescriptor};
use crate::attribute::{AttributeDescriptor, AttributeLevel};
use crate::base::{AttributeKey, Slot, TypeName};
use crate::error::DescriptorError;

/// The supported ways of partitioning attributes into groups.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum GroupingMethod {
    /// By the declared type of the slot holding the attribute's component.
    /// Attributes of the root component stay ungrouped.
    #[default]
    Structure,
    /// By [`AttributeLevel`]. Attributes without a level stay ungrouped.
    Level,
    /// By the semantic group name. Attributes without a group stay ungrouped.
    Group,
    /// No grouping at all.
    None,
}

impl GroupingMethod {
    pub const ALL: [GroupingMethod; 4] = [Self::Structure, Self::Level, Self::Group, Self::None];

    pub fn display(&self) -> &'static str {
        match self {
            Self::Structure => "STRUCTURE",
            Self::Level => "LEVEL",
            Self::Group => "GROUP",
            Self::None => "NONE",
        }
    }

    /// Compute the group an attribute falls into.
    ///
    /// `slot` is the slot holding the component that declares the attribute,
    /// or `None` for attributes of the root component.
    pub fn group_key(&self, slot: Option<&Slot>, attribute: &AttributeDescriptor) -> Option<GroupKey> {
        match self {
            Self::Structure => slot.map(|s| GroupKey::Structure(s.declared_type().clone())),
            Self::Level => attribute
                .metadata()
                .and_then(|m| m.level())
                .map(GroupKey::Level),
            Self::Group => attribute
                .metadata()
                .and_then(|m| m.group())
                .map(|g| GroupKey::Group(SmolStr::new(g))),
            Self::None => None,
        }
    }
}

impl fmt::Display for GroupingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display())
    }
}

impl FromStr for GroupingMethod {
    type Err = DescriptorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "structure" => Ok(Self::Structure),
            "level" => Ok(Self::Level),
            "group" => Ok(Self::Group),
            "none" | "flat" => Ok(Self::None),
            _ => Err(DescriptorError::unknown_grouping(s)),
        }
    }
}

/// Key of one attribute group.
///
/// All keys within one computed view share the same variant.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GroupKey {
    Structure(TypeName),
    Level(AttributeLevel),
    Group(SmolStr),
}

impl GroupKey {
    fn rank(&self) -> u8 {
        match self {
            Self::Structure(_) => 0,
            Self::Level(_) => 1,
            Self::Group(_) => 2,
        }
    }

    /// Human-readable label of the group.
    pub fn label(&self) -> &str {
        match self {
            Self::Structure(ty) => ty.simple_name(),
            Self::Level(level) => level.display(),
            Self::Group(name) => name,
        }
    }
}

impl Ord for GroupKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Structure(a), Self::Structure(b)) => a
                .simple_name()
                .cmp(b.simple_name())
                .then_with(|| a.path().cmp(b.path())),
            (Self::Level(a), Self::Level(b)) => a.cmp(b),
            (Self::Group(a), Self::Group(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl PartialOrd for GroupKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The two derived views of a descriptor.
#[derive(Debug, Clone, Default)]
pub(crate) struct Views {
    pub(crate) ungrouped: AttributeMap,
    pub(crate) groups: AttributeGroups,
}

/// Collects both views in one depth-first pass over a descriptor tree.
pub(crate) struct ViewCollector {
    method: GroupingMethod,
    ungrouped: AttributeMap,
    groups: FxHashMap<GroupKey, AttributeMap>,
    /// Bucket each key currently lives in, for last-writer-wins moves.
    placement: FxHashMap<AttributeKey, Option<GroupKey>>,
}

impl ViewCollector {
    pub(crate) fn new(method: GroupingMethod) -> Self {
        Self {
            method,
            ungrouped: IndexMap::new(),
            groups: FxHashMap::default(),
            placement: FxHashMap::default(),
        }
    }

    /// Visit `node` and everything nested below it.
    ///
    /// Direct attributes are grouped relative to `slot`, the slot holding
    /// `node` in its parent. Nested components are visited in slot order,
    /// each relative to its own slot.
    pub(crate) fn visit(&mut self, node: &BindableDescriptor, slot: Option<&Slot>) {
        for attribute in node.direct_attributes().values() {
            let group = self.method.group_key(slot, attribute);
            trace!(
                "[GROUPING] {} -> {}",
                attribute.key(),
                group.as_ref().map(GroupKey::label).unwrap_or("<ungrouped>")
            );
            self.add(attribute, group);
        }

        for (child_slot, child) in node.nested() {
            self.visit(child, Some(child_slot));
        }
    }

    fn add(&mut self, attribute: &AttributeDescriptor, group: Option<GroupKey>) {
        let key = attribute.key().clone();

        if let Some(previous) = self.placement.insert(key.clone(), group.clone()) {
            warn!(
                "[GROUPING] duplicate attribute key '{}', keeping the last one visited",
                key
            );
            if previous != group {
                self.remove(&key, previous);
            }
        }

        match group {
            Some(group) => {
                self.groups.entry(group).or_default().insert(key, attribute.clone());
            }
            None => {
                self.ungrouped.insert(key, attribute.clone());
            }
        }
    }

    fn remove(&mut self, key: &AttributeKey, bucket: Option<GroupKey>) {
        match bucket {
            Some(group) => {
                if let Some(members) = self.groups.get_mut(&group) {
                    members.shift_remove(key);
                    if members.is_empty() {
                        self.groups.remove(&group);
                    }
                }
            }
            None => {
                self.ungrouped.shift_remove(key);
            }
        }
    }

    /// Order the groups and produce the final views.
    pub(crate) fn finish(self) -> Views {
        let mut groups: Vec<_> = self.groups.into_iter().collect();
        groups.sort_by(|(a, _), (b, _)| a.cmp(b));

        Views {
            ungrouped: self.ungrouped,
            groups: groups.into_iter().collect(),
        }
    }
}
