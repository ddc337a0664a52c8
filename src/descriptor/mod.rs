//! Component descriptors: the immutable, queryable description of every
//! attribute of a configurable component and of the components nested in it.
//!
//! A [`BindableDescriptor`] derives two views from its internal maps:
//! ungrouped attributes and attribute groups, both computed in one
//! depth-first pass under a [`GroupingMethod`]:
//!
//! | Method | Group key | Ungrouped | Group order |
//! |--------|-----------|-----------|-------------|
//! | `Structure` | declared type of the holding slot | root attributes | simple type name |
//! | `Level` | [`AttributeLevel`](crate::attribute::AttributeLevel) | no level | ordinal |
//! | `Group` | semantic group name | no/empty group | lexicographic |
//! | `None` | - | everything | - |
//!
//! ## Usage
//!
//! ```ignore
//! let descriptor = DescriptorBuilder::new().build(&lingo)?;
//!
//! // Only per-run inputs, grouped for a settings panel
//! let panel = descriptor
//!     .only_marked(&[Marker::Processing, Marker::Input])
//!     .group(GroupingMethod::Level);
//!
//! for (level, attributes) in panel.attribute_groups() { ... }
//! ```

mod bindable;
pub mod filter;
mod grouping;
mod outline;
#[cfg(feature = "serde")]
mod serialize;


use indexmap::IndexMap;

use crate::attribute::AttributeDescriptor;
use crate::base::{AttributeKey, Slot};

pub use bindable::BindableDescriptor;
pub use grouping::{GroupKey, GroupingMethod};

/// Insertion-ordered attributes keyed by attribute key.
pub type AttributeMap = IndexMap<AttributeKey, AttributeDescriptor>;

/// Attribute groups in group-key order.
pub type AttributeGroups = IndexMap<GroupKey, AttributeMap>;

/// Nested component descriptors keyed by the slot holding them.
pub type NestedMap = IndexMap<Slot, BindableDescriptor>;
