//! JSON-friendly export of the computed views.
//!
//! The shape mirrors what configuration UIs consume:
//!
//! ```json
//! {
//!   "metadata": { "name": "Lingo", ... },
//!   "grouping": "Structure",
//!   "attributeDescriptors": { "Lingo.count": { ... } },
//!   "attributeGroups": [ { "key": "Stemmer", "attributes": { ... } } ]
//! }
//! ```

use serde::ser::{Serialize, SerializeStruct, Serializer};

use super::{AttributeMap, BindableDescriptor, GroupKey};

#[derive(serde::Serialize)]
struct GroupEntry<'a> {
    key: &'a str,
    kind: &'static str,
    attributes: &'a AttributeMap,
}

fn kind(key: &GroupKey) -> &'static str {
    match key {
        GroupKey::Structure(_) => "structure",
        GroupKey::Level(_) => "level",
        GroupKey::Group(_) => "group",
    }
}

impl Serialize for BindableDescriptor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let groups: Vec<_> = self
            .attribute_groups()
            .iter()
            .map(|(key, attributes)| GroupEntry {
                key: key.label(),
                kind: kind(key),
                attributes,
            })
            .collect();

        let mut state = serializer.serialize_struct("BindableDescriptor", 4)?;
        state.serialize_field("metadata", self.metadata())?;
        state.serialize_field("grouping", &self.grouping())?;
        state.serialize_field("attributeDescriptors", self.attribute_descriptors())?;
        state.serialize_field("attributeGroups", &groups)?;
        state.end()
    }
}
