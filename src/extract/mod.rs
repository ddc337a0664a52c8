//! Extraction: turning live components into descriptor trees.
//!
//! Components describe themselves by implementing [`Bindable`]: they list
//! their own attributes and the nested components they hold. There is no
//! runtime reflection; each implementation registers what it has.
//!
//! ```ignore
//! impl Bindable for Lingo {
//!     fn metadata(&self) -> BindableMetadata {
//!         BindableMetadata::new("Lingo").with_label("Lingo clustering")
//!     }
//!
//!     fn attributes(&self) -> Vec<AttributeDescriptor> {
//!         vec![AttributeDescriptor::new("Lingo.desiredClusterCount", "usize")
//!             .with_markers([Marker::Processing, Marker::Input])]
//!     }
//!
//!     fn nested(&self) -> Vec<NestedComponent<'_>> {
//!         vec![NestedComponent::of("stemmer", &self.stemmer)]
//!     }
//! }
//!
//! let descriptor = DescriptorBuilder::new().build(&lingo)?;
//! ```

mod builder;


use crate::attribute::{AttributeDescriptor, BindableMetadata};
use crate::base::{Slot, TypeName};

pub use builder::DescriptorBuilder;

/// A configurable component that can describe its own attributes.
pub trait Bindable {
    /// Human-readable metadata about the component.
    fn metadata(&self) -> BindableMetadata;

    /// Attributes declared directly on the component.
    fn attributes(&self) -> Vec<AttributeDescriptor>;

    /// Nested configurable components, one per slot.
    fn nested(&self) -> Vec<NestedComponent<'_>> {
        Vec::new()
    }

    /// Concrete type of the component.
    fn type_name(&self) -> TypeName {
        TypeName::of::<Self>()
    }
}

/// One nested component together with the slot holding it.
pub struct NestedComponent<'a> {
    pub slot: Slot,
    pub component: &'a dyn Bindable,
}

impl<'a> NestedComponent<'a> {
    pub fn new(slot: Slot, component: &'a dyn Bindable) -> Self {
        Self { slot, component }
    }

    /// Nested component in field `field`, declared with the static type `T`.
    pub fn of<T: Bindable>(field: &str, component: &'a T) -> Self {
        Self::new(Slot::new(field, TypeName::of::<T>()), component)
    }
}
